// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! The backing store: an owned, contiguous buffer of element slots, of which only the first `len`
//! are initialized.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::{Layout, LayoutError};
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::{cmp, mem, slice};

pub struct RawStore<T> {
	ptr: NonNull<T>,
	cap: usize,
	len: usize,
	_t: PhantomData<T>,
}

impl<T> RawStore<T> {
	const IS_ZST: bool = size_of::<T>() == 0;

	/// Allocates a store with room for `cap` elements, or at least one.
	///
	/// # Panics
	///
	/// Panics if the capacity overflows `isize::MAX` bytes, or aborts if allocation fails.
	#[track_caller]
	pub fn allocate(cap: usize) -> Self {
		match Self::try_allocate(cap) {
			Ok(store) => store,
			Err(err) => err.handle()
		}
	}

	pub fn try_allocate(cap: usize) -> Result<Self, AllocError> {
		let cap = cmp::max(cap, 1);

		let ptr = if Self::IS_ZST {
			NonNull::dangling()
		} else {
			let layout = Layout::array::<T>(cap)?;
			// Safety: `T` is not zero-sized and `cap` is non-zero, so the layout has a non-zero
			//  size.
			let ptr = unsafe { alloc(layout) };
			NonNull::new(ptr.cast()).ok_or(AllocError::Alloc { layout })?
		};

		Ok(Self { ptr, cap, len: 0, _t: PhantomData })
	}

	pub const fn len(&self) -> usize { self.len }

	pub const fn capacity(&self) -> usize { self.cap }

	pub const fn as_ptr(&self) -> *const T { self.ptr.as_ptr() }

	pub fn as_mut_ptr(&mut self) -> *mut T { self.ptr.as_ptr() }

	pub fn as_slice(&self) -> &[T] {
		// Safety: the first `len` elements are initialized, and the pointer is aligned and
		//  non-null.
		unsafe {
			slice::from_raw_parts(self.ptr.as_ptr(), self.len)
		}
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		// Safety: the first `len` elements are initialized, and the pointer is aligned and
		//  non-null.
		unsafe {
			slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len)
		}
	}

	/// Sets the length.
	///
	/// # Safety
	///
	/// Elements within `new_len` must be initialized. Elements past `new_len` are forgotten, not
	/// dropped.
	pub unsafe fn set_len(&mut self, new_len: usize) {
		debug_assert!(new_len <= self.cap, "the length should be within the capacity");
		self.len = new_len;
	}

	/// Exchanges buffers, lengths and capacities with `other`. No elements are moved.
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other);
	}

	/// Writes `value` past the last element.
	///
	/// # Safety
	///
	/// The store must not be full.
	pub unsafe fn push_unchecked(&mut self, value: T) {
		debug_assert!(self.len < self.cap, "the store should not be full");
		self.ptr.as_ptr().add(self.len).write(value);
		self.len += 1;
	}

	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			return None
		}

		self.len -= 1;
		// Safety: the element at the old last index is initialized, and is no longer counted by
		//  the length.
		unsafe {
			Some(self.ptr.as_ptr().add(self.len).read())
		}
	}

	/// Drops all elements past `new_len`. Does nothing if `new_len` is not less than the length.
	pub fn truncate(&mut self, new_len: usize) {
		let Some(remaining_len) = self.len.checked_sub(new_len) else { return };

		// Safety: elements in `new_len..len` are initialized.
		let tail = unsafe {
			ptr::slice_from_raw_parts_mut(self.ptr.as_ptr().add(new_len), remaining_len)
		};

		// Set the length before dropping, in case `T::drop` panics.
		self.len = new_len;

		// Safety: the tail is no longer counted by the length, so it's never touched again.
		unsafe {
			ptr::drop_in_place(tail);
		}
	}

	/// Removes and returns the element at `index`, shifting the tail back by one.
	///
	/// # Safety
	///
	/// `index` must be less than the length.
	pub unsafe fn remove(&mut self, index: usize) -> T {
		debug_assert!(index < self.len, "the index should be within the length");
		let ptr = self.ptr.as_ptr().add(index);
		// Keep a copy of the value on the stack and in the store simultaneously.
		let value = ptr.read();
		// Shift everything back to fill the hole.
		ptr::copy(ptr.add(1), ptr, self.len - index - 1);
		self.len -= 1;
		value
	}

	/// Drops the elements in `start..end`, shifting the tail back to fill the gap.
	///
	/// # Safety
	///
	/// `start` must be less than or equal to `end`, which must be less than or equal to the
	/// length.
	pub unsafe fn remove_range(&mut self, start: usize, end: usize) {
		debug_assert!(start <= end && end <= self.len, "the range should be within the length");
		let base = self.ptr.as_ptr();
		let tail_len = self.len - end;

		// A panicking destructor leaks the tail instead of dropping it twice.
		self.len = start;
		ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));

		ptr::copy(base.add(end), base.add(start), tail_len);
		self.len = start + tail_len;
	}

	/// Opens a gap of `count` slots at `index`, then fills it from `iter`. If the iterator yields
	/// fewer than `count` values, or panics, the unfilled part of the gap is closed again.
	///
	/// # Safety
	///
	/// `index` must be less than or equal to the length, and the store must have room for `count`
	/// more elements.
	pub unsafe fn insert_from_iter<I: Iterator<Item = T>>(&mut self, index: usize, count: usize, iter: I) {
		struct Gap<'a, T> {
			store: &'a mut RawStore<T>,
			index: usize,
			count: usize,
			filled: usize,
			tail_len: usize,
		}

		impl<T> Drop for Gap<'_, T> {
			fn drop(&mut self) {
				let Self { index, count, filled, tail_len, .. } = *self;
				let base = self.store.ptr.as_ptr();
				if filled < count {
					// Safety: the tail was moved to `index + count`, and both ranges are within
					//  the allocation.
					unsafe {
						ptr::copy(base.add(index + count), base.add(index + filled), tail_len);
					}
				}
				self.store.len = index + filled + tail_len;
			}
		}

		debug_assert!(index <= self.len, "the index should be within the length");
		debug_assert!(self.cap - self.len >= count, "the store should have room for the gap");

		let base = self.ptr.as_ptr();
		let tail_len = self.len - index;
		ptr::copy(base.add(index), base.add(index + count), tail_len);
		// Until the gap is filled, the moved tail is owned by the guard.
		self.len = index;

		let mut gap = Gap { store: self, index, count, filled: 0, tail_len };
		for value in iter.take(count) {
			base.add(index + gap.filled).write(value);
			gap.filled += 1;
		}
	}

	/// Appends `count` values produced by `fill`.
	///
	/// # Safety
	///
	/// The store must have room for `count` more elements.
	pub unsafe fn extend_with<F: FnMut() -> T>(&mut self, count: usize, mut fill: F) {
		debug_assert!(self.cap - self.len >= count, "the store should have room for the values");
		for _ in 0..count {
			self.push_unchecked(fill());
		}
	}

	/// Appends clones of each element in `values`.
	///
	/// # Safety
	///
	/// The store must have room for `values.len()` more elements.
	pub unsafe fn extend_from_slice(&mut self, values: &[T])
	where
		T: Clone
	{
		debug_assert!(self.cap - self.len >= values.len(), "the store should have room for the values");
		for value in values {
			self.push_unchecked(value.clone());
		}
	}

	/// Moves all elements to the end of `target`, leaving this store empty.
	///
	/// # Safety
	///
	/// `target` must have room for all elements in this store.
	pub unsafe fn move_into(&mut self, target: &mut Self) {
		debug_assert!(target.cap - target.len >= self.len, "the target should have room for the elements");
		ptr::copy_nonoverlapping(
			self.ptr.as_ptr(),
			target.ptr.as_ptr().add(target.len),
			self.len
		);
		target.len += mem::take(&mut self.len);
	}
}

/// Duplicates the store into a new buffer of the same capacity.
impl<T: Clone> Clone for RawStore<T> {
	#[track_caller]
	fn clone(&self) -> Self {
		let mut store = Self::allocate(self.cap);
		// Safety: the new store has the same capacity as this one.
		unsafe {
			store.extend_from_slice(self.as_slice());
		}
		store
	}
}

impl<T> Drop for RawStore<T> {
	fn drop(&mut self) {
		struct DropGuard<T> {
			ptr: NonNull<T>,
			cap: usize,
		}

		impl<T> Drop for DropGuard<T> {
			fn drop(&mut self) {
				if RawStore::<T>::IS_ZST {
					return
				}

				// Safety: the memory was allocated with this layout by `try_allocate`, so it's
				//  known not to overflow.
				unsafe {
					let layout = Layout::from_size_align_unchecked(
						size_of::<T>() * self.cap,
						align_of::<T>()
					);
					dealloc(self.ptr.as_ptr().cast(), layout);
				}
			}
		}

		// Deallocate even if `ptr::drop_in_place` panics.
		let g = DropGuard { ptr: self.ptr, cap: self.cap };
		let elements: *mut [T] = self.as_mut_slice();
		// Safety: the elements are initialized, and are never touched again.
		unsafe {
			ptr::drop_in_place(elements);
		}
		drop(g);
	}
}

pub enum AllocError {
	CapacityOverflow,
	Alloc {
		layout: Layout
	}
}

impl AllocError {
	#[allow(clippy::panic)]
	#[cold]
	#[inline(never)]
	#[track_caller]
	pub fn handle(self) -> ! {
		match self {
			Self::CapacityOverflow => panic!("capacity overflow"),
			Self::Alloc { layout } => handle_alloc_error(layout)
		}
	}
}

impl From<LayoutError> for AllocError {
	fn from(_: LayoutError) -> Self {
		Self::CapacityOverflow
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::{String, ToString};
	use super::RawStore;

	fn store_of(values: &[&str], cap: usize) -> RawStore<String> {
		let mut store = RawStore::allocate(cap);
		for value in values {
			// Safety: tests never exceed the requested capacity.
			unsafe {
				store.push_unchecked(value.to_string());
			}
		}
		store
	}

	#[test]
	fn default_capacity() {
		let store = RawStore::<String>::allocate(0);
		assert_eq!(store.len(), 0);
		assert_eq!(store.capacity(), 1);
	}

	#[test]
	fn with_capacity() {
		let store = RawStore::<String>::allocate(5);
		assert_eq!(store.len(), 0);
		assert_eq!(store.capacity(), 5);
	}

	#[test]
	fn swap() {
		let mut first = store_of(&["first"], 5);
		let mut second = store_of(&["second"], 3);

		first.swap(&mut second);

		assert_eq!(first.capacity(), 3);
		assert_eq!(first.as_slice(), ["second"]);
		assert_eq!(second.capacity(), 5);
		assert_eq!(second.as_slice(), ["first"]);
	}

	#[test]
	fn duplicate() {
		let original = store_of(&["copy"], 5);
		let copy = original.clone();

		assert_eq!(copy.capacity(), original.capacity());
		assert_eq!(copy.len(), original.len());
		assert_eq!(copy.as_slice(), original.as_slice());
		assert_ne!(copy.as_ptr(), original.as_ptr());
	}

	#[test]
	fn truncate_drops_tail() {
		let mut store = store_of(&["a", "b", "c"], 3);
		store.truncate(2);
		assert_eq!(store.as_slice(), ["a", "b"]);
		store.truncate(5);
		assert_eq!(store.len(), 2);
		store.truncate(0);
		assert_eq!(store.len(), 0);
		assert_eq!(store.capacity(), 3);
	}

	#[test]
	fn remove_range() {
		let mut store = store_of(&["1", "2", "3", "4", "5"], 5);
		// Safety: the range is within the length.
		unsafe {
			store.remove_range(1, 3);
		}
		assert_eq!(store.as_slice(), ["1", "4", "5"]);
	}

	#[test]
	fn insert_short_iterator() {
		let mut store = store_of(&["a", "d"], 6);
		// The iterator yields one fewer value than the gap.
		// Safety: there is room for three more elements.
		unsafe {
			store.insert_from_iter(1, 3, ["b".to_string(), "c".to_string()].into_iter());
		}
		assert_eq!(store.as_slice(), ["a", "b", "c", "d"]);
	}

	#[test]
	fn move_into_empties_source() {
		let mut source = store_of(&["x", "y"], 2);
		let mut target = RawStore::allocate(4);
		// Safety: the target has room for both elements.
		unsafe {
			source.move_into(&mut target);
		}
		assert_eq!(source.len(), 0);
		assert_eq!(target.as_slice(), ["x", "y"]);
	}

	#[test]
	fn zero_sized() {
		let mut store = RawStore::<()>::allocate(3);
		// Safety: there is room for three elements.
		unsafe {
			store.extend_with(3, || ());
		}
		assert_eq!(store.pop(), Some(()));
		assert_eq!(store.len(), 2);
		assert_eq!(store.capacity(), 3);
	}
}
