// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! # Sharing
//!
//! Vectors access their contents through a reference-counted *store*, which may be shared by other
//! vectors. Cloning a vector never clones its elements: the clone shares the original's store, and
//! both report the same length, capacity and contents. While a store is *shared*, reading through
//! any of its vectors is free.
//!
//! A vector holding the only reference to its store is *unique*. Any modifying method first makes
//! the vector unique: if its store is shared, the contents are cloned into a new store of the same
//! capacity, and the vector drops its reference to the old one. Modifying a vector is therefore
//! never visible through another vector, and requires the element type to implement [`Clone`].
//!
//! Methods which discard elements (truncating, clearing, popping) avoid cloning elements they
//! would immediately drop.
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions over a vector. They hold the vector
//! itself plus an index rather than a pointer into the store, so every access is bounds-checked
//! against the vector's current store, including after a [`CursorMut`] causes its vector to clone
//! its contents.

use alloc::rc::Rc;
use alloc::vec::Vec as StdVec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, Index, IndexMut, Range};
use core::slice::SliceIndex;
use crate::error::{OutOfRange, Result};
use crate::macros::{position_failed, trace};
use crate::raw::RawStore;
pub use cursor::{Cursor, CursorMut};
pub use into_iter::IntoIter;

mod cursor;
mod eq;
mod internal;
mod into_iter;

/// The number of times capacity is multiplied when an append needs more room.
pub const GROWTH_FACTOR: usize = 2;

/// A contiguous, growable array type with copy-on-write contents. Unlike [`Vec`], it can be
/// cheaply cloned in *O*(1) time, sharing its contents between clones until one of them is
/// modified.
///
/// Unique vectors are used as a [`Vec`] would be, with *O*(1) index and pop operations, and an
/// amortized *O*(1) push operation. Shared vectors are clone-on-write: the first modification
/// through a shared vector costs an *O*(*n*) clone of its contents.
///
/// # Examples
///
/// ```
/// use cowvec::vec::Vec;
///
/// let mut vec = Vec::new();
/// vec.push(1);
/// vec.push(2);
///
/// let shared = vec.clone();
/// assert!(shared.ptr_eq(&vec));
///
/// // The first push clones the contents out of the shared store
/// vec.push(3);
/// assert_eq!(vec, [1, 2, 3]);
/// assert_eq!(shared, [1, 2]);
/// assert!(!shared.ptr_eq(&vec));
/// ```
///
/// [`Vec`]: alloc::vec::Vec
pub struct Vec<T> {
	inner: Rc<RawStore<T>>,
}

impl<T> Vec<T> {
	/// Creates a new, empty vector with a capacity of one.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let vec: Vec<i32> = Vec::new();
	/// assert_eq!(vec.len(), 0);
	/// assert_eq!(vec.capacity(), 1);
	/// ```
	#[must_use]
	pub fn new() -> Self {
		Self::with_capacity(1)
	}

	/// Constructs a new, empty vector with exactly the specified capacity, or one if the capacity
	/// is zero.
	///
	/// # Panics
	///
	/// Panics if the capacity is greater than [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec: Vec<i32> = Vec::with_capacity(10);
	/// assert_eq!(vec.len(), 0);
	/// assert_eq!(vec.capacity(), 10);
	///
	/// for i in 0..10 {
	///     vec.push(i);
	/// }
	/// assert_eq!(vec.capacity(), 10);
	///
	/// // Pushing one more element doubles the capacity
	/// vec.push(11);
	/// assert_eq!(vec.capacity(), 20);
	/// ```
	#[must_use]
	#[track_caller]
	pub fn with_capacity(capacity: usize) -> Self {
		Self { inner: Rc::new(RawStore::allocate(capacity)) }
	}

	/// Returns the number of elements in the vector.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the vector contains no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the total number of elements the vector can hold without reallocating. This is
	/// never zero.
	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	/// Returns a slice over the vector contents. This never clones.
	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if `index` is not less than the length.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let vec = Vec::from(["a", "b"]);
	/// assert_eq!(vec.at(1), Ok(&"b"));
	/// assert!(vec.at(vec.len()).is_err());
	/// ```
	pub fn at(&self, index: usize) -> Result<&T> {
		self.as_slice()
			.get(index)
			.ok_or(OutOfRange::new(index, self.len()))
	}

	/// Returns a reference to the element at `index`, without bounds checking.
	///
	/// # Safety
	///
	/// `index` must be less than the length.
	pub unsafe fn get_unchecked(&self, index: usize) -> &T {
		debug_assert!(index < self.len(), "the index should be within the length");
		self.as_slice().get_unchecked(index)
	}

	/// Returns `true` if this vector holds the only reference to its contents, and can be
	/// modified without cloning.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let vec = Vec::from([1, 2, 3]);
	/// assert!(vec.is_unique());
	///
	/// let shared = vec.clone();
	/// assert!(!vec.is_unique());
	/// drop(shared);
	/// assert!(vec.is_unique());
	/// ```
	pub fn is_unique(&self) -> bool {
		self.strong_count() == 1
	}

	/// Returns the number of vectors sharing this vector's contents, including itself.
	pub fn strong_count(&self) -> usize {
		Rc::strong_count(&self.inner)
	}

	/// Returns `true` if both vectors share the same contents.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Exchanges contents with `other` in *O*(1) time, without cloning or moving elements.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut a = Vec::from([1, 2]);
	/// let mut b = Vec::from([3]);
	/// a.swap(&mut b);
	/// assert_eq!(a, [3]);
	/// assert_eq!(b, [1, 2]);
	/// ```
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(&mut self.inner, &mut other.inner);
	}

	/// Moves the contents out of this vector, leaving it empty with a capacity of one.
	#[must_use = "use `clear` to discard the contents"]
	pub fn take(&mut self) -> Self {
		mem::take(self)
	}

	/// Returns a cursor at the first element.
	pub fn begin(&self) -> Cursor<'_, T> {
		Cursor::new(self, 0)
	}

	/// Returns a cursor one past the last element.
	pub fn end(&self) -> Cursor<'_, T> {
		Cursor::new(self, self.len())
	}

	/// Returns a cursor at `index`. The index is not checked until the cursor is read.
	pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
		Cursor::new(self, index)
	}

	/// Returns a mutable cursor at the first element.
	pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
		CursorMut::new(self, 0)
	}

	/// Returns a mutable cursor at `index`. The index is not checked until the cursor is read.
	pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T> {
		CursorMut::new(self, index)
	}
}

impl<T: Clone> Vec<T> {
	/// Returns a mutable reference to the element at `index`, cloning the contents first if they
	/// are shared. Nothing is cloned if the index is out of range.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if `index` is not less than the length.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 2, 3]);
	/// let shared = vec.clone();
	///
	/// *vec.at_mut(0).unwrap() = 10;
	/// assert_eq!(vec, [10, 2, 3]);
	/// assert_eq!(shared, [1, 2, 3]);
	/// ```
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len();
		if index >= len {
			return Err(OutOfRange::new(index, len))
		}

		Ok(&mut self.make_unique().as_mut_slice()[index])
	}

	/// Returns a mutable reference to the element at `index`, without bounds checking. The
	/// contents are cloned first if they are shared.
	///
	/// # Safety
	///
	/// `index` must be less than the length.
	pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
		debug_assert!(index < self.len(), "the index should be within the length");
		self.make_unique().as_mut_slice().get_unchecked_mut(index)
	}

	/// Returns a mutable slice over the vector contents, cloning them first if they are shared.
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		self.make_unique().as_mut_slice()
	}

	/// Reallocates the vector to hold exactly `capacity` elements, if it's greater than the current
	/// capacity. Otherwise, this does nothing.
	///
	/// Elements are moved to the new allocation if the vector is unique, or cloned if it's shared.
	///
	/// # Panics
	///
	/// Panics if the new capacity is greater than [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from(["val1", "val2", "val3"]);
	/// vec.reserve(30);
	/// assert_eq!(vec.len(), 3);
	/// assert_eq!(vec.capacity(), 30);
	///
	/// vec.reserve(10);
	/// assert_eq!(vec.capacity(), 30);
	/// ```
	#[track_caller]
	pub fn reserve(&mut self, capacity: usize) {
		if capacity > self.capacity() {
			self.reallocate(capacity);
		}
	}

	/// Shrinks the capacity to the length, unless the vector is empty or already full.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 2, 3]);
	/// vec.reserve(100);
	/// vec.shrink_to_fit();
	/// assert_eq!(vec.capacity(), 3);
	/// ```
	#[track_caller]
	pub fn shrink_to_fit(&mut self) {
		let len = self.len();
		if len == 0 || len == self.capacity() {
			return
		}

		trace!("shrinking store to fit {len} elements");
		self.reallocate(len);
	}

	/// Appends an element to the back of the vector, doubling its capacity if it's full.
	///
	/// # Panics
	///
	/// Panics if the new capacity is greater than [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::new();
	/// vec.push("val1");
	/// vec.push("val2");
	/// assert_eq!(vec, ["val1", "val2"]);
	/// assert_eq!(vec.capacity(), 2);
	/// ```
	#[track_caller]
	pub fn push(&mut self, value: T) {
		self.grow_for(1);
		// Safety: `grow_for` ensures there is room for one more element.
		unsafe {
			self.make_unique().push_unchecked(value);
		}
	}

	/// Removes the last element and returns it, or `None` if the vector is empty.
	///
	/// If the vector is shared, the removed element is cloned out of the shared contents, and the
	/// remaining elements are cloned into a new store.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 2, 3]);
	/// let shared = vec.clone();
	/// assert_eq!(vec.pop(), Some(3));
	/// assert_eq!(vec, [1, 2]);
	/// assert_eq!(shared, [1, 2, 3]);
	/// ```
	pub fn pop(&mut self) -> Option<T> {
		if let Some(store) = Rc::get_mut(&mut self.inner) {
			return store.pop()
		}

		let last = self.as_slice().last()?.clone();
		self.truncate(self.len() - 1);
		Some(last)
	}

	/// Shortens the vector to `len` elements, dropping the rest. Does nothing if `len` is not less
	/// than the current length. The capacity is unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 2, 3, 4]);
	/// vec.truncate(1);
	/// assert_eq!(vec, [1]);
	/// assert_eq!(vec.capacity(), 4);
	/// ```
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len() {
			return
		}

		if let Some(store) = Rc::get_mut(&mut self.inner) {
			store.truncate(len);
		} else {
			self.clone_prefix(len);
		}
	}

	/// Removes all elements, keeping the capacity.
	pub fn clear(&mut self) {
		self.truncate(0);
	}

	/// Resizes the vector to `new_len`, filling new slots with clones of `value`.
	///
	/// If `new_len` exceeds the capacity, the vector is first reallocated to twice `new_len`.
	///
	/// # Panics
	///
	/// Panics if the new capacity is greater than [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from(["a"]);
	/// vec.resize(3, "b");
	/// assert_eq!(vec, ["a", "b", "b"]);
	/// assert_eq!(vec.capacity(), 6);
	///
	/// vec.resize(2, "c");
	/// assert_eq!(vec, ["a", "b"]);
	/// ```
	#[track_caller]
	pub fn resize(&mut self, new_len: usize, value: T) {
		self.resize_with(new_len, || value.clone());
	}

	/// Resizes the vector to `new_len`, filling new slots with the element type's default value.
	///
	/// # Panics
	///
	/// Panics if the new capacity is greater than [`isize::MAX`] *bytes*.
	#[track_caller]
	pub fn resize_default(&mut self, new_len: usize)
	where
		T: Default
	{
		self.resize_with(new_len, T::default);
	}

	/// Resizes the vector to `new_len`, filling new slots with values returned by `fill`.
	///
	/// # Panics
	///
	/// Panics if the new capacity is greater than [`isize::MAX`] *bytes*.
	#[track_caller]
	pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, fill: F) {
		let len = self.len();
		let Some(fill_len) = new_len.checked_sub(len) else {
			self.truncate(new_len);
			return
		};

		if fill_len == 0 {
			return
		}

		if new_len > self.capacity() {
			let capacity = new_len
				.checked_mul(GROWTH_FACTOR)
				.unwrap_or(new_len);
			self.reallocate(capacity);
		}

		// Safety: the capacity was checked to fit `new_len` elements.
		unsafe {
			self.make_unique().extend_with(fill_len, fill);
		}
	}

	/// Removes the element at `position`, shifting all elements after it back by one. Returns a
	/// cursor at the element now at `position`, or the end cursor if the last element was removed.
	/// Does nothing on an empty vector.
	///
	/// # Panics
	///
	/// Panics if the vector is not empty and `position` is not less than the length.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 2, 3]);
	/// let next = vec.erase(1);
	/// assert_eq!(*next, 3);
	/// assert_eq!(vec, [1, 3]);
	/// ```
	#[track_caller]
	pub fn erase(&mut self, position: usize) -> Cursor<'_, T> {
		if self.is_empty() {
			return self.end()
		}

		drop(self.remove(position));
		Cursor::new(self, position)
	}

	/// Removes the elements in the half-open range `first..last`, shifting all elements after it
	/// back to fill the gap. Returns a cursor at the element now at `first`. Does nothing and
	/// returns the end cursor if the vector or the range is empty, including when `first` is
	/// greater than `last`.
	///
	/// # Panics
	///
	/// Panics if the range is not empty and `last` is greater than the length.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from(["val1", "val2", "val3", "val4", "val5", "val6"]);
	/// vec.erase_range(1..4);
	/// assert_eq!(vec, ["val1", "val5", "val6"]);
	/// ```
	#[track_caller]
	pub fn erase_range(&mut self, Range { start, end }: Range<usize>) -> Cursor<'_, T> {
		let len = self.len();
		if len == 0 || start >= end {
			return self.end()
		}

		if end > len {
			position_failed!("erasure end", "<=", end, len);
		}

		if start == 0 && end == len {
			self.clear();
		} else {
			// Safety: the range is checked within bounds above, and the store is unique.
			unsafe {
				self.make_unique().remove_range(start, end);
			}
		}
		Cursor::new(self, start)
	}

	/// Removes and returns the element at `index`, shifting all elements after it back by one.
	///
	/// # Panics
	///
	/// Panics if `index` is not less than the length.
	#[track_caller]
	pub fn remove(&mut self, index: usize) -> T {
		let len = self.len();
		if index >= len {
			position_failed!("removal", "<", index, len);
		}

		// Safety: index is checked within bounds above, and the store is unique.
		unsafe {
			self.make_unique().remove(index)
		}
	}

	/// Inserts `value` before `position`, shifting all elements after it forward. Returns a cursor
	/// at the inserted element.
	///
	/// # Panics
	///
	/// Panics if `position` is greater than the length, or if the new capacity is greater than
	/// [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from(["val1", "val2", "val3"]);
	/// let inserted = vec.insert(1, "insert");
	/// assert_eq!(*inserted, "insert");
	/// assert_eq!(vec, ["val1", "insert", "val2", "val3"]);
	/// ```
	#[track_caller]
	pub fn insert(&mut self, position: usize, value: T) -> Cursor<'_, T> {
		self.insert_iter(position, [value])
	}

	/// Inserts `count` clones of `value` before `position`. Returns a cursor at the first inserted
	/// element, or at `position` if `count` is zero.
	///
	/// # Panics
	///
	/// Panics if `position` is greater than the length, or if the new capacity is greater than
	/// [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 4]);
	/// vec.insert_n(1, 2, 0);
	/// assert_eq!(vec, [1, 0, 0, 4]);
	/// ```
	#[track_caller]
	pub fn insert_n(&mut self, position: usize, count: usize, value: T) -> Cursor<'_, T> {
		self.insert_iter(position, core::iter::repeat_n(value, count))
	}

	/// Inserts clones of the elements in `values` before `position`. Returns a cursor at the first
	/// inserted element, or at `position` if `values` is empty.
	///
	/// # Panics
	///
	/// Panics if `position` is greater than the length, or if the new capacity is greater than
	/// [`isize::MAX`] *bytes*.
	///
	/// # Examples
	///
	/// ```
	/// use cowvec::vec::Vec;
	///
	/// let mut vec = Vec::from([1, 4]);
	/// vec.insert_from_slice(1, &[2, 3]);
	/// assert_eq!(vec, [1, 2, 3, 4]);
	/// ```
	#[track_caller]
	pub fn insert_from_slice(&mut self, position: usize, values: &[T]) -> Cursor<'_, T> {
		self.insert_iter(position, values.iter().cloned())
	}

	/// Inserts the values of an exact-size iterator before `position`. Returns a cursor at the
	/// first inserted element, or at `position` if the iterator is empty.
	///
	/// Inserting at the end never shifts elements. If the iterator yields fewer values than it
	/// reported, only the yielded values are inserted.
	///
	/// # Panics
	///
	/// Panics if `position` is greater than the length, or if the new capacity is greater than
	/// [`isize::MAX`] *bytes*.
	#[track_caller]
	pub fn insert_iter<I>(&mut self, position: usize, values: I) -> Cursor<'_, T>
	where
		I: IntoIterator<Item = T>,
		I::IntoIter: ExactSizeIterator,
	{
		let len = self.len();
		if position > len {
			position_failed!("insertion", "<=", position, len);
		}

		let values = values.into_iter();
		let count = values.len();
		if count > 0 {
			// Growing may reallocate, but only the numeric position is kept across it.
			self.grow_for(count);
			// Safety: the position is checked within bounds above, and `grow_for` ensures there
			//  is room for `count` more elements.
			unsafe {
				self.make_unique().insert_from_iter(position, count, values);
			}
		}
		Cursor::new(self, position)
	}
}

impl<T> Default for Vec<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Clones the vector in *O*(1) time, sharing its contents.
impl<T> Clone for Vec<T> {
	fn clone(&self) -> Self {
		Self { inner: Rc::clone(&self.inner) }
	}
}

impl<T: fmt::Debug> fmt::Debug for Vec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_slice(), f)
	}
}

impl<T> Deref for Vec<T> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> AsRef<[T]> for Vec<T> {
	fn as_ref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> Borrow<[T]> for Vec<T> {
	fn borrow(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vec<T> {
	type Output = I::Output;

	fn index(&self, index: I) -> &I::Output {
		Index::index(self.as_slice(), index)
	}
}

/// Mutable indexing clones the contents first if they are shared.
impl<T: Clone, I: SliceIndex<[T]>> IndexMut<I> for Vec<T> {
	fn index_mut(&mut self, index: I) -> &mut I::Output {
		IndexMut::index_mut(self.as_mut_slice(), index)
	}
}

impl<T: Eq> Eq for Vec<T> { }

impl<T: PartialOrd> PartialOrd for Vec<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.as_slice().partial_cmp(other.as_slice())
	}
}

impl<T: Ord> Ord for Vec<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_slice().cmp(other.as_slice())
	}
}

impl<T: Hash> Hash for Vec<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state);
	}
}

impl<T> From<StdVec<T>> for Vec<T> {
	#[track_caller]
	fn from(value: StdVec<T>) -> Self {
		Self::from_exact_iter(value.into_iter())
	}
}

impl<T, const N: usize> From<[T; N]> for Vec<T> {
	#[track_caller]
	fn from(value: [T; N]) -> Self {
		Self::from_exact_iter(value.into_iter())
	}
}

impl<T: Clone> From<&[T]> for Vec<T> {
	#[track_caller]
	fn from(value: &[T]) -> Self {
		Self::from_exact_iter(value.iter().cloned())
	}
}

impl<T: Clone, const N: usize> From<&[T; N]> for Vec<T> {
	#[track_caller]
	fn from(value: &[T; N]) -> Self {
		Self::from_exact_iter(value.iter().cloned())
	}
}

impl<T> FromIterator<T> for Vec<T> {
	#[track_caller]
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		iter.into_iter().collect::<StdVec<_>>().into()
	}
}

impl<T: Clone> Extend<T> for Vec<T> {
	#[track_caller]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.push(value);
		}
	}
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Vec<T> {
	#[track_caller]
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().cloned());
	}
}

impl<'a, T> IntoIterator for &'a Vec<T> {
	type Item = &'a T;
	type IntoIter = core::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

/// Moves the elements out if the vector is unique, or clones them out if it's shared.
impl<T: Clone> IntoIterator for Vec<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> IntoIter<T> {
		IntoIter::new(self.inner)
	}
}
