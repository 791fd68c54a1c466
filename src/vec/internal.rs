// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::rc::Rc;
use core::cmp;
use crate::macros::trace;
use crate::raw::{AllocError, RawStore};
use super::{Vec, GROWTH_FACTOR};

impl<T> Vec<T> {
	/// Collects an exact-size iterator into a new vector with a capacity of its length.
	#[track_caller]
	pub(super) fn from_exact_iter<I: ExactSizeIterator<Item = T>>(iter: I) -> Self {
		let count = iter.len();
		let mut store = RawStore::allocate(count);
		// Safety: the store was just allocated with room for `count` elements.
		unsafe {
			store.insert_from_iter(0, count, iter);
		}
		Self { inner: Rc::new(store) }
	}
}

impl<T: Clone> Vec<T> {
	/// Makes the vector unique, cloning its contents into a store of the same capacity if they
	/// are shared, and returns the now unique store.
	pub(super) fn make_unique(&mut self) -> &mut RawStore<T> {
		if !self.is_unique() {
			trace!(
				"cloning shared store of {} elements (capacity {})",
				self.len(),
				self.capacity()
			);
		}

		// The store is never weakly referenced, so this only clones when strongly shared.
		Rc::make_mut(&mut self.inner)
	}

	/// Ensures the vector has room for `additional` more elements, multiplying its capacity by the
	/// growth factor or, if that still isn't enough, growing to exactly the required capacity.
	#[track_caller]
	pub(super) fn grow_for(&mut self, additional: usize) {
		let capacity = self.capacity();
		let Some(required) = self.len().checked_add(additional) else {
			AllocError::CapacityOverflow.handle()
		};

		if required <= capacity {
			return
		}

		self.reallocate(cmp::max(capacity.saturating_mul(GROWTH_FACTOR), required));
	}

	/// Replaces the store with one of exactly `capacity`. Elements are moved if the vector is
	/// unique, otherwise they are cloned and the shared store is left untouched.
	///
	/// `capacity` must be at least the length.
	#[track_caller]
	pub(super) fn reallocate(&mut self, capacity: usize) {
		debug_assert!(capacity >= self.len(), "the new capacity should fit all elements");

		let mut target = RawStore::allocate(capacity);
		if let Some(store) = Rc::get_mut(&mut self.inner) {
			trace!(
				"moving {} elements to a new store (capacity {} -> {})",
				store.len(),
				store.capacity(),
				target.capacity()
			);

			// Safety: the target has room for all elements.
			unsafe {
				store.move_into(&mut target);
			}
			// The old, now empty buffer is released when `target` drops.
			store.swap(&mut target);
		} else {
			trace!(
				"cloning {} shared elements to a new store (capacity {} -> {})",
				self.len(),
				self.capacity(),
				target.capacity()
			);

			// Safety: the target has room for all elements.
			unsafe {
				target.extend_from_slice(self.as_slice());
			}
			self.inner = Rc::new(target);
		}
	}

	/// Replaces a shared store with a store of the same capacity holding clones of the first `len`
	/// elements. Elements past `len` are never cloned.
	pub(super) fn clone_prefix(&mut self, len: usize) {
		trace!("cloning {} of {} shared elements", len, self.len());

		let mut target = RawStore::allocate(self.capacity());
		// Safety: the target has the same capacity as the current store.
		unsafe {
			target.extend_from_slice(&self.as_slice()[..len]);
		}
		self.inner = Rc::new(target);
	}
}
