// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::rc::Rc;
use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use crate::raw::RawStore;

/// An iterator which moves or clones the contents out of a [`Vec`], obtained by calling
/// `into_iter` on an owned vector.
///
/// If the vector was unique, elements are moved out. If it was shared, elements are cloned out
/// and the shared contents are left untouched.
///
/// [`Vec`]: super::Vec
pub struct IntoIter<T> {
	source: Source<T>,
	head: usize,
	tail: usize,
}

enum Source<T> {
	/// Elements in `head..tail` are owned by the iterator. The store's length is zero.
	Owned(RawStore<T>),
	Cloned(Rc<RawStore<T>>),
}

impl<T> IntoIter<T> {
	pub(super) fn new(inner: Rc<RawStore<T>>) -> Self {
		let tail = inner.len();
		let source = match Rc::try_unwrap(inner) {
			Ok(mut store) => {
				// Safety: the iterator takes ownership of all elements, dropping whichever it
				//  doesn't yield.
				unsafe {
					store.set_len(0);
				}
				Source::Owned(store)
			}
			Err(shared) => Source::Cloned(shared),
		};

		Self { source, head: 0, tail }
	}

	/// Returns the remaining elements as a slice.
	pub fn as_slice(&self) -> &[T] {
		match &self.source {
			// Safety: elements in `head..tail` are initialized and owned by the iterator.
			Source::Owned(store) => unsafe {
				core::slice::from_raw_parts(store.as_ptr().add(self.head), self.tail - self.head)
			},
			Source::Cloned(store) => &store.as_slice()[self.head..self.tail],
		}
	}
}

impl<T: Clone> IntoIter<T> {
	fn read_at(&self, index: usize) -> T {
		match &self.source {
			// Safety: the element is initialized, and is excluded from `head..tail` by the caller
			//  so it's never read again.
			Source::Owned(store) => unsafe {
				store.as_ptr().add(index).read()
			},
			Source::Cloned(store) => store.as_slice()[index].clone(),
		}
	}
}

impl<T: Clone> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.head == self.tail {
			return None
		}

		let index = self.head;
		self.head += 1;
		Some(self.read_at(index))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.tail - self.head;
		(len, Some(len))
	}
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<T> {
		if self.head == self.tail {
			return None
		}

		self.tail -= 1;
		Some(self.read_at(self.tail))
	}
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> { }

impl<T: Clone> FusedIterator for IntoIter<T> { }

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		if let Source::Owned(store) = &mut self.source {
			// Safety: the remaining elements are owned by the iterator and never read again. The
			//  store itself has a length of zero, so it only deallocates.
			unsafe {
				ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
					store.as_mut_ptr().add(self.head),
					self.tail - self.head
				));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::rc::Rc;
	use alloc::vec::Vec as StdVec;
	use super::super::Vec;

	#[test]
	fn unique_moves_out() {
		let marker = Rc::new(());
		let vec = Vec::from([Rc::clone(&marker), Rc::clone(&marker), Rc::clone(&marker)]);
		let mut iter = vec.into_iter();
		let first = iter.next();
		assert_eq!(Rc::strong_count(&marker), 4);
		assert_eq!(iter.len(), 2);
		drop(iter);
		// The unyielded elements were dropped, the yielded one was moved.
		assert_eq!(Rc::strong_count(&marker), 2);
		drop(first);
		assert_eq!(Rc::strong_count(&marker), 1);
	}

	#[test]
	fn shared_clones_out() {
		let vec = Vec::from([1, 2, 3]);
		let shared = vec.clone();
		let reversed: StdVec<_> = vec.into_iter().rev().collect();
		assert_eq!(reversed, [3, 2, 1]);
		assert_eq!(shared, [1, 2, 3]);
		assert!(shared.is_unique());
	}
}
