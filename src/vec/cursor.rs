// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Deref, Sub, SubAssign};
use core::ptr;
use crate::error::{OutOfRange, Result};
use super::Vec;

/// A random-access position in a [`Vec`], obtained by [`Vec::begin`], [`Vec::end`], or
/// [`Vec::cursor`].
///
/// A cursor holds its vector and an index, never a pointer to an element. Reading through the
/// cursor is bounds-checked like [`Vec::at`]; a cursor moved out of range fails on read rather
/// than reading past the end. Dereferencing an out-of-range cursor panics.
///
/// Cursors into the same vector compare by index. Cursors into different vectors are never equal
/// and have no ordering, even if the vectors share their contents.
///
/// # Examples
///
/// ```
/// use cowvec::vec::Vec;
///
/// let vec = Vec::from(["val1", "val2", "val3", "val4"]);
/// let mut cursor = vec.begin() + 1;
/// assert_eq!(*cursor, "val2");
/// assert_eq!(cursor.at_offset(2), Ok(&"val4"));
///
/// cursor += 2;
/// assert_eq!(cursor - vec.begin(), 3);
/// cursor.move_next();
/// assert_eq!(cursor, vec.end());
/// assert!(cursor.get().is_err());
/// ```
pub struct Cursor<'a, T> {
	vec: &'a Vec<T>,
	index: usize,
}

impl<'a, T> Cursor<'a, T> {
	pub(super) fn new(vec: &'a Vec<T>, index: usize) -> Self {
		Self { vec, index }
	}

	/// Returns the index the cursor points to.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the vector the cursor points into.
	pub fn vec(&self) -> &'a Vec<T> {
		self.vec
	}

	/// Returns a reference to the element at the cursor.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the cursor is not before the end of the vector.
	pub fn get(&self) -> Result<&'a T> {
		self.vec.at(self.index)
	}

	/// Returns a reference to the element `offset` places from the cursor.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the offset position is not within the vector.
	pub fn at_offset(&self, offset: isize) -> Result<&'a T> {
		self.vec.at(self.index.wrapping_add_signed(offset))
	}

	/// Advances the cursor by one place.
	pub fn move_next(&mut self) -> &mut Self {
		*self += 1;
		self
	}

	/// Moves the cursor back by one place.
	pub fn move_prev(&mut self) -> &mut Self {
		*self -= 1;
		self
	}

	/// Advances the cursor by one place, returning its previous position.
	pub fn post_inc(&mut self) -> Self {
		let prev = *self;
		self.move_next();
		prev
	}

	/// Moves the cursor back by one place, returning its previous position.
	pub fn post_dec(&mut self) -> Self {
		let prev = *self;
		self.move_prev();
		prev
	}

	/// Returns the signed distance from `origin` to this cursor.
	pub fn offset_from(&self, origin: &Self) -> isize {
		offset_between(origin.index, self.index)
	}
}

fn offset_between(from: usize, to: usize) -> isize {
	to.wrapping_sub(from) as isize
}

impl<T> Copy for Cursor<'_, T> { }
impl<T> Clone for Cursor<'_, T> {
	#[inline(always)] fn clone(&self) -> Self { *self }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Cursor")
		 .field("index", &self.index)
		 .field("element", &self.get().ok())
		 .finish()
	}
}

impl<T> Deref for Cursor<'_, T> {
	type Target = T;

	#[track_caller]
	fn deref(&self) -> &T {
		match self.get() {
			Ok(value) => value,
			Err(err) => deref_failed(err)
		}
	}
}

#[allow(clippy::panic)]
#[cold]
#[inline(never)]
#[track_caller]
fn deref_failed(err: OutOfRange) -> ! {
	panic!("cursor out of range: {err}");
}

impl<T> PartialEq for Cursor<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		ptr::eq(self.vec, other.vec) && self.index == other.index
	}
}

impl<T> Eq for Cursor<'_, T> { }

impl<T> PartialOrd for Cursor<'_, T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		ptr::eq(self.vec, other.vec).then(|| self.index.cmp(&other.index))
	}
}

impl<T> Add<isize> for Cursor<'_, T> {
	type Output = Self;

	fn add(mut self, rhs: isize) -> Self {
		self += rhs;
		self
	}
}

impl<T> Sub<isize> for Cursor<'_, T> {
	type Output = Self;

	fn sub(mut self, rhs: isize) -> Self {
		self -= rhs;
		self
	}
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
	fn add_assign(&mut self, rhs: isize) {
		self.index = self.index.wrapping_add_signed(rhs);
	}
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
	fn sub_assign(&mut self, rhs: isize) {
		self.index = self.index.wrapping_add_signed(rhs.wrapping_neg());
	}
}

impl<T> Sub for Cursor<'_, T> {
	type Output = isize;

	fn sub(self, rhs: Self) -> isize {
		self.offset_from(&rhs)
	}
}

/// A random-access position in a [`Vec`] which can modify the vector, obtained by
/// [`Vec::begin_mut`] or [`Vec::cursor_mut`].
///
/// Like [`Cursor`], every access goes through the vector. If modifying through the cursor makes
/// the vector clone its shared contents, the cursor keeps pointing to the same index in the new
/// contents.
///
/// # Examples
///
/// ```
/// use cowvec::vec::Vec;
///
/// let mut vec = Vec::from([1, 2, 3]);
/// let shared = vec.clone();
///
/// let mut cursor = vec.begin_mut();
/// cursor += 1;
/// *cursor.get_mut().unwrap() = 20;
/// cursor.insert(15);
/// assert_eq!(cursor.get(), Ok(&15));
/// cursor.move_next();
/// cursor.erase();
/// assert_eq!(cursor.get(), Ok(&3));
///
/// assert_eq!(vec, [1, 15, 3]);
/// assert_eq!(shared, [1, 2, 3]);
/// ```
pub struct CursorMut<'a, T> {
	vec: &'a mut Vec<T>,
	index: usize,
}

impl<'a, T> CursorMut<'a, T> {
	pub(super) fn new(vec: &'a mut Vec<T>, index: usize) -> Self {
		Self { vec, index }
	}

	/// Returns the index the cursor points to.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns a read-only cursor at the same position.
	pub fn as_cursor(&self) -> Cursor<'_, T> {
		Cursor::new(self.vec, self.index)
	}

	/// Returns a reference to the element at the cursor.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the cursor is not before the end of the vector.
	pub fn get(&self) -> Result<&T> {
		self.vec.at(self.index)
	}

	/// Returns a reference to the element `offset` places from the cursor.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the offset position is not within the vector.
	pub fn at_offset(&self, offset: isize) -> Result<&T> {
		self.vec.at(self.index.wrapping_add_signed(offset))
	}

	/// Advances the cursor by one place.
	pub fn move_next(&mut self) -> &mut Self {
		*self += 1;
		self
	}

	/// Moves the cursor back by one place.
	pub fn move_prev(&mut self) -> &mut Self {
		*self -= 1;
		self
	}
}

impl<T: Clone> CursorMut<'_, T> {
	/// Returns a mutable reference to the element at the cursor, cloning the vector contents first
	/// if they are shared.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the cursor is not before the end of the vector.
	pub fn get_mut(&mut self) -> Result<&mut T> {
		self.vec.at_mut(self.index)
	}

	/// Inserts `value` before the cursor, leaving the cursor at the inserted element.
	///
	/// # Panics
	///
	/// Panics if the cursor is past the end of the vector.
	#[track_caller]
	pub fn insert(&mut self, value: T) {
		self.vec.insert(self.index, value);
	}

	/// Removes the element at the cursor, leaving the cursor at the element after it. Does nothing
	/// if the vector is empty.
	///
	/// # Panics
	///
	/// Panics if the vector is not empty and the cursor is not before its end.
	#[track_caller]
	pub fn erase(&mut self) {
		self.vec.erase(self.index);
	}
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CursorMut")
		 .field("index", &self.index)
		 .field("element", &self.get().ok())
		 .finish()
	}
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
	fn add_assign(&mut self, rhs: isize) {
		self.index = self.index.wrapping_add_signed(rhs);
	}
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
	fn sub_assign(&mut self, rhs: isize) {
		self.index = self.index.wrapping_add_signed(rhs.wrapping_neg());
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::{String, ToString};
	use super::super::Vec;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn navigation() {
		let vec = Vec::from([10, 20, 30]);
		let mut cursor = vec.begin();
		assert_eq!(*cursor.post_inc(), 10);
		assert_eq!(*cursor, 20);
		assert_eq!(cursor.post_dec().index(), 1);
		assert_eq!(cursor, vec.begin());
		cursor.move_next().move_next();
		assert_eq!(*cursor, 30);
		assert_eq!(*(cursor - 1), 20);
		assert_eq!(vec.end() - vec.begin(), 3);
		assert_eq!(vec.begin() - vec.end(), -3);
	}

	#[test]
	fn ordering() {
		let vec = Vec::from([1, 2]);
		let other = vec.clone();
		assert!(vec.begin() < vec.end());
		assert!(vec.end() >= vec.begin() + 2);
		assert_ne!(vec.begin(), other.begin());
		assert_eq!(vec.begin().partial_cmp(&other.begin()), None);
	}

	#[test]
	fn before_begin_is_out_of_range() {
		let vec = Vec::from([1]);
		let mut cursor = vec.begin();
		cursor.move_prev();
		assert!(cursor.get().is_err());
		assert_eq!(cursor.at_offset(1), Ok(&1));
	}

	#[test]
	#[should_panic = "cursor out of range: index (is 1) should be < len (is 1)"]
	fn deref_end_panics() {
		let vec = Vec::from([1]);
		let _value = *vec.end();
	}

	#[test]
	fn cursor_follows_own_copy_on_write() {
		let mut vec = strings(&["a", "b", "c"]);
		let shared = vec.clone();

		let mut cursor = vec.cursor_mut(2);
		cursor.get_mut().unwrap().push('!');
		assert_eq!(cursor.get().map(String::as_str), Ok("c!"));
		cursor.move_prev();
		assert_eq!(cursor.get().map(String::as_str), Ok("b"));

		assert!(vec.is_unique());
		assert_eq!(shared, ["a", "b", "c"]);
	}

	#[test]
	fn cursor_survives_other_copy_on_write() {
		let vec = strings(&["a", "b"]);
		let mut shared = vec.clone();
		let cursor = vec.begin() + 1;

		shared.push("c".to_string());
		shared[1] = "x".to_string();

		assert_eq!(cursor.get().map(String::as_str), Ok("b"));
		assert_eq!(shared, ["a", "x", "c"]);
	}

	#[test]
	fn cursor_survives_reallocation() {
		let mut vec = Vec::from([1]);
		let mut cursor = vec.begin_mut();
		for i in 2..=5 {
			cursor.insert(i);
		}
		assert_eq!(cursor.get(), Ok(&5));
		cursor += 4;
		assert_eq!(cursor.get(), Ok(&1));
		assert_eq!(vec, [5, 4, 3, 2, 1]);
	}
}
