// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::rc::Rc;
use cowvec::prelude::*;

// Run with `--test-threads=1` to read the log sensibly.
fn init_log() {
	let _ = simple_logger::SimpleLogger::new().without_timestamps().init();
}

fn strings<const N: usize>(values: [&str; N]) -> CowVec<String> {
	values.into_iter().map(String::from).collect()
}

/// Counts live instances, to check that no element is leaked or dropped twice.
#[derive(Debug)]
struct Tracked {
	value: u32,
	live: Rc<Cell<isize>>,
}

impl Tracked {
	fn new(value: u32, live: &Rc<Cell<isize>>) -> Self {
		live.set(live.get() + 1);
		Self { value, live: Rc::clone(live) }
	}
}

impl Clone for Tracked {
	fn clone(&self) -> Self {
		Self::new(self.value, &self.live)
	}
}

impl Drop for Tracked {
	fn drop(&mut self) {
		self.live.set(self.live.get() - 1);
	}
}

fn values(vec: &CowVec<Tracked>) -> Vec<u32> {
	vec.iter().map(|t| t.value).collect()
}

#[test]
fn push_keeps_order() {
	init_log();
	let mut vec = CowVec::new();
	for i in 0..37 {
		vec.push(i);
		assert_eq!(vec.len(), i + 1);
	}
	assert!(vec.iter().copied().eq(0..37));
}

#[test]
fn copy_isolation() {
	init_log();
	let mut a = strings(["a", "b", "c"]);
	let mut b = a.clone();

	b.push("d".into());
	b[0].push('!');
	assert_eq!(a, ["a", "b", "c"]);
	assert_eq!(b, ["a!", "b", "c", "d"]);

	let c = a.clone();
	a.erase(1);
	a.insert(0, "z".into());
	assert_eq!(a, ["z", "a", "c"]);
	assert_eq!(c, ["a", "b", "c"]);
	assert_eq!(b, ["a!", "b", "c", "d"]);
}

#[test]
fn copy_then_push_to_copy() {
	let a = CowVec::<String>::new();
	let mut b = a.clone();
	b.push("value".into());
	assert_eq!(a.len(), 0);
	assert_eq!(b.len(), 1);
}

#[test]
fn reserve() {
	init_log();
	let mut vec = strings(["val1", "val2", "val3"]);
	assert_eq!(vec.len(), 3);

	vec.reserve(2);
	assert_eq!(vec.capacity(), 3);

	vec.reserve(30);
	assert_eq!(vec.len(), 3);
	assert_eq!(vec.capacity(), 30);
	assert_eq!(vec, ["val1", "val2", "val3"]);
}

#[test]
fn reserve_shared() {
	let mut vec = strings(["val1", "val2"]);
	let shared = vec.clone();
	vec.reserve(10);
	assert_eq!(vec.capacity(), 10);
	assert_eq!(shared.capacity(), 2);
	assert_eq!(vec, shared);
	assert!(!vec.ptr_eq(&shared));
}

#[test]
fn shrink_to_fit() {
	init_log();
	let mut vec = strings(["val1", "val2", "val3"]);
	vec.reserve(100);
	vec.shrink_to_fit();
	assert_eq!(vec.capacity(), 3);
	assert_eq!(vec, ["val1", "val2", "val3"]);

	let mut empty = CowVec::<String>::with_capacity(8);
	empty.shrink_to_fit();
	assert_eq!(empty.capacity(), 8);
}

#[test]
fn erase_one() {
	let mut vec = strings(["val1", "val2", "val3", "val4"]);
	let next = vec.erase(1);
	assert_eq!(next.index(), 1);
	assert_eq!(*next, "val3");
	assert_eq!(vec, ["val1", "val3", "val4"]);
}

#[test]
fn erase_range() {
	let mut vec = strings(["val1", "val2", "val3", "val4", "val5", "val6"]);
	let first = vec.begin() + 1;
	let last = vec.begin() + 4;
	let range = first.index()..last.index();

	let next = vec.erase_range(range);
	assert_eq!(*next, "val5");
	assert_eq!(vec, ["val1", "val5", "val6"]);
}

#[test]
fn insert_one() {
	let mut vec = strings(["val1", "val2", "val3"]);
	let position = (vec.begin() + 1).index();
	vec.insert(position, "insert".into());
	assert_eq!(vec, ["val1", "insert", "val2", "val3"]);
}

#[test]
fn insert_forms() {
	let mut vec = CowVec::from([1, 6]);
	vec.insert_n(1, 2, 0);
	vec.insert_from_slice(3, &[4, 5]);
	vec.insert_iter(1, [2, 3]);
	assert_eq!(vec, [1, 2, 3, 0, 0, 4, 5, 6]);

	let end = vec.len();
	let at = vec.insert_n(end, 0, 9).index();
	assert_eq!(at, end);
	assert_eq!(vec.len(), 8);
}

#[test]
fn at_end_fails() {
	let mut vec = CowVec::new();
	for len in 0..5 {
		let err = vec.at(vec.len()).unwrap_err();
		assert_eq!((err.index(), err.length()), (len, len));
		assert!(vec.at_mut(len).is_err());
		vec.push(len);
	}
	vec.clear();
	assert!(vec.at(0).is_err());
}

#[test]
fn swap_and_take() {
	let mut a = CowVec::from([1, 2, 3]);
	let mut b = CowVec::with_capacity(7);
	a.swap(&mut b);
	assert!(a.is_empty());
	assert_eq!(a.capacity(), 7);
	assert_eq!(b, [1, 2, 3]);

	let moved = b.take();
	assert_eq!(moved, [1, 2, 3]);
	assert_eq!(b.capacity(), 1);
}

#[test]
fn no_leaks_or_double_drops() {
	init_log();
	let live = Rc::new(Cell::new(0));
	{
		let mut a = CowVec::new();
		for i in 0..10 {
			a.push(Tracked::new(i, &live));
		}
		assert_eq!(live.get(), 10);

		let mut b = a.clone();
		assert_eq!(live.get(), 10);

		// Clone-on-write
		b.push(Tracked::new(10, &live));
		assert_eq!(live.get(), 21);

		b.erase_range(2..5);
		assert_eq!(live.get(), 18);
		b.erase(0);
		assert_eq!(live.get(), 17);
		b.insert_n(1, 3, Tracked::new(99, &live));
		assert_eq!(live.get(), 20);
		assert_eq!(values(&b), [1, 99, 99, 99, 5, 6, 7, 8, 9, 10]);

		b.resize(3, Tracked::new(0, &live));
		assert_eq!(live.get(), 13);
		b.shrink_to_fit();
		assert_eq!(live.get(), 13);

		let c = a.clone();
		a.truncate(4);
		assert_eq!(live.get(), 17);
		assert_eq!(values(&a), [0, 1, 2, 3]);
		assert_eq!(c.len(), 10);

		assert_eq!(a.pop().map(|t| t.value), Some(3));
		assert_eq!(live.get(), 16);
	}
	assert_eq!(live.get(), 0);
}

#[test]
fn into_iter_partial() {
	let live = Rc::new(Cell::new(0));
	let vec: CowVec<_> = (0..4).map(|i| Tracked::new(i, &live)).collect();
	let mut iter = vec.into_iter();
	assert_eq!(iter.next().map(|t| t.value), Some(0));
	assert_eq!(iter.next_back().map(|t| t.value), Some(3));
	assert_eq!(live.get(), 2);
	drop(iter);
	assert_eq!(live.get(), 0);
}

#[test]
fn cursor_walk() {
	let vec = CowVec::from([1, 2, 3, 4]);
	let mut cursor = vec.begin();
	let mut sum = 0;
	while cursor != vec.end() {
		sum += *cursor.post_inc();
	}
	assert_eq!(sum, 10);
	assert_eq!(cursor.at_offset(-1), Ok(&4));
	assert_eq!(cursor - vec.begin(), 4);
}

#[test]
fn cursor_mut_erase_all() {
	let mut vec = strings(["a", "b", "c"]);
	let shared = vec.clone();
	let mut cursor = vec.begin_mut();
	while cursor.get().is_ok() {
		cursor.erase();
	}
	assert!(vec.is_empty());
	assert_eq!(shared.len(), 3);
}
