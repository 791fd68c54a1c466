// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
	clippy::alloc_instead_of_core,
	clippy::as_underscore,
	clippy::assertions_on_result_states,
	clippy::clone_on_ref_ptr,
	clippy::decimal_literal_representation,
	clippy::deref_by_slicing,
	clippy::else_if_without_else,
	clippy::empty_drop,
	clippy::empty_structs_with_brackets,
	clippy::error_impl_error,
	clippy::exhaustive_enums,
	clippy::if_then_some_else_none,
	clippy::impl_trait_in_params,
	clippy::infinite_loop,
	clippy::map_err_ignore,
	clippy::mem_forget,
	clippy::missing_assert_message,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	clippy::missing_safety_doc,
	clippy::panic,
	clippy::partial_pub_fields,
	clippy::redundant_type_annotations,
	clippy::ref_patterns,
	clippy::renamed_function_params,
	clippy::semicolon_inside_block,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::undocumented_unsafe_blocks,
	clippy::unwrap_used,
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! # `cowvec`
//!
//! `cowvec` provides a growable vector with copy-on-write value semantics. Cloning a vector takes
//! *O*(1) time: the clone shares its contents with the original rather than cloning each element.
//! The first modification through either vector clones the shared contents into storage of its
//! own, so changes are never visible through another vector.
//!
//! | Type | Layout | [`Clone`] complexity | Modification when shared |
//! |------|--------|----------------------|--------------------------|
//! | [`Vec<T>`][StdVec]     | pointer, capacity, length | *O*(n) | n/a                   |
//! | [`Rc<[T]>`][Rc]        | pointer, length           | *O*(1) | not allowed           |
//! | [`Vec<T>`][CowVec]     | pointer                   | *O*(1) | clones, then modifies |
//!
//! # Sharing Rules
//!
//! A vector's elements live in a reference-counted *store* holding the length, the capacity, and
//! the element buffer. Reading never clones. Every modifying method first checks whether the
//! vector holds the only reference to its store; if not, the store is cloned with the same
//! capacity and the vector switches to the clone. This is why modifying methods require
//! `T: Clone`, while cloning the vector itself does not.
//!
//! Sharing is a value-semantics optimization, not a concurrency mechanism: vectors are neither
//! [`Send`] nor [`Sync`].
//!
//! # Examples
//!
//! ```
//! use cowvec::vec::Vec;
//!
//! let empty: Vec<i32> = Vec::new();
//! let mut vec = empty.clone();
//!
//! for i in 0..100 {
//!     vec.push(i);
//! }
//! assert_eq!((vec.len(), vec.capacity()), (100, 128));
//! assert!(empty.is_empty());
//!
//! vec.reserve(200);
//! assert_eq!((vec.len(), vec.capacity()), (100, 200));
//!
//! vec.shrink_to_fit();
//! assert_eq!((vec.len(), vec.capacity()), (100, 100));
//!
//! vec.clear();
//! assert_eq!((vec.len(), vec.capacity()), (0, 100));
//! ```
//!
//! # Logging
//!
//! With the `log` feature (enabled by default), storage events are recorded at the `trace` level
//! under the `cowvec` target: cloning a shared store, and moving or cloning elements into a new
//! allocation.
//!
//! [StdVec]: alloc::vec::Vec
//! [Rc]: alloc::rc::Rc
//! [CowVec]: vec::Vec

extern crate alloc;

pub mod error;
mod macros;
mod raw;
pub mod vec;

pub mod prelude {
	pub use crate::error::OutOfRange;
	pub use crate::vec::{
		Cursor,
		CursorMut,
		Vec as CowVec,
	};
}
