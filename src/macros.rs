// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

/// Emits a `trace` record for storage events, or nothing without the `log` feature.
macro_rules! trace {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		log::trace!(target: "cowvec", $($arg)+);
	}};
}

/// Panics with the standard out-of-bounds message for an insertion or removal position.
macro_rules! position_failed {
	($name:literal, $op:literal, $index:expr, $len:expr) => {{
		#[allow(clippy::panic)]
		#[cold]
		#[inline(never)]
		#[track_caller]
		fn assert_failed(index: usize, len: usize) -> ! {
			panic!(concat!($name, " index (is {}) should be ", $op, " len (is {})"), index, len);
		}

		assert_failed($index, $len)
	}};
}

pub(crate) use {position_failed, trace};
