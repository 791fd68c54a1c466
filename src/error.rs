// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{self, Debug, Display, Formatter};

pub type Result<T = (), E = OutOfRange> = core::result::Result<T, E>;

/// The error returned by checked accessors when an index falls outside the vector's length.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct OutOfRange {
	index: usize,
	len: usize,
}

impl OutOfRange {
	pub(crate) const fn new(index: usize, len: usize) -> Self {
		Self { index, len }
	}

	/// Returns the index that was accessed.
	pub const fn index(&self) -> usize { self.index }

	/// Returns the length of the vector at the time of access.
	pub const fn length(&self) -> usize { self.len }
}

impl Debug for OutOfRange {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("OutOfRange")
		 .field("index", &self.index)
		 .field("len", &self.len)
		 .finish()
	}
}

impl Display for OutOfRange {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "index (is {}) should be < len (is {})", self.index, self.len)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange { }

#[cfg(test)]
mod tests {
	use alloc::string::ToString;
	use super::OutOfRange;

	#[test]
	fn display() {
		let err = OutOfRange::new(3, 3);
		assert_eq!(err.to_string(), "index (is 3) should be < len (is 3)");
		assert_eq!(err.index(), 3);
		assert_eq!(err.length(), 3);
	}
}
