// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec as StdVec;
use super::Vec;

macro_rules! gen_eq {
	() => { };
	($lhs:ty, $rhs:ty;$($next:tt)*) => {
		gen_eq! { $lhs, $rhs [];$($next)* }
	};
	($lhs:ty, $rhs:ty [$($params:tt)*];$($next:tt)*) => {
		impl<T: PartialEq<U>, U, $($params)*> PartialEq<$rhs> for $lhs {
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
		}
		gen_eq! { $($next)* }
	};
}

gen_eq! {
	Vec<T>, Vec<U>;
	Vec<T>, &[U];
	Vec<T>, &mut [U];
	&[T], Vec<U>;
	&mut [T], Vec<U>;
	Vec<T>, [U];
	[T], Vec<U>;
	Vec<T>, StdVec<U>;
	StdVec<T>, Vec<U>;
	Vec<T>, [U; N]      [const N: usize];
	Vec<T>, &[U; N]     [const N: usize];
	Vec<T>, &mut [U; N] [const N: usize];
	[T; N], Vec<U>      [const N: usize];
	&[T; N], Vec<U>     [const N: usize];
	&mut [T; N], Vec<U> [const N: usize];
}
