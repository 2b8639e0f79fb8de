// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Integer Representations
//!
//! `Integer` is the closed set of fixed-width primitive integers the
//! safe-arithmetic layers operate on: `i8`, `i16`, `i32`, `i64`, `i128`,
//! `isize` and their unsigned counterparts. It collects the `num_traits`
//! bounds generic code needs and adds the two capabilities everything above
//! is built on: exact widening into [`Wide`] and checked narrowing back.
//!
//! `SignedInteger` is implemented for the signed types only. Bounding an
//! operation on it turns "negating an unsigned value" into a compile error
//! rather than a runtime condition.
//!
//! The trait is sealed: the set of representations is fixed.

use crate::num::{repr::Repr, wide::Wide};
use num_traits::{NumCast, PrimInt, Signed};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A primitive fixed-width integer type.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::integer::Integer;
///
/// assert_eq!(<u8 as Integer>::BITS, 8);
/// assert!(!<u8 as Integer>::IS_SIGNED);
/// assert_eq!(u8::narrow((-1i8).widen()), None);
/// assert_eq!(i16::narrow(200u8.widen()), Some(200i16));
/// ```
pub trait Integer:
    PrimInt
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Width of the representation in bits.
    const BITS: u32;
    /// Whether the representation can hold negative values.
    const IS_SIGNED: bool;

    /// Widens the value into the sign-magnitude form. Never loses information.
    fn widen(self) -> Wide;

    /// Reinterprets the low bits of a two's complement pattern as `Self`.
    fn from_bits_truncating(bits: u128) -> Self;

    /// Narrows a wide value, returning `None` if it is not representable.
    #[inline]
    fn narrow(wide: Wide) -> Option<Self> {
        match wide.to_i128() {
            Some(v) => <Self as NumCast>::from(v),
            None => wide.to_u128().and_then(<Self as NumCast>::from),
        }
    }

    /// Narrows a wide value by keeping its low bits, the way an `as` cast does.
    #[inline]
    fn truncate(wide: Wide) -> Self {
        Self::from_bits_truncating(wide.to_bits())
    }

    /// Returns `true` if `raw`, of any integer type, is representable as `Self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::integer::Integer;
    ///
    /// assert!(u8::can_represent(255i32));
    /// assert!(!u8::can_represent(256i32));
    /// assert!(!u32::can_represent(-1i8));
    /// ```
    #[inline]
    fn can_represent<R: Integer>(raw: R) -> bool {
        Repr::of::<Self>().contains(raw.widen())
    }
}

/// A signed primitive integer type.
pub trait SignedInteger: Integer + Signed {}

macro_rules! impl_integer {
    (signed: $t:ty) => {
        impl_integer!(@common $t, true);

        impl SignedInteger for $t {}
    };
    (unsigned: $t:ty) => {
        impl_integer!(@common $t, false);
    };
    (@common $t:ty, $signed:expr) => {
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = $signed;

            #[inline(always)]
            fn widen(self) -> Wide {
                if $signed {
                    Wide::from_i128(self as i128)
                } else {
                    Wide::from_u128(self as u128)
                }
            }

            #[inline(always)]
            fn from_bits_truncating(bits: u128) -> Self {
                bits as $t
            }
        }
    };
}

impl_integer!(signed: i8);
impl_integer!(signed: i16);
impl_integer!(signed: i32);
impl_integer!(signed: i64);
impl_integer!(signed: i128);
impl_integer!(signed: isize);

impl_integer!(unsigned: u8);
impl_integer!(unsigned: u16);
impl_integer!(unsigned: u32);
impl_integer!(unsigned: u64);
impl_integer!(unsigned: u128);
impl_integer!(unsigned: usize);
