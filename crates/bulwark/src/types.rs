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

//! Named safe value configurations.
//!
//! Every alias uses the full range of its integer, native promotion, and the
//! unwinding exception policy. Other configurations are spelled out with
//! `SafeValue<T, V, P, E>` directly, or with [`SafeRanged`] for a sub-range.

use crate::{
    domain::Ranged,
    policy::{exception::Unwind, promotion::Native},
    value::SafeValue,
};

pub type SafeI8 = SafeValue<i8>;
pub type SafeI16 = SafeValue<i16>;
pub type SafeI32 = SafeValue<i32>;
pub type SafeI64 = SafeValue<i64>;
pub type SafeI128 = SafeValue<i128>;
pub type SafeIsize = SafeValue<isize>;
pub type SafeU8 = SafeValue<u8>;
pub type SafeU16 = SafeValue<u16>;
pub type SafeU32 = SafeValue<u32>;
pub type SafeU64 = SafeValue<u64>;
pub type SafeU128 = SafeValue<u128>;
pub type SafeUsize = SafeValue<usize>;

/// A safe `T` restricted to the closed range `[MIN, MAX]`.
///
/// # Examples
///
/// ```rust
/// # use bulwark::types::SafeRanged;
///
/// type Hour = SafeRanged<u8, 0, 23>;
/// let mut h = Hour::new(22u8);
/// h.pre_increment();
/// assert_eq!(h.get(), 23);
/// assert!(std::panic::catch_unwind(move || h + 1u8).is_err());
/// ```
pub type SafeRanged<T, const MIN: i128, const MAX: i128, P = Native, E = Unwind> =
    SafeValue<T, Ranged<MIN, MAX>, P, E>;
