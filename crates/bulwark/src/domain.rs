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

//! # Validation Domains
//!
//! A domain is the validation predicate of a safe value variant: it decides
//! which raw values the variant accepts. `SafeValue<T, V, ..>` never knows
//! which concrete domain it carries; it only calls `V::validate`.
//!
//! Two domains are provided:
//!
//! - [`Full`]: every value representable by the stored integer type.
//! - [`Ranged`]: a closed sub-range `[MIN, MAX]` of it.
//!
//! ## Contract
//!
//! `validate` must only return `true` for values representable by `T`. The
//! provided domains guarantee this by checking representability first.

use bulwark_core::num::{compare, integer::Integer};

/// The validation predicate of a safe value variant storing a `T`.
pub trait Domain<T>
where
    T: Integer,
{
    /// Returns `true` if `raw` belongs to the domain.
    fn validate<R: Integer>(raw: R) -> bool;
}

/// The domain of every value representable by the stored type.
///
/// # Examples
///
/// ```rust
/// # use bulwark::domain::{Domain, Full};
///
/// assert!(<Full as Domain<u8>>::validate(255i32));
/// assert!(!<Full as Domain<u8>>::validate(256i32));
/// assert!(!<Full as Domain<u8>>::validate(-1i32));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Full;

impl<T> Domain<T> for Full
where
    T: Integer,
{
    #[inline]
    fn validate<R: Integer>(raw: R) -> bool {
        T::can_represent(raw)
    }
}

/// The closed domain `[MIN, MAX]`, intersected with the stored type's range.
///
/// If `MIN > MAX` the domain is empty and every value is rejected.
///
/// # Examples
///
/// ```rust
/// # use bulwark::domain::{Domain, Ranged};
///
/// type Percent = Ranged<0, 100>;
/// assert!(<Percent as Domain<u8>>::validate(100u8));
/// assert!(!<Percent as Domain<u8>>::validate(101u8));
/// assert!(!<Percent as Domain<u8>>::validate(-1i8));
///
/// // The stored type's range still applies.
/// type Wider = Ranged<-1000, 1000>;
/// assert!(!<Wider as Domain<i8>>::validate(500i32));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ranged<const MIN: i128, const MAX: i128>;

impl<T, const MIN: i128, const MAX: i128> Domain<T> for Ranged<MIN, MAX>
where
    T: Integer,
{
    #[inline]
    fn validate<R: Integer>(raw: R) -> bool {
        T::can_represent(raw) && compare::within(raw, MIN, MAX)
    }
}
