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

//! # Safe Values
//!
//! `SafeValue<T, V, P, E>` wraps a single integer of type `T` and guarantees
//! that, wherever it is observed, the wrapped value belongs to the domain `V`.
//! Every path that can change the value revalidates before the change is
//! committed:
//!
//! - construction (`new`, `try_new`, `TryFrom`)
//! - assignment (`assign`, `modify`)
//! - binary operators and their compound-assignment forms
//! - increments and decrements
//! - unary minus and bitwise complement
//!
//! Binary operators are evaluated exactly by [`arith`](crate::arith) using the
//! left operand's promotion policy `P`. A violation is handed to the exception
//! policy `E`, which may unwind, abort, or return. If it returns, mutations
//! are not committed and operators yield the left operand unchanged.
//!
//! ## Submodules
//!
//! - `ops`: the arithmetic, bitwise and shift operators.
//! - `cmp`: mixed-sign relational operators against primitives and other safe
//!   values.
//! - `convert`: explicit conversions to and from primitives.
//!
//! # Examples
//!
//! ```rust
//! use bulwark::types::{SafeI8, SafeU32};
//!
//! let mut x = SafeU32::new(40u8);
//! x += 2u8;
//! assert_eq!(x.get(), 42);
//! assert!(x > -1i32);
//!
//! let overflow = std::panic::catch_unwind(|| SafeI8::new(127i8) + 1i8);
//! assert!(overflow.is_err());
//! ```

mod cmp;
mod convert;
mod ops;

use crate::{
    arith,
    domain::{Domain, Full},
    error::SafeNumericError,
    op::BinaryOp,
    policy::{
        exception::{ExceptionPolicy, Unwind},
        promotion::{Native, PromotionPolicy},
    },
};
use bulwark_core::num::{integer::Integer, wide::Wide};
use std::marker::PhantomData;

const INVALID_VALUE: &str = "Invalid value";
const INVALID_ASSIGNMENT: &str = "Invalid value passed on assignment";
const INCREMENT_OVERFLOW: &str = "Overflow on increment";
const DECREMENT_OVERFLOW: &str = "Overflow on decrement";

/// An integer of type `T` that is guaranteed to lie in the domain `V`.
///
/// - `V`: the validation domain, [`Full`] by default.
/// - `P`: the promotion policy used when this value is the left operand of a
///   binary operator, [`Native`] by default.
/// - `E`: the exception policy, [`Unwind`] by default.
///
/// The layout is that of `T`. There is no `Default` implementation since not
/// every domain contains zero.
#[repr(transparent)]
pub struct SafeValue<T, V = Full, P = Native, E = Unwind> {
    value: T,
    _policies: PhantomData<fn() -> (V, P, E)>,
}

impl<T, V, P, E> SafeValue<T, V, P, E>
where
    T: Integer,
{
    #[inline]
    const fn from_raw(value: T) -> Self {
        Self {
            value,
            _policies: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[inline]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Consumes the safe value and returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, V, P, E> SafeValue<T, V, P, E>
where
    T: Integer,
    V: Domain<T>,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    /// Creates a safe value from a raw integer of any supported type.
    ///
    /// If `raw` is outside the domain, `E::range_error("Invalid value")` is
    /// invoked. Should the policy return, the result holds the truncated bits
    /// of `raw` and no longer satisfies its domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark::types::SafeU8;
    ///
    /// assert_eq!(SafeU8::new(200i64).get(), 200u8);
    /// assert!(std::panic::catch_unwind(|| SafeU8::new(-1i32)).is_err());
    /// ```
    ///
    /// Only integers are accepted:
    ///
    /// ```rust,compile_fail
    /// # use bulwark::types::SafeU8;
    ///
    /// let _ = SafeU8::new(1.0f32);
    /// ```
    pub fn new<R: Integer>(raw: R) -> Self {
        match Self::try_new(raw) {
            Ok(value) => value,
            Err(error) => {
                E::raise(error);
                Self::from_raw(T::truncate(raw.widen()))
            }
        }
    }

    /// Creates a safe value, returning the range error instead of invoking
    /// the exception policy.
    ///
    /// # Errors
    ///
    /// Returns `SafeNumericError::Range` if `raw` is outside the domain.
    #[inline]
    pub fn try_new<R: Integer>(raw: R) -> Result<Self, SafeNumericError> {
        Self::validated(raw, INVALID_VALUE).map(Self::from_raw)
    }

    /// Replaces the wrapped value with `rhs` after validating it.
    ///
    /// On failure `E::range_error("Invalid value passed on assignment")` is
    /// invoked and the previous value is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark::types::SafeU32;
    ///
    /// let mut x = SafeU32::new(7u8);
    /// x.assign(4_294_967_295u64);
    /// assert_eq!(x.get(), u32::MAX);
    /// ```
    pub fn assign<R: Integer>(&mut self, rhs: R) -> &mut Self {
        match Self::validated(rhs, INVALID_ASSIGNMENT) {
            Ok(value) => self.value = value,
            Err(error) => E::raise(error),
        }
        self
    }

    /// Edits a copy of the wrapped value with `f` and assigns the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark::types::SafeI16;
    ///
    /// let mut x = SafeI16::new(-3i8);
    /// x.modify(|v| *v = v.abs());
    /// assert_eq!(x.get(), 3);
    /// ```
    pub fn modify<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut T),
    {
        let mut scratch = self.value;
        f(&mut scratch);
        self.assign(scratch)
    }

    /// Evaluates `self op rhs`, returning the overflow error instead of
    /// invoking the exception policy.
    ///
    /// # Errors
    ///
    /// Returns `SafeNumericError::Overflow` if the exact result does not fit
    /// the promoted representation, `T`, or the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark::error::SafeNumericError;
    /// # use bulwark::op::BinaryOp;
    /// # use bulwark::types::SafeU8;
    ///
    /// let x = SafeU8::new(250u8);
    /// assert_eq!(x.try_apply(BinaryOp::Add, 5u8).map(|v| v.get()), Ok(255));
    /// assert_eq!(
    ///     x.try_apply(BinaryOp::Add, 6u8).map(|v| v.get()),
    ///     Err(SafeNumericError::Overflow("Overflow on addition"))
    /// );
    /// ```
    pub fn try_apply<R: Integer>(self, op: BinaryOp, rhs: R) -> Result<Self, SafeNumericError> {
        let exact = arith::evaluate::<P, T, R>(op, self.value, rhs)?;
        Self::settle(exact, op.overflow_message()).map(Self::from_raw)
    }

    /// Increments in place and returns a copy of the new value.
    ///
    /// Goes through the addition path, so an overflow is reported as
    /// `"Overflow on addition"`.
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        self.apply_assign(BinaryOp::Add, 1u8);
        *self
    }

    /// Decrements in place and returns a copy of the new value.
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        self.apply_assign(BinaryOp::Sub, 1u8);
        *self
    }

    /// Increments in place and returns a copy of the previous value.
    ///
    /// The incremented value is validated before anything is changed; on
    /// failure `E::overflow_error("Overflow on increment")` is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark::types::SafeU8;
    ///
    /// let mut x = SafeU8::new(9u8);
    /// let before = x.post_increment();
    /// assert_eq!((before.get(), x.get()), (9, 10));
    /// ```
    pub fn post_increment(&mut self) -> Self {
        self.step_after(BinaryOp::Add, INCREMENT_OVERFLOW)
    }

    /// Decrements in place and returns a copy of the previous value.
    ///
    /// On failure `E::overflow_error("Overflow on decrement")` is invoked.
    pub fn post_decrement(&mut self) -> Self {
        self.step_after(BinaryOp::Sub, DECREMENT_OVERFLOW)
    }

    fn validated<R: Integer>(raw: R, message: &'static str) -> Result<T, SafeNumericError> {
        if !V::validate(raw) {
            return Err(SafeNumericError::Range(message));
        }
        T::narrow(raw.widen()).ok_or(SafeNumericError::Range(message))
    }

    fn settle(exact: Wide, message: &'static str) -> Result<T, SafeNumericError> {
        T::narrow(exact)
            .filter(|value| V::validate(*value))
            .ok_or(SafeNumericError::Overflow(message))
    }

    #[inline]
    fn apply<R: Integer>(self, op: BinaryOp, rhs: R) -> Self {
        match self.try_apply(op, rhs) {
            Ok(result) => result,
            Err(error) => {
                E::raise(error);
                self
            }
        }
    }

    #[inline]
    fn apply_assign<R: Integer>(&mut self, op: BinaryOp, rhs: R) {
        match self.try_apply(op, rhs) {
            Ok(result) => {
                self.assign(result.value);
            }
            Err(error) => E::raise(error),
        }
    }

    fn step_after(&mut self, op: BinaryOp, message: &'static str) -> Self {
        let previous = *self;
        match self.try_apply(op, 1u8) {
            Ok(next) => *self = next,
            Err(_) => E::overflow_error(message),
        }
        previous
    }
}

impl<T, V, P, E> Clone for SafeValue<T, V, P, E>
where
    T: Integer,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V, P, E> Copy for SafeValue<T, V, P, E> where T: Integer {}

impl<T, V, P, E> std::fmt::Debug for SafeValue<T, V, P, E>
where
    T: Integer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SafeValue").field(&self.value).finish()
    }
}

impl<T, V, P, E> std::hash::Hash for SafeValue<T, V, P, E>
where
    T: Integer,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
