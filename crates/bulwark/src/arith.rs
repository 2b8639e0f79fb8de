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

//! # Checked Arithmetic
//!
//! Exact, promotion-aware evaluation of binary operators on two integers of
//! possibly different width and signedness.
//!
//! Every operation follows the same steps:
//!
//! 1. Ask the promotion policy `P` for the result representation.
//! 2. Compute the mathematically exact result in [`Wide`].
//! 3. Check it against the promoted representation and report
//!    `SafeNumericError::Overflow` if it does not fit.
//!
//! The `checked_*` functions add a final step that narrows the result into
//! a destination type `D`, again reporting `Overflow` on failure.
//!
//! Operator-specific rules:
//!
//! - Division and modulus by zero report `Overflow("Division by zero")`.
//! - Bitwise operators work on two's complement patterns and require both
//!   operands to be representable in the promoted representation.
//! - Shifts reject a negative left operand, a negative shift amount, and a
//!   shift amount not less than the left operand's bit width. A left shift
//!   must not drop significant bits.
//!
//! ```rust
//! use bulwark::arith;
//! use bulwark::error::SafeNumericError;
//! use bulwark::policy::promotion::{Automatic, Native};
//!
//! assert_eq!(arith::checked_add::<Native, u8, _, _>(200u8, 55u8), Ok(255u8));
//! assert!(arith::checked_add::<Native, u8, _, _>(200u8, 56u8).is_err());
//! // `Automatic` holds the intermediate in i16, so the final value fits.
//! assert_eq!(arith::checked_sub::<Automatic, i8, _, _>(10u8, 20u8), Ok(-10i8));
//! assert_eq!(
//!     arith::checked_div::<Native, i32, _, _>(1i32, 0i32),
//!     Err(SafeNumericError::Overflow("Division by zero"))
//! );
//! ```

use crate::{error::SafeNumericError, op::BinaryOp, policy::promotion::PromotionPolicy};
use bulwark_core::num::{
    integer::Integer,
    ops::checked_arithmetic::{
        CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedRemVal, CheckedShlVal, CheckedShrVal,
        CheckedSubVal,
    },
    repr::Repr,
    wide::Wide,
};

const DIVISION_BY_ZERO: SafeNumericError = SafeNumericError::Overflow("Division by zero");
const NEGATIVE_SHIFT_OPERAND: SafeNumericError =
    SafeNumericError::Overflow("Shift of negative value");
const SHIFT_OUT_OF_RANGE: SafeNumericError =
    SafeNumericError::Overflow("Shift amount out of range");

/// Evaluates `lhs op rhs` exactly, checked against the representation chosen
/// by the promotion policy `P`.
///
/// # Errors
///
/// Returns `SafeNumericError::Overflow` if the exact result does not fit the
/// promoted representation or the operation is undefined for the operands.
pub fn evaluate<P, L, R>(op: BinaryOp, lhs: L, rhs: R) -> Result<Wide, SafeNumericError>
where
    P: PromotionPolicy,
    L: Integer,
    R: Integer,
{
    let promoted = P::promote(op, Repr::of::<L>(), Repr::of::<R>());
    let (a, b) = (lhs.widen(), rhs.widen());
    let exact = match op {
        BinaryOp::Add => a.checked_add_val(b),
        BinaryOp::Sub => a.checked_sub_val(b),
        BinaryOp::Mul => a.checked_mul_val(b),
        BinaryOp::Div => Some(a.checked_div_val(b).ok_or(DIVISION_BY_ZERO)?),
        BinaryOp::Rem => Some(a.checked_rem_val(b).ok_or(DIVISION_BY_ZERO)?),
        BinaryOp::BitOr => bitwise(promoted, a, b, |x, y| x | y),
        BinaryOp::BitAnd => bitwise(promoted, a, b, |x, y| x & y),
        BinaryOp::BitXor => bitwise(promoted, a, b, |x, y| x ^ y),
        BinaryOp::Shl => a.checked_shl_val(shift_amount(a, b, L::BITS)?),
        BinaryOp::Shr => a.checked_shr_val(shift_amount(a, b, L::BITS)?),
    };
    exact
        .filter(|v| promoted.contains(*v))
        .ok_or(SafeNumericError::Overflow(op.overflow_message()))
}

#[inline]
fn bitwise<F>(promoted: Repr, a: Wide, b: Wide, f: F) -> Option<Wide>
where
    F: Fn(u128, u128) -> u128,
{
    if !promoted.contains(a) || !promoted.contains(b) {
        return None;
    }
    let low = f(a.to_bits(), b.to_bits());
    if !promoted.is_widest() {
        return Some(promoted.from_bits(low));
    }
    // 129-bit two's complement: the sign bit is the operator applied to the
    // operands' sign bits.
    let sign_mask = |w: Wide| if w.is_negative() { u128::MAX } else { 0 };
    if f(sign_mask(a), sign_mask(b)) & 1 == 0 {
        Some(Wide::from_u128(low))
    } else if low == 0 {
        None
    } else {
        Some(Wide::new(true, low.wrapping_neg()))
    }
}

#[inline]
fn shift_amount(operand: Wide, amount: Wide, width: u32) -> Result<u32, SafeNumericError> {
    if operand.is_negative() {
        return Err(NEGATIVE_SHIFT_OPERAND);
    }
    amount
        .to_u128()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n < width)
        .ok_or(SHIFT_OUT_OF_RANGE)
}

/// Evaluates `lhs op rhs` and narrows the exact result into `D`.
///
/// # Errors
///
/// Returns `SafeNumericError::Overflow` if evaluation fails or the result is
/// not representable as `D`.
#[inline]
pub fn evaluate_into<P, D, L, R>(op: BinaryOp, lhs: L, rhs: R) -> Result<D, SafeNumericError>
where
    P: PromotionPolicy,
    D: Integer,
    L: Integer,
    R: Integer,
{
    let exact = evaluate::<P, L, R>(op, lhs, rhs)?;
    D::narrow(exact).ok_or(SafeNumericError::Overflow(op.overflow_message()))
}

macro_rules! checked_fn {
    ($(#[$doc:meta])* $name:ident, $op:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns `SafeNumericError::Overflow` if the exact result does not
        /// fit the promoted representation or `D`.
        #[inline]
        pub fn $name<P, D, L, R>(lhs: L, rhs: R) -> Result<D, SafeNumericError>
        where
            P: PromotionPolicy,
            D: Integer,
            L: Integer,
            R: Integer,
        {
            evaluate_into::<P, D, L, R>(BinaryOp::$op, lhs, rhs)
        }
    };
}

checked_fn!(
    /// Checked `lhs + rhs`.
    checked_add, Add
);
checked_fn!(
    /// Checked `lhs - rhs`.
    checked_sub, Sub
);
checked_fn!(
    /// Checked `lhs * rhs`.
    checked_mul, Mul
);
checked_fn!(
    /// Checked `lhs / rhs`, truncating toward zero.
    checked_div, Div
);
checked_fn!(
    /// Checked `lhs % rhs`, with the sign of `lhs`.
    checked_rem, Rem
);
checked_fn!(
    /// Checked `lhs | rhs`.
    checked_bitor, BitOr
);
checked_fn!(
    /// Checked `lhs & rhs`.
    checked_bitand, BitAnd
);
checked_fn!(
    /// Checked `lhs ^ rhs`.
    checked_bitxor, BitXor
);
checked_fn!(
    /// Checked `lhs << rhs`.
    checked_shl, Shl
);
checked_fn!(
    /// Checked `lhs >> rhs`.
    checked_shr, Shr
);
