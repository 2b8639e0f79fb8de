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

//! # Promotion Policies
//!
//! A promotion policy chooses the representation that holds the exact
//! result of a binary operation before it is range-checked against the
//! destination. Policies are zero-sized types selected at compile time as a
//! type parameter; `promote` is pure, total and deterministic.
//!
//! - [`Native`]: the wider operand's representation (ties keep the left
//!   operand's). Cheap and predictable, but an intermediate result may
//!   overflow even when the destination could hold it.
//! - [`Automatic`]: a representation wide enough for the exact result of
//!   the operator, so only the destination check can fail.

use crate::op::BinaryOp;
use bulwark_core::num::repr::Repr;

/// Maps two operand representations and an operator to the representation
/// of the result.
pub trait PromotionPolicy {
    /// Returns the representation that holds `lhs op rhs`.
    fn promote(op: BinaryOp, lhs: Repr, rhs: Repr) -> Repr;
}

/// Keeps the wider of the two operand representations.
///
/// # Examples
///
/// ```rust
/// # use bulwark::op::BinaryOp;
/// # use bulwark::policy::promotion::{Native, PromotionPolicy};
/// # use bulwark_core::num::repr::Repr;
///
/// let r = Native::promote(BinaryOp::Add, Repr::of::<u8>(), Repr::of::<i32>());
/// assert_eq!(r, Repr::of::<i32>());
/// let r = Native::promote(BinaryOp::Add, Repr::of::<i16>(), Repr::of::<u16>());
/// assert_eq!(r, Repr::of::<i16>());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Native;

impl PromotionPolicy for Native {
    #[inline]
    fn promote(op: BinaryOp, lhs: Repr, rhs: Repr) -> Repr {
        if op.is_shift() || lhs.bits() >= rhs.bits() {
            lhs
        } else {
            rhs
        }
    }
}

/// Promotes to a representation that can hold the exact result.
///
/// Widths are rounded up to the next supported width. A result that needs
/// more than 128 bits is held in [`Repr::WIDEST`], which spans both `i128`
/// and `u128`; only there can the promoted representation itself overflow,
/// and then no destination could hold the result either.
///
/// # Examples
///
/// ```rust
/// # use bulwark::op::BinaryOp;
/// # use bulwark::policy::promotion::{Automatic, PromotionPolicy};
/// # use bulwark_core::num::repr::Repr;
///
/// // u8 - u8 may be negative.
/// let r = Automatic::promote(BinaryOp::Sub, Repr::of::<u8>(), Repr::of::<u8>());
/// assert_eq!(r, Repr::of::<i16>());
/// // i32 * u32 needs 64 bits.
/// let r = Automatic::promote(BinaryOp::Mul, Repr::of::<i32>(), Repr::of::<u32>());
/// assert_eq!(r, Repr::of::<i64>());
/// // u128 - u8 may be anywhere in [-255, u128::MAX].
/// let r = Automatic::promote(BinaryOp::Sub, Repr::of::<u128>(), Repr::of::<u8>());
/// assert_eq!(r, Repr::WIDEST);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Automatic;

impl PromotionPolicy for Automatic {
    fn promote(op: BinaryOp, lhs: Repr, rhs: Repr) -> Repr {
        let signed = lhs.is_signed() || rhs.is_signed();
        let widest = lhs.magnitude_bits().max(rhs.magnitude_bits());
        let sign_bit = u32::from(signed);
        match op {
            BinaryOp::Add => Repr::fitting(widest + 1 + sign_bit, signed),
            BinaryOp::Sub => Repr::fitting(widest + 2, true),
            BinaryOp::Mul => Repr::fitting(lhs.bits() + rhs.bits(), signed),
            // MIN / -1 needs one bit more than the dividend.
            BinaryOp::Div => Repr::fitting(lhs.bits() + sign_bit, signed),
            // |lhs % rhs| <= |lhs| and the sign follows the dividend.
            BinaryOp::Rem => lhs,
            BinaryOp::BitOr | BinaryOp::BitAnd | BinaryOp::BitXor => {
                Repr::fitting(widest + sign_bit, signed)
            }
            // The shifted operand is never negative.
            BinaryOp::Shl => Repr::WIDEST,
            BinaryOp::Shr => lhs,
        }
    }
}
