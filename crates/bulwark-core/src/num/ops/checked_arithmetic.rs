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

use crate::num::wide::Wide;

/// A trait for types that support checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedAddVal;
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_i128(-200);
/// assert_eq!(a.checked_add_val(Wide::from_u128(50)), Some(Wide::from_i128(-150)));
/// assert_eq!(Wide::MAX.checked_add_val(Wide::ONE), None);
/// ```
pub trait CheckedAddVal: Sized {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedSubVal;
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_u128(0);
/// assert_eq!(a.checked_sub_val(Wide::ONE), Some(Wide::from_i128(-1)));
/// assert_eq!(Wide::MIN.checked_sub_val(Wide::ONE), None);
/// ```
pub trait CheckedSubVal: Sized {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedMulVal;
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_i128(-128);
/// assert_eq!(a.checked_mul_val(a), Some(Wide::from_i128(16384)));
/// assert_eq!(Wide::MAX.checked_mul_val(Wide::from_u128(2)), None);
/// ```
pub trait CheckedMulVal: Sized {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked division by value (no references).
///
/// Division truncates toward zero.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedDivVal;
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_i128(-7);
/// assert_eq!(a.checked_div_val(Wide::from_i128(2)), Some(Wide::from_i128(-3)));
/// assert_eq!(a.checked_div_val(Wide::ZERO), None); // Division by zero
/// ```
pub trait CheckedDivVal: Sized {
    /// Performs checked division by value, returning `None` if division by zero occurs.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked remainder by value (no references).
///
/// The remainder takes the sign of the dividend, matching truncating division.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedRemVal;
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_i128(-7);
/// assert_eq!(a.checked_rem_val(Wide::from_i128(2)), Some(Wide::from_i128(-1)));
/// assert_eq!(a.checked_rem_val(Wide::ZERO), None); // Division by zero
/// ```
pub trait CheckedRemVal: Sized {
    /// Performs checked remainder by value, returning `None` if division by zero occurs.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked negation by value (no references).
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedNegVal;
/// # use bulwark_core::num::wide::Wide;
///
/// // Unlike `i128::MIN.checked_neg()`, the wide range is symmetric.
/// let a = Wide::from_i128(i128::MIN);
/// assert_eq!(a.checked_neg_val(), Some(Wide::from_u128(1u128 << 127)));
/// ```
pub trait CheckedNegVal: Sized {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

/// A trait for types that support checked left shift by value (no references).
///
/// A left shift multiplies by `2^rhs`; it fails if any significant bit
/// would be shifted out.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedShlVal;
/// # use bulwark_core::num::wide::Wide;
///
/// assert_eq!(Wide::ONE.checked_shl_val(8), Some(Wide::from_u128(256)));
/// assert_eq!(Wide::ONE.checked_shl_val(128), None);
/// ```
pub trait CheckedShlVal: Sized {
    /// Performs checked left shift by value, returning `None` if overflow occurs.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// A trait for types that support checked right shift by value (no references).
///
/// A right shift divides the magnitude by `2^rhs`, truncating toward zero.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::ops::checked_arithmetic::CheckedShrVal;
/// # use bulwark_core::num::wide::Wide;
///
/// assert_eq!(Wide::from_u128(256).checked_shr_val(4), Some(Wide::from_u128(16)));
/// assert_eq!(Wide::ONE.checked_shr_val(128), None); // Shift amount >= 128
/// ```
pub trait CheckedShrVal: Sized {
    /// Performs checked right shift by value, returning `None` if the shift amount is
    /// greater than or equal to 128.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

impl CheckedAddVal for Wide {
    #[inline]
    fn checked_add_val(self, v: Wide) -> Option<Wide> {
        let (a, b) = (self.magnitude(), v.magnitude());
        if self.is_negative() == v.is_negative() {
            return a
                .checked_add(b)
                .map(|m| Wide::new(self.is_negative(), m));
        }
        // Opposite signs: the larger magnitude decides the sign.
        if a >= b {
            Some(Wide::new(self.is_negative(), a - b))
        } else {
            Some(Wide::new(v.is_negative(), b - a))
        }
    }
}

impl CheckedSubVal for Wide {
    #[inline]
    fn checked_sub_val(self, v: Wide) -> Option<Wide> {
        self.checked_add_val(v.checked_neg_val()?)
    }
}

impl CheckedMulVal for Wide {
    #[inline]
    fn checked_mul_val(self, v: Wide) -> Option<Wide> {
        self.magnitude()
            .checked_mul(v.magnitude())
            .map(|m| Wide::new(self.is_negative() != v.is_negative(), m))
    }
}

impl CheckedDivVal for Wide {
    #[inline]
    fn checked_div_val(self, v: Wide) -> Option<Wide> {
        self.magnitude()
            .checked_div(v.magnitude())
            .map(|m| Wide::new(self.is_negative() != v.is_negative(), m))
    }
}

impl CheckedRemVal for Wide {
    #[inline]
    fn checked_rem_val(self, v: Wide) -> Option<Wide> {
        self.magnitude()
            .checked_rem(v.magnitude())
            .map(|m| Wide::new(self.is_negative(), m))
    }
}

impl CheckedNegVal for Wide {
    #[inline]
    fn checked_neg_val(self) -> Option<Wide> {
        Some(Wide::new(!self.is_negative(), self.magnitude()))
    }
}

impl CheckedShlVal for Wide {
    #[inline]
    fn checked_shl_val(self, rhs: u32) -> Option<Wide> {
        let m = self.magnitude();
        if rhs >= u128::BITS || (m != 0 && m.leading_zeros() < rhs) {
            return None;
        }
        Some(Wide::new(self.is_negative(), m << rhs))
    }
}

impl CheckedShrVal for Wide {
    #[inline]
    fn checked_shr_val(self, rhs: u32) -> Option<Wide> {
        self.magnitude()
            .checked_shr(rhs)
            .map(|m| Wide::new(self.is_negative(), m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(v: i128) -> Wide {
        Wide::from_i128(v)
    }

    #[test]
    fn test_checked_add_val_mixed_signs() {
        assert_eq!(w(5).checked_add_val(w(-7)), Some(w(-2)));
        assert_eq!(w(-5).checked_add_val(w(7)), Some(w(2)));
        assert_eq!(w(-5).checked_add_val(w(5)), Some(Wide::ZERO));
        assert_eq!(Wide::MIN.checked_add_val(Wide::from_i128(-1)), None);
        assert_eq!(Wide::MIN.checked_add_val(Wide::MAX), Some(Wide::ZERO));
    }

    #[test]
    fn test_checked_sub_val() {
        assert_eq!(w(0).checked_sub_val(w(1)), Some(w(-1)));
        assert_eq!(w(-128).checked_sub_val(w(1)), Some(w(-129)));
        assert_eq!(Wide::MAX.checked_sub_val(w(-1)), None);
    }

    #[test]
    fn test_checked_mul_val_sign() {
        assert_eq!(w(-3).checked_mul_val(w(-4)), Some(w(12)));
        assert_eq!(w(-3).checked_mul_val(w(4)), Some(w(-12)));
        assert_eq!(w(-3).checked_mul_val(Wide::ZERO), Some(Wide::ZERO));
        assert!(!w(-3).checked_mul_val(Wide::ZERO).unwrap().is_negative());
    }

    #[test]
    fn test_checked_div_rem_truncate_toward_zero() {
        for (a, b) in [(7i128, 2i128), (-7, 2), (7, -2), (-7, -2), (i64::MIN as i128, -1)] {
            assert_eq!(w(a).checked_div_val(w(b)), Some(w(a / b)), "{a} / {b}");
            assert_eq!(w(a).checked_rem_val(w(b)), Some(w(a % b)), "{a} % {b}");
        }
        assert_eq!(w(1).checked_div_val(Wide::ZERO), None);
        assert_eq!(w(1).checked_rem_val(Wide::ZERO), None);
    }

    #[test]
    fn test_min_divided_by_minus_one_is_exact() {
        let min = w(i128::MIN);
        assert_eq!(min.checked_div_val(w(-1)), Some(Wide::from_u128(1u128 << 127)));
        assert_eq!(min.checked_rem_val(w(-1)), Some(Wide::ZERO));
    }

    #[test]
    fn test_checked_shift_val() {
        assert_eq!(w(3).checked_shl_val(2), Some(w(12)));
        assert_eq!(Wide::ZERO.checked_shl_val(127), Some(Wide::ZERO));
        assert_eq!(Wide::from_u128(1u128 << 127).checked_shl_val(1), None);
        assert_eq!(w(12).checked_shr_val(2), Some(w(3)));
        assert_eq!(w(1).checked_shr_val(1), Some(Wide::ZERO));
    }
}
