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

//! # Mixed-Sign Comparison
//!
//! Relational primitives for two integers of arbitrary and possibly
//! different width and signedness. The classic bug these avoid is the
//! implicit conversion of a signed operand to unsigned, after which `-1`
//! compares greater than `u32::MAX`.
//!
//! Both operands are widened into [`Wide`](crate::num::wide::Wide) first. If
//! they share signedness they are compared directly; otherwise a negative
//! operand is strictly less than any non-negative one, and two non-negative
//! operands compare by magnitude in the unsigned domain.
//!
//! ```rust
//! use bulwark_core::num::compare;
//!
//! assert!(compare::less_than(-1i32, 0u8));
//! assert!(compare::less_than(-1i32, 4_294_967_295u32));
//! assert!(!compare::less_than(4_294_967_295u32, -1i32));
//! assert!(compare::equal(255u8, 255i64));
//! ```

use crate::num::integer::Integer;
use std::cmp::Ordering;

/// Returns `true` if `a < b`.
#[inline]
pub fn less_than<A, B>(a: A, b: B) -> bool
where
    A: Integer,
    B: Integer,
{
    let (a, b) = (a.widen(), b.widen());
    if A::IS_SIGNED == B::IS_SIGNED {
        return a < b;
    }
    if a.is_negative() || b.is_negative() {
        // At most one side is signed, so at most one side is negative.
        return a.is_negative();
    }
    a.magnitude() < b.magnitude()
}

/// Returns `true` if `a > b`.
#[inline]
pub fn greater_than<A, B>(a: A, b: B) -> bool
where
    A: Integer,
    B: Integer,
{
    less_than(b, a)
}

/// Returns `true` if `a == b` numerically.
#[inline]
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Integer,
    B: Integer,
{
    !less_than(a, b) && !less_than(b, a)
}

/// Returns `true` if `a <= b`.
#[inline]
pub fn less_equal<A, B>(a: A, b: B) -> bool
where
    A: Integer,
    B: Integer,
{
    !greater_than(a, b)
}

/// Returns `true` if `a >= b`.
#[inline]
pub fn greater_equal<A, B>(a: A, b: B) -> bool
where
    A: Integer,
    B: Integer,
{
    !less_than(a, b)
}

/// Three-way comparison of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::compare;
/// # use std::cmp::Ordering;
///
/// assert_eq!(compare::compare(-5i8, 3u64), Ordering::Less);
/// assert_eq!(compare::compare(u128::MAX, i128::MAX), Ordering::Greater);
/// assert_eq!(compare::compare(7usize, 7i16), Ordering::Equal);
/// ```
#[inline]
pub fn compare<A, B>(a: A, b: B) -> Ordering
where
    A: Integer,
    B: Integer,
{
    if less_than(a, b) {
        Ordering::Less
    } else if less_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if `low <= value <= high`.
///
/// An empty range (`low > high`) contains nothing.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::compare;
///
/// assert!(compare::within(0u8, -10i128, 10i128));
/// assert!(!compare::within(11u8, -10i128, 10i128));
/// assert!(!compare::within(0u8, 5i32, 1i32));
/// ```
#[inline]
pub fn within<V, L, H>(value: V, low: L, high: H) -> bool
where
    V: Integer,
    L: Integer,
    H: Integer,
{
    !less_than(value, low) && !greater_than(value, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_signed_vs_large_unsigned() {
        assert!(less_than(-1i32, 4_294_967_295u32));
        assert!(!less_than(4_294_967_295u32, -1i32));
        assert!(greater_than(4_294_967_295u32, -1i32));
        assert!(!equal(-1i32, u32::MAX));
    }

    #[test]
    fn test_minus_one_less_than_zero() {
        assert!(less_than(-1i8, 0u8));
        assert!(less_than(-1i8, 0i8));
        assert!(!less_than(0u8, -1i8));
    }

    #[test]
    fn test_same_signedness_different_widths() {
        assert!(less_than(i8::MIN, i128::MAX));
        assert!(less_than(i128::MIN, i8::MIN));
        assert!(less_than(u8::MAX, u128::MAX));
        assert!(equal(200u8, 200u64));
    }

    #[test]
    fn test_extreme_mixed_values() {
        assert!(less_than(i128::MIN, 0u8));
        assert!(less_than(i128::MAX, u128::MAX));
        assert!(equal(i128::MAX, i128::MAX as u128));
        assert!(greater_than(i128::MAX as u128 + 1, i128::MAX));
    }

    #[test]
    fn test_complements_are_exact() {
        let pairs: [(i64, u64); 4] = [(-1, 0), (0, 0), (5, 3), (i64::MAX, u64::MAX)];
        for (a, b) in pairs {
            assert_eq!(less_equal(a, b), !greater_than(a, b));
            assert_eq!(greater_equal(a, b), !less_than(a, b));
        }
    }

    #[test]
    fn test_exactly_one_relation_holds() {
        let signed = [i32::MIN, -7, -1, 0, 1, 7, i32::MAX];
        let unsigned = [0u32, 1, 7, i32::MAX as u32, u32::MAX];
        for &a in &signed {
            for &b in &unsigned {
                let holds = [less_than(a, b), less_than(b, a), equal(a, b)];
                assert_eq!(holds.iter().filter(|h| **h).count(), 1, "a = {a}, b = {b}");
            }
        }
    }

    #[test]
    fn test_within() {
        assert!(within(-128i8, i8::MIN, i8::MAX));
        assert!(within(5u32, 5i8, 5i8));
        assert!(!within(-1i32, 0u8, 10u8));
    }
}
