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

//! Property-based tests using proptest.
//!
//! Checked results are compared against the primitive `checked_*` methods and
//! against exact arithmetic in `i128`, which holds every operand used here.

use bulwark::{
    arith,
    error::{ErrorKind, SafeNumericError},
    op::BinaryOp,
    policy::promotion::{Automatic, Native},
    types::{SafeI16, SafeI64, SafeU8, SafeU32},
    value::SafeValue,
};
use bulwark_core::num::compare;
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// COMPARISON
// ============================================================================

proptest! {
    #[test]
    fn comparison_is_total_for_mixed_sign(a in any::<i64>(), b in any::<u64>()) {
        let outcomes = [
            compare::less_than(a, b),
            compare::less_than(b, a),
            compare::equal(a, b),
        ];
        prop_assert_eq!(outcomes.iter().filter(|o| **o).count(), 1);
    }

    #[test]
    fn comparison_matches_exact_order(a in any::<i64>(), b in any::<u64>()) {
        let expected = i128::from(a).cmp(&i128::from(b));
        prop_assert_eq!(compare::compare(a, b), expected);
        prop_assert_eq!(SafeI64::new(a).partial_cmp(&b), Some(expected));
        prop_assert_eq!(b.partial_cmp(&SafeI64::new(a)), Some(expected.reverse()));
    }

    #[test]
    fn comparison_handles_full_width_mixed_sign(a in any::<i128>(), b in any::<u128>()) {
        let expected = if a < 0 {
            Ordering::Less
        } else {
            a.unsigned_abs().cmp(&b)
        };
        prop_assert_eq!(compare::compare(a, b), expected);
    }
}

// ============================================================================
// CONSTRUCTION AND ASSIGNMENT
// ============================================================================

proptest! {
    #[test]
    fn construct_then_get_round_trips(v in any::<u32>()) {
        prop_assert_eq!(SafeU32::new(v).get(), v);
        prop_assert_eq!(SafeI64::new(v).get(), i64::from(v));
    }

    #[test]
    fn construction_accepts_exactly_the_representable(v in any::<i32>()) {
        let result = SafeU8::try_new(v);
        match u8::try_from(v) {
            Ok(expected) => prop_assert_eq!(result.map(|x| x.get()), Ok(expected)),
            Err(_) => prop_assert_eq!(
                result.map(|x| x.get()),
                Err(SafeNumericError::Range("Invalid value"))
            ),
        }
    }

    #[test]
    fn assign_then_get_round_trips(start in any::<i16>(), next in any::<i16>()) {
        let mut x = SafeI16::new(start);
        x.assign(next);
        prop_assert_eq!(x.get(), next);
        x.assign(i64::from(start));
        prop_assert_eq!(x.get(), start);
    }

    #[test]
    fn ranged_construction_respects_bounds(v in -50i32..150) {
        let result = SafeValue::<u8, bulwark::domain::Ranged<0, 100>>::try_new(v);
        prop_assert_eq!(result.is_ok(), (0..=100).contains(&v));
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

proptest! {
    #[test]
    fn addition_matches_primitive_checked_add(a in any::<i64>(), b in any::<i64>()) {
        let safe = SafeI64::new(a).try_apply(BinaryOp::Add, b).map(|x| x.get()).ok();
        prop_assert_eq!(safe, a.checked_add(b));
    }

    #[test]
    fn multiplication_matches_primitive_checked_mul(a in any::<u32>(), b in any::<u32>()) {
        let safe = SafeU32::new(a).try_apply(BinaryOp::Mul, b).map(|x| x.get()).ok();
        prop_assert_eq!(safe, a.checked_mul(b));
    }

    #[test]
    fn division_matches_primitive_checked_div(a in any::<i32>(), b in any::<i32>()) {
        let checked = arith::checked_div::<Native, i32, _, _>(a, b);
        prop_assert_eq!(checked.ok(), a.checked_div(b));
        prop_assert_eq!(
            arith::checked_rem::<Native, i32, _, _>(a, b).ok(),
            // MIN % -1 is exactly 0, which the primitive reports as overflow.
            a.checked_rem(b).or((b == -1).then_some(0))
        );
    }

    #[test]
    fn automatic_mixed_subtraction_is_exact(a in any::<u8>(), b in any::<i64>()) {
        let exact = i128::from(a) - i128::from(b);
        let checked = arith::checked_sub::<Automatic, i64, _, _>(a, b);
        prop_assert_eq!(checked.ok(), i64::try_from(exact).ok());
    }

    #[test]
    fn unsigned_addition_overflow_is_reported(a in any::<u8>(), b in any::<u8>()) {
        let x = SafeU8::new(a);
        match x.try_apply(BinaryOp::Add, b) {
            Ok(sum) => prop_assert_eq!(u16::from(sum.get()), u16::from(a) + u16::from(b)),
            Err(e) => {
                prop_assert_eq!(e.kind(), ErrorKind::Overflow);
                prop_assert!(u16::from(a) + u16::from(b) > 255);
            }
        }
    }

    #[test]
    fn shift_left_is_lossless_or_rejected(v in any::<u16>(), n in 0u32..16) {
        let checked = arith::checked_shl::<Native, u16, _, _>(v, n).ok();
        let expected = (u32::from(v) << n <= u32::from(u16::MAX)).then(|| v << n);
        prop_assert_eq!(checked, expected);
    }
}
