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

//! Arithmetic, bitwise and shift operators.
//!
//! Every binary operator accepts any primitive integer or any other safe value
//! on the right and yields a safe value of the left operand's type. The
//! compound-assignment forms evaluate the binary operator and then assign, so
//! a violation leaves the left operand untouched.
//!
//! Unary minus and bitwise complement exist only for signed representations:
//!
//! ```rust,compile_fail
//! # use bulwark::types::SafeU32;
//!
//! let _ = -SafeU32::new(1u32);
//! ```
//!
//! ```rust,compile_fail
//! # use bulwark::types::SafeU8;
//!
//! let _ = !SafeU8::new(1u8);
//! ```

use super::SafeValue;
use crate::{
    arith,
    domain::Domain,
    op::BinaryOp,
    policy::{exception::ExceptionPolicy, promotion::PromotionPolicy},
};
use bulwark_core::num::integer::{Integer, SignedInteger};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

const COMPLEMENT_OVERFLOW: &str = "Overflow on bitwise complement";

macro_rules! impl_binary_op {
    ($Op:ident::$method:ident, $OpAssign:ident::$assign:ident, $kind:ident) => {
        impl<T, V, P, E, T2, V2, P2, E2> $Op<SafeValue<T2, V2, P2, E2>> for SafeValue<T, V, P, E>
        where
            T: Integer,
            V: Domain<T>,
            P: PromotionPolicy,
            E: ExceptionPolicy,
            T2: Integer,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: SafeValue<T2, V2, P2, E2>) -> Self {
                self.apply(BinaryOp::$kind, rhs.get())
            }
        }

        impl<T, V, P, E, T2, V2, P2, E2> $OpAssign<SafeValue<T2, V2, P2, E2>>
            for SafeValue<T, V, P, E>
        where
            T: Integer,
            V: Domain<T>,
            P: PromotionPolicy,
            E: ExceptionPolicy,
            T2: Integer,
        {
            #[inline]
            fn $assign(&mut self, rhs: SafeValue<T2, V2, P2, E2>) {
                self.apply_assign(BinaryOp::$kind, rhs.get());
            }
        }

        impl_binary_op!(
            @primitive $Op::$method, $OpAssign::$assign, $kind;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
        );
    };
    (@primitive $Op:ident::$method:ident, $OpAssign:ident::$assign:ident, $kind:ident; $($prim:ident),*) => {
        $(
            impl<T, V, P, E> $Op<$prim> for SafeValue<T, V, P, E>
            where
                T: Integer,
                V: Domain<T>,
                P: PromotionPolicy,
                E: ExceptionPolicy,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: $prim) -> Self {
                    self.apply(BinaryOp::$kind, rhs)
                }
            }

            impl<T, V, P, E> $OpAssign<$prim> for SafeValue<T, V, P, E>
            where
                T: Integer,
                V: Domain<T>,
                P: PromotionPolicy,
                E: ExceptionPolicy,
            {
                #[inline]
                fn $assign(&mut self, rhs: $prim) {
                    self.apply_assign(BinaryOp::$kind, rhs);
                }
            }
        )*
    };
}

impl_binary_op!(Add::add, AddAssign::add_assign, Add);
impl_binary_op!(Sub::sub, SubAssign::sub_assign, Sub);
impl_binary_op!(Mul::mul, MulAssign::mul_assign, Mul);
impl_binary_op!(Div::div, DivAssign::div_assign, Div);
impl_binary_op!(Rem::rem, RemAssign::rem_assign, Rem);
impl_binary_op!(BitOr::bitor, BitOrAssign::bitor_assign, BitOr);
impl_binary_op!(BitAnd::bitand, BitAndAssign::bitand_assign, BitAnd);
impl_binary_op!(BitXor::bitxor, BitXorAssign::bitxor_assign, BitXor);
impl_binary_op!(Shl::shl, ShlAssign::shl_assign, Shl);
impl_binary_op!(Shr::shr, ShrAssign::shr_assign, Shr);

/// Computed as `0 - self` through the subtraction path.
impl<T, V, P, E> Neg for SafeValue<T, V, P, E>
where
    T: SignedInteger,
    V: Domain<T>,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    type Output = Self;

    fn neg(self) -> Self {
        let negated = arith::evaluate::<P, T, T>(BinaryOp::Sub, T::zero(), self.get())
            .and_then(|exact| Self::settle(exact, BinaryOp::Sub.overflow_message()));
        match negated {
            Ok(value) => Self::from_raw(value),
            Err(error) => {
                E::raise(error);
                self
            }
        }
    }
}

impl<T, V, P, E> Not for SafeValue<T, V, P, E>
where
    T: SignedInteger,
    V: Domain<T>,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    type Output = Self;

    fn not(self) -> Self {
        let complement = !self.get();
        if V::validate(complement) {
            Self::from_raw(complement)
        } else {
            E::overflow_error(COMPLEMENT_OVERFLOW);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{Full, Ranged},
        error::SafeNumericError,
        policy::{
            exception::Unwind,
            promotion::{Automatic, Native},
        },
        value::SafeValue,
    };
    use std::panic::{UnwindSafe, catch_unwind};

    fn payload_of<R, F: FnOnce() -> R + UnwindSafe>(f: F) -> Option<SafeNumericError> {
        let caught = catch_unwind(f).err()?;
        caught.downcast_ref::<SafeNumericError>().copied()
    }

    #[test]
    fn test_arithmetic_with_primitives() {
        let x = SafeValue::<i32>::new(17i32);
        assert_eq!((x + 3u8).get(), 20);
        assert_eq!((x - 20i64).get(), -3);
        assert_eq!((x * -2i8).get(), -34);
        assert_eq!((x / 5u16).get(), 3);
        assert_eq!((x % 5usize).get(), 2);
    }

    #[test]
    fn test_arithmetic_with_safe_values() {
        let x = SafeValue::<u16>::new(1000u16);
        let y = SafeValue::<i8>::new(-3i8);
        let z = SafeValue::<u8>::new(7u8);
        assert_eq!((x + z).get(), 1007);
        assert_eq!((x + y).get(), 997);
        assert_eq!((x / z).get(), 142);
        let two = SafeValue::<u16>::new(2u8);
        assert_eq!(
            payload_of(move || two + y),
            Some(SafeNumericError::Overflow("Overflow on addition"))
        );
    }

    #[test]
    fn test_output_takes_left_operand_type() {
        let small = SafeValue::<u8>::new(200u8);
        let big = SafeValue::<u64>::new(100u64);
        assert_eq!((big + small).get(), 300u64);
        assert!(payload_of(move || small + big).is_some());
    }

    #[test]
    fn test_division_by_zero() {
        let x = SafeValue::<i64>::new(1i8);
        assert_eq!(
            payload_of(move || x / 0u8),
            Some(SafeNumericError::Overflow("Division by zero"))
        );
        assert_eq!(
            payload_of(move || x % 0i128),
            Some(SafeNumericError::Overflow("Division by zero"))
        );
    }

    #[test]
    fn test_bitwise_and_shifts() {
        let x = SafeValue::<u8>::new(0b1100u8);
        assert_eq!((x | 0b0011u8).get(), 0b1111);
        assert_eq!((x & 0b0100u8).get(), 0b0100);
        assert_eq!((x ^ 0b1111u8).get(), 0b0011);
        assert_eq!((x << 4u32).get(), 0b1100_0000);
        assert_eq!((x >> 2i32).get(), 0b11);
        assert_eq!(
            payload_of(move || x << 5u32),
            Some(SafeNumericError::Overflow("Overflow on shift left"))
        );
        assert_eq!(
            payload_of(move || x >> 8u32),
            Some(SafeNumericError::Overflow("Shift amount out of range"))
        );
    }

    #[test]
    fn test_compound_assignment_commits_on_success() {
        let mut x = SafeValue::<i16>::new(10i8);
        x += 5u8;
        x -= 20i32;
        x *= 3u8;
        x /= -5i8;
        x %= 2u8;
        assert_eq!(x.get(), 1);
        x |= 6u8;
        x &= 5u8;
        x ^= 1u8;
        x <<= 3u8;
        x >>= 1u8;
        assert_eq!(x.get(), 16);
        x += SafeValue::<u8>::new(4u8);
        assert_eq!(x.get(), 20);
    }

    #[test]
    fn test_compound_assignment_overflow_unwinds() {
        let payload = payload_of(|| {
            let mut x = SafeValue::<u32>::new(u32::MAX);
            x += 1u8;
            x
        });
        assert_eq!(payload, Some(SafeNumericError::Overflow("Overflow on addition")));
    }

    #[test]
    fn test_result_must_satisfy_domain() {
        type Percent = SafeValue<u8, Ranged<0, 100>>;
        let p = Percent::new(60u8);
        assert_eq!((p + 40u8).get(), 100);
        assert!(payload_of(move || p + 41u8).is_some());
    }

    #[test]
    fn test_automatic_promotion_rescues_intermediate() {
        // Native holds i8 + u16 in u16, which cannot represent -2.
        type Auto = SafeValue<i8, Full, Automatic, Unwind>;
        assert_eq!((Auto::new(-5i8) + 3u16).get(), -2);
        let native = SafeValue::<i8, Full, Native, Unwind>::new(-5i8);
        assert!(payload_of(move || native + 3u16).is_some());
    }

    #[test]
    fn test_neg() {
        assert_eq!((-SafeValue::<i8>::new(5i8)).get(), -5);
        assert_eq!((-SafeValue::<i8>::new(-127i8)).get(), 127);
        assert_eq!(
            payload_of(|| -SafeValue::<i8>::new(i8::MIN)),
            Some(SafeNumericError::Overflow("Overflow on subtraction"))
        );
        assert_eq!((-SafeValue::<i128>::new(i128::MAX)).get(), -i128::MAX);
    }

    #[test]
    fn test_not() {
        assert_eq!((!SafeValue::<i8>::new(0i8)).get(), -1);
        assert_eq!((!SafeValue::<i32>::new(-1i32)).get(), 0);
        assert_eq!(
            payload_of(|| !SafeValue::<i8, Ranged<0, 10>>::new(3i8)),
            Some(SafeNumericError::Overflow("Overflow on bitwise complement"))
        );
    }
}
