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

//! Relational operators.
//!
//! Safe values compare by numeric value against every primitive integer (on
//! either side) and against every other safe value, regardless of width or
//! signedness.
//!
//! ```rust
//! # use bulwark::types::{SafeI32, SafeU32};
//!
//! let minus_one = SafeI32::new(-1i8);
//! let max = SafeU32::new(u32::MAX);
//! assert!(minus_one < max);
//! assert!(max > -1i64);
//! assert!(0u8 > minus_one);
//! assert_eq!(SafeU32::new(7u8), 7i128);
//! ```

use super::SafeValue;
use bulwark_core::num::{compare, integer::Integer};
use std::cmp::Ordering;

impl<T, V, P, E, T2, V2, P2, E2> PartialEq<SafeValue<T2, V2, P2, E2>> for SafeValue<T, V, P, E>
where
    T: Integer,
    T2: Integer,
{
    #[inline]
    fn eq(&self, other: &SafeValue<T2, V2, P2, E2>) -> bool {
        compare::equal(self.get(), other.get())
    }
}

impl<T, V, P, E> Eq for SafeValue<T, V, P, E> where T: Integer {}

impl<T, V, P, E, T2, V2, P2, E2> PartialOrd<SafeValue<T2, V2, P2, E2>> for SafeValue<T, V, P, E>
where
    T: Integer,
    T2: Integer,
{
    #[inline]
    fn partial_cmp(&self, other: &SafeValue<T2, V2, P2, E2>) -> Option<Ordering> {
        Some(compare::compare(self.get(), other.get()))
    }

    #[inline]
    fn lt(&self, other: &SafeValue<T2, V2, P2, E2>) -> bool {
        compare::less_than(self.get(), other.get())
    }

    #[inline]
    fn gt(&self, other: &SafeValue<T2, V2, P2, E2>) -> bool {
        compare::greater_than(self.get(), other.get())
    }

    #[inline]
    fn le(&self, other: &SafeValue<T2, V2, P2, E2>) -> bool {
        !compare::greater_than(self.get(), other.get())
    }

    #[inline]
    fn ge(&self, other: &SafeValue<T2, V2, P2, E2>) -> bool {
        !compare::less_than(self.get(), other.get())
    }
}

impl<T, V, P, E> Ord for SafeValue<T, V, P, E>
where
    T: Integer,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

macro_rules! impl_primitive_cmp {
    ($($prim:ident),*) => {
        $(
            impl<T, V, P, E> PartialEq<$prim> for SafeValue<T, V, P, E>
            where
                T: Integer,
            {
                #[inline]
                fn eq(&self, other: &$prim) -> bool {
                    compare::equal(self.get(), *other)
                }
            }

            impl<T, V, P, E> PartialEq<SafeValue<T, V, P, E>> for $prim
            where
                T: Integer,
            {
                #[inline]
                fn eq(&self, other: &SafeValue<T, V, P, E>) -> bool {
                    compare::equal(*self, other.get())
                }
            }

            impl<T, V, P, E> PartialOrd<$prim> for SafeValue<T, V, P, E>
            where
                T: Integer,
            {
                #[inline]
                fn partial_cmp(&self, other: &$prim) -> Option<Ordering> {
                    Some(compare::compare(self.get(), *other))
                }

                #[inline]
                fn lt(&self, other: &$prim) -> bool {
                    compare::less_than(self.get(), *other)
                }

                #[inline]
                fn gt(&self, other: &$prim) -> bool {
                    compare::greater_than(self.get(), *other)
                }

                #[inline]
                fn le(&self, other: &$prim) -> bool {
                    !compare::greater_than(self.get(), *other)
                }

                #[inline]
                fn ge(&self, other: &$prim) -> bool {
                    !compare::less_than(self.get(), *other)
                }
            }

            impl<T, V, P, E> PartialOrd<SafeValue<T, V, P, E>> for $prim
            where
                T: Integer,
            {
                #[inline]
                fn partial_cmp(&self, other: &SafeValue<T, V, P, E>) -> Option<Ordering> {
                    Some(compare::compare(*self, other.get()))
                }

                #[inline]
                fn lt(&self, other: &SafeValue<T, V, P, E>) -> bool {
                    compare::less_than(*self, other.get())
                }

                #[inline]
                fn gt(&self, other: &SafeValue<T, V, P, E>) -> bool {
                    compare::greater_than(*self, other.get())
                }

                #[inline]
                fn le(&self, other: &SafeValue<T, V, P, E>) -> bool {
                    !compare::greater_than(*self, other.get())
                }

                #[inline]
                fn ge(&self, other: &SafeValue<T, V, P, E>) -> bool {
                    !compare::less_than(*self, other.get())
                }
            }
        )*
    };
}

impl_primitive_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use crate::{domain::Ranged, value::SafeValue};

    #[test]
    fn test_mixed_sign_against_primitives() {
        let minus_one = SafeValue::<i32>::new(-1i32);
        assert!(minus_one < 0u8);
        assert!(minus_one < 4_294_967_295u32);
        assert!(minus_one != u128::MAX);
        assert!(minus_one <= -1i8);
        assert!(minus_one >= -1i128);

        let max = SafeValue::<u32>::new(4_294_967_295u32);
        assert!(!(max < -1i32));
        assert!(max > -1i32);
        assert!(max == 4_294_967_295i64);
    }

    #[test]
    fn test_non_strict_operators_against_primitives() {
        let x = SafeValue::<i8>::new(-1i8);
        assert!(x <= u128::MAX);
        assert!(x <= -1i64);
        assert!(!(x >= 0u8));
        assert!(u64::MAX >= x);
        assert!(!(0usize <= x));
        assert!(-1i128 >= x && -1i128 <= x);
    }

    #[test]
    fn test_primitive_on_the_left() {
        let x = SafeValue::<u64>::new(10u8);
        assert!(-5i8 < x);
        assert!(10usize == x);
        assert!(u128::MAX > x);
        assert!(11i16 >= x);
        assert!(!(9u8 >= x));
    }

    #[test]
    fn test_safe_values_of_different_types() {
        let a = SafeValue::<i8>::new(-128i8);
        let b = SafeValue::<u128>::new(0u8);
        let c = SafeValue::<i64, Ranged<-200, 200>>::new(-128i16);
        assert!(a < b);
        assert!(b > a);
        assert!(a == c);
        assert!(a <= c && a >= c);
        assert_eq!(a.partial_cmp(&b), Some(std::cmp::Ordering::Less));
    }

    #[test]
    fn test_ord_sorts_numerically() {
        let mut v: Vec<_> = [3i16, -7, 0, 12]
            .into_iter()
            .map(SafeValue::<i16>::new)
            .collect();
        v.sort();
        let sorted: Vec<i16> = v.into_iter().map(|x| x.get()).collect();
        assert_eq!(sorted, vec![-7, 0, 3, 12]);
    }
}
