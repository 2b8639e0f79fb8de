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

//! Explicit conversions between safe values and primitives.
//!
//! There is no implicit conversion in either direction. A safe value converts
//! losslessly into its own primitive type, and any primitive can be tried into
//! any safe value.
//!
//! ```rust
//! # use bulwark::types::SafeU8;
//!
//! let x = SafeU8::try_from(200i32).unwrap();
//! assert_eq!(u8::from(x), 200);
//! assert!(SafeU8::try_from(-1i8).is_err());
//! ```

use super::SafeValue;
use crate::{
    domain::Domain,
    error::SafeNumericError,
    policy::{exception::ExceptionPolicy, promotion::PromotionPolicy},
};
use bulwark_core::num::integer::Integer;

macro_rules! impl_convert {
    ($($prim:ident),*) => {
        $(
            impl<V, P, E> From<SafeValue<$prim, V, P, E>> for $prim {
                #[inline]
                fn from(value: SafeValue<$prim, V, P, E>) -> Self {
                    value.into_inner()
                }
            }

            impl<T, V, P, E> TryFrom<$prim> for SafeValue<T, V, P, E>
            where
                T: Integer,
                V: Domain<T>,
                P: PromotionPolicy,
                E: ExceptionPolicy,
            {
                type Error = SafeNumericError;

                #[inline]
                fn try_from(raw: $prim) -> Result<Self, Self::Error> {
                    Self::try_new(raw)
                }
            }
        )*
    };
}

impl_convert!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
