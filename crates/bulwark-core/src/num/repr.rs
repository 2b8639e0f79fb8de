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

use crate::num::{integer::Integer, wide::Wide};

/// A runtime descriptor of a fixed-width integer representation.
///
/// A `Repr` carries a bit width (8, 16, 32, 64 or 128) and a signedness. It
/// is what promotion policies reason about when choosing the representation
/// that holds the result of a binary operation.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::repr::Repr;
/// # use bulwark_core::num::wide::Wide;
///
/// let r = Repr::of::<i8>();
/// assert_eq!(r.min(), Wide::from_i128(-128));
/// assert_eq!(r.max(), Wide::from_i128(127));
/// assert!(r.contains(Wide::from_i128(-128)));
/// assert!(!r.contains(Wide::from_i128(128)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Repr {
    bits: u32,
    signed: bool,
}

/// The bit widths a `Repr` can take, in increasing order.
pub const SUPPORTED_WIDTHS: [u32; 5] = [8, 16, 32, 64, 128];

impl Repr {
    /// The union of `i128` and `u128`: every value in `[i128::MIN, u128::MAX]`.
    ///
    /// No single primitive holds this range. It is the result of any request
    /// for more than 128 bits, so a mixed-sign 128-bit intermediate is not
    /// forced to pick a signedness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::repr::Repr;
    /// # use bulwark_core::num::wide::Wide;
    ///
    /// assert!(Repr::WIDEST.contains(Wide::from_i128(i128::MIN)));
    /// assert!(Repr::WIDEST.contains(Wide::from_u128(u128::MAX)));
    /// assert!(!Repr::WIDEST.contains(Wide::new(true, 1u128 << 127 | 1)));
    /// ```
    pub const WIDEST: Self = Self {
        bits: 129,
        signed: true,
    };

    /// Creates a descriptor, returning `None` for unsupported widths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::repr::Repr;
    ///
    /// assert!(Repr::new(32, true).is_some());
    /// assert!(Repr::new(24, true).is_none());
    /// ```
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Option<Self> {
        match bits {
            8 | 16 | 32 | 64 | 128 => Some(Self { bits, signed }),
            _ => None,
        }
    }

    /// Returns the descriptor of the primitive type `T`.
    #[inline]
    pub const fn of<T: Integer>() -> Self {
        Self {
            bits: T::BITS,
            signed: T::IS_SIGNED,
        }
    }

    /// Returns the smallest supported representation with the given
    /// signedness that has at least `bits` bits. Requests beyond 128 bits
    /// yield [`Repr::WIDEST`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::repr::Repr;
    ///
    /// assert_eq!(Repr::fitting(9, true), Repr::new(16, true).unwrap());
    /// assert_eq!(Repr::fitting(128, false), Repr::new(128, false).unwrap());
    /// assert_eq!(Repr::fitting(200, false), Repr::WIDEST);
    /// ```
    #[inline]
    pub const fn fitting(bits: u32, signed: bool) -> Self {
        let mut i = 0;
        while i < SUPPORTED_WIDTHS.len() {
            if SUPPORTED_WIDTHS[i] >= bits {
                return Self {
                    bits: SUPPORTED_WIDTHS[i],
                    signed,
                };
            }
            i += 1;
        }
        Self::WIDEST
    }

    /// Whether this is [`Repr::WIDEST`].
    #[inline]
    pub const fn is_widest(&self) -> bool {
        self.bits > 128
    }

    /// Width in bits. [`Repr::WIDEST`] reports 129.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether the representation holds negative values.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Number of bits available for the magnitude of non-negative values.
    #[inline]
    pub const fn magnitude_bits(&self) -> u32 {
        if self.signed { self.bits - 1 } else { self.bits }
    }

    /// The smallest value of the representation.
    #[inline]
    pub const fn min(&self) -> Wide {
        if self.is_widest() {
            Wide::from_i128(i128::MIN)
        } else if self.signed {
            Wide::new(true, 1u128 << (self.bits - 1))
        } else {
            Wide::ZERO
        }
    }

    /// The largest value of the representation.
    #[inline]
    pub const fn max(&self) -> Wide {
        let magnitude_bits = self.magnitude_bits();
        if magnitude_bits >= 128 {
            Wide::from_u128(u128::MAX)
        } else {
            Wide::from_u128((1u128 << magnitude_bits) - 1)
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: Wide) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Interprets the low `bits` bits of a two's complement pattern in this
    /// representation, sign-extending for signed representations.
    ///
    /// A 128-bit pattern carries no sign for [`Repr::WIDEST`] and is read as
    /// unsigned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::repr::Repr;
    /// # use bulwark_core::num::wide::Wide;
    ///
    /// let i8_repr = Repr::of::<i8>();
    /// assert_eq!(i8_repr.from_bits(0xFF), Wide::from_i128(-1));
    /// assert_eq!(Repr::of::<u8>().from_bits(0x1FF), Wide::from_u128(0xFF));
    /// ```
    pub const fn from_bits(&self, pattern: u128) -> Wide {
        if self.is_widest() {
            return Wide::from_u128(pattern);
        }
        let masked = if self.bits >= 128 {
            pattern
        } else {
            pattern & ((1u128 << self.bits) - 1)
        };
        let sign_set = (masked >> (self.bits - 1)) & 1 == 1;
        if self.signed && sign_set {
            let magnitude = if self.bits >= 128 {
                masked.wrapping_neg()
            } else {
                (1u128 << self.bits) - masked
            };
            Wide::new(true, magnitude)
        } else {
            Wide::from_u128(masked)
        }
    }
}

impl std::fmt::Display for Repr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_widest() {
            return f.write_str("i128|u128");
        }
        write!(f, "{}{}", if self.signed { "i" } else { "u" }, self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_match_primitives() {
        assert_eq!(Repr::of::<i8>().min(), i8::MIN.widen());
        assert_eq!(Repr::of::<i8>().max(), i8::MAX.widen());
        assert_eq!(Repr::of::<u32>().min(), Wide::ZERO);
        assert_eq!(Repr::of::<u32>().max(), u32::MAX.widen());
        assert_eq!(Repr::of::<i128>().min(), i128::MIN.widen());
        assert_eq!(Repr::of::<i128>().max(), i128::MAX.widen());
        assert_eq!(Repr::of::<u128>().max(), u128::MAX.widen());
    }

    #[test]
    fn test_fitting_rounds_up() {
        assert_eq!(Repr::fitting(1, false).bits(), 8);
        assert_eq!(Repr::fitting(8, true).bits(), 8);
        assert_eq!(Repr::fitting(33, true).bits(), 64);
        assert_eq!(Repr::fitting(128, true).bits(), 128);
        assert_eq!(Repr::fitting(129, true), Repr::WIDEST);
    }

    #[test]
    fn test_widest_spans_both_128_bit_types() {
        let widest = Repr::WIDEST;
        assert!(widest.is_widest());
        assert!(!Repr::of::<u128>().is_widest());
        assert_eq!(widest.min(), i128::MIN.widen());
        assert_eq!(widest.max(), u128::MAX.widen());
        assert!(!widest.contains(Wide::new(true, (1u128 << 127) + 1)));
        assert_eq!(widest.from_bits(u128::MAX), Wide::MAX);
        assert_eq!(widest.to_string(), "i128|u128");
    }

    #[test]
    fn test_from_bits_sign_extension() {
        let i16_repr = Repr::of::<i16>();
        assert_eq!(i16_repr.from_bits(0x8000), Wide::from_i128(-32768));
        assert_eq!(i16_repr.from_bits(0x7FFF), Wide::from_i128(32767));
        let i128_repr = Repr::of::<i128>();
        assert_eq!(i128_repr.from_bits(u128::MAX), Wide::from_i128(-1));
        assert_eq!(i128_repr.from_bits(1u128 << 127), Wide::from_i128(i128::MIN));
        assert_eq!(Repr::of::<u128>().from_bits(u128::MAX), Wide::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Repr::of::<i64>().to_string(), "i64");
        assert_eq!(Repr::of::<u8>().to_string(), "u8");
    }
}
