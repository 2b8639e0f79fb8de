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

use std::cmp::Ordering;

/// A sign-magnitude integer wide enough to hold every value of every
/// supported integer representation.
///
/// The covered range is `[-(2^128 - 1), 2^128 - 1]`, a strict superset of both
/// `i128` and `u128`. Values are canonical: zero is never negative, so the
/// derived equality and hashing agree with numeric equality.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::wide::Wide;
///
/// let a = Wide::from_i128(-1);
/// let b = Wide::from_u128(u128::MAX);
/// assert!(a < b);
/// assert_eq!(a.to_i128(), Some(-1));
/// assert_eq!(b.to_i128(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wide {
    negative: bool,
    magnitude: u128,
}

impl Wide {
    /// The value `0`.
    pub const ZERO: Self = Self::new(false, 0);
    /// The value `1`.
    pub const ONE: Self = Self::new(false, 1);
    /// The smallest representable value, `-(2^128 - 1)`.
    pub const MIN: Self = Self::new(true, u128::MAX);
    /// The largest representable value, `2^128 - 1`.
    pub const MAX: Self = Self::new(false, u128::MAX);

    /// Creates a `Wide` from a sign and a magnitude.
    ///
    /// A negative zero is normalized to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::wide::Wide;
    ///
    /// assert_eq!(Wide::new(true, 0), Wide::ZERO);
    /// assert!(Wide::new(true, 5).is_negative());
    /// ```
    #[inline]
    pub const fn new(negative: bool, magnitude: u128) -> Self {
        Self {
            negative: negative && magnitude != 0,
            magnitude,
        }
    }

    /// Widens an `i128`.
    #[inline]
    pub const fn from_i128(value: i128) -> Self {
        Self::new(value < 0, value.unsigned_abs())
    }

    /// Widens a `u128`.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self::new(false, value)
    }

    /// Returns `true` if the value is strictly less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }

    /// Converts to `i128`, returning `None` if the value is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::wide::Wide;
    ///
    /// assert_eq!(Wide::from_i128(i128::MIN).to_i128(), Some(i128::MIN));
    /// assert_eq!(Wide::MIN.to_i128(), None);
    /// ```
    #[inline]
    pub const fn to_i128(self) -> Option<i128> {
        if self.negative {
            if self.magnitude <= 1u128 << 127 {
                // 2^127 wraps onto i128::MIN, which is exactly its negation.
                Some((self.magnitude as i128).wrapping_neg())
            } else {
                None
            }
        } else if self.magnitude <= i128::MAX as u128 {
            Some(self.magnitude as i128)
        } else {
            None
        }
    }

    /// Converts to `u128`, returning `None` if the value is negative.
    #[inline]
    pub const fn to_u128(self) -> Option<u128> {
        if self.negative {
            None
        } else {
            Some(self.magnitude)
        }
    }

    /// Returns the 128-bit two's complement bit pattern of the value.
    ///
    /// The pattern is exact for every value in `[i128::MIN, u128::MAX]`;
    /// below that range it wraps modulo `2^128`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::num::wide::Wide;
    ///
    /// assert_eq!(Wide::from_i128(-1).to_bits(), u128::MAX);
    /// assert_eq!(Wide::from_u128(7).to_bits(), 7);
    /// ```
    #[inline]
    pub const fn to_bits(self) -> u128 {
        if self.negative {
            self.magnitude.wrapping_neg()
        } else {
            self.magnitude
        }
    }
}

impl Ord for Wide {
    /// Any negative value is less than any non-negative value; two negative
    /// values order by decreasing magnitude, two non-negative values by
    /// increasing magnitude.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Wide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wide({})", self)
    }
}

impl std::fmt::Display for Wide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}
