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

//! Error values describing a violated safe-integer invariant.
//!
//! There are exactly two kinds: a *range* error, raised when a value offered
//! at construction or assignment lies outside the target's domain, and an
//! *overflow* error, raised when the exact result of an arithmetic, unary or
//! bitwise operation does not fit its destination. Misuse that can be caught
//! by the type system (negating an unsigned value, constructing from a
//! non-integer) is a compile error and has no runtime kind.

/// The kind of a [`SafeNumericError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value outside the accepted domain was presented.
    Range,
    /// An operation produced a result outside the destination's range.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range => write!(f, "range"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}

/// A detected violation of the safe-integer invariant, with a diagnostic
/// message naming what was violated.
///
/// # Examples
///
/// ```rust
/// # use bulwark::error::{ErrorKind, SafeNumericError};
///
/// let e = SafeNumericError::Overflow("Overflow on increment");
/// assert_eq!(e.kind(), ErrorKind::Overflow);
/// assert_eq!(e.to_string(), "overflow error: Overflow on increment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeNumericError {
    /// A value outside the accepted domain was presented.
    Range(&'static str),
    /// An operation produced a result outside the destination's range.
    Overflow(&'static str),
}

impl SafeNumericError {
    /// Returns the kind of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Range(_) => ErrorKind::Range,
            Self::Overflow(_) => ErrorKind::Overflow,
        }
    }

    /// Returns the diagnostic message.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Range(m) | Self::Overflow(m) => m,
        }
    }
}

impl std::fmt::Display for SafeNumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.kind(), self.message())
    }
}

impl std::error::Error for SafeNumericError {}
