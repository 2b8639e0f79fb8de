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

//! # Exception Policies
//!
//! An exception policy decides the program-level consequence of a detected
//! violation. The core calls `range_error` or `overflow_error` and never
//! inspects what happens next; every call site is written so that a policy
//! may unwind, terminate, or return.
//!
//! - [`Unwind`]: logs a `tracing` error event, then panics with a
//!   [`SafeNumericError`] payload. The panic can be
//!   caught with `std::panic::catch_unwind` and the payload recovered with
//!   `downcast_ref::<SafeNumericError>()`.
//! - [`Abort`]: records the violation as a `tracing` error event, then aborts
//!   the process.
//! - [`LogAndContinue`]: records the violation as a `tracing` warning and
//!   returns. Mutations that detected the violation are not committed; a
//!   value constructed from an invalid raw value holds its truncated bits and
//!   is no longer guaranteed to satisfy its domain.

use crate::error::{ErrorKind, SafeNumericError};

/// The handler invoked on every detected violation.
pub trait ExceptionPolicy {
    /// A value outside the accepted domain was presented.
    fn range_error(message: &'static str);

    /// An operation produced a result outside its destination's range.
    fn overflow_error(message: &'static str);

    /// Dispatches `error` to the handler for its kind.
    #[inline]
    fn raise(error: SafeNumericError) {
        match error {
            SafeNumericError::Range(message) => Self::range_error(message),
            SafeNumericError::Overflow(message) => Self::overflow_error(message),
        }
    }
}

/// Panics with the [`SafeNumericError`] as payload.
///
/// The payload is not a string, so the default panic hook cannot print it;
/// the violation is logged with `tracing::error!` before unwinding.
///
/// # Examples
///
/// ```rust
/// # use bulwark::error::SafeNumericError;
/// # use bulwark::policy::exception::{ExceptionPolicy, Unwind};
///
/// let caught = std::panic::catch_unwind(|| Unwind::overflow_error("Overflow on addition"))
///     .unwrap_err();
/// assert_eq!(
///     caught.downcast_ref::<SafeNumericError>(),
///     Some(&SafeNumericError::Overflow("Overflow on addition"))
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unwind;

impl Unwind {
    fn unwind(error: SafeNumericError) -> ! {
        tracing::error!(kind = %error.kind(), reason = error.message(), "safe numeric invariant violated, unwinding");
        std::panic::panic_any(error)
    }
}

impl ExceptionPolicy for Unwind {
    fn range_error(message: &'static str) {
        Self::unwind(SafeNumericError::Range(message))
    }

    fn overflow_error(message: &'static str) {
        Self::unwind(SafeNumericError::Overflow(message))
    }
}

/// Logs the violation and aborts the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Abort;

impl Abort {
    fn terminate(kind: ErrorKind, message: &'static str) -> ! {
        tracing::error!(%kind, reason = message, "safe numeric invariant violated, aborting");
        std::process::abort()
    }
}

impl ExceptionPolicy for Abort {
    fn range_error(message: &'static str) {
        Self::terminate(ErrorKind::Range, message)
    }

    fn overflow_error(message: &'static str) {
        Self::terminate(ErrorKind::Overflow, message)
    }
}

/// Logs the violation as a warning and returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogAndContinue;

impl ExceptionPolicy for LogAndContinue {
    fn range_error(message: &'static str) {
        tracing::warn!(kind = %ErrorKind::Range, reason = message, "safe numeric invariant violated");
    }

    fn overflow_error(message: &'static str) {
        tracing::warn!(kind = %ErrorKind::Overflow, reason = message, "safe numeric invariant violated");
    }
}
