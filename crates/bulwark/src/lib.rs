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

//! # Bulwark
//!
//! Range-checked integer values. A `SafeValue<T, V, P, E>` wraps one fixed-width
//! integer and guarantees that it stays inside its validation domain across
//! construction, assignment, arithmetic, bitwise operations, shifts, and
//! increments. Comparisons are exact across mixed signedness, so `-1 < u32::MAX`
//! holds for safe values of any width.
//!
//! ## Modules
//!
//! - `value`: The `SafeValue` wrapper with its operators, comparisons and
//!   conversions.
//! - `domain`: Validation domains (`Full`, `Ranged<MIN, MAX>`).
//! - `policy`: Compile-time promotion policies (`Native`, `Automatic`) and
//!   exception policies (`Unwind`, `Abort`, `LogAndContinue`).
//! - `arith`: Exact, promotion-aware checked evaluation of binary operators,
//!   usable without a wrapper.
//! - `op`: The binary operator kinds shared by the layers above.
//! - `error`: `SafeNumericError` and its `ErrorKind`.
//! - `types`: Aliases for the common configurations (`SafeI32`, `SafeU8`, ...).
//!
//! ## Purpose
//!
//! Silent wraparound and sign-confused comparisons turn into size and index
//! bugs far from their origin. Every detected violation is handed to an
//! exception policy chosen by the user, so a program decides once, at the type
//! level, whether an overflow unwinds, aborts, or is logged.
//!
//! ```rust
//! use bulwark::types::{SafeI32, SafeU8};
//!
//! let len = SafeU8::new(250u8);
//! let err = std::panic::catch_unwind(|| len + 10u8).unwrap_err();
//! let err = err.downcast_ref::<bulwark::error::SafeNumericError>().unwrap();
//! assert_eq!(err.message(), "Overflow on addition");
//!
//! assert!(SafeI32::new(-1i8) < SafeU8::new(0u8));
//! ```

pub mod arith;
pub mod domain;
pub mod error;
pub mod op;
pub mod policy;
pub mod types;
pub mod value;
