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

//! # Numeric Foundations
//!
//! Traits and value types for exact, representation-aware integer
//! programming.
//!
//! ## Submodules
//!
//! - `integer`: The `Integer` trait implemented for every primitive integer
//!   type, and the `SignedInteger` marker used to gate sign-dependent
//!   operations at compile time.
//! - `repr`: `Repr`, a runtime descriptor (bit width and signedness) of an
//!   integer representation, with its bounds and membership test.
//! - `wide`: `Wide`, a sign-magnitude integer spanning every value of every
//!   supported representation.
//! - `compare`: Mixed-signedness-safe relational primitives.
//! - `ops`: By-value checked arithmetic on `Wide`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod compare;
pub mod integer;
pub mod ops;
pub mod repr;
pub mod wide;
