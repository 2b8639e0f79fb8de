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

//! # Bulwark Core
//!
//! Numeric foundations for the Bulwark safe-integer ecosystem. This crate
//! provides the representation-level building blocks that the range-checked
//! value wrapper in `bulwark` is assembled from, kept free of any policy so
//! that they can be reused and tested in isolation.
//!
//! ## Modules
//!
//! - `num`: The closed set of supported fixed-width integer representations
//!   (`Integer`, `SignedInteger`), their runtime descriptors (`Repr`), the
//!   sign-magnitude `Wide` form every representation widens into, mixed-sign
//!   relational primitives (`compare`), and exact by-value arithmetic on
//!   `Wide` (`ops`).
//!
//! ## Purpose
//!
//! Comparing or combining integers of different widths and signedness is
//! where most overflow bugs hide (`-1 < u32::MAX` is `false` after an implicit
//! cast in many languages). Everything here works on exact values so that the
//! layers above only have to decide what to do with a result, never how to
//! compute it.

pub mod num;
