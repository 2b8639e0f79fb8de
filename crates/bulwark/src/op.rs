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

/// The kind of a binary operator.
///
/// Promotion policies receive the operator kind together with the operand
/// representations, and the checked arithmetic layer dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitOr,
    BitAnd,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// The operator's symbol, e.g. `"+"`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    /// Returns `true` for `|`, `&` and `^`.
    #[inline]
    pub const fn is_bitwise(&self) -> bool {
        matches!(self, Self::BitOr | Self::BitAnd | Self::BitXor)
    }

    /// Returns `true` for `<<` and `>>`.
    #[inline]
    pub const fn is_shift(&self) -> bool {
        matches!(self, Self::Shl | Self::Shr)
    }

    /// The diagnostic reported when the operator's result does not fit.
    pub const fn overflow_message(&self) -> &'static str {
        match self {
            Self::Add => "Overflow on addition",
            Self::Sub => "Overflow on subtraction",
            Self::Mul => "Overflow on multiplication",
            Self::Div => "Overflow on division",
            Self::Rem => "Overflow on modulus",
            Self::BitOr => "Overflow on bitwise or",
            Self::BitAnd => "Overflow on bitwise and",
            Self::BitXor => "Overflow on bitwise xor",
            Self::Shl => "Overflow on shift left",
            Self::Shr => "Overflow on shift right",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
