// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! Source location types used by the eexpr token stream and parse tree.
//!
//! The actual bookkeeping that produces these positions (reading files,
//! tracking tabs vs. spaces, mapping byte offsets to line/column pairs) is
//! the job of the lexer that sits upstream of this crate; `Position` and
//! `Span` only need to be cheap, `Copy`, and orderable so the parser can
//! compare and merge them without knowing how they were computed.

#![forbid(unsafe_code)]

use std::cmp::{max, min};
use std::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single point in the source, expressed as a zero-indexed line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// A half-open-by-convention range `[start, end]` over source positions.
///
/// Every token and every eexpr node carries one of these. `Span::merge`
/// (and the `+` operator, mirrored from the pattern the parser's host
/// language uses for combining sub-spans) is the only way ranges grow:
/// the parser always widens a span from its children rather than
/// re-deriving it from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub const fn at(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span { start: min(self.start, other.start), end: max(self.end, other.end) }
    }

    /// `true` if `start <= end`, the invariant every constructed node must uphold.
    pub fn is_well_formed(self) -> bool {
        self.start <= self.end
    }
}

impl Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        self.merge(other)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.start, self.end)
    }
}
