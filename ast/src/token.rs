// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! Token shapes produced by the lexer/post-lexer and consumed by the parser.

use eexpr_span::Span;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A wrap bracket kind. `Block` is the indentation-delimited form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WrapKind {
    Paren,
    Brack,
    Brace,
    Block,
}

impl fmt::Display for WrapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WrapKind::Paren => "(",
            WrapKind::Brack => "[",
            WrapKind::Brace => "{",
            WrapKind::Block => "indent",
        };
        write!(f, "{s}")
    }
}

/// Where a `STRING` token sits within a (possibly unspliced) string template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpliceRole {
    /// An ordinary string with no embedded expressions.
    Plain,
    /// The opening piece of a template, followed by an embedded expression.
    Open,
    /// A piece between two embedded expressions.
    Middle,
    /// The final piece of a template.
    Close,
    /// The lexer hit an unclosed string; this role only ever reaches the
    /// parser as a signal that the splice sequence could not be completed.
    Corrupt,
}

/// The arbitrary-precision payload of a `NUMBER` token.
///
/// `mantissa` and `exponent` are handed down verbatim from the lexer's own
/// bigint representation; this crate never inspects their digits, only
/// copies them into the tree, so they are carried here as opaque decimal
/// text rather than re-implemented as a bigint type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberLiteral {
    pub mantissa: String,
    pub radix: u8,
    pub fractional_digits: u32,
    pub exponent: String,
}

/// The payload carried by a `STRING` token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringToken {
    pub text: String,
    pub splice: SpliceRole,
}

/// The kind-specific payload of a token, or nothing for punctuation tokens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    Number(NumberLiteral),
    Codepoint(char),
    String(StringToken),
    Symbol(String),
    Wrap { kind: WrapKind, is_open: bool },
    Colon,
    Ellipsis,
    /// The dot that joins two links of a chain expression (`a.b`).
    Chain,
    Semicolon,
    Comma,
    /// A leading dot with nothing before it (`.foo`), already disambiguated
    /// from `Chain` by the post-lexer.
    Predot,
    Space,
    Newline,
    Eof,
}

impl TokenKind {
    pub fn is_open_wrap(&self) -> bool {
        matches!(self, TokenKind::Wrap { is_open: true, .. })
    }

    pub fn is_close_wrap_of(&self, kind: WrapKind) -> bool {
        matches!(self, TokenKind::Wrap { kind: k, is_open: false } if *k == kind)
    }

    pub fn as_string(&self) -> Option<&StringToken> {
        match self {
            TokenKind::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(_) => write!(f, "number"),
            TokenKind::Codepoint(_) => write!(f, "codepoint"),
            TokenKind::String(_) => write!(f, "string"),
            TokenKind::Symbol(s) => write!(f, "symbol `{s}`"),
            TokenKind::Wrap { kind, is_open: true } => write!(f, "opening `{kind}`"),
            TokenKind::Wrap { kind, is_open: false } => write!(f, "closing `{kind}`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Ellipsis => write!(f, "`..`"),
            TokenKind::Chain => write!(f, "`.`"),
            TokenKind::Semicolon => write!(f, "`;`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Predot => write!(f, "leading `.`"),
            TokenKind::Space => write!(f, "whitespace"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// One token of the post-lexed stream the parser consumes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
    /// Tokens the colorizer needs to see but the grammar must skip over.
    pub transparent: bool,
}

impl Token {
    pub fn new(span: Span, kind: TokenKind) -> Self {
        Self { span, kind, transparent: false }
    }

    pub fn transparent(span: Span, kind: TokenKind) -> Self {
        Self { span, kind, transparent: true }
    }

    /// A sentinel `EOF` token at `span`, used past the end of the real stream.
    pub fn eof_at(span: Span) -> Self {
        Self { span, kind: TokenKind::Eof, transparent: false }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
