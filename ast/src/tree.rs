// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! The eexpr parse tree produced by [`eexpr_parser`](../eexpr_parser/index.html).

use crate::NumberLiteral;
use eexpr_span::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One embedded expression inside a spliced string, together with the
/// literal text that followed it up to the next splice boundary (or the
/// closing quote).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringPart {
    /// `None` when the template was missing an expression at this position
    /// (see `MISSING_TEMPLATE_EXPR`); parsing still records the text that
    /// followed so later tooling can keep rendering the string.
    pub expr: Option<EExpr>,
    pub text_after: String,
}

/// A node of the eexpr tree. Every variant mirrors a precedence level or an
/// atomic/wrap form from the grammar; see the module docs on
/// `eexpr_parser` for how each one is produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EExprKind {
    Symbol(String),
    Number(NumberLiteral),
    Codepoint(char),
    /// `head` is the text of the first (or only) string piece; `parts` is
    /// empty for a plain, unspliced string.
    String { head: String, parts: Vec<StringPart> },
    Paren(Option<Box<EExpr>>),
    Brack(Option<Box<EExpr>>),
    Brace(Option<Box<EExpr>>),
    /// An indentation block. Unlike `Paren`/`Brack`/`Brace`, which wrap a
    /// single (possibly semicolon-joined) child, a block's children are the
    /// newline-separated lines of its body directly.
    Block(Vec<EExpr>),
    /// Juxtaposed or dot-joined atomics; always has at least 2 elements.
    Chain(Vec<EExpr>),
    /// A leading-dot decoration on a chain (`.field.method()`).
    Predot(Box<EExpr>),
    /// Whitespace-separated chains; always has at least 2 elements.
    Space(Vec<EExpr>),
    /// `a .. b`; either side may be absent.
    Ellipsis(Option<Box<EExpr>>, Option<Box<EExpr>>),
    Colon(Box<EExpr>, Box<EExpr>),
    /// A comma-separated list. Exists only when at least one `,` was seen;
    /// may be empty if no sub-expressions were found around it.
    Comma(Vec<EExpr>),
    /// A semicolon-separated list, with the same empty-list policy as `Comma`.
    Semicolon(Vec<EExpr>),
}

/// A node of the eexpr tree, tagged with the source range it covers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EExpr {
    pub span: Span,
    pub kind: EExprKind,
}

impl EExpr {
    pub fn new(span: Span, kind: EExprKind) -> Self {
        debug_assert!(span.is_well_formed(), "eexpr span must have start <= end");
        Self { span, kind }
    }

    /// The name of the variant, used in error messages and tests.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            EExprKind::Symbol(_) => "symbol",
            EExprKind::Number(_) => "number",
            EExprKind::Codepoint(_) => "codepoint",
            EExprKind::String { .. } => "string",
            EExprKind::Paren(_) => "paren",
            EExprKind::Brack(_) => "brack",
            EExprKind::Brace(_) => "brace",
            EExprKind::Block(_) => "block",
            EExprKind::Chain(_) => "chain",
            EExprKind::Predot(_) => "predot",
            EExprKind::Space(_) => "space",
            EExprKind::Ellipsis(_, _) => "ellipsis",
            EExprKind::Colon(_, _) => "colon",
            EExprKind::Comma(_) => "comma",
            EExprKind::Semicolon(_) => "semicolon",
        }
    }
}
