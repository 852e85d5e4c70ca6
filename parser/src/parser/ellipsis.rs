// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `a .. b`, where either side may be absent.

use eexpr_ast::{EExpr, EExprKind, TokenKind};
use eexpr_span::Span;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_ellipsis(&mut self) -> Option<EExpr> {
        let expr1 = self.parse_space();
        if !matches!(self.peek().kind, TokenKind::Ellipsis) {
            return expr1;
        }
        let dots_span = self.peek().span;
        self.bump();
        let expr2 = self.parse_space();

        let start = expr1.as_ref().map(|e| e.span.start).unwrap_or(dots_span.start);
        let end = expr2.as_ref().map(|e| e.span.end).unwrap_or(dots_span.end);
        Some(EExpr::new(Span::new(start, end), EExprKind::Ellipsis(expr1.map(Box::new), expr2.map(Box::new))))
    }
}
