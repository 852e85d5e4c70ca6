// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `expr : expr`, binding looser than `..` and tighter than `,`.

use eexpr_ast::{EExpr, EExprKind, TokenKind};
use eexpr_span::Span;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_colon(&mut self) -> Option<EExpr> {
        let expr1 = self.parse_ellipsis()?;
        if !matches!(self.peek().kind, TokenKind::Colon) {
            return Some(expr1);
        }
        let colon_span = self.peek().span;
        self.bump();

        match self.parse_ellipsis() {
            // No right-hand side: the colon is dropped and the left side's
            // span widens to cover it, same as the original.
            None => {
                let mut expr1 = expr1;
                expr1.span = Span::new(expr1.span.start, colon_span.end);
                Some(expr1)
            }
            Some(expr2) => {
                let span = Span::new(expr1.span.start, expr2.span.end);
                Some(EExpr::new(span, EExprKind::Colon(Box::new(expr1), Box::new(expr2))))
            }
        }
    }
}
