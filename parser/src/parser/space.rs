// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `spaceExpr ::= chainExpr (whitespace chainExpr)*`

use eexpr_ast::{EExpr, EExprKind, TokenKind};
use eexpr_span::Span;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_space(&mut self) -> Option<EExpr> {
        if matches!(self.peek().kind, TokenKind::Space) {
            self.bump();
        }
        let first = self.parse_chain()?;
        let start = first.span.start;
        let mut end = first.span.end;
        let mut items = vec![first];

        loop {
            if !matches!(self.peek().kind, TokenKind::Space) {
                break;
            }
            self.bump();
            match self.parse_chain() {
                Some(next) => {
                    end = next.span.end;
                    items.push(next);
                }
                None => break,
            }
        }

        if items.len() == 1 {
            items.pop()
        } else {
            Some(EExpr::new(Span::new(start, end), EExprKind::Space(items)))
        }
    }
}
