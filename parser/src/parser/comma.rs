// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! A comma-separated list. A leading comma (or any comma at all) is what
//! distinguishes a one-element `COMMA` list from its bare element.

use eexpr_ast::{EExpr, EExprKind, TokenKind};
use eexpr_span::Span;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_comma(&mut self) -> Option<EExpr> {
        let mut out: Option<(Span, Vec<EExpr>)> = None;
        if matches!(self.peek().kind, TokenKind::Comma) {
            let span = self.peek().span;
            self.bump();
            out = Some((span, Vec::new()));
        }

        loop {
            let item = self.parse_colon();
            let lookahead_is_comma = matches!(self.peek().kind, TokenKind::Comma);
            let lookahead_span = self.peek().span;

            match item {
                None => {
                    return out.map(|(span, items)| EExpr::new(span, EExprKind::Comma(items)));
                }
                Some(item) => match out {
                    Some((span, mut items)) => {
                        items.push(item);
                        let span = if lookahead_is_comma {
                            self.bump();
                            Span::new(span.start, lookahead_span.end)
                        } else {
                            Span::new(span.start, items.last().unwrap().span.end)
                        };
                        out = Some((span, items));
                    }
                    None => {
                        if lookahead_is_comma {
                            let span = Span::new(item.span.start, lookahead_span.end);
                            self.bump();
                            out = Some((span, vec![item]));
                        } else {
                            return Some(item);
                        }
                    }
                },
            }
        }
    }
}
