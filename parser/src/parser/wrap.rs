// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `wrapExpr ::= '(' semicolonExpr? ')' | '[' ... ']' | '{' ... '}' | indent semicolonExpr (newline semicolonExpr)* dedent`

use eexpr_ast::{EExpr, EExprKind, TokenKind, WrapKind};
use eexpr_errors::RecoverableError;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_wrap(&mut self) -> Option<EExpr> {
        let (kind, start) = match self.peek().kind {
            TokenKind::Wrap { kind, is_open: true } => (kind, self.peek().span.start),
            _ => return None,
        };
        self.push_wrap(self.peek().span, kind);
        self.bump();

        if kind == WrapKind::Block {
            self.parse_block_body(start)
        } else {
            self.parse_bracket_body(start, kind)
        }
    }

    fn parse_bracket_body(&mut self, start: eexpr_span::Position, kind: WrapKind) -> Option<EExpr> {
        let inner = self.parse_semicolon();
        let mut end = self.prev_span.end;

        if self.top_wrap().is_some() && self.peek().kind.is_close_wrap_of(kind) {
            self.pop_wrap();
            end = self.peek().span.end;
            self.bump();
        } else {
            self.mk_unbalanced_wrap();
        }

        let span = eexpr_span::Span::new(start, end);
        let boxed = inner.map(Box::new);
        let node_kind = match kind {
            WrapKind::Paren => EExprKind::Paren(boxed),
            WrapKind::Brack => EExprKind::Brack(boxed),
            WrapKind::Brace => EExprKind::Brace(boxed),
            WrapKind::Block => unreachable!("block wraps go through parse_block_body"),
        };
        Some(EExpr::new(span, node_kind))
    }

    fn parse_block_body(&mut self, start: eexpr_span::Position) -> Option<EExpr> {
        let mut items = Vec::new();
        let mut end = start;
        loop {
            if let Some(sub) = self.parse_semicolon() {
                end = sub.span.end;
                items.push(sub);
            }
            match self.peek().kind {
                TokenKind::Wrap { .. } => {
                    if self.top_wrap().is_some() && self.peek().kind.is_close_wrap_of(WrapKind::Block) {
                        self.pop_wrap();
                        end = self.peek().span.end;
                        self.bump();
                    } else {
                        self.mk_unbalanced_wrap();
                    }
                    return Some(EExpr::new(eexpr_span::Span::new(start, end), EExprKind::Block(items)));
                }
                TokenKind::Newline => self.bump(),
                _ => {
                    self.emit(RecoverableError::ExpectingNewlineOrDedent(self.peek().span));
                    return Some(EExpr::new(eexpr_span::Span::new(start, end), EExprKind::Block(items)));
                }
            }
        }
    }
}
