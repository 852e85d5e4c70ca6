// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `atomicExpr ::= symbol | number | codepoint | stringTemplate | wrapExpr`

use eexpr_ast::{EExpr, EExprKind, TokenKind};

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_atomic(&mut self) -> Option<EExpr> {
        match &self.peek().kind {
            TokenKind::Symbol(s) => {
                let s = s.clone();
                let span = self.peek().span;
                self.bump();
                Some(EExpr::new(span, EExprKind::Symbol(s)))
            }
            TokenKind::Number(n) => {
                let n = n.clone();
                let span = self.peek().span;
                self.bump();
                Some(EExpr::new(span, EExprKind::Number(n)))
            }
            TokenKind::Codepoint(c) => {
                let c = *c;
                let span = self.peek().span;
                self.bump();
                Some(EExpr::new(span, EExprKind::Codepoint(c)))
            }
            TokenKind::String(_) => self.parse_template(),
            TokenKind::Wrap { is_open: true, .. } => self.parse_wrap(),
            _ => None,
        }
    }
}
