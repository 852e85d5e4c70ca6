// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! ```text
//! chainExpr ::= atomicExpr chainTail*
//! chainTail ::= chainDot atomicExpr | wrapExpr | stringTemplate
//! ```
//! A leading `.` with nothing before it (`.foo`) is folded in here as a
//! `PREDOT` wrapper once the chain itself is known.

use eexpr_ast::{EExpr, EExprKind, SpliceRole, TokenKind};
use eexpr_span::Span;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_chain(&mut self) -> Option<EExpr> {
        let predot_start = match self.peek().kind {
            TokenKind::Predot => {
                let start = self.peek().span.start;
                self.bump();
                Some(start)
            }
            _ => None,
        };

        let expr1 = match self.parse_atomic() {
            Some(e) => e,
            // A bare `.` with no atomic after it has nothing to attach to;
            // dropping it here (rather than building a childless PREDOT) is
            // the one place this ladder departs from a literal port of the
            // original source, which dereferences a null chain in this case.
            None => return None,
        };

        let start = expr1.span.start;
        let mut end = expr1.span.end;

        let chain = if self.chain_continues() {
            let mut items = Vec::with_capacity(4);
            if matches!(self.peek().kind, TokenKind::Chain) {
                end = self.peek().span.end;
                self.bump();
            }
            items.push(expr1);
            loop {
                let Some(next) = self.parse_atomic() else { break };
                end = next.span.end;
                items.push(next);
                if matches!(self.peek().kind, TokenKind::Chain) {
                    end = self.peek().span.end;
                    self.bump();
                } else if self.chain_continues() {
                    // an open wrap or the start of a string continues the
                    // chain without a dot to consume
                } else {
                    break;
                }
            }
            EExpr::new(Span::new(start, end), EExprKind::Chain(items))
        } else {
            expr1
        };

        match predot_start {
            None => Some(chain),
            Some(dot_start) => {
                let span = Span::new(dot_start, chain.span.end);
                Some(EExpr::new(span, EExprKind::Predot(Box::new(chain))))
            }
        }
    }

    fn chain_continues(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Chain)
            || matches!(self.peek().kind, TokenKind::Wrap { is_open: true, .. })
            || matches!(self.peek().kind.as_string(), Some(s) if matches!(s.splice, SpliceRole::Plain | SpliceRole::Open))
    }
}
