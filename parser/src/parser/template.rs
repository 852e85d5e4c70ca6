// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! `stringTemplate ::= string.plain | string.open spaceExpr (string.middle spaceExpr)* string.close`

use eexpr_ast::{EExpr, EExprKind, SpliceRole, StringPart};
use eexpr_errors::RecoverableError;
use eexpr_span::Span;

use super::context::FrameKind;
use super::ParserContext;

impl<'a> ParserContext<'a> {
    pub(crate) fn parse_template(&mut self) -> Option<EExpr> {
        let tok = self.peek().clone();
        let text = match tok.kind.as_string() {
            Some(s) => s.clone(),
            None => return None,
        };

        match text.splice {
            SpliceRole::Plain => {
                self.bump();
                Some(EExpr::new(tok.span, EExprKind::String { head: text.text, parts: Vec::new() }))
            }
            SpliceRole::Open => self.parse_spliced_template(tok.span, text.text),
            // A middle/close/corrupt piece with no matching opener on the
            // wrap stack is the same shape of mismatch as any other
            // unbalanced bracket.
            SpliceRole::Middle | SpliceRole::Close | SpliceRole::Corrupt => {
                self.mk_unbalanced_wrap();
                None
            }
        }
    }

    fn parse_spliced_template(&mut self, open_span: Span, head: String) -> Option<EExpr> {
        let start = open_span.start;
        let mut end = open_span.end;
        let mut parts = Vec::new();

        self.push_string_template(open_span);
        self.bump();

        loop {
            let at_continuation = matches!(
                self.peek().kind.as_string(),
                Some(s) if matches!(s.splice, SpliceRole::Middle | SpliceRole::Close)
            );
            let expr = if at_continuation { None } else { self.parse_space() };

            if let Some(e) = &expr {
                end = e.span.end;
            } else if at_continuation {
                // A middle/close piece arrived in place of the expression
                // the template expected; note it and keep going so the rest
                // of the template still gets parsed. A run that simply ended
                // (no piece at all) is reported as MISSING_CLOSE_TEMPLATE
                // below instead, not here too.
                self.emit(RecoverableError::MissingTemplateExpr(self.peek().span));
            }

            let piece = self.peek().kind.as_string().cloned();
            match piece {
                Some(piece) => {
                    end = self.peek().span.end;
                    parts.push(StringPart { expr, text_after: piece.text });

                    let top_is_template = matches!(self.top_wrap(), Some(f) if f.kind == FrameKind::StringTemplate);
                    if !top_is_template {
                        self.mk_unbalanced_wrap();
                        return Some(EExpr::new(Span::new(start, end), EExprKind::String { head, parts }));
                    }

                    match piece.splice {
                        SpliceRole::Close => {
                            self.pop_wrap();
                            self.bump();
                            return Some(EExpr::new(Span::new(start, end), EExprKind::String { head, parts }));
                        }
                        SpliceRole::Middle => self.bump(),
                        // The lexer hit an unclosed string mid-template; the
                        // run ends here same as if no closing piece had ever
                        // shown up, not with a panic.
                        SpliceRole::Corrupt => {
                            self.emit(RecoverableError::MissingCloseTemplate(self.peek().span));
                            return Some(EExpr::new(Span::new(start, end), EExprKind::String { head, parts }));
                        }
                        SpliceRole::Plain | SpliceRole::Open => {
                            unreachable!("a template continuation token is always middle, close, or corrupt")
                        }
                    }
                }
                None => {
                    parts.push(StringPart { expr, text_after: String::new() });
                    self.emit(RecoverableError::MissingCloseTemplate(self.peek().span));
                    return Some(EExpr::new(Span::new(start, end), EExprKind::String { head, parts }));
                }
            }
        }
    }
}
