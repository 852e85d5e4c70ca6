// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! The top-level line driver: splits the token stream on top-level
//! newlines, parses each line as a `semicolonExpr`, and resynchronizes
//! after a line that didn't produce one.

use eexpr_ast::{TokenKind, WrapKind};
use eexpr_errors::RecoverableError;

use super::ParserContext;

impl<'a> ParserContext<'a> {
    /// Drives the whole token stream, producing the top-level lines.
    pub(crate) fn parse_program(&mut self) {
        let mut at_start = true;
        while !self.is_fatal() {
            match &self.peek().kind {
                TokenKind::Newline => {
                    self.bump();
                    self.parse_line();
                }
                TokenKind::Eof => return,
                TokenKind::Wrap { is_open: false, .. } if !at_start => {
                    self.mk_unbalanced_wrap();
                }
                _ => {
                    if at_start {
                        at_start = false;
                        self.parse_line();
                    } else {
                        // Something other than a newline, EOF, or a stray
                        // close-wrap survived a completed line. Recover the
                        // same way an empty line does rather than treating
                        // this as unreachable.
                        self.emit(RecoverableError::ExpectingNewlineOrDedent(self.peek().span));
                        self.recover_line();
                    }
                }
            }
        }
    }

    fn parse_line(&mut self) {
        match self.parse_semicolon() {
            Some(line) => self.push_line(line),
            None => self.recover_line(),
        }
    }

    /// Skips forward to the next top-level newline (or `EOF`), resetting the
    /// wrap stack first. Block opens/closes encountered along the way are
    /// still tracked so an indent nested inside the skipped region doesn't
    /// let its dedent masquerade as the top-level one.
    fn recover_line(&mut self) {
        let mut depth = self.block_depth();
        self.clear_wrap_stack();

        loop {
            while depth != 0 {
                match &self.peek().kind {
                    TokenKind::Eof => return,
                    TokenKind::Wrap { kind: WrapKind::Block, is_open } => {
                        if *is_open {
                            depth += 1;
                        } else {
                            depth -= 1;
                        }
                    }
                    _ => {}
                }
                self.bump();
            }
            loop {
                match &self.peek().kind {
                    TokenKind::Newline | TokenKind::Eof => return,
                    TokenKind::Wrap { kind: WrapKind::Block, is_open: true } => {
                        depth += 1;
                        self.bump();
                        break;
                    }
                    _ => self.bump(),
                }
            }
        }
    }
}
