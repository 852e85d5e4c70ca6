// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

use eexpr_ast::{Token, TokenKind, WrapKind};
use eexpr_errors::{FatalError, Handler, OpenerInfo, OpenerKind, RecoverableError};
use eexpr_span::Span;

use eexpr_ast::EExpr;

/// What a wrap-stack frame was opened by. Most frames mirror a bracket
/// kind; string templates get their own tag since `"` never appears as a
/// `WRAP` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Wrap(WrapKind),
    StringTemplate,
}

/// One entry of the wrap stack: the opener's kind and where it started.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WrapFrame {
    pub(crate) span: Span,
    pub(crate) kind: FrameKind,
}

/// Parser state threaded through the whole precedence ladder: the token
/// cursor, the wrap stack, the error side-channel, and the output lines
/// accumulated so far. Exactly one `ParserContext` exists per call to
/// [`crate::parse`].
pub struct ParserContext<'a> {
    pub(crate) handler: &'a Handler,
    /// Remaining tokens, reversed so `.pop()` is O(1) and yields them in
    /// source order.
    tokens: Vec<Token>,
    /// The current lookahead token; never `transparent`.
    pub(crate) token: Token,
    /// The span of the token most recently consumed by `bump`.
    pub(crate) prev_span: Span,
    wrap_stack: Vec<WrapFrame>,
    lines: Vec<EExpr>,
}

impl<'a> ParserContext<'a> {
    pub fn new(handler: &'a Handler, mut tokens: Vec<Token>) -> Self {
        // Transparent tokens exist only for downstream colorizers; the
        // grammar itself never looks at them.
        tokens.retain(|t| !t.transparent);
        tokens.reverse();

        let eof_span = tokens.first().map(|t| t.span).unwrap_or_default();
        let mut ctx = Self {
            handler,
            tokens,
            token: Token::eof_at(eof_span),
            prev_span: eof_span,
            wrap_stack: Vec::new(),
            lines: Vec::with_capacity(4),
        };
        ctx.bump();
        ctx
    }

    /// Returns the current lookahead token. Never fails; reads as `EOF`
    /// once the real stream is exhausted.
    pub(crate) fn peek(&self) -> &Token {
        &self.token
    }

    /// Advances past the current token. A no-op once the cursor is at `EOF`.
    pub(crate) fn bump(&mut self) {
        if matches!(self.token.kind, TokenKind::Eof) && self.tokens.is_empty() {
            return;
        }
        let next = self.tokens.pop().unwrap_or_else(|| Token::eof_at(self.token.span));
        self.prev_span = std::mem::replace(&mut self.token, next).span;
    }

    // ---- wrap stack ----

    pub(crate) fn push_wrap(&mut self, span: Span, kind: WrapKind) {
        self.wrap_stack.push(WrapFrame { span, kind: FrameKind::Wrap(kind) });
    }

    pub(crate) fn push_string_template(&mut self, span: Span) {
        self.wrap_stack.push(WrapFrame { span, kind: FrameKind::StringTemplate });
    }

    pub(crate) fn top_wrap(&self) -> Option<&WrapFrame> {
        self.wrap_stack.last()
    }

    pub(crate) fn pop_wrap(&mut self) -> Option<WrapFrame> {
        self.wrap_stack.pop()
    }

    pub(crate) fn wrap_depth(&self) -> usize {
        self.wrap_stack.len()
    }

    /// Number of `block` frames currently open, used by per-line recovery
    /// to know how many dedents to expect while resynchronizing.
    pub(crate) fn block_depth(&self) -> usize {
        self.wrap_stack.iter().filter(|f| f.kind == FrameKind::Wrap(WrapKind::Block)).count()
    }

    pub(crate) fn clear_wrap_stack(&mut self) {
        self.wrap_stack.clear();
    }

    pub(crate) fn wrap_stack_is_empty(&self) -> bool {
        self.wrap_stack.is_empty()
    }

    // ---- diagnostics ----

    pub(crate) fn emit(&self, err: RecoverableError) {
        self.handler.emit(err);
    }

    /// Sets the fatal `UNBALANCED_WRAP` error at the current token, pointing
    /// at the top-of-stack opener (or none, if the stack is empty).
    pub(crate) fn mk_unbalanced_wrap(&self) {
        let opener = self.top_wrap().map(|f| OpenerInfo {
            kind: match f.kind {
                FrameKind::Wrap(k) => OpenerKind::Wrap(k),
                FrameKind::StringTemplate => OpenerKind::StringTemplate,
            },
            span: f.span,
        });
        self.handler.set_fatal(FatalError { span: self.token.span, opener });
    }

    pub(crate) fn is_fatal(&self) -> bool {
        self.handler.is_fatal()
    }

    // ---- output ----

    pub(crate) fn push_line(&mut self, line: EExpr) {
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<EExpr> {
        self.lines
    }
}
