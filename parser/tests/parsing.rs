// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! End-to-end parses over hand-built token streams, covering the worked
//! scenarios a line-by-line reading of the grammar produces.

use eexpr_parser::{
    EExprKind, NumberLiteral, OpenerKind, RecoverableError, SpliceRole, StringToken, Token, TokenKind, WrapKind,
};
use eexpr_span::{Position, Span};

/// Builds tokens on an incrementing column so callers don't have to juggle
/// positions by hand; only shape, not location, is under test here.
struct Toks {
    col: u32,
    tokens: Vec<Token>,
}

impl Toks {
    fn new() -> Self {
        Self { col: 0, tokens: Vec::new() }
    }

    fn span(&mut self, width: u32) -> Span {
        let start = Position::new(0, self.col);
        self.col += width.max(1);
        Span::new(start, Position::new(0, self.col))
    }

    fn push(&mut self, kind: TokenKind, width: u32) -> &mut Self {
        let span = self.span(width);
        self.tokens.push(Token::new(span, kind));
        self
    }

    fn symbol(&mut self, s: &str) -> &mut Self {
        self.push(TokenKind::Symbol(s.to_string()), s.len() as u32)
    }

    fn space(&mut self) -> &mut Self {
        self.push(TokenKind::Space, 1)
    }

    fn wrap(&mut self, kind: WrapKind, is_open: bool) -> &mut Self {
        self.push(TokenKind::Wrap { kind, is_open }, 1)
    }

    fn punct(&mut self, kind: TokenKind) -> &mut Self {
        self.push(kind, 1)
    }

    fn string_plain(&mut self, s: &str) -> &mut Self {
        self.push(TokenKind::String(StringToken { text: s.to_string(), splice: SpliceRole::Plain }), s.len() as u32)
    }

    fn string(&mut self, s: &str, splice: SpliceRole) -> &mut Self {
        self.push(TokenKind::String(StringToken { text: s.to_string(), splice }), s.len() as u32)
    }

    fn newline(&mut self) -> &mut Self {
        self.push(TokenKind::Newline, 1)
    }

    fn finish(&mut self) -> Vec<Token> {
        self.push(TokenKind::Eof, 0);
        std::mem::take(&mut self.tokens)
    }
}

fn number(text: &str) -> TokenKind {
    TokenKind::Number(NumberLiteral {
        mantissa: text.to_string(),
        radix: 10,
        fractional_digits: 0,
        exponent: "0".to_string(),
    })
}

#[test]
fn single_symbol_line() {
    let tokens = Toks::new().symbol("a").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert!(out.recoverable.is_empty());
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.lines[0].kind, EExprKind::Symbol("a".to_string()));
}

#[test]
fn juxtaposed_symbols_become_space() {
    // `a b c`
    let tokens = Toks::new().symbol("a").space().symbol("b").space().symbol("c").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Space(items) => {
            assert_eq!(items.len(), 3);
            assert_eq!(items[1].kind, EExprKind::Symbol("b".to_string()));
        }
        other => panic!("expected a space list, got {other:?}"),
    }
}

#[test]
fn dotted_symbols_become_chain() {
    // `a.b.c`
    let tokens = Toks::new().symbol("a").punct(TokenKind::Chain).symbol("b").punct(TokenKind::Chain).symbol("c").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Chain(items) => assert_eq!(items.len(), 3),
        other => panic!("expected a chain, got {other:?}"),
    }
}

#[test]
fn leading_dot_becomes_predot() {
    // `.x`
    let tokens = Toks::new().punct(TokenKind::Predot).symbol("x").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Predot(inner) => assert_eq!(inner.kind, EExprKind::Symbol("x".to_string())),
        other => panic!("expected a predot, got {other:?}"),
    }
}

#[test]
fn comma_list() {
    // `a, b, c`
    let tokens = Toks::new()
        .symbol("a")
        .punct(TokenKind::Comma)
        .space()
        .symbol("b")
        .punct(TokenKind::Comma)
        .space()
        .symbol("c")
        .finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Comma(items) => assert_eq!(items.len(), 3),
        other => panic!("expected a comma list, got {other:?}"),
    }
}

#[test]
fn paren_wraps_a_semicolon_list() {
    // `(a; b)`
    let tokens = Toks::new()
        .wrap(WrapKind::Paren, true)
        .symbol("a")
        .punct(TokenKind::Semicolon)
        .space()
        .symbol("b")
        .wrap(WrapKind::Paren, false)
        .finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Paren(Some(inner)) => match &inner.kind {
            EExprKind::Semicolon(items) => assert_eq!(items.len(), 2),
            other => panic!("expected a semicolon list inside the paren, got {other:?}"),
        },
        other => panic!("expected a non-empty paren, got {other:?}"),
    }
}

#[test]
fn empty_paren() {
    let tokens = Toks::new().wrap(WrapKind::Paren, true).wrap(WrapKind::Paren, false).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert_eq!(out.lines[0].kind, EExprKind::Paren(None));
}

#[test]
fn unclosed_paren_is_fatal() {
    let tokens = Toks::new().wrap(WrapKind::Paren, true).symbol("a").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_some());
    let fatal = out.fatal.unwrap();
    assert_eq!(fatal.opener.unwrap().kind, OpenerKind::Wrap(WrapKind::Paren));
}

#[test]
fn mismatched_close_is_fatal() {
    // `(a]` -- opened with a paren, closed with a brack
    let tokens = Toks::new().wrap(WrapKind::Paren, true).symbol("a").wrap(WrapKind::Brack, false).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_some());
}

#[test]
fn colon_pair() {
    // `a : b ..`
    let tokens = Toks::new()
        .symbol("a")
        .space()
        .punct(TokenKind::Colon)
        .space()
        .symbol("b")
        .space()
        .punct(TokenKind::Ellipsis)
        .finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Colon(left, right) => {
            assert_eq!(left.kind, EExprKind::Symbol("a".to_string()));
            match &right.kind {
                EExprKind::Ellipsis(Some(b), None) => assert_eq!(b.kind, EExprKind::Symbol("b".to_string())),
                other => panic!("expected `b ..`, got {other:?}"),
            }
        }
        other => panic!("expected a colon pair, got {other:?}"),
    }
}

#[test]
fn number_and_codepoint_atoms() {
    let tokens = Toks::new().push(number("42"), 2).push(TokenKind::Codepoint('x'), 1).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    // no whitespace between them: both are consumed by the same chain-less
    // line since nothing joins them, so only the first is a top-level line
    // and the second is left dangling, triggering the stray-token recovery.
    assert!(!out.recoverable.is_empty());
}

#[test]
fn plain_string_round_trip() {
    let tokens = Toks::new().string_plain("hello").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::String { head, parts } => {
            assert_eq!(head, "hello");
            assert!(parts.is_empty());
        }
        other => panic!("expected a plain string, got {other:?}"),
    }
}

#[test]
fn spliced_string_template() {
    // "a${x}b"
    let tokens = Toks::new()
        .string("a", SpliceRole::Open)
        .symbol("x")
        .string("b", SpliceRole::Close)
        .finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert!(out.recoverable.is_empty());
    match &out.lines[0].kind {
        EExprKind::String { head, parts } => {
            assert_eq!(head, "a");
            assert_eq!(parts.len(), 1);
            assert_eq!(parts[0].text_after, "b");
            assert_eq!(parts[0].expr.as_ref().unwrap().kind, EExprKind::Symbol("x".to_string()));
        }
        other => panic!("expected a spliced string, got {other:?}"),
    }
}

#[test]
fn template_missing_expr_is_recoverable() {
    // "a${}b" -- an open piece immediately followed by a close piece.
    let tokens = Toks::new().string("a", SpliceRole::Open).string("b", SpliceRole::Close).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert!(out.recoverable.iter().any(|e| matches!(e, RecoverableError::MissingTemplateExpr(_))));
    // The piece's text is still recorded even though its expression is
    // missing, so a caller rendering the string doesn't lose the "b".
    match &out.lines[0].kind {
        EExprKind::String { parts, .. } => {
            assert_eq!(parts.len(), 1);
            assert!(parts[0].expr.is_none());
            assert_eq!(parts[0].text_after, "b");
        }
        other => panic!("expected a spliced string, got {other:?}"),
    }
}

#[test]
fn stray_template_middle_is_unbalanced_wrap() {
    // A `middle`-role string with no open template frame at all.
    let tokens = Toks::new().string("x", SpliceRole::Middle).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_some());
}

#[test]
fn unclosed_template_opener_is_reported_as_string_template() {
    // `"a${x` -- never closed; the fatal should point at the template
    // opener, not misreport it as some bracket kind.
    let tokens = Toks::new().string("a", SpliceRole::Open).symbol("x").wrap(WrapKind::Paren, false).finish();
    let out = eexpr_parser::parse(tokens);
    let fatal = out.fatal.expect("expected a fatal unbalanced-wrap error");
    assert_eq!(fatal.opener.unwrap().kind, OpenerKind::StringTemplate);
}

#[test]
fn corrupt_splice_mid_template_does_not_panic() {
    // An unclosed string inside a template delivers its run-ending piece as
    // a `corrupt`-role STRING rather than a `close`; this must still return
    // a partial node instead of panicking on the continuation match.
    let tokens = Toks::new().string("a", SpliceRole::Open).string("", SpliceRole::Corrupt).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_some());
    assert!(out.recoverable.iter().any(|e| matches!(e, RecoverableError::MissingCloseTemplate(_))));
    match &out.lines[0].kind {
        EExprKind::String { head, parts } => {
            assert_eq!(head, "a");
            assert_eq!(parts.len(), 1);
            assert!(parts[0].expr.is_none());
        }
        other => panic!("expected a partial spliced string, got {other:?}"),
    }
}

#[test]
fn template_missing_expr_only_reported_when_a_piece_follows() {
    // "a${" with nothing at all after the open piece: the run simply ends,
    // which is MISSING_CLOSE_TEMPLATE only, not also MISSING_TEMPLATE_EXPR.
    let tokens = Toks::new().string("a", SpliceRole::Open).finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert_eq!(
        out.recoverable.iter().filter(|e| matches!(e, RecoverableError::MissingTemplateExpr(_))).count(),
        0
    );
    assert!(out.recoverable.iter().any(|e| matches!(e, RecoverableError::MissingCloseTemplate(_))));
}

#[test]
fn unclosed_template_is_recoverable_not_fatal() {
    let tokens = Toks::new().string("a", SpliceRole::Open).symbol("x").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert!(out.recoverable.iter().any(|e| matches!(e, RecoverableError::MissingCloseTemplate(_))));
}

#[test]
fn block_collects_its_lines() {
    // An indented block of two lines: `a` then `b`.
    let tokens = Toks::new()
        .wrap(WrapKind::Block, true)
        .symbol("a")
        .newline()
        .symbol("b")
        .wrap(WrapKind::Block, false)
        .finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    match &out.lines[0].kind {
        EExprKind::Block(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, EExprKind::Symbol("a".to_string()));
            assert_eq!(items[1].kind, EExprKind::Symbol("b".to_string()));
        }
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn multiple_top_level_lines() {
    let tokens = Toks::new().symbol("a").newline().symbol("b").finish();
    let out = eexpr_parser::parse(tokens);
    assert!(out.fatal.is_none());
    assert_eq!(out.lines.len(), 2);
}
