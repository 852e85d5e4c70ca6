// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! The eexpr recursive-descent parser.
//!
//! This crate turns an already-lexed, already-post-lexed [`Token`] stream
//! into a tree of [`EExpr`] nodes, an ordered list of recoverable
//! [`RecoverableError`]s, and at most one [`FatalError`]. It does not lex;
//! it expects its input to already satisfy the invariants the post-lexer
//! guarantees (wrap/block opens matched at most once, well-formed string
//! splice sequences, indent/dedent pairs already balanced).
//!
//! The grammar is a precedence ladder of mutually recursive producers,
//! weakest-binding first:
//!
//! ```text
//! parseSemicolon -> parseComma -> parseColon -> parseEllipsis
//!                -> parseSpace -> parseChain  -> parseAtomic
//! ```
//!
//! [`parse`] is the entry point; it drives line-by-line parsing and
//! resynchronizes after a line that fails to produce an expression.

#![forbid(unsafe_code)]

mod parser;

pub use eexpr_ast::*;
pub use eexpr_errors::*;
pub use parser::context::ParserContext;

/// The result of parsing a complete token stream.
#[derive(Debug)]
pub struct ParseOutput {
    /// One eexpr per top-level line, in source order.
    pub lines: Vec<EExpr>,
    pub recoverable: Vec<RecoverableError>,
    pub fatal: Option<FatalError>,
}

/// Parses a fully buffered token stream into a tree of top-level lines.
///
/// `tokens` must end in an `EOF` token (or a token the cursor will treat as
/// one); this is the contract the post-lexer guarantees.
pub fn parse(tokens: Vec<Token>) -> ParseOutput {
    let handler = Handler::new();
    let mut ctx = ParserContext::new(&handler, tokens);
    ctx.parse_program();
    let lines = ctx.into_lines();
    let (recoverable, fatal) = handler.into_parts();
    ParseOutput { lines, recoverable, fatal }
}
