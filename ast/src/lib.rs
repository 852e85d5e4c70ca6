// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! Data model shared by the eexpr lexer/post-lexer boundary and the parser.
//!
//! This crate owns two things: the [`Token`] shape the parser reads, and the
//! [`EExpr`] tree the parser builds. Neither the lexer nor the post-lexer
//! live here -- per the language's layering, tokenizing source text and
//! resolving context-sensitive tokens (unknown dots, colons, newlines) are
//! the responsibility of upstream crates. This crate only fixes the
//! contract those crates hand off to [`eexpr_parser`](../eexpr_parser/index.html).

#![forbid(unsafe_code)]

pub mod token;
pub use token::*;

pub mod tree;
pub use tree::*;
