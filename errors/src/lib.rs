// Copyright (C) 2026 the eexpr-parser contributors.
// This file is part of the eexpr-parser library, licensed under the MIT license.
// See the LICENSE file in the repository root for details.

//! Diagnostics produced by the eexpr parser.
//!
//! The parser speaks through two channels: an append-only stream of
//! [`RecoverableError`]s that never stop the parse, and a single
//! first-writer-wins [`FatalError`] slot that the line driver checks
//! between lines. [`Handler`] is the side-channel both live in, mirroring
//! how the parser threads a shared, interior-mutable sink through its
//! mutually recursive descent functions rather than returning `Result`
//! from every production.

#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::fmt;

use eexpr_ast::WrapKind;
use eexpr_span::Span;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of frame an `UNBALANCED_WRAP` opener was. Most mismatches point
/// back at a bracket or block opener; a string template's `"`/splice-open
/// never appears as a `WRAP` token, so it gets its own case rather than
/// being misreported as one of the four bracket kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpenerKind {
    Wrap(WrapKind),
    StringTemplate,
}

impl fmt::Display for OpenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenerKind::Wrap(k) => write!(f, "{k}"),
            OpenerKind::StringTemplate => write!(f, "string template"),
        }
    }
}

/// The opener an `UNBALANCED_WRAP` fatal error points back at, or nothing
/// if the wrap stack was already empty when the mismatch was discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenerInfo {
    pub kind: OpenerKind,
    pub span: Span,
}

/// The parser's one fatal diagnostic: a close/open mismatch on the wrap
/// stack (including a close with nothing left open, or an opener that
/// never saw its close before `EOF`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FatalError {
    pub span: Span,
    pub opener: Option<OpenerInfo>,
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opener {
            Some(o) => write!(f, "{}: unbalanced wrap (unmatched opener `{}` at {})", self.span, o.kind, o.span.start),
            None => write!(f, "{}: unbalanced wrap (no opener on the stack)", self.span),
        }
    }
}

impl std::error::Error for FatalError {}

/// A diagnostic that does not stop parsing; the parser keeps going from the
/// nearest synchronization point after emitting one of these.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecoverableError {
    #[error("{0}: expected a newline or a dedent after this expression")]
    ExpectingNewlineOrDedent(Span),
    #[error("{0}: string template is missing an expression before this part")]
    MissingTemplateExpr(Span),
    #[error("{0}: string template was never closed")]
    MissingCloseTemplate(Span),
}

impl RecoverableError {
    pub fn span(&self) -> Span {
        match self {
            RecoverableError::ExpectingNewlineOrDedent(s)
            | RecoverableError::MissingTemplateExpr(s)
            | RecoverableError::MissingCloseTemplate(s) => *s,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RecoverableError::ExpectingNewlineOrDedent(_) => "EXPECTING_NEWLINE_OR_DEDENT",
            RecoverableError::MissingTemplateExpr(_) => "MISSING_TEMPLATE_EXPR",
            RecoverableError::MissingCloseTemplate(_) => "MISSING_CLOSE_TEMPLATE",
        }
    }
}

/// The side-channel the parser emits diagnostics through.
///
/// `emit` never fails and never short-circuits; `set_fatal` is
/// first-writer-wins, matching the "once fatal is set, further attempts to
/// set it are no-ops" propagation policy.
#[derive(Debug, Default)]
pub struct Handler {
    recoverable: RefCell<Vec<RecoverableError>>,
    fatal: RefCell<Option<FatalError>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recoverable diagnostic. Order of emission is preserved.
    pub fn emit(&self, err: RecoverableError) {
        self.recoverable.borrow_mut().push(err);
    }

    /// Installs the fatal error if none has been set yet; a no-op otherwise.
    pub fn set_fatal(&self, err: FatalError) {
        let mut slot = self.fatal.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.borrow().is_some()
    }

    pub fn fatal(&self) -> Option<FatalError> {
        *self.fatal.borrow()
    }

    pub fn recoverable(&self) -> Vec<RecoverableError> {
        self.recoverable.borrow().clone()
    }

    /// Consumes the handler, returning the accumulated diagnostics.
    pub fn into_parts(self) -> (Vec<RecoverableError>, Option<FatalError>) {
        (self.recoverable.into_inner(), self.fatal.into_inner())
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in self.recoverable.borrow().iter() {
            writeln!(f, "{err}")?;
        }
        if let Some(fatal) = self.fatal.borrow().as_ref() {
            writeln!(f, "{fatal}")?;
        }
        Ok(())
    }
}
