// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! Errors raised while tokenizing a VCD stream or building its header.
//! Every variant is fatal to the parse that produced it.

use thiserror::Error;

use super::reader::Cursor;
use super::types::CommandKind;

pub type VcdResult<T> = Result<T, VcdError>;

#[derive(Error, Debug)]
pub enum VcdError {
    /// The underlying line source failed, or produced invalid UTF-8.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A word in the resting state matched no keyword or sigil.
    #[error("unrecognized token `{token}` at {cursor}")]
    UnrecognizedToken { token: String, cursor: Cursor },

    #[error("`{command}` expects {expected} fields but found {found} in `{text}`")]
    FieldCount {
        command: CommandKind,
        expected: usize,
        found: usize,
        text: String,
    },

    /// The scope tree would be left in an impossible shape.
    #[error("scope structure error: {0}")]
    Structure(String),

    /// `$enddefinitions` was reached with required header fields unset.
    #[error("header incomplete at $enddefinitions, missing: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("unexpected end of input while {expecting}")]
    UnexpectedEof { expecting: &'static str },

    #[error("invalid timescale `{0}`")]
    InvalidTimescale(String),
}

impl VcdError {
    pub(super) fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    /// Line on which the error was detected, when the tokenizer knows it.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedToken { cursor, .. } => Some(cursor.line()),
            _ => None,
        }
    }
}
