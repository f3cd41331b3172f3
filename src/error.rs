/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error values produced by the parser and the analysis boundary.
 *
 * License:
 * This file is part of the SYNTA programming language project.
 *
 * SYNTA is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Grammar violation.
    Syntax,
    /// Reserved for checks beyond the grammar. The parser never emits it.
    Semantic,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Syntax => "syntax",
            ErrorKind::Semantic => "semantic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable problem found while parsing.
///
/// Parse errors are collected, never thrown: the parser records one and
/// keeps going, so a single run reports every problem it can find.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{span}: {message}")]
pub struct ParseError {
    /// Position of the offending token.
    pub span: Span,

    /// Human-readable message, e.g. `expected IDENTIFIER, got INTEGER`.
    pub message: String,

    pub kind: ErrorKind,

    /// Optional hint shown under the caret by the diagnostic printer.
    pub help: Option<String>,
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            span,
            message: message.into(),
            kind: ErrorKind::Syntax,
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

/// Failures at the I/O boundary: reading input, decoding JSON, enforcing
/// input limits.
///
/// These never come out of the lexer or parser themselves.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is {size} bytes, limit is {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("unknown token kind `{0}`")]
    UnknownTokenKind(String),
}

impl AnalyzeError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AnalyzeError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_position() {
        let err = ParseError::syntax("expected '}' to close block", Span::new(3, 7));
        assert_eq!(err.to_string(), "3:7: expected '}' to close block");
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!((err.line(), err.column()), (3, 7));
    }

    #[test]
    fn kinds_serialize_lowercase() {
        let json = serde_json::to_string(&ErrorKind::Semantic).unwrap();
        assert_eq!(json, "\"semantic\"");
    }

    #[test]
    fn input_limit_message() {
        let err = AnalyzeError::InputTooLarge { size: 10, limit: 4 };
        assert_eq!(err.to_string(), "input is 10 bytes, limit is 4");
    }
}
