/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions shared by tokens, parse errors and diagnostics.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based `(line, column)` position in Synta source text.
///
/// Columns count Unicode scalar values, not bytes, so a caret rendered by
/// the diagnostic printer lines up with what the user sees in an editor.
///
/// Spans order lexically: first by line, then by column. The lexer relies
/// on this ordering to guarantee that tokens are produced in
/// non-decreasing position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 1-based column number.
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Span {
    /// The first character of a file.
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
