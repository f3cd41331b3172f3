/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      parser.rs
 * Purpose:   Parser state and the top-level parse loop.
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

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::token::Token;
use crate::span::Span;

/// The core SYNTA recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - Every syntax error recorded so far
///
/// The grammar itself lives in extension modules (`statements`,
/// `declarations`, `sugar`, `expressions`, `helpers`) as additional
/// `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    /// Errors recorded so far, in source order of discovery.
    pub(crate) errors: Vec<ParseError>,

    /// Returned by the accessors when the cursor is past the last token.
    pub(crate) eof: Token,

    /// Current recursion depth, bounded by [`MAX_DEPTH`].
    pub(crate) depth: usize,
}

/// Deepest statement/expression nesting accepted before the parser gives up
/// on a construct.
pub(crate) const MAX_DEPTH: usize = 64;

/// Everything a parse produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
    /// Always empty; kept for the report format.
    pub warnings: Vec<String>,
}

impl ParseOutput {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Public entry point for the parsing phase.
///
/// Parsing never fails: it always returns a [`Program`] (possibly with
/// fewer statements than the input implies) together with the list of
/// syntax errors it recovered from.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → (Program, errors) → Formatter
/// ```
///
/// # Example
/// ```
/// use synta::lexer::tokenize;
/// use synta::parser::parse;
///
/// let output = parse(tokenize("bind x := 10;"));
/// assert!(output.errors.is_empty());
/// assert_eq!(output.program.statements.len(), 1);
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseOutput {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    ParseOutput {
        program,
        errors: parser.errors,
        warnings: Vec::new(),
    }
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        // The synthetic EOF sits where the real stream ends, so errors at
        // end of input still point somewhere sensible.
        let end = tokens.last().map(|t| t.span).unwrap_or_default();

        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
            eof: Token::eof(end),
            depth: 0,
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// # Behavior
    /// - Newlines and comments between statements are skipped.
    /// - Runs of statement terminators after a statement are skipped.
    /// - If a statement production consumes nothing, the offending token is
    ///   skipped, so the loop runs at most once per token.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        loop {
            self.skip_trivia();
            if self.is_at_end() {
                break;
            }

            let before = self.current;
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            if self.current == before {
                self.advance();
            }

            self.skip_terminators();
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        Program::new(statements)
    }

    /// Records a syntax error at the current token.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let span = self.current().span;
        self.error_at(span, message);
    }

    /// Records a syntax error at an explicit position.
    pub(crate) fn error_at(&mut self, span: Span, message: impl Into<String>) {
        self.push_error(ParseError::syntax(message, span));
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        tracing::debug!(at = %error.span, message = %error.message, "syntax error");
        self.errors.push(error);
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Enters one level of nesting. Returns `false` (after recording an
    /// error and skipping the current token) when the limit is reached.
    pub(crate) fn enter(&mut self) -> bool {
        if self.depth >= MAX_DEPTH {
            self.error("nesting is too deep");
            self.advance();
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Leaves `levels` levels entered by a loop that wraps its own result.
    pub(crate) fn leave_levels(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }
}
