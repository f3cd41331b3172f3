/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      report.rs
 * Purpose:   Serializable analysis results: token table, parse tree and
 *            errors, plus reloading a token table from JSON.
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

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, ErrorKind, ParseError};
use crate::formatter::format_with_style;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::parser::{parse, ParseOutput};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// One row of the token table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    pub lexeme: String,

    /// Stable kind name, e.g. `BIND_ASSIGN`.
    #[serde(rename = "type")]
    pub kind: String,

    pub semantic_group: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenReport {
    fn from(token: &Token) -> Self {
        Self {
            lexeme: token.lexeme.clone(),
            kind: token.kind.name().to_string(),
            semantic_group: token.kind.semantic_group().name().to_string(),
            line: token.line(),
            column: token.column(),
        }
    }
}

impl TryFrom<TokenReport> for Token {
    type Error = AnalyzeError;

    fn try_from(report: TokenReport) -> Result<Self, Self::Error> {
        let kind = TokenKind::from_name(&report.kind).ok_or(AnalyzeError::UnknownTokenKind(report.kind))?;
        Ok(Token::new(kind, report.lexeme, Span::new(report.line, report.column)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub line: usize,
    pub column: usize,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl From<&ParseError> for ErrorReport {
    fn from(error: &ParseError) -> Self {
        Self {
            line: error.line(),
            column: error.column(),
            message: error.message.clone(),
            kind: error.kind,
        }
    }
}

/// The full result of analysing one source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// `true` when no errors were recorded.
    pub success: bool,
    pub tokens: Vec<TokenReport>,
    pub parse_tree: String,
    pub errors: Vec<ErrorReport>,
    pub warnings: Vec<String>,
}

impl AnalysisReport {
    /// Packages tokens and a parse of those tokens that already exist.
    pub fn from_parse(tokens: &[Token], output: &ParseOutput, config: &AnalyzerConfig) -> Self {
        let tokens = tokens
            .iter()
            .filter(|t| config.include_trivia || !t.kind.is_trivia())
            .map(TokenReport::from)
            .collect();

        Self {
            success: output.is_success(),
            tokens,
            parse_tree: format_with_style(&output.program, config.tree_style),
            errors: output.errors.iter().map(ErrorReport::from).collect(),
            warnings: output.warnings.clone(),
        }
    }
}

/// Tokenizes, parses and formats `source` with default settings.
pub fn analyze(source: &str) -> AnalysisReport {
    analyze_with(source, &AnalyzerConfig::default())
}

/// Like [`analyze`], honouring `config` but not its size limit.
pub fn analyze_with(source: &str, config: &AnalyzerConfig) -> AnalysisReport {
    let tokens = tokenize(source);
    let output = parse(tokens.clone());
    AnalysisReport::from_parse(&tokens, &output, config)
}

/// Like [`analyze_with`], but rejects inputs over `config.max_input_bytes`.
pub fn analyze_checked(source: &str, config: &AnalyzerConfig) -> Result<AnalysisReport, AnalyzeError> {
    if source.len() > config.max_input_bytes {
        return Err(AnalyzeError::InputTooLarge {
            size: source.len(),
            limit: config.max_input_bytes,
        });
    }
    Ok(analyze_with(source, config))
}

/// Serializes a token stream as a JSON token table.
///
/// Newlines and comments are always written: newlines end statements, so a
/// table without them would not reload into the same parse.
pub fn tokens_to_json(tokens: &[Token]) -> Result<String, AnalyzeError> {
    let rows: Vec<TokenReport> = tokens.iter().map(TokenReport::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Reloads a token stream from a JSON token table.
///
/// Fails on malformed JSON or on a `type` that names no token kind.
pub fn tokens_from_json(json: &str) -> Result<Vec<Token>, AnalyzeError> {
    let rows: Vec<TokenReport> = serde_json::from_str(json)?;
    rows.into_iter().map(Token::try_from).collect()
}
