/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Crate root: module tree and the public entry points.
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


//! Front end for SYNTA, a small language for describing agent workflows.
//!
//! The pipeline is three pure steps:
//!
//! 1. [`tokenize`] turns source text into a flat token list ending in `EOF`.
//! 2. [`parse`] builds a [`Program`] and collects every [`ParseError`] it
//!    meets instead of stopping at the first one.
//! 3. [`format_program`] renders the tree in a box-drawn, grammar-labelled
//!    form.
//!
//! [`analyze`] runs all three and packages the result as a serializable
//! [`AnalysisReport`].
//!
//! ```
//! let report = synta::analyze("@agent Scout { role: \"search\" }");
//! assert!(report.success);
//! assert!(report.parse_tree.contains("AGENT_DECL"));
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod span;

pub use ast::{Node, Program};
pub use config::{AnalyzerConfig, TreeStyle};
pub use diagnostics::DiagnosticPrinter;
pub use error::{AnalyzeError, ErrorKind, ParseError};
pub use formatter::{format_compact, format_node, format_program, format_with_style};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, ParseOutput};
pub use report::{analyze, analyze_checked, analyze_with, AnalysisReport};
pub use span::Span;
