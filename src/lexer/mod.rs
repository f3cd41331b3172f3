/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      mod.rs
 * Purpose:   Lexical analysis: token model, keyword tables and the scanner.
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

/// Token kinds, stable names and the `Token` value type.
pub mod token;

/// Primary and context-sensitive keyword tables.
pub mod keywords;

/// Presentation groups for token kinds.
pub mod groups;

/// The scanner itself.
#[allow(clippy::module_inception)]
pub mod lexer;

#[cfg(test)]
mod property_tests;

pub use groups::SemanticGroup;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
