/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      mod.rs
 * Purpose:   Recursive-descent parser from tokens to the syntax tree.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
#[allow(clippy::module_inception)]
pub mod parser;

/// Statement-level parsing:
/// - dispatch and blocks
/// - if / while / for / switch / return / try
/// - async / await / emit / listen / allow / decorators
pub mod statements;

/// Declarations:
/// - bind / const / craft and typed bindings
/// - fn / struct
/// - @agent / task field lists
pub mod declarations;

/// The terse forms:
/// - loop / guard / match
/// - watch / on / with / snapshot / restore
pub mod sugar;

/// Expression-level parsing:
/// - assignment → pipeline → or → and → equality → comparison → term → factor → unary → postfix → primary
/// - arrays, maps, tuples
pub mod expressions;

/// Shared parser helpers:
/// - bounds-checked token access
/// - separator skipping
/// - keyword-as-name predicates
pub mod helpers;

#[cfg(test)]
mod property_tests;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, ParseOutput, Parser};
