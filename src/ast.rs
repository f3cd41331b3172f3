/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      ast.rs
 * Purpose:   Root of the SYNTA abstract syntax tree.
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

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Declarations: bindings, functions, structs, agents and tasks.
pub mod decl;

/// Expression and control-flow nodes.
pub mod node;

/// Parameters and fields.
pub mod param;

/// Typed payloads for the sugar statements.
pub mod stmt;

pub use decl::{DeclKind, Declaration};
pub use node::{CaseClause, ForStatement, Form, KeyValue, LiteralKind, Node};
pub use param::{Field, Param};
pub use stmt::{Handler, Statement};

/// The root of a parsed SYNTA source file.
///
/// Exactly one `Program` is produced per parse. It owns every node below it;
/// the tree has no parent links, so it can be moved and dropped freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Counts top-level statements by node kind (`"Declaration"`,
    /// `"IfStatement"`, ...). Used for CLI summaries.
    pub fn statement_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for stmt in &self.statements {
            *counts.entry(stmt.kind_name()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} statements)", self.statements.len())
    }
}
