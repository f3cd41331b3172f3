/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      stmt.rs
 * Purpose:   Typed payloads for try/catch, reactive and state statements.
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

use crate::ast::node::Node;
use serde::Serialize;

/// Statements with a bespoke shape that do not map onto a control-flow node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /* ----------------------------- */
    /* ERROR HANDLING                */
    /* ----------------------------- */

    /// `try { } [catch [e] { }]`
    TryCatch {
        try_body: Vec<Node>,
        catch_param: Option<String>,
        catch_body: Option<Vec<Node>>,
    },

    /// `raise [expr]`
    Raise {
        value: Option<Box<Node>>,
    },

    /* ----------------------------- */
    /* JUMPS                         */
    /* ----------------------------- */

    Break,
    Continue,

    /* ----------------------------- */
    /* REACTIVE                      */
    /* ----------------------------- */

    /// `watch expr [::] handler`
    Watch {
        expression: Option<Box<Node>>,
        handler: Option<Handler>,
    },

    /// `on expr [::] handler`
    On {
        expression: Option<Box<Node>>,
        handler: Option<Handler>,
    },

    /// `with context { map } [::] { body }`
    With {
        context: Option<Box<Node>>,
        body: Vec<Node>,
    },

    /* ----------------------------- */
    /* STATE                         */
    /* ----------------------------- */

    /// `snapshot source [-> target]`
    Snapshot {
        source: Option<Box<Node>>,
        target: Option<Box<Node>>,
    },

    /// `restore target from source`
    Restore {
        target: Option<Box<Node>>,
        source: Option<Box<Node>>,
    },

    /* ----------------------------- */
    /* DECORATORS                    */
    /* ----------------------------- */

    /// `@name [ident] [(args)]` standing on its own.
    Decorator {
        decorator: String,
        name: Option<String>,
        args: Option<Vec<Node>>,
    },
}

impl Statement {
    /// Short kind tag, e.g. `"try-catch"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::TryCatch { .. } => "try-catch",
            Statement::Raise { .. } => "raise",
            Statement::Break => "break",
            Statement::Continue => "continue",
            Statement::Watch { .. } => "watch",
            Statement::On { .. } => "on",
            Statement::With { .. } => "with",
            Statement::Snapshot { .. } => "snapshot",
            Statement::Restore { .. } => "restore",
            Statement::Decorator { .. } => "decorator",
        }
    }
}

/// The reaction attached to a `watch` or `on` statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    /// `{ stmt; stmt }`
    Block(Vec<Node>),

    /// `(params) -> body`
    Lambda {
        params: Vec<Node>,
        body: Option<Box<Node>>,
    },

    /// A single statement or expression.
    Single(Box<Node>),
}
