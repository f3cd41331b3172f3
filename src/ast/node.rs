/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      node.rs
 * Purpose:   The SYNTA syntax tree node type.
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

use crate::ast::decl::Declaration;
use crate::ast::stmt::Statement;
use serde::Serialize;
use std::fmt;

/// Every node that can appear in a SYNTA syntax tree.
///
/// SYNTA does not separate statements from expressions at the tree level:
/// a statement list may hold a bare expression, and an `async { }` block
/// may appear where a value is expected.
///
/// Children are exclusively owned. An absent optional child means the
/// construct was not written in the source, not that it was empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /* ----------------------------- */
    /* DECLARATIONS                  */
    /* ----------------------------- */

    Declaration(Declaration),

    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    /// Infix operation. Besides the arithmetic and logical operators this
    /// carries assignment (`:=`, `+=`, ...), pipelines (`|>`, `|>>`), agent
    /// invocation (`->`), member access (`.`) and indexing (`[]`).
    BinaryOp {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },

    /// Prefix `!`, `-`, `+`, or postfix `++_post` / `--_post`.
    UnaryOp {
        operator: String,
        operand: Box<Node>,
    },

    Literal {
        kind: LiteralKind,
        raw: String,
    },

    Identifier {
        name: String,
    },

    Call {
        function: Box<Node>,
        arguments: Vec<Node>,
    },

    /// `[a, b]`, and also multi-element parenthesised tuples.
    Array {
        elements: Vec<Node>,
    },

    Map {
        pairs: Vec<KeyValue>,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    /// `if`, and `guard` (with `form: Guard`). An empty `else_body` means
    /// no `else` branch was written.
    If {
        condition: Box<Node>,
        then_body: Vec<Node>,
        else_body: Vec<Node>,
        form: Form,
    },

    While {
        condition: Box<Node>,
        body: Vec<Node>,
        form: Form,
    },

    /// `for`, and every `loop` shape.
    For(ForStatement),

    /// `switch`, and `match` (with `form: Match`).
    Switch {
        expression: Box<Node>,
        cases: Vec<CaseClause>,
        default_body: Option<Vec<Node>>,
        form: Form,
    },

    Return {
        value: Option<Box<Node>>,
    },

    /* ----------------------------- */
    /* CONCURRENCY                   */
    /* ----------------------------- */

    Async {
        body: Vec<Node>,
    },

    Await {
        expression: Option<Box<Node>>,
    },

    Emit {
        event_name: String,
        data: Option<Box<Node>>,
    },

    Listen {
        event_name: String,
        handler: Option<Box<Node>>,
    },

    /* ----------------------------- */
    /* CONFIGURATION                 */
    /* ----------------------------- */

    /// `name: { ... }` named settings block.
    ConfigBlock {
        name: String,
        value: Box<Node>,
    },

    /// try/catch, watch, on, with, snapshot, restore and decorators.
    Statement(Statement),
}

/// Literal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Bool,
    Null,
}

impl LiteralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::Int => "int",
            LiteralKind::Float => "float",
            LiteralKind::String => "string",
            LiteralKind::Bool => "bool",
            LiteralKind::Null => "null",
        }
    }
}

/// Which surface syntax produced a control-flow node.
///
/// SYNTA offers a brace form and a terse `::` form for the same shapes, plus
/// sugar keywords that desugar onto `If`, `For` and `Switch`. The form is
/// kept so the tree can be shown the way it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// `if cond { ... }`
    Braced,
    /// `if cond :: stmt`
    Inline,
    /// `guard cond :: stmt`
    Guard,
    /// `loop while|foreach|parallel ...`
    Loop,
    /// `match expr :: { ... }`
    Match,
}

/// `key: value` pair of a map literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValue {
    pub key: Node,
    pub value: Node,
}

/// One `case` of a switch, or one arm of a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseClause {
    pub value: Node,
    pub body: Vec<Node>,
}

/// A `for` or `loop` statement.
///
/// Iteration loops (`for x in xs`, `loop foreach x in xs`) fill `variable`
/// and `iterable`. Counted loops fill `init`, `condition` and `update`.
/// `loop while i from a to b` stores `i` as the variable, `a` as `init` and
/// `b` as `condition`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStatement {
    pub variable: Option<String>,
    pub init: Option<Box<Node>>,
    pub condition: Option<Box<Node>>,
    pub update: Option<Box<Node>>,
    pub iterable: Option<Box<Node>>,
    pub body: Vec<Node>,
    pub concurrent: bool,
    pub form: Form,
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Node {
        Node::Identifier { name: name.into() }
    }

    pub fn literal(kind: LiteralKind, raw: impl Into<String>) -> Node {
        Node::Literal {
            kind,
            raw: raw.into(),
        }
    }

    /// Builds a binary node from sub-parses that may have failed.
    ///
    /// When one side is missing the other side is returned on its own; the
    /// sub-parser that failed has already recorded its error.
    pub fn binary(left: Option<Node>, operator: impl Into<String>, right: Option<Node>) -> Option<Node> {
        match (left, right) {
            (Some(left), Some(right)) => Some(Node::BinaryOp {
                left: Box::new(left),
                operator: operator.into(),
                right: Box::new(right),
            }),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }

    /// The node kind as a stable name, e.g. `"IfStatement"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Declaration(_) => "Declaration",
            Node::BinaryOp { .. } => "BinaryOp",
            Node::UnaryOp { .. } => "UnaryOp",
            Node::Literal { .. } => "Literal",
            Node::Identifier { .. } => "Identifier",
            Node::Call { .. } => "CallExpression",
            Node::Array { .. } => "ArrayLiteral",
            Node::Map { .. } => "MapLiteral",
            Node::If { .. } => "IfStatement",
            Node::While { .. } => "WhileStatement",
            Node::For(_) => "ForStatement",
            Node::Switch { .. } => "SwitchStatement",
            Node::Return { .. } => "ReturnStatement",
            Node::Async { .. } => "AsyncStatement",
            Node::Await { .. } => "AwaitExpression",
            Node::Emit { .. } => "EmitStatement",
            Node::Listen { .. } => "ListenStatement",
            Node::ConfigBlock { .. } => "ConfigBlock",
            Node::Statement(_) => "Statement",
        }
    }
}

impl fmt::Display for Node {
    /// One-line summary, e.g. `Declaration(bind: x)` or `BinaryOp(>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Declaration(decl) => write!(f, "{decl}"),
            Node::BinaryOp { operator, .. } => write!(f, "BinaryOp({operator})"),
            Node::UnaryOp { operator, .. } => write!(f, "UnaryOp({operator})"),
            Node::Literal { kind, raw } => write!(f, "Literal({}: {raw})", kind.as_str()),
            Node::Identifier { name } => write!(f, "Identifier({name})"),
            Node::Emit { event_name, .. } => write!(f, "EmitStatement({event_name})"),
            Node::Listen { event_name, .. } => write!(f, "ListenStatement({event_name})"),
            Node::ConfigBlock { name, .. } => write!(f, "ConfigBlock({name})"),
            Node::Statement(stmt) => write!(f, "Statement({})", stmt.kind()),
            other => f.write_str(other.kind_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_keeps_surviving_side() {
        let x = Node::identifier("x");
        assert_eq!(Node::binary(Some(x.clone()), "+", None), Some(x.clone()));
        assert_eq!(Node::binary(None, "+", Some(x.clone())), Some(x));
        assert_eq!(Node::binary(None, "+", None), None);
    }

    #[test]
    fn display_summaries() {
        let lit = Node::literal(LiteralKind::Int, "10");
        assert_eq!(lit.to_string(), "Literal(int: 10)");

        let sum = Node::binary(Some(Node::identifier("a")), "+", Some(lit));
        assert_eq!(sum.map(|n| n.to_string()), Some("BinaryOp(+)".to_string()));

        assert_eq!(Node::Async { body: vec![] }.to_string(), "AsyncStatement");
    }
}
