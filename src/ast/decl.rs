/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      decl.rs
 * Purpose:   The unified declaration node.
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
use crate::ast::param::{Field, Param};
use crate::lexer::token::TokenKind;
use serde::Serialize;
use std::fmt;

/// What a [`Declaration`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Bind,
    Const,
    Craft,
    Fn,
    Struct,
    Agent,
    Task,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Bind => "bind",
            DeclKind::Const => "const",
            DeclKind::Craft => "craft",
            DeclKind::Fn => "fn",
            DeclKind::Struct => "struct",
            DeclKind::Agent => "agent",
            DeclKind::Task => "task",
        }
    }

    /// The variable-binding kind introduced by a leading keyword.
    pub fn from_binding_keyword(kind: TokenKind) -> Option<DeclKind> {
        match kind {
            TokenKind::Bind => Some(DeclKind::Bind),
            TokenKind::Const => Some(DeclKind::Const),
            TokenKind::Craft => Some(DeclKind::Craft),
            _ => None,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variable bindings and function, struct, agent and task definitions.
///
/// Only the fields relevant to `kind` are populated:
///
/// | kind                   | uses                                   |
/// |------------------------|----------------------------------------|
/// | `bind` `const` `craft` | `type_name`, `value`                   |
/// | `fn`                   | `params`, `type_name` (return), `body`, `decorator`, `is_async` |
/// | `struct`               | `fields` (typed)                       |
/// | `agent` `task`         | `fields` (valued)                      |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub type_name: Option<String>,
    pub value: Option<Box<Node>>,
    pub params: Vec<Param>,
    pub body: Vec<Node>,
    pub fields: Vec<Field>,
    pub decorator: Option<String>,
    pub is_async: bool,
}

impl Declaration {
    /// An otherwise empty declaration of the given kind.
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_name: None,
            value: None,
            params: Vec::new(),
            body: Vec::new(),
            fields: Vec::new(),
            decorator: None,
            is_async: false,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Declaration({}: {})", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_lookup() {
        let mut decl = Declaration::new(DeclKind::Agent, "Coder");
        decl.fields.push(Field::valued("role", Node::identifier("dev")));

        assert_eq!(decl.to_string(), "Declaration(agent: Coder)");
        assert!(decl.field("role").is_some());
        assert!(decl.field("model").is_none());
    }

    #[test]
    fn binding_keywords() {
        assert_eq!(DeclKind::from_binding_keyword(TokenKind::Craft), Some(DeclKind::Craft));
        assert_eq!(DeclKind::from_binding_keyword(TokenKind::Fn), None);
    }
}
