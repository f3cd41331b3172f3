/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      param.rs
 * Purpose:   Function parameters and struct/agent/task fields.
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

/// A function parameter: `name` or `name: type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub type_name: Option<String>,
}

/// A named field.
///
/// Struct fields carry a type and no value; agent and task fields carry a
/// value and no type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub type_name: Option<String>,
    pub value: Option<Node>,
}

impl Field {
    pub fn typed(name: impl Into<String>, type_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_name,
            value: None,
        }
    }

    pub fn valued(name: impl Into<String>, value: Node) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            value: Some(value),
        }
    }
}
