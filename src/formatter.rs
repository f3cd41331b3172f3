/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      formatter.rs
 * Purpose:   Renders a parsed program as a grammar tree or a compact
 *            statement listing.
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

//! Output looks like:
//!
//! ```text
//! SYNTA_PROGRAM
//! └── STMT_LIST
//!     └── DECL_STMT
//!         ├── IDENTIFIER "x"
//!         └── INT_LIT "10"
//! ```
//!
//! Nodes are first mapped to [`TreeNode`]s labelled by grammar rule, then
//! drawn. Identifiers are labelled with the semantic group of their
//! spelling, so `print` shows as `IO "print"`.

use crate::ast::{DeclKind, Declaration, Form, Handler, LiteralKind, Node, Program, Statement};
use crate::config::TreeStyle;
use crate::lexer::keywords::{lookup_context_keyword, lookup_keyword};
use std::fmt::Write;

/// A labelled node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// `LABEL "text"`
    fn named(label: &str, text: &str) -> Self {
        Self::leaf(format!("{label} \"{}\"", text.replace('\n', "\\n")))
    }

    /// Draws this node and everything below it, one line per node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.label);
        out.push('\n');
        render_children(&self.children, "", &mut out);
        out
    }
}

fn render_children(children: &[TreeNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (connector, extension) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };

        // Writing to a String cannot fail.
        let _ = writeln!(out, "{prefix}{connector}{}", child.label);
        render_children(&child.children, &format!("{prefix}{extension}"), out);
    }
}

/* ----------------------------- */
/* PUBLIC ENTRY POINTS           */
/* ----------------------------- */

/// Renders the whole program as a grammar tree.
pub fn format_program(program: &Program) -> String {
    program_tree(program).render()
}

/// Renders a single subtree, rooted at `node`.
pub fn format_node(node: &Node) -> String {
    node_tree(node).render()
}

/// One line per top-level statement: `[n] summary`.
pub fn format_compact(program: &Program) -> String {
    let mut out = String::new();
    for (i, stmt) in program.statements.iter().enumerate() {
        let _ = writeln!(out, "[{}] {stmt}", i + 1);
    }
    out
}

/// Renders in the requested style.
pub fn format_with_style(program: &Program, style: TreeStyle) -> String {
    match style {
        TreeStyle::Grammar => format_program(program),
        TreeStyle::Compact => format_compact(program),
    }
}

pub fn program_tree(program: &Program) -> TreeNode {
    let statements = program.statements.iter().map(node_tree).collect();
    TreeNode::with_children(
        "SYNTA_PROGRAM",
        vec![TreeNode::with_children("STMT_LIST", statements)],
    )
}

/// The semantic group label for an identifier spelling, or `IDENTIFIER`.
pub fn identifier_group(name: &str) -> &'static str {
    lookup_keyword(name)
        .or_else(|| lookup_context_keyword(name))
        .map(|kind| kind.semantic_group().name())
        .unwrap_or("IDENTIFIER")
}

/* ----------------------------- */
/* NODE → TREE                   */
/* ----------------------------- */

fn block(label: &str, body: &[Node]) -> TreeNode {
    TreeNode::with_children(label, body.iter().map(node_tree).collect())
}

fn wrap(label: &str, node: &Node) -> TreeNode {
    TreeNode::with_children(label, vec![node_tree(node)])
}

pub fn node_tree(node: &Node) -> TreeNode {
    match node {
        Node::Declaration(decl) => declaration_tree(decl),

        Node::Literal { kind, raw } => {
            let label = match kind {
                LiteralKind::Int => "INT_LIT",
                LiteralKind::Float => "FLOAT_LIT",
                LiteralKind::String => "STRING_LIT",
                LiteralKind::Bool => "BOOL_LIT",
                LiteralKind::Null => "NULL_LIT",
            };
            TreeNode::named(label, raw)
        }

        Node::Identifier { name } => TreeNode::named(identifier_group(name), name),

        Node::BinaryOp { left, operator, right } => TreeNode::with_children(
            "BINARY_EXPR",
            vec![
                wrap("EXPR", left),
                TreeNode::named("OPERATOR", operator),
                wrap("EXPR", right),
            ],
        ),

        Node::UnaryOp { operator, operand } => TreeNode::with_children(
            "UNARY_EXPR",
            vec![TreeNode::named("OPERATOR", operator), wrap("EXPR", operand)],
        ),

        Node::Call { function, arguments } => {
            let mut children = vec![wrap("MEMBER_EXPR", function)];
            if !arguments.is_empty() {
                children.push(block("ARG_LIST", arguments));
            }
            TreeNode::with_children("CALL_EXPR", children)
        }

        Node::Array { elements } => block("ARRAY_LITERAL", elements),

        Node::Map { pairs } => TreeNode::with_children(
            "MAP_LITERAL",
            pairs
                .iter()
                .map(|pair| TreeNode::with_children("PAIR", vec![node_tree(&pair.key), node_tree(&pair.value)]))
                .collect(),
        ),

        Node::If {
            condition,
            then_body,
            else_body,
            form,
        } => {
            let label = if *form == Form::Guard { "GUARD_STMT" } else { "IF_STMT" };
            let mut children = vec![wrap("CONDITION", condition), block("BLOCK", then_body)];
            if !else_body.is_empty() {
                children.push(block("ELSE_BLOCK", else_body));
            }
            TreeNode::with_children(label, children)
        }

        Node::While { condition, body, .. } => TreeNode::with_children(
            "WHILE_STMT",
            vec![wrap("CONDITION", condition), block("BLOCK", body)],
        ),

        Node::For(stmt) => {
            let label = if stmt.form == Form::Loop { "LOOP_STMT" } else { "FOR_STMT" };
            let mut children = Vec::new();
            if let Some(variable) = &stmt.variable {
                children.push(TreeNode::named("VARIABLE", variable));
            }
            let parts = [
                ("INIT", &stmt.init),
                ("CONDITION", &stmt.condition),
                ("UPDATE", &stmt.update),
                ("ITERABLE", &stmt.iterable),
            ];
            for (part, value) in parts {
                if let Some(value) = value {
                    children.push(wrap(part, value));
                }
            }
            if stmt.concurrent {
                children.push(TreeNode::leaf("CONCURRENT"));
            }
            children.push(block("BLOCK", &stmt.body));
            TreeNode::with_children(label, children)
        }

        Node::Switch {
            expression,
            cases,
            default_body,
            form,
        } => {
            let label = if *form == Form::Match { "MATCH_STMT" } else { "SWITCH_STMT" };
            let mut children = vec![wrap("EXPR", expression)];
            for case in cases {
                children.push(TreeNode::with_children(
                    "CASE",
                    vec![node_tree(&case.value), block("BLOCK", &case.body)],
                ));
            }
            if let Some(body) = default_body {
                children.push(block("DEFAULT", body));
            }
            TreeNode::with_children(label, children)
        }

        Node::Return { value } => TreeNode::with_children("RETURN_STMT", value.iter().map(|v| node_tree(v)).collect()),

        Node::Async { body } => block("ASYNC_STMT", body),

        Node::Await { expression } => {
            TreeNode::with_children("AWAIT_EXPR", expression.iter().map(|e| node_tree(e)).collect())
        }

        Node::Emit { event_name, data } => {
            let mut children = vec![TreeNode::named("IDENTIFIER", event_name)];
            children.extend(data.iter().map(|d| node_tree(d)));
            TreeNode::with_children("EMIT_STMT", children)
        }

        Node::Listen { event_name, handler } => {
            let mut children = vec![TreeNode::named("IDENTIFIER", event_name)];
            children.extend(handler.iter().map(|h| node_tree(h)));
            TreeNode::with_children("LISTEN_STMT", children)
        }

        Node::ConfigBlock { name, value } => TreeNode::with_children(
            "CONFIG_BLOCK",
            vec![TreeNode::named("IDENTIFIER", name), node_tree(value)],
        ),

        Node::Statement(stmt) => statement_tree(stmt),
    }
}

fn declaration_tree(decl: &Declaration) -> TreeNode {
    let label = match decl.kind {
        DeclKind::Bind | DeclKind::Const | DeclKind::Craft => "DECL_STMT",
        DeclKind::Fn => "FN_DECL",
        DeclKind::Struct => "STRUCT_DECL",
        DeclKind::Agent => "AGENT_DECL",
        DeclKind::Task => "TASK_DECL",
    };

    let mut children = Vec::new();

    if let Some(decorator) = &decl.decorator {
        children.push(TreeNode::named("DECORATOR", decorator));
    }
    if decl.is_async {
        children.push(TreeNode::leaf("ASYNC"));
    }
    children.push(TreeNode::named("IDENTIFIER", &decl.name));

    if decl.kind == DeclKind::Fn {
        let params = decl
            .params
            .iter()
            .map(|p| {
                let types = p.type_name.iter().map(|t| TreeNode::named("TYPE", t)).collect();
                TreeNode::with_children(format!("PARAM \"{}\"", p.name), types)
            })
            .collect();
        children.push(TreeNode::with_children("PARAM_LIST", params));
        if let Some(ret) = &decl.type_name {
            children.push(TreeNode::named("RETURN_TYPE", ret));
        }
    } else if let Some(type_name) = &decl.type_name {
        children.push(TreeNode::named("TYPE", type_name));
    }

    if let Some(value) = &decl.value {
        children.push(node_tree(value));
    }

    for field in &decl.fields {
        let mut pair = vec![TreeNode::named("IDENTIFIER", &field.name)];
        if let Some(type_name) = &field.type_name {
            pair.push(TreeNode::named("TYPE", type_name));
        }
        if let Some(value) = &field.value {
            pair.push(node_tree(value));
        }
        children.push(TreeNode::with_children("PAIR", pair));
    }

    if decl.kind == DeclKind::Fn || !decl.body.is_empty() {
        children.push(block("BLOCK", &decl.body));
    }

    TreeNode::with_children(label, children)
}

fn handler_tree(handler: &Handler) -> TreeNode {
    match handler {
        Handler::Block(body) => block("BLOCK", body),
        Handler::Lambda { params, body } => {
            let mut children = vec![block("PARAM_LIST", params)];
            children.extend(body.iter().map(|b| node_tree(b)));
            TreeNode::with_children("LAMBDA", children)
        }
        Handler::Single(node) => wrap("HANDLER", node),
    }
}

fn statement_tree(stmt: &Statement) -> TreeNode {
    match stmt {
        Statement::TryCatch {
            try_body,
            catch_param,
            catch_body,
        } => {
            let mut children = vec![block("BLOCK", try_body)];
            if let Some(body) = catch_body {
                let mut catch = Vec::new();
                if let Some(param) = catch_param {
                    catch.push(TreeNode::named("IDENTIFIER", param));
                }
                catch.extend(body.iter().map(node_tree));
                children.push(TreeNode::with_children("CATCH_BLOCK", catch));
            }
            TreeNode::with_children("TRY_STMT", children)
        }

        Statement::Raise { value } => TreeNode::with_children("RAISE_STMT", value.iter().map(|v| node_tree(v)).collect()),
        Statement::Break => TreeNode::leaf("BREAK_STMT"),
        Statement::Continue => TreeNode::leaf("CONTINUE_STMT"),

        Statement::Watch { expression, handler } | Statement::On { expression, handler } => {
            let label = if matches!(stmt, Statement::Watch { .. }) { "WATCH_STMT" } else { "ON_STMT" };
            let mut children: Vec<TreeNode> = expression.iter().map(|e| wrap("EXPR", e)).collect();
            children.extend(handler.iter().map(handler_tree));
            TreeNode::with_children(label, children)
        }

        Statement::With { context, body } => {
            let mut children: Vec<TreeNode> = context.iter().map(|c| wrap("CONTEXT", c)).collect();
            children.push(block("BLOCK", body));
            TreeNode::with_children("WITH_STMT", children)
        }

        Statement::Snapshot { source, target } => {
            let mut children: Vec<TreeNode> = source.iter().map(|s| wrap("SOURCE", s)).collect();
            children.extend(target.iter().map(|t| wrap("TARGET", t)));
            TreeNode::with_children("SNAPSHOT_STMT", children)
        }

        Statement::Restore { target, source } => {
            let mut children: Vec<TreeNode> = target.iter().map(|t| wrap("TARGET", t)).collect();
            children.extend(source.iter().map(|s| wrap("SOURCE", s)));
            TreeNode::with_children("RESTORE_STMT", children)
        }

        Statement::Decorator { decorator, name, args } => {
            let mut children = vec![TreeNode::named("DECORATOR", decorator)];
            if let Some(name) = name {
                children.push(TreeNode::named("IDENTIFIER", name));
            }
            if let Some(args) = args {
                children.push(block("ARG_LIST", args));
            }
            TreeNode::with_children("DECORATOR_STMT", children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn tree(source: &str) -> String {
        let output = parse(tokenize(source));
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        format_program(&output.program)
    }

    #[test]
    fn renders_binding() {
        let expected = [
            "SYNTA_PROGRAM",
            "└── STMT_LIST",
            "    └── DECL_STMT",
            "        ├── IDENTIFIER \"x\"",
            "        └── INT_LIT \"10\"",
        ];
        assert_eq!(tree("bind x := 10"), expected.join("\n") + "\n");
    }

    #[test]
    fn connectors_and_continuation_bars() {
        let out = tree("a + b\nc");
        let expected = [
            "SYNTA_PROGRAM",
            "└── STMT_LIST",
            "    ├── BINARY_EXPR",
            "    │   ├── EXPR",
            "    │   │   └── IDENTIFIER \"a\"",
            "    │   ├── OPERATOR \"+\"",
            "    │   └── EXPR",
            "    │       └── IDENTIFIER \"b\"",
            "    └── IDENTIFIER \"c\"",
        ];
        assert_eq!(out, expected.join("\n") + "\n");
    }

    #[test]
    fn keyword_identifiers_show_their_group() {
        let out = tree("print(now())");
        assert!(out.contains("IO \"print\""), "{out}");
        assert!(out.contains("AGENT_OP \"now\""), "{out}");
        assert_eq!(identifier_group("model"), "AGENT_SYSTEM");
        assert_eq!(identifier_group("counter"), "IDENTIFIER");
    }

    #[test]
    fn sugar_forms_have_their_own_labels() {
        assert!(tree("guard ok :: go()").contains("GUARD_STMT"));
        assert!(tree("loop foreach x in xs :: f(x)").contains("LOOP_STMT"));
        assert!(tree("match v :: { 1 :: a() }").contains("MATCH_STMT"));
        assert!(tree("if ok { go() }").contains("IF_STMT"));
    }

    #[test]
    fn agent_fields_render_as_pairs() {
        let out = tree("@agent Writer { role: \"editor\" }");
        assert!(out.contains("AGENT_DECL"));
        assert!(out.contains("PAIR"));
        assert!(out.contains("IDENTIFIER \"role\""));
        assert!(out.contains("STRING_LIT \"editor\""));
    }

    #[test]
    fn compact_listing() {
        let output = parse(tokenize("bind x := 1\nemit done\nx > 2"));
        assert_eq!(
            format_compact(&output.program),
            "[1] Declaration(bind: x)\n[2] EmitStatement(done)\n[3] BinaryOp(>)\n"
        );
    }

    #[test]
    fn empty_program_has_empty_list() {
        assert_eq!(format_program(&Program::default()), "SYNTA_PROGRAM\n└── STMT_LIST\n");
    }

    #[test]
    fn single_node() {
        assert_eq!(format_node(&Node::identifier("x")), "IDENTIFIER \"x\"\n");
    }
}
