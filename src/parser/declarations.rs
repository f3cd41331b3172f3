/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      declarations.rs
 * Purpose:   Variable, function, struct, agent and task declarations.
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

use crate::ast::{DeclKind, Declaration, Field, Node, Param};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::helpers::{is_keyword_ident, is_valid_field_name, starts_value};
use crate::parser::parser::Parser;

impl Parser {
    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    /// ```text
    /// var_decl → ( "bind" | "const" | "craft" ) ":" map_literal
    ///          | ( "bind" | "const" | "craft" ) IDENT ( ":" type )? ( ( ":=" | "=:" ) expr )?
    /// ```
    pub(crate) fn variable_declaration(&mut self) -> Option<Node> {
        let keyword = self.advance();
        let kind = DeclKind::from_binding_keyword(keyword.kind)?;

        if self.check(TokenKind::Colon) && self.peek(1).kind == TokenKind::LBrace {
            self.advance(); // ':'
            let value = self.map_literal();
            return Some(Node::ConfigBlock {
                name: keyword.lexeme,
                value: Box::new(value),
            });
        }

        let name = self.expect(TokenKind::Identifier)?.lexeme;
        let mut decl = Declaration::new(kind, name);

        if self.check(TokenKind::Colon) {
            self.advance();
            decl.type_name = self.accept_type_name();
        }

        decl.value = self.declaration_value(&decl.name);

        Some(Node::Declaration(decl))
    }

    /// ```text
    /// typed_decl → ( "int" | "float" | "str" | "bool" | "char" ) IDENT ( ( ":=" | "=:" ) expr )?
    /// ```
    pub(crate) fn typed_declaration(&mut self) -> Option<Node> {
        let type_token = self.advance();
        let name = self.expect(TokenKind::Identifier)?.lexeme;

        let mut decl = Declaration::new(DeclKind::Bind, name);
        decl.type_name = Some(type_token.lexeme);
        decl.value = self.declaration_value(&decl.name);

        Some(Node::Declaration(decl))
    }

    /// The optional `:= value` part of a binding.
    ///
    /// A value written straight after the name (`bind x 10`) is reported and
    /// still parsed, so the rest of the line does not cascade into errors.
    fn declaration_value(&mut self, name: &str) -> Option<Box<Node>> {
        if self.check_any(&[TokenKind::BindAssign, TokenKind::Assign]) {
            self.advance();
            return self.expression().map(Box::new);
        }

        if starts_value(self.current().kind) {
            let found = self.current().clone();
            let error = ParseError::syntax(
                format!("expected ':=' or '=:' after '{name}', got {}", found.kind),
                found.span,
            )
            .with_help(format!("write `{name} := {}`", found.lexeme));
            self.push_error(error);
            return self.expression().map(Box::new);
        }

        None
    }

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    /// ```text
    /// fn_decl → "fn" decorator? IDENT "(" params? ")" ( ( "->" | "=>" ) type )? "::"? "{" block "}"
    /// params  → param ( "," param )*
    /// param   → name ( ":" type )?
    /// ```
    pub(crate) fn function_declaration(&mut self, is_async: bool) -> Option<Node> {
        self.advance(); // 'fn'

        let decorator = if self.check_any(&[
            TokenKind::AtAgent,
            TokenKind::AtTask,
            TokenKind::AtStep,
            TokenKind::AtIntent,
            TokenKind::AtExplain,
            TokenKind::Decorator,
        ]) {
            Some(self.advance().lexeme)
        } else {
            None
        };

        let name = self.expect(TokenKind::Identifier)?.lexeme;

        if !self.check(TokenKind::LParen) {
            self.error("expected '(' after function name");
            return None;
        }
        self.advance();

        let params = self.parameters();

        if !self.check(TokenKind::RParen) {
            self.error("expected ')' after parameters");
            return None;
        }
        self.advance();

        let mut decl = Declaration::new(DeclKind::Fn, name);
        decl.decorator = decorator;
        decl.is_async = is_async;
        decl.params = params;

        if self.check_any(&[TokenKind::Arrow, TokenKind::FatArrow]) {
            self.advance();
            decl.type_name = self.accept_type_name();
        }

        if self.check(TokenKind::DoubleColon) {
            self.advance();
        }

        if !self.expect_open_brace("expected '{' for function body") {
            return None;
        }
        decl.body = self.block();

        Some(Node::Declaration(decl))
    }

    fn parameters(&mut self) -> Vec<Param> {
        let mut params = Vec::new();

        loop {
            self.skip_trivia();
            if self.check(TokenKind::RParen) || self.is_at_end() {
                break;
            }

            let kind = self.current().kind;
            let named = is_valid_field_name(kind)
                || matches!(kind, TokenKind::Prompt | TokenKind::Think | TokenKind::Ask)
                || is_keyword_ident(kind);
            if !named {
                self.error(format!("expected parameter name, got {kind}"));
                break;
            }
            let name = self.advance().lexeme;

            let type_name = if self.check(TokenKind::Colon) {
                self.advance();
                self.accept_type_name()
            } else {
                None
            };
            params.push(Param { name, type_name });

            self.skip_trivia();
            if !self.check(TokenKind::RParen) && self.expect(TokenKind::Comma).is_none() {
                break;
            }
        }

        params
    }

    /* ----------------------------- */
    /* STRUCTS                       */
    /* ----------------------------- */

    /// ```text
    /// struct_decl → "struct" IDENT "{" ( name ( ":" type )? sep )* "}"
    /// ```
    pub(crate) fn struct_declaration(&mut self) -> Option<Node> {
        self.advance(); // 'struct'

        let name = self.expect(TokenKind::Identifier)?.lexeme;
        if !self.expect_open_brace("expected '{' after struct name") {
            return None;
        }

        let mut decl = Declaration::new(DeclKind::Struct, name);

        loop {
            self.skip_separators();
            if self.check(TokenKind::RBrace) {
                self.advance();
                break;
            }
            if self.is_at_end() {
                self.error("expected '}' after struct body");
                break;
            }

            let kind = self.current().kind;
            if !is_valid_field_name(kind) {
                self.error(format!("expected field name, got {kind}"));
                self.advance();
                continue;
            }
            let field_name = self.advance().lexeme;

            let type_name = if self.check(TokenKind::Colon) {
                self.advance();
                self.accept_type_name()
            } else {
                None
            };
            decl.fields.push(Field::typed(field_name, type_name));
        }

        Some(Node::Declaration(decl))
    }

    /* ----------------------------- */
    /* AGENTS / TASKS                */
    /* ----------------------------- */

    /// ```text
    /// agent_decl → "@agent" IDENT "{" fields "}"
    /// ```
    pub(crate) fn agent_declaration(&mut self) -> Option<Node> {
        self.named_body(DeclKind::Agent)
    }

    /// ```text
    /// task_decl → "task" IDENT "{" fields "}"
    /// ```
    pub(crate) fn task_declaration(&mut self) -> Option<Node> {
        self.named_body(DeclKind::Task)
    }

    fn named_body(&mut self, kind: DeclKind) -> Option<Node> {
        self.advance(); // '@agent' or 'task'

        let name = self.expect(TokenKind::Identifier)?.lexeme;
        if !self.expect_open_brace(&format!("expected '{{' after {kind} name")) {
            return None;
        }

        let mut decl = Declaration::new(kind, name);
        decl.fields = self.field_list(kind);

        Some(Node::Declaration(decl))
    }

    /// ```text
    /// fields → ( name ":" expr sep )*
    /// ```
    ///
    /// A bad field name or a missing `:` skips one token and carries on with
    /// the next field. Consumes the closing `}`.
    fn field_list(&mut self, owner: DeclKind) -> Vec<Field> {
        let mut fields = Vec::new();

        loop {
            self.skip_separators();
            if self.check(TokenKind::RBrace) {
                self.advance();
                break;
            }
            if self.is_at_end() {
                self.error(format!("expected '}}' after {owner} body"));
                break;
            }

            let kind = self.current().kind;
            if !is_valid_field_name(kind) {
                self.error(format!("expected field name, got {kind}"));
                self.advance();
                continue;
            }
            let name = self.advance().lexeme;

            if !self.check(TokenKind::Colon) {
                self.error("expected ':' after field name");
                self.advance();
                continue;
            }
            self.advance();
            self.skip_trivia();

            let value = if self.check(TokenKind::LBrace) {
                self.nested_map()
            } else {
                self.expression()
            };

            if let Some(value) = value {
                fields.push(Field::valued(name, value));
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{DeclKind, Declaration, Node};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn declaration(source: &str) -> Declaration {
        let output = parse(tokenize(source));
        assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
        match output.program.statements.into_iter().next() {
            Some(Node::Declaration(decl)) => decl,
            other => panic!("expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn bind_with_type_and_value() {
        let decl = declaration("bind count: int := 3");
        assert_eq!(decl.kind, DeclKind::Bind);
        assert_eq!(decl.name, "count");
        assert_eq!(decl.type_name.as_deref(), Some("int"));
        assert!(decl.value.is_some());
    }

    #[test]
    fn reverse_assign_operator() {
        let decl = declaration("const limit =: 10");
        assert_eq!(decl.kind, DeclKind::Const);
        assert!(decl.value.is_some());
    }

    #[test]
    fn typed_declaration_is_a_bind() {
        let decl = declaration("int x := 5");
        assert_eq!(decl.kind, DeclKind::Bind);
        assert_eq!(decl.type_name.as_deref(), Some("int"));
    }

    #[test]
    fn missing_assign_reports_and_recovers() {
        let output = parse(tokenize("bind x 10; bind y := 2;"));
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "expected ':=' or '=:' after 'x', got INTEGER");
        assert!(output.errors[0].help.is_some());
        assert_eq!(output.program.statements.len(), 2);
    }

    #[test]
    fn function_with_params_and_return_type() {
        let decl = declaration("async fn fetch(url: str, retries) -> str {\n return get(url)\n}");
        assert_eq!(decl.kind, DeclKind::Fn);
        assert!(decl.is_async);
        assert_eq!(decl.params.len(), 2);
        assert_eq!(decl.params[0].type_name.as_deref(), Some("str"));
        assert_eq!(decl.params[1].type_name, None);
        assert_eq!(decl.type_name.as_deref(), Some("str"));
        assert_eq!(decl.body.len(), 1);
    }

    #[test]
    fn function_with_decorator_and_inline_marker() {
        let decl = declaration("fn @step prepare() :: { }");
        assert_eq!(decl.decorator.as_deref(), Some("@step"));
        assert!(decl.body.is_empty());
    }

    #[test]
    fn struct_fields() {
        let decl = declaration("struct Job {\n id: int,\n name: str\n timeout\n}");
        assert_eq!(decl.kind, DeclKind::Struct);
        let names: Vec<_> = decl.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "timeout"]);
        assert_eq!(decl.fields[2].type_name, None);
    }

    #[test]
    fn agent_with_reserved_field_names() {
        let decl = declaration("@agent Writer {\n role: \"editor\",\n model: \"gpt\"\n depends_on: [reader]\n}");
        assert_eq!(decl.kind, DeclKind::Agent);
        assert!(decl.field("role").is_some());
        assert!(decl.field("model").is_some());
        assert!(decl.field("depends_on").is_some());
    }

    #[test]
    fn task_with_nested_map() {
        let decl = declaration("task Build {\n execution: { retry: 3, enabled: true }\n}");
        assert_eq!(decl.kind, DeclKind::Task);
        assert!(matches!(decl.field("execution").and_then(|f| f.value.as_ref()), Some(Node::Map { .. })));
    }

    #[test]
    fn bad_field_skips_one_token() {
        let output = parse(tokenize("@agent A {\n if: 1,\n role: \"x\"\n}"));
        assert!(!output.errors.is_empty());
        assert_eq!(output.errors[0].message, "expected field name, got IF");
        match &output.program.statements[..] {
            [Node::Declaration(decl)] => assert!(decl.field("role").is_some()),
            other => panic!("expected agent, got {other:?}"),
        }
    }

    #[test]
    fn agent_without_brace_is_dropped() {
        let output = parse(tokenize("@agent Writer role"));
        assert_eq!(output.errors[0].message, "expected '{' after agent name");
        assert!(!output.program.statements.iter().any(|s| matches!(s, Node::Declaration(_))));
    }
}
