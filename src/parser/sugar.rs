/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      sugar.rs
 * Purpose:   The terse `::` statement forms: loop, guard, match, and the
 *            reactive and state statements.
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

//! `loop`, `guard` and `match` reuse the `For`, `If` and `Switch` nodes and
//! mark them with their [`Form`]. The reactive statements build typed
//! [`Statement`] payloads.

use crate::ast::{CaseClause, ForStatement, Form, Handler, Node, Statement};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    fn skip_double_colon(&mut self) {
        if self.check(TokenKind::DoubleColon) {
            self.advance();
        }
    }

    /* ----------------------------- */
    /* LOOP                          */
    /* ----------------------------- */

    /// ```text
    /// loop_stmt → "loop" "while" IDENT "from" expr "to" expr "::"? body
    ///           | "loop" "while" expr "::"? body
    ///           | "loop" ( "foreach" | "parallel" ) name "in" expr "::"? body
    /// body      → "{" block "}" | stmt
    /// ```
    pub(crate) fn loop_statement(&mut self) -> Option<Node> {
        self.advance(); // 'loop'

        let mut stmt = ForStatement {
            variable: None,
            init: None,
            condition: None,
            update: None,
            iterable: None,
            body: Vec::new(),
            concurrent: false,
            form: Form::Loop,
        };

        if self.check(TokenKind::While) {
            self.advance();

            if self.check(TokenKind::Identifier) && self.peek(1).kind == TokenKind::From {
                stmt.variable = Some(self.advance().lexeme);
                self.advance(); // 'from'
                stmt.init = self.expression().map(Box::new);

                if self.check_word("to") {
                    self.advance();
                    stmt.condition = self.expression().map(Box::new);
                } else {
                    self.error("expected 'to' after loop start");
                }
            } else {
                stmt.condition = self.expression().map(Box::new);
            }
        } else if self.check_word("foreach") || self.check_word("parallel") {
            stmt.concurrent = self.advance().lexeme == "parallel";

            match self.accept_name() {
                Some(var) => stmt.variable = Some(var.lexeme),
                None => self.error("expected loop variable"),
            }

            if self.check_word("in") {
                self.advance();
            } else {
                self.error("expected 'in' after loop variable");
            }
            stmt.iterable = self.expression().map(Box::new);
        } else {
            self.error("expected 'while', 'foreach' or 'parallel' after 'loop'");
        }

        self.skip_double_colon();
        stmt.body = self.block_or_statement();

        Some(Node::For(stmt))
    }

    /* ----------------------------- */
    /* GUARD                         */
    /* ----------------------------- */

    /// ```text
    /// guard_stmt → "guard" expr "::" body ( "else" "::"? body )?
    /// ```
    pub(crate) fn guard_statement(&mut self) -> Option<Node> {
        self.advance(); // 'guard'

        let condition = self.expression();

        if self.check(TokenKind::DoubleColon) {
            self.advance();
        } else {
            self.error("expected '::' after guard condition");
        }

        let then_body = self.block_or_statement();

        let else_body = if self.continues_with(&[TokenKind::Else]) {
            self.advance();
            self.skip_double_colon();
            self.block_or_statement()
        } else {
            Vec::new()
        };

        Some(Node::If {
            condition: Box::new(condition?),
            then_body,
            else_body,
            form: Form::Guard,
        })
    }

    /* ----------------------------- */
    /* MATCH                         */
    /* ----------------------------- */

    /// ```text
    /// match_stmt → "match" expr "::" "{" ( expr "::" body sep )* "}"
    /// ```
    pub(crate) fn match_statement(&mut self) -> Option<Node> {
        self.advance(); // 'match'

        let expression = self.expression();

        if self.check(TokenKind::DoubleColon) {
            self.advance();
        } else {
            self.error("expected '::' after match expression");
        }

        if !self.expect_open_brace("expected '{' after match expression") {
            return None;
        }

        let mut cases = Vec::new();

        loop {
            self.skip_separators();
            if self.check(TokenKind::RBrace) {
                self.advance();
                break;
            }
            if self.is_at_end() {
                self.error("expected '}' after match arms");
                break;
            }

            let value = self.expression();

            if !self.check(TokenKind::DoubleColon) {
                self.error("expected '::' after match case");
                self.advance();
                continue;
            }
            self.advance();

            let body = self.block_or_statement();
            if let Some(value) = value {
                cases.push(CaseClause { value, body });
            }
        }

        Some(Node::Switch {
            expression: Box::new(expression?),
            cases,
            default_body: None,
            form: Form::Match,
        })
    }

    /* ----------------------------- */
    /* REACTIVE                      */
    /* ----------------------------- */

    /// ```text
    /// watch_stmt → "watch" expr "::"? ( "{" block "}" | "(" params ")" ( "->" expr )? )?
    /// ```
    pub(crate) fn watch_statement(&mut self) -> Option<Node> {
        self.advance(); // 'watch'

        let expression = self.expression().map(Box::new);
        self.skip_double_colon();

        let handler = if self.check(TokenKind::LBrace) {
            self.advance();
            Some(Handler::Block(self.block()))
        } else if self.check(TokenKind::LParen) {
            Some(self.lambda_handler(false))
        } else {
            None
        };

        Some(Node::Statement(Statement::Watch { expression, handler }))
    }

    /// ```text
    /// on_stmt → "on" expr "::"? ( "(" params ")" "->" stmt | stmt )?
    /// ```
    pub(crate) fn on_statement(&mut self) -> Option<Node> {
        self.advance(); // 'on'

        let expression = self.expression().map(Box::new);
        self.skip_double_colon();

        let handler = if self.check(TokenKind::LParen) {
            Some(self.lambda_handler(true))
        } else if self.check_any(&[TokenKind::Newline, TokenKind::StatementEnd, TokenKind::RBrace, TokenKind::Eof]) {
            None
        } else {
            self.statement().map(|stmt| Handler::Single(Box::new(stmt)))
        };

        Some(Node::Statement(Statement::On { expression, handler }))
    }

    /// `(params) -> body`, or a bare parenthesised group when no arrow
    /// follows. The body is a statement for `on`, an expression for `watch`.
    fn lambda_handler(&mut self, statement_body: bool) -> Handler {
        self.advance(); // '('
        let mut params = self.delimited_list(TokenKind::RParen);

        if !self.check(TokenKind::Arrow) {
            let group = if params.len() == 1 {
                params.remove(0)
            } else {
                Node::Array { elements: params }
            };
            return Handler::Single(Box::new(group));
        }
        self.advance(); // '->'

        let body = if statement_body { self.statement() } else { self.expression() };

        Handler::Lambda {
            params,
            body: body.map(Box::new),
        }
    }

    /// ```text
    /// with_stmt → "with" "context" map_literal? "::"? ( "{" block "}" )?
    /// ```
    pub(crate) fn with_statement(&mut self) -> Option<Node> {
        self.advance(); // 'with'

        if self.check(TokenKind::Context) {
            self.advance();
        } else {
            self.error("expected 'context' after 'with'");
        }

        let context = if self.check(TokenKind::LBrace) {
            Some(Box::new(self.map_literal()))
        } else {
            None
        };

        self.skip_double_colon();

        let body = if self.check(TokenKind::LBrace) {
            self.advance();
            self.block()
        } else {
            Vec::new()
        };

        Some(Node::Statement(Statement::With { context, body }))
    }

    /* ----------------------------- */
    /* STATE                         */
    /* ----------------------------- */

    /// ```text
    /// snapshot_stmt → "snapshot" expr ( "->" expr )?
    /// ```
    ///
    /// The postfix arrow binds the target into the source expression, so a
    /// top-level `->` is split back apart here.
    pub(crate) fn snapshot_statement(&mut self) -> Option<Node> {
        self.advance(); // 'snapshot'

        let (source, target) = match self.expression() {
            Some(Node::BinaryOp { left, operator, right }) if operator == "->" => (Some(left), Some(right)),
            other => (other.map(Box::new), None),
        };

        Some(Node::Statement(Statement::Snapshot { source, target }))
    }

    /// ```text
    /// restore_stmt → "restore" expr "from" expr
    /// ```
    pub(crate) fn restore_statement(&mut self) -> Option<Node> {
        self.advance(); // 'restore'

        let target = self.expression().map(Box::new);

        let source = if self.check(TokenKind::From) {
            self.advance();
            self.expression().map(Box::new)
        } else {
            self.error("expected 'from' in restore statement");
            None
        };

        Some(Node::Statement(Statement::Restore { target, source }))
    }
}
