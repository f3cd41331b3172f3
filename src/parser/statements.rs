/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      statements.rs
 * Purpose:   Statement dispatch, blocks and the core control-flow and
 *            concurrency statements.
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

//! MODULE OVERVIEW
//! ---------------
//! Every statement production returns `Option<Node>`. `None` means the
//! construct could not be built; the reason has already been recorded as a
//! syntax error and at least one token has been consumed.
//!
//! Control-flow statements accept two surface forms:
//!
//! ```text
//! if ready { run() } else { wait() }
//! if ready :: run() else :: wait()
//! ```

use crate::ast::{CaseClause, ForStatement, Form, Node, Statement};
use crate::lexer::token::TokenKind;
use crate::parser::helpers::{is_keyword_ident, is_valid_field_name};
use crate::parser::parser::Parser;

impl Parser {
    /// Parses one statement.
    ///
    /// Dispatch is on the leading token; anything that does not open a
    /// statement keyword falls through to an expression statement.
    pub(crate) fn statement(&mut self) -> Option<Node> {
        self.skip_trivia();
        if !self.enter() {
            return None;
        }
        let stmt = self.dispatch_statement();
        self.leave();
        stmt
    }

    fn dispatch_statement(&mut self) -> Option<Node> {
        use TokenKind as K;

        match self.current().kind {
            K::Eof => None,

            K::Decorator | K::AtTask | K::AtStep | K::AtIntent | K::AtExplain => self.decorator_statement(),
            K::AtAgent => self.agent_declaration(),
            K::Task => self.task_declaration(),
            K::Allow => self.allow_statement(),

            K::Loop => self.loop_statement(),
            K::Guard => self.guard_statement(),
            K::Match => self.match_statement(),
            K::Watch => self.watch_statement(),
            K::On => self.on_statement(),
            K::With => self.with_statement(),
            K::Snapshot => self.snapshot_statement(),
            K::Restore => self.restore_statement(),

            K::Bind | K::Const | K::Craft => self.variable_declaration(),
            K::IntType | K::FloatType | K::StrType | K::BoolType | K::CharType => self.typed_declaration(),
            K::Fn => self.function_declaration(false),
            K::Struct => self.struct_declaration(),

            K::If => self.if_statement(),
            K::While => self.while_statement(),
            K::For => self.for_statement(),
            K::Switch => self.switch_statement(),
            K::Return => self.return_statement(),
            K::Break => {
                self.advance();
                Some(Node::Statement(Statement::Break))
            }
            K::Continue => {
                self.advance();
                Some(Node::Statement(Statement::Continue))
            }

            K::Try => self.try_statement(),
            K::Raise => self.raise_statement(),

            K::Async => self.async_statement(),
            K::Await => self.await_expression(),
            K::Emit => self.emit_statement(),
            K::Listen => self.listen_statement(),

            _ => self.expression_statement(),
        }
    }

    /// `name : { ... }` opens a configuration block; anything else is a
    /// plain expression.
    fn expression_statement(&mut self) -> Option<Node> {
        let head = self.current().kind;
        let names_block = head == TokenKind::Identifier
            || matches!(head, TokenKind::Bind | TokenKind::Const | TokenKind::Craft)
            || is_valid_field_name(head)
            || is_keyword_ident(head);

        if names_block && self.peek(1).kind == TokenKind::Colon && self.peek(2).kind == TokenKind::LBrace {
            let name = self.advance().lexeme;
            self.advance(); // ':'
            let value = self.map_literal();
            return Some(Node::ConfigBlock {
                name,
                value: Box::new(value),
            });
        }

        self.expression()
    }

    /* ----------------------------- */
    /* BLOCKS                        */
    /* ----------------------------- */

    /// Parses statements up to and including the closing `}`.
    /// The opening `{` must already be consumed.
    pub(crate) fn block(&mut self) -> Vec<Node> {
        let mut statements = Vec::new();

        loop {
            self.skip_terminators();

            if self.check(TokenKind::RBrace) {
                self.advance();
                return statements;
            }
            if self.is_at_end() {
                self.error("expected '}' to close block");
                return statements;
            }

            let before = self.current;
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            if self.current == before {
                self.advance();
            }
        }
    }

    /// A `{ block }` when one opens here, otherwise a single statement.
    pub(crate) fn block_or_statement(&mut self) -> Vec<Node> {
        if self.check(TokenKind::LBrace) {
            self.advance();
            self.block()
        } else {
            self.statement().into_iter().collect()
        }
    }

    /* ----------------------------- */
    /* CONDITIONALS                  */
    /* ----------------------------- */

    /// ```text
    /// if_stmt → ( "if" | "elif" ) expr ( "{" block "}" | "::" stmt ) else_clause?
    /// ```
    pub(crate) fn if_statement(&mut self) -> Option<Node> {
        self.advance(); // 'if' or 'elif'

        let condition = self.expression();

        let (then_body, form) = if self.check(TokenKind::DoubleColon) {
            self.advance();
            (self.statement().into_iter().collect(), Form::Inline)
        } else if self.check(TokenKind::LBrace) {
            self.advance();
            (self.block(), Form::Braced)
        } else {
            self.error("expected '{' or '::' after if condition");
            return None;
        };

        let else_body = self.else_clause();

        Some(Node::If {
            condition: Box::new(condition?),
            then_body,
            else_body,
            form,
        })
    }

    /// ```text
    /// else_clause → "elif" if_rest
    ///             | "else" ( if_stmt | "{" block "}" | "::"? stmt )
    /// ```
    fn else_clause(&mut self) -> Vec<Node> {
        if !self.continues_with(&[TokenKind::Else, TokenKind::Elif]) {
            return Vec::new();
        }

        // Each `elif` / `else if` nests inside the previous branch.
        if !self.enter() {
            return Vec::new();
        }
        let body = self.else_branch();
        self.leave();
        body
    }

    fn else_branch(&mut self) -> Vec<Node> {
        if self.check(TokenKind::Elif) {
            return self.if_statement().into_iter().collect();
        }

        self.advance(); // 'else'

        if self.check(TokenKind::If) {
            return self.if_statement().into_iter().collect();
        }
        if self.check(TokenKind::DoubleColon) {
            self.advance();
        }
        self.block_or_statement()
    }

    /* ----------------------------- */
    /* LOOPS                         */
    /* ----------------------------- */

    /// ```text
    /// while_stmt → "while" expr ( "{" block "}" | "::" stmt )
    /// ```
    fn while_statement(&mut self) -> Option<Node> {
        self.advance(); // 'while'

        let condition = self.expression();

        let (body, form) = if self.check(TokenKind::DoubleColon) {
            self.advance();
            (self.statement().into_iter().collect(), Form::Inline)
        } else if self.check(TokenKind::LBrace) {
            self.advance();
            (self.block(), Form::Braced)
        } else {
            self.error("expected '{' or '::' after while condition");
            return None;
        };

        Some(Node::While {
            condition: Box::new(condition?),
            body,
            form,
        })
    }

    /// ```text
    /// for_stmt → "for" name "in" expr "concurrent"? "{" block "}"
    ///          | "for" init? ";" expr? ";" expr? "concurrent"? "{" block "}"
    /// ```
    fn for_statement(&mut self) -> Option<Node> {
        self.advance(); // 'for'

        let mut stmt = ForStatement {
            variable: None,
            init: None,
            condition: None,
            update: None,
            iterable: None,
            body: Vec::new(),
            concurrent: false,
            form: Form::Braced,
        };

        let iterates = self.peek(1).kind == TokenKind::Identifier && self.peek(1).lexeme == "in";

        if iterates && (self.check(TokenKind::Identifier) || self.current().kind.is_keyword()) {
            stmt.variable = Some(self.advance().lexeme);
            self.advance(); // 'in'
            stmt.iterable = self.expression().map(Box::new);
        } else {
            if !self.check(TokenKind::StatementEnd) {
                let init = match self.current().kind {
                    TokenKind::Bind | TokenKind::Const | TokenKind::Craft => self.variable_declaration(),
                    _ => self.expression(),
                };
                stmt.init = init.map(Box::new);
            }
            self.expect(TokenKind::StatementEnd);

            if !self.check(TokenKind::StatementEnd) {
                stmt.condition = self.expression().map(Box::new);
            }
            self.expect(TokenKind::StatementEnd);

            if !self.check_any(&[TokenKind::LBrace, TokenKind::Concurrent]) {
                stmt.update = self.expression().map(Box::new);
            }
        }

        if self.check(TokenKind::Concurrent) {
            self.advance();
            stmt.concurrent = true;
        }

        if !self.expect_open_brace("expected '{' for for loop body") {
            return None;
        }
        stmt.body = self.block();

        Some(Node::For(stmt))
    }

    /* ----------------------------- */
    /* SWITCH                        */
    /* ----------------------------- */

    /// ```text
    /// switch_stmt → "switch" expr "{" ( "case" expr "{" block "}" | "default" "{" block "}" )* "}"
    /// ```
    fn switch_statement(&mut self) -> Option<Node> {
        self.advance(); // 'switch'

        let expression = self.expression();
        if !self.expect_open_brace("expected '{' after switch expression") {
            return None;
        }

        let mut cases = Vec::new();
        let mut default_body = None;

        loop {
            self.skip_terminators();

            if self.check(TokenKind::RBrace) {
                self.advance();
                break;
            }
            if self.is_at_end() {
                self.error("expected '}' after switch body");
                break;
            }

            match self.current().kind {
                TokenKind::Case => {
                    self.advance();
                    let value = self.expression();
                    if !self.expect_open_brace("expected '{' after case value") {
                        continue;
                    }
                    let body = self.block();
                    if let Some(value) = value {
                        cases.push(CaseClause { value, body });
                    }
                }
                TokenKind::Default => {
                    self.advance();
                    if !self.expect_open_brace("expected '{' after 'default'") {
                        continue;
                    }
                    default_body = Some(self.block());
                }
                _ => {
                    self.error("expected 'case' or 'default' in switch statement");
                    self.advance();
                }
            }
        }

        Some(Node::Switch {
            expression: Box::new(expression?),
            cases,
            default_body,
            form: Form::Braced,
        })
    }

    /* ----------------------------- */
    /* JUMPS                         */
    /* ----------------------------- */

    /// True when nothing on this line can be a value.
    fn at_statement_boundary(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::StatementEnd
                | TokenKind::Newline
                | TokenKind::RBrace
                | TokenKind::Eof
                | TokenKind::CommentLine
                | TokenKind::CommentMulti
        )
    }

    fn return_statement(&mut self) -> Option<Node> {
        self.advance(); // 'return'

        let value = if self.at_statement_boundary() {
            None
        } else {
            self.expression().map(Box::new)
        };

        Some(Node::Return { value })
    }

    fn raise_statement(&mut self) -> Option<Node> {
        self.advance(); // 'raise'

        let value = if self.at_statement_boundary() {
            None
        } else {
            self.expression().map(Box::new)
        };

        Some(Node::Statement(Statement::Raise { value }))
    }

    /* ----------------------------- */
    /* ERROR HANDLING                */
    /* ----------------------------- */

    /// ```text
    /// try_stmt → "try" "{" block "}" ( "catch" IDENT? "{" block "}" )?
    /// ```
    fn try_statement(&mut self) -> Option<Node> {
        self.advance(); // 'try'

        if !self.expect_open_brace("expected '{' after 'try'") {
            return None;
        }
        let try_body = self.block();

        let mut catch_param = None;
        let mut catch_body = None;

        if self.continues_with(&[TokenKind::Catch]) {
            self.advance();
            if self.check(TokenKind::Identifier) {
                catch_param = Some(self.advance().lexeme);
            }
            if !self.expect_open_brace("expected '{' after 'catch'") {
                return None;
            }
            catch_body = Some(self.block());
        }

        Some(Node::Statement(Statement::TryCatch {
            try_body,
            catch_param,
            catch_body,
        }))
    }

    /* ----------------------------- */
    /* CONCURRENCY                   */
    /* ----------------------------- */

    /// `async fn ...` or `async { block }`. Also reachable from primary
    /// position, so an async block can be used as a value.
    pub(crate) fn async_statement(&mut self) -> Option<Node> {
        self.advance(); // 'async'

        if self.check(TokenKind::Fn) {
            return self.function_declaration(true);
        }
        if !self.expect_open_brace("expected '{' or 'fn' after 'async'") {
            return None;
        }

        Some(Node::Async { body: self.block() })
    }

    /// ```text
    /// await_expr → "await" ( "all" | "race" ) "{" expr ( sep expr )* "}"
    ///            | "await" expr
    /// ```
    ///
    /// The grouped forms keep their combinator as a call:
    /// `await all { a, b }` becomes `Await(Call(all, [a, b]))`.
    pub(crate) fn await_expression(&mut self) -> Option<Node> {
        self.advance(); // 'await'

        let grouped = (self.check_word("all") || self.check_word("race")) && self.peek(1).kind == TokenKind::LBrace;
        if !grouped {
            let expression = self.expression().map(Box::new);
            return Some(Node::Await { expression });
        }

        let combinator = self.advance().lexeme;
        self.advance(); // '{'

        let mut arguments = Vec::new();
        loop {
            self.skip_separators();
            if self.check(TokenKind::RBrace) || self.is_at_end() {
                break;
            }
            if let Some(expr) = self.expression() {
                arguments.push(expr);
            }
        }
        if !self.check(TokenKind::RBrace) {
            self.error(format!("expected '}}' after 'await {combinator}' list"));
        } else {
            self.advance();
        }

        Some(Node::Await {
            expression: Some(Box::new(Node::Call {
                function: Box::new(Node::identifier(combinator)),
                arguments,
            })),
        })
    }

    /// ```text
    /// emit_stmt → "emit" name map_literal?
    /// ```
    fn emit_statement(&mut self) -> Option<Node> {
        self.advance(); // 'emit'

        let Some(name) = self.accept_name() else {
            self.error("expected event name after 'emit'");
            return None;
        };

        let data = if self.check(TokenKind::LBrace) {
            Some(Box::new(self.map_literal()))
        } else {
            None
        };

        Some(Node::Emit {
            event_name: name.lexeme,
            data,
        })
    }

    /// ```text
    /// listen_stmt → "listen" name "{" expr? "}"
    /// ```
    fn listen_statement(&mut self) -> Option<Node> {
        self.advance(); // 'listen'

        let Some(name) = self.accept_name() else {
            self.error("expected event name after 'listen'");
            return None;
        };

        if !self.expect_open_brace("expected '{' after event name") {
            return None;
        }

        self.skip_terminators();
        let handler = if self.check(TokenKind::RBrace) {
            None
        } else {
            self.expression().map(Box::new)
        };
        self.skip_terminators();

        if self.check(TokenKind::RBrace) {
            self.advance();
        } else {
            self.error("expected '}' after listen handler");
        }

        Some(Node::Listen {
            event_name: name.lexeme,
            handler,
        })
    }

    /* ----------------------------- */
    /* DECORATORS / PERMISSIONS      */
    /* ----------------------------- */

    /// ```text
    /// decorator_stmt → DECORATOR IDENT? ( "(" args ")" )?
    /// ```
    fn decorator_statement(&mut self) -> Option<Node> {
        let decorator = self.advance().lexeme;

        let name = if self.check(TokenKind::Identifier) {
            Some(self.advance().lexeme)
        } else {
            None
        };

        let args = if self.check(TokenKind::LParen) {
            self.advance();
            Some(self.delimited_list(TokenKind::RParen))
        } else {
            None
        };

        Some(Node::Statement(Statement::Decorator { decorator, name, args }))
    }

    /// `allow name (args)` grants a capability; it is kept as a call to
    /// `allow_<name>`.
    fn allow_statement(&mut self) -> Option<Node> {
        self.advance(); // 'allow'

        let Some(name) = self.accept_name() else {
            self.error("expected function name after 'allow'");
            return None;
        };

        let arguments = if self.check(TokenKind::LParen) {
            self.advance();
            self.delimited_list(TokenKind::RParen)
        } else {
            Vec::new()
        };

        Some(Node::Call {
            function: Box::new(Node::identifier(format!("allow_{}", name.lexeme))),
            arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Form, Node, Statement};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn single(source: &str) -> Node {
        let output = parse(tokenize(source));
        assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
        assert_eq!(output.program.statements.len(), 1, "{:?}", output.program.statements);
        output.program.statements.into_iter().next().unwrap()
    }

    #[test]
    fn if_else_both_forms() {
        match single("if x > 1 { a() } else { b() }") {
            Node::If { then_body, else_body, form, .. } => {
                assert_eq!(form, Form::Braced);
                assert_eq!(then_body.len(), 1);
                assert_eq!(else_body.len(), 1);
            }
            other => panic!("expected if, got {other:?}"),
        }

        match single("if ready :: go() else :: stop()") {
            Node::If { else_body, form, .. } => {
                assert_eq!(form, Form::Inline);
                assert_eq!(else_body.len(), 1);
            }
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn else_on_next_line() {
        match single("if a {\n x()\n}\nelse {\n y()\n}") {
            Node::If { else_body, .. } => assert_eq!(else_body.len(), 1),
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn elif_chains_nest() {
        match single("if a { x() } elif b { y() } else { z() }") {
            Node::If { else_body, .. } => match &else_body[..] {
                [Node::If { else_body, .. }] => assert_eq!(else_body.len(), 1),
                other => panic!("expected nested if, got {other:?}"),
            },
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn for_in_and_counted() {
        match single("for item in items concurrent { use_it(item) }") {
            Node::For(f) => {
                assert_eq!(f.variable.as_deref(), Some("item"));
                assert!(f.iterable.is_some());
                assert!(f.concurrent);
            }
            other => panic!("expected for, got {other:?}"),
        }

        match single("for bind i := 0; i < 10; i++ { step(i) }") {
            Node::For(f) => {
                assert!(matches!(f.init.as_deref(), Some(Node::Declaration(_))));
                assert!(f.condition.is_some());
                assert!(matches!(f.update.as_deref(), Some(Node::UnaryOp { .. })));
            }
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn switch_cases_and_default() {
        match single("switch mode {\n case 1 { a() }\n case 2 { b() }\n default { c() }\n}") {
            Node::Switch { cases, default_body, form, .. } => {
                assert_eq!(cases.len(), 2);
                assert_eq!(default_body.map(|b| b.len()), Some(1));
                assert_eq!(form, Form::Braced);
            }
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn return_without_value() {
        assert_eq!(single("return;"), Node::Return { value: None });
    }

    #[test]
    fn try_catch_with_param() {
        match single("try { risky() }\ncatch err { log(err) }") {
            Node::Statement(Statement::TryCatch { catch_param, catch_body, .. }) => {
                assert_eq!(catch_param.as_deref(), Some("err"));
                assert_eq!(catch_body.map(|b| b.len()), Some(1));
            }
            other => panic!("expected try, got {other:?}"),
        }
    }

    #[test]
    fn await_all_keeps_combinator() {
        match single("await all { fetch(a), fetch(b) }") {
            Node::Await { expression: Some(expr) } => match *expr {
                Node::Call { function, arguments } => {
                    assert_eq!(*function, Node::identifier("all"));
                    assert_eq!(arguments.len(), 2);
                }
                other => panic!("expected call, got {other:?}"),
            },
            other => panic!("expected await, got {other:?}"),
        }
    }

    #[test]
    fn emit_and_listen() {
        match single("emit done { status: \"ok\" }") {
            Node::Emit { event_name, data } => {
                assert_eq!(event_name, "done");
                assert!(matches!(data.as_deref(), Some(Node::Map { .. })));
            }
            other => panic!("expected emit, got {other:?}"),
        }

        match single("listen done {\n handle(event)\n}") {
            Node::Listen { event_name, handler } => {
                assert_eq!(event_name, "done");
                assert!(handler.is_some());
            }
            other => panic!("expected listen, got {other:?}"),
        }
    }

    #[test]
    fn allow_becomes_prefixed_call() {
        match single("allow pseudo(\"shell\")") {
            Node::Call { function, arguments } => {
                assert_eq!(*function, Node::identifier("allow_pseudo"));
                assert_eq!(arguments.len(), 1);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn decorator_statement_with_args() {
        match single("@retry fetch(3)") {
            Node::Statement(Statement::Decorator { decorator, name, args }) => {
                assert_eq!(decorator, "@retry");
                assert_eq!(name.as_deref(), Some("fetch"));
                assert_eq!(args.map(|a| a.len()), Some(1));
            }
            other => panic!("expected decorator, got {other:?}"),
        }
    }

    #[test]
    fn jumps_inside_loops() {
        match single("while true { break; continue }") {
            Node::While { body, .. } => {
                assert_eq!(body, vec![Node::Statement(Statement::Break), Node::Statement(Statement::Continue)]);
            }
            other => panic!("expected while, got {other:?}"),
        }
    }

    #[test]
    fn config_block_with_keyword_name() {
        match single("config: { retries: 3 }") {
            Node::ConfigBlock { name, value } => {
                assert_eq!(name, "config");
                assert!(matches!(*value, Node::Map { .. }));
            }
            other => panic!("expected config block, got {other:?}"),
        }
    }

    #[test]
    fn unclosed_block_keeps_partial_body() {
        let output = parse(tokenize("if a { x()"));
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "expected '}' to close block");
        match &output.program.statements[..] {
            [Node::If { then_body, .. }] => assert_eq!(then_body.len(), 1),
            other => panic!("expected if, got {other:?}"),
        }
    }
}
