/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      expressions.rs
 * Purpose:   Expression parsing by precedence, from assignment down to
 *            primary expressions and collection literals.
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
//! Lowest to highest binding:
//!
//! ```text
//! assignment      := =: += -= *= /= %=     (right associative)
//! pipeline        |> |>>
//! logical_or      ||
//! logical_and     &&
//! equality        == !=
//! comparison      < <= > >=
//! term            + -
//! factor          * / %
//! unary           ! - + await
//! postfix         call, [index], .member, ++ --, -> target
//! primary
//! ```
//!
//! Every level returns `Option<Node>`. A failed operand is dropped and the
//! surviving side kept, see [`Node::binary`].

use crate::ast::{KeyValue, LiteralKind, Node};
use crate::lexer::token::TokenKind;
use crate::parser::helpers::{is_map_key, is_primary_keyword};
use crate::parser::parser::Parser;

impl Parser {
    /// Entry point for all expression parsing.
    pub(crate) fn expression(&mut self) -> Option<Node> {
        if !self.enter() {
            return None;
        }
        let expr = self.assignment();
        self.leave();
        expr
    }

    /// ```text
    /// assignment → pipeline ( assign_op expression )?
    /// ```
    fn assignment(&mut self) -> Option<Node> {
        let left = self.pipeline();

        if self.check_any(&[
            TokenKind::BindAssign,
            TokenKind::Assign,
            TokenKind::PlusAssign,
            TokenKind::MinusAssign,
            TokenKind::MultAssign,
            TokenKind::DivAssign,
            TokenKind::ModAssign,
        ]) {
            let op = self.advance().lexeme;
            let right = self.expression();
            return Node::binary(left, op, right);
        }

        left
    }

    /// Parses one left-associative binary level.
    ///
    /// Every operator applied nests the tree one level deeper, so each one
    /// counts against the depth limit.
    fn binary_level(&mut self, operators: &[TokenKind], next: fn(&mut Parser) -> Option<Node>) -> Option<Node> {
        let mut left = next(self);
        let mut levels = 0;

        while self.check_any(operators) {
            if !self.enter() {
                break;
            }
            levels += 1;

            let op = self.advance().lexeme;
            let right = next(self);
            left = Node::binary(left, op, right);
        }

        self.leave_levels(levels);
        left
    }

    /// ```text
    /// pipeline → logical_or ( ( "|>" | "|>>" ) logical_or )*
    /// ```
    fn pipeline(&mut self) -> Option<Node> {
        self.binary_level(&[TokenKind::PipeRight, TokenKind::PipeParallel], Parser::logical_or)
    }

    fn logical_or(&mut self) -> Option<Node> {
        self.binary_level(&[TokenKind::Or], Parser::logical_and)
    }

    fn logical_and(&mut self) -> Option<Node> {
        self.binary_level(&[TokenKind::And], Parser::equality)
    }

    /// ```text
    /// equality → comparison ( ( "==" | "!=" ) comparison )*
    /// ```
    fn equality(&mut self) -> Option<Node> {
        self.binary_level(&[TokenKind::Eq, TokenKind::Neq], Parser::comparison)
    }

    /// ```text
    /// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
    /// ```
    fn comparison(&mut self) -> Option<Node> {
        self.binary_level(
            &[TokenKind::Lt, TokenKind::Lte, TokenKind::Gt, TokenKind::Gte],
            Parser::term,
        )
    }

    fn term(&mut self) -> Option<Node> {
        self.binary_level(&[TokenKind::Plus, TokenKind::Minus], Parser::factor)
    }

    fn factor(&mut self) -> Option<Node> {
        self.binary_level(
            &[TokenKind::Multiply, TokenKind::Divide, TokenKind::Modulo],
            Parser::unary,
        )
    }

    /// ```text
    /// unary → ( "!" | "-" | "+" ) unary | await_expr | postfix
    /// ```
    fn unary(&mut self) -> Option<Node> {
        match self.current().kind {
            TokenKind::Not | TokenKind::Minus | TokenKind::Plus => {
                if !self.enter() {
                    return None;
                }
                let op = self.advance().lexeme;
                let operand = self.unary();
                self.leave();

                Some(Node::UnaryOp {
                    operator: op,
                    operand: Box::new(operand?),
                })
            }
            TokenKind::Await => self.await_expression(),
            _ => self.postfix(),
        }
    }

    /// ```text
    /// postfix → primary ( "(" args ")" | "[" expr "]" | "." name | "++" | "--" | "->" expression )*
    /// ```
    fn postfix(&mut self) -> Option<Node> {
        let expr = self.primary()?;
        let mut levels = 0;
        let expr = self.postfix_chain(expr, &mut levels);
        self.leave_levels(levels);
        expr
    }

    /// Applies postfix operators to `expr`, counting each wrap in `levels`.
    fn postfix_chain(&mut self, mut expr: Node, levels: &mut usize) -> Option<Node> {
        loop {
            let wraps = matches!(
                self.current().kind,
                TokenKind::LParen
                    | TokenKind::LBracket
                    | TokenKind::Dot
                    | TokenKind::Increment
                    | TokenKind::Decrement
                    | TokenKind::Arrow
            );
            if wraps {
                if !self.enter() {
                    break;
                }
                *levels += 1;
            }

            match self.current().kind {
                TokenKind::LParen => {
                    self.advance();
                    let arguments = self.delimited_list(TokenKind::RParen);
                    expr = Node::Call {
                        function: Box::new(expr),
                        arguments,
                    };
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.expression();
                    self.expect(TokenKind::RBracket);
                    if let Some(index) = index {
                        expr = Node::BinaryOp {
                            left: Box::new(expr),
                            operator: "[]".to_string(),
                            right: Box::new(index),
                        };
                    }
                }
                TokenKind::Dot => {
                    self.advance();
                    let member = self.current().clone();
                    if member.kind != TokenKind::Identifier && !member.kind.is_keyword() {
                        self.error(format!("expected IDENTIFIER, got {}", member.kind));
                        break;
                    }
                    self.advance();
                    expr = Node::BinaryOp {
                        left: Box::new(expr),
                        operator: ".".to_string(),
                        right: Box::new(Node::identifier(member.lexeme)),
                    };
                }
                TokenKind::Increment | TokenKind::Decrement => {
                    let op = self.advance().lexeme;
                    expr = Node::UnaryOp {
                        operator: format!("{op}_post"),
                        operand: Box::new(expr),
                    };
                }
                TokenKind::Arrow => {
                    let op = self.advance().lexeme;
                    let target = self.expression();
                    return Node::binary(Some(expr), op, target);
                }
                _ => break,
            }
        }

        Some(expr)
    }

    /// ```text
    /// primary → IDENT | literal | "(" tuple ")" | "[" array "]" | "{" map "}"
    ///         | async_block | keyword-as-identifier
    /// ```
    fn primary(&mut self) -> Option<Node> {
        let token = self.current().clone();

        let literal = match token.kind {
            TokenKind::Integer => Some(LiteralKind::Int),
            TokenKind::Float => Some(LiteralKind::Float),
            TokenKind::String => Some(LiteralKind::String),
            TokenKind::True | TokenKind::False => Some(LiteralKind::Bool),
            TokenKind::Null => Some(LiteralKind::Null),
            _ => None,
        };
        if let Some(kind) = literal {
            self.advance();
            return Some(Node::literal(kind, token.lexeme));
        }

        match token.kind {
            TokenKind::Identifier => {
                self.advance();
                Some(Node::identifier(token.lexeme))
            }
            TokenKind::LParen => Some(self.tuple()),
            TokenKind::LBracket => {
                self.advance();
                let elements = self.delimited_list(TokenKind::RBracket);
                Some(Node::Array { elements })
            }
            TokenKind::LBrace => Some(self.map_literal()),
            TokenKind::Async => self.async_statement(),
            kind if is_primary_keyword(kind) => {
                self.advance();
                Some(Node::identifier(token.lexeme))
            }
            kind => {
                self.error(format!("unexpected token {kind} '{}'", token.lexeme));
                self.advance();
                None
            }
        }
    }

    /// A parenthesised group. One element is the element itself; any other
    /// count becomes an array.
    fn tuple(&mut self) -> Node {
        self.advance(); // '('
        let mut elements = self.delimited_list(TokenKind::RParen);

        if elements.len() == 1 {
            elements.remove(0)
        } else {
            Node::Array { elements }
        }
    }

    /// Comma-separated expressions up to `close`, which is consumed.
    ///
    /// Newlines and comments between elements are ignored and a trailing
    /// comma is allowed. The opening delimiter must already be consumed.
    pub(crate) fn delimited_list(&mut self, close: TokenKind) -> Vec<Node> {
        let mut items = Vec::new();

        loop {
            self.skip_trivia();
            if self.check(close) || self.is_at_end() {
                break;
            }

            if let Some(item) = self.expression() {
                items.push(item);
            }

            self.skip_trivia();
            if self.check(TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(close);
        items
    }

    /// ```text
    /// map  → "{" ( pair ( sep pair )* )? "}"
    /// pair → key ":" ( map | expr ) | key
    /// ```
    ///
    /// A bare key is shorthand for `key: key`. A missing `}` is reported and
    /// the pairs read so far are kept.
    pub(crate) fn map_literal(&mut self) -> Node {
        self.advance(); // '{'
        let mut pairs = Vec::new();

        loop {
            self.skip_separators();
            if self.check(TokenKind::RBrace) || self.is_at_end() {
                break;
            }

            let token = self.current().clone();
            let key = if token.kind == TokenKind::String {
                Node::literal(LiteralKind::String, token.lexeme)
            } else if is_map_key(token.kind) {
                Node::identifier(token.lexeme)
            } else {
                self.error(format!("expected field name, got {}", token.kind));
                self.advance();
                continue;
            };
            self.advance();

            let shorthand = self.check_any(&[TokenKind::Comma, TokenKind::RBrace, TokenKind::StatementEnd])
                || self.current().kind.is_trivia();
            if shorthand {
                pairs.push(KeyValue {
                    value: key.clone(),
                    key,
                });
                continue;
            }

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
                pairs.push(KeyValue { key, value });
            }
        }

        if self.check(TokenKind::RBrace) {
            self.advance();
        } else {
            self.error("expected '}' after map literal");
        }

        Node::Map { pairs }
    }

    /// A map written directly as a field or pair value.
    pub(crate) fn nested_map(&mut self) -> Option<Node> {
        if !self.enter() {
            return None;
        }
        let map = self.map_literal();
        self.leave();
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{LiteralKind, Node};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn expr(source: &str) -> Node {
        let output = parse(tokenize(source));
        assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
        output.program.statements.into_iter().next().unwrap()
    }

    fn bin(left: Node, op: &str, right: Node) -> Node {
        Node::BinaryOp {
            left: Box::new(left),
            operator: op.to_string(),
            right: Box::new(right),
        }
    }

    fn int(raw: &str) -> Node {
        Node::literal(LiteralKind::Int, raw)
    }

    fn id(name: &str) -> Node {
        Node::identifier(name)
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(expr("1 + 2 * 3"), bin(int("1"), "+", bin(int("2"), "*", int("3"))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(expr("a - b - c"), bin(bin(id("a"), "-", id("b")), "-", id("c")));
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(expr("a := b := 1"), bin(id("a"), ":=", bin(id("b"), ":=", int("1"))));
    }

    #[test]
    fn pipeline_sits_below_logic() {
        assert_eq!(
            expr("data |> clean || fallback"),
            bin(id("data"), "|>", bin(id("clean"), "||", id("fallback")))
        );
    }

    #[test]
    fn comparison_and_logic() {
        assert_eq!(
            expr("a < 1 && b != 2"),
            bin(bin(id("a"), "<", int("1")), "&&", bin(id("b"), "!=", int("2")))
        );
    }

    #[test]
    fn postfix_chain() {
        let call = Node::Call {
            function: Box::new(bin(id("agent"), ".", id("run"))),
            arguments: vec![int("1")],
        };
        assert_eq!(expr("agent.run(1)[0]"), bin(call, "[]", int("0")));
    }

    #[test]
    fn member_access_accepts_keywords() {
        assert_eq!(expr("job.timeout"), bin(id("job"), ".", id("timeout")));
    }

    #[test]
    fn arrow_takes_whole_expression() {
        assert_eq!(
            expr("draft -> writer + editor"),
            bin(id("draft"), "->", bin(id("writer"), "+", id("editor")))
        );
    }

    #[test]
    fn unary_and_post_increment() {
        assert_eq!(
            expr("-x"),
            Node::UnaryOp {
                operator: "-".into(),
                operand: Box::new(id("x"))
            }
        );
        assert_eq!(
            expr("i++"),
            Node::UnaryOp {
                operator: "++_post".into(),
                operand: Box::new(id("i"))
            }
        );
    }

    #[test]
    fn tuples_degenerate() {
        assert_eq!(expr("(a)"), id("a"));
        assert_eq!(expr("(a, b)"), Node::Array { elements: vec![id("a"), id("b")] });
    }

    #[test]
    fn multiline_arguments() {
        match expr("print(\n  a,\n  b,\n)") {
            Node::Call { function, arguments } => {
                assert_eq!(*function, id("print"));
                assert_eq!(arguments.len(), 2);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn map_shorthand_and_nesting() {
        match expr("{ name, retry: { max: 3 } }") {
            Node::Map { pairs } => {
                assert_eq!(pairs[0].key, id("name"));
                assert_eq!(pairs[0].value, id("name"));
                assert!(matches!(pairs[1].value, Node::Map { .. }));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_token_is_reported() {
        let output = parse(tokenize("*"));
        assert_eq!(output.errors[0].message, "unexpected token MULTIPLY '*'");
        assert!(output.program.is_empty());
    }

    #[test]
    fn unclosed_map_keeps_pairs() {
        let output = parse(tokenize("{ a: 1"));
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "expected '}' after map literal");
        match &output.program.statements[..] {
            [Node::Map { pairs }] => assert_eq!(pairs.len(), 1),
            other => panic!("expected map, got {other:?}"),
        }
    }
}
