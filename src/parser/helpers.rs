/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      helpers.rs
 * Purpose:   Cursor primitives and keyword classification used by every
 *            grammar production.
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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /* ----------------------------- */
    /* CURSOR                        */
    /* ----------------------------- */

    /// The token under the cursor, or a synthetic EOF past the end.
    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Looks `offset` tokens ahead without consuming anything.
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        self.tokens.get(self.current + offset).unwrap_or(&self.eof)
    }

    /// Consumes the current token and returns it. Never moves past the end.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// True when the current token is an identifier spelled `word`.
    ///
    /// Used for the soft keywords (`in`, `to`, `all`, `race`, `foreach`,
    /// `parallel`) that the lexer leaves as identifiers.
    pub(crate) fn check_word(&self, word: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Identifier && token.lexeme == word
    }

    /// Consumes a token of the given kind, or records
    /// `expected KIND, got KIND` and returns `None` without consuming.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            return Some(self.advance());
        }
        let found = self.current().kind;
        self.error(format!("expected {kind}, got {found}"));
        None
    }

    /// Consumes a `{`, or records `message` and returns `false`.
    pub(crate) fn expect_open_brace(&mut self, message: &str) -> bool {
        if self.check(TokenKind::LBrace) {
            self.advance();
            true
        } else {
            self.error(message);
            false
        }
    }

    /* ----------------------------- */
    /* SKIPPING                      */
    /* ----------------------------- */

    /// Skips newlines and comments.
    pub(crate) fn skip_trivia(&mut self) {
        while self.current().kind.is_trivia() {
            self.advance();
        }
    }

    /// Skips statement terminators as well as newlines and comments.
    pub(crate) fn skip_terminators(&mut self) {
        while self.check(TokenKind::StatementEnd) || self.current().kind.is_trivia() {
            self.advance();
        }
    }

    /// Skips list separators: commas, terminators, newlines and comments.
    pub(crate) fn skip_separators(&mut self) {
        while self.check_any(&[TokenKind::Comma, TokenKind::StatementEnd]) || self.current().kind.is_trivia() {
            self.advance();
        }
    }

    /// If one of `kinds` follows after any run of terminators, moves the
    /// cursor onto it and returns `true`. Otherwise nothing is consumed.
    pub(crate) fn continues_with(&mut self, kinds: &[TokenKind]) -> bool {
        let mut offset = 0;
        loop {
            let kind = self.peek(offset).kind;
            if kinds.contains(&kind) {
                for _ in 0..offset {
                    self.advance();
                }
                return true;
            }
            if kind == TokenKind::StatementEnd || kind.is_trivia() {
                offset += 1;
                continue;
            }
            return false;
        }
    }

    /// Consumes the current token when it is a keyword that may stand in
    /// for an identifier (event names, parameter names and the like).
    pub(crate) fn accept_keyword_as_ident(&mut self) -> Option<Token> {
        if is_keyword_ident(self.current().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes an identifier, or a keyword accepted as one.
    pub(crate) fn accept_name(&mut self) -> Option<Token> {
        if self.check(TokenKind::Identifier) {
            return Some(self.advance());
        }
        self.accept_keyword_as_ident()
    }

    /// Consumes a type name after a `:` or `->`, if one is present.
    pub(crate) fn accept_type_name(&mut self) -> Option<String> {
        if is_type_name(self.current().kind) {
            Some(self.advance().lexeme)
        } else {
            None
        }
    }
}

/* ----------------------------- */
/* KEYWORD CATEGORIES            */
/* ----------------------------- */

/// Groups of reserved words that may double as names in some positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordCategory {
    Io,
    Debug,
    Ai,
    AgentSystem,
    Concurrency,
    Special,
    AgentOp,
}

pub(crate) fn keyword_category(kind: TokenKind) -> Option<KeywordCategory> {
    use KeywordCategory as C;
    use TokenKind as K;

    let category = match kind {
        K::Read | K::Write | K::Print | K::Log | K::Save => C::Io,

        K::Debug | K::Checkpoint | K::Trace | K::Assert | K::Configure | K::GenerateReport => C::Debug,

        K::Think | K::Ask | K::Prompt | K::Adapt | K::CallApi | K::Train | K::Evaluate | K::Reason | K::Observe => {
            C::Ai
        }

        K::Agent
        | K::Core
        | K::Model
        | K::Tools
        | K::Role
        | K::Mode
        | K::SysPrompt
        | K::MaxConcurrentRequests
        | K::RetryPolicy => C::AgentSystem,

        K::Async
        | K::Await
        | K::Emit
        | K::Listen
        | K::Dispatch
        | K::Merge
        | K::Task
        | K::Concurrent
        | K::Stage
        | K::Gather => C::Concurrency,

        K::With
        | K::Then
        | K::Defer
        | K::Pipe
        | K::Pass
        | K::Allow
        | K::Through
        | K::Range
        | K::Strategy
        | K::Timeout
        | K::Window
        | K::AlertThreshold
        | K::Pseudo => C::Special,

        K::Delegate
        | K::Route
        | K::Compose
        | K::Inspect
        | K::CreatePool
        | K::MaxWorkers
        | K::Submit
        | K::SubmitDelayed
        | K::Join
        | K::Now
        | K::ExecutionTime
        | K::Report => C::AgentOp,

        _ => return None,
    };
    Some(category)
}

fn in_category(kind: TokenKind, category: KeywordCategory) -> bool {
    keyword_category(kind) == Some(category)
}

pub(crate) fn is_io_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::Io)
}

pub(crate) fn is_debug_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::Debug)
}

pub(crate) fn is_ai_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::Ai)
}

pub(crate) fn is_agent_system_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::AgentSystem)
}

pub(crate) fn is_concurrency_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::Concurrency)
}

pub(crate) fn is_special_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::Special)
}

pub(crate) fn is_agent_op_keyword(kind: TokenKind) -> bool {
    in_category(kind, KeywordCategory::AgentOp)
}

/// Names allowed on the left of `:` in agent, task and struct bodies.
///
/// Plain identifiers are always fine; these reserved words are accepted as
/// well so `role: ...`, `timeout: ...`, `depends_on: ...` parse.
pub(crate) fn is_valid_field_name(kind: TokenKind) -> bool {
    use TokenKind as K;

    is_agent_system_keyword(kind)
        || matches!(
            kind,
            K::Identifier
                | K::Type
                | K::Context
                | K::Memory
                | K::Flow
                | K::Timeout
                | K::Task
                | K::Emit
                | K::Input
                | K::Action
                | K::Execution
                | K::Retry
                | K::Enabled
                | K::Max
                | K::DependsOn
                | K::Config
                | K::Outputs
                | K::Breakpoints
                | K::OnConcurDeadlock
                | K::OnLoop
                | K::OnTimeout
                | K::Global
        )
}

/// Keywords accepted wherever a name is expected outside declaration
/// bodies: event names, parameter names, `allow` targets.
pub(crate) fn is_keyword_ident(kind: TokenKind) -> bool {
    use TokenKind as K;

    is_io_keyword(kind)
        || is_debug_keyword(kind)
        || is_ai_keyword(kind)
        || is_agent_op_keyword(kind)
        || is_concurrency_keyword(kind)
        || is_special_keyword(kind)
        || matches!(
            kind,
            K::Breakpoint | K::Checkpoint | K::Debug | K::Allow | K::Pseudo | K::Type | K::Cast | K::Any | K::NoneKw
        )
}

/// Keywords that may start a primary expression as a plain identifier,
/// e.g. `print(x)`, `now()`, `trace(step)`.
pub(crate) fn is_primary_keyword(kind: TokenKind) -> bool {
    is_keyword_ident(kind) || is_valid_field_name(kind) || kind == TokenKind::Trait
}

/// Keys accepted on the left of `:` in a map literal.
pub(crate) fn is_map_key(kind: TokenKind) -> bool {
    is_valid_field_name(kind)
        || is_io_keyword(kind)
        || is_debug_keyword(kind)
        || is_ai_keyword(kind)
        || is_concurrency_keyword(kind)
}

/// Tokens accepted as a type annotation.
pub(crate) fn is_type_name(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::IntType
            | TokenKind::FloatType
            | TokenKind::StrType
            | TokenKind::BoolType
            | TokenKind::CharType
            | TokenKind::MapType
            | TokenKind::ArrayType
            | TokenKind::Any
            | TokenKind::Identifier
    )
}

/// Tokens that can only begin a value, never follow a complete declaration.
pub(crate) fn starts_value(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Identifier
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::LParen
            | TokenKind::Minus
            | TokenKind::Not
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source))
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut p = parser("x");
        assert_eq!(p.peek(10).kind, TokenKind::Eof);

        p.advance();
        p.advance();
        p.advance();
        assert!(p.is_at_end());
        assert_eq!(p.current, p.tokens.len());
    }

    #[test]
    fn expect_records_kind_names() {
        let mut p = parser("10");
        assert!(p.expect(TokenKind::Identifier).is_none());
        assert_eq!(p.errors[0].message, "expected IDENTIFIER, got INTEGER");
        assert_eq!(p.current, 0);
    }

    #[test]
    fn continues_with_skips_only_when_found() {
        let mut p = parser("\n;\nelse");
        assert!(p.continues_with(&[TokenKind::Else]));
        assert!(p.check(TokenKind::Else));

        let mut p = parser("\nfoo");
        assert!(!p.continues_with(&[TokenKind::Else]));
        assert!(p.check(TokenKind::Newline));
    }

    #[test]
    fn skip_separators_stops_at_content() {
        let mut p = parser(", ; \n !> note\n x");
        p.skip_separators();
        assert!(p.check(TokenKind::Identifier));
    }

    #[test]
    fn field_names_accept_reserved_words() {
        assert!(is_valid_field_name(TokenKind::Role));
        assert!(is_valid_field_name(TokenKind::DependsOn));
        assert!(is_valid_field_name(TokenKind::Identifier));
        assert!(!is_valid_field_name(TokenKind::If));
        assert!(!is_valid_field_name(TokenKind::Print));
    }

    #[test]
    fn categories() {
        assert!(is_io_keyword(TokenKind::Print));
        assert!(is_debug_keyword(TokenKind::Assert));
        assert!(is_ai_keyword(TokenKind::Think));
        assert!(is_concurrency_keyword(TokenKind::Gather));
        assert!(is_special_keyword(TokenKind::Pseudo));
        assert!(is_agent_op_keyword(TokenKind::Now));
        assert_eq!(keyword_category(TokenKind::Bind), None);
    }

    #[test]
    fn primary_keywords() {
        assert!(is_primary_keyword(TokenKind::Print));
        assert!(is_primary_keyword(TokenKind::Now));
        assert!(is_primary_keyword(TokenKind::Config));
        assert!(!is_primary_keyword(TokenKind::Break));
        assert!(!is_primary_keyword(TokenKind::Else));
    }
}
