/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Converts raw SYNTA source text into a positioned token stream.
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

use crate::lexer::keywords::lookup_ident;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Tokenizes a complete source string.
///
/// This is the public entry point for lexical analysis. The function is
/// total: every input, including the empty string, produces a token list
/// whose last element is [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use synta::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("bind x := 10;");
/// assert_eq!(tokens[0].kind, TokenKind::Bind);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}

/// Single-pass scanner over a source string.
///
/// The cursor works on Unicode scalar values, so columns match what an
/// editor shows rather than byte offsets.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer positioned at line 1, column 1.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Results are written into `self.tokens`, terminated by an `EOF` token
    /// carrying the final cursor position.
    ///
    /// # Termination
    /// Every call to `scan_token` consumes at least one character, so the
    /// loop runs at most once per input character.
    pub fn scan_tokens(&mut self) {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        let end = self.position();
        self.push(TokenKind::Eof, String::new(), end);

        tracing::debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "tokenized source"
        );
    }

    /// Scans and emits a single token starting at the cursor.
    ///
    /// Dispatch order matters: comment openers are checked before the
    /// operators that share their first character (`<!` before `<`,
    /// `!>` before `!` and `!=`).
    fn scan_token(&mut self) {
        let start = self.position();
        let ch = self.peek(0);

        // Comments
        if ch == '<' && self.peek(1) == '!' {
            let text = self.block_comment();
            self.push(TokenKind::CommentMulti, text, start);
            return;
        }
        if ch == '!' && self.peek(1) == '>' {
            let text = self.line_comment();
            self.push(TokenKind::CommentLine, text, start);
            return;
        }

        // Decorators
        if ch == '@' {
            self.decorator(start);
            return;
        }

        if ch.is_alphabetic() || ch == '_' {
            let word = self.read_identifier();
            let kind = lookup_ident(&word);
            self.push(kind, word, start);
            return;
        }

        if ch.is_ascii_digit() {
            self.number(start);
            return;
        }

        if ch == '"' || ch == '\'' {
            let text = self.string_literal();
            self.push(TokenKind::String, text, start);
            return;
        }

        if let Some(kind) = single_char_kind(ch) {
            self.advance();
            self.push(kind, ch.to_string(), start);
            return;
        }

        self.operator(start);
    }

    /// Multi-character operators, resolved greedily toward the longest match.
    fn operator(&mut self, start: Span) {
        let ch = self.advance();

        let (kind, lexeme) = match ch {
            '+' => {
                if self.match_char('+') {
                    (TokenKind::Increment, "++")
                } else if self.match_char('=') {
                    (TokenKind::PlusAssign, "+=")
                } else {
                    (TokenKind::Plus, "+")
                }
            }

            '-' => {
                if self.match_char('-') {
                    (TokenKind::Decrement, "--")
                } else if self.match_char('=') {
                    (TokenKind::MinusAssign, "-=")
                } else if self.match_char('>') {
                    (TokenKind::Arrow, "->")
                } else {
                    (TokenKind::Minus, "-")
                }
            }

            '*' => {
                if self.match_char('=') {
                    (TokenKind::MultAssign, "*=")
                } else {
                    (TokenKind::Multiply, "*")
                }
            }

            '/' => {
                if self.match_char('=') {
                    (TokenKind::DivAssign, "/=")
                } else {
                    (TokenKind::Divide, "/")
                }
            }

            '%' => {
                if self.match_char('=') {
                    (TokenKind::ModAssign, "%=")
                } else {
                    (TokenKind::Modulo, "%")
                }
            }

            '=' => {
                if self.match_char('=') {
                    (TokenKind::Eq, "==")
                } else if self.match_char(':') {
                    (TokenKind::Assign, "=:")
                } else if self.match_char('>') {
                    (TokenKind::FatArrow, "=>")
                } else {
                    // Plain `=` is not an operator in SYNTA.
                    (TokenKind::Illegal, "=")
                }
            }

            ':' => {
                if self.match_char('=') {
                    (TokenKind::BindAssign, ":=")
                } else if self.match_char(':') {
                    (TokenKind::DoubleColon, "::")
                } else {
                    (TokenKind::Colon, ":")
                }
            }

            '!' => {
                if self.match_char('=') {
                    (TokenKind::Neq, "!=")
                } else {
                    (TokenKind::Not, "!")
                }
            }

            '<' => {
                if self.match_char('=') {
                    (TokenKind::Lte, "<=")
                } else {
                    (TokenKind::Lt, "<")
                }
            }

            '>' => {
                if self.match_char('=') {
                    (TokenKind::Gte, ">=")
                } else {
                    (TokenKind::Gt, ">")
                }
            }

            '&' => {
                if self.match_char('&') {
                    (TokenKind::And, "&&")
                } else {
                    (TokenKind::Ampersand, "&")
                }
            }

            '|' => {
                if self.match_char('|') {
                    (TokenKind::Or, "||")
                } else if self.match_char('>') {
                    if self.match_char('>') {
                        (TokenKind::PipeParallel, "|>>")
                    } else {
                        (TokenKind::PipeRight, "|>")
                    }
                } else {
                    (TokenKind::PipeOp, "|")
                }
            }

            '.' => (TokenKind::Dot, "."),

            // Rendered as the two characters `\n` so token tables stay on one line.
            '\n' => (TokenKind::Newline, "\\n"),

            other => {
                self.push(TokenKind::Illegal, other.to_string(), start);
                return;
            }
        };

        self.push(kind, lexeme.to_string(), start);
    }

    /// `@name` decorators. A bare `@` is illegal.
    fn decorator(&mut self, start: Span) {
        self.advance(); // '@'

        if !self.peek(0).is_alphabetic() {
            self.push(TokenKind::Illegal, "@".to_string(), start);
            return;
        }

        let name = self.read_identifier();
        let kind = match name.as_str() {
            "agent" => TokenKind::AtAgent,
            "task" => TokenKind::AtTask,
            "step" => TokenKind::AtStep,
            "intent" => TokenKind::AtIntent,
            "explain" => TokenKind::AtExplain,
            _ => TokenKind::Decorator,
        };

        self.push(kind, format!("@{name}"), start);
    }

    /// Reads a maximal run of letters, digits and underscores.
    fn read_identifier(&mut self) -> String {
        let begin = self.current;
        while self.peek(0).is_alphanumeric() || self.peek(0) == '_' {
            self.advance();
        }
        self.slice(begin, self.current)
    }

    /// Integer or float literal with an optional time-unit suffix.
    ///
    /// # Examples
    /// - `42`   → INTEGER
    /// - `2.5`  → FLOAT
    /// - `30s`  → INTEGER with lexeme `30s`
    fn number(&mut self, start: Span) {
        let begin = self.current;
        let mut kind = TokenKind::Integer;

        while self.peek(0).is_ascii_digit() {
            self.advance();
        }

        if self.peek(0) == '.' && self.peek(1).is_ascii_digit() {
            kind = TokenKind::Float;
            self.advance(); // '.'
            while self.peek(0).is_ascii_digit() {
                self.advance();
            }
        }

        if matches!(self.peek(0), 's' | 'm' | 'h') {
            self.advance();
        }

        let text = self.slice(begin, self.current);
        self.push(kind, text, start);
    }

    /// Reads a quoted string and returns its content without quotes.
    ///
    /// Triple-quoted strings run to the matching triple quote and take no
    /// escapes. Regular strings treat a backslash as escaping the next
    /// character; escapes are kept verbatim. Unterminated strings return
    /// everything consumed up to end of input.
    fn string_literal(&mut self) -> String {
        let quote = self.advance();

        let triple = self.peek(0) == quote && self.peek(1) == quote;
        if triple {
            self.advance();
            self.advance();
        }

        let begin = self.current;

        if triple {
            while !self.is_at_end() {
                if self.peek(0) == quote && self.peek(1) == quote && self.peek(2) == quote {
                    let text = self.slice(begin, self.current);
                    self.advance();
                    self.advance();
                    self.advance();
                    return text;
                }
                self.advance();
            }
            return self.slice(begin, self.current);
        }

        while !self.is_at_end() && self.peek(0) != quote {
            if self.peek(0) == '\\' && self.current + 1 < self.chars.len() {
                self.advance();
            }
            self.advance();
        }

        let text = self.slice(begin, self.current);
        if !self.is_at_end() {
            self.advance(); // closing quote
        }
        text
    }

    /// `!> text` up to, but not including, the newline.
    fn line_comment(&mut self) -> String {
        self.advance(); // '!'
        self.advance(); // '>'

        let begin = self.current;
        while !self.is_at_end() && self.peek(0) != '\n' {
            self.advance();
        }
        self.slice(begin, self.current)
    }

    /// `<! ... !>` including both markers. Runs to end of input if unclosed.
    fn block_comment(&mut self) -> String {
        let begin = self.current;
        self.advance(); // '<'
        self.advance(); // '!'

        while !self.is_at_end() {
            if self.peek(0) == '!' && self.peek(1) == '>' {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }

        self.slice(begin, self.current)
    }

    /// Consumes the current character if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek(0) != expected || self.is_at_end() {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one character, updating line and column.
    ///
    /// Returns `'\0'` at end of input without moving.
    fn advance(&mut self) -> char {
        let Some(&ch) = self.chars.get(self.current) else {
            return '\0';
        };

        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Non-consuming lookahead; `'\0'` past the end.
    fn peek(&self, offset: usize) -> char {
        self.chars
            .get(self.current + offset)
            .copied()
            .unwrap_or('\0')
    }

    /// Skips spaces, tabs and carriage returns, but not newlines.
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek(0).is_whitespace() && self.peek(0) != '\n' {
            self.advance();
        }
    }

    fn slice(&self, begin: usize, end: usize) -> String {
        self.chars[begin..end].iter().collect()
    }

    fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn push(&mut self, kind: TokenKind, lexeme: String, span: Span) {
        tracing::trace!(kind = kind.name(), lexeme = %lexeme, at = %span, "token");
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Fixed single-character delimiters.
fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        '^' => TokenKind::BitwiseXor,
        ';' | '~' => TokenKind::StatementEnd,
        '$' => TokenKind::Dollar,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].span, Span::new(1, 1));
    }

    #[test]
    fn binding_statement() {
        assert_eq!(
            kinds("bind x := 10;"),
            vec![
                TokenKind::Bind,
                TokenKind::Identifier,
                TokenKind::BindAssign,
                TokenKind::Integer,
                TokenKind::StatementEnd,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_one_based_and_reset_after_newline() {
        let tokens = tokenize("a\n  b");
        assert_eq!(tokens[0].span, Span::new(1, 1));
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[1].lexeme, "\\n");
        assert_eq!(tokens[2].span, Span::new(2, 3));
    }

    #[test]
    fn pipes_resolve_greedily() {
        assert_eq!(
            kinds("| |> |>> ||"),
            vec![
                TokenKind::PipeOp,
                TokenKind::PipeRight,
                TokenKind::PipeParallel,
                TokenKind::Or,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn assignment_family() {
        assert_eq!(
            kinds(":= =: :: : => == ="),
            vec![
                TokenKind::BindAssign,
                TokenKind::Assign,
                TokenKind::DoubleColon,
                TokenKind::Colon,
                TokenKind::FatArrow,
                TokenKind::Eq,
                TokenKind::Illegal,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comments_are_checked_before_operators() {
        let tokens = tokenize("<! block\n comment !> x !> rest\ny");
        assert_eq!(tokens[0].kind, TokenKind::CommentMulti);
        assert_eq!(tokens[0].lexeme, "<! block\n comment !>");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].span, Span::new(2, 13));
        assert_eq!(tokens[2].kind, TokenKind::CommentLine);
        assert_eq!(tokens[2].lexeme, " rest");
        assert_eq!(tokens[3].kind, TokenKind::Newline);
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let tokens = tokenize("<! never closed");
        assert_eq!(tokens[0].kind, TokenKind::CommentMulti);
        assert_eq!(tokens[0].lexeme, "<! never closed");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn strings_keep_escapes_verbatim() {
        let tokens = tokenize(r#""a\"b" 'single'"#);
        assert_eq!(tokens[0].lexeme, r#"a\"b"#);
        assert_eq!(tokens[1].lexeme, "single");
    }

    #[test]
    fn triple_quoted_strings_span_lines() {
        let tokens = tokenize("\"\"\"line one\nline \\two\"\"\" x");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "line one\nline \\two");
        assert_eq!(tokens[1].span, Span::new(2, 14));
    }

    #[test]
    fn unterminated_string_keeps_content() {
        let tokens = tokenize("bind s := \"abc");
        assert_eq!(tokens[3].kind, TokenKind::String);
        assert_eq!(tokens[3].lexeme, "abc");
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn numbers_with_suffixes() {
        let tokens = tokenize("30s 1.5 7. 2h");
        assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::Integer, "30s"));
        assert_eq!((tokens[1].kind, tokens[1].lexeme.as_str()), (TokenKind::Float, "1.5"));
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[3].kind, TokenKind::Dot);
        assert_eq!(tokens[4].lexeme, "2h");
    }

    #[test]
    fn decorators() {
        let tokens = tokenize("@agent @task @allow @custom @ 1");
        assert_eq!(tokens[0].kind, TokenKind::AtAgent);
        assert_eq!(tokens[1].kind, TokenKind::AtTask);
        assert_eq!((tokens[2].kind, tokens[2].lexeme.as_str()), (TokenKind::Decorator, "@allow"));
        assert_eq!(tokens[3].lexeme, "@custom");
        assert_eq!(tokens[4].kind, TokenKind::Illegal);
        assert_eq!(tokens[4].lexeme, "@");
    }

    #[test]
    fn tilde_ends_statements() {
        assert_eq!(
            kinds("x ~"),
            vec![TokenKind::Identifier, TokenKind::StatementEnd, TokenKind::Eof]
        );
    }

    #[test]
    fn unknown_characters_are_illegal() {
        let tokens = tokenize("#?");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].lexeme, "#");
        assert_eq!(tokens[1].lexeme, "?");
    }

    #[test]
    fn unicode_columns_count_characters() {
        let tokens = tokenize("\"héllo\" x");
        assert_eq!(tokens[1].span, Span::new(1, 9));
    }
}
