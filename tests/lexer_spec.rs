/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Tokenizer behaviour through the public API.
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


use synta::lexer::SemanticGroup;
use synta::{tokenize, Span, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn degenerate_inputs_end_in_eof() {
    for source in ["", "   \t ", "\n\n", "§¤", "\"", "<!", "@"] {
        let tokens = tokenize(source);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof), "{source:?}");
    }
}

#[test]
fn simple_literals() {
    let tokens = tokenize("123");
    assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::Integer, "123"));
    assert_eq!(tokens.len(), 2);

    let tokens = tokenize("1.5");
    assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::Float, "1.5"));

    let tokens = tokenize("\"hello\"");
    assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::String, "hello"));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokenize("if")[0].kind, TokenKind::If);
    assert_eq!(tokenize("myVar")[0].kind, TokenKind::Identifier);
}

#[test]
fn context_keywords_lex_as_identifiers() {
    for word in ["model", "role", "tools", "mode"] {
        assert_eq!(tokenize(word)[0].kind, TokenKind::Identifier, "{word}");
    }
}

#[test]
fn binding_scenario() {
    let tokens = tokenize("bind x := 10;");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Bind,
            TokenKind::Identifier,
            TokenKind::BindAssign,
            TokenKind::Integer,
            TokenKind::StatementEnd,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[3].lexeme, "10");
}

#[test]
fn unterminated_string_keeps_its_text() {
    let tokens = tokenize("bind s := \"abc");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].lexeme, "abc");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn positions_never_go_backwards() {
    let tokens = tokenize("@agent A {\n  role: \"x\" <! c\n !> tools: [a, b]\n}\nbind y := 2");
    for pair in tokens.windows(2) {
        assert!(pair[0].span <= pair[1].span, "{} then {}", pair[0].span, pair[1].span);
    }
    assert_eq!(tokens[0].span, Span::new(1, 1));
}

#[test]
fn both_statement_end_markers() {
    assert_eq!(
        kinds("a; b~"),
        vec![
            TokenKind::Identifier,
            TokenKind::StatementEnd,
            TokenKind::Identifier,
            TokenKind::StatementEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lone_equals_is_illegal() {
    assert_eq!(kinds("x = 1")[1], TokenKind::Illegal);
}

#[test]
fn semantic_groups() {
    assert_eq!(TokenKind::Elif.semantic_group(), SemanticGroup::If);
    assert_eq!(TokenKind::BindAssign.semantic_group().name(), "ASSIGNMENT");
    assert_eq!(TokenKind::Eof.semantic_group().name(), "EOF");
}

#[test]
fn kind_names_round_trip() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_name(kind.name()), Some(*kind));
    }
    assert_eq!(TokenKind::from_name("NOT_A_KIND"), None);
}
