/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      property_tests.rs
 * Purpose:   Property-based tests for the parser.
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

//! Property-based tests for the SYNTA parser.
//!
//! 1. **Totality**: any token stream parses without panicking
//! 2. **Near-valid input**: shuffled real-language fragments still parse
//! 3. **Error positions** point inside the input
//! 4. **Clean programs** produce no errors and one statement per line

use proptest::prelude::*;

use super::parse;
use crate::lexer::tokenize;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Pieces of real SYNTA, recombined into plausible but broken programs.
const FRAGMENTS: &[&str] = &[
    "bind x := 1", "const y =: x", "@agent A {", "role: \"r\"", "task T {", "}", "{", "(", ")",
    "[", "]", "fn f(a, b) {", "return a", "if x ::", "else", "elif", "while", "for i in xs",
    "loop foreach i in xs ::", "guard ok ::", "match v :: {", "1 :: go()", "watch s ::",
    "on e ::", "(a) ->", "with context", "snapshot s ->", "restore s from", "await all {",
    "emit done", "listen done {", "try {", "catch e {", "switch v {", "case 1 {", "default {",
    "|>", "|>>", "->", ".", ",", ";", "\n", "::", ":", "x", "1", "\"s\"", "@step", "allow",
    "async {", "struct S {", "int n := 2", "!", "-", "++",
];

fn fragment_program() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..48).prop_map(|parts| parts.join(" "))
}

/// Arbitrary kinds in arbitrary order, as a reloaded token table might hold.
fn token_stream() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(prop::sample::select(TokenKind::ALL), 0..96).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Token::new(kind, kind.name().to_lowercase(), Span::new(1, i + 1)))
            .collect()
    })
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn arbitrary_source_parses(input in "\\PC{0,300}") {
        let output = parse(tokenize(&input));
        prop_assert!(output.warnings.is_empty());
    }

    #[test]
    fn arbitrary_token_streams_parse(tokens in token_stream()) {
        let len = tokens.len();
        let output = parse(tokens);
        prop_assert!(output.program.statements.len() <= len);
    }

    #[test]
    fn fragments_parse_with_positioned_errors(input in fragment_program()) {
        let tokens = tokenize(&input);
        let end = tokens.last().map(|t| t.span).unwrap_or_default();
        let output = parse(tokens);
        for error in &output.errors {
            prop_assert!(error.span <= end, "{} is past the end ({})", error.span, end);
            prop_assert!(error.span.line >= 1 && error.span.column >= 1);
        }
    }

    #[test]
    fn clean_bindings_parse_one_per_line(names in prop::collection::vec("[a-z]{1,6}_v", 1..20)) {
        let source: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("bind {name} := {i}\n"))
            .collect();
        let output = parse(tokenize(&source));
        prop_assert!(output.errors.is_empty(), "{:?}", output.errors);
        prop_assert_eq!(output.program.statements.len(), names.len());
    }
}
