/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      property_tests.rs
 * Purpose:   Property-based tests for the lexer.
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

//! Property-based tests for the SYNTA lexer.
//!
//! 1. **Totality**: arbitrary input always lexes and ends with `EOF`
//! 2. **Position monotonicity**: token positions never move backwards
//! 3. **Determinism**: same input, same tokens
//! 4. **Positions are 1-based**

use proptest::prelude::*;

use super::lexer::tokenize;
use super::token::TokenKind;

/// Fragments biased toward the characters the operator switch branches on.
const FRAGMENTS: &[&str] = &[
    "bind", "x", ":=", "=:", "::", ":", "=", "|>", "|>>", "||", "|", "->", "=>", "<!", "!>",
    "<", "!", "@agent", "@", "\"", "'", "\"\"\"", "\\", "1.5", "30s", "\n", " ", ";", "~",
    "{", "}", "(", ")", "é",
];

fn fragment_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..64).prop_map(|parts| parts.concat())
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
    fn eof_is_always_last(input in "\\PC{0,400}") {
        let tokens = tokenize(&input);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
    }

    #[test]
    fn positions_never_move_backwards(input in "\\PC{0,400}") {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(
                pair[0].span <= pair[1].span,
                "{:?} at {} is followed by {:?} at {}",
                pair[0].kind, pair[0].span, pair[1].kind, pair[1].span,
            );
        }
    }

    #[test]
    fn operator_soup_is_total_and_ordered(input in fragment_soup()) {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span <= pair[1].span);
        }
    }

    #[test]
    fn lexing_is_deterministic(input in fragment_soup()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn positions_are_one_based(input in "\\PC{0,200}") {
        for token in tokenize(&input) {
            prop_assert!(token.span.line >= 1);
            prop_assert!(token.span.column >= 1);
        }
    }
}
