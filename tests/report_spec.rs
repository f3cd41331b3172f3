/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Analysis reports, token tables and diagnostics.
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


use serde_json::Value;
use synta::report::{tokens_from_json, tokens_to_json};
use synta::{analyze, analyze_checked, parse, tokenize, AnalyzeError, AnalyzerConfig, DiagnosticPrinter, TreeStyle};

#[test]
fn successful_analysis() {
    let report = analyze("bind x := 10;");
    assert!(report.success);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());

    let kinds: Vec<_> = report.tokens.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, ["BIND", "IDENTIFIER", "BIND_ASSIGN", "INTEGER", "STMT_END", "EOF"]);
    assert_eq!(report.tokens[1].lexeme, "x");
    assert_eq!(report.tokens[1].semantic_group, "IDENTIFIER");
    assert!(report.parse_tree.contains("DECL_STMT"));
}

#[test]
fn success_tracks_errors() {
    let report = analyze("bind x 10");
    assert!(!report.success);
    assert_eq!(report.errors[0].line, 1);
    assert_eq!(report.errors[0].kind.as_str(), "syntax");
}

#[test]
fn json_shape() {
    let json: Value = serde_json::to_value(analyze("emit done")).unwrap();
    let object = json.as_object().unwrap();
    for key in ["success", "tokens", "parseTree", "errors", "warnings"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    let token = &json["tokens"][0];
    for key in ["lexeme", "type", "semanticGroup", "line", "column"] {
        assert!(token.get(key).is_some(), "token missing {key}");
    }
}

#[test]
fn configured_style_and_limit() {
    let config = AnalyzerConfig {
        tree_style: TreeStyle::Compact,
        ..AnalyzerConfig::default()
    };
    let report = analyze_checked("bind x := 1", &config).unwrap();
    assert_eq!(report.parse_tree, "[1] Declaration(bind: x)\n");

    let config = AnalyzerConfig::from_json_str(r#"{ "max_input_bytes": 3 }"#).unwrap();
    assert!(matches!(
        analyze_checked("bind x := 1", &config),
        Err(AnalyzeError::InputTooLarge { limit: 3, .. })
    ));
}

#[test]
fn token_table_reloads_into_the_same_parse() {
    let source = "@agent A {\n role: \"r\"\n}\nA -> job";
    let tokens = tokenize(source);
    let json = tokens_to_json(&tokens).unwrap();
    let reloaded = tokens_from_json(&json).unwrap();
    assert_eq!(parse(reloaded), parse(tokens));
}

#[test]
fn default_token_table_keeps_newlines() {
    let source = "bind f := g\n(x)";
    let json = tokens_to_json(&tokenize(source)).unwrap();
    let rows: Value = serde_json::from_str(&json).unwrap();
    assert!(rows.as_array().unwrap().iter().any(|row| row["type"] == "NEWLINE"));

    let reloaded = parse(tokens_from_json(&json).unwrap());
    assert_eq!(reloaded, parse(tokenize(source)));
    assert_eq!(reloaded.program.statements.len(), 2);
}

#[test]
fn malformed_token_table() {
    assert!(matches!(tokens_from_json("not json"), Err(AnalyzeError::Json(_))));
}

#[test]
fn diagnostics_point_at_the_error() {
    let source = "bind x := 1\nbind 10 := x\n";
    let output = parse(tokenize(source));
    assert!(!output.errors.is_empty());

    let rendered = DiagnosticPrinter::new("flow.syn", source).render_all(&output.errors);
    assert!(rendered.contains("--> flow.syn:2:"), "{rendered}");
    assert!(rendered.contains("bind 10 := x"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}
