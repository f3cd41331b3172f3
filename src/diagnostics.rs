/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Compiler-style rendering of parse errors against source text.
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

use crate::error::ParseError;
use crate::span::Span;
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for SYNTA parse
/// errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// The output is inspired by `rustc` diagnostics, simplified, and readable
/// without color. Rendering goes to a `String`; the caller decides where it
/// is printed.
pub struct DiagnosticPrinter {
    /// Full source code of the file being analyzed.
    source: String,

    /// Name shown in the `-->` line (e.g. `agents.syn`, or `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a single error.
    ///
    /// # Output Example
    /// ```text
    /// error[syntax]: expected IDENTIFIER, got INTEGER
    ///   --> workflow.syn:2:6
    ///    |
    ///  2 | bind 10 := x
    ///    |      ^
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Span { line, column } = error.span;

        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // `write!` into a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.kind, error.message, self.file_name, line, column
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // Columns are 1-based; tabs are echoed so the caret stays aligned.
        let underline: String = src_line
            .chars()
            .take(column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = writeln!(out, "   | {underline}^");

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {help}");
        }

        out
    }

    /// Renders every error, separated by blank lines.
    pub fn render_all(&self, errors: &[ParseError]) -> String {
        errors
            .iter()
            .map(|e| self.render(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_points_at_column() {
        let printer = DiagnosticPrinter::new("main.syn", "bind x := 1\nbind 10 := x\n");
        let err = ParseError::syntax("expected IDENTIFIER, got INTEGER", Span::new(2, 6));

        let out = printer.render(&err);
        assert!(out.starts_with("error[syntax]: expected IDENTIFIER, got INTEGER\n"));
        assert!(out.contains("--> main.syn:2:6"));
        assert!(out.contains("  2 | bind 10 := x\n"));
        assert!(out.contains("   |      ^\n"));
    }

    #[test]
    fn help_is_appended() {
        let printer = DiagnosticPrinter::new("x.syn", "bind x 10");
        let err = ParseError::syntax("missing ':='", Span::new(1, 8)).with_help("write `bind x := 10`");
        assert!(printer.render(&err).ends_with("help: write `bind x := 10`\n"));
    }

    #[test]
    fn line_past_end_renders_empty_source() {
        let printer = DiagnosticPrinter::new("x.syn", "");
        let out = printer.render(&ParseError::syntax("unexpected end", Span::new(4, 1)));
        assert!(out.contains("  4 | \n"));
        assert!(out.contains("   | ^\n"));
    }
}
