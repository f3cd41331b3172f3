/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   The `synta` command-line tool: token tables, parse trees, checks.
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


//! Usage:
//!
//! ```text
//! synta tokens <file> [--json] [--trivia]
//! synta parse  <file> [--style grammar|compact] [--json] [--ast]
//! synta check  <file>
//! ```
//!
//! `-` reads from stdin. Exit status is 0 on success, 1 when the source has
//! parse errors and 2 when the input could not be read or decoded.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use synta::report::tokens_to_json;
use synta::{
    format_with_style, parse, tokenize, AnalysisReport, AnalyzeError, AnalyzerConfig,
    DiagnosticPrinter, TreeStyle,
};

#[derive(Parser, Debug)]
#[command(name = "synta")]
#[command(about = "Tokenize, parse and inspect SYNTA agent workflows")]
struct Cli {
    /// JSON file with analyzer settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject inputs larger than this many bytes
    #[arg(long = "max-bytes", global = true)]
    max_bytes: Option<usize>,

    /// Log parser activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token table
    Tokens {
        /// Source file, or `-` for stdin
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show newline and comment tokens in the table (JSON always has them)
        #[arg(long)]
        trivia: bool,
    },

    /// Print the parse tree
    Parse {
        /// Source file, or `-` for stdin
        file: PathBuf,

        #[arg(long)]
        style: Option<TreeStyle>,

        /// Emit the full analysis report as JSON
        #[arg(long, conflicts_with = "ast")]
        json: bool,

        /// Emit the syntax tree as JSON
        #[arg(long)]
        ast: bool,
    },

    /// Report diagnostics only
    Check {
        /// Source file, or `-` for stdin
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "synta=debug" } else { "warn" }));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Runs one subcommand. `Ok(false)` means the source had parse errors.
fn run(cli: Cli) -> Result<bool, AnalyzeError> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(limit) = cli.max_bytes {
        config.max_input_bytes = limit;
    }

    match cli.command {
        Command::Tokens { file, json, trivia } => {
            config.include_trivia |= trivia;
            let source = read_source(&file, &config)?;
            let tokens = tokenize(&source);

            if json {
                println!("{}", tokens_to_json(&tokens)?);
            } else {
                for token in tokens.iter().filter(|t| config.include_trivia || !t.kind.is_trivia()) {
                    println!(
                        "{:>4}:{:<4} {:<20} {:<16} {}",
                        token.line(),
                        token.column(),
                        token.kind.name(),
                        token.kind.semantic_group().name(),
                        token.lexeme
                    );
                }
            }
            Ok(true)
        }

        Command::Parse { file, style, json, ast } => {
            if let Some(style) = style {
                config.tree_style = style;
            }
            let source = read_source(&file, &config)?;
            let tokens = tokenize(&source);
            let output = parse(tokens.clone());
            print_diagnostics(&file, &source, &output.errors);

            if json {
                let report = AnalysisReport::from_parse(&tokens, &output, &config);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if ast {
                println!("{}", serde_json::to_string_pretty(&output.program)?);
            } else {
                print!("{}", format_with_style(&output.program, config.tree_style));
            }

            debug!(counts = ?output.program.statement_counts(), "parsed");
            Ok(output.is_success())
        }

        Command::Check { file } => {
            let source = read_source(&file, &config)?;
            let output = parse(tokenize(&source));
            print_diagnostics(&file, &source, &output.errors);

            if output.is_success() {
                println!("{}: ok ({} statements)", display_name(&file), output.program.statements.len());
            } else {
                println!("{}: {} error(s)", display_name(&file), output.errors.len());
            }
            Ok(output.is_success())
        }
    }
}

fn read_source(path: &Path, config: &AnalyzerConfig) -> Result<String, AnalyzeError> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AnalyzeError::io("<stdin>", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| AnalyzeError::io(path.display().to_string(), e))?
    };

    if source.len() > config.max_input_bytes {
        return Err(AnalyzeError::InputTooLarge {
            size: source.len(),
            limit: config.max_input_bytes,
        });
    }
    debug!(bytes = source.len(), file = %display_name(path), "read source");
    Ok(source)
}

fn print_diagnostics(path: &Path, source: &str, errors: &[synta::ParseError]) {
    if errors.is_empty() {
        return;
    }
    let printer = DiagnosticPrinter::new(display_name(path), source);
    eprintln!("{}", printer.render_all(errors));
}

fn display_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
