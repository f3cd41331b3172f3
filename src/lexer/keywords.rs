/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Reserved-word tables for the SYNTA lexer and parser.
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

use crate::lexer::token::TokenKind;

/// Resolves a word to its **reserved keyword kind**, if it is one.
///
/// This is the primary keyword table. It is consulted by the lexer for every
/// identifier-shaped run of characters; words not listed here lex as
/// [`TokenKind::Identifier`].
///
/// Keywords are case-sensitive: `Agent` and `Map` are reserved, `agent` and
/// `map` are not.
///
/// # Examples
/// ```text
/// bind      -> Some(Bind)
/// Map       -> Some(MapType)
/// model     -> None   (context keyword, see lookup_context_keyword)
/// myVar     -> None
/// ```
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        // Control flow
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "switch" => TokenKind::Switch,
        "match" => TokenKind::Match,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "return" => TokenKind::Return,
        "await" => TokenKind::Await,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "loop" => TokenKind::Loop,
        "guard" => TokenKind::Guard,

        // Declarations
        "bind" => TokenKind::Bind,
        "const" => TokenKind::Const,
        "craft" => TokenKind::Craft,
        "use" => TokenKind::Use,
        "as" => TokenKind::As,
        "from" => TokenKind::From,
        "fn" => TokenKind::Fn,
        "struct" => TokenKind::Struct,

        // Error handling
        "try" => TokenKind::Try,
        "catch" => TokenKind::Catch,
        "raise" => TokenKind::Raise,

        // Type system
        "type" => TokenKind::Type,
        "cast" => TokenKind::Cast,
        "any" => TokenKind::Any,
        "none" => TokenKind::NoneKw,
        "trait" => TokenKind::Trait,
        "int" => TokenKind::IntType,
        "float" => TokenKind::FloatType,
        "char" => TokenKind::CharType,
        "bool" => TokenKind::BoolType,
        "str" => TokenKind::StrType,
        "Map" => TokenKind::MapType,
        "Array" => TokenKind::ArrayType,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,

        // Concurrency
        "async" => TokenKind::Async,
        "emit" => TokenKind::Emit,
        "listen" => TokenKind::Listen,
        "dispatch" => TokenKind::Dispatch,
        "merge" => TokenKind::Merge,
        "task" => TokenKind::Task,
        "concurrent" => TokenKind::Concurrent,
        "stage" => TokenKind::Stage,
        "gather" => TokenKind::Gather,

        // Special constructs
        "with" => TokenKind::With,
        "then" => TokenKind::Then,
        "defer" => TokenKind::Defer,
        "pipe" => TokenKind::Pipe,
        "pass" => TokenKind::Pass,
        "through" => TokenKind::Through,
        "range" => TokenKind::Range,
        "allow" => TokenKind::Allow,
        "strategy" => TokenKind::Strategy,
        "timeout" => TokenKind::Timeout,
        "window" => TokenKind::Window,
        "alert_threshold" => TokenKind::AlertThreshold,
        "watch" => TokenKind::Watch,
        "on" => TokenKind::On,
        "snapshot" => TokenKind::Snapshot,
        "restore" => TokenKind::Restore,

        // AI integration
        "think" => TokenKind::Think,
        "ask" => TokenKind::Ask,
        "prompt" => TokenKind::Prompt,
        "adapt" => TokenKind::Adapt,
        "call_api" => TokenKind::CallApi,
        "train" => TokenKind::Train,
        "evaluate" => TokenKind::Evaluate,
        "reason" => TokenKind::Reason,
        "observe" => TokenKind::Observe,

        // I/O
        "read" => TokenKind::Read,
        "write" => TokenKind::Write,
        "print" => TokenKind::Print,
        "log" => TokenKind::Log,
        "save" => TokenKind::Save,
        "flow" => TokenKind::Flow,
        "context" => TokenKind::Context,
        "memory" => TokenKind::Memory,

        // Debug
        "assert" => TokenKind::Assert,
        "configure" => TokenKind::Configure,
        "generate_report" => TokenKind::GenerateReport,

        // Execution / configuration field words
        "input" => TokenKind::Input,
        "action" => TokenKind::Action,
        "execution" => TokenKind::Execution,
        "retry" => TokenKind::Retry,
        "enabled" => TokenKind::Enabled,
        "max" => TokenKind::Max,
        "depends_on" => TokenKind::DependsOn,
        "config" => TokenKind::Config,
        "outputs" => TokenKind::Outputs,
        "breakpoints" => TokenKind::Breakpoints,
        "on_concur_deadlock" => TokenKind::OnConcurDeadlock,
        "on_loop" => TokenKind::OnLoop,
        "on_timeout" => TokenKind::OnTimeout,

        // Reserved words
        "Agent" => TokenKind::Agent,
        "Core" => TokenKind::Core,
        "max_concurrent_requests" => TokenKind::MaxConcurrentRequests,
        "retry_policy" => TokenKind::RetryPolicy,
        "own" => TokenKind::Own,
        "move" => TokenKind::Move,
        "drop" => TokenKind::Drop,
        "let" => TokenKind::Let,
        "pub" => TokenKind::Pub,
        "priv" => TokenKind::Priv,
        "global" => TokenKind::Global,
        "unsafe" => TokenKind::Unsafe,
        "raw" => TokenKind::Raw,
        "future" => TokenKind::Future,
        "macro" => TokenKind::Macro,
        "delegate" => TokenKind::Delegate,
        "route" => TokenKind::Route,
        "compose" => TokenKind::Compose,
        "inspect" => TokenKind::Inspect,
        "create_pool" => TokenKind::CreatePool,
        "max_workers" => TokenKind::MaxWorkers,
        "submit" => TokenKind::Submit,
        "submit_delayed" => TokenKind::SubmitDelayed,
        "join" => TokenKind::Join,
        "now" => TokenKind::Now,
        "execution_time" => TokenKind::ExecutionTime,
        "Report" => TokenKind::Report,

        // Noise words
        "do" => TokenKind::Do,
        "please" => TokenKind::Please,
        "maybe" => TokenKind::Maybe,

        _ => return None,
    };

    Some(kind)
}

/// Resolves a **context-sensitive keyword**.
///
/// These words are reserved only inside agent/task declaration bodies and
/// debug directives. The lexer never applies this table (they always lex as
/// [`TokenKind::Identifier`] so they stay usable as variable names); the
/// formatter uses it to show such an identifier in its structural role.
pub fn lookup_context_keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "model" => TokenKind::Model,
        "tools" => TokenKind::Tools,
        "role" => TokenKind::Role,
        "mode" => TokenKind::Mode,
        "sys_prompt" => TokenKind::SysPrompt,
        "pseudo" => TokenKind::Pseudo,
        "debug" => TokenKind::Debug,
        "trace" => TokenKind::Trace,
        "checkpoint" => TokenKind::Checkpoint,
        "breakpoint" => TokenKind::Breakpoint,
        _ => return None,
    };

    Some(kind)
}

/// Classifies an identifier-shaped word the way the lexer does.
pub fn lookup_ident(word: &str) -> TokenKind {
    lookup_keyword(word).unwrap_or(TokenKind::Identifier)
}
