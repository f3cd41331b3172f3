/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      groups.rs
 * Purpose:   Presentation-level grouping of token kinds.
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
use std::fmt;

/// A coarse, presentation-oriented category for a [`TokenKind`].
///
/// Groups are used by token tables and the parse-tree renderer. The parser
/// never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticGroup {
    Identifier,
    Number,
    String,
    Boolean,
    Null,
    If,
    Loop,
    Branch,
    Jump,
    Declaration,
    ErrorHandling,
    Type,
    Concurrency,
    Special,
    Ai,
    Decorator,
    Io,
    Debug,
    Config,
    AgentSystem,
    AgentOp,
    Reserved,
    Noise,
    Operator,
    Assignment,
    Comparison,
    Logical,
    Flow,
    Delimiter,
    Comment,
    Whitespace,
    Eof,
    Illegal,
}

impl SemanticGroup {
    /// The stable external name of the group.
    pub fn name(&self) -> &'static str {
        match self {
            SemanticGroup::Identifier => "IDENTIFIER",
            SemanticGroup::Number => "NUMBER",
            SemanticGroup::String => "STRING",
            SemanticGroup::Boolean => "BOOLEAN",
            SemanticGroup::Null => "NULL",
            SemanticGroup::If => "IF",
            SemanticGroup::Loop => "LOOP",
            SemanticGroup::Branch => "BRANCH",
            SemanticGroup::Jump => "JUMP",
            SemanticGroup::Declaration => "DECLARATION",
            SemanticGroup::ErrorHandling => "ERROR_HANDLING",
            SemanticGroup::Type => "TYPE",
            SemanticGroup::Concurrency => "CONCURRENCY",
            SemanticGroup::Special => "SPECIAL",
            SemanticGroup::Ai => "AI",
            SemanticGroup::Decorator => "DECORATOR",
            SemanticGroup::Io => "IO",
            SemanticGroup::Debug => "DEBUG",
            SemanticGroup::Config => "CONFIG",
            SemanticGroup::AgentSystem => "AGENT_SYSTEM",
            SemanticGroup::AgentOp => "AGENT_OP",
            SemanticGroup::Reserved => "RESERVED",
            SemanticGroup::Noise => "NOISE",
            SemanticGroup::Operator => "OPERATOR",
            SemanticGroup::Assignment => "ASSIGNMENT",
            SemanticGroup::Comparison => "COMPARISON",
            SemanticGroup::Logical => "LOGICAL",
            SemanticGroup::Flow => "FLOW",
            SemanticGroup::Delimiter => "DELIMITER",
            SemanticGroup::Comment => "COMMENT",
            SemanticGroup::Whitespace => "WHITESPACE",
            SemanticGroup::Eof => "EOF",
            SemanticGroup::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for SemanticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenKind {
    /// Maps every token kind to its presentation group.
    ///
    /// The match is exhaustive, so adding a kind without deciding its group
    /// is a compile error.
    pub fn semantic_group(&self) -> SemanticGroup {
        match self {
            TokenKind::Identifier => SemanticGroup::Identifier,
            TokenKind::Integer | TokenKind::Float => SemanticGroup::Number,
            TokenKind::String => SemanticGroup::String,
            TokenKind::True | TokenKind::False => SemanticGroup::Boolean,
            TokenKind::Null => SemanticGroup::Null,

            TokenKind::If | TokenKind::Elif | TokenKind::Else | TokenKind::Guard => {
                SemanticGroup::If
            }
            TokenKind::While | TokenKind::For | TokenKind::Loop => SemanticGroup::Loop,
            TokenKind::Switch | TokenKind::Match | TokenKind::Case | TokenKind::Default => {
                SemanticGroup::Branch
            }
            TokenKind::Return | TokenKind::Break | TokenKind::Continue => SemanticGroup::Jump,

            TokenKind::Bind
            | TokenKind::Const
            | TokenKind::Craft
            | TokenKind::Use
            | TokenKind::As
            | TokenKind::From
            | TokenKind::Fn
            | TokenKind::Struct => SemanticGroup::Declaration,

            TokenKind::Try | TokenKind::Catch | TokenKind::Raise => SemanticGroup::ErrorHandling,

            TokenKind::Type
            | TokenKind::Cast
            | TokenKind::Any
            | TokenKind::NoneKw
            | TokenKind::Trait
            | TokenKind::IntType
            | TokenKind::FloatType
            | TokenKind::CharType
            | TokenKind::BoolType
            | TokenKind::StrType
            | TokenKind::MapType
            | TokenKind::ArrayType => SemanticGroup::Type,

            TokenKind::Async
            | TokenKind::Await
            | TokenKind::Emit
            | TokenKind::Listen
            | TokenKind::Dispatch
            | TokenKind::Merge
            | TokenKind::Task
            | TokenKind::Concurrent
            | TokenKind::Stage
            | TokenKind::Gather => SemanticGroup::Concurrency,

            TokenKind::With
            | TokenKind::Then
            | TokenKind::Defer
            | TokenKind::Pipe
            | TokenKind::Pass
            | TokenKind::Through
            | TokenKind::Range
            | TokenKind::Allow
            | TokenKind::Pseudo
            | TokenKind::Strategy
            | TokenKind::Timeout
            | TokenKind::Window
            | TokenKind::AlertThreshold
            | TokenKind::Watch
            | TokenKind::On
            | TokenKind::Snapshot
            | TokenKind::Restore => SemanticGroup::Special,

            TokenKind::Think
            | TokenKind::Ask
            | TokenKind::Prompt
            | TokenKind::Adapt
            | TokenKind::CallApi
            | TokenKind::Train
            | TokenKind::Evaluate
            | TokenKind::Reason
            | TokenKind::Observe => SemanticGroup::Ai,

            TokenKind::AtAgent
            | TokenKind::AtTask
            | TokenKind::AtStep
            | TokenKind::AtIntent
            | TokenKind::AtExplain
            | TokenKind::Decorator => SemanticGroup::Decorator,

            TokenKind::Read
            | TokenKind::Write
            | TokenKind::Print
            | TokenKind::Log
            | TokenKind::Save
            | TokenKind::Flow
            | TokenKind::Context
            | TokenKind::Memory => SemanticGroup::Io,

            TokenKind::Debug
            | TokenKind::Checkpoint
            | TokenKind::Trace
            | TokenKind::Breakpoint
            | TokenKind::Assert
            | TokenKind::Configure
            | TokenKind::GenerateReport => SemanticGroup::Debug,

            TokenKind::Input
            | TokenKind::Action
            | TokenKind::Execution
            | TokenKind::Retry
            | TokenKind::Enabled
            | TokenKind::Max
            | TokenKind::DependsOn
            | TokenKind::Config
            | TokenKind::Outputs
            | TokenKind::Breakpoints
            | TokenKind::OnConcurDeadlock
            | TokenKind::OnLoop
            | TokenKind::OnTimeout => SemanticGroup::Config,

            TokenKind::Agent
            | TokenKind::Core
            | TokenKind::Model
            | TokenKind::Tools
            | TokenKind::Role
            | TokenKind::Mode
            | TokenKind::SysPrompt
            | TokenKind::MaxConcurrentRequests
            | TokenKind::RetryPolicy => SemanticGroup::AgentSystem,

            TokenKind::Own
            | TokenKind::Move
            | TokenKind::Drop
            | TokenKind::Let
            | TokenKind::Pub
            | TokenKind::Priv
            | TokenKind::Global
            | TokenKind::Unsafe
            | TokenKind::Raw
            | TokenKind::Future
            | TokenKind::Macro => SemanticGroup::Reserved,

            TokenKind::Delegate
            | TokenKind::Route
            | TokenKind::Compose
            | TokenKind::Inspect
            | TokenKind::CreatePool
            | TokenKind::MaxWorkers
            | TokenKind::Submit
            | TokenKind::SubmitDelayed
            | TokenKind::Join
            | TokenKind::Now
            | TokenKind::ExecutionTime
            | TokenKind::Report => SemanticGroup::AgentOp,

            TokenKind::Please | TokenKind::Maybe | TokenKind::Do => SemanticGroup::Noise,

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Modulo
            | TokenKind::BitwiseXor
            | TokenKind::Ampersand
            | TokenKind::Increment
            | TokenKind::Decrement
            | TokenKind::Dollar
            | TokenKind::PipeOp => SemanticGroup::Operator,

            TokenKind::Assign
            | TokenKind::BindAssign
            | TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::MultAssign
            | TokenKind::DivAssign
            | TokenKind::ModAssign => SemanticGroup::Assignment,

            TokenKind::Eq
            | TokenKind::Neq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Lte
            | TokenKind::Gte => SemanticGroup::Comparison,

            TokenKind::And | TokenKind::Or | TokenKind::Not => SemanticGroup::Logical,

            TokenKind::Arrow
            | TokenKind::FatArrow
            | TokenKind::PipeRight
            | TokenKind::PipeParallel
            | TokenKind::DoubleColon => SemanticGroup::Flow,

            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Dot
            | TokenKind::StatementEnd => SemanticGroup::Delimiter,

            TokenKind::CommentLine | TokenKind::CommentMulti => SemanticGroup::Comment,
            TokenKind::Newline => SemanticGroup::Whitespace,
            TokenKind::Eof => SemanticGroup::Eof,
            TokenKind::Illegal => SemanticGroup::Illegal,
        }
    }
}
