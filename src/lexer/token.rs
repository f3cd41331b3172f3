/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the SYNTA
 *            front end during the lexing and parsing stages.
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

use crate::span::Span;
use std::fmt;

/// Declares [`TokenKind`] together with its stable external name and the
/// [`TokenKind::ALL`] table, so the three can never drift apart.
macro_rules! token_kinds {
    ( $( $(#[$meta:meta])* $variant:ident => $name:literal, )* ) => {
        /// Represents the **category of a lexical token** in the SYNTA language.
        ///
        /// `TokenKind` identifies how a sequence of characters from the source
        /// should be interpreted by the parser.
        ///
        /// # Compiler Pipeline Role
        /// ```text
        /// Source Code → Lexer → TokenKind → Parser → AST
        /// ```
        ///
        /// The enumeration is closed: every token the lexer can produce, and
        /// every kind a reloaded token stream may carry, is listed here.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )*
        }

        impl TokenKind {
            /// Every token kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// The stable upper-case name of this kind (e.g. `"BIND_ASSIGN"`).
            ///
            /// These names cross the tool boundary (JSON token tables, the
            /// parse tree, error messages) and must not change.
            pub fn name(&self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }
        }
    };
}

token_kinds! {
    // Literals
    Identifier => "IDENTIFIER",
    Integer => "INTEGER",
    Float => "FLOAT",
    String => "STRING",

    // Control flow
    If => "IF",
    Elif => "ELIF",
    Else => "ELSE",
    While => "WHILE",
    For => "FOR",
    Switch => "SWITCH",
    Match => "MATCH",
    Case => "CASE",
    Default => "DEFAULT",
    Return => "RETURN",
    Await => "AWAIT",
    Break => "BREAK",
    Continue => "CONTINUE",
    Loop => "LOOP",
    Guard => "GUARD",

    // Declarations
    Bind => "BIND",
    Const => "CONST",
    Craft => "CRAFT",
    Use => "USE",
    As => "AS",
    From => "FROM",
    Fn => "FN",
    Struct => "STRUCT",

    // Error handling
    Try => "TRY",
    Catch => "CATCH",
    Raise => "RAISE",

    // Type system
    Type => "TYPE",
    Cast => "CAST",
    Any => "ANY",
    /// The `none` keyword.
    NoneKw => "NONE",
    Trait => "TRAIT",
    IntType => "INT_TYPE",
    FloatType => "FLOAT_TYPE",
    CharType => "CHAR_TYPE",
    BoolType => "BOOL_TYPE",
    StrType => "STR_TYPE",
    MapType => "MAP_TYPE",
    ArrayType => "ARRAY_TYPE",
    True => "TRUE",
    False => "FALSE",
    Null => "NULL",

    // Concurrency
    Async => "ASYNC",
    Emit => "EMIT",
    Listen => "LISTEN",
    Dispatch => "DISPATCH",
    Merge => "MERGE",
    Task => "TASK",
    Concurrent => "CONCURRENT",
    Stage => "STAGE",
    Gather => "GATHER",

    // Special constructs
    With => "WITH",
    Then => "THEN",
    Defer => "DEFER",
    Pipe => "PIPE",
    Pass => "PASS",
    Through => "THROUGH",
    Range => "RANGE",
    Allow => "ALLOW",
    Pseudo => "PSEUDO",
    Strategy => "STRATEGY",
    Timeout => "TIMEOUT",
    Window => "WINDOW",
    AlertThreshold => "ALERT_THRESHOLD",
    Watch => "WATCH",
    On => "ON",
    Snapshot => "SNAPSHOT",
    Restore => "RESTORE",

    // AI integration
    Think => "THINK",
    Ask => "ASK",
    Prompt => "PROMPT",
    Adapt => "ADAPT",
    CallApi => "CALL_API",
    Train => "TRAIN",
    Evaluate => "EVALUATE",
    Reason => "REASON",
    Observe => "OBSERVE",

    // Decorators
    /// `@agent`
    AtAgent => "AT_AGENT",
    /// `@task`
    AtTask => "AT_TASK",
    /// `@step`
    AtStep => "AT_STEP",
    /// `@intent`
    AtIntent => "AT_INTENT",
    /// `@explain`
    AtExplain => "AT_EXPLAIN",
    /// Any other `@name`; the lexeme carries the sigil and the name.
    Decorator => "DECORATOR",

    // I/O
    Read => "READ",
    Write => "WRITE",
    Print => "PRINT",
    Log => "LOG",
    Save => "SAVE",
    Flow => "FLOW",
    Context => "CONTEXT",
    Memory => "MEMORY",

    // Debug
    Debug => "DEBUG",
    Checkpoint => "CHECKPOINT",
    Trace => "TRACE",
    Breakpoint => "BREAKPOINT",
    Assert => "ASSERT",
    Configure => "CONFIGURE",
    GenerateReport => "GENERATE_REPORT",

    // Execution / configuration field words
    Input => "INPUT",
    Action => "ACTION",
    Execution => "EXECUTION",
    Retry => "RETRY",
    Enabled => "ENABLED",
    Max => "MAX",
    DependsOn => "DEPENDS_ON",
    Config => "CONFIG",
    Outputs => "OUTPUTS",
    Breakpoints => "BREAKPOINTS",
    OnConcurDeadlock => "ON_CONCUR_DEADLOCK",
    OnLoop => "ON_LOOP",
    OnTimeout => "ON_TIMEOUT",

    // Agent / system words
    Agent => "AGENT",
    Core => "CORE",
    Model => "MODEL",
    Tools => "TOOLS",
    Role => "ROLE",
    Mode => "MODE",
    SysPrompt => "SYS_PROMPT",
    MaxConcurrentRequests => "MAX_CONCURRENT_REQUESTS",
    RetryPolicy => "RETRY_POLICY",

    // Reserved words
    Own => "OWN",
    Move => "MOVE",
    Drop => "DROP",
    Let => "LET",
    Pub => "PUB",
    Priv => "PRIV",
    Global => "GLOBAL",
    Unsafe => "UNSAFE",
    Raw => "RAW",
    Future => "FUTURE",
    Macro => "MACRO",

    // Agent operations
    Delegate => "DELEGATE",
    Route => "ROUTE",
    Compose => "COMPOSE",
    Inspect => "INSPECT",
    CreatePool => "CREATE_POOL",
    MaxWorkers => "MAX_WORKERS",
    Submit => "SUBMIT",
    SubmitDelayed => "SUBMIT_DELAYED",
    Join => "JOIN",
    Now => "NOW",
    ExecutionTime => "EXECUTION_TIME",
    Report => "REPORT",

    // Noise words
    Please => "PLEASE",
    Maybe => "MAYBE",
    Do => "DO",

    // Operators
    Plus => "PLUS",
    Minus => "MINUS",
    Multiply => "MULTIPLY",
    Divide => "DIVIDE",
    Modulo => "MODULO",
    /// `=:`
    Assign => "ASSIGN",
    /// `:=`
    BindAssign => "BIND_ASSIGN",
    PlusAssign => "PLUS_ASSIGN",
    MinusAssign => "MINUS_ASSIGN",
    MultAssign => "MULT_ASSIGN",
    DivAssign => "DIV_ASSIGN",
    ModAssign => "MOD_ASSIGN",
    Eq => "EQ",
    Neq => "NEQ",
    Lt => "LT",
    Gt => "GT",
    Lte => "LTE",
    Gte => "GTE",
    And => "AND",
    Or => "OR",
    Not => "NOT",
    BitwiseXor => "BITWISE_XOR",
    Ampersand => "AMPERSAND",
    Increment => "INCREMENT",
    Decrement => "DECREMENT",
    /// `->`
    Arrow => "ARROW",
    /// `=>`
    FatArrow => "FAT_ARROW",
    Dollar => "DOLLAR",
    /// A single `|`.
    PipeOp => "PIPE_OP",
    /// `|>` sequential pipeline.
    PipeRight => "PIPE_RIGHT",
    /// `|>>` parallel pipeline.
    PipeParallel => "PIPE_PARALLEL",
    /// `::` inline block delimiter.
    DoubleColon => "DOUBLE_COLON",

    // Delimiters
    LParen => "LPAREN",
    RParen => "RPAREN",
    LBracket => "LBRACKET",
    RBracket => "RBRACKET",
    LBrace => "LBRACE",
    RBrace => "RBRACE",
    Comma => "COMMA",
    Colon => "COLON",
    Dot => "DOT",
    /// `;` or `~`
    StatementEnd => "STMT_END",

    // Structure
    CommentLine => "COMMENT_LINE",
    CommentMulti => "COMMENT_MULTI",
    Newline => "NEWLINE",
    Eof => "EOF",
    Illegal => "ILLEGAL",
}

impl TokenKind {
    /// Looks a kind up by its stable name.
    ///
    /// This is the inverse of [`TokenKind::name`] and is used when a token
    /// stream is reloaded from a JSON token table.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Returns `true` for reserved words (including the context-sensitive
    /// agent/system words and decorators are excluded).
    ///
    /// Used by the parser where any keyword spelling is an acceptable name,
    /// e.g. after a member-access `.`.
    pub fn is_keyword(&self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::AtAgent
                | TokenKind::AtTask
                | TokenKind::AtStep
                | TokenKind::AtIntent
                | TokenKind::AtExplain
                | TokenKind::Decorator
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::Assign
                | TokenKind::BindAssign
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::MultAssign
                | TokenKind::DivAssign
                | TokenKind::ModAssign
                | TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Lte
                | TokenKind::Gte
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::BitwiseXor
                | TokenKind::Ampersand
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::Arrow
                | TokenKind::FatArrow
                | TokenKind::Dollar
                | TokenKind::PipeOp
                | TokenKind::PipeRight
                | TokenKind::PipeParallel
                | TokenKind::DoubleColon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::Dot
                | TokenKind::StatementEnd
                | TokenKind::CommentLine
                | TokenKind::CommentMulti
                | TokenKind::Newline
                | TokenKind::Eof
                | TokenKind::Illegal
        )
    }

    /// Newlines and comments: tokens the parser skips between statements.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::CommentLine | TokenKind::CommentMulti
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the SYNTA lexer.
///
/// # Example Tokens
/// ```text
/// bind  →  { kind: Bind,       lexeme: "bind", line: 1, column: 1 }
/// x     →  { kind: Identifier, lexeme: "x",    line: 1, column: 6 }
/// :=    →  { kind: BindAssign, lexeme: ":=",   line: 1, column: 8 }
/// ```
///
/// Tokens are immutable once produced and are owned by the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The source text that produced this token.
    ///
    /// Verbatim for everything except strings (quotes stripped, escapes
    /// left undecoded) and line comments (marker stripped).
    pub lexeme: String,

    /// Where the token starts.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// A synthetic end-of-input token, returned by bounds-checked
    /// accessors that look past the end of a stream.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only the lexeme.
    ///
    /// `Debug` is reserved for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
