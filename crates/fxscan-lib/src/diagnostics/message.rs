use rowan::TextRange;

use fxscan_core::Position;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum DiagnosticKind {
    // Lexical problems
    UnterminatedString,
    UnterminatedComment,

    // Missing delimiters
    UnclosedBlock,
    UnclosedParameterList,

    // User omitted something required
    ExpectedDeclaration,
    ExpectedTypeName,
    ExpectedName,
    ExpectedMapping,
    ExpectedStateValue,
    ExpectedBody,
    ExpectedToken,

    // User wrote something that doesn't belong
    InvalidArraySize,
    InvalidQualifier,
    UnexpectedToken,

    // Recoverable oddities
    InvalidLiteral,
    UnsupportedDefaultValue,
    DefaultValueArity,
    DuplicateDeclaration,

    /// Added through [`Diagnostics::add`](super::Diagnostics::add) by callers.
    Custom,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::InvalidLiteral
            | Self::UnsupportedDefaultValue
            | Self::DefaultValueArity
            | Self::DuplicateDeclaration => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedComment => "unterminated block comment",

            Self::UnclosedBlock => "missing closing `}`",
            Self::UnclosedParameterList => "missing closing `)`",

            Self::ExpectedDeclaration => "expected a declaration",
            Self::ExpectedTypeName => "expected type name",
            Self::ExpectedName => "expected name",
            Self::ExpectedMapping => "expected semantic mapping after `:`",
            Self::ExpectedStateValue => "expected sampler state value",
            Self::ExpectedBody => "expected `{` to start function body",
            Self::ExpectedToken => "expected token",

            Self::InvalidArraySize => "array size must be a positive integer",
            Self::InvalidQualifier => "qualifier is not allowed here",
            Self::UnexpectedToken => "unexpected token",

            Self::InvalidLiteral => "malformed numeric literal",
            Self::UnsupportedDefaultValue => "default value is not supported",
            Self::DefaultValueArity => "default value has the wrong number of components",
            Self::DuplicateDeclaration => "duplicate declaration",

            Self::Custom => "diagnostic",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedToken => "expected {}".to_string(),
            Self::InvalidLiteral => "malformed numeric literal `{}`".to_string(),
            Self::DuplicateDeclaration => "`{}` is already declared".to_string(),
            Self::InvalidQualifier => "`{}` is not allowed here".to_string(),
            Self::Custom => "{}".to_string(),

            // Standard pattern: fallback + context
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported item: what happened, where, and how bad it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    /// File name used to tag the report; no I/O happens with it.
    pub(crate) file: String,
    pub(crate) position: Position,
    /// Byte range shown to the user (underlined in rich output). `None` for
    /// items added by row and column only.
    pub(crate) range: Option<TextRange>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            file: String::new(),
            position: Position::START,
            range: Some(range),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// `file(row,column): severity: message`
impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{}): {}: {}",
            self.file, self.position.row, self.position.column, self.severity, self.message
        )
    }
}
