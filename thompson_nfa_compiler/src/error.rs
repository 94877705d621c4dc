use crate::nfa::StateId;

/// Errors that can occur while compiling a pattern.
///
/// Compilation either produces a complete NFA or one of these. There is no
/// partially compiled form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern could not be converted to a well formed postfix sequence.
    Syntax(SyntaxError),
    /// The postfix sequence did not reduce to a single NFA fragment, or the
    /// graph being built was left in an inconsistent state.
    Structural(StructuralError),
    /// The NFA would need more states than the configured size limit.
    TooComplex {
        /// The configured limit, in states.
        limit: usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Syntax(err) => write!(f, "{}", err),
            CompileError::Structural(err) => write!(f, "{}", err),
            CompileError::TooComplex { limit } => {
                write!(f, "compiled NFA exceeds size limit of {} states", limit)
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Syntax(err) => Some(err),
            CompileError::Structural(err) => Some(err),
            CompileError::TooComplex { .. } => None,
        }
    }
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}

impl From<StructuralError> for CompileError {
    fn from(err: StructuralError) -> Self {
        CompileError::Structural(err)
    }
}

/// A pattern that is not a valid expression of the dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    offset: usize,
}

/// The specific kind of syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `(` with no matching `)`.
    UnmatchedOpenParen,
    /// A `)` with no matching `(`.
    UnmatchedCloseParen,
    /// A group with nothing inside it, i.e. `()`.
    EmptyGroup,
    /// An operator that is missing one or both of its operands, e.g. `*a`,
    /// `a|` or `(|a)`.
    MissingOperand(char),
    /// Groups nested deeper than the configured limit.
    NestLimitExceeded(u32),
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, offset: usize) -> SyntaxError {
        SyntaxError { kind, offset }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }

    /// Return where the error was detected.
    ///
    /// For errors raised while reading a pattern this is the character
    /// offset into the pattern. For errors raised while building an NFA
    /// directly from tokens, it is the index into the postfix sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnmatchedOpenParen => {
                write!(f, "unclosed group opened at offset {}", self.offset)
            }
            SyntaxErrorKind::UnmatchedCloseParen => {
                write!(f, "unopened group closed at offset {}", self.offset)
            }
            SyntaxErrorKind::EmptyGroup => {
                write!(f, "empty group at offset {}", self.offset)
            }
            SyntaxErrorKind::MissingOperand(op) => write!(
                f,
                "operator '{}' at offset {} is missing an operand",
                op, self.offset
            ),
            SyntaxErrorKind::NestLimitExceeded(limit) => write!(
                f,
                "group at offset {} exceeds nest limit of {}",
                self.offset, limit
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A postfix sequence or graph that could not be turned into an NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The postfix sequence reduced to this many fragments instead of one.
    FragmentCount(usize),
    /// An output of this state was connected twice.
    SlotFilled(StateId),
    /// This state still had an unconnected output when the graph was frozen.
    Dangling(StateId),
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuralError::FragmentCount(n) => write!(
                f,
                "postfix sequence reduced to {} fragments, expected 1",
                n
            ),
            StructuralError::SlotFilled(id) => {
                write!(f, "state {} has no free output to connect", id)
            }
            StructuralError::Dangling(id) => {
                write!(f, "state {} has an unconnected output", id)
            }
        }
    }
}

impl std::error::Error for StructuralError {}
