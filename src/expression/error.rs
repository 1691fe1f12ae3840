use thiserror::Error;

/// Every way turning text into a [`Function`](crate::expression::Function) can fail.
///
/// The public facade folds all of these into "no function"; the variants exist
/// so the reason can be logged or shown in a diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unrecognized symbol '{0}'")]
    Lexical(String),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("'(' is never closed")]
    UnmatchedOpen,

    #[error("')' has no matching '('")]
    UnmatchedClose,

    #[error("',' appears outside of a parenthesized argument list")]
    MisplacedComma,

    #[error("expected a single value after reduction, found {0}")]
    FinalStackSize(usize),

    #[error("expression reduced to a bare variable without applying its operators")]
    DanglingVariable,
}

/// Failures while reducing postfix. Upstream stages should make these
/// unreachable for well-formed input, but malformed operator sequences such as
/// `* x` still land here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("'{symbol}' needs {needed} operand(s), found {found}")]
    MissingOperands {
        symbol: String,
        needed: usize,
        found: usize,
    },

    #[error("'{0}' cannot appear in postfix output")]
    UnexpectedToken(String),
}
