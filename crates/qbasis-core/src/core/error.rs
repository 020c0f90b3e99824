use std::io;
use thiserror::Error;

/// Represents every failure the basis-set model and its codecs can report.
///
/// Validation runs at the point of construction or mutation, so an error of
/// this type always means the offending value was rejected before it became
/// observable through a [`Contraction`](crate::core::models::contraction::Contraction),
/// [`Basis`](crate::core::models::basis::Basis) or
/// [`BasisSet`](crate::core::models::basis_set::BasisSet).
#[derive(Debug, Error)]
pub enum BasisError {
    /// The angular-momentum label is outside `S,P,D,F,G,H,I,K,L,M,N` or is not
    /// a valid shared-exponent pair.
    #[error("Invalid angular momentum label '{0}'")]
    InvalidLabel(String),

    /// Exponent and coefficient columns disagree in length, or a row
    /// replacement has the wrong arity.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// An exponent is zero, negative, infinite or NaN.
    #[error("Exponents must be greater than 0, got {0}")]
    InvalidExponent(f64),

    /// The dialect name is not one of the supported text layouts.
    #[error("Unsupported basis set dialect '{0}'. Only 'gaussian94' and 'gamess' are supported.")]
    UnsupportedDialect(String),

    /// The document could not be decoded.
    #[error("Malformed basis set document on line {line}: {kind}")]
    MalformedDocument { line: usize, kind: ParseErrorKind },

    /// No basis is stored under the requested atom label.
    #[error("Atom '{0}' not found in basis set")]
    KeyNotFound(String),

    /// A value is structurally valid on its own but not where it was supplied,
    /// or a coefficient is not a finite number.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A shell or row position is past the end of its container.
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The specific reason a line of a basis set document was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("Expected a shell header '<label> <count>', found '{0}'")]
    InvalidShellHeader(String),
    #[error("Invalid primitive count '{0}'")]
    InvalidRowCount(String),
    #[error("Invalid floating point value '{0}'")]
    InvalidFloat(String),
    #[error("Expected row index {expected}, found '{found}'")]
    InvalidRowIndex { expected: usize, found: String },
    #[error("Expected 2 or 3 numeric columns, found {0}")]
    WrongColumnCount(usize),
    #[error("Shell declares {expected} primitives but only {found} rows follow")]
    TruncatedShell { expected: usize, found: usize },
    #[error("Atom block has no atom label")]
    MissingAtomLabel,
    #[error("Row has {found} columns but earlier rows of this shell have {expected}")]
    InconsistentRows { expected: usize, found: usize },
}

impl BasisError {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        BasisError::MalformedDocument { line, kind }
    }
}
