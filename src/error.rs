use std::time::SystemTime;
use thiserror::Error;

// Unified error type for matlite

/// Why a matrix failed construction-time validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixStatus {
    /// No rows, or rows with no entries.
    Empty,
    /// Rows of differing length.
    Ragged,
    /// A NaN or infinite entry.
    NonNumeric,
}

impl std::fmt::Display for MatrixStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixStatus::Empty => f.write_str("empty"),
            MatrixStatus::Ragged => f.write_str("ragged"),
            MatrixStatus::NonNumeric => f.write_str("non-numeric"),
        }
    }
}

/// Failure kinds, one variant per violation, carrying the offending context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("vector validation error: {0}")]
    VectorValidation(String),
    #[error("invalid element for {orientation} vector: {reason}")]
    InvalidElement { orientation: &'static str, reason: String },
    #[error("matrix validation error ({status}): {reason}")]
    MatrixValidation { status: MatrixStatus, reason: String },
    #[error("dimension mismatch in {op}: left {left}, right {right}")]
    DimensionMismatch { op: &'static str, left: String, right: String },
    #[error("singular system: pivot {pivot} is numerically zero")]
    SingularSystem { pivot: usize },
    #[error("matrix is not {expected} triangular")]
    NotTriangular { expected: &'static str },
    #[error("column {column} is linearly dependent on the previous columns")]
    LinearDependence { column: usize },
    #[error("inconsistent system: row {row} reduces to 0 = c with c != 0")]
    InconsistentSystem { row: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index ({row}, {col}) out of bounds for shape {shape}")]
    IndexOutOfBounds { row: usize, col: usize, shape: String },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },
}

impl ErrorKind {
    /// Stable status code. The hundreds digit is the category:
    /// 1 validation, 2 dimension, 3 singular/unsolvable, 4 argument, 5 type.
    pub fn code(&self) -> u16 {
        match self {
            ErrorKind::VectorValidation(_) => 100,
            ErrorKind::InvalidElement { .. } => 101,
            ErrorKind::MatrixValidation { status, .. } => match status {
                MatrixStatus::Empty => 110,
                MatrixStatus::Ragged => 111,
                MatrixStatus::NonNumeric => 112,
            },
            ErrorKind::DimensionMismatch { .. } => 200,
            ErrorKind::SingularSystem { .. } => 300,
            ErrorKind::NotTriangular { .. } => 301,
            ErrorKind::LinearDependence { .. } => 302,
            ErrorKind::InconsistentSystem { .. } => 303,
            ErrorKind::InvalidArgument(_) => 400,
            ErrorKind::IndexOutOfBounds { .. } => 401,
            ErrorKind::TypeMismatch { .. } => 500,
        }
    }
}

/// Error returned by every fallible operation in the crate.
#[derive(Error, Debug, Clone)]
#[error("[{code}] {kind}", code = .kind.code())]
pub struct LinalgError {
    pub kind: ErrorKind,
    /// When the violation was detected.
    pub timestamp: SystemTime,
}

impl LinalgError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            timestamp: SystemTime::now(),
        }
    }

    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for LinalgError {
    fn from(kind: ErrorKind) -> Self {
        LinalgError::new(kind)
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
