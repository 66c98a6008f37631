//! Error types for tagged values, algorithms, and containers.
//!
//! `TofuErrorKind` is the matchable category; `TofuError` pairs it with the
//! rendered message. Factory functions (e.g. `immutable_value()`) are the
//! public way to build errors and keep `kind` and `message` in step.
//!
//! Failures are always returned, never raised: every fallible operation in
//! the workspace returns `TofuResult`.

use std::fmt;

use tofu_types::{TypeTag, UnrecognizedType};

/// Result of a fallible tofu operation.
pub type TofuResult<T> = Result<T, TofuError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TofuErrorKind {
    // Types
    /// Strict resolution rejected an identifier.
    UnrecognizedType {
        identifier: String,
    },
    /// A value-taking container operation got the wrong element tag.
    TypeMismatch {
        expected: TypeTag,
        got: TypeTag,
    },
    /// The payload does not parse as its tag's typed form.
    ParseError {
        type_id: &'static str,
        payload: String,
    },

    // Values
    /// Mutation attempted while the mutable flag is false.
    ImmutableValue,
    /// An absent reference was passed where a present one is required.
    NullValue {
        operation: &'static str,
    },

    // Memory
    /// The allocator could not satisfy a growth request.
    AllocationFailure {
        requested: usize,
    },

    // Containers
    /// The named element is not present.
    NotFound,
    /// An equal element (or key) already exists.
    Duplicate,
    /// Index past the end of a sequence.
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// Operation needs at least one element.
    EmptyContainer {
        container: &'static str,
    },

    // Algorithms
    /// A user callback reported failure part way through a pass.
    CallbackFailed {
        index: usize,
        reason: String,
    },
}

impl fmt::Display for TofuErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedType { identifier } => {
                write!(f, "unrecognized type identifier: {identifier:?}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::ParseError { type_id, payload } => {
                write!(f, "cannot parse {payload:?} as {type_id}")
            }
            Self::ImmutableValue => write!(f, "value is immutable"),
            Self::NullValue { operation } => write!(f, "{operation}: absent value"),
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed for {requested} elements")
            }
            Self::NotFound => write!(f, "element not found"),
            Self::Duplicate => write!(f, "element already present"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len {len})")
            }
            Self::EmptyContainer { container } => write!(f, "{container} is empty"),
            Self::CallbackFailed { index, reason } => {
                write!(f, "callback failed at index {index}: {reason}")
            }
        }
    }
}

/// Error returned by tofu operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TofuError {
    /// Structured category for matching.
    pub kind: TofuErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl TofuError {
    fn from_kind(kind: TofuErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Check the error category without destructuring.
    pub fn is(&self, kind: &TofuErrorKind) -> bool {
        &self.kind == kind
    }
}

impl From<TofuErrorKind> for TofuError {
    fn from(kind: TofuErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<UnrecognizedType> for TofuError {
    fn from(err: UnrecognizedType) -> Self {
        unrecognized_type(&err.identifier)
    }
}

// Factory functions

#[cold]
pub fn unrecognized_type(identifier: &str) -> TofuError {
    TofuError::from_kind(TofuErrorKind::UnrecognizedType {
        identifier: identifier.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: TypeTag, got: TypeTag) -> TofuError {
    TofuError::from_kind(TofuErrorKind::TypeMismatch { expected, got })
}

#[cold]
pub fn parse_error(tag: TypeTag, payload: &str) -> TofuError {
    TofuError::from_kind(TofuErrorKind::ParseError {
        type_id: tag.id(),
        payload: payload.to_string(),
    })
}

#[cold]
pub fn immutable_value() -> TofuError {
    TofuError::from_kind(TofuErrorKind::ImmutableValue)
}

#[cold]
pub fn null_value(operation: &'static str) -> TofuError {
    TofuError::from_kind(TofuErrorKind::NullValue { operation })
}

#[cold]
pub fn allocation_failure(requested: usize) -> TofuError {
    TofuError::from_kind(TofuErrorKind::AllocationFailure { requested })
}

/// Convert a failed `try_reserve` (std or `SmallVec`) into `AllocationFailure`.
#[cold]
pub fn allocation_failure_from(requested: usize, err: &impl fmt::Display) -> TofuError {
    tracing::debug!(requested, error = %err, "allocation failed");
    allocation_failure(requested)
}

#[cold]
pub fn not_found() -> TofuError {
    TofuError::from_kind(TofuErrorKind::NotFound)
}

#[cold]
pub fn duplicate() -> TofuError {
    TofuError::from_kind(TofuErrorKind::Duplicate)
}

#[cold]
pub fn index_out_of_bounds(index: usize, len: usize) -> TofuError {
    TofuError::from_kind(TofuErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn empty_container(container: &'static str) -> TofuError {
    TofuError::from_kind(TofuErrorKind::EmptyContainer { container })
}

#[cold]
pub fn callback_failed(index: usize, reason: impl Into<String>) -> TofuError {
    TofuError::from_kind(TofuErrorKind::CallbackFailed {
        index,
        reason: reason.into(),
    })
}
