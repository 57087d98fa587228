//! Error taxonomy for the hex engine.
//!
//! Every failure the engine can report is a value: lookups return
//! [`HexError::OutOfBounds`] instead of panicking, selection moves report
//! [`HexError::NoSelection`] or [`HexError::BlockedMove`], and direction tokens
//! coming from outside the crate are rejected with
//! [`HexError::InvalidDirection`]. The engine never prints or logs; callers
//! decide how to surface the message.

use crate::address::{HexDirection, HexIndex};

/// Severity level of an error, used by the frontend to pick a presentation.
///
/// - **Recoverable**: the user tried something the map does not allow
/// - **Validation**: an input referenced something that does not exist
/// - **Internal**: a caller broke the API contract
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The request was valid but could not be carried out right now.
    ///
    /// Examples: no hex selected, selection blocked by the map edge
    Recoverable,

    /// The request referenced an index or position outside the map.
    Validation,

    /// The caller violated a contract (unknown direction token).
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a caller bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common classification interface for engine errors.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors reported by grid lookup, direction parsing and selection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// Index or position lies outside the grid or surface extents.
    #[error("hex ({row}, {column}) is out of bounds")]
    OutOfBounds { row: i64, column: i64 },

    /// Direction token that is not one of the eight known directions.
    #[error("unknown direction '{0}'")]
    InvalidDirection(String),

    /// The operation needs a selected hex but none is selected.
    #[error("no hex selected")]
    NoSelection,

    /// Moving the selection would leave the map.
    #[error("cannot move {direction} from {from}: blocked by map edge")]
    BlockedMove {
        from: HexIndex,
        direction: HexDirection,
    },
}

impl HexError {
    /// Builds an `OutOfBounds` error for an unsigned index.
    pub fn out_of_bounds(index: HexIndex) -> Self {
        Self::OutOfBounds {
            row: i64::from(index.row),
            column: i64::from(index.column),
        }
    }
}

impl CoreError for HexError {
    fn severity(&self) -> ErrorSeverity {
        use HexError::*;
        match self {
            OutOfBounds { .. } => ErrorSeverity::Validation,
            InvalidDirection(_) => ErrorSeverity::Internal,
            NoSelection | BlockedMove { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use HexError::*;
        match self {
            OutOfBounds { .. } => "HEX_OUT_OF_BOUNDS",
            InvalidDirection(_) => "HEX_INVALID_DIRECTION",
            NoSelection => "HEX_NO_SELECTION",
            BlockedMove { .. } => "HEX_BLOCKED_MOVE",
        }
    }
}
