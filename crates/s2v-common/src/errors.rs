//! Error taxonomy for unit translation.
//!
//! Three of the four conditions from the converter's error model live here.
//! The fourth (`FlaggedManualReview`) is not an error: constructs that
//! translate approximately are wrapped in marker comment trivia instead of
//! failing the unit.

use std::fmt;

/// Result alias used throughout the converter.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A fatal or recoverable condition raised while translating one unit.
///
/// Fatal variants abort the containing unit only; a batch translating many
/// units continues with the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A source node kind has no translation rule. Names the offending kind
    /// so the caller can decide whether to skip the unit or file the gap.
    UnsupportedConstruct { kind: String },

    /// A type-directed rule required symbol information the semantic model
    /// could not provide, and no conservative fallback existed.
    UnresolvedSymbol { detail: String },

    /// Malformed input the converter must not paper over: a break/continue
    /// with no enclosing loop, a constraint clause naming a nonexistent
    /// type parameter, and similar shape violations.
    StructuralInvariantViolation { detail: String },
}

impl ConvertError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        ConvertError::UnsupportedConstruct { kind: kind.into() }
    }

    pub fn unresolved(detail: impl Into<String>) -> Self {
        ConvertError::UnresolvedSymbol {
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        ConvertError::StructuralInvariantViolation {
            detail: detail.into(),
        }
    }

    /// Whether the condition aborts the containing unit.
    pub fn is_fatal(&self) -> bool {
        match self {
            ConvertError::UnsupportedConstruct { .. }
            | ConvertError::StructuralInvariantViolation { .. } => true,
            ConvertError::UnresolvedSymbol { .. } => false,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedConstruct { kind } => {
                write!(f, "{kind} not implemented")
            }
            ConvertError::UnresolvedSymbol { detail } => {
                write!(f, "unresolved symbol: {detail}")
            }
            ConvertError::StructuralInvariantViolation { detail } => {
                write!(f, "structural invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_construct_names_the_kind() {
        let err = ConvertError::unsupported("YieldStatement");
        assert_eq!(err.to_string(), "YieldStatement not implemented");
        assert!(err.is_fatal());
    }

    #[test]
    fn unresolved_symbol_is_recoverable() {
        assert!(!ConvertError::unresolved("cast target type").is_fatal());
    }
}
