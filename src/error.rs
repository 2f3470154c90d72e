// SPDX-License-Identifier: MIT

//! Typed error handling for equilibrium-rs
//!
//! Unresolved tokens and unsupported operands are reported through
//! `ComparisonError`; type hierarchy problems through `TypeRegistryError`.

use thiserror::Error;

/// Convenience alias for results carrying a `ComparisonError`
pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Errors raised while resolving or applying a comparison
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    /// Token matched no alias (only from the strict resolution paths)
    #[error("Unresolved comparison token: '{0}'")]
    UnresolvedToken(String),

    /// Operand cannot take part in the requested comparison
    #[error("Invalid operand for '{kind}': {reason}")]
    InvalidOperand { kind: String, reason: String },

    /// Value has no operand representation (arrays, objects)
    #[error("Unsupported operand value: {0}")]
    UnsupportedValue(String),
}

/// Errors raised while building a type hierarchy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeRegistryError {
    /// A type with this name is already registered
    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    /// A declared parent has not been registered yet
    #[error("Type '{ty}' declares unknown parent '{parent}'")]
    UnknownParent { ty: String, parent: String },
}

impl ComparisonError {
    /// Create an unresolved token error
    pub fn unresolved(token: impl Into<String>) -> Self {
        Self::UnresolvedToken(token.into())
    }

    /// Create an invalid operand error
    pub fn invalid_operand(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}
