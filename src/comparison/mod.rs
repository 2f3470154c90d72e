// SPDX-License-Identifier: MIT

//! Operator registry for binary comparisons
//!
//! Operator tokens resolve to a fixed set of comparisons:
//! - equality: `==`, `!=`
//! - numeric ordering: `>`, `>=`, `<`, `<=`
//! - type relationship: `is`, `is not`
//!
//! Unknown tokens resolve to `ComparisonKind::None`, which never matches.

mod condition;
mod evaluator;
pub mod helpers;
mod kind;
mod operand;
mod types;

pub use condition::Condition;
pub use evaluator::apply;
pub use kind::ComparisonKind;
pub use operand::{Number, Operand};
pub use types::{TypeDescriptor, TypeRegistry};

/// Resolve an operator token, falling back to `ComparisonKind::None`
pub fn resolve(token: &str) -> ComparisonKind {
    ComparisonKind::resolve(token)
}
