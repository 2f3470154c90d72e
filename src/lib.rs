// SPDX-License-Identifier: MIT

pub mod comparison;
pub mod error;

pub use comparison::{apply, resolve, ComparisonKind, Condition, Operand};
pub use error::{ComparisonError, Result, TypeRegistryError};
