// SPDX-License-Identifier: MIT

//! Comparison evaluator

use super::helpers::{self, numeric_pair, type_pair};
use super::kind::ComparisonKind;
use super::operand::Operand;
use crate::error::{ComparisonError, Result};

/// Apply `kind` to a pair of operands.
///
/// Ordering and subtype checks yield `false` when the operands are of the
/// wrong kind. The only failure is `NotEquals` with a null left operand.
pub fn apply(kind: ComparisonKind, left: &Operand, right: &Operand) -> Result<bool> {
    let result = match kind {
        ComparisonKind::Equals => helpers::equals(left, right),
        ComparisonKind::NotEquals => {
            if left.is_null() {
                log::warn!("Rejected '{}' with null left operand", kind);
                return Err(ComparisonError::invalid_operand(
                    kind.to_string(),
                    "left operand is null",
                ));
            }
            helpers::not_equals(left, right)
        }
        ComparisonKind::GreaterThan => helpers::is_greater(left, right),
        ComparisonKind::GreaterOrEqual => helpers::is_greater_or_equal(left, right),
        ComparisonKind::LessThan => {
            numeric_pair(left, right).is_some() && helpers::is_less(left, right)
        }
        ComparisonKind::LessOrEqual => {
            numeric_pair(left, right).is_some() && helpers::is_less_or_equal(left, right)
        }
        ComparisonKind::IsSubtype => helpers::is_subtype(left, right),
        ComparisonKind::IsNotSubtype => {
            type_pair(left, right).is_some() && helpers::is_not_subtype(left, right)
        }
        ComparisonKind::None => false,
    };

    log::trace!("{} {} {} => {}", left, kind, right, result);
    Ok(result)
}
