// SPDX-License-Identifier: MIT

//! Standalone comparison predicates
//!
//! These are total: every pair of operands yields a `bool`. Unlike
//! `ComparisonKind::apply`, the negated predicates here do not guard on the
//! operand kinds, so `is_less("a", 1)` is `true` because `"a" >= 1` is not.

use super::operand::{Number, Operand};
use super::types::TypeDescriptor;

pub(crate) fn numeric_pair(left: &Operand, right: &Operand) -> Option<(Number, Number)> {
    Some((left.as_number()?, right.as_number()?))
}

pub(crate) fn type_pair<'a>(
    left: &'a Operand,
    right: &'a Operand,
) -> Option<(&'a TypeDescriptor, &'a TypeDescriptor)> {
    Some((left.as_type()?, right.as_type()?))
}

fn exceeds<T: PartialOrd>(left: T, right: T, inclusive: bool) -> bool {
    if inclusive {
        left >= right
    } else {
        left > right
    }
}

/// Compare in the left operand's numeric domain, coercing the right one into it.
fn compare_numbers(left: Number, right: Number, inclusive: bool) -> bool {
    match left {
        Number::Double(l) => exceeds(l, right.as_f64(), inclusive),
        Number::Int(l) => exceeds(l, right.as_i32(), inclusive),
        Number::Long(l) => exceeds(l, right.as_i64(), inclusive),
        Number::Float(l) => exceeds(l, right.as_f32(), inclusive),
        Number::Short(l) => exceeds(l as i32, right.as_i16() as i32, inclusive),
        Number::Byte(l) => exceeds(l as i32, right.as_i8() as i32, inclusive),
    }
}

pub fn equals(left: &Operand, right: &Operand) -> bool {
    left == right
}

pub fn not_equals(left: &Operand, right: &Operand) -> bool {
    !equals(left, right)
}

pub fn is_greater(left: &Operand, right: &Operand) -> bool {
    numeric_pair(left, right).is_some_and(|(l, r)| compare_numbers(l, r, false))
}

pub fn is_greater_or_equal(left: &Operand, right: &Operand) -> bool {
    numeric_pair(left, right).is_some_and(|(l, r)| compare_numbers(l, r, true))
}

pub fn is_less(left: &Operand, right: &Operand) -> bool {
    !is_greater_or_equal(left, right)
}

pub fn is_less_or_equal(left: &Operand, right: &Operand) -> bool {
    !is_greater(left, right)
}

/// `right` is `left` or one of its ancestors
pub fn is_subtype(left: &Operand, right: &Operand) -> bool {
    type_pair(left, right).is_some_and(|(l, r)| l.is_assignable_to(r))
}

pub fn is_not_subtype(left: &Operand, right: &Operand) -> bool {
    !is_subtype(left, right)
}
