// SPDX-License-Identifier: MIT

//! A single `left op right` comparison loaded from YAML or JSON config

use super::kind::ComparisonKind;
use super::operand::Operand;
use crate::error::Result;
use serde::Deserialize;

/// A comparison with both operands already bound
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub left: Operand,
    pub op: ComparisonKind,
    pub right: Operand,
}

impl Condition {
    pub fn new(left: impl Into<Operand>, op: ComparisonKind, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    /// Parse a condition from a YAML string
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Parse a condition from a JSON string
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn evaluate(&self) -> Result<bool> {
        self.op.apply(&self.left, &self.right)
    }
}
