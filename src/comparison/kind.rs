// SPDX-License-Identifier: MIT

//! The closed set of comparison operators and their textual aliases

use super::evaluator;
use super::operand::Operand;
use crate::error::{ComparisonError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A binary comparison selected by an operator token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComparisonKind {
    /// `=`, `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `=>`, `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`, `=<`
    LessOrEqual,
    /// `is`, `instance of`
    IsSubtype,
    /// `isnt`, `isn't`, `isnot`, `is not`, `not instance of`
    IsNotSubtype,
    /// Fallback for unrecognized tokens; never matches
    None,
}

/// Serialized name of `ComparisonKind::None`, which has no alias
const NONE_NAME: &str = "none";

/// Alias lookup built once, in declaration order. On a duplicated alias
/// the first-declared variant keeps it.
static ALIAS_INDEX: Lazy<HashMap<&'static str, ComparisonKind>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for kind in ComparisonKind::ALL {
        for alias in kind.aliases() {
            index.entry(*alias).or_insert(kind);
        }
    }
    index
});

impl ComparisonKind {
    /// Every variant, in declaration order
    pub const ALL: [ComparisonKind; 9] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterOrEqual,
        Self::LessThan,
        Self::LessOrEqual,
        Self::IsSubtype,
        Self::IsNotSubtype,
        Self::None,
    ];

    /// Recognized tokens; the first one is canonical
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Equals => &["=", "=="],
            Self::NotEquals => &["!="],
            Self::GreaterThan => &[">"],
            Self::GreaterOrEqual => &["=>", ">="],
            Self::LessThan => &["<"],
            Self::LessOrEqual => &["<=", "=<"],
            Self::IsSubtype => &["is", "instance of"],
            Self::IsNotSubtype => &["isnt", "isn't", "isnot", "is not", "not instance of"],
            Self::None => &[],
        }
    }

    /// First alias, or nothing for `None`
    pub fn canonical(&self) -> Option<&'static str> {
        self.aliases().first().copied()
    }

    /// Resolve an operator token. Unknown tokens resolve to `None`.
    pub fn resolve(token: &str) -> Self {
        match ALIAS_INDEX.get(token) {
            Some(kind) => {
                log::trace!("Resolved '{}' to {:?}", token, kind);
                *kind
            }
            None => {
                log::debug!("No comparison for token '{}', falling back to None", token);
                Self::None
            }
        }
    }

    /// Like `resolve`, but an unknown token is an error
    pub fn try_resolve(token: &str) -> Result<Self> {
        ALIAS_INDEX
            .get(token)
            .copied()
            .ok_or_else(|| ComparisonError::unresolved(token))
    }

    /// Apply this comparison to `left` and `right`
    pub fn apply(&self, left: &Operand, right: &Operand) -> Result<bool> {
        evaluator::apply(*self, left, right)
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical().unwrap_or(NONE_NAME))
    }
}

impl FromStr for ComparisonKind {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_resolve(s)
    }
}

// Accepts `"none"` besides the aliases so serialized kinds read back.
impl TryFrom<String> for ComparisonKind {
    type Error = ComparisonError;

    fn try_from(s: String) -> Result<Self> {
        if s == NONE_NAME {
            return Ok(Self::None);
        }
        Self::try_resolve(&s)
    }
}

impl From<ComparisonKind> for String {
    fn from(kind: ComparisonKind) -> Self {
        kind.to_string()
    }
}
