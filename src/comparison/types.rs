// SPDX-License-Identifier: MIT

//! Registered type hierarchy backing the `is` / `is not` comparisons
//!
//! Each descriptor carries its full ancestor set (itself included), computed
//! once at registration, so assignability is a set lookup. Types are scoped to
//! the registry that created them: same-named types from two registries are
//! unrelated.

use crate::error::TypeRegistryError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
struct TypeInfo {
    registry: u64,
    name: String,
    ancestors: HashSet<String>,
}

/// Handle to a registered type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    info: Arc<TypeInfo>,
}

impl TypeDescriptor {
    /// Name the type was registered under
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// True when `other` is this type or one of its ancestors
    pub fn is_assignable_to(&self, other: &TypeDescriptor) -> bool {
        self.info.registry == other.info.registry && self.info.ancestors.contains(other.name())
    }

    /// Names of this type and all of its ancestors
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.info.ancestors.iter().map(String::as_str)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.info.registry == other.info.registry && self.info.name == other.info.name
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info.name)
    }
}

/// A hierarchy of named types
#[derive(Debug)]
pub struct TypeRegistry {
    id: u64,
    types: HashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry with its own identity
    pub fn new() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            types: HashMap::new(),
        }
    }

    /// Register `name` as a subtype of every type in `parents`.
    ///
    /// Parents must already be registered, which also rules out cycles.
    pub fn register(
        &mut self,
        name: &str,
        parents: &[&str],
    ) -> Result<TypeDescriptor, TypeRegistryError> {
        if self.types.contains_key(name) {
            return Err(TypeRegistryError::DuplicateType(name.to_string()));
        }

        let mut ancestors = HashSet::new();
        ancestors.insert(name.to_string());
        for parent in parents {
            let parent_desc =
                self.types
                    .get(*parent)
                    .ok_or_else(|| TypeRegistryError::UnknownParent {
                        ty: name.to_string(),
                        parent: parent.to_string(),
                    })?;
            ancestors.extend(parent_desc.ancestors().map(str::to_string));
        }

        log::debug!(
            "Registered type '{}' with {} ancestor(s)",
            name,
            ancestors.len() - 1
        );

        let desc = TypeDescriptor {
            info: Arc::new(TypeInfo {
                registry: self.id,
                name: name.to_string(),
                ancestors,
            }),
        };
        self.types.insert(name.to_string(), desc.clone());
        Ok(desc)
    }

    /// Look up a registered type by name
    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        self.types.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
