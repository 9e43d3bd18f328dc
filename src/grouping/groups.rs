use crate::operation::Operation;
use serde::Serialize;
use std::collections::HashMap;

/// Operations sharing one group key, in the order they were assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationGroup {
    /// Tag, first path segment, or `"default"`
    pub key: String,
    /// Member operations, input order
    pub operations: Vec<Operation>,
}

/// Insertion-ordered mapping from group key to its operations.
///
/// Groups appear in the order their key was first seen, which is the order the
/// rendering stage emits resource classes in. Serializes as a list of
/// `{ key, operations }` objects so the ordering survives JSON round trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OperationGroups {
    groups: Vec<OperationGroup>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl OperationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `operation` to the group named `key`, creating the group on first use.
    pub fn push(&mut self, key: &str, operation: Operation) {
        match self.index.get(key) {
            Some(&slot) => self.groups[slot].operations.push(operation),
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push(OperationGroup {
                    key: key.to_string(),
                    operations: vec![operation],
                });
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Operation]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].operations.as_slice())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationGroup> {
        self.groups.iter()
    }

    /// All operations across every group, group by group.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.groups.iter().flat_map(|g| g.operations.iter())
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of operations across all groups.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.groups.iter().map(|g| g.operations.len()).sum()
    }
}

impl IntoIterator for OperationGroups {
    type Item = OperationGroup;
    type IntoIter = std::vec::IntoIter<OperationGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a OperationGroups {
    type Item = &'a OperationGroup;
    type IntoIter = std::slice::Iter<'a, OperationGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
