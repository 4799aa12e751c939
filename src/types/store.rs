//! Insertion-ordered mapping from function name to signature.

use std::collections::HashMap;

use serde::Deserialize;

use super::signature::FunctionSignature;

/// Signature table of one library module, or of several merged ones.
///
/// Iteration follows insertion order, which is the declaration order of the
/// underlying data. Re-inserting a name replaces the record but keeps the
/// name's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<FunctionSignature>")]
pub struct SignatureStore {
    entries: Vec<FunctionSignature>,
    index: HashMap<String, usize>,
}

impl SignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signature, returning the record it replaced.
    pub fn insert(&mut self, signature: FunctionSignature) -> Option<FunctionSignature> {
        match self.index.get(&signature.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot], signature)),
            None => {
                self.index
                    .insert(signature.name.clone(), self.entries.len());
                self.entries.push(signature);
                None
            }
        }
    }

    /// Put `signature` in the slot held by `name`, re-keying the slot when
    /// the names differ. Returns the replaced record, or `None` (storing
    /// nothing) if `name` is absent.
    pub fn replace(
        &mut self,
        name: &str,
        signature: FunctionSignature,
    ) -> Option<FunctionSignature> {
        let slot = self.index.remove(name)?;
        self.index.insert(signature.name.clone(), slot);
        Some(std::mem::replace(&mut self.entries[slot], signature))
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Signatures in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FunctionSignature> {
        self.entries.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.name.as_str())
    }
}

impl FromIterator<FunctionSignature> for SignatureStore {
    fn from_iter<I: IntoIterator<Item = FunctionSignature>>(iter: I) -> Self {
        let mut store = Self::new();
        for signature in iter {
            store.insert(signature);
        }
        store
    }
}

impl From<Vec<FunctionSignature>> for SignatureStore {
    fn from(signatures: Vec<FunctionSignature>) -> Self {
        signatures.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a SignatureStore {
    type Item = &'a FunctionSignature;
    type IntoIter = std::slice::Iter<'a, FunctionSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
