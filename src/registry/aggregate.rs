//! Merging per-module signature stores into one table.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::types::SignatureStore;

/// What to do when two modules define the same function name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// The module merged later replaces the earlier record.
    #[default]
    LastWins,
    /// The first record is kept; later ones are dropped.
    FirstWins,
    /// A collision aborts the merge.
    Error,
}

/// A name defined by more than one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    /// Module whose record is no longer visible.
    pub shadowed: String,
    /// Module whose record ended up in the merged table.
    pub winner: String,
}

/// Result of a finished merge.
///
/// AutoIt names are case-insensitive, so `_max` and `_Max` are one function:
/// `origins` and `folded` are keyed on the lowercased name.
#[derive(Debug, Clone, Default)]
pub struct Merged {
    pub store: SignatureStore,
    /// Index into `sources` of the module each name came from.
    pub origins: HashMap<String, usize>,
    /// Lowercased name -> name as stored.
    pub folded: HashMap<String, String>,
    /// Source names in merge order.
    pub sources: Vec<String>,
    pub collisions: Vec<Collision>,
}

impl Merged {
    /// Name of the module that provided `name`, ignoring case.
    pub fn origin_of(&self, name: &str) -> Option<&str> {
        self.origins
            .get(&name.to_lowercase())
            .and_then(|&i| self.sources.get(i))
            .map(String::as_str)
    }

    /// Name under which `name` is stored, ignoring case.
    pub fn stored_name(&self, name: &str) -> Option<&str> {
        self.folded.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Incremental merge of named stores under a fixed policy.
#[derive(Debug, Default)]
pub struct Aggregator {
    policy: MergePolicy,
    merged: Merged,
}

impl Aggregator {
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            merged: Merged::default(),
        }
    }

    /// Merge `store` on top of everything merged so far.
    pub fn merge(&mut self, source: &str, store: &SignatureStore) -> Result<()> {
        let source_id = self.merged.sources.len();
        self.merged.sources.push(source.to_string());

        for signature in store {
            let key = signature.name.to_lowercase();
            let Some(&previous) = self.merged.origins.get(&key) else {
                self.merged.store.insert(signature.clone());
                self.merged.origins.insert(key.clone(), source_id);
                self.merged.folded.insert(key, signature.name.clone());
                continue;
            };

            let earlier = self.merged.sources[previous].clone();
            let collision = match self.policy {
                MergePolicy::Error => {
                    return Err(RegistryError::Collision {
                        name: signature.name.clone(),
                        first: earlier,
                        second: source.to_string(),
                    });
                }
                MergePolicy::FirstWins => Collision {
                    name: signature.name.clone(),
                    shadowed: source.to_string(),
                    winner: earlier,
                },
                MergePolicy::LastWins => {
                    // The winner takes the slot of the record it shadows,
                    // whatever case either one is spelled in.
                    match self.merged.folded.insert(key.clone(), signature.name.clone()) {
                        Some(stored) => self.merged.store.replace(&stored, signature.clone()),
                        None => self.merged.store.insert(signature.clone()),
                    };
                    self.merged.origins.insert(key, source_id);
                    Collision {
                        name: signature.name.clone(),
                        shadowed: earlier,
                        winner: source.to_string(),
                    }
                }
            };

            debug!(
                name = %collision.name,
                shadowed = %collision.shadowed,
                winner = %collision.winner,
                "signature collision"
            );
            self.merged.collisions.push(collision);
        }

        Ok(())
    }

    pub fn finish(self) -> Merged {
        self.merged
    }
}

/// Shallow union of `stores`; a later store's record replaces an earlier one
/// with the same name, silently. Names compare exactly; `Aggregator` is the
/// case-insensitive merge.
pub fn aggregate<'a, I>(stores: I) -> SignatureStore
where
    I: IntoIterator<Item = &'a SignatureStore>,
{
    let mut merged = SignatureStore::new();
    for store in stores {
        for signature in store {
            merged.insert(signature.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FunctionSignature;

    fn store(entries: &[(&str, &str)]) -> SignatureStore {
        entries
            .iter()
            .map(|(name, label)| FunctionSignature::new(*name, *label, ""))
            .collect()
    }

    #[test]
    fn aggregate_last_writer_wins() {
        let a = store(&[("_X", "A")]);
        let b = store(&[("_X", "B")]);

        assert_eq!(aggregate([&a, &b]).get("_X").unwrap().label, "B");
        assert_eq!(aggregate([&b, &a]).get("_X").unwrap().label, "A");
    }

    #[test]
    fn aggregate_keeps_first_appearance_order() {
        let a = store(&[("_A", ""), ("_Shared", "a")]);
        let b = store(&[("_Shared", "b"), ("_B", "")]);

        let merged = aggregate([&a, &b]);
        let names: Vec<_> = merged.names().collect();
        assert_eq!(names, vec!["_A", "_Shared", "_B"]);
        assert_eq!(merged.get("_Shared").unwrap().label, "b");
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate(std::iter::empty()).is_empty());
    }

    #[test]
    fn last_wins_records_collision() {
        let mut agg = Aggregator::new(MergePolicy::LastWins);
        agg.merge("Generic", &store(&[("_X", "A")])).unwrap();
        agg.merge("Specific", &store(&[("_X", "B")])).unwrap();
        let merged = agg.finish();

        assert_eq!(merged.store.get("_X").unwrap().label, "B");
        assert_eq!(merged.origin_of("_X"), Some("Specific"));
        assert_eq!(
            merged.collisions,
            vec![Collision {
                name: "_X".into(),
                shadowed: "Generic".into(),
                winner: "Specific".into(),
            }]
        );
    }

    #[test]
    fn first_wins_keeps_earlier_record() {
        let mut agg = Aggregator::new(MergePolicy::FirstWins);
        agg.merge("Generic", &store(&[("_X", "A")])).unwrap();
        agg.merge("Specific", &store(&[("_X", "B"), ("_Y", "")]))
            .unwrap();
        let merged = agg.finish();

        assert_eq!(merged.store.get("_X").unwrap().label, "A");
        assert_eq!(merged.origin_of("_X"), Some("Generic"));
        assert_eq!(merged.origin_of("_Y"), Some("Specific"));
        assert_eq!(merged.collisions[0].shadowed, "Specific");
    }

    #[test]
    fn error_policy_rejects_collision() {
        let mut agg = Aggregator::new(MergePolicy::Error);
        agg.merge("Generic", &store(&[("_X", "A")])).unwrap();
        let err = agg
            .merge("Specific", &store(&[("_X", "B")]))
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Collision { ref name, ref first, ref second }
                if name == "_X" && first == "Generic" && second == "Specific"
        ));
    }

    #[test]
    fn case_variants_collide() {
        let mut agg = Aggregator::new(MergePolicy::LastWins);
        agg.merge("Math", &store(&[("_Max", "A"), ("_Min", "")])).unwrap();
        agg.merge("Mine", &store(&[("_max", "B")])).unwrap();
        let merged = agg.finish();

        assert_eq!(merged.store.len(), 2);
        assert!(!merged.store.contains("_Max"));
        assert_eq!(merged.store.get("_max").unwrap().label, "B");
        let names: Vec<_> = merged.store.names().collect();
        assert_eq!(names, vec!["_max", "_Min"]);
        assert_eq!(merged.origin_of("_MAX"), Some("Mine"));
        assert_eq!(merged.stored_name("_MAX"), Some("_max"));
        assert_eq!(merged.collisions.len(), 1);
        assert_eq!(merged.collisions[0].shadowed, "Math");
    }

    #[test]
    fn case_variants_follow_policy() {
        let mut first = Aggregator::new(MergePolicy::FirstWins);
        first.merge("Math", &store(&[("_Max", "A")])).unwrap();
        first.merge("Mine", &store(&[("_max", "B")])).unwrap();
        let merged = first.finish();
        assert_eq!(merged.store.len(), 1);
        assert_eq!(merged.store.get("_Max").unwrap().label, "A");
        assert_eq!(merged.collisions.len(), 1);

        let mut strict = Aggregator::new(MergePolicy::Error);
        strict.merge("Math", &store(&[("_Max", "A")])).unwrap();
        let err = strict.merge("Mine", &store(&[("_max", "B")])).unwrap_err();
        assert!(matches!(err, RegistryError::Collision { ref name, .. } if name == "_max"));
    }

    #[test]
    fn aggregator_agrees_with_aggregate() {
        let a = store(&[("_A", "1"), ("_X", "a")]);
        let b = store(&[("_X", "b"), ("_B", "2")]);

        let mut agg = Aggregator::new(MergePolicy::default());
        agg.merge("a", &a).unwrap();
        agg.merge("b", &b).unwrap();

        assert_eq!(agg.finish().store, aggregate([&a, &b]));
    }

    #[test]
    fn policy_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MergePolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"first-wins\"").unwrap();
        assert_eq!(w.policy, MergePolicy::FirstWins);
    }
}
