//! The merged signature registry served to the editor.
//!
//! A `Registry` is built once from an ordered list of library modules and is
//! read-only afterwards. Building merges the module stores, then renders the
//! hover map and the completion list up front.

use std::collections::HashMap;

use tower_lsp::lsp_types::CompletionItemKind;
use tracing::info;

use crate::error::Result;
use crate::library::LibraryModule;
use crate::lsp::{signature_to_completion, signature_to_hover, CompletionEntry};
use crate::types::{FunctionSignature, SignatureStore};

mod aggregate;

pub use aggregate::{aggregate, Aggregator, Collision, MergePolicy, Merged};

#[derive(Debug, Default)]
pub struct Registry {
    merged: Merged,
    hovers: HashMap<String, String>,
    completions: Vec<CompletionEntry>,
}

impl Registry {
    /// Merge `modules` in order under `policy` and render their documentation.
    ///
    /// Names compare without case. Completion entries keep the module they
    /// were rendered for, so an entry's detail names the module whose record
    /// won the merge. Completions follow `store()` order: a shadowing record
    /// sits where the name first appeared.
    pub fn build<'a, I>(modules: I, policy: MergePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = &'a LibraryModule>,
    {
        let modules: Vec<&LibraryModule> = modules.into_iter().collect();

        let mut aggregator = Aggregator::new(policy);
        for module in &modules {
            aggregator.merge(&module.name, &module.store)?;
        }
        let merged = aggregator.finish();

        let hovers = signature_to_hover(&merged.store);

        let mut rendered: HashMap<String, CompletionEntry> =
            HashMap::with_capacity(merged.store.len());
        for (source_id, module) in modules.iter().enumerate() {
            let entries = signature_to_completion(
                &module.store,
                CompletionItemKind::FUNCTION,
                &module.detail(),
            );
            for entry in entries {
                let won = merged.origins.get(&entry.name.to_lowercase()) == Some(&source_id)
                    && merged.store.contains(&entry.name);
                if won {
                    rendered.insert(entry.name.clone(), entry);
                }
            }
        }
        let completions = merged
            .store
            .names()
            .filter_map(|name| rendered.remove(name))
            .collect();

        info!(
            modules = modules.len(),
            functions = merged.store.len(),
            collisions = merged.collisions.len(),
            "signature registry built"
        );

        Ok(Self {
            merged,
            hovers,
            completions,
        })
    }

    /// Registry over the bundled library with the default policy.
    pub fn bundled() -> Self {
        // LastWins never reports an error.
        Self::build(crate::library::bundled_modules(), MergePolicy::LastWins).unwrap_or_default()
    }

    /// Stored name for `name`: exact match first, then ignoring case.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.merged.store.contains(name) {
            return Some(name);
        }
        self.merged.stored_name(name)
    }

    pub fn signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.merged.store.get(self.resolve(name)?)
    }

    /// Rendered hover markdown for `name`.
    pub fn hover(&self, name: &str) -> Option<&str> {
        self.hovers.get(self.resolve(name)?).map(String::as_str)
    }

    /// Module that provides `name`.
    pub fn origin_of(&self, name: &str) -> Option<&str> {
        self.merged.origin_of(name)
    }

    pub fn completions(&self) -> &[CompletionEntry] {
        &self.completions
    }

    /// Names defined by more than one module.
    pub fn collisions(&self) -> &[Collision] {
        &self.merged.collisions
    }

    /// The merged signature table.
    pub fn store(&self) -> &SignatureStore {
        &self.merged.store
    }

    pub fn len(&self) -> usize {
        self.merged.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::library::bundled_modules;
    use crate::types::Parameter;

    fn module(name: &str, include: Option<&str>, sigs: &[(&str, &str)]) -> LibraryModule {
        LibraryModule::new(
            name,
            include,
            sigs.iter()
                .map(|(n, label)| FunctionSignature::new(*n, *label, "doc"))
                .collect(),
        )
    }

    #[test]
    fn bundled_registry_covers_every_module() {
        let registry = Registry::bundled();
        let total: usize = bundled_modules().iter().map(|m| m.store.len()).sum();
        assert_eq!(registry.len(), total);
        assert_eq!(registry.completions().len(), total);
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn hover_and_completion_agree() {
        let registry = Registry::bundled();
        for entry in registry.completions() {
            assert_eq!(Some(entry.documentation.as_str()), registry.hover(&entry.name));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = Registry::bundled();
        assert_eq!(registry.resolve("msgbox"), Some("MsgBox"));
        assert_eq!(registry.resolve("_MAX"), Some("_Max"));
        assert_eq!(registry.signature("stringlen").unwrap().name, "StringLen");
        assert!(registry.hover("_max").unwrap().contains("_Max ( $iNum1, $iNum2 )"));
        assert!(registry.resolve("NoSuchFunction").is_none());
    }

    #[test]
    fn origin_names_module() {
        let registry = Registry::bundled();
        assert_eq!(registry.origin_of("_Max"), Some("Math"));
        assert_eq!(registry.origin_of("Sleep"), Some("AutoIt"));
    }

    #[test]
    fn later_module_wins_and_owns_completion() {
        let generic = module("Generic", Some("Generic.au3"), &[("_X", "A"), ("_G", "G")]);
        let specific = module("Specific", Some("Specific.au3"), &[("_X", "B")]);

        let registry = Registry::build([&generic, &specific], MergePolicy::LastWins).unwrap();

        assert_eq!(registry.signature("_X").unwrap().label, "B");
        assert_eq!(registry.collisions().len(), 1);

        let names: Vec<_> = registry.completions().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["_X", "_G"]);
        assert_eq!(names, registry.store().names().collect::<Vec<_>>());
        let x = registry.completions().iter().find(|e| e.name == "_X").unwrap();
        assert_eq!(x.detail, "(Requires: `#include <Specific.au3>`)");
        assert!(x.documentation.contains("B"));
    }

    #[test]
    fn case_variant_shadows_bundled_name() {
        let math = crate::library::bundled_module("Math").unwrap();
        let mine = module("Mine", Some("Mine.au3"), &[("_max", "_max ( $a, $b, $c )")]);

        let registry = Registry::build([math, &mine], MergePolicy::LastWins).unwrap();

        assert_eq!(registry.len(), math.store.len());
        assert_eq!(registry.collisions().len(), 1);
        assert_eq!(registry.collisions()[0].shadowed, "Math");
        for spelling in ["_Max", "_max", "_MAX"] {
            assert_eq!(registry.origin_of(spelling), Some("Mine"));
            assert!(registry.hover(spelling).unwrap().contains("_max ( $a, $b, $c )"));
        }

        let entries: Vec<_> = registry
            .completions()
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case("_max"))
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].detail, "(Requires: `#include <Mine.au3>`)");
        let names: Vec<_> = registry.completions().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, registry.store().names().collect::<Vec<_>>());
    }

    #[test]
    fn case_variant_fails_error_policy() {
        let math = crate::library::bundled_module("Math").unwrap();
        let mine = module("Mine", None, &[("_max", "B")]);

        let err = Registry::build([math, &mine], MergePolicy::Error).unwrap_err();
        assert_eq!(
            err.to_string(),
            "function `_max` is defined by both `Math` and `Mine`"
        );
    }

    #[test]
    fn merge_order_decides_winner() {
        let a = module("A", None, &[("_X", "A")]);
        let b = module("B", None, &[("_X", "B")]);

        let ab = Registry::build([&a, &b], MergePolicy::LastWins).unwrap();
        let ba = Registry::build([&b, &a], MergePolicy::LastWins).unwrap();
        assert_eq!(ab.signature("_X").unwrap().label, "B");
        assert_eq!(ba.signature("_X").unwrap().label, "A");
    }

    #[test]
    fn first_wins_policy() {
        let a = module("A", None, &[("_X", "A")]);
        let b = module("B", None, &[("_X", "B")]);

        let registry = Registry::build([&a, &b], MergePolicy::FirstWins).unwrap();
        assert_eq!(registry.signature("_X").unwrap().label, "A");
        assert_eq!(registry.completions().len(), 1);
        assert_eq!(registry.completions()[0].documentation, registry.hover("_X").unwrap());
    }

    #[test]
    fn error_policy_fails_build() {
        let a = module("A", None, &[("_X", "A")]);
        let b = module("B", None, &[("_X", "B")]);

        let err = Registry::build([&a, &b], MergePolicy::Error).unwrap_err();
        assert!(matches!(err, RegistryError::Collision { .. }));
        assert_eq!(
            err.to_string(),
            "function `_X` is defined by both `A` and `B`"
        );
    }

    #[test]
    fn structured_parameters_reach_hover() {
        let sig = FunctionSignature::new("_F", "_F ( $a [, $b = 0] )", "Does F.")
            .param(Parameter::new("$a", "A."))
            .param(Parameter::new("$b", "B.").with_default("0"));
        let m = LibraryModule::new("F", None, vec![sig].into());

        let registry = Registry::build([&m], MergePolicy::LastWins).unwrap();
        assert!(registry
            .hover("_F")
            .unwrap()
            .contains("`$b` — **[optional]** B. Default is 0."));
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::build(std::iter::empty(), MergePolicy::Error).unwrap();
        assert!(registry.is_empty());
        assert!(registry.completions().is_empty());
        assert!(registry.hover("_Max").is_none());
    }
}
