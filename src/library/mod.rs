//! AutoIt library modules with signature documentation.
//!
//! Each module is one signature table plus the `#include` header a script
//! needs before calling its functions. Built-in functions need no header.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::format::include_requirement;
use crate::types::SignatureStore;

mod array;
mod builtins;
mod date;
mod file;
mod math;
mod string;

/// A named signature table, bundled or loaded from a module file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryModule {
    /// Display name, also used to disable the module in settings
    #[serde(default)]
    pub name: String,
    /// Header to include (e.g., "Math.au3"); `None` for built-ins
    #[serde(default)]
    pub include: Option<String>,
    #[serde(default, rename = "functions")]
    pub store: SignatureStore,
}

impl LibraryModule {
    pub fn new(name: impl Into<String>, include: Option<&str>, store: SignatureStore) -> Self {
        Self {
            name: name.into(),
            include: include.map(str::to_string),
            store,
        }
    }

    /// Completion detail for this module's functions.
    pub fn detail(&self) -> String {
        self.include
            .as_deref()
            .map(include_requirement)
            .unwrap_or_default()
    }
}

/// Bundled modules in merge order, built-ins first.
static BUNDLED: LazyLock<Vec<LibraryModule>> = LazyLock::new(|| {
    vec![
        builtins::module(),
        math::module(),
        string::module(),
        array::module(),
        date::module(),
        file::module(),
    ]
});

/// All bundled library modules in merge order.
pub fn bundled_modules() -> &'static [LibraryModule] {
    &BUNDLED
}

/// Find a bundled module by name, ignoring case.
pub fn bundled_module(name: &str) -> Option<&'static LibraryModule> {
    BUNDLED.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}
