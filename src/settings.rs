//! Settings infrastructure for au3lsp.
//!
//! This module provides support for loading and parsing settings.toml files
//! to choose which library modules feed the signature registry and how
//! name collisions between them are resolved.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::library::{bundled_module, bundled_modules, LibraryModule};
use crate::registry::{MergePolicy, Registry};

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Registry configuration.
    pub registry: Option<RegistrySettings>,
}

/// Settings for assembling the signature registry.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrySettings {
    /// How to resolve a function defined by two modules (default: last-wins).
    pub collisions: Option<MergePolicy>,

    /// Bundled modules to leave out, by name (case-insensitive).
    pub disabled: Option<Vec<String>>,

    /// Extra module files, merged after the bundled modules in the order
    /// listed. Relative paths resolve against the settings directory.
    pub modules: Option<Vec<PathBuf>>,
}

/// Load settings from a settings.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "failed to parse settings.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover settings.toml by walking up from `start_dir`, then checking
/// immediate child directories.
///
/// Returns the loaded settings and the directory containing the file (used
/// to resolve relative module paths). Falls back to `start_dir` if no file
/// is found.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    // Phase 1: Walk up from start_dir
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    // Phase 2: Check immediate child directories
    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("settings.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

/// Read a library module from a TOML module file.
///
/// The module name defaults to the file stem when the file doesn't set one.
pub fn load_module_file(path: &Path) -> Result<LibraryModule> {
    let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut module: LibraryModule =
        toml::from_str(&content).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if module.name.is_empty() {
        module.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    Ok(module)
}

/// Names in `disabled` that match no bundled module.
fn unknown_modules(disabled: &[String]) -> Vec<&str> {
    disabled
        .iter()
        .map(String::as_str)
        .filter(|name| bundled_module(name).is_none())
        .collect()
}

/// Build the registry described by `settings`.
///
/// Module files that fail to load are skipped with a warning. A collision
/// under the `error` policy is reported and the registry is rebuilt with
/// last-wins, so the server always starts with documentation.
pub fn build_registry(settings: &Settings, settings_dir: &Path) -> Registry {
    let registry_settings = settings.registry.as_ref();
    let policy = registry_settings
        .and_then(|r| r.collisions)
        .unwrap_or_default();
    let disabled = registry_settings
        .and_then(|r| r.disabled.as_deref())
        .unwrap_or(&[]);
    for name in unknown_modules(disabled) {
        warn!(module = %name, "disabled module is not a bundled module");
    }
    let paths = registry_settings
        .and_then(|r| r.modules.as_deref())
        .unwrap_or(&[]);

    let extra: Vec<LibraryModule> = paths
        .iter()
        .filter_map(|p| {
            let path = settings_dir.join(p);
            match load_module_file(&path) {
                Ok(module) => {
                    debug!(module = %module.name, path = %path.display(), "loaded module file");
                    Some(module)
                }
                Err(e) => {
                    warn!("skipping module file: {}", e);
                    None
                }
            }
        })
        .collect();

    let modules: Vec<&LibraryModule> = bundled_modules()
        .iter()
        .filter(|m| !disabled.iter().any(|d| d.eq_ignore_ascii_case(&m.name)))
        .chain(extra.iter())
        .collect();

    match Registry::build(modules.iter().copied(), policy) {
        Ok(registry) => registry,
        Err(e) => {
            warn!("{}; falling back to last-wins", e);
            Registry::build(modules.iter().copied(), MergePolicy::LastWins).unwrap_or_default()
        }
    }
}
