use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling the signature registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("function `{name}` is defined by both `{first}` and `{second}`")]
    Collision {
        name: String,
        first: String,
        second: String,
    },

    #[error("failed to read module file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse module file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias for results using `RegistryError`.
pub type Result<T> = std::result::Result<T, RegistryError>;
