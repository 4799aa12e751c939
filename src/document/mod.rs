//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for byte offset <-> LSP position conversion
//! - `word_at` for finding the identifier under the cursor
//! - `DocumentState` and `DocumentStore` for document lifecycle management

mod state;
mod text;

pub use state::{DocumentState, DocumentStore};
pub use text::{word_at, LineIndex, Word, WordKind};
