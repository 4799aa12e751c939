//! LSP protocol feature implementations.
//!
//! This module provides:
//! - The hover and completion renderers over signature stores
//! - Hover, completion and signature help at a document position

mod completion;
mod hover;
mod signature_help;

pub use completion::{completion_at_position, signature_to_completion, CompletionEntry};
pub use hover::{hover_at_position, hover_markdown, signature_to_hover};
pub use signature_help::signature_help_at_position;
