//! Completion entries for AutoIt functions.
//!
//! Entries insert the bare function name; parameters are left to signature
//! help. The documentation of each entry is the same markdown hover shows.

use tower_lsp::lsp_types::*;

use crate::document::{word_at, LineIndex, WordKind};
use crate::registry::Registry;
use crate::types::SignatureStore;

use super::hover::hover_markdown;

/// One completion candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEntry {
    pub name: String,
    pub kind: CompletionItemKind,
    /// Text inserted on accept; always the bare name
    pub insert_text: String,
    /// Include requirement of the providing module
    pub detail: String,
    /// Hover markdown for `name`
    pub documentation: String,
}

impl From<&CompletionEntry> for CompletionItem {
    fn from(entry: &CompletionEntry) -> Self {
        CompletionItem {
            label: entry.name.clone(),
            kind: Some(entry.kind),
            detail: if entry.detail.is_empty() {
                None
            } else {
                Some(entry.detail.clone())
            },
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: entry.documentation.clone(),
            })),
            insert_text: Some(entry.insert_text.clone()),
            insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
            ..Default::default()
        }
    }
}

/// Build one completion entry per signature, in store order.
pub fn signature_to_completion(
    store: &SignatureStore,
    kind: CompletionItemKind,
    include: &str,
) -> Vec<CompletionEntry> {
    store
        .iter()
        .map(|sig| CompletionEntry {
            name: sig.name.clone(),
            kind,
            insert_text: sig.name.clone(),
            detail: include.to_string(),
            documentation: hover_markdown(sig),
        })
        .collect()
}

/// Generate completions at a position in an AutoIt document.
///
/// Every registry entry is offered; narrowing by the typed prefix is left to
/// the client. Nothing is offered while typing a `$variable` or `@macro`.
pub fn completion_at_position(
    line_index: &LineIndex,
    registry: &Registry,
    position: Position,
) -> Option<CompletionResponse> {
    let offset = line_index.position_to_offset(position)?;
    let source = line_index.source();
    // A lone sigil is the start of a variable or macro name.
    if matches!(source[..offset].chars().next_back(), Some('$' | '@')) {
        return None;
    }
    if let Some(word) = word_at(source, offset) {
        if word.kind != WordKind::Function {
            return None;
        }
    }

    let items: Vec<CompletionItem> = registry
        .completions()
        .iter()
        .map(CompletionItem::from)
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(CompletionResponse::Array(items))
    }
}
