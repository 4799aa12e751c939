//! Hover documentation for AutoIt functions.

use std::collections::HashMap;

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::{word_at, LineIndex, WordKind};
use crate::format::{br, default_is, value_first_header, OPT};
use crate::registry::Registry;
use crate::types::{FunctionSignature, Parameter, SignatureStore};

/// Parameter description with the optional marker and default clause applied.
pub(crate) fn parameter_documentation(parameter: &Parameter) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if parameter.is_optional() && !parameter.documentation.contains(OPT) {
        parts.push(OPT.to_string());
    }
    if !parameter.documentation.is_empty() {
        parts.push(parameter.documentation.clone());
    }
    if let Some(default) = &parameter.default {
        parts.push(default_is(default));
    }
    parts.join(" ")
}

fn parameter_line(parameter: &Parameter) -> String {
    let doc = parameter_documentation(parameter);
    if doc.is_empty() {
        format!("`{}` —", parameter.label)
    } else {
        format!("`{}` — {}", parameter.label, doc)
    }
}

/// Render one signature as hover markdown.
///
/// Sections appear in this order: call syntax, summary, return value,
/// parameters. Empty sections are left out, but every parameter gets a line.
pub fn hover_markdown(signature: &FunctionSignature) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !signature.label.is_empty() {
        sections.push(format!("```autoit\n{}\n```", signature.label));
    }
    if !signature.documentation.is_empty() {
        sections.push(signature.documentation.clone());
    }
    if let Some(returns) = signature.returns.as_deref().filter(|r| !r.is_empty()) {
        sections.push(format!(
            "{}{}{}",
            value_first_header(&signature.name),
            br(),
            returns
        ));
    }
    if !signature.parameters.is_empty() {
        let lines: Vec<String> = signature.parameters.iter().map(parameter_line).collect();
        sections.push(lines.join(br()));
    }

    sections.join("\n\n")
}

/// Render every signature in `store` as hover markdown, keyed by name.
pub fn signature_to_hover(store: &SignatureStore) -> HashMap<String, String> {
    store
        .iter()
        .map(|sig| (sig.name.clone(), hover_markdown(sig)))
        .collect()
}

/// Get hover information for a position in the document.
pub fn hover_at_position(
    line_index: &LineIndex,
    registry: &Registry,
    position: Position,
) -> Option<Hover> {
    let offset = line_index.position_to_offset(position)?;
    let word = word_at(line_index.source(), offset)?;
    if word.kind != WordKind::Function {
        return None;
    }

    let markdown = registry.hover(word.text)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: markdown.to_string(),
        }),
        range: Some(line_index.span_to_range(&word.span)),
    })
}
