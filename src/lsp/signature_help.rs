//! Signature help for AutoIt function calls.

use tower_lsp::lsp_types::*;

use crate::document::LineIndex;
use crate::registry::Registry;
use crate::types::FunctionSignature;

use super::hover::parameter_documentation;

/// An open `(` or `[` seen while scanning a statement.
#[derive(Debug)]
struct Frame {
    /// Identifier right before `(`, if any
    name: Option<String>,
    /// Top-level commas seen inside this frame
    commas: u32,
}

/// Byte offset where the logical statement containing `offset` starts.
///
/// AutoIt continues a statement on the next line when a line ends in ` _`.
fn statement_start(source: &str, offset: usize) -> usize {
    let line_start = |at: usize| source[..at].rfind('\n').map_or(0, |i| i + 1);

    let mut start = line_start(offset);
    while start > 0 {
        let prev_start = line_start(start - 1);
        let prev = source[prev_start..start - 1].trim_end();
        let continued = prev == "_" || prev.ends_with(" _") || prev.ends_with("\t_");
        if !continued {
            break;
        }
        start = prev_start;
    }
    start
}

/// Identifier that ends right before `end`, ignoring whitespace.
/// Variables (`$name`) and macros (`@name`) are not callable names.
fn callee_before(text: &str, end: usize) -> Option<String> {
    let head = text[..end].trim_end();
    let ident_len = head
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if ident_len == 0 {
        return None;
    }
    let ident_start = head.len() - ident_len;
    if matches!(head[..ident_start].chars().last(), Some('$') | Some('@')) {
        return None;
    }
    Some(head[ident_start..].to_string())
}

/// Find the innermost named call open at the end of `text` and the index of
/// the argument being typed.
///
/// String literals (`"..."` and `'...'`, doubled quotes escape) and `;`
/// comments are skipped. Returns `None` when the text ends inside a string.
fn find_call_context(text: &str) -> Option<(String, u32)> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' | '\'' => loop {
                match chars.next() {
                    Some((_, q)) if q == c => {
                        if chars.peek().map(|&(_, n)| n) == Some(c) {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => return None,
                }
            },
            ';' => {
                for (_, n) in chars.by_ref() {
                    if n == '\n' {
                        break;
                    }
                }
            }
            '(' => stack.push(Frame {
                name: callee_before(text, i),
                commas: 0,
            }),
            '[' => stack.push(Frame {
                name: None,
                commas: 0,
            }),
            ')' | ']' => {
                stack.pop();
            }
            ',' => {
                if let Some(top) = stack.last_mut() {
                    top.commas += 1;
                }
            }
            _ => {}
        }
    }

    stack
        .into_iter()
        .rev()
        .find_map(|frame| frame.name.map(|name| (name, frame.commas)))
}

/// Convert a signature to LSP signature information.
fn to_signature_information(signature: &FunctionSignature, active: u32) -> SignatureInformation {
    let parameters = signature
        .parameters
        .iter()
        .map(|p| ParameterInformation {
            label: ParameterLabel::Simple(p.label.clone()),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: parameter_documentation(p),
            })),
        })
        .collect();

    let label = if signature.label.is_empty() {
        signature.name.clone()
    } else {
        signature.label.clone()
    };

    SignatureInformation {
        label,
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: signature.documentation.clone(),
        })),
        parameters: Some(parameters),
        active_parameter: Some(active),
    }
}

/// Get signature help for a position in the document.
pub fn signature_help_at_position(
    line_index: &LineIndex,
    registry: &Registry,
    position: Position,
) -> Option<SignatureHelp> {
    let offset = line_index.position_to_offset(position)?;
    let source = line_index.source();
    let start = statement_start(source, offset);

    let (name, active) = find_call_context(&source[start..offset])?;
    let signature = registry.signature(&name)?;

    Some(SignatureHelp {
        signatures: vec![to_signature_information(signature, active)],
        active_signature: Some(0),
        active_parameter: Some(active),
    })
}
