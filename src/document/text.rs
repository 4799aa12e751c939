//! Text utilities for position conversion and word lookup.
//!
//! LSP positions count columns in UTF-16 code units; everything inside the
//! server works on byte offsets into the UTF-8 source.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::Position;

/// AutoIt identifier, optionally prefixed by the variable or macro sigil.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$@]?[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Pre-computed line index for efficient position lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte range of `line`, excluding its newline.
    fn line_bounds(&self, line: usize) -> Option<Range<usize>> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        Some(start..end)
    }

    /// Convert a byte offset to an LSP position.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let start = self.line_starts[line];
        let col: usize = self.source[start..]
            .char_indices()
            .take_while(|(i, c)| start + i < offset && *c != '\n')
            .map(|(_, c)| c.len_utf16())
            .sum();

        Position::new(line as u32, col as u32)
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end. Returns None if
    /// the line does not exist.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let bounds = self.line_bounds(position.line as usize)?;

        let mut utf16_col = 0u32;
        for (i, c) in self.source[bounds.clone()].char_indices() {
            if utf16_col >= position.character {
                return Some(bounds.start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(bounds.end)
    }

    /// Convert a byte span to an LSP range.
    pub fn span_to_range(&self, span: &Range<usize>) -> tower_lsp::lsp_types::Range {
        let start = self.offset_to_position(span.start);
        let end = self.offset_to_position(span.end);
        tower_lsp::lsp_types::Range::new(start, end)
    }
}

/// What an identifier in AutoIt source refers to, judged by its sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Bare name: function, keyword or user function
    Function,
    /// `$name`
    Variable,
    /// `@name`
    Macro,
}

/// An identifier found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    /// Identifier without its sigil
    pub text: &'a str,
    /// Byte span including the sigil
    pub span: Range<usize>,
    pub kind: WordKind,
}

/// Find the identifier touching `offset`, including one that ends exactly
/// at the cursor.
pub fn word_at(source: &str, offset: usize) -> Option<Word<'_>> {
    if offset > source.len() {
        return None;
    }
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    let line = &source[line_start..line_end];

    let m = WORD_PATTERN.find_iter(line).find(|m| {
        let start = line_start + m.start();
        let end = line_start + m.end();
        start <= offset && offset <= end
    })?;

    let matched = m.as_str();
    let (kind, text) = match matched.as_bytes()[0] {
        b'$' => (WordKind::Variable, &matched[1..]),
        b'@' => (WordKind::Macro, &matched[1..]),
        _ => (WordKind::Function, matched),
    };

    Some(Word {
        text,
        span: line_start + m.start()..line_start + m.end(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("hello world".to_string());
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(11), Position::new(0, 11));
    }

    #[test]
    fn multi_line() {
        let idx = LineIndex::new("hello\nworld\ntest".to_string());
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(6), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(12), Position::new(2, 0));
    }

    #[test]
    fn position_to_offset_multi_line() {
        let idx = LineIndex::new("hello\nworld".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 5)), Some(5));
        assert_eq!(idx.position_to_offset(Position::new(1, 0)), Some(6));
        assert_eq!(idx.position_to_offset(Position::new(1, 5)), Some(11));
    }

    #[test]
    fn column_past_end_clamps() {
        let idx = LineIndex::new("ab\ncd".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 40)), Some(2));
    }

    #[test]
    fn utf16_handling() {
        // U+1F600 is 4 bytes in UTF-8 but 2 code units in UTF-16
        let idx = LineIndex::new("a\u{1F600}b".to_string());
        assert_eq!(idx.offset_to_position(1), Position::new(0, 1));
        assert_eq!(idx.offset_to_position(5), Position::new(0, 3));
        assert_eq!(idx.position_to_offset(Position::new(0, 3)), Some(5));
    }

    #[test]
    fn out_of_bounds() {
        let idx = LineIndex::new("hello".to_string());
        assert_eq!(idx.position_to_offset(Position::new(5, 0)), None);
    }

    #[test]
    fn span_to_range() {
        let idx = LineIndex::new("hello\nworld".to_string());
        let range = idx.span_to_range(&(6..11));
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 5));
    }

    #[test]
    fn word_in_call() {
        let word = word_at("$x = _Max(1, 2)", 7).unwrap();
        assert_eq!(word.text, "_Max");
        assert_eq!(word.span, 5..9);
        assert_eq!(word.kind, WordKind::Function);
    }

    #[test]
    fn word_ending_at_cursor() {
        let word = word_at("Sleep", 5).unwrap();
        assert_eq!(word.text, "Sleep");
    }

    #[test]
    fn variable_and_macro_words() {
        let var = word_at("$iCount += 1", 3).unwrap();
        assert_eq!(var.kind, WordKind::Variable);
        assert_eq!(var.text, "iCount");
        assert_eq!(var.span, 0..7);

        let mac = word_at("ConsoleWrite(@CRLF)", 15).unwrap();
        assert_eq!(mac.kind, WordKind::Macro);
        assert_eq!(mac.text, "CRLF");
    }

    #[test]
    fn word_on_later_line() {
        let source = "Local $a\nStringLen($a)";
        let word = word_at(source, 11).unwrap();
        assert_eq!(word.text, "StringLen");
        assert_eq!(word.span, 9..18);
    }

    #[test]
    fn no_word_in_whitespace() {
        assert!(word_at("a   b", 2).is_none());
        assert!(word_at("", 0).is_none());
        assert!(word_at("abc", 10).is_none());
    }
}
