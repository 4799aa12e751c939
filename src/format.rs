//! Markdown building blocks shared by the library data and the renderers.

/// Marker flagging a parameter as optional.
pub const OPT: &str = "**[optional]**";

pub const DEFAULT_ZERO: &str = "Default is 0.";
pub const DEFAULT_ONE: &str = "Default is 1.";
pub const DEFAULT_MINUS_ONE: &str = "Default is -1.";
pub const DEFAULT_EMPTY_STRING: &str = "Default is \"\".";
pub const DEFAULT_KEYWORD: &str = "Default is the `Default` keyword.";

/// Markdown hard line break used between clauses of one documentation string.
pub const fn br() -> &'static str {
    "  \n"
}

/// Phrase describing a parameter's default value.
///
/// Frequent values map onto the shared constants so that every record spells
/// them identically.
pub fn default_is(value: &str) -> String {
    match value.trim() {
        "0" => DEFAULT_ZERO.to_string(),
        "1" => DEFAULT_ONE.to_string(),
        "-1" => DEFAULT_MINUS_ONE.to_string(),
        "\"\"" | "''" => DEFAULT_EMPTY_STRING.to_string(),
        "Default" => DEFAULT_KEYWORD.to_string(),
        other => format!("Default is {}.", other),
    }
}

/// Header placed in front of a function's return value description, ahead of
/// its parameter list.
pub fn value_first_header(name: &str) -> String {
    format!("**Return value** of `{}`:", name)
}

/// Completion detail naming the header a UDF needs.
pub fn include_requirement(header: &str) -> String {
    format!("(Requires: `#include <{}>`)", header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br_is_a_hard_break() {
        assert_eq!(br(), "  \n");
    }

    #[test]
    fn default_is_uses_canned_phrases() {
        assert_eq!(default_is("0"), DEFAULT_ZERO);
        assert_eq!(default_is(" 1 "), DEFAULT_ONE);
        assert_eq!(default_is("-1"), DEFAULT_MINUS_ONE);
        assert_eq!(default_is("\"\""), DEFAULT_EMPTY_STRING);
        assert_eq!(default_is("Default"), DEFAULT_KEYWORD);
    }

    #[test]
    fn default_is_formats_other_values() {
        assert_eq!(default_is("@CRLF"), "Default is @CRLF.");
    }

    #[test]
    fn value_first_header_names_function() {
        assert_eq!(value_first_header("_Max"), "**Return value** of `_Max`:");
    }

    #[test]
    fn include_requirement_wraps_header() {
        assert_eq!(
            include_requirement("Math.au3"),
            "(Requires: `#include <Math.au3>`)"
        );
    }
}
