//! String.au3 UDFs.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        FunctionSignature::new(
            "_HexToString",
            "_HexToString ( $sHex )",
            "Convert a hex string to a string.",
        )
        .returns("Success: a string. Failure: -1 and sets the @error flag to non-zero.")
        .param(Parameter::new("$sHex", "A hexadecimal string.")),
        FunctionSignature::new(
            "_StringBetween",
            "_StringBetween ( $sString, $sStart, $sEnd [, $iMode = $STR_ENDISSTART [, $bCase = False]] )",
            "Find strings between two string delimiters.",
        )
        .returns(format!(
            "Success: a 0-based array.{}Failure: sets the @error flag to non-zero when no strings were found.",
            br()
        ))
        .param(Parameter::new("$sString", "The string to search."))
        .param(Parameter::new("$sStart", "The beginning of the string to find. Passing an empty string starts at the beginning."))
        .param(Parameter::new("$sEnd", "The end of the string to find. Passing an empty string searches from $sStart to the end of the string."))
        .param(Parameter::new("$iMode", "Search mode when $sStart = $sEnd.").with_default("$STR_ENDISSTART"))
        .param(Parameter::new("$bCase", "False = case-insensitive. True = case-sensitive.").with_default("False")),
        FunctionSignature::new(
            "_StringExplode",
            "_StringExplode ( $sString, $sDelimiter [, $iLimit = 0] )",
            "Splits up a string into substrings depending on the given delimiters as PHP Explode v5.",
        )
        .returns("An array of substrings.")
        .param(Parameter::new("$sString", "String to be split."))
        .param(Parameter::new("$sDelimiter", "Delimiter to split on (split is performed on entire string, not individual characters)."))
        .param(Parameter::new("$iLimit", "Maximum elements to be returned. Negative values remove elements from the end.").with_default("0")),
        FunctionSignature::new(
            "_StringRepeat",
            "_StringRepeat ( $sString, $iRepeatCount )",
            "Repeats a string a specified number of times.",
        )
        .returns("Success: the repeated string. Failure: an empty string and sets the @error flag to non-zero.")
        .param(Parameter::new("$sString", "String to repeat."))
        .param(Parameter::new("$iRepeatCount", "Number of times to repeat the string.")),
        FunctionSignature::new(
            "_StringReverse",
            "_StringReverse ( $sString )",
            "Reverses the contents of the specified string.",
        )
        .returns("Success: the reversed string. Failure: an empty string and sets the @error flag to non-zero.")
        .param(Parameter::new("$sString", "String to reverse.")),
        FunctionSignature::new(
            "_StringTitleCase",
            "_StringTitleCase ( $sString )",
            "Changes a string to title case.",
        )
        .returns("The string with the first letter of each word capitalised.")
        .param(Parameter::new("$sString", "Input string.")),
        FunctionSignature::new(
            "_StringToHex",
            "_StringToHex ( $sString )",
            "Convert a string to a hex string.",
        )
        .returns("Success: a hex string. Failure: -1 and sets the @error flag to non-zero.")
        .param(Parameter::new("$sString", "String to be converted.")),
    ];

    LibraryModule::new("String", Some("String.au3"), defs.into_iter().collect())
}
