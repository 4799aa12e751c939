//! Array.au3 UDFs.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

const ARRAY_PARAM: &str = "Array to modify.";

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        FunctionSignature::new(
            "_ArrayAdd",
            "_ArrayAdd ( ByRef $aArray, $vValue [, $iStart = 0 [, $sDelim_Item = \"|\" [, $sDelim_Row = @CRLF [, $iForce = $ARRAYFILL_FORCE_DEFAULT]]]] )",
            "Adds a specified value at the end of an existing 1D or 2D array.",
        )
        .returns(format!(
            "Success: the index of last added item.{}Failure: -1 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$aArray", ARRAY_PARAM))
        .param(Parameter::new("$vValue", "Value(s) to add - can be a single item, a delimited string or an array."))
        .param(Parameter::new("$iStart", "Column in which addition is to begin (2D array only).").with_default("0"))
        .param(Parameter::new("$sDelim_Item", "Delimiter used to split items.").with_default("\"|\""))
        .param(Parameter::new("$sDelim_Row", "Delimiter used to split rows (2D only).").with_default("@CRLF"))
        .param(Parameter::new("$iForce", "Force $vValue to be added as a single item or array.").with_default("$ARRAYFILL_FORCE_DEFAULT")),
        FunctionSignature::new(
            "_ArrayDelete",
            "_ArrayDelete ( ByRef $aArray, $vRange )",
            "Deletes specified element(s) from a 1D or 2D array.",
        )
        .returns(format!(
            "Success: the number of elements in the array after deletion.{}Failure: -1 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$aArray", ARRAY_PARAM))
        .param(Parameter::new("$vRange", "Element(s) to delete - either a single index, a range string or a 1D array.")),
        FunctionSignature::new(
            "_ArrayDisplay",
            "_ArrayDisplay ( Const ByRef $aArray [, $sTitle = \"ArrayDisplay\" [, $sArrayRange = \"\" [, $iFlags = 0 [, $vUser_Separator = Default [, $sHeader = Default [, $iMax_ColWidth = Default]]]]]] )",
            "Displays a 1D or 2D array in a ListView.",
        )
        .param(Parameter::new("$aArray", "Array to display."))
        .param(Parameter::new("$sTitle", "Title for dialog.").with_default("\"ArrayDisplay\""))
        .param(Parameter::new("$sArrayRange", "Range of rows/columns to display.").with_default("\"\""))
        .param(Parameter::new("$iFlags", "Determine UDF options. Add required values together.").with_default("0"))
        .param(Parameter::new("$vUser_Separator", "Sets column display option when copying data to clipboard.").with_default("Default"))
        .param(Parameter::new("$sHeader", "Column names in header (string of names separated by current separator character).").with_default("Default"))
        .param(Parameter::new("$iMax_ColWidth", "Max width to which a ListView column will expand to show content.").with_default("Default")),
        FunctionSignature::new(
            "_ArrayReverse",
            "_ArrayReverse ( ByRef $aArray [, $iStart = 0 [, $iEnd = 0]] )",
            "Takes the given array and reverses the order in which the elements appear in a 1D array.",
        )
        .returns("Success: 1. Failure: 0 and sets the @error flag to non-zero.")
        .param(Parameter::new("$aArray", ARRAY_PARAM))
        .param(Parameter::new("$iStart", "Index of array to start modifying at.").with_default("0"))
        .param(Parameter::new("$iEnd", "Index of array to stop modifying at.").with_default("0")),
        FunctionSignature::new(
            "_ArraySearch",
            "_ArraySearch ( Const ByRef $aArray, $vValue [, $iStart = 0 [, $iEnd = 0 [, $iCase = 0 [, $iCompare = 0 [, $iForward = 1 [, $iSubItem = -1 [, $bRow = False]]]]]]] )",
            "Finds an entry within a 1D or 2D array. Similar to _ArrayBinarySearch(), except that the array does not need to be sorted.",
        )
        .returns(format!(
            "Success: the index where the search criteria was found.{}Failure: -1 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$aArray", "The array to search."))
        .param(Parameter::new("$vValue", "What to search $aArray for."))
        .param(Parameter::new("$iStart", "Index of array to start searching at.").with_default("0"))
        .param(Parameter::new("$iEnd", "Index of array to stop searching at.").with_default("0"))
        .param(Parameter::new("$iCase", "If set to 1, search is case sensitive.").with_default("0"))
        .param(Parameter::new("$iCompare", "Comparison mode.").with_default("0"))
        .param(Parameter::new("$iForward", "If set to 0, searches the array from end to beginning.").with_default("1"))
        .param(Parameter::new("$iSubItem", "Sub-index to search on in 2D arrays.").with_default("-1"))
        .param(Parameter::new("$bRow", "If True then $iSubItem sets the row to search.").with_default("False")),
        FunctionSignature::new(
            "_ArraySort",
            "_ArraySort ( ByRef $aArray [, $iDescending = 0 [, $iStart = 0 [, $iEnd = 0 [, $iSubItem = 0 [, $iPivot = 0]]]]] )",
            "Sort a 1D or 2D array on a specific index using the quicksort/insertionsort algorithms.",
        )
        .returns("Success: 1. Failure: 0 and sets the @error flag to non-zero.")
        .param(Parameter::new("$aArray", "Array to sort."))
        .param(Parameter::new("$iDescending", "If set to 1, sort in descending order.").with_default("0"))
        .param(Parameter::new("$iStart", "Index of array to start sorting at.").with_default("0"))
        .param(Parameter::new("$iEnd", "Index of array to stop sorting at.").with_default("0"))
        .param(Parameter::new("$iSubItem", "Sub-index to sort on in 2D arrays.").with_default("0"))
        .param(Parameter::new("$iPivot", "1 = Use pivot sort algorithm.").with_default("0")),
        FunctionSignature::new(
            "_ArrayToString",
            "_ArrayToString ( Const ByRef $aArray [, $sDelim_Col = \"|\" [, $iStart_Row = -1 [, $iEnd_Row = -1 [, $sDelim_Row = @CRLF [, $iStart_Col = -1 [, $iEnd_Col = -1]]]]]] )",
            "Places the elements of a 1D or 2D array into a single string, separated by the specified delimiters.",
        )
        .returns("Success: the string which combined selected elements separated by the delimiters.")
        .param(Parameter::new("$aArray", "Array to combine."))
        .param(Parameter::new("$sDelim_Col", "Delimiter for combined string.").with_default("\"|\""))
        .param(Parameter::new("$iStart_Row", "Index of array to start combining at.").with_default("-1"))
        .param(Parameter::new("$iEnd_Row", "Index of array to stop combining at.").with_default("-1"))
        .param(Parameter::new("$sDelim_Row", "Delimiter for 2D arrays.").with_default("@CRLF"))
        .param(Parameter::new("$iStart_Col", "Index of column to start combining at.").with_default("-1"))
        .param(Parameter::new("$iEnd_Col", "Index of column to stop combining at.").with_default("-1")),
        FunctionSignature::new(
            "_ArrayUnique",
            "_ArrayUnique ( Const ByRef $aArray [, $iColumn = 0 [, $iBase = 0 [, $iCase = 0 [, $iCount = $ARRAYUNIQUE_COUNT [, $iIntType = $ARRAYUNIQUE_AUTO]]]]] )",
            "Returns the unique elements of a 1D or 2D array column.",
        )
        .returns("Success: a 1-dimensional array containing only the unique elements of that column.")
        .param(Parameter::new("$aArray", "Array to process."))
        .param(Parameter::new("$iColumn", "1D arrays only 0. 2D arrays the column to search.").with_default("0"))
        .param(Parameter::new("$iBase", "Start index of the array. 0 or 1.").with_default("0"))
        .param(Parameter::new("$iCase", "Flag to indicate if the operations should be case sensitive.").with_default("0"))
        .param(Parameter::new("$iCount", "Flag to determine if [0] element holds a count of returned items.").with_default("$ARRAYUNIQUE_COUNT"))
        .param(Parameter::new("$iIntType", "Flag to change how 64-bit integers are handled.").with_default("$ARRAYUNIQUE_AUTO")),
    ];

    LibraryModule::new("Array", Some("Array.au3"), defs.into_iter().collect())
}
