//! Date.au3 UDFs.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

const DATE_FORMAT: &str = "Input date in the format \"YYYY/MM/DD[ HH:MM:SS]\".";
const TYPE_CODES: &str = "D = day, M = month, Y = year, w = week, h = hour, n = minute, s = second.";

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        FunctionSignature::new(
            "_DateAdd",
            "_DateAdd ( $sType, $iNumber, $sDate )",
            "Calculates a new date/time by adding/subtracting a specified number of time intervals from an initial date/time.",
        )
        .returns(format!(
            "Success: date/time in the format \"YYYY/MM/DD[ HH:MM:SS]\".{}Failure: 0 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$sType", format!("Time interval to be used:{}{}", br(), TYPE_CODES)))
        .param(Parameter::new("$iNumber", "Number of intervals to be added/subtracted."))
        .param(Parameter::new("$sDate", DATE_FORMAT)),
        FunctionSignature::new(
            "_DateDiff",
            "_DateDiff ( $sType, $sStartDate, $sEndDate )",
            "Returns the difference between 2 dates, expressed in the type requested.",
        )
        .returns(format!(
            "Success: the difference between the 2 dates.{}Failure: 0 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$sType", format!("Time interval to be used:{}{}", br(), TYPE_CODES)))
        .param(Parameter::new("$sStartDate", DATE_FORMAT))
        .param(Parameter::new("$sEndDate", DATE_FORMAT)),
        FunctionSignature::new(
            "_IsLeapYear",
            "_IsLeapYear ( $iYear )",
            "Checks a given year to see if it is a leap year.",
        )
        .returns("True if the year is a leap year, False otherwise.")
        .param(Parameter::new("$iYear", "Year to check.")),
        FunctionSignature::new(
            "_NowCalc",
            "_NowCalc ( )",
            "Returns the current date and time in the format YYYY/MM/DD HH:MM:SS for use in date calculations.",
        )
        .returns("The current date and time."),
        FunctionSignature::new(
            "_NowDate",
            "_NowDate ( )",
            "Returns the current date in the PC's regional settings format.",
        )
        .returns("The current date."),
    ];

    LibraryModule::new("Date", Some("Date.au3"), defs.into_iter().collect())
}
