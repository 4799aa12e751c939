//! Math.au3 UDFs.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        FunctionSignature::new(
            "_Degree",
            "_Degree ( $iRadians )",
            "Converts radians to degrees.",
        )
        .returns(format!(
            "Success: degrees equivalent to the given radians.{}Failure: sets the @error flag to non-zero if the parameter is not a number.",
            br()
        ))
        .param(Parameter::new("$iRadians", "Radians to be converted into degrees.")),
        FunctionSignature::new(
            "_MathCheckDiv",
            "_MathCheckDiv ( $iNum1 [, $iNum2 = 2] )",
            "Checks if first number is divisible by the second number.",
        )
        .returns(format!(
            "Success: $MATH_ISNOTDIVISIBLE (1) or $MATH_ISDIVISIBLE (2).{}Failure: -1 and sets the @error flag to 1 if a parameter is not an integer.",
            br()
        ))
        .param(Parameter::new("$iNum1", "Number to check."))
        .param(Parameter::new("$iNum2", "Number to divide by.").with_default("2")),
        FunctionSignature::new(
            "_Max",
            "_Max ( $iNum1, $iNum2 )",
            "Evaluates which of the two numbers is higher.",
        )
        .returns("The higher of the two numbers.")
        .param(Parameter::new("$iNum1", "First number."))
        .param(Parameter::new("$iNum2", "Second number.")),
        FunctionSignature::new(
            "_Min",
            "_Min ( $iNum1, $iNum2 )",
            "Evaluates which of the two numbers is lower.",
        )
        .returns("The lower of the two numbers.")
        .param(Parameter::new("$iNum1", "First number."))
        .param(Parameter::new("$iNum2", "Second number.")),
        FunctionSignature::new(
            "_Radian",
            "_Radian ( $iDegrees )",
            "Converts degrees to radians.",
        )
        .returns(format!(
            "Success: radians equivalent to the given degrees.{}Failure: sets the @error flag to non-zero if the parameter is not a number.",
            br()
        ))
        .param(Parameter::new("$iDegrees", "Degrees to be converted into radians.")),
    ];

    LibraryModule::new("Math", Some("Math.au3"), defs.into_iter().collect())
}
