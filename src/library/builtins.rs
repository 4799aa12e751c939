//! AutoIt built-in functions.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        // ==================== Console & Dialogs ====================
        FunctionSignature::new(
            "ConsoleWrite",
            "ConsoleWrite ( \"data\" )",
            "Writes data to the STDOUT stream. Some text editors can read this stream as can other programs which may be expecting data on this stream.",
        )
        .returns("The amount of data written.")
        .param(Parameter::new("\"data\"", "The data you wish to output. This may either be text or binary.")),
        FunctionSignature::new(
            "MsgBox",
            "MsgBox ( flag, \"title\", \"text\" [, timeout = 0 [, hwnd]] )",
            "Displays a simple message box with optional timeout.",
        )
        .returns(format!(
            "Success: the ID of the button pressed.{}Failure: $IDTIMEOUT (-1) if the message box timed out.",
            br()
        ))
        .param(Parameter::new("flag", "The flag indicates the type of message box and the possible button combinations."))
        .param(Parameter::new("\"title\"", "The title of the message box."))
        .param(Parameter::new("\"text\"", "The text of the message box."))
        .param(Parameter::new("timeout", "Timeout in seconds. After the timeout has elapsed the message box will close automatically.").with_default("0"))
        .param(Parameter::optional("hwnd", "The window handle to use as the parent for this dialog.")),
        FunctionSignature::new(
            "InputBox",
            "InputBox ( \"title\", \"prompt\" [, \"default\" [, \"password char\" [, width = -1 [, height = -1 [, left = Default [, top = Default [, timeout = 0 [, hwnd]]]]]]]] )",
            "Displays an input box to ask the user to enter a string.",
        )
        .returns("Success: the string that was entered.")
        .param(Parameter::new("\"title\"", "The title of the input box."))
        .param(Parameter::new("\"prompt\"", "A message to the user indicating what kind of input is expected."))
        .param(Parameter::optional("\"default\"", "The value that the input box starts with."))
        .param(Parameter::optional("\"password char\"", "The character to replace all typed characters with."))
        .param(Parameter::new("width", "The width of the window.").with_default("-1"))
        .param(Parameter::new("height", "The height of the window.").with_default("-1"))
        .param(Parameter::new("left", "The left side of the input box. By default, the box is centered.").with_default("Default"))
        .param(Parameter::new("top", "The top of the input box. By default, the box is centered.").with_default("Default"))
        .param(Parameter::new("timeout", "How many seconds to wait before automatically cancelling the InputBox.").with_default("0"))
        .param(Parameter::optional("hwnd", "The window handle to use as the parent for this dialog.")),
        // ==================== Strings ====================
        FunctionSignature::new(
            "StringLen",
            "StringLen ( \"string\" )",
            "Returns the number of characters in a string.",
        )
        .returns("The length of the string.")
        .param(Parameter::new("\"string\"", "The string to evaluate.")),
        FunctionSignature::new(
            "StringLeft",
            "StringLeft ( \"string\", count )",
            "Returns a number of characters from the left-hand side of a string.",
        )
        .returns("The leftmost count characters of the string.")
        .param(Parameter::new("\"string\"", "The string to evaluate."))
        .param(Parameter::new("count", "The number of characters to get.")),
        FunctionSignature::new(
            "StringReplace",
            "StringReplace ( \"string\", \"searchstring/start\", \"replacestring\" [, occurrence = 0 [, casesense = 0]] )",
            "Replaces substrings in a string.",
        )
        .returns("The new string. The number of replacements performed is stored in @extended.")
        .param(Parameter::new("\"string\"", "The string to evaluate."))
        .param(Parameter::new("\"searchstring/start\"", "The substring to search for or the character position to start the replacement."))
        .param(Parameter::new("\"replacestring\"", "The replacement string."))
        .param(Parameter::new("occurrence", "The number of times to replace the searchstring. Use a negative occurrence to replace from the right side.").with_default("0"))
        .param(Parameter::new("casesense", format!("Flag to indicate if the operations should be case sensitive.{}$STR_NOCASESENSE (0) = not case sensitive", br())).with_default("0")),
        FunctionSignature::new(
            "StringSplit",
            "StringSplit ( \"string\", \"delimiters\" [, flag = 0] )",
            "Splits up a string into substrings depending on the given delimiters.",
        )
        .returns("An array, by default the first element ($aArray[0]) contains the number of strings returned.")
        .param(Parameter::new("\"string\"", "The string to evaluate."))
        .param(Parameter::new("\"delimiters\"", "One or more characters to use as delimiters (case sensitive)."))
        .param(Parameter::new("flag", "Changes how the string split works, flags can be added together.").with_default("0")),
        // ==================== Process & Windows ====================
        FunctionSignature::new(
            "Sleep",
            "Sleep ( delay )",
            "Pause script execution.",
        )
        .param(Parameter::new("delay", "Amount of time to pause (in milliseconds).")),
        FunctionSignature::new(
            "Run",
            "Run ( \"program\" [, \"workingdir\" [, show_flag [, opt_flag]]] )",
            "Runs an external program.",
        )
        .returns(format!(
            "Success: the PID of the process that was launched.{}Failure: 0 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("\"program\"", "The full path of the program (EXE, BAT, COM, or PIF) to run."))
        .param(Parameter::optional("\"workingdir\"", "The working directory. This is not the path to the program."))
        .param(Parameter::optional("show_flag", "The \"show\" flag of the executed program."))
        .param(Parameter::optional("opt_flag", "Controls various options related to how the parent and child process interact.")),
        FunctionSignature::new(
            "WinActivate",
            "WinActivate ( \"title\" [, \"text\"] )",
            "Activates (gives focus to) a window.",
        )
        .returns("Success: the handle of the window.")
        .param(Parameter::new("\"title\"", "The title/hWnd/class of the window to activate."))
        .param(Parameter::optional("\"text\"", "The text of the window to activate.")),
        FunctionSignature::new(
            "WinWait",
            "WinWait ( \"title\" [, \"text\" [, timeout = 0]] )",
            "Pauses execution of the script until the requested window exists.",
        )
        .returns("Success: the handle to the requested window.")
        .param(Parameter::new("\"title\"", "The title/hWnd/class of the window to check."))
        .param(Parameter::optional("\"text\"", "The text of the window to check."))
        .param(Parameter::new("timeout", "Timeout in seconds if the window is not found.").with_default("0")),
        FunctionSignature::new(
            "Send",
            "Send ( \"keys\" [, flag = 0] )",
            "Sends simulated keystrokes to the active window.",
        )
        .param(Parameter::new("\"keys\"", "The sequence of keys to send."))
        .param(Parameter::new("flag", "Changes how \"keys\" is processed.").with_default("0")),
        // ==================== Math ====================
        FunctionSignature::new(
            "Random",
            "Random ( [Min = 0 [, Max = 1 [, Flag = 0]]] )",
            "Generates a pseudo-random float-type number.",
        )
        .returns("Success: a pseudo-random number.")
        .param(Parameter::new("Min", "The smallest number to be generated.").with_default("0"))
        .param(Parameter::new("Max", "The largest number to be generated.").with_default("1"))
        .param(Parameter::new("Flag", "If this is set to 1 then an integer result will be returned.").with_default("0")),
        FunctionSignature::new(
            "Round",
            "Round ( expression [, decimalplaces] )",
            "Returns a number rounded to a specified number of decimal places.",
        )
        .returns("The rounded number.")
        .param(Parameter::new("expression", "Any valid numeric expression."))
        .param(Parameter::optional("decimalplaces", "Number indicating how many places to the right of the decimal are included in the rounding.")),
        FunctionSignature::new(
            "Abs",
            "Abs ( expression )",
            "Calculates the absolute value of a number.",
        )
        .returns("The absolute value of the number.")
        .param(Parameter::new("expression", "Any valid numeric expression.")),
    ];

    LibraryModule::new("AutoIt", None, defs.into_iter().collect())
}
