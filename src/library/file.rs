//! File.au3 UDFs.

use crate::format::br;
use crate::types::{FunctionSignature, Parameter};

use super::LibraryModule;

pub(super) fn module() -> LibraryModule {
    let defs = vec![
        FunctionSignature::new(
            "_FileCountLines",
            "_FileCountLines ( $sFilePath )",
            "Returns the number of lines in the specified file.",
        )
        .returns(format!(
            "Success: number of lines in the file.{}Failure: 0 and sets the @error flag to non-zero.",
            br()
        ))
        .param(Parameter::new("$sFilePath", "Path and filename of the file to be read.")),
        FunctionSignature::new(
            "_FileListToArray",
            "_FileListToArray ( $sFilePath [, $sFilter = \"*\" [, $iFlag = $FLTA_FILESFOLDERS [, $bReturnPath = False]]] )",
            "Lists files and\\or folders in a specified folder (Similar to using Dir with the /B Switch).",
        )
        .returns("Success: a 1-based array containing the files and/or folders.")
        .param(Parameter::new("$sFilePath", "Folder to generate filelist for."))
        .param(Parameter::new("$sFilter", "The filter to use, wildcards (* and ?) are supported.").with_default("\"*\""))
        .param(Parameter::new("$iFlag", "Specifies whether to return files, folders or both.").with_default("$FLTA_FILESFOLDERS"))
        .param(Parameter::new("$bReturnPath", "If True the full path is appended to the file\\folder name.").with_default("False")),
        FunctionSignature::new(
            "_FileReadToArray",
            "_FileReadToArray ( $sFilePath, ByRef $vReturn [, $iFlags = $FRTA_COUNT [, $sDelimiter = \"\"]] )",
            "Reads the specified file into an array.",
        )
        .returns("Success: 1. Failure: 0 and sets the @error flag to non-zero.")
        .param(Parameter::new("$sFilePath", "Path and filename of the file to be read."))
        .param(Parameter::new("$vReturn", "Variable to hold returned data."))
        .param(Parameter::new("$iFlags", "Add multiple values together as required.").with_default("$FRTA_COUNT"))
        .param(Parameter::new("$sDelimiter", "Used to further split each line into a 2D array.").with_default("\"\"")),
        FunctionSignature::new(
            "_FileWriteLog",
            "_FileWriteLog ( $sLogPath, $sLogMsg [, $iFlag = -1] )",
            "Writes current date, time and the specified text to a log file.",
        )
        .returns("Success: 1. Failure: 0 and sets the @error flag to non-zero.")
        .param(Parameter::new("$sLogPath", "Path and filename of the file to be written to, or a file handle."))
        .param(Parameter::new("$sLogMsg", "Message to be written to the log file."))
        .param(Parameter::new("$iFlag", "Flag that defines if $sLogMsg will be written to the end of file, or to the beginning.").with_default("-1")),
        FunctionSignature::new(
            "_PathSplit",
            "_PathSplit ( $sFilePath, ByRef $sDrive, ByRef $sDir, ByRef $sFileName, ByRef $sExtension )",
            "Splits a path into the drive, directory, file name and file extension parts. An empty string is set if a part is missing.",
        )
        .returns("An array with 5 elements: the full path, drive, directory, file name and extension.")
        .param(Parameter::new("$sFilePath", "The path to be split."))
        .param(Parameter::new("$sDrive", "String to hold the drive."))
        .param(Parameter::new("$sDir", "String to hold the directory."))
        .param(Parameter::new("$sFileName", "String to hold the file name."))
        .param(Parameter::new("$sExtension", "String to hold the file extension.")),
    ];

    LibraryModule::new("File", Some("File.au3"), defs.into_iter().collect())
}
