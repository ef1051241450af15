//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::process::ExitCode;

use itertools::Itertools;

use crate::lox::token::lexer::LexingError;

/// Receives the lexing errors of a scan pass, one by one, as they are found.
///
/// The scanner itself never prints anything or stops on an error; it is up to
/// the reporter to decide what happens to them.
pub trait ErrorReporter {
    /// Takes note of a single error. Each error carries its line, and
    /// displays as its message.
    fn report(&mut self, error: LexingError);
}

/// Collects all errors, in the order they were reported.
impl ErrorReporter for Vec<LexingError> {
    #[inline]
    fn report(&mut self, error: LexingError) {
        self.push(error);
    }
}

/// An error that occurred inside the Lox engine.
///
/// To support the [`std::process::Termination`] trait such that, just like
/// the Crafting Interpreters book, we can use exit codes as specified by
/// the [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// An error in how the tool is called.
    UsageError(String),
    /// Errors that happened when trying to load the file
    /// or read the REPL line.
    FileError(IOError),
    /// Errors that happened during the lexing phase.
    LexingErrors(Vec<LexingError>),
}

impl EngineError {
    /// Turns the error into a String that can be printed to standard error.
    /// Lexing errors are printed one per line, as `[line <n>] Error: <message>`.
    #[must_use]
    #[inline]
    pub fn display_error(&self) -> String {
        match *self {
            EngineError::UsageError(ref usage) => usage.trim_end().to_owned(),
            EngineError::FileError(ref error) => format!("Error reading source file: {error}"),
            EngineError::LexingErrors(ref errs) => errs
                .iter()
                .map(|err| format!("[line {}] Error: {err}", err.line()))
                .join("\n"),
        }
    }

    /// The sysexits code this error should end the process with.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            EngineError::UsageError(_) => 64, // EX_USAGE
            // Technically, 66 only specifies missing or unreadable files
            // any other errors during I/O for both the file, and the REPL command,
            // should be presented as 74, EX_IOERR
            EngineError::FileError(_) => 66,    // EX_NOINPUT
            EngineError::LexingErrors(_) => 65, // EX_DATAERR
        }
    }
}

impl From<IOError> for EngineError {
    #[inline]
    fn from(value: IOError) -> Self {
        EngineError::FileError(value)
    }
}

impl From<Vec<LexingError>> for EngineError {
    #[inline]
    fn from(value: Vec<LexingError>) -> Self {
        EngineError::LexingErrors(value)
    }
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_code())
    }
}

// Continuation helpers for the REPL

/// Whether an error occurred because the input was too short.
/// Such errors can be recoverable by allowing further input on the REPL.
pub trait UnterminatedError {
    /// Was this error caused by sudden end of input?
    fn is_unterminated(&self) -> bool;
}

impl UnterminatedError for EngineError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        if let EngineError::LexingErrors(ref errs) = *self {
            errs.is_unterminated()
        } else {
            false
        }
    }
}

impl UnterminatedError for [LexingError] {
    #[inline]
    fn is_unterminated(&self) -> bool {
        matches!(*self, [ref err] if err.is_unterminated())
    }
}

impl UnterminatedError for LexingError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        match *self {
            LexingError::UnexpectedCharacter { .. } => false,
            LexingError::UnterminatedString { .. } => true,
        }
    }
}
