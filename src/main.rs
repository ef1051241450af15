//! Command-line driver for the Lox scanner: scans a file, or every line typed
//! at a prompt, and prints the resulting tokens.
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
)]

use clap::{Parser, Subcommand, ValueEnum};

use lox_scanner::lox::canonical::LoxStdDisplay;
use lox_scanner::lox::errors::{EngineError, UnterminatedError};
use lox_scanner::lox::token::lexer::{LexingError, Scanner};
use lox_scanner::lox::token::tokens::Token;

use std::fs;
use std::io::{Error as IOError, Write};
use std::process::{ExitCode, Termination};

/// Load a file, scan it and print its tokens.
/// Lexing errors are returned after all tokens have been printed.
fn run_file(file: &str, format: TokenFormat) -> Result<(), EngineError> {
    let source = fs::read_to_string(file)?;
    let mut errors: Vec<LexingError> = Vec::new();
    let tokens = Scanner::new(&source).scan_tokens(&mut errors);

    for token in &tokens {
        println!("{}", format.render(token));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::LexingErrors(errors))
    }
}

/// What the prompt prints for one complete piece of input.
#[derive(Debug, PartialEq)]
struct PromptOutput {
    /// Rendered tokens, one per line on standard output.
    tokens: Vec<String>,
    /// Rendered lexing errors for standard error, if there were any.
    diagnostics: Option<String>,
}

impl PromptOutput {
    /// Prints the diagnostics first, then the tokens.
    fn print(&self) {
        if let Some(ref diagnostics) = self.diagnostics {
            eprintln!("{diagnostics}");
        }
        for token in &self.tokens {
            println!("{token}");
        }
    }
}

/// Scans the input collected by the prompt so far, without its final line terminator.
///
/// Returns `None` if the input ends inside a string literal and `more_input`
/// allows to continue it on the next line. Once input has ended, everything
/// is reported as is.
fn scan_prompt_input(input: &str, more_input: bool, format: TokenFormat) -> Option<PromptOutput> {
    let source = input.trim_end_matches(['\n', '\r']);
    let mut errors: Vec<LexingError> = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);

    if more_input && errors.is_unterminated() {
        return None;
    }
    Some(PromptOutput {
        tokens: tokens.iter().map(|token| format.render(token)).collect(),
        diagnostics: (!errors.is_empty())
            .then(|| EngineError::LexingErrors(errors).display_error()),
    })
}

/// Run the REPL Prompt.
///
/// A line that ends inside a string literal is continued on the next one.
fn run_prompt(format: TokenFormat) -> Result<(), IOError> {
    use std::io::{stdin, stdout};

    let mut input = String::new();
    let mut line = String::new();
    let stdin = stdin();
    loop {
        print!("{}", if input.is_empty() { "> " } else { "| " });
        stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // a string left open at end of input is reported, not dropped
            if !input.is_empty() {
                println!();
                if let Some(output) = scan_prompt_input(&input, false, format) {
                    output.print();
                }
            }
            return Ok(());
        }
        input.push_str(&line);

        if let Some(output) = scan_prompt_input(&input, true, format) {
            output.print();
            input.clear();
        }
    }
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{}", err.display_error());
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<E> From<Result<(), E>> for EngineResult
where
    EngineError: From<E>,
{
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// How tokens are printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum TokenFormat {
    /// `Token(type=NUMBER, lexeme='1', literal=1.0, line=1)`
    #[default]
    Display,
    /// `NUMBER 1 1.0`, as printed by the reference test suite.
    Canonical,
    /// Rust's debug representation.
    Debug,
}

impl TokenFormat {
    /// Renders a single token in this format.
    fn render(self, token: &Token) -> String {
        match self {
            TokenFormat::Display => token.to_string(),
            TokenFormat::Canonical => token.std_display(),
            TokenFormat::Debug => format!("{token:?}"),
        }
    }
}

/// lox-scanner turns Lox source code into tokens, either from a file or
/// line by line from an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LoxArgs {
    /// Subcommands, optional: without one, [`source_file`] is scanned,
    /// or the prompt is started if that is missing as well.
    #[command(subcommand)]
    command: Option<LoxCommands>,

    /// Source File for the program
    source_file: Option<String>,

    /// How to print the tokens.
    #[arg(long, value_enum, env = "LOX_TOKEN_FORMAT", default_value_t, global = true)]
    format: TokenFormat,
}

/// Available commands in Lox-Scanner
#[derive(Subcommand, Debug)]
enum LoxCommands {
    /// run the lox repl, printing the tokens of every line.
    Repl,
    /// tokenize the given file and print its contents.
    Tokenize {
        source_file: String,
    },
}

fn main() -> EngineResult {
    let LoxArgs {
        command,
        source_file,
        format,
    } = match LoxArgs::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => return err.print().into(),
        Err(err) => return EngineResult::Err(EngineError::UsageError(err.to_string())),
    };

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(LoxCommands::Tokenize { source_file }), _) => run_file(&source_file, format).into(),

        (Some(LoxCommands::Repl), _)
        | (None, None) => run_prompt(format).into(),
    }
}
