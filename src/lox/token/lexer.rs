//! Encapsulates all behaviour necessary to properly lex Lox code.
//!
//! Note: Lexing is also commonly categorized as tokenizing. The term "lexing"
//! is used for the module, yet the type doing the work carries the name the
//! Crafting Interpreters book gives it, [Scanner].
//!
//! ```rust
//! use lox_scanner::lox::token::lexer::{LexingError, Scanner};
//! use lox_scanner::lox::token::tokens::TokenType;
//!
//! let mut errors: Vec<LexingError> = Vec::new();
//! let tokens = Scanner::new("var x = \"foo\" + 20; @").scan_tokens(&mut errors);
//!
//! assert_eq!(tokens.len(), 8);
//! assert_eq!(tokens.last().map(|token| token.token_type), Some(TokenType::Eof));
//! assert_eq!(errors.len(), 1);
//! ```
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::str::FromStr;

use thiserror::Error;

use crate::lox::errors::ErrorReporter;
use crate::lox::token::tokens::{KEYWORDS, Token, TokenType};
use crate::lox::types::{Line, LoxLiteral};

/// Errors that can happen during lexing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexingError {
    /// Unknown symbol in the source code
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character, which was skipped.
        character: char,
        /// Line the character is on.
        line: Line,
    },
    /// A string was started but not terminated until the end of input/file
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line at which the input ended.
        line: Line,
    },
}

impl LexingError {
    /// The line this error is reported at.
    #[must_use]
    #[inline]
    pub const fn line(&self) -> Line {
        match *self {
            LexingError::UnexpectedCharacter { line, .. }
            | LexingError::UnterminatedString { line } => line,
        }
    }
}

/// Tokenizes the given source code of Lox into either a [Vec] of [`Tokens`](Token),
/// or returns all [`LexingErrors`](LexingError) if any did occur.
/// Thus, you cannot proceed with the list of tokens if lexing had any errors.
///
/// # Errors
///
/// Every lexing error that was reported while scanning, in source order.
#[inline]
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, Vec<LexingError>> {
    let mut errs: Vec<LexingError> = vec![];
    let tokens = Scanner::new(source.as_ref()).scan_tokens(&mut errs);

    if errs.is_empty() {
        Ok(tokens)
    } else {
        Err(errs)
    }
}

/// A single scan pass over a source string.
///
/// `start` and `current` are byte offsets into the source, and always sit on
/// character boundaries.
#[derive(Debug)]
pub struct Scanner<'src> {
    /// The source code being scanned.
    source: &'src str,
    /// Tokens found so far.
    tokens: Vec<Token>,
    /// Beginning of the lexeme being scanned now.
    start: usize,
    /// Next character to be read.
    current: usize,
    /// Current line, bumped on every consumed newline.
    line: Line,
    /// Line on which the lexeme being scanned now began.
    start_line: Line,
}

impl<'src> Scanner<'src> {
    /// Prepares a scan pass over the given source.
    #[must_use]
    #[inline]
    pub const fn new(source: &'src str) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scans the whole source, handing every lexing error to `reporter` as
    /// it is found. Scanning never stops early: the returned tokens always
    /// end with exactly one [`TokenType::Eof`].
    #[inline]
    pub fn scan_tokens<R: ErrorReporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Err(err) = self.scan_token() {
                reporter.report(err);
            }
        }

        self.tokens.push(Token::new(TokenType::Eof, String::new(), None, self.line));
        self.tokens
    }

    /// Lexes the lexeme starting at `start`, emitting at most one token.
    ///
    /// In case of an error, the characters stay consumed, so that lexing can continue
    /// past the error.
    fn scan_token(&mut self) -> Result<(), LexingError> {
        let Some(c) = self.next_char() else {
            return Ok(());
        };
        match c {
            // Grouping
            '(' => self.emit(TokenType::LeftParen),
            ')' => self.emit(TokenType::RightParen),
            '{' => self.emit(TokenType::LeftBrace),
            '}' => self.emit(TokenType::RightBrace),

            // Arith Operators
            '+' => self.emit(TokenType::Plus),
            '-' => self.emit(TokenType::Minus),
            '*' => self.emit(TokenType::Star),

            // Comments
            '/' if self.next_char_is('/') => {
                while self.next_char_if(|c| c != '\n').is_some() {
                    // a comment goes until the end of the line
                }
            }
            '/' => self.emit(TokenType::Slash),

            // Boolean Operators
            '!' if self.next_char_is('=') => self.emit(TokenType::BangEqual),
            '!'                           => self.emit(TokenType::Bang),
            '=' if self.next_char_is('=') => self.emit(TokenType::EqualEqual),
            '>' if self.next_char_is('=') => self.emit(TokenType::GreaterEqual),
            '>'                           => self.emit(TokenType::Greater),
            '<' if self.next_char_is('=') => self.emit(TokenType::LessEqual),
            '<'                           => self.emit(TokenType::Less),

            // Special Operators
            ',' => self.emit(TokenType::Comma),
            '.' => self.emit(TokenType::Dot),
            ';' => self.emit(TokenType::Semicolon),
            '=' => self.emit(TokenType::Equal),

            // Whitespace, newlines are counted by next_char
            ' ' | '\t' | '\r' | '\n' => {}

            // Literals
            '"' => self.string()?,
            c if is_digit(c) => self.number(),

            // Identifiers and Keywords
            c if is_alpha(c) => self.identifier(),

            // ERROR
            character => {
                return Err(LexingError::UnexpectedCharacter {
                    character,
                    line: self.line,
                });
            }
        }
        Ok(())
    }

    /// Scans the rest of a string literal, after its opening quote.
    /// Strings may span multiple lines.
    fn string(&mut self) -> Result<(), LexingError> {
        while self.next_char_if(|c| c != '"').is_some() {}

        if !self.next_char_is('"') {
            return Err(LexingError::UnterminatedString { line: self.line });
        }

        let value = self
            .lexeme()
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or_default()
            .to_owned();
        self.emit_literal(TokenType::String, LoxLiteral::String(value));
        Ok(())
    }

    /// Scans the rest of a number literal, after its first digit.
    /// A trailing `.` without a digit after it is not part of the number.
    fn number(&mut self) {
        while self.next_char_if(is_digit).is_some() {}

        if self.peek_next('.') && self.peek_two_ahead_matches(is_digit) {
            let _: Option<char> = self.next_char();
            while self.next_char_if(is_digit).is_some() {}
        }

        let value = f64::from_str(self.lexeme())
            .expect("a run of ASCII digits with an optional fraction is a valid float");
        self.emit_literal(TokenType::Number, LoxLiteral::Number(value));
    }

    /// Scans the rest of an identifier or keyword, after its first character.
    fn identifier(&mut self) {
        while self.next_char_if(is_alpha_num).is_some() {}

        let token_type = KEYWORDS
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenType::Identifier);
        self.emit(token_type);
    }

    /// Has the whole source been consumed?
    const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The source text of the lexeme being scanned now.
    fn lexeme(&self) -> &'src str {
        self.source.get(self.start..self.current).unwrap_or_default()
    }

    /// Emits a token without literal, spanning from `start` to `current`.
    fn emit(&mut self, token_type: TokenType) {
        self.push_token(token_type, None);
    }

    /// Emits a token carrying the given literal, spanning from `start` to `current`.
    fn emit_literal(&mut self, token_type: TokenType, literal: LoxLiteral) {
        self.push_token(token_type, Some(literal));
    }

    /// Pushes a finished token.
    fn push_token(&mut self, token_type: TokenType, literal: Option<LoxLiteral>) {
        let lexeme = self.lexeme().to_owned();
        self.tokens
            .push(Token::new(token_type, lexeme, literal, self.start_line));
    }

    /// Peeks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.source.get(self.current..)?.chars().next()
    }

    /// Gets the next character, updating the line value.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Neither can exceed the length of the source."
    )]
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Gets the next character only if it matches the predicate.
    fn next_char_if<F: Fn(char) -> bool>(&mut self, test: F) -> Option<char> {
        match self.peek() {
            Some(c) if test(c) => self.next_char(),
            _ => None,
        }
    }

    /// Consumes the next character only if it is exactly the supplied character.
    fn next_char_is(&mut self, expected: char) -> bool {
        self.next_char_if(|c| c == expected).is_some()
    }

    /// Peeks if the next character is equal to the given character.
    fn peek_next(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    /// Peeks if the character one beyond the next matches the predicate.
    fn peek_two_ahead_matches<F: Fn(char) -> bool>(&self, test: F) -> bool {
        self.source
            .get(self.current..)
            .and_then(|rest| rest.chars().nth(1))
            .is_some_and(test)
    }
}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Is the character in the ASCII alphabet?
#[inline]
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || (c == '_')
}

/// Is the character an alphanumeric ASCII character?
#[inline]
fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c == '_')
}

#[cfg(test)]
mod test {
    use super::{LexingError, Scanner};
    use crate::lox::errors::ErrorReporter;
    use crate::lox::token::tokens::Token;
    use crate::lox::token::tokens::TokenType::{self, *};
    use crate::lox::types::LoxLiteral;

    fn scan(source: &str) -> (Vec<Token>, Vec<LexingError>) {
        let mut errors: Vec<LexingError> = Vec::new();
        let tokens = Scanner::new(source).scan_tokens(&mut errors);
        (tokens, errors)
    }

    fn kinds(source: &str) -> Vec<TokenType> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected lexing errors: {errors:?}");
        tokens.into_iter().map(|token| token.token_type).collect()
    }

    fn kinds_of(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|token| token.token_type).collect()
    }

    fn literals(source: &str) -> Vec<Option<LoxLiteral>> {
        let (tokens, _) = scan(source);
        tokens.into_iter().map(|token| token.literal).collect()
    }

    #[test]
    fn simple_tokenizations() {
        assert_eq!(
            kinds("var foo = 20;"),
            vec![Var, Identifier, Equal, Number, Semicolon, Eof],
            "a plain declaration"
        );
    }

    #[test]
    fn single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus,
                Semicolon, Star, Slash, Eof
            ],
            "every punctuation character is its own token"
        );
    }

    #[test]
    fn operators_are_greedy() {
        assert_eq!(kinds("!="), vec![BangEqual, Eof], "`!=` is one token");
        assert_eq!(kinds("! ="), vec![Bang, Equal, Eof], "whitespace splits operators");
        assert_eq!(kinds("!a"), vec![Bang, Identifier, Eof], "`!` alone stays `!`");
        assert_eq!(kinds("==="), vec![EqualEqual, Equal, Eof], "`==` wins over `=`");
        assert_eq!(
            kinds("< <= > >="),
            vec![Less, LessEqual, Greater, GreaterEqual, Eof],
            "comparison operators"
        );
    }

    #[test]
    fn whitespace_never_produces_tokens() {
        assert_eq!(kinds("1+2"), kinds(" 1 +\t2\r"), "same kinds with whitespace");
        assert_eq!(literals("1+2"), literals("1 + 2"), "same literals with whitespace");
        assert_eq!(
            literals("1+2"),
            vec![
                Some(LoxLiteral::Number(1.0)),
                None,
                Some(LoxLiteral::Number(2.0)),
                None
            ],
            "numbers carry their values"
        );
        assert_eq!(kinds(""), vec![Eof], "empty input is only end of input");
    }

    #[test]
    fn comments_are_skipped() {
        let (tokens, errors) = scan("1 // comment\n2");
        assert!(errors.is_empty(), "comments are no errors");
        assert_eq!(kinds_of(&tokens), vec![Number, Number, Eof], "the comment is dropped");
        assert_eq!(
            tokens.last().map(|token| token.line),
            Some(2),
            "the newline after the comment is counted"
        );

        assert_eq!(kinds("// only a comment"), vec![Eof], "comment up to end of input");
        assert_eq!(
            kinds("1 / 2"),
            vec![Number, Slash, Number, Eof],
            "a lone slash divides"
        );
    }

    #[test]
    fn number_boundaries() {
        assert_eq!(kinds("123."), vec![Number, Dot, Eof], "trailing dot is separate");
        assert_eq!(
            literals("123."),
            vec![Some(LoxLiteral::Number(123.0)), None, None],
            "the number stops before the dot"
        );
        assert_eq!(
            literals("1.5"),
            vec![Some(LoxLiteral::Number(1.5)), None],
            "fractions are part of the number"
        );
        assert_eq!(kinds("-1"), vec![Minus, Number, Eof], "no signed literals");
        assert_eq!(
            kinds("1.foo"),
            vec![Number, Dot, Identifier, Eof],
            "a dot before a letter is a property access"
        );
    }

    #[test]
    fn strings_keep_quotes_in_lexeme_only() {
        let (tokens, errors) = scan("\"hello world\"");
        assert!(errors.is_empty(), "string is terminated");
        let string = tokens.first().expect("a string token");
        assert_eq!(string.token_type, String, "kind is STRING");
        assert_eq!(string.lexeme, "\"hello world\"", "lexeme keeps the quotes");
        assert_eq!(
            string.literal,
            Some(LoxLiteral::String("hello world".to_owned())),
            "literal drops the quotes"
        );

        assert_eq!(
            literals("\"\""),
            vec![Some(LoxLiteral::String(std::string::String::new())), None],
            "empty strings are fine"
        );
    }

    #[test]
    fn unterminated_string() {
        let (tokens, errors) = scan("\"abc");
        assert_eq!(
            errors,
            vec![LexingError::UnterminatedString { line: 1 }],
            "one report on line 1"
        );
        assert_eq!(kinds_of(&tokens), vec![Eof], "no partial string token");
    }

    #[test]
    fn unexpected_characters_are_skipped() {
        let (tokens, errors) = scan("1 @ 2\n#");
        assert_eq!(
            errors,
            vec![
                LexingError::UnexpectedCharacter {
                    character: '@',
                    line: 1
                },
                LexingError::UnexpectedCharacter {
                    character: '#',
                    line: 2
                },
            ],
            "each bad character is reported on its own line"
        );
        assert_eq!(
            kinds_of(&tokens),
            vec![Number, Number, Eof],
            "scanning resumes after a bad character"
        );
    }

    #[test]
    fn non_ascii_is_one_error_per_character() {
        let (tokens, errors) = scan("\u{e9}\"\u{fc}n\u{ef}\"");
        assert_eq!(
            errors,
            vec![LexingError::UnexpectedCharacter {
                character: '\u{e9}',
                line: 1
            }],
            "a multi-byte character is reported once"
        );
        assert_eq!(
            tokens.first().and_then(|token| token.literal.clone()),
            Some(LoxLiteral::String("\u{fc}n\u{ef}".to_owned())),
            "strings keep non-ASCII text"
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("classroom"), vec![Identifier, Eof], "longest identifier wins");
        assert_eq!(kinds("class"), vec![Class, Eof], "exact keyword");
        assert_eq!(kinds("Class"), vec![Identifier, Eof], "keywords are case-sensitive");
        assert_eq!(
            kinds("_foo1 bar_2"),
            vec![Identifier, Identifier, Eof],
            "underscores and digits in identifiers"
        );
        assert_eq!(
            kinds("and class else false fun for if nil or print return super this true var while"),
            vec![
                And, Class, Else, False, Fun, For, If, Nil, Or, Print, Return, Super, This,
                True, Var, While, Eof
            ],
            "every keyword"
        );

        let (tokens, _) = scan("orchid");
        assert_eq!(
            tokens.first().map(|token| token.lexeme.as_str()),
            Some("orchid"),
            "identifier lexeme"
        );
        assert_eq!(
            tokens.first().and_then(|token| token.literal.clone()),
            None,
            "identifiers have no literal"
        );
    }

    #[test]
    fn line_tracking() {
        let (tokens, errors) = scan("var a = \"one\ntwo\nthree\";\nprint a;");
        assert!(errors.is_empty(), "multi-line strings are fine");
        let lines: Vec<(TokenType, usize)> = tokens
            .iter()
            .map(|token| (token.token_type, token.line))
            .collect();
        assert_eq!(
            lines,
            vec![
                (Var, 1),
                (Identifier, 1),
                (Equal, 1),
                (String, 1),
                (Semicolon, 3),
                (Print, 4),
                (Identifier, 4),
                (Semicolon, 4),
                (Eof, 4)
            ],
            "tokens after a multi-line string are on later lines"
        );
    }

    #[test]
    fn unterminated_string_reports_the_last_line() {
        let (_, errors) = scan("\"one\ntwo");
        assert_eq!(
            errors,
            vec![LexingError::UnterminatedString { line: 2 }],
            "reported where the input ran out"
        );
    }

    #[test]
    fn tokenize_requires_a_clean_scan() {
        assert_eq!(
            super::tokenize("1 + 2").map(|tokens| tokens.len()),
            Ok(4),
            "clean input gives all tokens"
        );
        assert_eq!(
            super::tokenize("1 + $").map(|tokens| tokens.len()),
            Err(vec![LexingError::UnexpectedCharacter {
                character: '$',
                line: 1
            }]),
            "any error gives only the errors"
        );
    }

    /// Remembers the line and message of every report.
    #[derive(Default)]
    struct Recorder(Vec<(usize, std::string::String)>);

    impl ErrorReporter for Recorder {
        fn report(&mut self, error: LexingError) {
            self.0.push((error.line(), error.to_string()));
        }
    }

    #[test]
    fn errors_go_to_the_injected_reporter() {
        let mut recorder = Recorder::default();
        let tokens = Scanner::new("a\n?\n\"b").scan_tokens(&mut recorder);
        assert_eq!(
            recorder.0,
            vec![
                (2, "Unexpected character.".to_owned()),
                (3, "Unterminated string.".to_owned())
            ],
            "line and message of every error"
        );
        assert_eq!(tokens.len(), 2, "identifier and end of input");
    }
}
