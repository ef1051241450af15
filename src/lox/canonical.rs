//! Helper functionality to print tokens exactly like the book's reference
//! implementation does, so output can be diffed against the official test suite.

use crate::lox::token::tokens::Token;
use crate::lox::types::LoxLiteral;

/// One-line rendering in the reference format: `<KIND> <lexeme> <literal>`,
/// with `null` standing in for a missing literal.
pub trait LoxStdDisplay {
    /// Renders the value in the reference format.
    fn std_display(&self) -> String;
}

impl LoxStdDisplay for Token {
    #[inline]
    fn std_display(&self) -> String {
        let Token {
            token_type,
            ref lexeme,
            ref literal,
            ..
        } = *self;

        match *literal {
            Some(LoxLiteral::Number(value)) => format!("{token_type} {lexeme} {value:?}"),
            Some(LoxLiteral::String(ref value)) => format!("{token_type} {lexeme} {value}"),
            None => format!("{token_type} {lexeme} null"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::LoxStdDisplay;
    use crate::lox::token::lexer::tokenize;

    fn std_lines(source: &str) -> Vec<String> {
        tokenize(source)
            .expect("Tokenizing failed")
            .iter()
            .map(LoxStdDisplay::std_display)
            .collect()
    }

    #[test]
    fn reference_format() {
        assert_eq!(
            std_lines("var answer = 42.5;\nprint \"done\";"),
            vec![
                "VAR var null",
                "IDENTIFIER answer null",
                "EQUAL = null",
                "NUMBER 42.5 42.5",
                "SEMICOLON ; null",
                "PRINT print null",
                "STRING \"done\" done",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn integral_numbers_keep_their_fraction() {
        assert_eq!(std_lines("123"), vec!["NUMBER 123 123.0", "EOF  null"]);
    }
}
