//! Data types representing tokens available in the Lox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lox::types::{Line, LoxLiteral};
use crate::lox::util::map;

/// Lookup table for keywords to distinguish them from identifiers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    map! {
        "nil"    => TokenType::Nil,
        "false"  => TokenType::False,
        "true"   => TokenType::True,

        "and"    => TokenType::And,
        "or"     => TokenType::Or,

        "if"     => TokenType::If,
        "else"   => TokenType::Else,
        "for"    => TokenType::For,
        "while"  => TokenType::While,
        "return" => TokenType::Return,

        "class"  => TokenType::Class,
        "fun"    => TokenType::Fun,
        "var"    => TokenType::Var,

        "print"  => TokenType::Print,
        "super"  => TokenType::Super,
        "this"   => TokenType::This,
    }
});

/// The closed set of kinds a token can have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the token set of Lox is fixed, and downstream matches should stay exhaustive."
)]
pub enum TokenType {
    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    // Arith Operators
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"/"`, never the start of a `//` comment.
    Slash,
    /// `"*"`
    Star,

    // Boolean Operators
    /// `"!"`
    Bang,
    /// `"!="`
    BangEqual,
    /// `"=="`
    EqualEqual,
    /// `">"`
    Greater,
    /// `">="`
    GreaterEqual,
    /// `"<"`
    Less,
    /// `"<="`
    LessEqual,

    // Special Operators
    /// `","`
    Comma,
    /// `"."`
    Dot,
    /// `";"`
    Semicolon,
    /// `"="`
    Equal,

    // Literals
    /// A user-defined name.
    Identifier,
    /// A double-quoted string literal.
    String,
    /// A number literal.
    Number,

    // Keywords
    /// `"and"`
    And,
    /// `"class"`
    Class,
    /// `"else"`
    Else,
    /// `"false"`
    False,
    /// `"fun"`
    Fun,
    /// `"for"`
    For,
    /// `"if"`
    If,
    /// `"nil"`
    Nil,
    /// `"or"`
    Or,
    /// `"print"`
    Print,
    /// `"return"`
    Return,
    /// `"super"`
    Super,
    /// `"this"`
    This,
    /// `"true"`
    True,
    /// `"var"`
    Var,
    /// `"while"`
    While,

    /// End of Input, either end of line in REPL mode, or End of File in normal mode.
    Eof,
}

impl TokenType {
    /// The upper-case name of the kind, as printed by the book's reference implementation.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Equal => "EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Eof => "EOF",
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single classified piece of the source code. Tokens are snapshots:
/// they own their lexeme and keep no reference to the scanner that produced them.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a token is exactly kind, lexeme, literal and line."
)]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// The exact source text of this token, including the quotes of string literals.
    pub lexeme: String,
    /// Decoded value of number and string literals, `None` for everything else.
    pub literal: Option<LoxLiteral>,
    /// Line on which the lexeme begins.
    pub line: Line,
}

impl Token {
    /// Bundles the parts of a token together.
    #[must_use]
    #[inline]
    pub const fn new(
        token_type: TokenType,
        lexeme: String,
        literal: Option<LoxLiteral>,
        line: Line,
    ) -> Self {
        Token {
            token_type,
            lexeme,
            literal,
            line,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Token(type={}, lexeme='{}', literal=", self.token_type, self.lexeme)?;
        match self.literal {
            Some(ref literal) => write!(f, "{literal}")?,
            None => f.write_str("None")?,
        }
        write!(f, ", line={})", self.line)
    }
}
