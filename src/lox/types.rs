//! Types used through multiple parts of the Lox front end.

use core::fmt::{Display, Formatter};

/// Line numbers in Lox source code, 1-indexed.
pub type Line = usize;

/// Literal values carried by tokens. A token without a literal simply
/// stores `None` instead.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum LoxLiteral {
    /// A number, represented as a double-precision floating point number.
    Number(f64),
    /// A string, without the surrounding quotes. Escape sequences are not supported.
    String(String),
}

impl Display for LoxLiteral {
    /// Numbers always show their fractional part (`1.0`, not `1`),
    /// strings are shown without quotes.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            LoxLiteral::Number(value) => write!(f, "{value:?}"),
            LoxLiteral::String(ref value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::LoxLiteral;

    #[test]
    fn literals_display_like_the_book() {
        assert_eq!(LoxLiteral::Number(1.0).to_string(), "1.0", "integral numbers keep a fraction");
        assert_eq!(LoxLiteral::Number(1.5).to_string(), "1.5", "fractions are kept");
        assert_eq!(
            LoxLiteral::String("hi there".to_owned()).to_string(),
            "hi there",
            "strings are unquoted"
        );
    }
}
