//! Output style for generated statements.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Quote character used around module specifiers and object keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCharacter {
    /// `"`
    #[default]
    Double,
    /// `'`
    Single,
}

impl QuoteCharacter {
    /// Returns the quote as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteCharacter::Double => "\"",
            QuoteCharacter::Single => "'",
        }
    }

    /// Wrap `text` in this quote.
    pub fn quote(&self, text: &str) -> String {
        format!("{q}{text}{q}", q = self.as_str())
    }
}

impl fmt::Display for QuoteCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteCharacter::Double => write!(f, "double"),
            QuoteCharacter::Single => write!(f, "single"),
        }
    }
}

impl FromStr for QuoteCharacter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "double" | "\"" => Ok(QuoteCharacter::Double),
            "single" | "'" => Ok(QuoteCharacter::Single),
            _ => Err(format!(
                "unknown quote style '{}', expected 'single' or 'double'",
                s
            )),
        }
    }
}

/// Statement terminator appended to every emitted statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Terminator {
    #[default]
    Semicolon,
    None,
}

impl Terminator {
    /// Build a terminator from a "use semicolons" flag.
    pub fn from_semicolon(enabled: bool) -> Self {
        if enabled {
            Terminator::Semicolon
        } else {
            Terminator::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terminator::Semicolon => ";",
            Terminator::None => "",
        }
    }
}

/// Quote and terminator applied uniformly to every emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub quote: QuoteCharacter,
    pub terminator: Terminator,
}

impl Style {
    pub fn new(quote: QuoteCharacter, terminator: Terminator) -> Self {
        Self { quote, terminator }
    }

    /// Append the statement terminator to `statement`.
    pub fn terminate(&self, statement: &str) -> String {
        format!("{}{}", statement, self.terminator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_from_str() {
        assert_eq!(
            QuoteCharacter::from_str("single").unwrap(),
            QuoteCharacter::Single
        );
        assert_eq!(QuoteCharacter::from_str("'").unwrap(), QuoteCharacter::Single);
        assert_eq!(
            QuoteCharacter::from_str("DOUBLE").unwrap(),
            QuoteCharacter::Double
        );
        assert!(QuoteCharacter::from_str("backtick").is_err());
    }

    #[test]
    fn test_quote_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            quote: QuoteCharacter,
        }

        let parsed: Wrapper = toml::from_str("quote = \"single\"").unwrap();
        assert_eq!(parsed.quote, QuoteCharacter::Single);
    }

    #[test]
    fn test_quote_wraps_text() {
        assert_eq!(QuoteCharacter::Single.quote("./a"), "'./a'");
        assert_eq!(QuoteCharacter::Double.quote("./a"), "\"./a\"");
    }

    #[test]
    fn test_terminate() {
        let style = Style::new(QuoteCharacter::Single, Terminator::Semicolon);
        assert_eq!(style.terminate("export {a as A}"), "export {a as A};");

        let style = Style::new(QuoteCharacter::Single, Terminator::from_semicolon(false));
        assert_eq!(style.terminate("export {a as A}"), "export {a as A}");
    }
}
