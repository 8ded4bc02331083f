//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, at most 8.
    Spaces(u8),
}

const SPACES: &str = "        ";

impl Indent {
    /// 2-space indentation, the unit used inside generated barrels.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::TYPESCRIPT.as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(12).as_str(), "        ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }
}
