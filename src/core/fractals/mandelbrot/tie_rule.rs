use std::fmt;
use std::str::FromStr;

/// How a point that crosses the escape radius on the very last allowed
/// iteration is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieRule {
    /// The escape test runs before the cap test: crossing at the cap is an escape.
    #[default]
    EscapeWins,
    /// Reaching the cap always means interior, even when the last step crossed.
    CapWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTieRuleError(String);

impl fmt::Display for ParseTieRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tie rule '{}', expected 'escape-wins' or 'cap-wins'",
            self.0
        )
    }
}

impl std::error::Error for ParseTieRuleError {}

impl FromStr for TieRule {
    type Err = ParseTieRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape-wins" => Ok(Self::EscapeWins),
            "cap-wins" => Ok(Self::CapWins),
            other => Err(ParseTieRuleError(other.to_string())),
        }
    }
}

impl fmt::Display for TieRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EscapeWins => write!(f, "escape-wins"),
            Self::CapWins => write!(f, "cap-wins"),
        }
    }
}
