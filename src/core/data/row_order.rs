use std::fmt;
use std::str::FromStr;

/// The order in which rows are visited, and therefore written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Row `0` (the lower imaginary bound) first.
    #[default]
    TopDown,
    /// Row `height - 1` first.
    BottomUp,
}

impl RowOrder {
    /// Row indices of a grid `height` rows tall, in visiting order.
    #[must_use]
    pub fn rows(self, height: u32) -> Box<dyn Iterator<Item = u32>> {
        match self {
            Self::TopDown => Box::new(0..height),
            Self::BottomUp => Box::new((0..height).rev()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRowOrderError(String);

impl fmt::Display for ParseRowOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown row order '{}', expected 'top-down' or 'bottom-up'",
            self.0
        )
    }
}

impl std::error::Error for ParseRowOrderError {}

impl FromStr for RowOrder {
    type Err = ParseRowOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-down" => Ok(Self::TopDown),
            "bottom-up" => Ok(Self::BottomUp),
            other => Err(ParseRowOrderError(other.to_string())),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopDown => write!(f, "top-down"),
            Self::BottomUp => write!(f, "bottom-up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_down_rows_ascend() {
        let rows: Vec<u32> = RowOrder::TopDown.rows(4).collect();

        assert_eq!(rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bottom_up_rows_descend() {
        let rows: Vec<u32> = RowOrder::BottomUp.rows(4).collect();

        assert_eq!(rows, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_parse_row_order() {
        assert_eq!("top-down".parse(), Ok(RowOrder::TopDown));
        assert_eq!("bottom-up".parse(), Ok(RowOrder::BottomUp));
        assert!("sideways".parse::<RowOrder>().is_err());
    }
}
