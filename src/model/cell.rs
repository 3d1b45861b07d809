//! Cell type for scalar spreadsheet values.
//!
//! This module provides the `Cell` type which represents one spreadsheet cell
//! as handed to the normalizer: text, a number, or nothing. Numeric coercion
//! handles values that may or may not include a dollar sign and commas.

use serde::{Deserialize, Serialize};

/// A single scalar value from a spreadsheet row.
///
/// Cells arrive either as text (CSV exports carry everything as text) or as
/// numbers (JSON rows from an API collaborator). Coercion to the other view
/// happens lazily at resolution time and never fails: an unparsable cell is
/// simply worth nothing to its caller.
///
/// # Examples
///
/// Currency-formatted text coerces to a number:
/// ```
/// # use stocksight::model::Cell;
/// let cell = Cell::Text("$1,250.50".to_string());
/// assert_eq!(cell.to_number(), Some(1250.5));
/// ```
///
/// Integral numbers coerce to digit strings without a trailing `.0`:
/// ```
/// # use stocksight::model::Cell;
/// let cell = Cell::Number(42.0);
/// assert_eq!(cell.to_text().as_deref(), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl Cell {
    /// Returns true when the cell carries no usable value: `Empty`, or text
    /// that is blank after trimming. Empty cells fall through synonym probing.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Empty => true,
        }
    }

    /// The numeric view of the cell, if it has one.
    ///
    /// Text is trimmed and may carry a leading `$` (after the sign) and
    /// thousands-separator commas. Anything unparsable yields `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => parse_number(s),
            Cell::Empty => None,
        }
    }

    /// The text view of the cell, if it has one. Numbers render the way a
    /// spreadsheet displays them: no trailing `.0` on integral values.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Text(s) => {
                if s.trim().is_empty() {
                    None
                } else {
                    Some(s.clone())
                }
            }
            Cell::Empty => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // The sign precedes the currency symbol: "-$50.00".
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let body = body.strip_prefix('$').unwrap_or(body);
    let cleaned = body.replace(',', "");

    let value: f64 = cleaned.trim().parse().ok()?;
    Some(if negative { -value } else { value })
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_passes_through() {
        assert_eq!(Cell::Number(12.5).to_number(), Some(12.5));
    }

    #[test]
    fn test_parse_plain_text_number() {
        assert_eq!(Cell::from("50.25").to_number(), Some(50.25));
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        assert_eq!(Cell::from("$50.00").to_number(), Some(50.0));
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        assert_eq!(Cell::from("-$50.00").to_number(), Some(-50.0));
    }

    #[test]
    fn test_parse_with_commas() {
        assert_eq!(Cell::from("$1,234,567.89").to_number(), Some(1234567.89));
    }

    #[test]
    fn test_parse_commas_without_dollar() {
        assert_eq!(Cell::from("1,000").to_number(), Some(1000.0));
    }

    #[test]
    fn test_parse_whitespace_padding() {
        assert_eq!(Cell::from("  $50.00  ").to_number(), Some(50.0));
    }

    #[test]
    fn test_unparsable_text_has_no_number() {
        assert_eq!(Cell::from("n/a").to_number(), None);
    }

    #[test]
    fn test_blank_text_has_no_number() {
        assert_eq!(Cell::from("   ").to_number(), None);
        assert_eq!(Cell::Empty.to_number(), None);
    }

    #[test]
    fn test_integral_number_to_text_drops_fraction_marker() {
        assert_eq!(Cell::Number(42.0).to_text().as_deref(), Some("42"));
    }

    #[test]
    fn test_fractional_number_to_text() {
        assert_eq!(Cell::Number(12.5).to_text().as_deref(), Some("12.5"));
    }

    #[test]
    fn test_blank_text_has_no_text() {
        assert_eq!(Cell::from("  ").to_text(), None);
        assert_eq!(Cell::Empty.to_text(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::from("").is_empty());
        assert!(Cell::from("  ").is_empty());
        assert!(!Cell::from("x").is_empty());
        assert!(!Cell::Number(0.0).is_empty());
    }

    #[test]
    fn test_deserialize_number() {
        let cell: Cell = serde_json::from_str("42.5").unwrap();
        assert_eq!(cell, Cell::Number(42.5));
    }

    #[test]
    fn test_deserialize_string() {
        let cell: Cell = serde_json::from_str("\"widget\"").unwrap();
        assert_eq!(cell, Cell::Text("widget".to_string()));
    }

    #[test]
    fn test_deserialize_null() {
        let cell: Cell = serde_json::from_str("null").unwrap();
        assert_eq!(cell, Cell::Empty);
    }

    #[test]
    fn test_serialize_matches_scalar_forms() {
        assert_eq!(serde_json::to_string(&Cell::Number(2.0)).unwrap(), "2.0");
        assert_eq!(serde_json::to_string(&Cell::from("a")).unwrap(), "\"a\"");
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
    }
}
