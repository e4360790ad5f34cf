//! Text shown inside the handle grip.

use serde::{Deserialize, Serialize};

/// How a selection edge is turned into handle text.
///
/// The value is floored, optionally grouped in thousands with `,`, and the
/// suffix is appended verbatim (include any leading space in the suffix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormat {
    pub suffix: String,
    pub thousands: bool,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            suffix: String::new(),
            thousands: true,
        }
    }
}

impl LabelFormat {
    /// Create a format with the given suffix and thousands grouping.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..Self::default()
        }
    }

    /// Format a value.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}", value, self.suffix);
        }

        let floored = value.floor() as i64;
        let digits = floored.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + self.suffix.len() + 1);
        if floored < 0 {
            out.push('-');
        }
        if self.thousands {
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(ch);
            }
        } else {
            out.push_str(&digits);
        }
        out.push_str(&self.suffix);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_value() {
        assert_eq!(LabelFormat::default().format(42.9), "42");
    }

    #[test]
    fn test_format_thousands_with_suffix() {
        let format = LabelFormat::with_suffix(" Leads");
        assert_eq!(format.format(2500.7), "2,500 Leads");
        assert_eq!(format.format(1234567.0), "1,234,567 Leads");
    }

    #[test]
    fn test_format_without_grouping() {
        let format = LabelFormat {
            suffix: String::new(),
            thousands: false,
        };
        assert_eq!(format.format(1234567.0), "1234567");
    }

    #[test]
    fn test_format_negative_floors_down() {
        assert_eq!(LabelFormat::default().format(-1500.2), "-1,501");
    }

    #[test]
    fn test_deserialize_defaults() {
        let format: LabelFormat = serde_json::from_str(r#"{"suffix": " Leads"}"#).unwrap();
        assert!(format.thousands);
        assert_eq!(format.suffix, " Leads");
    }
}
