//! Result formatting - what the caller shows after a conversion

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{convert, ConversionError, ConversionRequest};

/// Format a converted quantity for display: at most six fractional
/// digits, trailing zeros trimmed, thousands grouping on the integer
/// part. Grouping is fixed 3-digit; locale choice belongs to the
/// presentation layer.
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    group_thousands(trimmed)
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::from(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// A completed conversion, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub quantity: f64,
    pub from: String,
    pub to: String,
    pub region: String,
    pub result: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.quantity,
            self.from,
            format_quantity(self.result),
            self.to
        )
    }
}

/// Convert and package the result for display.
pub fn convert_display(request: &ConversionRequest) -> Result<Conversion, ConversionError> {
    let result = convert(request)?;
    Ok(Conversion {
        quantity: request.quantity,
        from: request.from.clone(),
        to: request.to.clone(),
        region: request.region.clone(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_digit_cap() {
        assert_eq!(format_quantity(1.0 / 43560.0), "0.000023");
        assert_eq!(format_quantity(0.1234567), "0.123457");
        assert_eq!(format_quantity(1.9999999), "2");
    }

    #[test]
    fn test_trailing_zero_trim() {
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_quantity(43560.0), "43,560");
        assert_eq!(format_quantity(1234567.891234), "1,234,567.891234");
        assert_eq!(format_quantity(999.0), "999");
        assert_eq!(format_quantity(1000.0), "1,000");
        assert_eq!(format_quantity(-27225.5), "-27,225.5");
    }

    #[test]
    fn test_display_banner() {
        let conv = convert_display(&ConversionRequest::new(1.0, "sqft", "acre", "Karnataka"))
            .unwrap();
        assert_eq!(conv.to_string(), "1 sqft = 0.000023 acre");

        let conv = convert_display(&ConversionRequest::new(2.0, "bigha", "katha", "Bihar"))
            .unwrap();
        assert_eq!(conv.to_string(), "2 bigha = 40.00147 katha");
    }

    #[test]
    fn test_conversion_serde_round_trip() {
        let conv = convert_display(&ConversionRequest::new(1.0, "acre", "sqft", "Tamil Nadu"))
            .unwrap();
        let json = serde_json::to_string(&conv).unwrap();
        assert_eq!(
            json,
            r#"{"quantity":1.0,"from":"acre","to":"sqft","region":"Tamil Nadu","result":43560.0}"#
        );

        let back: Conversion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conv);
    }

    #[test]
    fn test_errors_pass_through() {
        let req = ConversionRequest::new(1.0, "katha", "sqft", "Goa");
        assert_eq!(convert_display(&req), Err(ConversionError::UnitUnavailable));
    }
}
