//! Numeric formatting for displayed values.
//!
//! Every formatter accepts any `f64`. NaN and infinities format as zero.

use crate::animation::finite_or_zero;

/// Returns `part / total`, or 0 when the ratio is undefined.
///
/// Used for every proportional length and angle so an empty total draws
/// nothing instead of propagating NaN.
#[inline]
#[must_use]
pub fn safe_ratio(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    finite_or_zero(part / total)
}

/// Fixed-point formatting: `format_fixed(1.23456, 2) == "1.23"`.
///
/// Never produces a negative zero.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = finite_or_zero(value);
    let text = format!("{value:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Percentage of a fraction: `format_percent(0.1234, 1) == "12.3%"`.
#[must_use]
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    let mut text = format_fixed(finite_or_zero(fraction) * 100.0, decimals);
    text.push('%');
    text
}

/// Currency presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount.
    pub symbol: String,
    /// Digits after the decimal separator.
    pub decimals: usize,
    /// Thousands separator; `None` disables grouping.
    pub grouping: Option<char>,
    /// Decimal separator.
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// Creates a format with the given symbol and US-style separators.
    #[must_use]
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Sets the number of decimals.
    #[must_use]
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            grouping: Some(','),
            decimal_separator: '.',
        }
    }
}

/// Currency formatting: `-1234.5` becomes `-$1,234.50` with the default format.
#[must_use]
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let amount = finite_or_zero(amount);
    let fixed = format_fixed(amount.abs(), format.decimals);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');

    let mut out = String::with_capacity(fixed.len() + format.symbol.len() + 4);
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&format.symbol);
    match format.grouping {
        Some(separator) => out.push_str(&group_digits(whole, separator)),
        None => out.push_str(whole),
    }
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Inserts `separator` every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

const COMPACT_UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Short form for large magnitudes: `1_260_000.0` becomes `"1.3M"`.
///
/// One decimal, trailing `.0` dropped. Values under 1000 are rounded to
/// whole numbers.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let value = finite_or_zero(value);
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    // Largest unit not above the magnitude, promoted one step when
    // rounding would print 1000 of it (999_960 is "1M", not "1000K").
    let promotes = |scale: f64| (magnitude / scale * 10.0).round() >= 10_000.0;
    let index = match COMPACT_UNITS.iter().position(|(scale, _)| magnitude >= *scale) {
        Some(i) if i > 0 && promotes(COMPACT_UNITS[i].0) => Some(i - 1),
        None if magnitude.round() >= 1_000.0 => Some(COMPACT_UNITS.len() - 1),
        other => other,
    };
    let unit = index.map(|i| COMPACT_UNITS[i]);

    match unit {
        Some((scale, suffix)) => {
            let scaled = format_fixed(magnitude / scale, 1);
            let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
            format!("{sign}{scaled}{suffix}")
        }
        None => {
            let whole = format_fixed(magnitude, 0);
            if whole == "0" {
                whole
            } else {
                format!("{sign}{whole}")
            }
        }
    }
}

/// How a widget turns its displayed number into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueFormat {
    /// Rounded whole number.
    Integer,
    /// Fixed number of decimals.
    Fixed(usize),
    /// Fraction shown as a percentage with the given decimals.
    Percent(usize),
    /// Currency amount.
    Currency(CurrencyFormat),
    /// Abbreviated magnitude (K, M, B, T).
    Compact,
}

impl ValueFormat {
    /// Formats a value.
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        match self {
            Self::Integer => format_fixed(value, 0),
            Self::Fixed(decimals) => format_fixed(value, *decimals),
            Self::Percent(decimals) => format_percent(value, *decimals),
            Self::Currency(format) => format_currency(value, format),
            Self::Compact => format_compact(value),
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Currency(CurrencyFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ratio() {
        assert!((safe_ratio(1.0, 4.0) - 0.25).abs() < f64::EPSILON);
        assert!(safe_ratio(5.0, 0.0).abs() < f64::EPSILON);
        assert!(safe_ratio(0.0, 0.0).abs() < f64::EPSILON);
        assert!(safe_ratio(f64::INFINITY, 2.0).abs() < f64::EPSILON);
        assert!(safe_ratio(1.0, f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(format_fixed(1.23456, 2), "1.23");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(f64::NAN, 1), "0.0");
        assert_eq!(format_fixed(-2.5, 1), "-2.5");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(0.1234, 1), "12.3%");
        assert_eq!(format_percent(1.0, 0), "100%");
        assert_eq!(format_percent(f64::INFINITY, 0), "0%");
    }

    #[test]
    fn test_currency() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(1234.5, &usd), "$1,234.50");
        assert_eq!(format_currency(-1234.5, &usd), "-$1,234.50");
        assert_eq!(format_currency(1_000_000.0, &usd), "$1,000,000.00");
        assert_eq!(format_currency(999.999, &usd), "$1,000.00");
        assert_eq!(format_currency(-0.001, &usd), "$0.00");
        assert_eq!(format_currency(12.0, &usd.clone().decimals(0)), "$12");
    }

    #[test]
    fn test_currency_locale() {
        let eur = CurrencyFormat {
            symbol: "€".to_string(),
            decimals: 2,
            grouping: Some('.'),
            decimal_separator: ',',
        };
        assert_eq!(format_currency(98765.4, &eur), "€98.765,40");

        let plain = CurrencyFormat {
            grouping: None,
            ..CurrencyFormat::default()
        };
        assert_eq!(format_currency(98765.4, &plain), "$98765.40");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_000.0), "1K");
        assert_eq!(format_compact(1_260_000.0), "1.3M");
        assert_eq!(format_compact(-2_400_000_000.0), "-2.4B");
        assert_eq!(format_compact(999_960.0), "1M");
        assert_eq!(format_compact(3.2e12), "3.2T");
        assert_eq!(format_compact(-0.3), "0");
    }

    #[test]
    fn test_value_format_dispatch() {
        assert_eq!(ValueFormat::Integer.apply(41.6), "42");
        assert_eq!(ValueFormat::Fixed(3).apply(1.5), "1.500");
        assert_eq!(ValueFormat::Percent(0).apply(0.5), "50%");
        assert_eq!(ValueFormat::default().apply(10.0), "$10.00");
        assert_eq!(ValueFormat::Compact.apply(15_300.0), "15.3K");
    }
}
