//! Currency coercion
//!
//! Converts between the free-form text the user types and plain `f64`
//! amounts. Parsing is lenient and never fails: anything that cannot be read
//! as a number becomes `0`.
//!
//! Known limitation: [`parse_currency`] keeps only digits and `.`, so a
//! leading minus sign is discarded and negative "refund" entries cannot be
//! expressed through it. Subcategory values go through [`coerce_amount`],
//! which does keep the sign. A configured symbol containing digits or `.`
//! has to be removed with [`CurrencyFormatter::parse`] first.

use std::fmt;

/// Read the longest numeric prefix of `text`, the way a browser's
/// `parseFloat` does.
///
/// Leading whitespace is skipped. The accepted prefix is
/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one digit in the
/// mantissa.
fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - (end + 1);
        if frac_digits > 0 {
            end = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Leniently interpret a stored subcategory value as an amount
///
/// Reads leading numeric characters and ignores the rest. Empty text,
/// text without a numeric prefix, and values that overflow to infinity all
/// coerce to `0`.
///
/// # Examples
/// ```
/// use monthly_budget::currency::coerce_amount;
/// assert_eq!(coerce_amount("120.50"), 120.5);
/// assert_eq!(coerce_amount("12a3"), 12.0);
/// assert_eq!(coerce_amount("abc"), 0.0);
/// ```
pub fn coerce_amount(text: &str) -> f64 {
    leading_float(text)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse user-facing currency text into an amount
///
/// Every character that is not an ASCII digit or `.` is discarded first, so
/// currency symbols, thousands separators and stray letters are tolerated.
/// The sign is discarded along with them.
///
/// # Examples
/// ```
/// use monthly_budget::currency::parse_currency;
/// assert_eq!(parse_currency("$1,000.00"), 1000.0);
/// assert_eq!(parse_currency("-5"), 5.0);
/// ```
pub fn parse_currency(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    coerce_amount(&cleaned)
}

/// Normalize a subcategory value once the user finishes editing it
///
/// Empty text stays empty. Text with a readable amount is rewritten with
/// exactly two decimals; anything else is kept as typed.
pub fn tidy_amount_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match leading_float(&cleaned).filter(|value| value.is_finite()) {
        Some(value) => format!("{:.2}", value),
        None => text.to_string(),
    }
}

/// Normalize the income field once the user finishes editing it
///
/// The result is the shortest decimal rendering of [`parse_currency`], so
/// `"$1,000.00"` becomes `"1000"`.
pub fn normalize_income_text(text: &str) -> String {
    parse_currency(text).to_string()
}

/// Renders amounts as currency strings
///
/// Output is the symbol, a comma-grouped integer part and exactly two
/// decimals: `$1,234.50`, `-$5.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    /// Create a formatter with the given currency symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The currency symbol this formatter prefixes
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Format an amount
    ///
    /// Non-finite amounts format as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        // Rounding can turn a tiny negative into "0.00"
        let negative = amount < 0.0 && fixed != "0.00";

        format!(
            "{}{}{}.{}",
            if negative { "-" } else { "" },
            self.symbol,
            group_thousands(whole),
            cents
        )
    }

    /// Remove this formatter's symbol from typed text
    ///
    /// Symbols such as `Rs.` carry a `.` that [`parse_currency`] would
    /// otherwise read as a decimal point.
    pub fn strip_symbol(&self, text: &str) -> String {
        if self.symbol.is_empty() {
            return text.to_string();
        }
        text.replace(self.symbol.as_str(), "")
    }

    /// Parse text shown or typed with this formatter's symbol
    pub fn parse(&self, text: &str) -> f64 {
        parse_currency(&self.strip_symbol(text))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl fmt::Display for CurrencyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Insert `,` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("120.50"), 120.5);
        assert_eq!(coerce_amount("12a3"), 12.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   42"), 42.0);
        assert_eq!(coerce_amount("-5"), -5.0);
        assert_eq!(coerce_amount(".5"), 0.5);
        assert_eq!(coerce_amount("5."), 5.0);
        assert_eq!(coerce_amount("1e3"), 1000.0);
        assert_eq!(coerce_amount("2e"), 2.0);
        assert_eq!(coerce_amount("$5"), 0.0);
        assert_eq!(coerce_amount("."), 0.0);
        assert_eq!(coerce_amount("-"), 0.0);
    }

    #[test]
    fn test_coerce_amount_overflow_is_zero() {
        assert_eq!(coerce_amount("1e400"), 0.0);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,000.00"), 1000.0);
        assert_eq!(parse_currency("1.2.3"), 1.2);
        assert_eq!(parse_currency("USD 45.10"), 45.1);
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("abc"), 0.0);
        assert_eq!(parse_currency("12a3"), 123.0);
    }

    #[test]
    fn test_parse_currency_drops_sign() {
        assert_eq!(parse_currency("-5"), 5.0);
        assert_eq!(parse_currency("-$20.25"), 20.25);
    }

    #[test]
    fn test_tidy_amount_text() {
        assert_eq!(tidy_amount_text(""), "");
        assert_eq!(tidy_amount_text("12"), "12.00");
        assert_eq!(tidy_amount_text("$1,200.5"), "1200.50");
        assert_eq!(tidy_amount_text("abc"), "abc");
    }

    #[test]
    fn test_normalize_income_text() {
        assert_eq!(normalize_income_text("$1,000.00"), "1000");
        assert_eq!(normalize_income_text("1000.50"), "1000.5");
        assert_eq!(normalize_income_text("nothing"), "0");
    }

    #[test]
    fn test_format() {
        let fmt = CurrencyFormatter::default();
        assert_eq!(fmt.format(0.0), "$0.00");
        assert_eq!(fmt.format(10.5), "$10.50");
        assert_eq!(fmt.format(1234.5), "$1,234.50");
        assert_eq!(fmt.format(1_000_000.0), "$1,000,000.00");
        assert_eq!(fmt.format(-5.0), "-$5.00");
        assert_eq!(fmt.format(-0.001), "$0.00");
        assert_eq!(fmt.format(f64::NAN), "$0.00");
        assert_eq!(fmt.format(999.999), "$1,000.00");
    }

    #[test]
    fn test_parse_with_symbol() {
        let fmt = CurrencyFormatter::new("Rs.");
        assert_eq!(fmt.symbol(), "Rs.");
        assert_eq!(fmt.parse("Rs.1,000.00"), 1000.0);
        assert_eq!(fmt.parse("1000"), 1000.0);
        assert_eq!(fmt.strip_symbol("Rs.12.50"), "12.50");
        assert_eq!(CurrencyFormatter::new("").strip_symbol("5"), "5");
    }

    #[test]
    fn test_round_trip_is_stable() {
        let fmt = CurrencyFormatter::default();
        for text in ["$1,000.00", "12.345", "abc", "0.004", "98765.4321", "-7"] {
            let first = parse_currency(text);
            let again = parse_currency(&fmt.format(first));
            assert!(
                (again - first).abs() <= 0.005 + f64::EPSILON * first.abs(),
                "{text}: {first} vs {again}"
            );
            // Once normalized, formatting is a fixed point
            assert_eq!(fmt.format(parse_currency(&fmt.format(again))), fmt.format(again));
        }

        for symbol in ["€", "Rs.", "kr.", "R2"] {
            let fmt = CurrencyFormatter::new(symbol);
            for text in ["1000", "12.345", "0.004", "98765.4321"] {
                let first = fmt.parse(text);
                let shown = fmt.format(first);
                let again = fmt.parse(&shown);
                assert!(
                    (again - first).abs() <= 0.005 + f64::EPSILON * first.abs(),
                    "{symbol} {text}: shown {shown}, {first} vs {again}"
                );
            }
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
