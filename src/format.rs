// ---------------------------------------------------------------------------
// Display formatting for table cells and cards
// ---------------------------------------------------------------------------

/// `$9.77M`; `NaN` for an unreadable cost.
pub fn cost_musd(value: f64) -> String {
    if value.is_nan() {
        "$NaNM".to_string()
    } else {
        format!("${value:.2}M")
    }
}

/// Two decimals; `NaN` for an unreadable ratio.
pub fn ratio(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Thousands grouped with a space (`4 259`); `NaN` when missing.
pub fn count(value: Option<i64>) -> String {
    let Some(n) = value else {
        return "NaN".to_string();
    };
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(cost_musd(9.77), "$9.77M");
        assert_eq!(cost_musd(2.5), "$2.50M");
        assert_eq!(cost_musd(f64::NAN), "$NaNM");
    }

    #[test]
    fn ratios() {
        assert_eq!(ratio(0.976), "0.98");
        assert_eq!(ratio(0.5), "0.50");
        assert_eq!(ratio(f64::NAN), "NaN");
    }

    #[test]
    fn counts() {
        assert_eq!(count(Some(837)), "837");
        assert_eq!(count(Some(4259)), "4 259");
        assert_eq!(count(Some(1234567)), "1 234 567");
        assert_eq!(count(Some(-1000)), "-1 000");
        assert_eq!(count(Some(0)), "0");
        assert_eq!(count(None), "NaN");
    }
}
