use crate::constants::ERR_INVALID_BUDGET;
use crate::error::AppError;

/// Take a required text field, treating absent and empty values alike
pub fn require(field: Option<String>, message: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::InvalidInput(message.to_string())),
    }
}

/// Parse the `budget` query parameter from its leading base-10 integer
///
/// Leading whitespace and an optional sign are accepted, and everything
/// after the first run of digits is ignored, so `12.5` reads as 12 and
/// `100abc` as 100. Input without leading digits is rejected. Values past
/// the `i64` range saturate at its bounds.
pub fn parse_budget(raw: Option<&str>) -> Result<i64, AppError> {
    raw.and_then(leading_integer)
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_BUDGET.to_string()))
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, sign_len) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    // Only overflow can fail here
    match trimmed[..sign_len + digits].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(Some("alice".into()), "missing").unwrap(), "alice");
        assert!(matches!(
            require(Some(String::new()), "missing"),
            Err(AppError::InvalidInput(msg)) if msg == "missing"
        ));
        assert!(require(None, "missing").is_err());
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget(Some("20000")).unwrap(), 20000);
        assert_eq!(parse_budget(Some(" 0 ")).unwrap(), 0);
        assert_eq!(parse_budget(Some("-5")).unwrap(), -5);

        assert_eq!(parse_budget(Some("+8")).unwrap(), 8);

        assert!(parse_budget(None).is_err());
        assert!(parse_budget(Some("")).is_err());
        assert!(parse_budget(Some("   ")).is_err());
        assert!(parse_budget(Some("cheap")).is_err());
        assert!(parse_budget(Some("-")).is_err());
        assert!(parse_budget(Some(".5")).is_err());
        assert!(parse_budget(Some("- 5")).is_err());
    }

    #[test]
    fn test_parse_budget_reads_leading_digits() {
        assert_eq!(parse_budget(Some("12.5")).unwrap(), 12);
        assert_eq!(parse_budget(Some("100abc")).unwrap(), 100);
        assert_eq!(parse_budget(Some("1e3")).unwrap(), 1);
        assert_eq!(parse_budget(Some("  -7 dollars")).unwrap(), -7);
        assert_eq!(parse_budget(Some("007")).unwrap(), 7);
    }

    #[test]
    fn test_parse_budget_saturates_out_of_range() {
        assert_eq!(
            parse_budget(Some("99999999999999999999999")).unwrap(),
            i64::MAX
        );
        assert_eq!(
            parse_budget(Some("-99999999999999999999999")).unwrap(),
            i64::MIN
        );
    }
}
