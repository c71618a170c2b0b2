use once_cell::sync::Lazy;
use regex::Regex;

/// First run of 7+ consecutive digits, bounded by word boundaries.
static ORDER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]{7,})\b").unwrap());

/// Indian mobile number: 10 digits starting 6-9, optionally prefixed with
/// `+91` or a single leading `0`. The leading guard rejects candidates that
/// are embedded inside a longer digit run (regex has no lookbehind).
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9])(?:\+91|0)?([6-9][0-9]{9})\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedIdentifier {
    OrderId(String),
    Phone(String),
}

impl ExtractedIdentifier {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedIdentifier::OrderId(id) => id,
            ExtractedIdentifier::Phone(number) => number,
        }
    }
}

/// First 7+ digit run in the text, if any.
pub fn extract_order_id(text: &str) -> Option<String> {
    ORDER_ID
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// First valid mobile number in the text, normalized to its 10 digits
/// (any `+91` or leading-zero prefix stripped).
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.captures(text).map(|caps| caps[1].to_string())
}

/// Scan free text for an identifier. The order-ID rule is checked first; a
/// phone number is only reported when no 7+ digit run exists.
pub fn extract(text: &str) -> Option<ExtractedIdentifier> {
    if let Some(order_id) = extract_order_id(text) {
        return Some(ExtractedIdentifier::OrderId(order_id));
    }
    extract_phone(text).map(ExtractedIdentifier::Phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_seven_digits() {
        assert_eq!(
            extract_order_id("cancellation reason for order 1234567?"),
            Some("1234567".to_string())
        );
    }

    #[test]
    fn test_order_id_no_upper_bound() {
        assert_eq!(
            extract_order_id("order 123456789012345 please"),
            Some("123456789012345".to_string())
        );
    }

    #[test]
    fn test_six_digits_is_not_an_order_id() {
        assert_eq!(extract_order_id("order 123456"), None);
        assert_eq!(extract("order 123456"), None);
    }

    #[test]
    fn test_phone_plain() {
        assert_eq!(
            extract_phone("balance for 9876543210"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_phone_strips_country_code() {
        assert_eq!(
            extract_phone("reach me at +919876543210"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_phone_strips_leading_zero() {
        assert_eq!(
            extract_phone("09876543210 is my number"),
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_phone_must_start_six_to_nine() {
        assert_eq!(extract_phone("1234567890"), None);
    }

    #[test]
    fn test_phone_not_taken_from_longer_run() {
        // 11 digits without a recognized prefix is not a phone number
        assert_eq!(extract_phone("99876543210"), None);
        assert_eq!(extract_phone("id 987654321012"), None);
    }

    #[test]
    fn test_order_id_wins_over_phone() {
        assert_eq!(
            extract("order 9876543210"),
            Some(ExtractedIdentifier::OrderId("9876543210".to_string()))
        );
    }

    #[test]
    fn test_extraction_is_total() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("no digits here"), None);
        assert_eq!(extract("short 123"), None);
    }

    #[test]
    fn test_extraction_is_pure() {
        let text = "order 7654321 and 9876543210";
        assert_eq!(extract(text), extract(text));
    }
}
