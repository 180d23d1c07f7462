//! Contact patterns. The first match in the document wins; there is no ranking.

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"\+?\d[\d -]{8,12}\d";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

pub fn first_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

pub fn first_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_wins() {
        let text = "primary: jane.doe+cv@mail.example.org, backup: jd@other.io";
        assert_eq!(first_email(text), Some("jane.doe+cv@mail.example.org"));
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        assert_eq!(first_email("reach me at me@host.c"), None);
        assert_eq!(first_email("reach me at me@host.co"), Some("me@host.co"));
    }

    #[test]
    fn test_email_absent() {
        assert_eq!(first_email("no contact details here @ all"), None);
    }

    #[test]
    fn test_phone_with_plus_and_separators() {
        assert_eq!(first_phone("Tel: +1 415 555 0100"), Some("+1 415 555 0100"));
        assert_eq!(first_phone("call 555-123-4567 today"), Some("555-123-4567"));
    }

    #[test]
    fn test_phone_too_short_is_rejected() {
        assert_eq!(first_phone("room 12345"), None);
    }

    #[test]
    fn test_phone_takes_first_run_of_digits() {
        assert_eq!(
            first_phone("john@x.com +12345678901"),
            Some("+12345678901")
        );
    }
}
