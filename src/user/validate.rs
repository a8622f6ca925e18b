//! Email format policy
//!
//! Structural validation only; no network or MX verification. The policy is
//! a length bound plus the usual address pattern: a local part, `@`, and a
//! domain of dot-separated labels of 1-63 alphanumeric characters with
//! internal hyphens allowed.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// Addresses shorter than this cannot name a mailbox.
const MIN_LEN: usize = 3;
/// Upper bound on a deliverable address.
const MAX_LEN: usize = 254;

/// True iff the candidate is within length bounds and matches the pattern.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < MIN_LEN || email.len() > MAX_LEN {
        return false;
    }
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example-host.org"));
        assert!(is_valid_email("o'brien@example.ie"));
    }

    #[test]
    fn test_rejects_too_short_or_too_long() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ab"));

        let local = "a".repeat(250);
        assert!(!is_valid_email(&format!("{}@b.co", local)));
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert!(!is_valid_email("no-at-sign.com"));
    }

    #[test]
    fn test_rejects_bad_domain_labels() {
        assert!(!is_valid_email("a@-b.co"));
        assert!(!is_valid_email("a@b-.co"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a@"));
    }

    #[test]
    fn test_rejects_spaces_and_empty_local_part() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("@b.co"));
    }
}
