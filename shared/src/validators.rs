/// Longest address allowed by RFC 5321 (path limit minus the angle brackets)
const MAX_EMAIL_LEN: usize = 254;

/// Syntactic email check: `local@domain` where the domain has an interior dot.
/// No DNS/MX lookup is performed.
pub fn is_email_valid(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_EMAIL_LEN {
        return false;
    }
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot in the domain with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_standard_addresses() {
        assert!(is_email_valid("ada@example.com"));
        assert!(is_email_valid("first.last+tag@mail.example.co.uk"));
        assert!(is_email_valid("a@b.c"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("bad"));
        assert!(!is_email_valid("ada.example.com"));
        assert!(!is_email_valid("ada@example"));
        assert!(!is_email_valid("@example.com"));
        assert!(!is_email_valid("ada@.com"));
        assert!(!is_email_valid("ada@example."));
        assert!(!is_email_valid("ada@@example.com"));
        assert!(!is_email_valid("ada@exa@mple.com"));
        assert!(!is_email_valid("ada lovelace@example.com"));
    }

    #[test]
    fn test_domain_dot_only_needs_a_neighbour_on_each_side() {
        assert!(is_email_valid("a@.b.c"));
        assert!(is_email_valid("a@b.c."));
        assert!(is_email_valid("x@-.com."));
        assert!(!is_email_valid("a@.bc"));
        assert!(!is_email_valid("a@bc."));
        assert!(!is_email_valid("a@."));
    }

    #[test]
    fn test_rejects_overlong_addresses() {
        let local = "a".repeat(250);
        assert!(!is_email_valid(&format!("{}@example.com", local)));
    }
}
