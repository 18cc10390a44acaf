//! Maps raw store errors to the sentence shown in the failure toast.
//!
//! Rules are checked in order against the raw error text; the first match wins.
//! With no match the server's own message is shown, or the fallback when the
//! server gave none.

/// Substring the store uses when an access policy blocks the insert.
pub const ACCESS_POLICY_MARKER: &str = "row-level security policy";

pub const ACCESS_POLICY_MESSAGE: &str =
    "Database security settings need to be configured. Please contact the administrator.";

pub const FALLBACK_MESSAGE: &str = "Please try again or contact me directly via email.";

#[derive(Debug, Clone)]
pub enum Matcher {
    Contains(&'static str),
}

impl Matcher {
    fn matches(&self, raw: &str) -> bool {
        match self {
            Matcher::Contains(needle) => raw.contains(needle),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorRule {
    pub matcher: Matcher,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<ErrorRule>,
    fallback: &'static str,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(FALLBACK_MESSAGE).with_rule(
            Matcher::Contains(ACCESS_POLICY_MARKER),
            ACCESS_POLICY_MESSAGE,
        )
    }
}

impl ErrorClassifier {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn with_rule(mut self, matcher: Matcher, message: &'static str) -> Self {
        self.rules.push(ErrorRule { matcher, message });
        self
    }

    pub fn classify(&self, raw: Option<&str>) -> String {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty());
        let Some(raw) = raw else {
            return self.fallback.to_string();
        };

        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(raw))
            .map(|rule| rule.message.to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_policy_is_rephrased() {
        let raw = "new row violates row-level security policy for table \"contacts\"";
        assert_eq!(
            ErrorClassifier::default().classify(Some(raw)),
            ACCESS_POLICY_MESSAGE
        );
    }

    #[test]
    fn test_other_errors_pass_through() {
        let raw = "duplicate key value violates unique constraint";
        assert_eq!(ErrorClassifier::default().classify(Some(raw)), raw);
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let classifier = ErrorClassifier::default();
        assert_eq!(classifier.classify(None), FALLBACK_MESSAGE);
        assert_eq!(classifier.classify(Some("  ")), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let classifier = ErrorClassifier::new("fallback")
            .with_rule(Matcher::Contains("timeout"), "first")
            .with_rule(Matcher::Contains("time"), "second");
        assert_eq!(classifier.classify(Some("request timeout")), "first");
        assert_eq!(classifier.classify(Some("bad time")), "second");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let raw = "ROW-LEVEL SECURITY POLICY";
        assert_eq!(ErrorClassifier::default().classify(Some(raw)), raw);
    }
}
