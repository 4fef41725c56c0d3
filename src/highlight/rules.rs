//! Pattern rules and the interval-ownership claim map
//!
//! A rule set is an ordered list of `PatternRule`s. Rules run against the
//! escaped text and claim the spans they match in a `ClaimSet`; a span an
//! earlier rule has claimed is invisible to every later rule, which is
//! what makes the rule order significant.

use regex::Regex;

use super::tokens::TokenType;

/// A single pattern rule.
///
/// Matches a regex pattern against escaped text and assigns a token class
/// to the match. By default the whole match is claimed; a rule created
/// with [`PatternRule::captured`] claims one capture group instead, which
/// lets a pattern anchor on context (like the `(` after a call site)
/// without consuming it.
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token class to assign to matches
    pub token_type: TokenType,
    /// Capture group to claim instead of the whole match
    pub capture: Option<usize>,
}

impl PatternRule {
    /// Create a rule that claims the whole match.
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            token_type,
            capture: None,
        })
    }

    /// Create a rule that claims one capture group of each match.
    pub fn captured(
        name: &str,
        pattern: &str,
        group: usize,
        token_type: TokenType,
    ) -> Option<Self> {
        let mut rule = Self::new(name, pattern, token_type)?;
        rule.capture = Some(group);
        Some(rule)
    }
}

/// A claimed span of escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    /// Byte offset where this claim starts (inclusive)
    pub start: usize,
    /// Byte offset where this claim ends (exclusive)
    pub end: usize,
    /// Token class that owns the span
    pub token_type: TokenType,
}

impl Claim {
    /// Create a new claim.
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        Self { start, end, token_type }
    }
}

/// Non-overlapping claims, kept sorted by start offset.
#[derive(Debug, Default)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self { claims: Vec::new() }
    }

    /// Whether `start..end` overlaps no existing claim.
    pub fn is_free(&self, start: usize, end: usize) -> bool {
        self.claims.iter().all(|c| end <= c.start || c.end <= start)
    }

    /// Insert a claim if its span is free. Empty and overlapping spans are
    /// rejected; returns whether the claim was taken.
    pub fn insert(&mut self, claim: Claim) -> bool {
        if claim.start >= claim.end || !self.is_free(claim.start, claim.end) {
            return false;
        }
        let at = self.claims.partition_point(|c| c.start < claim.start);
        self.claims.insert(at, claim);
        true
    }

    /// Number of claims taken so far.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claims have been taken.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Consume the set, yielding claims sorted by start offset.
    pub fn into_sorted(self) -> Vec<Claim> {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenType::Number).unwrap();
        let m = rule.pattern.find("abc 123 def").unwrap();
        assert_eq!((m.start(), m.end()), (4, 7));
        assert!(rule.capture.is_none());
    }

    #[test]
    fn test_pattern_rule_invalid_regex() {
        assert!(PatternRule::new("broken", r"(unclosed", TokenType::Number).is_none());
    }

    #[test]
    fn test_captured_rule() {
        let rule = PatternRule::captured("call", r"\b(\w+)\(", 1, TokenType::Function).unwrap();
        let caps = rule.pattern.captures("foo(1)").unwrap();
        let group = caps.get(rule.capture.unwrap()).unwrap();
        assert_eq!(group.as_str(), "foo");
        assert_eq!((group.start(), group.end()), (0, 3));
    }

    #[test]
    fn test_claim_set_rejects_overlap() {
        let mut claims = ClaimSet::new();
        assert!(claims.insert(Claim::new(4, 10, TokenType::Comment)));
        // identical span
        assert!(!claims.insert(Claim::new(4, 10, TokenType::Keyword)));
        // partial overlaps
        assert!(!claims.insert(Claim::new(0, 5, TokenType::Keyword)));
        assert!(!claims.insert(Claim::new(9, 12, TokenType::Keyword)));
        // contained and containing
        assert!(!claims.insert(Claim::new(5, 9, TokenType::Keyword)));
        assert!(!claims.insert(Claim::new(2, 12, TokenType::Keyword)));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_claim_set_rejects_empty_span() {
        let mut claims = ClaimSet::new();
        assert!(!claims.insert(Claim::new(3, 3, TokenType::Number)));
        assert!(claims.is_empty());
    }

    #[test]
    fn test_claim_set_adjacent_spans_allowed() {
        let mut claims = ClaimSet::new();
        assert!(claims.insert(Claim::new(4, 10, TokenType::Comment)));
        assert!(claims.insert(Claim::new(0, 4, TokenType::Keyword)));
        assert!(claims.insert(Claim::new(10, 12, TokenType::Number)));
        assert_eq!(claims.len(), 3);
    }

    #[test]
    fn test_claim_set_sorted_output() {
        let mut claims = ClaimSet::new();
        claims.insert(Claim::new(20, 25, TokenType::Number));
        claims.insert(Claim::new(0, 5, TokenType::Comment));
        claims.insert(Claim::new(10, 15, TokenType::Keyword));
        let sorted = claims.into_sorted();
        let starts: Vec<usize> = sorted.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![0, 10, 20]);
    }
}
