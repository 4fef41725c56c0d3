//! Scripting dialect rules
//!
//! The general-purpose dialect: seed script, server actions and component
//! snippets.

use crate::highlight::language::RuleSet;
use crate::highlight::rules::PatternRule;
use crate::highlight::tokens::TokenType;

/// Create the scripting dialect rule set.
pub fn script_rules() -> RuleSet {
    let mut set = RuleSet::new("script");

    // Line comments claim first
    if let Some(rule) = PatternRule::new("line_comment", r"//.*", TokenType::Comment) {
        set.add(rule);
    }

    // Flow and binding keywords
    let keywords = r"\b(?:import|from|const|let|var|async|function|await|new|if|else|return|try|catch|for|true|false)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Control) {
        set.add(rule);
    }

    // Class names that appear in the displayed snippets
    if let Some(rule) = PatternRule::new(
        "type",
        r"\b(?:PrismaClient|Role|User|UnitPendidikan|NavMenu)\b",
        TokenType::Type,
    ) {
        set.add(rule);
    }

    // Call-site heuristic: an identifier directly before an opening
    // paren. The paren anchors the match but only the identifier (group
    // 1) is claimed, so keywords already taken by the keyword rule keep
    // their color and the paren stays free.
    if let Some(rule) = PatternRule::captured("call", r"\b(\w+)\(", 1, TokenType::Function) {
        set.add(rule);
    }

    // Single- and double-quoted strings share one style; quotes appear
    // in escaped form by the time rules run
    if let Some(rule) = PatternRule::new(
        "string",
        r"&quot;.*?&quot;|&#039;.*?&#039;",
        TokenType::String,
    ) {
        set.add(rule);
    }

    // Whole-word digit runs
    if let Some(rule) = PatternRule::new("number", r"\b\d+\b", TokenType::Number) {
        set.add(rule);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::escape::escape;
    use crate::highlight::tokens::TokenType;

    fn claims_of(source: &str) -> Vec<(String, TokenType)> {
        let escaped = escape(source);
        script_rules()
            .tokenize(&escaped)
            .into_iter()
            .map(|c| (escaped[c.start..c.end].to_string(), c.token_type))
            .collect()
    }

    #[test]
    fn test_rule_application_order() {
        let set = script_rules();
        let names: Vec<&str> = set.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["line_comment", "keyword", "type", "call", "string", "number"]
        );
    }

    #[test]
    fn test_keywords() {
        let claims = claims_of("const prisma = new PrismaClient()");
        assert!(claims.contains(&("const".to_string(), TokenType::Control)));
        assert!(claims.contains(&("new".to_string(), TokenType::Control)));
        assert!(claims.contains(&("PrismaClient".to_string(), TokenType::Type)));
    }

    #[test]
    fn test_string_with_escaped_ampersand() {
        let claims = claims_of("const x = \"a&b\"");
        assert!(claims.contains(&("&quot;a&amp;b&quot;".to_string(), TokenType::String)));
        assert!(claims.contains(&("const".to_string(), TokenType::Control)));
    }

    #[test]
    fn test_single_and_double_quotes_share_style() {
        let claims = claims_of("log('single') + log(\"double\")");
        assert!(claims.contains(&("&#039;single&#039;".to_string(), TokenType::String)));
        assert!(claims.contains(&("&quot;double&quot;".to_string(), TokenType::String)));
    }

    #[test]
    fn test_call_heuristic_claims_identifier_only() {
        let claims = claims_of("await main()");
        assert!(claims.contains(&("main".to_string(), TokenType::Function)));
        assert!(claims.contains(&("await".to_string(), TokenType::Control)));
        assert!(!claims.iter().any(|(text, _)| text.contains('(')));
    }

    #[test]
    fn test_keyword_wins_over_call_heuristic() {
        // catch( parses as a call site, but the keyword rule ran first.
        let claims = claims_of("promise.catch(handler)");
        assert!(claims.contains(&("catch".to_string(), TokenType::Control)));
        assert!(!claims.contains(&("catch".to_string(), TokenType::Function)));
    }

    #[test]
    fn test_call_heuristic_needs_adjacent_paren() {
        let claims = claims_of("for (const unit of unitsData)");
        assert!(claims.contains(&("for".to_string(), TokenType::Control)));
        assert!(!claims.iter().any(|(_, t)| *t == TokenType::Function));
    }

    #[test]
    fn test_numbers_inside_strings_stay_strings() {
        let claims = claims_of("data: { url: '/unit/smp', order: 2 }");
        assert!(claims.contains(&("2".to_string(), TokenType::Number)));
        assert!(!claims.iter().any(|(text, t)| {
            *t == TokenType::Number && text != "2"
        }));
    }

    #[test]
    fn test_comment_owns_line() {
        let claims = claims_of("// 1. Create Superadmin User");
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].1, TokenType::Comment);
    }
}
