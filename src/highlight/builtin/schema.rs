//! Schema dialect rules
//!
//! The declarative dialect: the schema file itself, plus the env and SQL
//! setup snippets, which the viewer displays with the same rule set.

use crate::highlight::language::RuleSet;
use crate::highlight::rules::PatternRule;
use crate::highlight::tokens::TokenType;

/// Create the schema dialect rule set.
pub fn schema_rules() -> RuleSet {
    let mut set = RuleSet::new("schema");

    // Line comments claim first and own the rest of the line, including
    // anything on it that would otherwise read as a keyword or literal.
    if let Some(rule) = PatternRule::new("line_comment", r"//.*", TokenType::Comment) {
        set.add(rule);
    }

    // Block declaration keywords
    if let Some(rule) = PatternRule::new(
        "keyword",
        r"\b(?:model|enum|generator|datasource)\b",
        TokenType::Keyword,
    ) {
        set.add(rule);
    }

    // Primitive field types
    if let Some(rule) = PatternRule::new(
        "type",
        r"\b(?:String|Int|Boolean|DateTime|Json)\b",
        TokenType::Type,
    ) {
        set.add(rule);
    }

    // @id, @unique, @default; the dotted tail of @db.Text stays plain
    if let Some(rule) = PatternRule::new("annotation", r"@\w+", TokenType::Annotation) {
        set.add(rule);
    }

    // Default-value builtins, call parentheses included in the claim
    if let Some(rule) = PatternRule::new(
        "builtin_call",
        r"\b(?:now|cuid|uuid)\(\)",
        TokenType::Builtin,
    ) {
        set.add(rule);
    }

    // Double-quoted strings; quotes appear in escaped form by the time
    // rules run
    if let Some(rule) = PatternRule::new("string", r"&quot;.*?&quot;", TokenType::String) {
        set.add(rule);
    }

    // Whole-word digit runs
    if let Some(rule) = PatternRule::new("number", r"\b\d+\b", TokenType::Number) {
        set.add(rule);
    }

    set
}
