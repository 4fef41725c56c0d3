//! Language selection and per-dialect rule sets
//!
//! The viewer supports exactly two dialects. Tags and file extensions
//! resolve to a `Language`, and a `RuleSet` holds one dialect's ordered
//! rules together with the claim pass that runs them.

use std::path::Path;

use super::escape;
use super::rules::{Claim, ClaimSet, PatternRule};

/// The two supported dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Declarative schema/config dialect: the schema file, the env file
    /// and the SQL setup script.
    Schema,
    /// General scripting dialect: seed script, server actions, components.
    Script,
}

impl Language {
    /// Strict tag lookup. Unknown tags are the caller's problem.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.to_ascii_lowercase().as_str() {
            "schema" | "prisma" => Some(Language::Schema),
            "script" | "typescript" | "ts" => Some(Language::Script),
            _ => None,
        }
    }

    /// Tag lookup with the viewer's historical fallback: anything that is
    /// not the schema dialect highlights as the scripting dialect.
    pub fn from_tag_lossy(tag: &str) -> Language {
        Self::from_tag(tag).unwrap_or(Language::Script)
    }

    /// Detect a dialect from a file extension.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "prisma" | "sql" | "env" | "example" => Some(Language::Schema),
            "ts" | "tsx" | "js" | "jsx" | "mjs" => Some(Language::Script),
            _ => None,
        }
    }

    /// Detect a dialect from a filename.
    pub fn from_path(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Canonical tag for this dialect.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Schema => "schema",
            Language::Script => "script",
        }
    }
}

/// An ordered set of pattern rules for one dialect.
///
/// Registration order is application order. Rules match against escaped
/// text and the first rule to claim a span owns it.
pub struct RuleSet {
    /// Dialect name for debugging
    pub name: String,
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Append a rule after the ones already registered.
    pub fn add(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// The registered rules, in application order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Run every rule over the escaped text, in order, claiming matched
    /// spans in an ownership map. A match loses if its span overlaps an
    /// earlier claim, or if it would cut through an escape entity (the
    /// digit run inside `&#039;` is not a number). Returns the claims
    /// sorted by start offset.
    pub fn tokenize(&self, escaped: &str) -> Vec<Claim> {
        let entities = escape::entity_spans(escaped);
        let mut claims = ClaimSet::new();

        for rule in &self.rules {
            match rule.capture {
                None => {
                    for m in rule.pattern.find_iter(escaped) {
                        if escape::splits_entity(&entities, m.start(), m.end()) {
                            continue;
                        }
                        claims.insert(Claim::new(m.start(), m.end(), rule.token_type));
                    }
                }
                Some(group) => {
                    for caps in rule.pattern.captures_iter(escaped) {
                        let m = match caps.get(group) {
                            Some(m) => m,
                            None => continue,
                        };
                        if escape::splits_entity(&entities, m.start(), m.end()) {
                            continue;
                        }
                        claims.insert(Claim::new(m.start(), m.end(), rule.token_type));
                    }
                }
            }
        }

        claims.into_sorted()
    }
}
