//! Syntax highlighting engine
//!
//! Turns raw snippet text plus a language selector into markup with
//! embedded styling. The pipeline is: escape once, claim token spans with
//! the dialect's ordered rules, then render, either as HTML for the page
//! or as ANSI styling for the terminal preview.
//!
//! Highlighting is a pure function of its inputs, and it must run exactly
//! once per source text: it is not idempotent, and feeding its own output
//! back in would wrap the inserted markup again.

mod ansi;
mod builtin;
mod escape;
mod html;
mod language;
mod rules;
mod style;
mod tokens;

pub use escape::{escape, unescape};
pub use language::{Language, RuleSet};
pub use rules::{Claim, ClaimSet, PatternRule};
pub use style::{Color, Style, Theme};
pub use tokens::{TokenType, ALL_TOKEN_TYPES};

/// Highlighter holding the compiled rule sets for both dialects and the
/// theme used to render claims.
pub struct Highlighter {
    theme: Theme,
    schema: RuleSet,
    script: RuleSet,
}

impl Highlighter {
    /// Create a highlighter with the default dark theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::dark())
    }

    /// Create a highlighter with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            schema: builtin::schema_rules(),
            script: builtin::script_rules(),
        }
    }

    /// The theme claims are rendered with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn rules_for(&self, language: Language) -> &RuleSet {
        match language {
            Language::Schema => &self.schema,
            Language::Script => &self.script,
        }
    }

    /// Highlight source text as markup for a `<pre>` container.
    ///
    /// The result is fully escaped; the renderer embedding it must not
    /// escape it again.
    pub fn to_html(&self, source: &str, language: Language) -> String {
        let escaped = escape::escape(source);
        let claims = self.rules_for(language).tokenize(&escaped);
        html::render(&escaped, &claims, &self.theme)
    }

    /// Highlight source text for terminal display.
    pub fn to_ansi(&self, source: &str, language: Language) -> String {
        let escaped = escape::escape(source);
        let claims = self.rules_for(language).tokenize(&escaped);
        ansi::render(&escaped, &claims, &self.theme)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot HTML highlighting with the default theme.
pub fn highlight(source: &str, language: Language) -> String {
    Highlighter::new().to_html(source, language)
}
