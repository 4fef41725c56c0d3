//! Token classes for syntax highlighting
//!
//! This module defines the semantic token classes the rule sets can
//! assign and their default visual styles.

use super::style::{Color, Style};

/// Semantic token classes recognized by the rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Line comments (// to end of line)
    Comment,
    /// Block declaration keywords of the schema dialect (model, enum, ...)
    Keyword,
    /// Flow and binding keywords of the scripting dialect (const, await, ...)
    Control,
    /// Type and class names
    Type,
    /// @-prefixed annotations (@id, @unique, @default)
    Annotation,
    /// Built-in default-value calls (now(), cuid(), uuid())
    Builtin,
    /// Call sites found by the identifier-before-paren heuristic
    Function,
    /// String literals
    String,
    /// Integer literals
    Number,
}

/// Every token class, for theme iteration.
pub const ALL_TOKEN_TYPES: [TokenType; 9] = [
    TokenType::Comment,
    TokenType::Keyword,
    TokenType::Control,
    TokenType::Type,
    TokenType::Annotation,
    TokenType::Builtin,
    TokenType::Function,
    TokenType::String,
    TokenType::Number,
];

impl TokenType {
    /// Get the default style for this token class.
    ///
    /// The palette follows the VS Code dark defaults the viewer has always
    /// shipped; `Keyword` and `Control` are separate slots because the two
    /// dialects color their keywords differently.
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::new(0x6A, 0x99, 0x55)),
            TokenType::Keyword => Style::fg(Color::new(0x56, 0x9C, 0xD6)).with_bold(),
            TokenType::Control => Style::fg(Color::new(0xC5, 0x86, 0xC0)),
            TokenType::Type => Style::fg(Color::new(0x4E, 0xC9, 0xB0)),
            TokenType::Annotation => Style::fg(Color::new(0xC5, 0x86, 0xC0)),
            TokenType::Builtin => Style::fg(Color::new(0xDC, 0xDC, 0xAA)),
            TokenType::Function => Style::fg(Color::new(0xDC, 0xDC, 0xAA)),
            TokenType::String => Style::fg(Color::new(0xCE, 0x91, 0x78)),
            TokenType::Number => Style::fg(Color::new(0xB5, 0xCE, 0xA8)),
        }
    }

    /// Get the name used for this token class in theme files.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::Keyword => "keyword",
            TokenType::Control => "control",
            TokenType::Type => "type",
            TokenType::Annotation => "annotation",
            TokenType::Builtin => "builtin",
            TokenType::Function => "function",
            TokenType::String => "string",
            TokenType::Number => "number",
        }
    }

    /// Parse a token class from its theme-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(TokenType::Comment),
            "keyword" => Some(TokenType::Keyword),
            "control" => Some(TokenType::Control),
            "type" => Some(TokenType::Type),
            "annotation" => Some(TokenType::Annotation),
            "builtin" => Some(TokenType::Builtin),
            "function" => Some(TokenType::Function),
            "string" => Some(TokenType::String),
            "number" => Some(TokenType::Number),
            _ => None,
        }
    }
}
