//! Colors, styles and themes
//!
//! A `Theme` maps every token class to a `Style`. The default dark theme
//! carries the palette the viewer has always used; individual entries can
//! be overridden from a small TOML file.

use std::fs;
use std::path::Path;

use crate::error::{Result, ViewerError};

use super::tokens::TokenType;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Uppercase `#RRGGBB` form, as emitted into markup.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Visual style for one token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub color: Color,
    /// Bold text
    pub bold: bool,
}

impl Style {
    /// Create a style with just a foreground color.
    pub fn fg(color: Color) -> Self {
        Self { color, bold: false }
    }

    /// Builder: set bold.
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// CSS declarations for the HTML wrapper.
    pub fn css(&self) -> String {
        if self.bold {
            format!("color: {}; font-weight: bold;", self.color.to_hex())
        } else {
            format!("color: {};", self.color.to_hex())
        }
    }
}

/// Resolved style for every token class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    comment: Style,
    keyword: Style,
    control: Style,
    type_name: Style,
    annotation: Style,
    builtin: Style,
    function: Style,
    string: Style,
    number: Style,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            comment: TokenType::Comment.default_style(),
            keyword: TokenType::Keyword.default_style(),
            control: TokenType::Control.default_style(),
            type_name: TokenType::Type.default_style(),
            annotation: TokenType::Annotation.default_style(),
            builtin: TokenType::Builtin.default_style(),
            function: TokenType::Function.default_style(),
            string: TokenType::String.default_style(),
            number: TokenType::Number.default_style(),
        }
    }

    /// Style for a token class.
    pub fn style(&self, token_type: TokenType) -> Style {
        *self.slot(token_type)
    }

    /// Replace the style for a token class.
    pub fn set(&mut self, token_type: TokenType, style: Style) {
        *self.slot_mut(token_type) = style;
    }

    fn slot(&self, token_type: TokenType) -> &Style {
        match token_type {
            TokenType::Comment => &self.comment,
            TokenType::Keyword => &self.keyword,
            TokenType::Control => &self.control,
            TokenType::Type => &self.type_name,
            TokenType::Annotation => &self.annotation,
            TokenType::Builtin => &self.builtin,
            TokenType::Function => &self.function,
            TokenType::String => &self.string,
            TokenType::Number => &self.number,
        }
    }

    fn slot_mut(&mut self, token_type: TokenType) -> &mut Style {
        match token_type {
            TokenType::Comment => &mut self.comment,
            TokenType::Keyword => &mut self.keyword,
            TokenType::Control => &mut self.control,
            TokenType::Type => &mut self.type_name,
            TokenType::Annotation => &mut self.annotation,
            TokenType::Builtin => &mut self.builtin,
            TokenType::Function => &mut self.function,
            TokenType::String => &mut self.string,
            TokenType::Number => &mut self.number,
        }
    }

    /// Parse a theme file: the default dark theme with entries overridden
    /// from `[colors]` (hex strings) and `[bold]` (booleans), keyed by
    /// token class name.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| ViewerError::Theme(e.to_string()))?;

        let mut theme = Theme::dark();

        if let Some(colors) = table.get("colors") {
            let colors = colors
                .as_table()
                .ok_or_else(|| ViewerError::Theme("[colors] must be a table".to_string()))?;
            for (name, value) in colors {
                let token_type = token_for(name)?;
                let hex = value.as_str().ok_or_else(|| {
                    ViewerError::Theme(format!("color for `{name}` must be a string"))
                })?;
                let color = Color::from_hex(hex).ok_or_else(|| {
                    ViewerError::Theme(format!("invalid color for `{name}`: {hex}"))
                })?;
                theme.slot_mut(token_type).color = color;
            }
        }

        if let Some(bold) = table.get("bold") {
            let bold = bold
                .as_table()
                .ok_or_else(|| ViewerError::Theme("[bold] must be a table".to_string()))?;
            for (name, value) in bold {
                let token_type = token_for(name)?;
                let flag = value.as_bool().ok_or_else(|| {
                    ViewerError::Theme(format!("bold for `{name}` must be a boolean"))
                })?;
                theme.slot_mut(token_type).bold = flag;
            }
        }

        Ok(theme)
    }

    /// Load a theme file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn token_for(name: &str) -> Result<TokenType> {
    TokenType::from_name(name)
        .ok_or_else(|| ViewerError::Theme(format!("unknown token class: {name}")))
}
