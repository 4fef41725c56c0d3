//! ANSI terminal renderer
//!
//! Drives the same claim pass as the HTML renderer but emits
//! crossterm-styled text for the `show` preview. Claims index into the
//! escaped text, so every slice is unescaped on the way out; the entity
//! guard in the rule engine keeps slice boundaries off the middle of an
//! entity.

use crossterm::style::{Color as TermColor, Stylize};

use super::escape;
use super::rules::Claim;
use super::style::Theme;

/// Render escaped text with its claims as ANSI-styled terminal output.
pub fn render(escaped: &str, claims: &[Claim], theme: &Theme) -> String {
    let mut out = String::with_capacity(escaped.len() + claims.len() * 16);
    let mut pos = 0;

    for claim in claims {
        if claim.start > pos {
            out.push_str(&escape::unescape(&escaped[pos..claim.start]));
        }
        let style = theme.style(claim.token_type);
        let color = TermColor::Rgb {
            r: style.color.r,
            g: style.color.g,
            b: style.color.b,
        };
        let mut styled = escape::unescape(&escaped[claim.start..claim.end]).with(color);
        if style.bold {
            styled = styled.bold();
        }
        out.push_str(&styled.to_string());
        pos = claim.end;
    }
    out.push_str(&escape::unescape(&escaped[pos..]));

    out
}
