//! HTML markup renderer
//!
//! Walks the escaped text once, emitting unclaimed slices verbatim and
//! wrapping each claimed slice in an inline-styled `<span>`. Character
//! content is never altered here; the markup is purely additive.

use super::rules::Claim;
use super::style::Theme;

/// Render escaped text with its claims as markup for a `<pre>` container.
pub fn render(escaped: &str, claims: &[Claim], theme: &Theme) -> String {
    let mut out = String::with_capacity(escaped.len() + claims.len() * 48);
    let mut pos = 0;

    for claim in claims {
        if claim.start > pos {
            out.push_str(&escaped[pos..claim.start]);
        }
        out.push_str("<span style=\"");
        out.push_str(&theme.style(claim.token_type).css());
        out.push_str("\">");
        out.push_str(&escaped[claim.start..claim.end]);
        out.push_str("</span>");
        pos = claim.end;
    }
    out.push_str(&escaped[pos..]);

    out
}
