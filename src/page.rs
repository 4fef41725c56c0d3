//! Static page assembly
//!
//! Builds the single-page viewer around the highlighter's markup: a tab
//! bar, a dark scrollable code container per tab, a copy button and the
//! setup notes. Tab switching is pure CSS (one radio input per tab); the
//! only script on the page is the clipboard handler.

use crate::content::Snippet;
use crate::highlight::{escape, Highlighter};

const PAGE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  background: #f4f4f5;
  color: #18181b;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}
header {
  background: #ffffff;
  border-bottom: 1px solid #e4e4e7;
  padding: 1rem 1.5rem;
}
header h1 { margin: 0; font-size: 1.25rem; }
header p { margin: 0.25rem 0 0; font-size: 0.8rem; color: #71717a; }
main { max-width: 72rem; margin: 0 auto; padding: 1.5rem; }
main > input[type="radio"] { display: none; }
.tabs { display: flex; flex-wrap: wrap; gap: 0.25rem; margin-bottom: 0.75rem; }
.tabs label {
  padding: 0.35rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  border-radius: 0.375rem;
  background: #e4e4e7;
  color: #52525b;
  cursor: pointer;
}
.tabs label:hover { color: #18181b; }
.panel { display: none; }
.panel-head {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}
.panel-head h2 { margin: 0; font-size: 1rem; }
button.copy {
  padding: 0.35rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  border: 1px solid #d4d4d8;
  border-radius: 0.375rem;
  background: #ffffff;
  color: #3f3f46;
  cursor: pointer;
}
button.copy:hover { background: #fafafa; }
.viewer {
  height: 65vh;
  overflow: auto;
  border-radius: 0.75rem;
  border: 1px solid #27272a;
  background: #1e1e1e;
}
.viewer pre {
  margin: 0;
  padding: 1rem;
  font-family: ui-monospace, "Cascadia Code", "Fira Code", monospace;
  font-size: 0.8rem;
  line-height: 1.6;
  color: #d4d4d4;
}
.viewer::-webkit-scrollbar { width: 10px; height: 10px; }
.viewer::-webkit-scrollbar-track { background: #1e1e1e; }
.viewer::-webkit-scrollbar-thumb {
  background: #424242;
  border-radius: 5px;
  border: 2px solid #1e1e1e;
}
.viewer::-webkit-scrollbar-thumb:hover { background: #555; }
.notes {
  margin-top: 0.75rem;
  padding: 0.75rem 1rem;
  border: 1px solid #e4e4e7;
  border-radius: 0.75rem;
  background: #ffffff;
  font-size: 0.8rem;
}
.notes h3 { margin: 0 0 0.5rem; font-size: 0.8rem; }
.notes ol { margin: 0; padding-left: 1.25rem; color: #52525b; }
.notes li + li { margin-top: 0.25rem; }
"#;

const COPY_SCRIPT: &str = r#"
document.querySelectorAll("button.copy").forEach((btn) => {
  btn.addEventListener("click", () => {
    const code = document.getElementById(btn.dataset.target);
    navigator.clipboard.writeText(code.textContent).then(() => {
      btn.textContent = "Copied";
      setTimeout(() => { btn.textContent = "Copy"; }, 2000);
    });
  });
});
"#;

/// Per-tab CSS: show the checked tab's panel and mark its label active.
fn tab_css(snippets: &[Snippet]) -> String {
    let mut css = String::new();
    for snippet in snippets {
        css.push_str(&format!(
            "#tab-{name}:checked ~ #panel-{name} {{ display: block; }}\n\
             #tab-{name}:checked ~ .tabs label[for=\"tab-{name}\"] {{ background: #ffffff; color: #18181b; }}\n",
            name = snippet.name
        ));
    }
    css
}

/// Render the complete HTML document.
pub fn build_page(snippets: &[Snippet], highlighter: &Highlighter) -> String {
    let mut page = String::with_capacity(1 << 17);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>Schema Architect</title>\n<style>");
    page.push_str(PAGE_CSS);
    page.push_str(&tab_css(snippets));
    page.push_str("</style>\n</head>\n<body>\n");

    page.push_str("<header>\n<h1>Schema Architect</h1>\n");
    page.push_str("<p>CMS boilerplate reference: copy-ready schema, seed and app code</p>\n");
    page.push_str("</header>\n<main>\n");

    // Radio inputs drive the CSS-only tab switching; panels and the tab
    // bar must stay their siblings.
    for (i, snippet) in snippets.iter().enumerate() {
        page.push_str(&format!(
            "<input type=\"radio\" name=\"tab\" id=\"tab-{}\"{}>\n",
            snippet.name,
            if i == 0 { " checked" } else { "" }
        ));
    }

    page.push_str("<nav class=\"tabs\">\n");
    for snippet in snippets {
        page.push_str(&format!(
            "<label for=\"tab-{}\">{}</label>\n",
            snippet.name,
            escape(snippet.label)
        ));
    }
    page.push_str("</nav>\n");

    for snippet in snippets {
        page.push_str(&format!(
            "<section class=\"panel\" id=\"panel-{}\">\n",
            snippet.name
        ));
        page.push_str("<div class=\"panel-head\">\n");
        page.push_str(&format!("<h2>{}</h2>\n", escape(snippet.title)));
        page.push_str(&format!(
            "<button class=\"copy\" data-target=\"code-{}\">Copy</button>\n",
            snippet.name
        ));
        page.push_str("</div>\n<div class=\"viewer\">\n");
        page.push_str(&format!("<pre><code id=\"code-{}\">", snippet.name));
        page.push_str(&highlighter.to_html(snippet.body, snippet.language));
        page.push_str("</code></pre>\n</div>\n");

        page.push_str("<aside class=\"notes\">\n<h3>Next steps</h3>\n<ol>\n");
        for note in snippet.notes {
            page.push_str(&format!("<li>{}</li>\n", escape(note)));
        }
        page.push_str("</ol>\n</aside>\n</section>\n");
    }

    page.push_str("</main>\n<script>");
    page.push_str(COPY_SCRIPT);
    page.push_str("</script>\n</body>\n</html>\n");

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SNIPPETS;

    #[test]
    fn test_page_contains_every_tab() {
        let page = build_page(SNIPPETS, &Highlighter::new());
        for snippet in SNIPPETS {
            assert!(page.contains(&format!("id=\"tab-{}\"", snippet.name)));
            assert!(page.contains(&format!("id=\"panel-{}\"", snippet.name)));
            assert!(page.contains(&escape(snippet.label)));
        }
    }

    #[test]
    fn test_first_tab_checked() {
        let page = build_page(SNIPPETS, &Highlighter::new());
        assert!(page.contains("id=\"tab-schema\" checked"));
        assert_eq!(page.matches(" checked").count(), 1);
    }

    #[test]
    fn test_page_contains_highlighted_markup() {
        let page = build_page(SNIPPETS, &Highlighter::new());
        // the schema tab's `model` keyword, highlighted
        assert!(page.contains("<span style=\"color: #569CD6; font-weight: bold;\">model</span>"));
        // a scripting tab's `const` keyword, highlighted
        assert!(page.contains("<span style=\"color: #C586C0;\">const</span>"));
    }

    #[test]
    fn test_page_has_copy_affordance() {
        let page = build_page(SNIPPETS, &Highlighter::new());
        assert!(page.contains("navigator.clipboard"));
        assert_eq!(
            page.matches("<button class=\"copy\"").count(),
            SNIPPETS.len()
        );
    }

    #[test]
    fn test_snippet_bodies_are_escaped() {
        let page = build_page(SNIPPETS, &Highlighter::new());
        // The component snippets are full of JSX; none of it may survive
        // as raw markup.
        assert!(!page.contains("<nav className="));
        assert!(page.contains("&lt;nav className="));
    }
}
