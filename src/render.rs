//! HTML rendering for the search and report pages.

use std::fmt::Write;

use crate::models::Item;

/// Static form page served at `/`.
pub const INDEX_HTML: &str = include_str!("../static/index.html");

/// Render `items` as a bordered Name/Description table under `title`,
/// followed by a link back to the form.
///
/// The header row is always present, even when `items` is empty.
pub fn item_table(title: &str, items: &[Item]) -> String {
    let mut html = format!(
        "<h1>{}</h1><table border='1'><tr><th>Name</th><th>Description</th></tr>",
        escape(title)
    );

    for item in items {
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&item.name),
            escape(&item.description)
        );
    }

    html.push_str("</table><a href='/'>Back to form</a>");
    html
}

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "<tr><th>Name</th><th>Description</th></tr>";

    #[test]
    fn test_empty_table_has_headers_only() {
        let html = item_table("Search Results", &[]);
        assert!(html.starts_with("<h1>Search Results</h1>"));
        assert!(html.contains(HEADER));
        assert!(!html.contains("<td>"));
        assert!(html.ends_with("</table><a href='/'>Back to form</a>"));
    }

    #[test]
    fn test_rows_in_given_order() {
        let items = vec![
            Item::new("widget", "a small part"),
            Item::new("gadget", "a larger part"),
        ];
        let html = item_table("Report", &items);

        let widget = html
            .find("<tr><td>widget</td><td>a small part</td></tr>")
            .unwrap();
        let gadget = html
            .find("<tr><td>gadget</td><td>a larger part</td></tr>")
            .unwrap();
        assert!(widget < gadget);
    }

    #[test]
    fn test_cells_are_escaped() {
        let items = vec![Item::new("<b>bold</b>", "fish & 'chips'")];
        let html = item_table("Report", &items);

        assert!(html.contains("<td>&lt;b&gt;bold&lt;/b&gt;</td>"));
        assert!(html.contains("<td>fish &amp; &#39;chips&#39;</td>"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_index_page_has_all_forms() {
        for action in ["/insert", "/delete", "/update", "/search"] {
            assert!(
                INDEX_HTML.contains(&format!("action=\"{}\"", action)),
                "missing form for {}",
                action
            );
        }
        for field in ["name=\"newName\"", "name=\"newDescription\"", "name=\"description\""] {
            assert!(INDEX_HTML.contains(field), "missing field {}", field);
        }
        assert!(INDEX_HTML.contains("href=\"/report\""));
    }
}
