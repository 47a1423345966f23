/// Structured row model for every listing the service renders.
///
/// Handlers build a `Table` and only then turn it into markup, so row count
/// and membership can be asserted without scraping HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Renders one `<tr>` per row and nothing else, so the row count of the
    /// document equals the number of listed items.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>");
        html
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wraps rendered body content in a minimal HTML document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n\
         <h1>{}</h1>\n{}\n</body>\n</html>",
        escape(title),
        escape(title),
        body
    )
}

pub fn unknown_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let items: String = tokens
        .iter()
        .map(|t| format!("<li>{}</li>", escape(t)))
        .collect();
    format!("<p>Not in catalog:</p>\n<ul>{}</ul>", items)
}
