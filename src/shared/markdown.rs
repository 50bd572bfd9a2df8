//! Markdown-to-HTML rendering for stored reports.

use pulldown_cmark::{html, Options, Parser};

/// Convert report markdown to HTML.
///
/// Pure and deterministic. Tables are enabled because the report template
/// instructs table-like sections. The output is attached to detail read
/// responses and never persisted.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let html = render_markdown("# Report\n\nThis is **bullish**.");
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<strong>bullish</strong>"));
        assert!(html.contains("<p>"));
    }

    #[test]
    fn test_tables() {
        let html = render_markdown("| Metric | Value |\n|--------|-------|\n| P/E | 30 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Metric</th>"));
        assert!(html.contains("<td>30</td>"));
    }

    #[test]
    fn test_lists() {
        let html = render_markdown("- buy\n- hold\n- sell");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>hold</li>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let markdown = "## Thesis\n\n1. growth\n2. margins";
        assert_eq!(render_markdown(markdown), render_markdown(markdown));
    }
}
