//! Markdown Rendering
//!
//! Renders assistant replies (the backend answers in Markdown) to HTML.
//! Raw HTML in the source is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Parse markdown into safe HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = parser.map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        // Replies use single newlines as line breaks
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_and_bold() {
        let html = parse_markdown("**Mess timings:**\n\n* Breakfast: 7:30 AM\n* Lunch: 12:30 PM");
        assert!(html.contains("<strong>Mess timings:</strong>"));
        assert!(html.contains("<li>Breakfast: 7:30 AM</li>"));
        assert!(html.contains("<ul>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
