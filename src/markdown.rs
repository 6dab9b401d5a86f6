//! Markdown Rendering
//!
//! Thread bodies and FAQ answers are user-authored markdown. Raw HTML
//! in the source is escaped rather than passed through, and images are
//! size-constrained.

use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Render user-authored markdown to HTML.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = sanitize_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render markdown for inline use (strips outer <p> tags)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn sanitize_events(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    // Depth > 0 means we are inside an image tag and dropping its alt
    // text events.
    let mut image_depth = 0usize;

    for event in parser {
        if image_depth > 0 {
            match event {
                Event::Start(_) => image_depth += 1,
                Event::End(TagEnd::Image) | Event::End(_) => image_depth -= 1,
                _ => {}
            }
            continue;
        }

        match event {
            // Raw HTML from users renders as text, not markup.
            Event::Html(text) | Event::InlineHtml(text) => {
                events.push(Event::Text(text));
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                let html = format!(
                    r#"<img src="{}" style="max-width: 100%; max-height: 400px; display: block; border-radius: 4px;" />"#,
                    dest_url
                );
                events.push(Event::Html(html.into()));
                image_depth = 1;
            }
            other => events.push(other),
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("# Welcome\n\nSome **bold** text.");
        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn images_are_constrained_and_alt_text_dropped() {
        let html = render_markdown("![a kitten](https://example.com/kitten.png)");
        assert!(html.contains(r#"src="https://example.com/kitten.png""#));
        assert!(html.contains("max-width: 100%"));
        assert!(!html.contains("a kitten"));
    }

    #[test]
    fn inline_rendering_strips_the_outer_paragraph() {
        assert_eq!(
            render_markdown_inline("just *one* line"),
            "just <em>one</em> line"
        );
    }
}
