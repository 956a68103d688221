//! Report Markdown Renderer
//!
//! Renders report text with pulldown-cmark:
//! - Raw HTML is shown as text, never injected
//! - Links open in a new tab; script URLs are neutralized
//! - Bare http(s) URLs become links
//! - Single newlines are kept as line breaks

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render a report body to HTML
pub fn render_report(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

// Where the transformer is; bare URLs are only linked in Normal
enum State {
    Normal,
    InLink { depth: usize },
    InCodeBlock,
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

            Event::Start(Tag::Link { dest_url, .. }) => {
                events.push(Event::Html(CowStr::from(open_anchor(&dest_url))));
                state = match state {
                    State::InLink { depth } => State::InLink { depth: depth + 1 },
                    _ => State::InLink { depth: 1 },
                };
            }
            Event::End(TagEnd::Link) => {
                events.push(Event::Html(CowStr::from("</a>")));
                state = match state {
                    State::InLink { depth } if depth > 1 => State::InLink { depth: depth - 1 },
                    _ => State::Normal,
                };
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                events.push(Event::Start(Tag::CodeBlock(kind)));
                state = State::InCodeBlock;
            }
            Event::End(TagEnd::CodeBlock) => {
                events.push(Event::End(TagEnd::CodeBlock));
                state = State::Normal;
            }

            Event::SoftBreak => events.push(Event::HardBreak),

            Event::Text(text) if matches!(state, State::Normal) && contains_url(&text) => {
                events.extend(link_urls(&text));
            }

            other => events.push(other),
        }
    }

    events
}

const SCHEMES: [&str; 2] = ["https://", "http://"];

fn contains_url(text: &str) -> bool {
    SCHEMES.iter().any(|s| text.contains(s))
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    !(lower.starts_with("javascript:") || lower.starts_with("vbscript:") || lower.starts_with("data:"))
}

fn open_anchor(url: &str) -> String {
    let href = if is_safe_url(url) { escape_attr(url) } else { "#".to_string() };
    format!(r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#, href)
}

// Split text into plain runs and anchors around bare URLs
fn link_urls(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let start = SCHEMES.iter().filter_map(|s| remaining.find(s)).min();
        let Some(start) = start else {
            events.push(Event::Text(CowStr::from(remaining.to_string())));
            break;
        };

        if start > 0 {
            events.push(Event::Text(CowStr::from(remaining[..start].to_string())));
        }

        let rest = &remaining[start..];
        let end = url_end(rest);
        // Trailing sentence punctuation stays outside the link
        let url = rest[..end].trim_end_matches(&['.', ',', ';', ':', '!', '?'][..]);

        if SCHEMES.iter().any(|s| *s == url) {
            events.push(Event::Text(CowStr::from(url.to_string())));
        } else {
            events.push(Event::Html(CowStr::from(open_anchor(url))));
            events.push(Event::Text(CowStr::from(url.to_string())));
            events.push(Event::Html(CowStr::from("</a>")));
        }
        remaining = &rest[url.len()..];
    }

    events
}

// Byte length of the URL at the start of `text`; a `)` only ends it when unbalanced
fn url_end(text: &str) -> usize {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return i,
            ')' => depth -= 1,
            c if c.is_whitespace() || matches!(c, '<' | '>' | '"') => return i,
            _ => {}
        }
    }
    text.len()
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        assert!(render_report("**done**").contains("<strong>done</strong>"));
        assert!(render_report("~~old~~").contains("<del>old</del>"));
        assert!(render_report("- [x] audit").contains("checkbox"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_report("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_report("see <b>this</b>");
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = render_report("[dash](https://dune.com/pools)");
        assert!(html.contains(
            r#"<a href="https://dune.com/pools" target="_blank" rel="noopener noreferrer">dash</a>"#
        ));
    }

    #[test]
    fn test_script_links_neutralized() {
        let html = render_report("[x](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_bare_url_autolinked() {
        let html = render_report("report: https://t.me/pools.");
        assert!(html.contains(
            r#"<a href="https://t.me/pools" target="_blank" rel="noopener noreferrer">https://t.me/pools</a>."#
        ));
    }

    #[test]
    fn test_no_autolink_in_code() {
        assert!(!render_report("`https://a.io`").contains("<a "));
        assert!(!render_report("```\nhttps://a.io\n```").contains("<a "));
    }

    #[test]
    fn test_url_keeps_balanced_parens() {
        let html = render_report("see http://a.io/(b) now");
        assert!(html.contains(r#"<a href="http://a.io/(b)" target="_blank" rel="noopener noreferrer">"#));

        assert_eq!(url_end("http://a.io/(b)"), 15);
        assert_eq!(url_end("http://a.io/b) tail"), 13);
    }

    #[test]
    fn test_single_newline_is_line_break() {
        let html = render_report("first line\nsecond line");
        assert!(html.contains("first line<br />"));
        assert!(html.contains("second line"));
    }

    #[test]
    fn test_link_urls_splits_runs() {
        let events = link_urls("a http://x.io b");
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], Event::Text(CowStr::from("a ")));
        assert_eq!(events[4], Event::Text(CowStr::from(" b")));

        // a bare scheme is left as text
        assert_eq!(link_urls("https://").len(), 1);
    }
}
