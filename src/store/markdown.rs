use pulldown_cmark::{html, Options, Parser};

pub(crate) fn markdown_to_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);
    let mut body_html = String::new();
    html::push_html(&mut body_html, parser);
    body_html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_inside_paragraph() {
        let html = markdown_to_html("Hello *world*");
        assert_eq!(html.trim(), "<p>Hello <em>world</em></p>");
    }

    #[test]
    fn block_elements() {
        let html = markdown_to_html(
            "# Title\n\nSome [link](https://example.com).\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n",
        );
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<a href=\"https://example.com\">link</a>"));
        assert!(html.contains("<ul>\n<li>one</li>\n<li>two</li>\n</ul>"));
        assert!(html.contains("<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"));
    }

    #[test]
    fn extensions_are_enabled() {
        let html = markdown_to_html("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn empty_body_renders_nothing() {
        assert!(markdown_to_html("").is_empty());
    }
}
