//! Markdown to HTML conversion for blog posts and the about pane.

use pulldown_cmark::{Options, Parser, html};

/// Render Markdown to an HTML fragment.
///
/// Tables and strikethrough are enabled; raw HTML in the source passes
/// through unchanged.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Markdown substituted for a post whose source could not be loaded.
pub fn placeholder_markdown(path: &str) -> String {
    format!(
        "## Blog Post Not Found\n\nThis is placeholder content because the file at `{path}` could not be loaded."
    )
}
