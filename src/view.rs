//! View models: HTML fragments for the page's fixed containers.
//!
//! Every function here is pure. It takes the data a container shows and
//! returns a [`Fragment`]: the HTML that replaces the container's children
//! plus the number of revealable items in it. Applying fragments to a page
//! is the job of [`crate::dom`].
//!
//! Fragments are built with [maud](https://maud.lambda.xyz/), so titles,
//! dates, project names and descriptions are escaped. Post bodies are
//! Markdown output and are inserted as-is.

use crate::markdown::markdown_to_html;
use crate::reveal::REVEAL_CLASS;
use crate::types::{BlogPostMeta, Project};
use maud::{Markup, PreEscaped, html};

/// Rendered body of a post slug that is not in the post table.
pub const NOT_FOUND_HTML: &str = "<h2>404 - Post Not Found</h2>";

/// Replacement children for one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    /// Number of revealable (`content-child`) items in `html`.
    pub revealable: usize,
}

impl Fragment {
    /// A fragment with no revealable items.
    pub fn plain(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            revealable: 0,
        }
    }

    fn items(markup: Markup, revealable: usize) -> Self {
        Self {
            html: markup.into_string(),
            revealable,
        }
    }
}

/// Project rows for the Tools tab.
///
/// An empty list renders a "No projects found." notice with nothing to reveal.
pub fn project_list(projects: &[Project]) -> Fragment {
    if projects.is_empty() {
        return Fragment::plain(
            html! { p class="text-gray-400" { "No projects found." } }.into_string(),
        );
    }
    let row_class = format!("flex flex-col sm:flex-row sm:space-x-8 {REVEAL_CLASS}");
    let markup = html! {
        @for project in projects {
            div class=(row_class) {
                p class="text-gray-300 w-full sm:w-40" {
                    a href=(project.url) target="_blank" rel="noopener noreferrer"
                        class="tool-link hover:underline" { (project.name) }
                }
                p class="flex-1" { (project.description) }
            }
        }
    };
    Fragment::items(markup, projects.len())
}

/// Entries of the blog list, one link per post in table order.
pub fn blog_list(posts: &[BlogPostMeta]) -> Fragment {
    let markup = html! {
        @for post in posts {
            div class=(REVEAL_CLASS) {
                a href=(post.href()) class="blog-link hover:underline cursor-pointer" { (post.title) }
                p class="text-sm text-gray-400" { (post.date) }
            }
        }
    };
    Fragment::items(markup, posts.len())
}

/// A rendered post body.
pub fn post(html: String) -> Fragment {
    Fragment::plain(html)
}

/// The body shown for an unknown slug.
pub fn not_found() -> Fragment {
    Fragment::plain(NOT_FOUND_HTML)
}

/// The about pane, rendered from Markdown as a single revealable block.
pub fn about(markdown: &str) -> Fragment {
    if markdown.trim().is_empty() {
        return Fragment::default();
    }
    let markup = html! {
        div class=(REVEAL_CLASS) { (PreEscaped(markdown_to_html(markdown))) }
    };
    Fragment::items(markup, 1)
}
