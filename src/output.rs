//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output leads with what a reader navigates by, the route, and shows the
//! files behind it as indented context lines. A post is shown by its slug
//! route first, its source path and title second.
//!
//! # Output Format
//!
//! ## Routes
//!
//! ```text
//! Routes
//! /  →  blog list (2 posts)
//! /about  →  about
//! 001 /blogs/Cache-Poisoning-Dos
//!     Source: blogs/blog1.md
//!     Title: How I Caused a Denial of Service by Poisoning the Cache (08 Aug 2025)
//! ```
//!
//! ## View
//!
//! ```text
//! /blogs/Cache-Poisoning-Dos
//!     View: post Cache-Poisoning-Dos
//!     Nav: nav-home
//!     Tab: blogs-tab
//!     Theme: light
//!     Visible: main-content, blogs-section, blog-viewer, blog-content
//!     Reveal: tools-section, 1 item over 100ms
//! ```
//!
//! ## Build
//!
//! ```text
//! /  →  index.html
//! /about  →  about/index.html
//! 001 /blogs/Cache-Poisoning-Dos  →  blogs/Cache-Poisoning-Dos/index.html
//!
//! Copied 3 site files
//! Prerendered 3 pages into dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::app::App;
use crate::config::SiteConfig;
use crate::dom::{ElementId, HeadlessDocument};
use crate::fetch::ContentSource;
use crate::prerender::PrerenderSummary;
use crate::route::{BLOGS_PREFIX, ViewState};
use crate::storage::Storage;
use crate::theme::{LIGHT_MODE_CLASS, Theme};
use std::path::Path;
use std::time::Duration;

/// Containers listed on the `Visible:` line, in page order.
const VIEW_CONTAINERS: [ElementId; 7] = [
    ElementId::MainContent,
    ElementId::BlogsSection,
    ElementId::BlogsList,
    ElementId::BlogViewer,
    ElementId::ToolsSection,
    ElementId::AboutSection,
    ElementId::BlogContent,
];

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn view_label(view: &ViewState) -> String {
    match view {
        ViewState::About => "about".to_string(),
        ViewState::BlogList => "blog list".to_string(),
        ViewState::BlogPost(slug) => format!("post {slug}"),
    }
}

fn millis(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

/// Format a route line with its numbered position when it is a post.
///
/// ```text
/// /about  →  about/index.html
/// 002 /blogs/second  →  blogs/second/index.html
/// ```
fn route_line(post_index: Option<usize>, path: &str, target: &str) -> String {
    match post_index {
        Some(i) => format!("{} {}  →  {}", format_index(i), path, target),
        None => format!("{}  →  {}", path, target),
    }
}

// ============================================================================
// routes
// ============================================================================

pub fn format_routes(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Routes".to_string()];
    lines.push(route_line(
        None,
        "/",
        &format!("blog list ({})", plural(config.posts.len(), "post", "posts")),
    ));
    lines.push(route_line(None, "/about", "about"));

    for (i, post) in config.posts.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), post.href()));
        lines.push(format!("{}Source: {}", indent(1), post.source_path));
        lines.push(format!("{}Title: {} ({})", indent(1), post.title, post.date));
    }
    lines
}

pub fn print_routes(config: &SiteConfig) {
    for line in format_routes(config) {
        println!("{}", line);
    }
}

// ============================================================================
// view
// ============================================================================

/// Summarize the state a loaded app left its document in.
pub fn format_view<S, St>(app: &App<S, HeadlessDocument, St>) -> Vec<String>
where
    S: ContentSource,
    St: Storage,
{
    let doc = app.document();
    let mut lines = vec![app.location().path().to_string()];

    lines.push(format!("{}View: {}", indent(1), view_label(app.view_state())));

    let nav = [ElementId::NavHome, ElementId::NavAbout]
        .into_iter()
        .find(|id| doc.is_active(*id))
        .map(ElementId::as_str)
        .unwrap_or("none");
    lines.push(format!("{}Nav: {}", indent(1), nav));

    let tab = [ElementId::BlogsTab, ElementId::ToolsTab]
        .into_iter()
        .find(|id| doc.is_active(*id))
        .map(ElementId::as_str)
        .unwrap_or("none");
    lines.push(format!("{}Tab: {}", indent(1), tab));

    let theme = if doc.has_body_class(LIGHT_MODE_CLASS) {
        Theme::Light
    } else {
        Theme::Dark
    };
    lines.push(format!("{}Theme: {}", indent(1), theme.as_str()));

    let visible: Vec<&str> = VIEW_CONTAINERS
        .into_iter()
        .filter(|id| doc.is_visible(*id))
        .map(ElementId::as_str)
        .collect();
    lines.push(format!("{}Visible: {}", indent(1), visible.join(", ")));

    if let Some(reveal) = doc.last_reveal() {
        lines.push(format!(
            "{}Reveal: {}, {} over {}",
            indent(1),
            reveal.target.as_str(),
            plural(reveal.plan.delays.len(), "item", "items"),
            millis(reveal.plan.total())
        ));
    }

    let pending = app.pending().count();
    if pending > 0 {
        lines.push(format!("{}Pending: {}", indent(1), plural(pending, "fetch", "fetches")));
    }
    lines
}

pub fn print_view<S: ContentSource, St: Storage>(app: &App<S, HeadlessDocument, St>) {
    for line in format_view(app) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_prerender(summary: &PrerenderSummary, output: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut post_index = 0;
    for page in &summary.pages {
        let numbered = if page.path.starts_with(BLOGS_PREFIX) {
            post_index += 1;
            Some(post_index)
        } else {
            None
        };
        lines.push(route_line(numbered, &page.path, &page.file.display().to_string()));
    }
    lines.push(String::new());
    lines.push(format!(
        "Copied {}",
        plural(summary.copied.len(), "site file", "site files")
    ));
    lines.push(format!(
        "Prerendered {} into {}",
        plural(summary.pages.len(), "page", "pages"),
        output.display()
    ));
    lines
}

pub fn print_prerender(summary: &PrerenderSummary, output: &Path) {
    for line in format_prerender(summary, output) {
        println!("{}", line);
    }
}

// ============================================================================
// check / theme
// ============================================================================

pub fn format_check(config: &SiteConfig, site_root: &Path) -> Vec<String> {
    vec![
        format!("Site OK: {}", site_root.display()),
        format!("{}Title: {}", indent(1), config.title),
        format!("{}Base URL: {}", indent(1), config.base_url),
        format!("{}Projects: {}", indent(1), config.projects_path),
        format!(
            "{}Posts: {}",
            indent(1),
            plural(config.posts.len(), "post", "posts")
        ),
    ]
}

pub fn print_check(config: &SiteConfig, site_root: &Path) {
    for line in format_check(config, site_root) {
        println!("{}", line);
    }
}

pub fn format_theme(theme: Theme, storage_path: &Path) -> String {
    format!("{} ({})", theme.as_str(), storage_path.display())
}

pub fn print_theme(theme: Theme, storage_path: &Path) {
    println!("{}", format_theme(theme, storage_path));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prerender::RenderedPage;
    use crate::test_helpers::{app_at, sample_config};
    use std::path::PathBuf;

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "post", "posts"), "1 post");
        assert_eq!(plural(0, "post", "posts"), "0 posts");
    }

    #[test]
    fn route_line_numbers_posts_only() {
        assert_eq!(route_line(None, "/about", "about"), "/about  →  about");
        assert_eq!(route_line(Some(2), "/blogs/x", "f"), "002 /blogs/x  →  f");
    }

    // =========================================================================
    // Commands
    // =========================================================================

    #[test]
    fn routes_list_posts_with_sources() {
        let lines = format_routes(&sample_config());
        assert_eq!(lines[0], "Routes");
        assert_eq!(lines[1], "/  →  blog list (3 posts)");
        assert_eq!(lines[2], "/about  →  about");
        assert_eq!(lines[3], "001 /blogs/Cache-Poisoning-Dos");
        assert_eq!(lines[4], "    Source: blogs/blog1.md");
        assert!(lines[5].starts_with("    Title: Title of Cache-Poisoning-Dos"));
    }

    #[test]
    fn view_of_loaded_post() {
        let mut app = app_at("/blogs/Cache-Poisoning-Dos");
        app.load();
        app.settle();
        let lines = format_view(&app);
        assert_eq!(lines[0], "/blogs/Cache-Poisoning-Dos");
        assert_eq!(lines[1], "    View: post Cache-Poisoning-Dos");
        assert_eq!(lines[2], "    Nav: nav-home");
        assert_eq!(lines[3], "    Tab: blogs-tab");
        assert_eq!(lines[4], "    Theme: light");
        assert_eq!(
            lines[5],
            "    Visible: main-content, blogs-section, blog-viewer, blog-content"
        );
        assert_eq!(lines[6], "    Reveal: tools-section, 1 item over 100ms");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn view_reports_pending_fetches() {
        let mut app = app_at("/about");
        app.load();
        let lines = format_view(&app);
        assert!(lines.contains(&"    Nav: nav-about".to_string()));
        assert!(lines.contains(&"    Visible: about-section".to_string()));
        assert_eq!(lines.last().unwrap(), "    Pending: 1 fetch");
    }

    #[test]
    fn prerender_summary() {
        let summary = PrerenderSummary {
            pages: vec![
                RenderedPage {
                    path: "/".to_string(),
                    file: PathBuf::from("index.html"),
                    view: ViewState::BlogList,
                },
                RenderedPage {
                    path: "/blogs/a".to_string(),
                    file: PathBuf::from("blogs/a/index.html"),
                    view: ViewState::BlogPost("a".to_string()),
                },
            ],
            copied: vec![PathBuf::from("projects.json")],
        };
        let lines = format_prerender(&summary, Path::new("dist"));
        assert_eq!(lines[0], "/  →  index.html");
        assert_eq!(lines[1], "001 /blogs/a  →  blogs/a/index.html");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Copied 1 site file");
        assert_eq!(lines[4], "Prerendered 2 pages into dist");
    }

    #[test]
    fn check_summary() {
        let lines = format_check(&sample_config(), Path::new("site"));
        assert_eq!(lines[0], "Site OK: site");
        assert!(lines.contains(&"    Posts: 3 posts".to_string()));
    }

    #[test]
    fn theme_line() {
        assert_eq!(
            format_theme(Theme::Dark, Path::new("prefs.json")),
            "dark (prefs.json)"
        );
    }
}
