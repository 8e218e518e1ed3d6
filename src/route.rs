//! URL path → view state mapping.
//!
//! ```text
//! /about            → About
//! /blogs/<slug>     → BlogPost(slug)
//! anything else     → BlogList   (inside the Main pane)
//! ```
//!
//! `BlogList` and `BlogPost` are both sub-states of the Main pane; `About`
//! is the only state that shows the about pane. Matching is exact and
//! case-sensitive: `/about/` and `/About` are Main.

pub const ABOUT_PATH: &str = "/about";
pub const HOME_PATH: &str = "/";
pub const BLOGS_PREFIX: &str = "/blogs/";

/// The top-level container a view lives in. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Main,
    About,
}

impl Pane {
    /// The nav link marked active while this pane is shown.
    pub fn nav_href(self) -> &'static str {
        match self {
            Pane::Main => HOME_PATH,
            Pane::About => ABOUT_PATH,
        }
    }
}

/// The view selected by a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    About,
    BlogList,
    /// The slug as it appears in the path; it may not name a known post.
    BlogPost(String),
}

impl ViewState {
    pub fn from_path(path: &str) -> Self {
        if path == ABOUT_PATH {
            return ViewState::About;
        }
        match path.strip_prefix(BLOGS_PREFIX) {
            // Only the first segment after /blogs/ is the slug
            Some(rest) => ViewState::BlogPost(rest.split('/').next().unwrap_or("").to_string()),
            None => ViewState::BlogList,
        }
    }

    pub fn pane(&self) -> Pane {
        match self {
            ViewState::About => Pane::About,
            ViewState::BlogList | ViewState::BlogPost(_) => Pane::Main,
        }
    }

    /// Canonical path that selects this view.
    pub fn path(&self) -> String {
        match self {
            ViewState::About => ABOUT_PATH.to_string(),
            ViewState::BlogList => HOME_PATH.to_string(),
            ViewState::BlogPost(slug) => format!("{BLOGS_PREFIX}{slug}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_path() {
        assert_eq!(ViewState::from_path("/about"), ViewState::About);
    }

    #[test]
    fn blog_post_path() {
        assert_eq!(
            ViewState::from_path("/blogs/Cache-Poisoning-Dos"),
            ViewState::BlogPost("Cache-Poisoning-Dos".to_string())
        );
    }

    #[test]
    fn blog_post_takes_first_segment() {
        assert_eq!(
            ViewState::from_path("/blogs/a/b/c"),
            ViewState::BlogPost("a".to_string())
        );
    }

    #[test]
    fn blog_post_with_empty_slug() {
        assert_eq!(
            ViewState::from_path("/blogs/"),
            ViewState::BlogPost(String::new())
        );
    }

    #[test]
    fn everything_else_is_blog_list() {
        for path in ["/", "", "/blogs", "/about/", "/About", "/tools", "/index.html", "/x/blogs/y"] {
            assert_eq!(ViewState::from_path(path), ViewState::BlogList, "path {path:?}");
        }
    }

    #[test]
    fn panes() {
        assert_eq!(ViewState::About.pane(), Pane::About);
        assert_eq!(ViewState::BlogList.pane(), Pane::Main);
        assert_eq!(ViewState::BlogPost("x".into()).pane(), Pane::Main);
        assert_eq!(Pane::About.nav_href(), "/about");
        assert_eq!(Pane::Main.nav_href(), "/");
    }

    #[test]
    fn path_selects_same_view() {
        for view in [
            ViewState::About,
            ViewState::BlogList,
            ViewState::BlogPost("post".to_string()),
        ] {
            assert_eq!(ViewState::from_path(&view.path()), view);
        }
    }
}
