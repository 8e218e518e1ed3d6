//! Route resolution and view entry actions.
//!
//! [`resolve`] is the pure half of a router pass: it turns a path into a
//! [`Resolution`] against the post table. The entry-action functions are the
//! effect half; each applies one view to a [`Document`].
//!
//! ## Transitions
//!
//! | Resolution | Entry actions |
//! |------------|---------------|
//! | `About` | hide main, show about, reveal about, nav → `/about` |
//! | `BlogList` | main pane, re-render list, hide viewer, reveal blogs |
//! | `Post` | main pane now; list hidden and viewer shown once the post arrives |
//! | `PostNotFound` | main pane, 404 fragment in the viewer, no fetch |
//!
//! ## Stale Responses
//!
//! Post fetches complete after the pass that issued them. Every pass takes a
//! fresh [`NavSeq`] from a [`NavigationCounter`]; a response tagged with an
//! older sequence is dropped instead of overwriting a newer view.

use crate::config::SiteConfig;
use crate::dom::{self, Document, ElementId};
use crate::route::{Pane, ViewState};
use crate::types::{BlogPostMeta, Project};
use crate::view::{self, Fragment};
use std::time::Duration;

/// Outcome of resolving a path against the post table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    About,
    BlogList,
    /// A known post; its source has to be fetched.
    Post { slug: String, source_path: String },
    PostNotFound { slug: String },
}

impl Resolution {
    pub fn view_state(&self) -> ViewState {
        match self {
            Resolution::About => ViewState::About,
            Resolution::BlogList => ViewState::BlogList,
            Resolution::Post { slug, .. } | Resolution::PostNotFound { slug } => {
                ViewState::BlogPost(slug.clone())
            }
        }
    }

    pub fn pane(&self) -> Pane {
        self.view_state().pane()
    }
}

/// Resolve a URL path. Pure: no fetch, no document access.
pub fn resolve(path: &str, config: &SiteConfig) -> Resolution {
    match ViewState::from_path(path) {
        ViewState::About => Resolution::About,
        ViewState::BlogList => Resolution::BlogList,
        ViewState::BlogPost(slug) => match config.find_post(&slug) {
            Some(post) => Resolution::Post {
                source_path: post.source_path.clone(),
                slug,
            },
            None => Resolution::PostNotFound { slug },
        },
    }
}

// ============================================================================
// Navigation sequence
// ============================================================================

/// Sequence number of a router pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavSeq(u64);

impl NavSeq {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct NavigationCounter {
    current: u64,
}

impl NavigationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass; every earlier sequence becomes stale.
    pub fn begin(&mut self) -> NavSeq {
        self.current += 1;
        NavSeq(self.current)
    }

    pub fn is_current(&self, seq: NavSeq) -> bool {
        seq.0 == self.current
    }
}

// ============================================================================
// Entry actions
// ============================================================================

/// Switch the visible pane and mark its nav link.
pub fn enter_pane<D: Document + ?Sized>(doc: &mut D, pane: Pane, delay: Duration) {
    let (show, hide) = match pane {
        Pane::Main => (ElementId::MainContent, ElementId::AboutSection),
        Pane::About => (ElementId::AboutSection, ElementId::MainContent),
    };
    doc.set_hidden(show, false);
    doc.set_hidden(hide, true);
    doc.reveal(show, delay);
    dom::set_nav_active(doc, pane);
}

/// Re-render the post list and show it in place of the viewer.
pub fn show_blog_list<D: Document + ?Sized>(doc: &mut D, posts: &[BlogPostMeta], delay: Duration) {
    doc.set_content(ElementId::BlogsList, view::blog_list(posts));
    doc.set_hidden(ElementId::BlogViewer, true);
    doc.set_hidden(ElementId::BlogsList, false);
    doc.reveal(ElementId::BlogsSection, delay);
}

/// Show a post body in place of the list.
pub fn show_post<D: Document + ?Sized>(doc: &mut D, body: Fragment) {
    doc.set_hidden(ElementId::BlogsList, true);
    doc.set_hidden(ElementId::BlogViewer, false);
    doc.set_content(ElementId::BlogContent, body);
}

/// Render the project list. Empty lists get the notice and no reveal.
pub fn show_projects<D: Document + ?Sized>(doc: &mut D, projects: &[Project], delay: Duration) {
    let fragment = view::project_list(projects);
    let revealable = fragment.revealable > 0;
    doc.set_content(ElementId::ToolsList, fragment);
    if revealable {
        doc.reveal(ElementId::ToolsSection, delay);
    }
}
