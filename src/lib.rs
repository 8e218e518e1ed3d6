//! # folio
//!
//! The router and renderer of a small personal site: a blog, a list of
//! projects, and an about page served as a single page. One HTML shell holds
//! every view; the URL path decides which parts of it are visible.
//!
//! # Architecture: Path → View → Document
//!
//! ```text
//! 1. Route     URL path        →  ViewState       (pure, see route/router)
//! 2. Render    ViewState+data  →  Fragment        (pure, see view)
//! 3. Apply     Fragment        →  Document        (the only effects)
//! ```
//!
//! Every handler of the page (load, link click, back/forward, tab switch,
//! theme toggle) is a method on [`app::App`], which owns the config, the
//! content source, the document, the preference storage and the session
//! history. Nothing is global, so a whole browsing session runs in a unit
//! test against [`dom::HeadlessDocument`], [`fetch::MemorySource`] and
//! [`storage::MemoryStorage`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Application context: handlers, pending fetches, stale-response discard |
//! | [`route`] | URL path → [`route::ViewState`] and pane mapping |
//! | [`router`] | Route resolution against the post table, view entry actions |
//! | [`redirect`] | Recovers `/?path=..&params=..` deep links left by static-host 404 pages |
//! | [`history`] | Same-origin session history: push, replace, back, forward |
//! | [`view`] | Project list, blog list, post and about fragments rendered with Maud |
//! | [`markdown`] | Markdown → HTML and the placeholder shown for unreachable posts |
//! | [`fetch`] | [`fetch::ContentSource`] over HTTP, a directory, or memory |
//! | [`dom`] | The [`dom::Document`] effect trait and the in-memory page |
//! | [`reveal`] | Staggered reveal schedule of rendered items |
//! | [`tabs`] | Blogs/Tools tab switcher |
//! | [`theme`] | Light/dark preference |
//! | [`storage`] | Key/value preference storage in memory or a JSON file |
//! | [`config`] | `config.toml` loading and validation |
//! | [`prerender`] | Writes every route as static HTML plus the redirecting `404.html` |
//! | [`output`] | CLI output formatting |
//! | [`types`] | Post metadata and project records |
//!
//! # Design Decisions
//!
//! ## The Post Table Lives in Config
//!
//! Posts are listed in `config.toml` as `[[posts]]` tables. The list is
//! small, changes only when a post is written, and its order is the display
//! order. A slug is the route key, so duplicate slugs fail validation at load
//! time instead of shadowing each other.
//!
//! ## Fetches Are Queued, Not Awaited
//!
//! A router pass that needs content queues a [`app::PendingFetch`] and
//! returns. Completion is explicit (`settle`, `resolve_pending`), so the
//! order responses arrive in is under the caller's control. Each pass takes
//! a sequence number; a post response from an older pass is dropped rather
//! than painted over a newer view.
//!
//! ## Fetch Failures Render Something
//!
//! A missing `projects.json` renders an empty project list and a missing post
//! source renders a placeholder naming the path. Errors are logged, never
//! shown as error pages, and never retried.
//!
//! ## Maud for Every Fragment
//!
//! List rows and the page shell are Maud templates, so titles, dates and
//! descriptions are escaped. Post bodies and the about text are Markdown
//! rendered by pulldown-cmark and inserted as trusted HTML.

pub mod app;
pub mod config;
pub mod dom;
pub mod fetch;
pub mod history;
pub mod markdown;
pub mod output;
pub mod prerender;
pub mod redirect;
pub mod reveal;
pub mod route;
pub mod router;
pub mod storage;
pub mod tabs;
pub mod theme;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
