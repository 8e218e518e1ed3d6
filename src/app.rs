//! The application context.
//!
//! [`App`] owns everything a page session touches: the site config (and with
//! it the post table), the content source, the document, the preference
//! storage, and the session history. Handlers are methods, so tests drive a
//! whole session without a browser:
//!
//! ```rust,ignore
//! let mut app = App::new(config, source, HeadlessDocument::new("site"), MemoryStorage::new(), url);
//! app.load();                                   // DOMContentLoaded
//! app.click(&Anchor::new("/blogs/some-post"));  // intercepted link
//! app.settle();                                 // let fetches complete
//! app.back();                                   // popstate
//! ```
//!
//! ## Pending Fetches
//!
//! Fetches never run inside a handler. A router pass that needs a post, and
//! the initial load that needs the project list, queue a [`PendingFetch`]
//! instead. [`App::settle`] completes them in issue order;
//! [`App::resolve_pending`] completes one out of order, which is how a slow
//! response overtaking a newer navigation is reproduced.

use crate::config::SiteConfig;
use crate::dom::{Document, ElementId};
use crate::fetch::{ContentSource, fetch_blog_post, fetch_projects};
use crate::history::SessionHistory;
use crate::redirect;
use crate::route::ViewState;
use crate::router::{self, NavSeq, NavigationCounter, Resolution};
use crate::storage::Storage;
use crate::tabs::{self, Tab};
use crate::theme::{self, Theme};
use crate::view;
use log::{debug, warn};
use std::collections::VecDeque;
use url::Url;

/// A clicked anchor element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// `None` when the element has no `href` attribute.
    pub href: Option<String>,
    pub target: Option<String>,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            target: None,
        }
    }

    /// An anchor without an `href` attribute.
    pub fn without_href() -> Self {
        Self {
            href: None,
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    fn opens_new_tab(&self) -> bool {
        self.target.as_deref() == Some("_blank")
    }
}

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default navigation suppressed; history pushed and the router ran.
    Intercepted,
    /// Left to the browser.
    PassThrough,
}

/// A fetch issued but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingFetch {
    Projects,
    Post {
        seq: NavSeq,
        slug: String,
        source_path: String,
    },
}

pub struct App<S, D, St> {
    config: SiteConfig,
    source: S,
    document: D,
    storage: St,
    history: SessionHistory,
    nav: NavigationCounter,
    pending: VecDeque<PendingFetch>,
    view: ViewState,
    tab: Tab,
}

impl<S, D, St> App<S, D, St>
where
    S: ContentSource,
    D: Document,
    St: Storage,
{
    /// A session whose document is at `url`. Nothing is rendered until
    /// [`App::load`].
    pub fn new(config: SiteConfig, source: S, document: D, storage: St, url: Url) -> Self {
        Self {
            config,
            source,
            document,
            storage,
            history: SessionHistory::new(url),
            nav: NavigationCounter::new(),
            pending: VecDeque::new(),
            view: ViewState::BlogList,
            tab: Tab::default(),
        }
    }

    /// Initial page load: apply the stored theme, run the router, and queue
    /// the project list fetch.
    pub fn load(&mut self) {
        let theme = theme::load(&self.storage, &self.config.theme_key);
        theme::apply(&mut self.document, theme);
        self.document
            .set_content(ElementId::AboutSection, view::about(&self.config.about));
        self.route();
        self.pending.push_back(PendingFetch::Projects);
    }

    /// One router pass over the current location.
    pub fn route(&mut self) -> &ViewState {
        if let Some(target) = redirect::recover(self.history.location()) {
            match self.history.resolve(&target) {
                Ok(url) => match self.history.replace_state(url) {
                    Ok(()) => debug!("Recovered redirect to {}", self.history.location()),
                    Err(e) => warn!("Ignoring redirect to {target}: {e}"),
                },
                Err(e) => warn!("Ignoring redirect to {target}: {e}"),
            }
        }

        let seq = self.nav.begin();
        let path = self.history.location().path().to_string();
        let resolution = router::resolve(&path, &self.config);
        debug!("Route {path} (pass {}) → {resolution:?}", seq.get());

        let delay = self.config.reveal_delay();
        router::enter_pane(&mut self.document, resolution.pane(), delay);
        self.view = resolution.view_state();
        match resolution {
            Resolution::About => {}
            Resolution::BlogList => {
                router::show_blog_list(&mut self.document, &self.config.posts, delay)
            }
            Resolution::Post { slug, source_path } => {
                self.pending.push_back(PendingFetch::Post {
                    seq,
                    slug,
                    source_path,
                });
            }
            Resolution::PostNotFound { slug } => {
                debug!("No post with slug '{slug}'");
                router::show_post(&mut self.document, view::not_found());
            }
        }
        &self.view
    }

    /// Handle a click on an anchor.
    ///
    /// Same-host links that do not open a new tab are intercepted. Hosts
    /// compare with their explicit port, like `HTMLAnchorElement.host`.
    /// An empty `href` resolves to the current document and is intercepted;
    /// an anchor without one passes through.
    pub fn click(&mut self, anchor: &Anchor) -> ClickOutcome {
        let Some(href) = anchor.href.as_deref() else {
            return ClickOutcome::PassThrough;
        };
        if anchor.opens_new_tab() {
            return ClickOutcome::PassThrough;
        }
        let Ok(url) = self.history.resolve(href) else {
            return ClickOutcome::PassThrough;
        };
        let here = self.history.location();
        if url.host_str() != here.host_str() || url.port() != here.port() {
            return ClickOutcome::PassThrough;
        }
        if let Err(e) = self.history.push_state(url) {
            debug!("Leaving {href} to the browser: {e}");
            return ClickOutcome::PassThrough;
        }
        self.route();
        ClickOutcome::Intercepted
    }

    /// Browser back. Returns `false` when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        let popped = self.history.back();
        if popped {
            self.route();
        }
        popped
    }

    /// Browser forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        let popped = self.history.forward();
        if popped {
            self.route();
        }
        popped
    }

    /// The viewer's "back to blogs" control.
    pub fn back_to_blogs(&mut self) {
        match self.history.resolve("/") {
            Ok(url) => match self.history.push_state(url) {
                Ok(()) => {
                    self.route();
                }
                Err(e) => warn!("Cannot return to the site root: {e}"),
            },
            Err(e) => warn!("Cannot resolve site root: {e}"),
        }
    }

    /// Switch the Blogs/Tools tab. Selecting Blogs re-renders the list.
    pub fn select_tab(&mut self, tab: Tab) {
        let delay = self.config.reveal_delay();
        tabs::show(&mut self.document, tab);
        match tab {
            Tab::Tools => self.document.reveal(ElementId::ToolsSection, delay),
            Tab::Blogs => router::show_blog_list(&mut self.document, &self.config.posts, delay),
        }
        self.tab = tab;
    }

    /// Theme checkbox change. A failed write is logged; the page still switches.
    pub fn toggle_theme(&mut self, checked: bool) -> Theme {
        let key = self.config.theme_key.clone();
        match theme::toggle(&mut self.document, &mut self.storage, &key, checked) {
            Ok(theme) => theme,
            Err(e) => {
                warn!("Could not persist theme preference: {e}");
                Theme::from_checked(checked)
            }
        }
    }

    // ========================================================================
    // Pending fetches
    // ========================================================================

    pub fn pending(&self) -> impl Iterator<Item = &PendingFetch> {
        self.pending.iter()
    }

    /// Complete the oldest pending fetch. Returns `false` if none is queued.
    pub fn resolve_next(&mut self) -> bool {
        match self.pending.pop_front() {
            Some(fetch) => {
                self.complete(fetch);
                true
            }
            None => false,
        }
    }

    /// Complete the pending fetch at `index`, ahead of older ones.
    pub fn resolve_pending(&mut self, index: usize) -> bool {
        match self.pending.remove(index) {
            Some(fetch) => {
                self.complete(fetch);
                true
            }
            None => false,
        }
    }

    /// Complete every pending fetch in issue order.
    pub fn settle(&mut self) {
        while self.resolve_next() {}
    }

    fn complete(&mut self, fetch: PendingFetch) {
        match fetch {
            PendingFetch::Projects => {
                let projects = fetch_projects(&self.source, &self.config.projects_path);
                router::show_projects(&mut self.document, &projects, self.config.reveal_delay());
            }
            PendingFetch::Post {
                seq,
                slug,
                source_path,
            } => {
                let html = fetch_blog_post(&self.source, &source_path);
                if !self.nav.is_current(seq) {
                    debug!(
                        "Discarding response for '{slug}' from superseded pass {}",
                        seq.get()
                    );
                    return;
                }
                router::show_post(&mut self.document, view::post(html));
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn storage(&self) -> &St {
        &self.storage
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn location(&self) -> &Url {
        self.history.location()
    }

    /// View selected by the latest router pass.
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
