//! The presentation effect layer.
//!
//! The page is a fixed shell of named containers:
//!
//! ```text
//! body (.light-mode)
//! ├── main-nav ─ nav-home "/" · nav-about "/about"
//! ├── theme-checkbox
//! ├── main-content
//! │   ├── content-tabs ─ blogs-tab · tools-tab
//! │   ├── blogs-section
//! │   │   ├── blogs-list
//! │   │   └── blog-viewer ─ blog-content
//! │   └── tools-section ─ tools-list
//! └── about-section
//! ```
//!
//! The router and toggles never touch markup directly. They compute
//! [`Fragment`]s and flip visibility, active, and checked flags through the
//! [`Document`] trait, which is the only place presentation state changes.
//!
//! [`HeadlessDocument`] keeps that state in memory and renders the whole page
//! to HTML with maud. It is what the CLI and the prerenderer drive.

use crate::reveal::{RevealPlan, schedule};
use crate::route::Pane;
use crate::view::Fragment;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const INACTIVE_CLASS: &str = "inactive";

/// A named container of the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    MainNav,
    NavHome,
    NavAbout,
    ThemeCheckbox,
    MainContent,
    ContentTabs,
    BlogsTab,
    ToolsTab,
    BlogsSection,
    BlogsList,
    BlogViewer,
    BlogContent,
    ToolsSection,
    ToolsList,
    AboutSection,
}

impl ElementId {
    pub const ALL: [ElementId; 15] = [
        ElementId::MainNav,
        ElementId::NavHome,
        ElementId::NavAbout,
        ElementId::ThemeCheckbox,
        ElementId::MainContent,
        ElementId::ContentTabs,
        ElementId::BlogsTab,
        ElementId::ToolsTab,
        ElementId::BlogsSection,
        ElementId::BlogsList,
        ElementId::BlogViewer,
        ElementId::BlogContent,
        ElementId::ToolsSection,
        ElementId::ToolsList,
        ElementId::AboutSection,
    ];

    /// The element's `id` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::MainNav => "main-nav",
            ElementId::NavHome => "nav-home",
            ElementId::NavAbout => "nav-about",
            ElementId::ThemeCheckbox => "theme-checkbox",
            ElementId::MainContent => "main-content",
            ElementId::ContentTabs => "content-tabs",
            ElementId::BlogsTab => "blogs-tab",
            ElementId::ToolsTab => "tools-tab",
            ElementId::BlogsSection => "blogs-section",
            ElementId::BlogsList => "blogs-list",
            ElementId::BlogViewer => "blog-viewer",
            ElementId::BlogContent => "blog-content",
            ElementId::ToolsSection => "tools-section",
            ElementId::ToolsList => "tools-list",
            ElementId::AboutSection => "about-section",
        }
    }

    pub fn parent(self) -> Option<ElementId> {
        match self {
            ElementId::NavHome | ElementId::NavAbout => Some(ElementId::MainNav),
            ElementId::BlogsTab | ElementId::ToolsTab => Some(ElementId::ContentTabs),
            ElementId::ContentTabs | ElementId::BlogsSection | ElementId::ToolsSection => {
                Some(ElementId::MainContent)
            }
            ElementId::BlogsList | ElementId::BlogViewer => Some(ElementId::BlogsSection),
            ElementId::BlogContent => Some(ElementId::BlogViewer),
            ElementId::ToolsList => Some(ElementId::ToolsSection),
            ElementId::MainNav
            | ElementId::ThemeCheckbox
            | ElementId::MainContent
            | ElementId::AboutSection => None,
        }
    }

    /// Whether `other` is this element or one of its descendants.
    pub fn contains(self, other: ElementId) -> bool {
        let mut current = Some(other);
        while let Some(id) = current {
            if id == self {
                return true;
            }
            current = id.parent();
        }
        false
    }

    /// Elements styled with `active`/`inactive`.
    fn is_toggle(self) -> bool {
        matches!(
            self,
            ElementId::NavHome | ElementId::NavAbout | ElementId::BlogsTab | ElementId::ToolsTab
        )
    }
}

/// The nav links and the pane each one selects.
const NAV_LINKS: [(ElementId, Pane); 2] = [
    (ElementId::NavHome, Pane::Main),
    (ElementId::NavAbout, Pane::About),
];

/// Presentation state the application writes to.
pub trait Document {
    /// Toggle the `hidden` class.
    fn set_hidden(&mut self, id: ElementId, hidden: bool);

    /// Replace the element's children.
    fn set_content(&mut self, id: ElementId, fragment: Fragment);

    /// Swap the `active`/`inactive` classes of a nav link or tab header.
    fn set_active(&mut self, id: ElementId, active: bool);

    fn set_checked(&mut self, id: ElementId, checked: bool);

    /// Add or remove a class on `<body>`.
    fn set_body_class(&mut self, class: &str, present: bool);

    /// Run a staggered reveal over every revealable item inside `id`.
    fn reveal(&mut self, id: ElementId, base_delay: Duration);
}

/// Mark the nav link of `pane` active and every other link inactive.
pub fn set_nav_active<D: Document + ?Sized>(doc: &mut D, pane: Pane) {
    for (link, link_pane) in NAV_LINKS {
        doc.set_active(link, link_pane == pane);
    }
}

// ============================================================================
// Headless document
// ============================================================================

/// One recorded reveal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub target: ElementId,
    pub plan: RevealPlan,
}

/// In-memory page shell.
///
/// Starts in the state the static page ships in: Main pane and Blogs tab
/// visible, blog viewer, tools and about hidden, Home and Blogs active.
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    title: String,
    hidden: BTreeSet<ElementId>,
    active: BTreeSet<ElementId>,
    checked: BTreeSet<ElementId>,
    content: BTreeMap<ElementId, Fragment>,
    body_classes: BTreeSet<String>,
    reveals: Vec<Reveal>,
}

impl HeadlessDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hidden: [
                ElementId::BlogViewer,
                ElementId::ToolsSection,
                ElementId::AboutSection,
            ]
            .into(),
            active: [ElementId::NavHome, ElementId::BlogsTab].into(),
            checked: BTreeSet::new(),
            content: BTreeMap::new(),
            body_classes: BTreeSet::new(),
            reveals: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.hidden.contains(&id)
    }

    /// Neither the element nor any ancestor is hidden.
    pub fn is_visible(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if self.is_hidden(el) {
                return false;
            }
            current = el.parent();
        }
        true
    }

    pub fn is_active(&self, id: ElementId) -> bool {
        self.active.contains(&id)
    }

    pub fn is_checked(&self, id: ElementId) -> bool {
        self.checked.contains(&id)
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// Current HTML children of an element (empty if never set).
    pub fn content(&self, id: ElementId) -> &str {
        self.content.get(&id).map(|f| f.html.as_str()).unwrap_or("")
    }

    /// Every reveal pass so far, oldest first.
    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    pub fn last_reveal(&self) -> Option<&Reveal> {
        self.reveals.last()
    }

    /// Revealable items currently inside `id`.
    pub fn revealable_in(&self, id: ElementId) -> usize {
        self.content
            .iter()
            .filter(|(el, _)| id.contains(**el))
            .map(|(_, f)| f.revealable)
            .sum()
    }

    fn class_of(&self, id: ElementId) -> Option<String> {
        let mut classes = Vec::new();
        if id.is_toggle() {
            classes.push(if self.is_active(id) {
                ACTIVE_CLASS
            } else {
                INACTIVE_CLASS
            });
        }
        if self.is_hidden(id) {
            classes.push(HIDDEN_CLASS);
        }
        (!classes.is_empty()).then(|| classes.join(" "))
    }

    fn body_class(&self) -> Option<String> {
        (!self.body_classes.is_empty())
            .then(|| self.body_classes.iter().cloned().collect::<Vec<_>>().join(" "))
    }

    fn inner(&self, id: ElementId) -> PreEscaped<&str> {
        PreEscaped(self.content(id))
    }

    /// Render the page in its current state.
    pub fn render(&self) -> Markup {
        use ElementId::*;
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                }
                body class=[self.body_class()] {
                    header.site-header {
                        nav id=(MainNav.as_str()) {
                            a id=(NavHome.as_str()) href="/" class=[self.class_of(NavHome)] { "Home" }
                            a id=(NavAbout.as_str()) href="/about" class=[self.class_of(NavAbout)] { "About" }
                        }
                        label.theme-switch {
                            input id=(ThemeCheckbox.as_str()) type="checkbox"
                                checked[self.is_checked(ThemeCheckbox)];
                        }
                    }
                    main id=(MainContent.as_str()) class=[self.class_of(MainContent)] {
                        div id=(ContentTabs.as_str()) {
                            h2 id=(BlogsTab.as_str()) data-text="[ Blogs ]" class=[self.class_of(BlogsTab)] { "[ Blogs ]" }
                            h2 id=(ToolsTab.as_str()) data-text="[ Tools ]" class=[self.class_of(ToolsTab)] { "[ Tools ]" }
                        }
                        section id=(BlogsSection.as_str()) class=[self.class_of(BlogsSection)] {
                            div id=(BlogsList.as_str()) class=[self.class_of(BlogsList)] {
                                (self.inner(BlogsList))
                            }
                            div id=(BlogViewer.as_str()) class=[self.class_of(BlogViewer)] {
                                a id="back-to-blogs" href="/" { "← Back to blogs" }
                                article id=(BlogContent.as_str()) { (self.inner(BlogContent)) }
                            }
                        }
                        section id=(ToolsSection.as_str()) class=[self.class_of(ToolsSection)] {
                            div id=(ToolsList.as_str()) { (self.inner(ToolsList)) }
                        }
                    }
                    section id=(AboutSection.as_str()) class=[self.class_of(AboutSection)] {
                        (self.inner(AboutSection))
                    }
                }
            }
        }
    }
}

impl Document for HeadlessDocument {
    fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if hidden {
            self.hidden.insert(id);
        } else {
            self.hidden.remove(&id);
        }
    }

    fn set_content(&mut self, id: ElementId, fragment: Fragment) {
        self.content.insert(id, fragment);
    }

    fn set_active(&mut self, id: ElementId, active: bool) {
        if active {
            self.active.insert(id);
        } else {
            self.active.remove(&id);
        }
    }

    fn set_checked(&mut self, id: ElementId, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    fn set_body_class(&mut self, class: &str, present: bool) {
        if present {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
    }

    fn reveal(&mut self, id: ElementId, base_delay: Duration) {
        let count = self.revealable_in(id);
        self.reveals.push(Reveal {
            target: id,
            plan: RevealPlan {
                delays: schedule(count, base_delay),
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Fragment {
        Fragment {
            html: "<div class=\"content-child\"></div>".repeat(n),
            revealable: n,
        }
    }

    #[test]
    fn containment_follows_the_shell() {
        assert!(ElementId::MainContent.contains(ElementId::BlogContent));
        assert!(ElementId::BlogsSection.contains(ElementId::BlogsList));
        assert!(ElementId::BlogsList.contains(ElementId::BlogsList));
        assert!(!ElementId::BlogsSection.contains(ElementId::ToolsList));
        assert!(!ElementId::AboutSection.contains(ElementId::BlogsList));
    }

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<&str> = ElementId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids.len(), ElementId::ALL.len());
    }

    #[test]
    fn initial_state_shows_main_and_blog_list() {
        let doc = HeadlessDocument::new("t");
        assert!(doc.is_visible(ElementId::BlogsList));
        assert!(!doc.is_visible(ElementId::BlogContent));
        assert!(!doc.is_visible(ElementId::ToolsList));
        assert!(!doc.is_visible(ElementId::AboutSection));
        assert!(doc.is_active(ElementId::NavHome));
        assert!(doc.is_active(ElementId::BlogsTab));
    }

    #[test]
    fn set_nav_active_is_exclusive() {
        let mut doc = HeadlessDocument::new("t");
        set_nav_active(&mut doc, Pane::About);
        assert!(doc.is_active(ElementId::NavAbout));
        assert!(!doc.is_active(ElementId::NavHome));

        set_nav_active(&mut doc, Pane::Main);
        assert!(doc.is_active(ElementId::NavHome));
        assert!(!doc.is_active(ElementId::NavAbout));
    }

    #[test]
    fn reveal_counts_items_in_subtree() {
        let mut doc = HeadlessDocument::new("t");
        doc.set_content(ElementId::BlogsList, items(2));
        doc.set_content(ElementId::ToolsList, items(3));
        doc.set_content(ElementId::AboutSection, items(1));

        doc.reveal(ElementId::BlogsSection, Duration::from_millis(100));
        assert_eq!(doc.last_reveal().unwrap().plan.delays.len(), 2);

        doc.reveal(ElementId::MainContent, Duration::from_millis(100));
        let plan = &doc.last_reveal().unwrap().plan;
        assert_eq!(plan.delays.len(), 5);
        assert_eq!(plan.total(), Duration::from_millis(500));
        assert_eq!(doc.reveals().len(), 2);
    }

    #[test]
    fn content_is_replaced_not_appended() {
        let mut doc = HeadlessDocument::new("t");
        doc.set_content(ElementId::BlogContent, Fragment::plain("<p>one</p>"));
        doc.set_content(ElementId::BlogContent, Fragment::plain("<p>two</p>"));
        assert_eq!(doc.content(ElementId::BlogContent), "<p>two</p>");
    }

    #[test]
    fn render_reflects_state() {
        let mut doc = HeadlessDocument::new("My <Site>");
        doc.set_body_class("light-mode", true);
        doc.set_checked(ElementId::ThemeCheckbox, true);
        doc.set_content(ElementId::BlogContent, Fragment::plain("<h1>Post</h1>"));
        let html = doc.render().into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My &lt;Site&gt;</title>"));
        assert!(html.contains(r#"<body class="light-mode">"#));
        assert!(html.contains(r#"id="nav-home" href="/" class="active""#));
        assert!(html.contains(r#"id="nav-about" href="/about" class="inactive""#));
        assert!(html.contains(r#"id="blog-viewer" class="hidden""#));
        assert!(html.contains(r#"id="about-section" class="hidden""#));
        assert!(html.contains("<h1>Post</h1>"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn body_class_removed() {
        let mut doc = HeadlessDocument::new("t");
        doc.set_body_class("light-mode", true);
        doc.set_body_class("light-mode", false);
        assert!(!doc.has_body_class("light-mode"));
        assert!(doc.render().into_string().contains("<body>"));
    }
}
