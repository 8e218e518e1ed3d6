//! The Blogs/Tools tab switcher inside the Main pane.

use crate::dom::{Document, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Blogs,
    Tools,
}

impl Tab {
    /// The panel this tab shows.
    pub fn panel(self) -> ElementId {
        match self {
            Tab::Blogs => ElementId::BlogsSection,
            Tab::Tools => ElementId::ToolsSection,
        }
    }

    /// The tab's clickable header.
    pub fn header(self) -> ElementId {
        match self {
            Tab::Blogs => ElementId::BlogsTab,
            Tab::Tools => ElementId::ToolsTab,
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::Blogs => Tab::Tools,
            Tab::Tools => Tab::Blogs,
        }
    }
}

/// Show `tab`'s panel, hide the other, and swap the header classes.
///
/// Rendering the panel's content is left to the caller.
pub fn show<D: Document + ?Sized>(doc: &mut D, tab: Tab) {
    let other = tab.other();
    doc.set_hidden(other.panel(), true);
    doc.set_hidden(tab.panel(), false);
    doc.set_active(tab.header(), true);
    doc.set_active(other.header(), false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessDocument;

    #[test]
    fn show_tools_then_blogs() {
        let mut doc = HeadlessDocument::new("t");

        show(&mut doc, Tab::Tools);
        assert!(doc.is_visible(ElementId::ToolsList));
        assert!(!doc.is_visible(ElementId::BlogsList));
        assert!(doc.is_active(ElementId::ToolsTab));
        assert!(!doc.is_active(ElementId::BlogsTab));

        show(&mut doc, Tab::Blogs);
        assert!(doc.is_visible(ElementId::BlogsList));
        assert!(!doc.is_visible(ElementId::ToolsList));
        assert!(doc.is_active(ElementId::BlogsTab));
        assert!(!doc.is_active(ElementId::ToolsTab));
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Tab::Blogs.other(), Tab::Tools);
        assert_eq!(Tab::Blogs.other().other(), Tab::Blogs);
        assert_eq!(Tab::default(), Tab::Blogs);
    }
}
