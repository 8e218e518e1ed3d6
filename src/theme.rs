//! Light/dark theme preference.
//!
//! The page defaults to light. Only an explicitly stored `"dark"` starts it
//! dark; a missing key or any other value means light. The theme checkbox is
//! checked in light mode.

use crate::dom::{Document, ElementId};
use crate::storage::{Storage, StorageError};

/// Body class present in light mode.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme selected by the checkbox state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Theme::Light } else { Theme::Dark }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_checked(self) -> bool {
        self == Theme::Light
    }
}

/// Read the stored preference.
pub fn load<S: Storage + ?Sized>(storage: &S, key: &str) -> Theme {
    Theme::from_stored(storage.get_item(key).as_deref())
}

/// Reflect `theme` on the body class and the checkbox.
pub fn apply<D: Document + ?Sized>(doc: &mut D, theme: Theme) {
    doc.set_body_class(LIGHT_MODE_CLASS, theme == Theme::Light);
    doc.set_checked(ElementId::ThemeCheckbox, theme.is_checked());
}

/// Handle a checkbox change: apply the new theme and persist it.
///
/// The page is updated even when persisting fails.
pub fn toggle<D, S>(doc: &mut D, storage: &mut S, key: &str, checked: bool) -> Result<Theme, StorageError>
where
    D: Document + ?Sized,
    S: Storage + ?Sized,
{
    let theme = Theme::from_checked(checked);
    apply(doc, theme);
    storage.set_item(key, theme.as_str())?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessDocument;
    use crate::storage::MemoryStorage;

    #[test]
    fn stored_values() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn load_defaults_to_light() {
        assert_eq!(load(&MemoryStorage::new(), "theme"), Theme::Light);
        assert_eq!(load(&MemoryStorage::new().with("theme", "dark"), "theme"), Theme::Dark);
    }

    #[test]
    fn apply_light_and_dark() {
        let mut doc = HeadlessDocument::new("t");
        apply(&mut doc, Theme::Light);
        assert!(doc.has_body_class(LIGHT_MODE_CLASS));
        assert!(doc.is_checked(ElementId::ThemeCheckbox));

        apply(&mut doc, Theme::Dark);
        assert!(!doc.has_body_class(LIGHT_MODE_CLASS));
        assert!(!doc.is_checked(ElementId::ThemeCheckbox));
    }

    #[test]
    fn toggle_persists_choice() {
        let mut doc = HeadlessDocument::new("t");
        let mut storage = MemoryStorage::new();

        let theme = toggle(&mut doc, &mut storage, "theme", false).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        assert!(!doc.has_body_class(LIGHT_MODE_CLASS));

        toggle(&mut doc, &mut storage, "theme", true).unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("light"));
        assert!(doc.has_body_class(LIGHT_MODE_CLASS));
    }
}
