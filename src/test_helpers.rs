//! Shared test utilities for the folio test suite.
//!
//! Provides a sample site (config, content source) and builders for an
//! [`App`] wired to in-memory collaborators.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut app = app_at("/blogs/Cache-Poisoning-Dos");
//! app.load();
//! app.settle();
//! assert!(app.document().is_visible(ElementId::BlogContent));
//! ```

use url::Url;

use crate::app::App;
use crate::config::SiteConfig;
use crate::dom::HeadlessDocument;
use crate::fetch::MemorySource;
use crate::storage::MemoryStorage;
use crate::types::BlogPostMeta;

pub type TestApp = App<MemorySource, HeadlessDocument, MemoryStorage>;

pub const ORIGIN: &str = "http://site.test";

// =========================================================================
// Fixtures
// =========================================================================

pub fn post(slug: &str, source_path: &str) -> BlogPostMeta {
    BlogPostMeta {
        title: format!("Title of {slug}"),
        date: "08 Aug 2025".to_string(),
        source_path: source_path.to_string(),
        slug: slug.to_string(),
    }
}

/// Three posts. `Unwritten` has no source in [`sample_source`].
pub fn sample_config() -> SiteConfig {
    SiteConfig {
        title: "Sample".to_string(),
        base_url: format!("{ORIGIN}/"),
        about: "I write about **security**.".to_string(),
        posts: vec![
            post("Cache-Poisoning-Dos", "blogs/blog1.md"),
            post("Second-Post", "blogs/blog2.md"),
            post("Unwritten", "blogs/unwritten.md"),
        ],
        ..SiteConfig::default()
    }
}

pub fn sample_source() -> MemorySource {
    MemorySource::new()
        .with("blogs/blog1.md", "# Cache Poisoning\n\nHeaders matter.")
        .with("blogs/blog2.md", "# Second\n\nMore words.")
        .with(
            "projects.json",
            r#"[{"name": "scanner", "url": "https://example.com/scanner", "description": "Port scanner"}]"#,
        )
}

// =========================================================================
// App builders
// =========================================================================

/// A not-yet-loaded app at `path` on the sample site.
pub fn app_at(path: &str) -> TestApp {
    app_with_storage(path, MemoryStorage::new())
}

pub fn app_with_storage(path: &str, storage: MemoryStorage) -> TestApp {
    let url = Url::parse(ORIGIN).unwrap().join(path).unwrap();
    App::new(
        sample_config(),
        sample_source(),
        HeadlessDocument::new("Sample"),
        storage,
        url,
    )
}
