//! Shared content types.
//!
//! [`BlogPostMeta`] entries come from the `[[posts]]` table of `config.toml`
//! and never change after startup. [`Project`] entries are decoded from
//! `projects.json` once per page load.

use serde::{Deserialize, Serialize};

/// A blog post known to the router.
///
/// The `slug` is the route key: `/blogs/<slug>` renders the Markdown found
/// at `source_path` (relative to the site root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPostMeta {
    pub title: String,
    /// Display date, shown verbatim under the title (e.g. `"08 Aug 2025"`)
    pub date: String,
    pub source_path: String,
    pub slug: String,
}

impl BlogPostMeta {
    /// Site-relative URL of the post page.
    pub fn href(&self) -> String {
        format!("/blogs/{}", self.slug)
    }
}

/// A project row in the Tools tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_href_uses_slug() {
        let post = BlogPostMeta {
            title: "Hello".to_string(),
            date: "01 Jan 2025".to_string(),
            source_path: "blogs/hello.md".to_string(),
            slug: "hello-world".to_string(),
        };
        assert_eq!(post.href(), "/blogs/hello-world");
    }

    #[test]
    fn project_description_defaults_to_empty() {
        let json = r#"[{"name": "tool", "url": "https://example.com/tool"}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects[0].description, "");
    }

    #[test]
    fn project_ignores_extra_fields() {
        let json = r#"{"name": "a", "url": "u", "description": "d", "stars": 3}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "a");
        assert_eq!(project.description, "d");
    }
}
