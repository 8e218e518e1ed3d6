//! Content fetching: the projects list and blog post sources.
//!
//! Every resource is read through a [`ContentSource`], which maps a
//! site-relative path to its text. Two sources ship with the crate:
//!
//! - [`HttpSource`] issues one blocking `GET` per request against an origin.
//! - [`DirSource`] reads the file from a site directory on disk.
//!
//! [`MemorySource`] keeps canned responses in memory and records every
//! request, which is what the router tests count fetches with.
//!
//! ## Failure Handling
//!
//! The two fetch operations never fail. A transport error, a non-2xx status,
//! or an undecodable body is logged and replaced by fallback content: an empty
//! project list, or the rendered placeholder post. Each call makes exactly one
//! attempt.

use crate::markdown::{markdown_to_html, placeholder_markdown};
use crate::types::Project;
use log::error;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),
    #[error("{url} returned status {status}")]
    Status { url: String, status: i32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Path escapes the site root: {0}")]
    OutsideRoot(String),
}

/// A provider of site resources by site-relative path.
pub trait ContentSource {
    /// Fetch the resource at `path` (with or without a leading `/`) as text.
    fn get(&self, path: &str) -> Result<String, FetchError>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn get(&self, path: &str) -> Result<String, FetchError> {
        (**self).get(path)
    }
}

/// Fetches resources from an HTTP(S) origin.
#[derive(Debug, Clone)]
pub struct HttpSource {
    origin: Url,
}

impl HttpSource {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// Absolute URL of a site-relative path. Paths always resolve from the
    /// origin root, matching `fetch('/<path>')` in a browser.
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self
            .origin
            .join(&format!("/{}", path.trim_start_matches('/')))?)
    }
}

impl ContentSource for HttpSource {
    fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path)?;
        let response = minreq::get(url.as_str()).send()?;
        if !(200..300).contains(&response.status_code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status_code,
            });
        }
        Ok(response.as_str()?.to_string())
    }
}

/// Reads resources from a site directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FetchError::OutsideRoot(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentSource for DirSource {
    fn get(&self, path: &str) -> Result<String, FetchError> {
        Ok(fs::read_to_string(self.resolve(path)?)?)
    }
}

/// Canned responses keyed by site-relative path, with a request log.
///
/// Paths without a response answer with status 404.
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`.
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(path.trim_start_matches('/').to_string(), body.to_string());
        self
    }

    /// Every path requested so far, in request order, without leading `/`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ContentSource for MemorySource {
    fn get(&self, path: &str) -> Result<String, FetchError> {
        let key = path.trim_start_matches('/');
        self.requests.borrow_mut().push(key.to_string());
        self.responses
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: format!("/{key}"),
                status: 404,
            })
    }
}

// ============================================================================
// Fetch operations
// ============================================================================

/// Fetch and decode the project list.
///
/// Any failure yields an empty list, which callers render as a normal state.
pub fn fetch_projects<S: ContentSource + ?Sized>(source: &S, path: &str) -> Vec<Project> {
    let decoded = source
        .get(path)
        .and_then(|body| serde_json::from_str::<Vec<Project>>(&body).map_err(FetchError::from));
    match decoded {
        Ok(projects) => projects,
        Err(e) => {
            error!("Could not fetch {path}, rendering an empty project list: {e}");
            Vec::new()
        }
    }
}

/// Fetch a post's Markdown source and render it to HTML.
///
/// On failure the rendered placeholder naming `path` is returned instead.
pub fn fetch_blog_post<S: ContentSource + ?Sized>(source: &S, path: &str) -> String {
    match source.get(path) {
        Ok(markdown) => markdown_to_html(&markdown),
        Err(e) => {
            error!("Could not fetch {path}, rendering placeholder content: {e}");
            markdown_to_html(&placeholder_markdown(path))
        }
    }
}
