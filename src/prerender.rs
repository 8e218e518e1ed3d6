//! Static prerendering of every route.
//!
//! Each route is loaded into a fresh [`App`] over a [`HeadlessDocument`],
//! every fetch is settled, and the resulting document is written as
//! `index.html` under the route's directory:
//!
//! ```text
//! dist/
//! ├── index.html                       # /
//! ├── about/index.html                 # /about
//! ├── blogs/<slug>/index.html          # /blogs/<slug>, one per post
//! ├── 404.html                         # forwards unknown paths to /?path=...
//! ├── projects.json                    # copied from the site root
//! └── blogs/blog1.md                   # copied from the site root
//! ```
//!
//! ## Redirect Page
//!
//! Static hosts serve `404.html` for any path without a file. The page
//! forwards the browser to `/?path=<path>&params=<query>#hash`, which the
//! router's redirect recovery turns back into a clean URL. The query is
//! percent-encoded once more so it survives as a single parameter.

use crate::app::App;
use crate::config::{ConfigError, SiteConfig};
use crate::dom::HeadlessDocument;
use crate::fetch::ContentSource;
use crate::route::{ABOUT_PATH, HOME_PATH, ViewState};
use crate::storage::MemoryStorage;
use log::{debug, info};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PrerenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Name of the site config, which is not copied to the output.
const CONFIG_FILE: &str = "config.toml";

const REDIRECT_SCRIPT: &str = "var l = window.location;\
l.replace('/?path=' + encodeURIComponent(l.pathname.slice(1)) + \
'&params=' + encodeURIComponent(l.search) + l.hash);";

/// A route and the file its page is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoute {
    pub path: String,
    /// Relative to the output directory.
    pub file: PathBuf,
}

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub path: String,
    pub file: PathBuf,
    pub view: ViewState,
}

/// What [`prerender`] wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerenderSummary {
    pub pages: Vec<RenderedPage>,
    /// Site files copied verbatim.
    pub copied: Vec<PathBuf>,
}

/// Home, about, then one route per post in table order.
pub fn site_routes(config: &SiteConfig) -> Vec<SiteRoute> {
    let mut routes = vec![
        SiteRoute {
            path: HOME_PATH.to_string(),
            file: PathBuf::from("index.html"),
        },
        SiteRoute {
            path: ABOUT_PATH.to_string(),
            file: PathBuf::from("about/index.html"),
        },
    ];
    routes.extend(config.posts.iter().map(|post| SiteRoute {
        path: post.href(),
        file: Path::new("blogs").join(&post.slug).join("index.html"),
    }));
    routes
}

/// Load `url`, settle every fetch, and return the app.
pub fn render_url<S: ContentSource>(
    config: &SiteConfig,
    source: S,
    url: Url,
) -> App<S, HeadlessDocument, MemoryStorage> {
    let mut app = App::new(
        config.clone(),
        source,
        HeadlessDocument::new(&config.title),
        MemoryStorage::new(),
        url,
    );
    app.load();
    app.settle();
    app
}

/// Render every route of the site into `output`.
pub fn prerender<S: ContentSource + ?Sized>(
    config: &SiteConfig,
    site_root: &Path,
    source: &S,
    output: &Path,
) -> Result<PrerenderSummary, PrerenderError> {
    let base = config.base_url()?;
    fs::create_dir_all(output)?;

    let mut summary = PrerenderSummary {
        copied: copy_site_files(site_root, output)?,
        ..Default::default()
    };

    for route in site_routes(config) {
        let url = base.join(&route.path)?;
        let app = render_url(config, source, url);
        let target = output.join(&route.file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, app.document().render().into_string())?;
        debug!("Rendered {} → {}", route.path, target.display());
        summary.pages.push(RenderedPage {
            path: route.path,
            file: route.file,
            view: app.view_state().clone(),
        });
    }

    fs::write(output.join("404.html"), redirect_page(&config.title).into_string())?;
    info!(
        "Prerendered {} pages into {}",
        summary.pages.len(),
        output.display()
    );
    Ok(summary)
}

/// The page static hosts serve for unknown paths.
pub fn redirect_page(title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                script { (PreEscaped(REDIRECT_SCRIPT)) }
            }
            body {}
        }
    }
}

/// Copy every file under `site_root` except the config and `output` itself.
fn copy_site_files(site_root: &Path, output: &Path) -> Result<Vec<PathBuf>, PrerenderError> {
    let mut copied = Vec::new();
    let walker = WalkDir::new(site_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.path() != output);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(site_root) else {
            continue;
        };
        if relative == Path::new(CONFIG_FILE) {
            continue;
        }
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)?;
        copied.push(relative.to_path_buf());
    }
    Ok(copied)
}
