use clap::{Parser, Subcommand, ValueEnum};
use folio::app::App;
use folio::config::{self, SiteConfig};
use folio::dom::HeadlessDocument;
use folio::fetch::{ContentSource, DirSource, HttpSource};
use folio::storage::{FileStorage, Storage};
use folio::theme::{self, Theme};
use folio::{output, prerender};
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal site router and renderer")]
#[command(long_about = "\
Personal site router and renderer

A site is a directory of static content plus a config.toml holding the post
table. Paths map to views: /about shows the about pane, /blogs/<slug> shows
a post, anything else shows the blog list.

Site structure:

  site/
  ├── config.toml          # Title, post table, reveal delay (optional)
  ├── projects.json        # [{\"name\", \"url\", \"description\"}] for the Tools tab
  └── blogs/
      └── blog1.md         # Post sources referenced by [[posts]] source_path

Content is read from the site directory, or over HTTP with --origin.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory
    #[arg(long, default_value = "site", global = true)]
    site: PathBuf,

    /// Fetch content from this origin instead of the site directory
    #[arg(long, global = true)]
    origin: Option<Url>,

    /// File the theme preference is persisted in
    #[arg(long, default_value = ".folio-storage.json", global = true)]
    storage: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every route and the post source behind it
    Routes,
    /// Load a URL, settle all fetches, and print the page HTML
    Render {
        /// Site path or absolute URL
        url: String,
    },
    /// Load a URL and print a summary of the resulting view
    View {
        /// Site path or absolute URL
        url: String,
    },
    /// Print the theme preference, or persist a new one
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },
    /// Prerender every route into static HTML
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Validate config.toml without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Routes => {
            let config = config::load_config(&cli.site)?;
            output::print_routes(&config);
        }
        Command::Render { url } => {
            let config = config::load_config(&cli.site)?;
            let source = content_source(&cli);
            let app = load_app(&cli, &config, source.as_ref(), url)?;
            println!("{}", app.document().render().into_string());
        }
        Command::View { url } => {
            let config = config::load_config(&cli.site)?;
            let source = content_source(&cli);
            let app = load_app(&cli, &config, source.as_ref(), url)?;
            output::print_view(&app);
        }
        Command::Theme { theme: choice } => {
            let config = config::load_config(&cli.site)?;
            let mut storage = FileStorage::open(&cli.storage)?;
            let current = match choice {
                Some(arg) => {
                    let chosen = Theme::from(*arg);
                    storage.set_item(&config.theme_key, chosen.as_str())?;
                    chosen
                }
                None => theme::load(&storage, &config.theme_key),
            };
            output::print_theme(current, storage.path());
        }
        Command::Build { output: out } => {
            let config = config::load_config(&cli.site)?;
            let source = content_source(&cli);
            let summary = prerender::prerender(&config, &cli.site, source.as_ref(), out)?;
            output::print_prerender(&summary, out);
        }
        Command::Check => {
            let config = config::load_config(&cli.site)?;
            output::print_check(&config, &cli.site);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn content_source(cli: &Cli) -> Box<dyn ContentSource> {
    match &cli.origin {
        Some(origin) => Box::new(HttpSource::new(origin.clone())),
        None => Box::new(DirSource::new(&cli.site)),
    }
}

/// Load `target` (a site path or absolute URL) and settle every fetch.
fn load_app<'a>(
    cli: &Cli,
    config: &SiteConfig,
    source: &'a dyn ContentSource,
    target: &str,
) -> Result<App<&'a dyn ContentSource, HeadlessDocument, FileStorage>, Box<dyn std::error::Error>> {
    let url = config.base_url()?.join(target)?;
    let storage = FileStorage::open(&cli.storage)?;
    let mut app = App::new(
        config.clone(),
        source,
        HeadlessDocument::new(&config.title),
        storage,
        url,
    );
    app.load();
    app.settle();
    Ok(app)
}
