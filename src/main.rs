//! Portfolio - bilingual personal portfolio site.
//!
//! `serve` loads the content document once and serves the site; `render`
//! writes a single page to a file or stdout; `lang` stores the preferred
//! language for later `render` runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use portfolio::content::load_content;
use portfolio::language::persist_language;
use portfolio::templates::{page_skeleton, render_document};
use portfolio::{build_router, AppState, Config, FileStore, Language, Portfolio};

#[derive(Parser)]
#[command(name = "portfolio", version, about = "Bilingual personal portfolio site")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Content JSON path or URL
        #[arg(long)]
        content: Option<String>,
    },
    /// Render one page as a standalone HTML document
    Render {
        /// Language; defaults to the stored preference
        #[arg(long)]
        lang: Option<Language>,
        /// Tab to show (about, projects, papers)
        #[arg(long)]
        tab: Option<String>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Store the preferred language
    Lang { lang: Language },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::resolve(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        content: None,
    }) {
        Command::Serve {
            host,
            port,
            content,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(content) = content {
                config.content.source = content;
            }
            serve(config).await
        }
        Command::Render {
            lang,
            tab,
            out,
            content,
        } => {
            if let Some(content) = content {
                config.content.source = content;
            }
            render_page(config, lang, tab, out).await
        }
        Command::Lang { lang } => {
            let mut store = FileStore::new(&config.preferences.path);
            persist_language(&mut store, lang);
            info!("Stored {} in {}", lang, store.path().display());
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is loaded before the router accepts any request
    let loaded = load_content(&config.content_source()).await;
    let state = AppState::new(loaded, config.content.assets_dir.clone());
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Portfolio running at http://{}", addr);
    info!("Content source: {}", config.content.source);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn render_page(
    config: Config,
    lang: Option<Language>,
    tab: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let loaded = load_content(&config.content_source()).await;
    let store = FileStore::new(&config.preferences.path);

    let mut portfolio = Portfolio::init(Arc::new(loaded.document), page_skeleton(), store);
    if let Some(lang) = lang {
        portfolio.show_language(lang);
    }
    if let Some(ref tab) = tab {
        portfolio.switch_tab(tab);
    }
    let html = render_document(&portfolio);

    match out {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}
