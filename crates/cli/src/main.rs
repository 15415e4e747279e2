use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Terminal rendition of the portfolio page.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Content catalog (JSON, or YAML by extension); falls back to $FOLIO_CATALOG, then the built-in content
    #[arg(long, value_name = "PATH")]
    catalog: Option<String>,

    /// Reload the catalog when the file changes
    #[arg(long, requires = "catalog")]
    watch: bool,

    /// Theme id or alias (overrides $FOLIO_THEME)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Write logs to this file while the page is open
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the page as plain text instead of opening it
    #[arg(long)]
    print: bool,

    /// Columns used by --print
    #[arg(long, value_name = "COLUMNS", default_value_t = 100, requires = "print")]
    width: u16,

    /// List the available themes
    #[arg(long)]
    list_themes: bool,
}

/// Where log output goes for this invocation.
enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl Cli {
    fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.print) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for definition in folio_tui::themes() {
            println!("{:<10} {:<22} {}", definition.id, definition.label, definition.description);
        }
        return Ok(());
    }

    init_tracing(cli.log_target())?;

    let catalog_path = folio_catalog::resolve_path(cli.catalog.as_deref());
    let catalog = match &catalog_path {
        Some(path) => {
            folio_catalog::load_from_path(path).with_context(|| format!("failed to load catalog from {}", path.display()))?
        }
        None => folio_catalog::embedded().context("built-in catalog is invalid")?,
    };
    debug!(path = ?catalog_path, items = catalog.nav_items.len(), "Catalog loaded");

    if cli.print {
        let year = chrono::Local::now().year();
        print!("{}", folio_tui::render_plain(&catalog, cli.width, year));
        return Ok(());
    }

    let options = folio_tui::RunOptions {
        theme: cli.theme,
        catalog,
        watch: if cli.watch { catalog_path } else { None },
    };
    folio_tui::run(options).await?;
    info!("Folio exited");
    Ok(())
}

fn init_tracing(target: LogTarget) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(filter))
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = File::create(&path).with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(filter))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
