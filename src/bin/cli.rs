//! Command-line entry point.
//!
//! Launches one headless Chrome session, scrapes the six catalog pages in
//! order, and writes `<page>.csv` files into the output directory. Exits
//! non-zero if the browser could not be started or any page failed.

use anyhow::Context;
use clap::Parser;
use ecom_scraper::{Session, SessionOptions, catalog};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecom-scraper")]
#[command(version)]
#[command(about = "Scrape the webscraper.io e-commerce demo catalog to CSV files", long_about = None)]
struct Cli {
    /// Launch the browser in headed mode (default: headless)
    #[arg(long)]
    headed: bool,

    /// Directory the per-page CSV files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Path to a custom Chrome/Chromium executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir).with_context(|| {
        format!("failed to create output directory {}", cli.out_dir.display())
    })?;

    let mut options = SessionOptions::new().headless(!cli.headed);
    if let Some(path) = cli.chrome_path {
        options = options.chrome_path(path);
    }

    let session = Session::launch(options).context("failed to start browser session")?;

    let summary = catalog::run(&session, &cli.out_dir);
    session.close();

    log::info!(
        "done: {} pages written, {} products, {} pages failed",
        summary.pages_written,
        summary.products_written,
        summary.pages_failed
    );

    if summary.pages_failed > 0 {
        anyhow::bail!(
            "{} of {} pages failed; see log for details",
            summary.pages_failed,
            catalog::PAGES.len()
        );
    }

    Ok(())
}
