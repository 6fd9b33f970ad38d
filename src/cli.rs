// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::consts::{DEFAULT_SITE, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::{
    AppOptions, CrawlOptions, ExportFormat, ExportOptions, LogLevel, LogOptions, NetOptions,
};
use crate::error::RunError;
use crate::progress::LineProgress;
use crate::runner::{self, RunSummary};

/// Enrich a product list with image, url and description from the catalog site.
#[derive(Parser, Debug)]
#[command(name = "catalog_scrape", version, about, long_about = None)]
pub struct Args {
    /// Source file (first row is the header, needs a `name` column)
    pub source: PathBuf,

    /// Result file; written only if the whole crawl succeeds
    pub destination: PathBuf,

    /// Storefront language the product names are in, e.g. `it`
    pub language: String,

    /// Catalog site, as in http://www.<site>.<language>/products
    #[arg(long, default_value = DEFAULT_SITE)]
    pub site: String,

    /// Delimited file format of source and result
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User agent sent with every request
    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Debug log file (`-` logs to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut log = LogOptions::default();
        if self.verbose {
            log.level = LogLevel::Debug;
        }
        match self.log_file {
            Some(p) if p.as_os_str() == "-" => log.file = None,
            Some(p) => log.file = Some(p),
            None => {}
        }

        AppOptions {
            crawl: CrawlOptions { site: self.site, ..CrawlOptions::for_language(&self.language) },
            export: ExportOptions {
                source: self.source,
                destination: self.destination,
                format: self.format.into(),
            },
            net: NetOptions {
                user_agent: self.user_agent,
                timeout: Duration::from_secs(self.timeout),
            },
            log,
        }
    }
}

/// Parse args, crawl, print the status stream to stdout.
pub fn run() -> Result<RunSummary, RunError> {
    let opts = Args::parse().into_options();

    if let Err(e) = crate::log::init(&opts.log) {
        eprintln!("Warning: could not open log file: {e}");
    }

    let mut progress = LineProgress::new(std::io::stdout().lock());
    runner::run(&opts, Some(&mut progress))
}
