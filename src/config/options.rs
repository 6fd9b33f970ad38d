// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub crawl: CrawlOptions,
    pub export: ExportOptions,
    pub net: NetOptions,
    pub log: LogOptions,
}

/* ---------------- Crawl ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Second-level name of the catalog site, e.g. "eucerin".
    pub site: String,
    /// Storefront language code; used verbatim as the top-level domain.
    pub language: String,
    pub selectors: PageSelectors,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            site: s!(DEFAULT_SITE),
            language: s!(),
            selectors: PageSelectors::default(),
        }
    }
}

impl CrawlOptions {
    pub fn for_language(language: &str) -> Self {
        Self { language: s!(language), ..Self::default() }
    }

    /// `http://www.<site>.<language>/products`
    pub fn listing_url(&self) -> String {
        join!("http://www.", &self.site, ".", &self.language, LISTING_PATH)
    }
}

/// CSS selectors describing the listing and detail page layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSelectors {
    pub teaser: String,
    pub heading: String,
    pub image: String,
    pub link: String,
    pub product_head: String,
    pub subtitle: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            teaser: s!(SEL_TEASER),
            heading: s!(SEL_HEADING),
            image: s!(SEL_IMAGE),
            link: s!(SEL_LINK),
            product_head: s!(SEL_PRODUCT_HEAD),
            subtitle: s!(SEL_SUBTITLE),
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Applies to both the source and the result file.
    pub format: ExportFormat,
}

/* ---------------- Net ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/* ---------------- Log ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub level: LogLevel,
    /// `None` logs to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: Some(PathBuf::from(STORE_DIR).join(LOG_FILE)),
        }
    }
}
