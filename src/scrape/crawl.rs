// src/scrape/crawl.rs
//
// Sequential crawl over the source records. Each record goes
//   Pending → Matching → Matched | Unmatched → Done
// before the next one starts. The listing url is built once; the page cache
// makes sure it is downloaded once.

use crate::{
    config::options::CrawlOptions,
    core::net::Fetch,
    data::ProductRecord,
    error::{CrawlError, FatalError},
    progress::Progress,
    store::PageCache,
};

use super::matcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
    Unmatched,
}

/// Mutable state of one run. Owned by the `Crawler`, dropped with it.
pub struct RunContext<F: Fetch> {
    pub cache: PageCache<F>,
    failures: Vec<String>,
}

impl<F: Fetch> RunContext<F> {
    fn new(fetcher: F) -> Self {
        Self { cache: PageCache::new(fetcher), failures: Vec::new() }
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Same length and order as the input.
    pub records: Vec<ProductRecord>,
    /// Names without a listing match, in input order.
    pub failures: Vec<String>,
}

pub struct Crawler<F: Fetch> {
    opts: CrawlOptions,
    listing_url: String,
    ctx: RunContext<F>,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(opts: CrawlOptions, fetcher: F) -> Self {
        let listing_url = opts.listing_url();
        Self { opts, listing_url, ctx: RunContext::new(fetcher) }
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    pub fn context(&self) -> &RunContext<F> {
        &self.ctx
    }

    /// Match every record in order. Stops at the first fatal error; nothing
    /// crawled so far is returned in that case.
    ///
    /// `Progress::finish` is left to the caller, which knows when the
    /// result is actually stored.
    pub fn run(
        &mut self,
        records: Vec<ProductRecord>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<CrawlReport, CrawlError> {
        let total = records.len();
        logf!(total, listing = %self.listing_url, "crawl started");

        if let Some(p) = progress.as_deref_mut() {
            p.begin(total);
        }

        let mut out = Vec::with_capacity(total);

        for (i, record) in records.into_iter().enumerate() {
            let index = i + 1;
            let name = s!(record.name());

            if let Some(p) = progress.as_deref_mut() {
                p.item_started(index, total, &name);
            }

            let (updated, status) = self.crawl_one(&record).map_err(|cause| {
                loge!(index, product = %name, error = %cause, "crawl aborted");
                CrawlError::Aborted { index, name: name.clone(), cause }
            })?;

            match status {
                MatchStatus::Matched => {
                    logf!(index, product = %name, "matched");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&name);
                    }
                }
                MatchStatus::Unmatched => {
                    logw!(index, product = %name, "not found on listing page");
                    self.ctx.failures.push(name.clone());
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&name);
                    }
                }
            }
            out.push(updated);
        }

        let failures = self.ctx.failures.clone();
        logf!(
            total,
            failed = failures.len(),
            pages = self.ctx.cache.len(),
            "crawl finished"
        );

        Ok(CrawlReport { records: out, failures })
    }

    /// Match a single record against the listing page.
    /// Returns the record to emit and whether it was found.
    pub fn crawl_one(
        &mut self,
        record: &ProductRecord,
    ) -> Result<(ProductRecord, MatchStatus), FatalError> {
        let listing = self.ctx.cache.fetch(&self.listing_url)?;

        let found = matcher::match_product(
            &mut self.ctx.cache,
            &listing,
            record.name(),
            &self.opts.selectors,
        )?;

        Ok(match found {
            Some(enrichment) => (record.enriched(&enrichment), MatchStatus::Matched),
            None => (record.clone(), MatchStatus::Unmatched),
        })
    }
}
