// src/runner.rs
//
// Whole job: load the source table, crawl it, write the result.
// The result file is only written after the crawl finished; a fatal error
// leaves the destination untouched. The failure summary is reported once the
// file is on disk.

use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    data::SourceTable,
    error::RunError,
    file,
    progress::Progress,
    scrape::Crawler,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub written: PathBuf,
    pub total: usize,
    pub failures: Vec<String>,
}

/// Run against the live site.
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let fetcher = HttpFetcher::new(&opts.net)?;
    run_with(opts, fetcher, progress)
}

/// Same as `run`, with the caller's fetch boundary.
pub fn run_with<F: Fetch>(
    opts: &AppOptions,
    fetcher: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let sep = opts.export.format.delim();
    let source = file::read_source(&opts.export.source, sep)?;
    let headers = source.headers;

    let mut crawler = Crawler::new(opts.crawl.clone(), fetcher);
    let report = crawler.run(
        source.records,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    )?;

    let result = SourceTable { headers, records: report.records };
    let written = opts.export.destination.clone();
    file::write_result(&written, &result, sep)
        .map_err(|source| RunError::Write { path: written.clone(), source })?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", written.display()));
        p.finish(&report.failures);
    }

    Ok(RunSummary {
        written,
        total: result.records.len(),
        failures: report.failures,
    })
}
