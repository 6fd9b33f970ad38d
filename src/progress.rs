// src/progress.rs
use std::io::Write;

/// Lightweight progress reporting for the crawl.
/// Frontends implement this to surface status to users; the CLI prints lines.
pub trait Progress {
    /// Called at the start with the number of records.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A record is about to be matched. `index` is 1-based.
    fn item_started(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// The record was found on the listing page.
    fn item_done(&mut self, _name: &str) {}

    /// The record had no match on the listing page.
    fn item_failed(&mut self, _name: &str) {}

    /// Called once the run is complete, with the unmatched names.
    fn finish(&mut self, _failures: &[String]) {}
}

/// Writes the classic line-oriented status stream to any writer.
pub struct LineProgress<W: Write> {
    out: W,
}

impl<W: Write> LineProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, msg: &str) {
        // Write errors on the status stream are ignored.
        let _ = writeln!(self.out, "{msg}");
    }
}

impl<W: Write> Progress for LineProgress<W> {
    fn begin(&mut self, _total: usize) {
        self.line("Starting..");
    }
    fn log(&mut self, msg: &str) {
        self.line(msg);
    }
    fn item_started(&mut self, index: usize, total: usize, name: &str) {
        self.line(&format!("processing: ({index}/{total}) {name}"));
    }
    fn item_done(&mut self, name: &str) {
        self.line(&join!("done      :  ", name));
    }
    fn item_failed(&mut self, name: &str) {
        self.line(&join!("failed    :  ", name));
    }
    fn finish(&mut self, failures: &[String]) {
        self.line(&format!("Errors ({}):", failures.len()));
        for name in failures {
            self.line(name);
        }
    }
}
