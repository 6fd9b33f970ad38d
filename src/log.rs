// src/log.rs
//
// Debug log sink. Progress lines go to stdout (see `progress`), everything
// else goes through `tracing` into a log file so the console stays readable.

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::options::LogOptions;

/// Install the global subscriber. `RUST_LOG` wins over `opts.level`.
///
/// With no log file configured, events go to stderr.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(opts: &LogOptions) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    let installed = match &opts.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    if installed.is_err() {
        logd!("tracing subscriber already installed; keeping it");
    }
    Ok(())
}
