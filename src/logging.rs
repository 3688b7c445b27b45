//! Log setup.
//!
//! The terminal UI owns stdout and stderr, so logs only go to a file and
//! only when one is requested.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Send `log` output to `path`, appending. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
