//! Logging setup.
//!
//! The terminal is owned by the game, so log records go to a file. Nothing
//! is logged unless `RUST_LOG` is set.

use crate::core::constants::LOG_FILE_NAME;
use env_logger::{Builder, Target};
use std::fs::File;
use std::io;

/// Install the file logger if `RUST_LOG` is set. Returns whether a logger
/// was installed.
pub fn init() -> io::Result<bool> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(false);
    }
    let file = File::create(LOG_FILE_NAME)?;
    Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(true)
}
