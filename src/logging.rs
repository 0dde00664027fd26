//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::CliFlags;
use crate::error::Error;

pub const LOG_ENV: &str = "GENPASS_LOG";
/// Warnings already reach the user through the CLI prompts, so without
/// `GENPASS_LOG` only errors are logged.
const DEFAULT_FILTER: &str = "error";

/// Where log lines go.
#[derive(Debug, PartialEq, Eq)]
pub enum Sink<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber. Used by the interactive view when no log file is set.
    Off,
}

/// Pick the sink for a run. `env_filter_set` is whether `GENPASS_LOG` is set.
///
/// A log file always wins. The view never logs to stderr since it would draw
/// over the screen. Quiet one-shot runs stay silent unless logging was asked
/// for explicitly.
pub fn sink_for(flags: &CliFlags, env_filter_set: bool) -> Sink<'_> {
    if let Some(path) = &flags.log_file {
        return Sink::File(path);
    }
    if !flags.is_one_shot() || (flags.quiet && !env_filter_set) {
        return Sink::Off;
    }
    Sink::Stderr
}

pub fn init(sink: Sink<'_>) -> Result<(), Error> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match sink {
        Sink::Off => {}
        Sink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        Sink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::Log {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
