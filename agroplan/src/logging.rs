//! Tracing setup
//!
//! The TUI owns stdout, so logs go to a file. One-shot runs without a log
//! file log to stderr instead. `RUST_LOG` controls the filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick where logs go for this run.
    pub fn for_run(log_file: Option<&'a Path>, once: bool) -> Self {
        match (log_file, once) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
pub fn init(target: LogTarget<'_>) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true);

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogTarget::Off => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_for_run() {
        let path = Path::new("agroplan.log");
        assert_eq!(LogTarget::for_run(Some(path), false), LogTarget::File(path));
        assert_eq!(LogTarget::for_run(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::for_run(None, true), LogTarget::Stderr);
        assert_eq!(LogTarget::for_run(None, false), LogTarget::Off);
    }
}
