//! Console plus append-only file logging on top of `env_logger`.

use crate::core::SwapResult;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: Option<String>,
    /// Append every record here as well as to stderr.
    pub file: Option<PathBuf>,
}

/// Writes each buffer to the log file and mirrors it to stderr.
struct TeeWriter {
    file: File,
    stderr: io::Stderr,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        self.stderr.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.stderr.flush()
    }
}

fn builder(config: &LogConfig) -> SwapResult<env_logger::Builder> {
    let filter = config.default_filter.as_deref().unwrap_or("info");
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {} {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = &config.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
            file,
            stderr: io::stderr(),
        })));
    }

    Ok(builder)
}

/// Install the global logger. Call once, before anything logs.
pub fn init(config: &LogConfig) -> SwapResult<()> {
    builder(config)?
        .try_init()
        .map_err(|e| crate::core::SwapError::ConfigError(format!("logger already set: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_records_are_appended_to_file() {
        let path = std::env::temp_dir().join(format!("syncswapper-log-{}.log", std::process::id()));
        std::fs::write(&path, "previous run\n").unwrap();

        let logger = builder(&LogConfig {
            default_filter: Some("debug".to_string()),
            file: Some(path.clone()),
        })
        .unwrap()
        .build();

        logger.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("Zero balance for USDT"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "previous run");
        assert!(lines[1].ends_with("WARN Zero balance for USDT"));
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let config = LogConfig {
            default_filter: None,
            file: Some(PathBuf::from("/nonexistent-dir/syncswapper.log")),
        };
        assert!(builder(&config).is_err());
    }
}
