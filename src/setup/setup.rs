use std::fs::{self, File, OpenOptions};
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};

use slog::Drain;

use super::log_format::TopoFormat;
use crate::CmdError;

/// LogConfig tells where to log and what to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log to this file in append mode, or to stderr if it is None.
    pub path: Option<PathBuf>,
    pub level: slog::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            path: None,
            level: slog::Level::Info,
        }
    }
}

/// parse_level accepts a level name such as `debug` or `warn`,
/// or its short form such as `DEBG`, ignoring case.
pub fn parse_level(s: &str) -> Result<slog::Level, CmdError> {
    if s.eq_ignore_ascii_case("off") {
        return Err(CmdError::BadLogLevel(s.into()));
    }
    s.parse::<slog::Level>()
        .map_err(|_| CmdError::BadLogLevel(s.into()))
}

/// init_logger sets up the global log.
pub fn init_logger(cfg: &LogConfig) -> io::Result<()> {
    let drain = match cfg.path {
        Some(ref p) => {
            let file = open_log_file(p)?;
            let decorator = slog_term::PlainDecorator::new(file);
            slog_async::Async::new(TopoFormat::new(decorator).fuse()).build()
        }
        None => {
            let decorator = slog_term::PlainDecorator::new(io::stderr());
            slog_async::Async::new(TopoFormat::new(decorator).fuse()).build()
        }
    };

    let drain = slog::LevelFilter::new(drain.fuse(), cfg.level).fuse();
    let logger = slog::Logger::root(drain, slog::o!());

    slog_global::set_global(logger);

    info!("logger ready"; "level" => cfg.level.as_str(), "path" => ?cfg.path);
    Ok(())
}

/// Opens log file with append mode. Creates a new log file if it doesn't exist.
pub(crate) fn open_log_file<P: AsRef<Path>>(path: P) -> io::Result<File> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| {
        Error::new(
            ErrorKind::Other,
            "Unable to get parent directory of log file",
        )
    })?;
    if !parent.as_os_str().is_empty() && !parent.is_dir() {
        fs::create_dir_all(parent)?
    }
    OpenOptions::new().append(true).create(true).open(path)
}
