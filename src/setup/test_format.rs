use std::io;
use std::sync::{Arc, Mutex};

use chrono::DateTime;
use slog::{o, slog_debug, slog_error, slog_info, slog_warn, Drain, Logger};

use super::log_format::TopoFormat;
use super::log_format::TIMESTAMP_FORMAT;

#[cfg(test)]
use pretty_assertions::assert_eq;

/// SharedBuf collects everything a logger writes.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut b = self.0.lock().map_err(|_| io::ErrorKind::Other)?;
        b.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn lines(&self) -> Vec<String> {
        let b = self.0.lock().unwrap();
        String::from_utf8(b.clone())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }
}

fn new_logger(buf: &SharedBuf) -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(buf.clone());
    Logger::root(TopoFormat::new(decorator).fuse(), o!())
}

/// split_line splits a formatted line into its time, level, location and the rest.
fn split_line(line: &str) -> (String, String, String, String) {
    let mut parts = line.splitn(4, "] ");
    let mut next = || parts.next().unwrap_or("").trim_start_matches('[').to_string();
    let time = next();
    let level = next();
    let location = next();
    let rest = next();
    (time, level, location, rest)
}

#[test]
fn test_topo_format_header() {
    let buf = SharedBuf::default();
    let logger = new_logger(&buf);

    let line = line!() + 1;
    slog_info!(logger, "logger ready");

    let lines = buf.lines();
    assert_eq!(1, lines.len());

    let (time, level, location, rest) = split_line(&lines[0]);
    assert!(
        DateTime::parse_from_str(&time, TIMESTAMP_FORMAT).is_ok(),
        "bad time: {}",
        time
    );
    assert_eq!("INFO", level);
    assert_eq!(format!("src/setup/test_format.rs:{}", line), location);
    assert_eq!("logger ready", rest);
}

#[test]
fn test_topo_format_levels_and_fields() {
    let buf = SharedBuf::default();
    let logger = new_logger(&buf);

    slog_debug!(logger, "decoded cluster slots"; "slot_sets" => 3, "nodes" => 6);
    slog_warn!(logger, "node identity differs"; "addr" => "127.0.0.1:7000", "ids" => ?["a", "b"]);
    slog_error!(logger, "bad reply");

    let got: Vec<(String, String)> = buf
        .lines()
        .iter()
        .map(|l| {
            let (_, level, _, rest) = split_line(l);
            (level, rest)
        })
        .collect();

    let want: Vec<(String, String)> = vec![
        ("DEBG", "decoded cluster slots, slot_sets: 3, nodes: 6"),
        ("WARN", r#"node identity differs, addr: 127.0.0.1:7000, ids: ["a", "b"]"#),
        ("ERRO", "bad reply"),
    ]
    .into_iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();

    assert_eq!(want, got);
}
