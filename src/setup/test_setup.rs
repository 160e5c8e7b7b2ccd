use super::*;

#[cfg(test)]
use pretty_assertions::assert_eq;

use crate::CmdError;

#[test]
fn test_parse_level() {
    let cases = vec![
        ("debug", slog::Level::Debug),
        ("DEBUG", slog::Level::Debug),
        ("DEBG", slog::Level::Debug),
        ("info", slog::Level::Info),
        ("warn", slog::Level::Warning),
        ("error", slog::Level::Error),
        ("trace", slog::Level::Trace),
    ];

    for (s, want) in cases.iter() {
        assert_eq!(*want, parse_level(s).unwrap(), "level: {}", s);
    }

    for s in ["loud", "off", ""].iter() {
        match parse_level(s) {
            Err(CmdError::BadLogLevel(got)) => assert_eq!(*s, got),
            other => panic!("expect BadLogLevel but: {:?}", other),
        }
    }
}

#[test]
fn test_open_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/celetopo.log");

    {
        let mut f = setup::open_log_file(&path).unwrap();
        std::io::Write::write_all(&mut f, b"first\n").unwrap();
    }
    {
        let mut f = setup::open_log_file(&path).unwrap();
        std::io::Write::write_all(&mut f, b"second\n").unwrap();
    }

    assert_eq!("first\nsecond\n", std::fs::read_to_string(&path).unwrap());
}

#[test]
fn test_log_config_default() {
    let cfg = LogConfig::default();
    assert_eq!(None, cfg.path);
    assert_eq!(slog::Level::Info, cfg.level);
}
