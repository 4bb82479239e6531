//! Integration tests for logger behavior.

#[cfg(feature = "file-logging")]
use graph_site::logger::init_file_logging;
use graph_site::logger::{set_level, set_level_from_str, Level};
use graph_site::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_messages() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_path = temp.path().join("graphsite.log");

    assert!(init_file_logging(&log_path));
    error!("dangling neighbor 7");

    let contents = std::fs::read_to_string(&log_path).expect("log file should exist");
    assert!(contents.contains("dangling neighbor 7"));
}
