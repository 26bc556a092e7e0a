//! Bad input and unwritable destinations.

use std::fs;

use tierlog::{Caller, ConfigOptions, Level, LogError, WriteOutcome};

mod common;
use common::{fields, Scratch};

#[test]
fn test_invalid_code_short_circuits_to_error_notice() {
    let scratch = Scratch::new(ConfigOptions::default());

    let err = scratch
        .logger
        .write_code(999, "original message", &Caller::new("a.rs", 1, "f"), "")
        .unwrap_err();
    assert!(matches!(err, LogError::InvalidLevel(999)));

    let lines = scratch.lines("default_ERROR.log");
    assert_eq!(lines.len(), 1);
    let f = fields(&lines[0]);
    assert_eq!(f[3], "ERROR");
    assert_eq!(f[8], "a.rs:1");
    assert!(!lines[0].contains("original message"));
    assert!(lines[0].ends_with("invalid log level 999"));
    assert_eq!(scratch.files(), ["default_ERROR.log"]);
}

#[test]
fn test_negative_and_between_codes_are_invalid() {
    let scratch = Scratch::new(ConfigOptions::default());

    for code in [-1, 0, 150, 401] {
        let err = scratch
            .logger
            .write_code(code, "x", &Caller::default(), "")
            .unwrap_err();
        assert!(matches!(err, LogError::InvalidLevel(c) if c == code));
    }
    assert_eq!(scratch.lines("default_ERROR.log").len(), 4);
}

#[test]
fn test_unknown_dispatch_name() {
    let scratch = Scratch::new(ConfigOptions::default().split_by_business(true));

    let err = scratch
        .logger
        .dispatch("verbose", &["hi", "main.rs", "3", "go", "math"])
        .unwrap_err();
    assert!(matches!(err, LogError::UnknownLevelName(_)));

    let lines = scratch.lines("math_ERROR.log");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("does not exist"));
    assert_eq!(fields(&lines[0])[8], "main.rs:3");
}

#[test]
fn test_dispatch_name_is_case_insensitive() {
    let scratch = Scratch::new(ConfigOptions::default());

    scratch.logger.dispatch("CrItIcAl", &["db down"]).unwrap();

    let lines = scratch.lines("default_ERROR.log");
    assert_eq!(lines.len(), 1);
    assert_eq!(fields(&lines[0])[3], "CRITICAL");
    assert_eq!(fields(&lines[0])[8], "-:-");
}

#[test]
fn test_missing_directory_surfaces_write_error() {
    let scratch = Scratch::new(ConfigOptions::default());
    fs::remove_dir_all(scratch.dir.path()).unwrap();

    let err = scratch
        .logger
        .write(Level::Info, "lost", &Caller::default(), "")
        .unwrap_err();
    match err {
        LogError::Write { path, .. } => assert!(path.ends_with("default_INFO.log")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failed_notice_reports_write_error() {
    let scratch = Scratch::new(ConfigOptions::default());
    fs::remove_dir_all(scratch.dir.path()).unwrap();

    let err = scratch
        .logger
        .write_code(999, "x", &Caller::default(), "")
        .unwrap_err();
    assert!(matches!(err, LogError::Write { .. }));
}

#[test]
fn test_notice_is_written_above_min_level() {
    let scratch = Scratch::new(ConfigOptions::default().min_level(Level::Emergency));

    let err = scratch
        .logger
        .write_code(7, "x", &Caller::default(), "")
        .unwrap_err();
    assert!(matches!(err, LogError::InvalidLevel(7)));

    let lines = scratch.lines("default_ERROR.log");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("invalid log level 7"));
}

#[test]
fn test_business_cannot_escape_log_dir() {
    let scratch = Scratch::new(ConfigOptions::default().split_by_business(true));

    let outcome = scratch
        .logger
        .info("x", &Caller::default(), "sub/../../escaped")
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Written);

    assert_eq!(scratch.files(), ["default_INFO.log"]);
    assert_eq!(scratch.lines("default_INFO.log").len(), 1);
}
