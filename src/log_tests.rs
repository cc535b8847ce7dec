//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the
//! global logger slot (via CaptureLogger, serialized).

use super::*;
use serial_test::serial;
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "render_batch::VertexRecorder".to_string(),
        message: "Session started".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "render_batch::VertexRecorder");
    assert_eq!(entry.message, "Session started");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "render_batch::VertexRecorder".to_string(),
        message: "boom".to_string(),
        file: Some("recorder.rs"),
        line: Some(42),
    };
    let cloned = entry.clone();
    assert_eq!(cloned.severity, entry.severity);
    assert_eq!(cloned.message, entry.message);
    assert_eq!(cloned.file, Some("recorder.rs"));
    assert_eq!(cloned.line, Some(42));
}

// ============================================================================
// GLOBAL LOGGER TESTS (serialized: shared logger slot)
// ============================================================================

#[test]
#[serial]
fn test_capture_logger_receives_entries() {
    let entries = CaptureLogger::install();

    log(
        LogSeverity::Warn,
        "render_batch::test",
        "captured message".to_string(),
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[0].source, "render_batch::test");
    assert_eq!(captured[0].message, "captured message");
    assert!(captured[0].file.is_none());
}

#[test]
#[serial]
fn test_log_detailed_carries_file_and_line() {
    let entries = CaptureLogger::install();

    log_detailed(
        LogSeverity::Error,
        "render_batch::test",
        "detailed message".to_string(),
        "some_file.rs",
        7,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("some_file.rs"));
    assert_eq!(captured[0].line, Some(7));
}

#[test]
#[serial]
fn test_macros_route_through_global_logger() {
    let entries = CaptureLogger::install();

    crate::recorder_warn!("render_batch::test", "value is {}", 3);
    crate::recorder_error!("render_batch::test", "failed: {}", "reason");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[0].message, "value is 3");
    assert_eq!(captured[1].severity, LogSeverity::Error);
    assert_eq!(captured[1].message, "failed: reason");
    // recorder_error! attaches the call site
    assert!(captured[1].file.is_some());
    assert!(captured[1].line.is_some());
}
