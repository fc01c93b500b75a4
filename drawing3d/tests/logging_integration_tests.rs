//! Integration tests for the drawing3d logging system
//!
//! These tests swap the global logger and check what library operations
//! report through it.
//!
//! Run with: cargo test --test logging_integration_tests

use drawing3d::drawing3d::log::{self, Logger, LogEntry, LogSeverity};
use drawing3d::drawing3d::draw_list::DrawList;
use drawing3d::drawing3d::render::{self, RecordingSurface};
use drawing3d::drawing3d::camera::Camera;
use drawing3d::drawing3d::Error;
use drawing3d::glam::DVec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn with_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    drawing3d::draw_info!("test::module", "Test info message");
    drawing3d::draw_warn!("test::module", "Test warning message");
    drawing3d::draw_error!("test::module", "Test error message");

    let captured = with_source(&entries, "test::module");
    log::reset_logger();

    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert!(captured[2].file.unwrap().ends_with("logging_integration_tests.rs"));
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    drawing3d::log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    let captured = with_source(&entries, "test::error");
    log::reset_logger();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("test_file.rs"));
    assert_eq!(captured[0].line, Some(42));
}

#[test]
#[serial]
fn test_integration_invalid_append_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let mut list = DrawList::new();
    let result = list.append_polygon(&[DVec3::ZERO, DVec3::X]);

    let captured = with_source(&entries, "drawing3d::DrawList");
    log::reset_logger();

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].message.contains("Polygon"));
    assert!(captured[0].line.is_some());
}

#[test]
#[serial]
fn test_integration_render_traces_stats() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let mut list = DrawList::new();
    list.append_clear();
    let mut camera = Camera::new();
    let mut surface = RecordingSurface::new();
    render::render(&list, &mut camera, &mut surface, None).unwrap();

    let captured = with_source(&entries, "drawing3d::RenderDispatcher");
    log::reset_logger();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Trace);
    assert!(captured[0].message.starts_with("rendered 1 records"));
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);
    drawing3d::draw_info!("test::reset", "Before reset");
    log::reset_logger();
    drawing3d::draw_info!("test::reset", "After reset");

    let captured = with_source(&entries, "test::reset");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "Before reset");
}
