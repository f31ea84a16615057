//! Test: File processing - read/parse/process and error propagation

use crate::helpers::*;
use pretty_assertions::assert_eq;
use templated_pipeline::core::{ExecutionStatus, PipelineError, ResourceErrorKind, StepState};
use templated_pipeline::execution::ExecutionEvent;
use templated_pipeline::processing::{
    process_file, CsvFileProcessor, FileProcessor, FileProcessorFramework, TextFileProcessor,
    XmlFileProcessor,
};

#[test]
fn test_text_scenario() {
    let (_dir, path) = temp_file("sample.txt", "  hello  \n\nworld\n   \n");

    let result = process_file(&TextFileProcessor, &path).unwrap();
    assert_eq!(result, vec!["hello", "world"]);
}

#[test]
fn test_result_is_non_empty_stripped_lines_in_order() {
    let input = "alpha\n  beta\t\n\n\n gamma \r\n \nalpha\n";
    let (_dir, path) = temp_file("lines.txt", input);

    let result = process_file(&TextFileProcessor, &path).unwrap();
    let line_count = input.split('\n').count();

    assert!(result.len() <= line_count);
    assert_eq!(result, vec!["alpha", "beta", "gamma", "alpha"]);
}

#[test]
fn test_empty_file() {
    let (_dir, path) = temp_file("empty.txt", "");

    assert_eq!(TextFileProcessor.parse(String::new()).unwrap(), vec![""]);
    assert!(process_file(&TextFileProcessor, &path).unwrap().is_empty());
}

#[test]
fn test_whitespace_only_file() {
    let (_dir, path) = temp_file("blank.txt", "   \n\t\n \r\n");
    assert!(process_file(&TextFileProcessor, &path).unwrap().is_empty());
}

#[test]
fn test_rerun_is_idempotent() {
    let (_dir, path) = temp_file("sample.txt", "one\n two\n\nthree ");
    let framework = FileProcessorFramework::new(TextFileProcessor);

    let first = framework.process_file(&path).unwrap();
    let second = framework.process_file(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_not_found() {
    let (engine, events) = recording_engine();
    let (dir, _) = temp_file("present.txt", "");
    let missing = dir.path().join("absent.txt");

    let err = engine.process_file(&TextFileProcessor, &missing).unwrap_err();
    assert_eq!(err.kind(), ResourceErrorKind::NotFound);
    assert_eq!(err.io_error().unwrap().kind(), std::io::ErrorKind::NotFound);

    let events = events.lock().unwrap();
    assert_eq!(started_steps(&events), vec!["read"]);
    assert!(events.iter().any(|e| matches!(
        e,
        ExecutionEvent::StepFailed { step, .. } if step == "read"
    )));
    assert!(matches!(
        events.last(),
        Some(ExecutionEvent::PipelineCompleted {
            status: ExecutionStatus::Failed,
            ..
        })
    ));
}

#[test]
fn test_directory_path_fails_at_read() {
    let (dir, _) = temp_file("present.txt", "");

    let err = process_file(&TextFileProcessor, dir.path()).unwrap_err();
    assert_ne!(err.kind(), ResourceErrorKind::NotFound);
}

#[test]
fn test_csv_records() {
    let (_dir, path) = temp_file("people.csv", "name, role\nAda ,engineer\n\n Grace, admiral\n");

    let outcome = templated_pipeline::ExecutionEngine::new()
        .process_file(&CsvFileProcessor, &path)
        .unwrap();

    assert_eq!(
        outcome.output,
        vec![
            vec!["name".to_string(), "role".to_string()],
            vec!["Ada".to_string(), "engineer".to_string()],
            vec!["Grace".to_string(), "admiral".to_string()],
        ]
    );
    assert_eq!(outcome.summary.variant, "csv");
    assert!(outcome
        .summary
        .steps
        .iter()
        .all(|s| matches!(s.state, StepState::Completed { .. })));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_permission_denied() {
    use std::fs::{self, File, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = temp_file("locked.txt", "secret\n");
    fs::set_permissions(&path, Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes, so there is nothing to deny
    if File::open(&path).is_ok() {
        fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let (engine, events) = recording_engine();
    let result = engine.process_file(&TextFileProcessor, &path);
    fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ResourceErrorKind::PermissionDenied);
    assert_eq!(
        err.io_error().unwrap().kind(),
        std::io::ErrorKind::PermissionDenied
    );
    assert_eq!(started_steps(&events.lock().unwrap()), vec!["read"]);
}

#[test]
fn test_xml_text_nodes() {
    let (_dir, path) = temp_file(
        "feed.xml",
        "<feed>\n  <entry><title> First </title><body>Hello</body></entry>\n  <entry/>\n</feed>",
    );

    let result = process_file(&XmlFileProcessor, &path).unwrap();
    assert_eq!(result, vec!["First", "Hello"]);
}

#[test]
fn test_malformed_xml_stops_at_parse() {
    let (_dir, path) = temp_file("broken.xml", "<feed><entry></feed>");
    let (engine, events) = recording_engine();

    let err = engine.process_file(&XmlFileProcessor, &path).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { format: "xml", .. }));
    assert!(err.io_error().is_none());

    let events = events.lock().unwrap();
    assert_eq!(started_steps(&events), vec!["read", "parse"]);
    assert!(events.iter().any(|e| matches!(
        e,
        ExecutionEvent::StepFailed { step, error, .. }
            if step == "parse" && error.starts_with("Malformed xml input")
    )));
    assert!(matches!(
        events.last(),
        Some(ExecutionEvent::PipelineCompleted {
            status: ExecutionStatus::Failed,
            ..
        })
    ));
}
