//! Test: Run plans - selecting variants and inputs from YAML

use crate::helpers::*;
use templated_pipeline::core::config::RunPlan;
use templated_pipeline::core::MemorySink;
use templated_pipeline::document::DocumentKind;
use templated_pipeline::execution::ExecutionEngine;
use templated_pipeline::processing::{FileFormat, ProcessedFile};

/// Execute a whole plan the way `templated run` does
#[test]
fn test_plan_drives_every_variant() {
    let (dir, text_path) = temp_file("notes.txt", " first \n\nsecond\n");
    let csv_path = dir.path().join("table.csv");
    std::fs::write(&csv_path, "a,b\n,\nc,d\n").unwrap();

    let yaml = format!(
        r#"
name: "Everything"
documents: [report, spreadsheet]
files:
  - path: "{}"
    validate_exists: true
  - path: "{}"
    format: csv
    validate_exists: true
"#,
        text_path.display(),
        csv_path.display()
    );
    let plan = RunPlan::from_yaml(&yaml).unwrap();
    let engine = ExecutionEngine::new();

    let mut sink = MemorySink::new();
    for &kind in &plan.documents {
        engine.create_document(kind.document().as_ref(), &mut sink).unwrap();
    }
    assert_eq!(sink.lines().len(), 8);
    assert_eq!(sink.lines()[0], "Opening Report...");
    assert_eq!(sink.lines()[7], "Closing Spreadsheet...");

    let results: Vec<ProcessedFile> = plan
        .files
        .iter()
        .map(|job| {
            job.format
                .run(&engine, std::path::Path::new(&job.path))
                .unwrap()
                .output
        })
        .collect();

    assert_eq!(
        results[0],
        ProcessedFile::Lines(vec!["first".to_string(), "second".to_string()])
    );
    assert_eq!(results[1].display_lines(), vec!["a, b", "c, d"]);
}

#[test]
fn test_plan_rejects_missing_input() {
    let (dir, _) = temp_file("present.txt", "");
    let yaml = format!(
        "name: \"Broken\"\nfiles:\n  - path: \"{}\"\n    validate_exists: true\n",
        dir.path().join("gone.txt").display()
    );

    let err = RunPlan::from_yaml(&yaml).unwrap_err();
    assert!(err.to_string().contains("gone.txt"));
}

#[test]
fn test_demo_plan_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/demo.yaml");
    let plan: RunPlan = serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(plan.documents, DocumentKind::ALL.to_vec());
    assert_eq!(plan.files[1].format, FileFormat::Csv);
    assert_eq!(plan.files[2].format, FileFormat::Xml);
    // Sample paths are relative to the crate root
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    for job in &plan.files {
        assert!(root.join(&job.path).exists(), "missing sample {}", job.path);
    }
}
