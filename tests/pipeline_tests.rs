//! End-to-end tests over the full pipeline: read -> group -> summarize -> write.

use event_summarizer::commands::{
    census_log_file, execute_summarize, SummarizeArgs, SummarizeOutcome,
};
use event_summarizer::utils::error::ReadError;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("events.txt");
    fs::write(&path, content).unwrap();
    path
}

fn run_pipeline(input: &Path, output_dir: &Path) -> SummarizeOutcome {
    let args = SummarizeArgs {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
    };
    execute_summarize(&args).unwrap()
}

#[test]
fn test_single_record_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1000|7|1|100|alpha.exe\n");
    let out = dir.path().join("reports");

    let outcome = run_pipeline(&input, &out);

    match outcome {
        SummarizeOutcome::Written { files, .. } => assert_eq!(files.len(), 1),
        other => panic!("expected Written, got {:?}", other),
    }

    let content = fs::read_to_string(out.join("alpha.exe.txt")).unwrap();
    assert_eq!(
        content,
        "EVENT|UID|PID|PROCESS_NAME|COUNTER|FIRST_TIMESTAMP\n7|1|100|alpha.exe|1|1000\n"
    );
}

#[test]
fn test_two_records_one_bucket() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1000|7|1|100|alpha.exe\n1500|7|2|101|alpha.exe\n");
    let out = dir.path().join("reports");

    run_pipeline(&input, &out);

    let content = fs::read_to_string(out.join("alpha.exe.txt")).unwrap();
    assert_eq!(
        content,
        "EVENT|UID|PID|PROCESS_NAME|COUNTER|FIRST_TIMESTAMP\n7|1|100|alpha.exe|2|1000\n"
    );
}

#[test]
fn test_earliest_record_supplies_ids_regardless_of_input_order() {
    let dir = TempDir::new().unwrap();
    // Later timestamp appears first in the file
    let input = write_input(&dir, "1500|7|2|101|alpha.exe\n1000|7|1|100|alpha.exe\n");
    let out = dir.path().join("reports");

    run_pipeline(&input, &out);

    let content = fs::read_to_string(out.join("alpha.exe.txt")).unwrap();
    assert!(content.contains("7|1|100|alpha.exe|2|1000"));
}

#[test]
fn test_header_only_input_reports_no_valid_events() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "TIMESTAMP|EVENT_CODE|USER_ID|PROCESS_ID|PROCESS_NAME\n\n   \n",
    );
    let out = dir.path().join("reports");

    let outcome = run_pipeline(&input, &out);

    assert!(matches!(outcome, SummarizeOutcome::NoValidEvents));
    // Short-circuit happens before the writer touches the output directory
    assert!(!out.exists());
}

#[test]
fn test_malformed_lines_skipped_valid_lines_survive() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "abc|7|1|100|alpha.exe\n\
         1000|7|1|100|alpha.exe\n\
         1000|7|1\n\
         2000|9|3|200|alpha.exe\n",
    );
    let out = dir.path().join("reports");

    run_pipeline(&input, &out);

    let content = fs::read_to_string(out.join("alpha.exe.txt")).unwrap();
    assert_eq!(
        content,
        "EVENT|UID|PID|PROCESS_NAME|COUNTER|FIRST_TIMESTAMP\n\
         7|1|100|alpha.exe|1|1000\n\
         9|3|200|alpha.exe|1|2000\n"
    );
}

#[test]
fn test_process_name_sanitization() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1000|7|1|100|svc/worker:1\n");
    let out = dir.path().join("reports");

    run_pipeline(&input, &out);

    let path = out.join("svc_worker_1.txt");
    assert!(path.exists());
    // The report content keeps the original process name
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("7|1|100|svc/worker:1|1|1000"));
}

#[test]
fn test_one_file_per_process_with_ascending_codes() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "1000|42|1|100|alpha.exe\n\
         1100|7|1|100|alpha.exe\n\
         1200|19|1|100|alpha.exe\n\
         1300|7|2|200|beta.exe\n",
    );
    let out = dir.path().join("reports");

    let outcome = run_pipeline(&input, &out);

    match outcome {
        SummarizeOutcome::Written { files, .. } => assert_eq!(files.len(), 2),
        other => panic!("expected Written, got {:?}", other),
    }

    let alpha = fs::read_to_string(out.join("alpha.exe.txt")).unwrap();
    let codes: Vec<i32> = alpha
        .lines()
        .skip(1)
        .map(|line| line.split('|').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(codes, vec![7, 19, 42]);

    let beta = fs::read_to_string(out.join("beta.exe.txt")).unwrap();
    assert_eq!(beta.lines().count(), 2);
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "1000|7|1|100|alpha.exe\n\
         1500|9|2|101|alpha.exe\n\
         2000|7|3|102|beta.exe\n",
    );
    let out = dir.path().join("reports");

    let snapshot = |out: &Path| -> BTreeMap<String, Vec<u8>> {
        fs::read_dir(out)
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                let name = entry.file_name().into_string().unwrap();
                (name, fs::read(entry.path()).unwrap())
            })
            .collect()
    };

    run_pipeline(&input, &out);
    let first = snapshot(&out);

    run_pipeline(&input, &out);
    let second = snapshot(&out);

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_aborts_with_not_found() {
    let dir = TempDir::new().unwrap();
    let args = SummarizeArgs {
        input: dir.path().join("missing.txt"),
        output_dir: dir.path().join("reports"),
    };

    let err = execute_summarize(&args).unwrap_err();

    // The typed error survives the anyhow context chain
    assert!(matches!(
        err.downcast_ref::<ReadError>(),
        Some(ReadError::NotFound { .. })
    ));
    assert!(!dir.path().join("reports").exists());
}

#[test]
fn test_inspect_census_matches_summarize_parsing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "TIMESTAMP|EVENT_CODE|USER_ID|PROCESS_ID|PROCESS_NAME\n\
         1000|7|1|100|alpha.exe\n\
         abc|7|1|100|alpha.exe\n",
    );

    let census = census_log_file(&input).unwrap();

    assert_eq!(census.valid, 1);
    assert_eq!(census.header_or_blank, 1);
    assert_eq!(census.malformed, 1);
}
