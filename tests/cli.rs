use std::io::Write;
use std::process::{Command, Output};

fn cluegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cluegen"))
        .args(args)
        .output()
        .expect("failed to run cluegen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn no_arguments_prints_plain_pipeline() {
    let output = cluegen(&[]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.starts_with("\nsetup_rope:\n"));
    assert!(text.contains("      - echo white > saloon.txt\n"));
    assert_eq!(text.matches("      - cat saloon_again.txt\n").count(), 3);
    assert!(!text.contains("stage:"));
}

#[test]
fn blocks_keep_record_order() {
    let text = stdout(&cluegen(&[]));
    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("setup_")).collect();

    assert_eq!(
        headers,
        vec!["setup_rope:", "setup_chandelier:", "setup_revolver:", "setup_knife:"]
    );
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(cluegen(&[]).stdout, cluegen(&[]).stdout);
}

#[test]
fn staged_variant_marks_every_job() {
    let output = cluegen(&["--variant", "staged"]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert_eq!(text.matches("    stage: build\n").count(), 20);
}

#[test]
fn unknown_variant_is_a_usage_error() {
    let output = cluegen(&["--variant", "nightly"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn records_file_replaces_builtin_records() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"record who="plum" where="study" what="candlestick""#).unwrap();

    let output = cluegen(&["--records", file.path().to_str().unwrap()]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("echo plum > study.txt"));
    assert!(!text.contains("setup_rope:"));
}

#[test]
fn bad_records_file_exits_with_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"record "plum" "study""#).unwrap();

    let output = cluegen(&["--records", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
