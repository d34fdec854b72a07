use std::io::Write;
use std::process::{Command, Output, Stdio};

fn passgauge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passgauge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run passgauge")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_requested_passwords() {
    let output = passgauge(&["-l", "24", "-n", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 24);
        assert!(line.chars().any(|c| c.is_ascii_uppercase()));
        assert!(line.chars().any(|c| c.is_ascii_lowercase()));
        assert!(line.chars().any(|c| c.is_ascii_digit()));
        assert!(line.chars().any(|c| !c.is_ascii_alphanumeric()));
    }
}

#[test]
fn seed_reproduces_output() {
    let a = passgauge(&["-n", "2", "--seed", "1234"]);
    let b = passgauge(&["-n", "2", "--seed", "1234"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn only_numbers() {
    let output = passgauge(&["--only", "numbers", "-l", "40"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.trim_end().len(), 40);
    assert!(text.trim_end().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn no_categories_is_an_error() {
    let output = passgauge(&[
        "--no-uppercase",
        "--no-lowercase",
        "--no-numbers",
        "--no-symbols",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Please select at least one character type."));
}

#[test]
fn short_length_truncates_unless_strict() {
    let output = passgauge(&["-l", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end().len(), 2);

    let output = passgauge(&["-l", "2", "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn check_scores_an_argument() {
    let output = passgauge(&["--check", "abcde"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10 Weak\n");
}

#[test]
fn check_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_passgauge"))
        .args(["-c", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Abcdefgh1!ijklmnopqr\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "100 Strong\n");
}

#[test]
fn strength_report_follows_each_password() {
    let output = passgauge(&["-l", "20", "-n", "2", "-S"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("100 Strong ("));
    assert!(lines[3].starts_with("100 Strong ("));
}

#[test]
fn unknown_argument_exits_with_usage_error() {
    let output = passgauge(&["--hex"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown argument: --hex"));
}

#[test]
fn version_and_help() {
    let output = passgauge(&["--version"]);
    assert_eq!(
        stdout(&output).trim(),
        format!("passgauge {}", env!("CARGO_PKG_VERSION"))
    );

    let output = passgauge(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("USAGE:"));
}

#[test]
fn saved_settings_are_reused() {
    let home = tempfile::tempdir().unwrap();
    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_passgauge"))
            .args(args)
            .env("HOME", home.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    };

    let output = run(&["--only", "lowercase", "-l", "30", "--save", "-q"]);
    assert!(output.status.success());
    assert!(home.path().join(".config/passgauge/settings").exists());

    let output = run(&["-s"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.trim_end().len(), 30);
    assert!(text.trim_end().chars().all(|c| c.is_ascii_lowercase()));
}
