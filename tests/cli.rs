use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the built binary with `input` piped to stdin.
fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_credprompt"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn credprompt");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for credprompt")
}

#[test]
fn piped_credentials_are_printed_as_exports() {
    let out = run_with_stdin("AKIAEXAMPLE\nsecretEXAMPLE\n");

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Command-line input received:\n  \
         export AWS_ACCESS_KEY_ID: AKIAEXAMPLE\n  \
         export AWS_ACCESS_SECRET_KEY: secretEXAMPLE\n"
    );
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "accessKeyId: accessSecretKey: "
    );
}

#[test]
fn closed_stdin_exits_with_status_one() {
    let out = run_with_stdin("");

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Error [Prompt]:"), "stdout: {stdout:?}");
    assert!(!stdout.contains("Command-line input received:"));
    assert!(!stdout.contains("export AWS_"));
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "accessKeyId: ",
        "the failure is reported once, on stdout"
    );
}

#[test]
fn secret_missing_exits_with_status_one() {
    let out = run_with_stdin("AKIAEXAMPLE\n");

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("accessSecretKey"));
    assert!(!stdout.contains("export AWS_"));
}
