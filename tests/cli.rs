use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_identity-password"))
        .args(args)
        .env("PASSWORD_HASH_MEMORY_KIB", "64")
        .env("PASSWORD_HASH_ITERATIONS", "1")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Usage errors exit before reading stdin; a broken pipe is fine then.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn hash(password_line: &str) -> String {
    let output = run(&["hash"], password_line);
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

#[test]
fn hash_prints_stored_string() {
    let stored = hash("hunter2\n");
    let (salt, digest) = stored.split_once('$').unwrap();
    assert_eq!(salt.len(), 24);
    assert_eq!(digest.len(), 44);
}

#[test]
fn verify_exit_codes() {
    let stored = hash("hunter2\n");
    assert_eq!(run(&["verify", &stored], "hunter2\n").status.code(), Some(0));
    assert_eq!(run(&["verify", &stored], "hunter3\n").status.code(), Some(1));
    assert_eq!(run(&["verify", "garbage"], "hunter2\n").status.code(), Some(2));
}

#[test]
fn crlf_line_ending_is_stripped() {
    let stored = hash("hunter2\r\n");
    assert_eq!(run(&["verify", &stored], "hunter2").status.code(), Some(0));
}

#[test]
fn usage_errors() {
    assert_eq!(run(&[], "").status.code(), Some(2));
    assert_eq!(run(&["verify"], "").status.code(), Some(2));
    assert_eq!(run(&["rehash"], "").status.code(), Some(2));
    let output = run(&["hash", "extra"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}
