// End-to-end checks against the built binary

use std::io::Read;
use std::process::{Command, Output, Stdio};

fn run_sieve(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sieve"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run sieve binary")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is not utf8")
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).expect("stderr is not utf8")
}

fn usage_text() -> String {
    format!(
        "Usage: {} [upto]\n\nUpto must be between two and one billion.\n",
        env!("CARGO_BIN_EXE_sieve")
    )
}

fn assert_usage_failure(args: &[&str]) {
    let output = run_sieve(args);
    assert!(!output.status.success(), "{:?} should fail", args);
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255), "{:?}", args);
    assert_eq!(stdout(&output), "", "{:?}", args);
    assert_eq!(stderr(&output), usage_text(), "{:?}", args);
}

#[test]
fn test_primes_up_to_thirty() {
    let output = run_sieve(&["30"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3 5 7 11 13 17 19 23 29 \n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_smallest_bounds() {
    assert_eq!(stdout(&run_sieve(&["2"])), "2 \n");
    assert_eq!(stdout(&run_sieve(&["3"])), "2 3 \n");
    assert_eq!(stdout(&run_sieve(&["10"])), "2 3 5 7 \n");
}

#[test]
fn test_prime_count_for_ten_thousand() {
    let output = run_sieve(&["10000"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.ends_with("9973 \n"));
    assert_eq!(text.split_whitespace().count(), 1229);
}

#[test]
fn test_wrong_argument_count() {
    assert_usage_failure(&[]);
    assert_usage_failure(&["10", "20"]);
}

#[test]
fn test_not_a_number() {
    assert_usage_failure(&["abc"]);
    assert_usage_failure(&["12abc"]);
    assert_usage_failure(&[""]);
    assert_usage_failure(&["+30"]);
}

#[test]
fn test_out_of_range() {
    assert_usage_failure(&["99999999999999999999"]);
    assert_usage_failure(&["1"]);
    assert_usage_failure(&["0"]);
    assert_usage_failure(&["-7"]);
    assert_usage_failure(&["1000000001"]);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    assert_usage_failure(&["--fast", "30"]);
}

#[test]
fn test_help_and_version_are_usage_errors() {
    for flag in ["--help", "-h", "--version", "-V"] {
        assert_usage_failure(&[flag]);
    }
}

#[test]
fn test_verify_refuses_huge_bound() {
    let output = run_sieve(&["--verify", "1000000000"]);
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(252));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "Unknown exception: verification is limited to bounds up to 10000000.  Aborting...\n"
    );
}

#[test]
fn test_reader_closing_early_is_not_an_error() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sieve"))
        .arg("1000000")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run sieve binary");

    let mut head = [0u8; 10];
    child
        .stdout
        .take()
        .expect("no stdout")
        .read_exact(&mut head)
        .expect("failed to read stdout");
    assert_eq!(&head, b"2 3 5 7 11");

    let output = child.wait_with_output().expect("failed to wait for sieve");
    assert!(output.status.success());
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_verify_mode() {
    let output = run_sieve(&["--verify", "1000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "GOOD: 168 primes up to 1000\n");
}

#[test]
fn test_profile_goes_to_stderr() {
    let output = run_sieve(&["--profile", "100"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).split_whitespace().count(), 25);

    let err = stderr(&output);
    assert!(err.starts_with("PROFILE RESULTS:\n"));
    for tag in ["resolve", "build", "sieve", "emit"] {
        assert!(err.contains(tag), "missing {} in {:?}", tag, err);
    }
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run_sieve(&["-v", "30"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3 5 7 11 13 17 19 23 29 \n");
    assert!(stderr(&output).contains("sieve finished"));
}
