//! End-to-end tests for the command-line and interactive paths.
//!
//! These run the built binary with piped stdin and check stdout, stderr,
//! and the exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the hello-add binary with cosmetic output disabled.
#[allow(deprecated)]
fn hello_add() -> Command {
    let mut cmd = Command::cargo_bin("hello-add").expect("Failed to find hello-add binary");
    cmd.env_remove("HELLO_ADD_RETRY_BUDGET")
        .env_remove("HELLO_ADD_CLEAR_SCREEN")
        .env_remove("HELLO_ADD_PAUSE_ON_EXIT")
        .env_remove("HELLO_ADD_COLOR");
    cmd
}

fn quiet(cmd: &mut Command) -> &mut Command {
    cmd.args(["--no-clear", "--no-pause", "--no-color"])
}

#[test]
fn test_cli_operands_print_sum() {
    quiet(&mut hello_add())
        .args(["5", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5+7=12"))
        .stdout(predicate::str::contains("Hello Rust World!"));
}

#[test]
fn test_cli_negative_operands() {
    quiet(&mut hello_add())
        .args(["-5", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-5+3=-2"));
}

#[test]
fn test_malformed_first_operand() {
    quiet(&mut hello_add())
        .args(["x", "7"])
        .write_stdin("3\n4\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CLI entry for a is not valid"))
        .stdout(predicate::str::contains("Enter value").not())
        .stdout(predicate::str::contains("=").not());
}

#[test]
fn test_malformed_second_operand() {
    quiet(&mut hello_add())
        .args(["5", "y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CLI entry for b is not valid"));
}

#[test]
fn test_single_operand_falls_back_to_interactive() {
    quiet(&mut hello_add())
        .arg("100")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1+2=3"));
}

#[test]
fn test_interactive_with_invalid_first_line() {
    quiet(&mut hello_add())
        .write_stdin("abc\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Clearing stream..."))
        .stdout(predicate::str::contains("Got valid a: 3"))
        .stdout(predicate::str::contains("3+4=7"));
}

#[test]
fn test_interactive_exhausts_a() {
    quiet(&mut hello_add())
        .write_stdin("a\nb\nc\nd\n1\n2\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Too many invalid attempts for a"))
        .stdout(predicate::str::contains("Output:").not());
}

#[test]
fn test_interactive_exhausts_b_on_closed_input() {
    quiet(&mut hello_add())
        .write_stdin("1\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Too many invalid attempts for b"));
}

#[test]
fn test_retries_flag_limits_attempts() {
    quiet(&mut hello_add())
        .args(["--retries", "2"])
        .write_stdin("x\ny\n5\n6\n")
        .assert()
        .code(3);
}

#[test]
fn test_zero_retries_is_a_config_error() {
    quiet(&mut hello_add())
        .args(["--retries", "0"])
        .assert()
        .code(5);
}

#[test]
fn test_config_file_sets_retry_budget() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("hello-add.toml");
    fs::write(&config_path, "retry_budget = 1\n").expect("Failed to write config");

    quiet(&mut hello_add())
        .arg("--config")
        .arg(&config_path)
        .write_stdin("x\n5\n6\n")
        .assert()
        .code(3);
}

#[test]
fn test_env_sets_retry_budget() {
    quiet(&mut hello_add())
        .env("HELLO_ADD_RETRY_BUDGET", "1")
        .write_stdin("x\n5\n6\n")
        .assert()
        .code(3);
}

#[test]
fn test_overflow_saturates() {
    quiet(&mut hello_add())
        .args(["2147483647", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2147483647+1=2147483647"))
        .stderr(predicate::str::contains("Integer overflow detected!"));
}

#[test]
fn test_underflow_saturates() {
    quiet(&mut hello_add())
        .args(["-2147483648", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-2147483648+-1=-2147483648"))
        .stderr(predicate::str::contains("Integer overflow detected!"));
}

#[test]
fn test_out_of_range_operand_is_malformed() {
    quiet(&mut hello_add())
        .args(["1", "99999999999"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    hello_add().arg("--bogus").assert().code(64);
}

#[test]
fn test_version_flag() {
    hello_add()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_config() {
    hello_add()
        .arg("--print-config")
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(predicate::str::contains("retry_budget = 4"))
        .stdout(predicate::str::contains("pause_on_exit = false"));
}

#[test]
fn test_banner_clears_screen_by_default() {
    hello_add()
        .args(["--no-color", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[2J"))
        .stdout(predicate::str::contains("1+1=2"));
}

#[test]
fn test_interactive_pause_consumes_line() {
    hello_add()
        .args(["--no-clear", "--no-color"])
        .write_stdin("1\n2\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press ENTER to continue..."));
}

#[test]
fn test_default_log_level_shows_warnings() {
    quiet(&mut hello_add())
        .env_remove("HELLO_ADD_LOG")
        .args(["1", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1+2=3"))
        .stderr(predicate::str::contains("ignoring extra operands"));
}

#[test]
fn test_log_filter_can_silence_warnings() {
    quiet(&mut hello_add())
        .env("HELLO_ADD_LOG", "error")
        .args(["1", "2", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring extra operands").not());
}

#[test]
fn test_error_report_is_colored_when_forced() {
    hello_add()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["--no-clear", "--no-pause", "x", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b[31m"));
}

#[test]
fn test_no_color_flag_disables_error_color() {
    hello_add()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["--no-clear", "--no-pause", "--no-color", "x", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CLI entry for a is not valid"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_no_color_flag_applies_when_config_fails() {
    hello_add()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["--no-color", "--retries", "0"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("\x1b[").not());
}
