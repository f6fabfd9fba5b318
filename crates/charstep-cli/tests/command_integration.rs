//! End-to-end tests for both programs.
//!
//! Stdout is a pipe under test, so output is never coloured and can be
//! compared byte for byte.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RANGE_PROMPT: &str = "Enter a character between A and J: ";
const SELECTOR_PROMPT: &str =
    "Enter the type of input (c for character, i for integer, f for float): ";

/// Runs a binary from an empty directory, with home and XDG config pointing
/// there too, so neither project nor user config is picked up.
fn cmd(bin: &str) -> (Command, TempDir) {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("RUST_LOG");
    (cmd, temp)
}

// ============================================================================
// Range Printer
// ============================================================================

#[test]
fn range_printer_prints_next_six_uppercased() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.write_stdin("b\n")
        .assert()
        .success()
        .stdout(format!(
            "{RANGE_PROMPT}The next 6 characters are: C D E F G H \n"
        ));
}

#[test]
fn range_printer_accepts_upper_bound() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.write_stdin("J\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("K L M N O P \n"));
}

#[test]
fn range_printer_rejects_out_of_range_and_exits_cleanly() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.write_stdin("z\n")
        .assert()
        .success()
        .stdout(format!(
            "{RANGE_PROMPT}Invalid input! Please enter a character between A and J.\n"
        ));
}

#[test]
fn range_printer_without_input_fails() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn range_printer_reads_project_config() {
    let (mut cmd, temp) = cmd("range-printer");
    fs::write(
        temp.path().join("charstep.toml"),
        "[range]\nlower = \"0\"\nupper = \"4\"\ncount = 3\n",
    )
    .unwrap();

    cmd.write_stdin("2\n")
        .assert()
        .success()
        .stdout("Enter a character between 0 and 4: The next 3 characters are: 3 4 5 \n");
}

#[test]
fn range_printer_env_overrides_count() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.env("CHARSTEP_RANGE__COUNT", "2")
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout(format!("{RANGE_PROMPT}The next 2 characters are: B C \n"));
}

#[test]
fn range_printer_env_accepts_digit_bounds() {
    let (mut cmd, _temp) = cmd("range-printer");
    cmd.env("CHARSTEP_RANGE__LOWER", "0")
        .env("CHARSTEP_RANGE__UPPER", "4")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("Enter a character between 0 and 4: The next 6 characters are: 3 4 5 6 7 8 \n")
        .stderr(predicate::str::contains("unable to load config").not());
}

#[test]
fn oversized_echo_count_falls_back_to_defaults() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.env("CHARSTEP_ECHO__COUNT", "4000000000")
        .write_stdin("f 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00 7.00 10.00 13.00 \n"))
        .stderr(predicate::str::contains("echo.count must be between 1 and 64"));
}

#[test]
fn user_config_is_read_from_xdg_config_home() {
    let (mut cmd, temp) = cmd("range-printer");
    let user_dir = temp.path().join(".config").join("charstep");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "[range]\ncount = 1\n").unwrap();

    cmd.write_stdin("a\n")
        .assert()
        .success()
        .stdout(format!("{RANGE_PROMPT}The next 1 characters are: B \n"));
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let (mut cmd, temp) = cmd("range-printer");
    fs::write(
        temp.path().join("charstep.toml"),
        "[range]\nlower = \"Z\"\nupper = \"A\"\n",
    )
    .unwrap();

    cmd.write_stdin("b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("C D E F G H"))
        .stderr(predicate::str::contains("unable to load config"));
}

// ============================================================================
// Echo Calculator
// ============================================================================

#[test]
fn echo_character() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("c\na\n")
        .assert()
        .success()
        .stdout(format!(
            "{SELECTOR_PROMPT}Enter a character: The next 4 characters are: b c d e \n\
             Code point: 97\n\
             Size of character: 4 bytes\n"
        ));
}

#[test]
fn echo_integer() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("i\n5\n")
        .assert()
        .success()
        .stdout(format!(
            "{SELECTOR_PROMPT}Enter an integer: The next 4 integers (in multiples of 3) are: 8 11 14 17 \n\
             Size of integer: 4 bytes\n"
        ));
}

#[test]
fn echo_float() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("f\n1.5\n")
        .assert()
        .success()
        .stdout(format!(
            "{SELECTOR_PROMPT}Enter a float: The next 4 floats in multiples of 3 are: 4.50 7.50 10.50 13.50 \n\
             Size of float: 4 bytes\n"
        ));
}

#[test]
fn echo_selector_and_value_on_one_line() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("i -2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 4 7 10 "));
}

#[test]
fn echo_invalid_selector_prints_only_message() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("x\n")
        .assert()
        .success()
        .stdout(format!(
            "{SELECTOR_PROMPT}Invalid input type! Please enter 'c', 'i', or 'f'.\n"
        ));
}

#[test]
fn echo_malformed_integer_fails() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("i\nfive\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected an integer, found \"five\""));
}

#[test]
fn echo_integer_overflow_fails() {
    let (mut cmd, _temp) = cmd("echo-calc");
    cmd.write_stdin("i\n2147483647\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not fit in a 32-bit integer"));
}

#[test]
fn echo_reads_project_config() {
    let (mut cmd, temp) = cmd("echo-calc");
    fs::write(
        temp.path().join("charstep.toml"),
        "[echo]\ncount = 2\nstride = 10\nprecision = 1\n",
    )
    .unwrap();

    cmd.write_stdin("f 0.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The next 2 floats in multiples of 10 are: 10.5 20.5 \n",
        ));
}
