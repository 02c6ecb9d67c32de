//! CLI integration tests for d64
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn d64() -> Command {
    let mut cmd = Command::cargo_bin("d64").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    d64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort-order-preserving"))
        .stdout(predicate::str::contains("encode-int"));
}

#[test]
fn test_version() {
    d64()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("d64"));
}

#[test]
fn test_missing_subcommand_fails() {
    d64().assert().failure();
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_encode_int_timestamps() {
    d64()
        .args(["encode-int", "-w", "6", "946684800", "1464739200", "1956528000"])
        .assert()
        .success()
        .stdout(".sQJD.\n0MIXL.\n0obYy.\n");
}

#[test]
fn test_encode_int_default_width() {
    d64()
        .args(["encode-int", "0", "64"])
        .assert()
        .success()
        .stdout(".\n0.\n");
}

#[test]
fn test_encode_int_align() {
    d64()
        .args(["encode-int", "--align", "1", "63", "4096"])
        .assert()
        .success()
        .stdout("..0\n..z\n0..\n");
}

#[test]
fn test_encode_int_rejects_negative() {
    d64().args(["encode-int", "--", "-1"]).assert().failure();
}

#[test]
fn test_decode_int() {
    d64()
        .args(["decode-int", "...0", "Ezzzzzzzzzz", ""])
        .assert()
        .success()
        .stdout("1\n18446744073709551615\n0\n");
}

#[test]
fn test_decode_int_invalid_digit() {
    d64()
        .args(["decode-int", "..4h", "ab cd"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid d64 digit 0x20"))
        .stderr(predicate::str::contains("at position 2"))
        .stderr(predicate::str::contains("hint: valid digits"));
}

#[test]
fn test_encode_int_oversized_width_is_an_error() {
    d64()
        .args(["encode-int", "-w", "18446744073709551615", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid --width"))
        .stderr(predicate::str::contains("exceeds maximum of 64"))
        .stderr(predicate::str::contains("panicked").not());

    d64()
        .args(["encode-int", "-w", "64", "1"])
        .assert()
        .success()
        .stdout(format!("{}0\n", ".".repeat(63)));
}

#[test]
fn test_decode_int_no_color_flag() {
    let mut cmd = Command::cargo_bin("d64").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .args(["--no-color", "decode-int", "ab cd"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: invalid d64 digit 0x20"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_width() {
    d64()
        .args(["width", "4096"])
        .assert()
        .success()
        .stdout("3\n");
}

// ============================================================================
// Byte blobs
// ============================================================================

#[test]
fn test_encode_stdin() {
    d64()
        .arg("encode")
        .write_stdin("abcde")
        .assert()
        .success()
        .stdout("NL8YO5J\n");
}

#[test]
fn test_decode_stdin_trims_whitespace() {
    d64()
        .arg("decode")
        .write_stdin("  NL8YO5J\n")
        .assert()
        .success()
        .stdout("abcde");
}

#[test]
fn test_decode_invalid_input() {
    d64()
        .arg("decode")
        .write_stdin("NL8Y=")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid d64 digit 0x3d"));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let encoded = dir.path().join("encoded.txt");
    let decoded = dir.path().join("decoded.bin");

    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    std::fs::write(&input, &data).unwrap();

    d64()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success();

    let text = std::fs::read(&encoded).unwrap();
    assert_eq!(text.len(), d64::encoded_len(data.len()));

    d64()
        .arg("decode")
        .arg(&encoded)
        .arg("-o")
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(std::fs::read(&decoded).unwrap(), data);
}

#[test]
fn test_max_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    std::fs::write(&input, vec![7u8; 64]).unwrap();

    d64()
        .args(["--max-size", "16", "encode"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    d64()
        .args(["--max-size", "16", "--force", "encode"])
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn test_max_size_limits_stdin() {
    d64()
        .args(["--max-size", "16", "encode"])
        .write_stdin(vec![7u8; 64])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum (16 bytes)"));

    d64()
        .args(["--max-size", "16", "encode"])
        .write_stdin(vec![0u8; 16])
        .assert()
        .success()
        .stdout(format!("{}\n", ".".repeat(d64::encoded_len(16))));
}

// ============================================================================
// Alphabet
// ============================================================================

#[test]
fn test_alphabet() {
    d64()
        .arg("alphabet")
        .assert()
        .success()
        .stdout(format!("{}\n", d64::ALPHABET));
}

#[test]
fn test_alphabet_table() {
    d64()
        .args(["alphabet", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 0 .\n 1 0\n"))
        .stdout(predicate::str::contains("37 _\n"))
        .stdout(predicate::str::ends_with("63 z\n"));
}

#[test]
fn test_alphabet_json() {
    let output = d64().args(["alphabet", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["alphabet"], d64::ALPHABET);
    assert_eq!(json["base"], 64);
    assert_eq!(json["digits"][63]["digit"], "z");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_width_and_newline() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("d64.toml");
    std::fs::write(&config, "[uint]\nwidth = 4\n[output]\nnewline = false\n").unwrap();

    d64()
        .arg("--config")
        .arg(&config)
        .args(["encode-int", "1"])
        .assert()
        .success()
        .stdout("...0");
}

#[test]
fn test_config_trim_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("d64.toml");
    std::fs::write(&config, "[bytes]\ntrim_input = false\n").unwrap();

    d64()
        .arg("--config")
        .arg(&config)
        .arg("decode")
        .write_stdin("BI7n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("0x0a"));
}

#[test]
fn test_bad_config_file_is_fatal_when_explicit() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("d64.toml");
    std::fs::write(&config, "[uint]\nwidth = \"wide\"\n").unwrap();

    d64()
        .arg("--config")
        .arg(&config)
        .args(["encode-int", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load config"));
}

#[test]
fn test_unreadable_override_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("d64.toml"), "not = [valid").unwrap();

    d64()
        .current_dir(dir.path())
        .args(["encode-int", "5"])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("skipping unreadable config"));
}

#[test]
fn test_config_oversized_width_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("d64.toml");
    std::fs::write(&config, "[uint]\nwidth = 100000000000\n").unwrap();

    d64()
        .arg("--config")
        .arg(&config)
        .args(["encode-int", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeds maximum of 64"));
}
