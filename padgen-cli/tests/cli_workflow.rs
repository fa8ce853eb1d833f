#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn padgen() -> Command {
    Command::cargo_bin("padgen").expect("Failed to find padgen binary")
}

#[test]
fn test_seeded_lowercase_pad() {
    padgen()
        .arg("--seed").arg("test")
        .arg("--count").arg("1")
        .assert()
        .success()
        .stdout("1) vssa-suwn\n");
}

#[test]
fn test_seeded_numeric_pad_without_separators() {
    padgen()
        .arg("--seed").arg("k")
        .arg("--mode").arg("numeric")
        .arg("--length").arg("6")
        .arg("--separator").arg("0")
        .arg("--count").arg("3")
        .assert()
        .success()
        .stdout("1) 839460  2) 294340  3) 873691\n");
}

#[test]
fn test_english_uppercase_pad() {
    padgen()
        .args(["-r", "test", "-m", "english-upper", "-n", "2"])
        .assert()
        .success()
        .stdout("1) WINT-OYTH  2) OTHA-LENO\n");
}

#[test]
fn test_default_run_uses_system_entropy() {
    let output = padgen().output().expect("Failed to run padgen");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");

    // 50 entries of 16 columns, four to a 79-column line.
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with(" 1) "));
    assert!(lines[12].contains("50) "));

    let second = padgen().output().expect("Failed to run padgen");
    assert_ne!(stdout.as_bytes(), &second.stdout[..]);
}

#[test]
fn test_narrow_width_prints_one_entry_per_line() {
    padgen()
        .args(["--seed", "test", "--count", "3", "--width", "0"])
        .assert()
        .success()
        .stdout("1) vssa-suwn\n2) hkeb-bxup\n3) ngxo-yscj\n");
}

#[test]
fn test_output_and_signature_files() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("pad.txt");
    let sig_path = temp_dir.path().join("pad.sig");

    padgen()
        .args(["--seed", "test", "--count", "3", "--signatures"])
        .arg(&sig_path)
        .arg(&pad_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let pad = fs::read_to_string(&pad_path).expect("Failed to read pad file");
    assert_eq!(pad, "1) vssa-suwn  2) hkeb-bxup  3) ngxo-yscj\n");

    let signatures = fs::read_to_string(&sig_path).expect("Failed to read signature file");
    let lines: Vec<&str> = signatures.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "9614A0FD53E0F07B946ACAA90B11DC1C72692471CD9A6702AF96D7493E726092"
    );
    assert!(lines.iter().all(|l| l.len() == 64));
}

#[test]
fn test_invalid_count_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("pad.txt");

    padgen()
        .args(["--seed", "test", "--count", "0"])
        .arg(&pad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("item count must be at least 1"));
    assert!(!pad_path.exists());

    padgen()
        .args(["--length", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unwritable_signature_file_leaves_no_pad() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("pad.txt");
    let sig_path = temp_dir.path().join("missing").join("pad.sig");

    padgen()
        .args(["--seed", "test", "--count", "3", "--signatures"])
        .arg(&sig_path)
        .arg(&pad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create signature file"));
    assert!(!pad_path.exists());
    assert!(!sig_path.exists());
}

#[test]
fn test_unwritable_output_file_leaves_no_signatures() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("missing").join("pad.txt");
    let sig_path = temp_dir.path().join("pad.sig");

    padgen()
        .args(["--seed", "test", "--count", "3", "--signatures"])
        .arg(&sig_path)
        .arg(&pad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output file"));
    assert!(!sig_path.exists());
}

#[test]
fn test_json_output_hides_seed() {
    let output = padgen()
        .args(["--seed", "test", "--count", "2", "--format", "json", "--signatures"])
        .arg(tempdir().expect("Failed to create temp dir").path().join("sig"))
        .output()
        .expect("Failed to run padgen");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
    assert!(!stdout.contains("\"test\""));
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(json["config"]["count"], 2);
    assert_eq!(json["items"][0]["line"], 1);
    assert_eq!(json["items"][0]["text"], "vssa-suwn");
    assert_eq!(
        json["items"][0]["signature"],
        "9614A0FD53E0F07B946ACAA90B11DC1C72692471CD9A6702AF96D7493E726092"
    );
}

#[test]
fn test_config_file_with_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("padgen.json");
    fs::write(
        &config_path,
        r#"{"mode": "numeric", "length": 6, "separator": 0, "count": 5, "seed": "k"}"#,
    )
    .expect("Failed to write config file");

    padgen()
        .arg("--config").arg(&config_path)
        .arg("--count").arg("3")
        .assert()
        .success()
        .stdout("1) 839460  2) 294340  3) 873691\n");

    fs::write(&config_path, "{ not json").expect("Failed to write config file");
    padgen()
        .arg("--config").arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_rng_test_dump() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dump_path = temp_dir.path().join("rtest.bin");

    padgen()
        .args(["--seed", "rng", "--rng-test"])
        .arg(&dump_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bytes = fs::read(&dump_path).expect("Failed to read dump");
    assert_eq!(bytes.len(), 64 * 1024);
    assert_eq!(bytes[..8], [0x55, 0x7f, 0x31, 0x68, 0xa3, 0x30, 0x23, 0xda]);
}
