//! End-to-end tests for the invc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn invc() -> Command {
    Command::cargo_bin("invc").unwrap()
}

#[test]
fn new_prints_portable_document() {
    invc()
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice-creator-v1"))
        .stdout(predicate::str::contains("INV-001"));
}

#[test]
fn new_sample_fills_company_fields() {
    invc()
        .args(["new", "--sample", "freelancer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe Design"))
        .stdout(predicate::str::contains("INV-2026-001"));
}

#[test]
fn new_lists_samples() {
    invc()
        .args(["new", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freelancer"))
        .stdout(predicate::str::contains("consulting"));
}

#[test]
fn new_rejects_unknown_sample() {
    invc()
        .args(["new", "--sample", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sample"));
}

#[test]
fn import_round_trips_portable_json() {
    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");

    invc()
        .args(["new", "--sample", "agency", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .arg("import")
        .arg(&draft)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice_number"))
        .stdout(predicate::str::contains("NCA-2026-0042"));

    invc()
        .arg("import")
        .arg(&draft)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tax (8.25%): $4,752.00"))
        .stdout(predicate::str::contains("Discount (5%): -$2,880.00"))
        .stdout(predicate::str::contains("Total: $59,472.00"));
}

#[test]
fn import_rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    invc()
        .arg("import")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Supported formats: .json or .pdf"));
}

#[test]
fn preset_save_load_delete_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("presets.json");
    let draft = dir.path().join("draft.json");

    invc()
        .args(["new", "--sample", "saas", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .args(["preset", "save", "myco1"])
        .arg(&draft)
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved preset MYCO1"));

    invc()
        .args(["preset", "list", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("MYCO1"));

    invc()
        .args(["preset", "load", "MYCO1", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice-creator-v1"))
        .stdout(predicate::str::contains("CloudStack Software"));

    invc()
        .args(["preset", "delete", "MYCO1", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted preset MYCO1"));

    invc()
        .args(["preset", "list", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets stored"));
}

#[test]
fn preset_rejects_short_code() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("presets.json");
    let draft = dir.path().join("draft.json");

    invc()
        .args(["new", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .args(["preset", "save", "AB"])
        .arg(&draft)
        .arg("--store")
        .arg(&store)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid preset code"));
}

#[test]
fn preset_load_unknown_code_lists_available() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("presets.json");
    let draft = dir.path().join("draft.json");

    invc()
        .args(["new", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .args(["preset", "save", "acme1"])
        .arg(&draft)
        .arg("--store")
        .arg(&store)
        .assert()
        .success();

    invc()
        .args(["preset", "load", "ZED99", "--store"])
        .arg(&store)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no preset found for code"))
        .stderr(predicate::str::contains("ACME1"));
}

#[test]
fn themes_list_and_show() {
    invc()
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("modern-brutalist"))
        .stdout(predicate::str::contains("Midnight Pro"));

    invc()
        .args(["themes", "show", "midnight-pro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"midnight-pro\""));

    invc()
        .args(["themes", "show", "not-a-theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing the default"))
        .stdout(predicate::str::contains("\"id\": \"modern-brutalist\""));
}

#[test]
fn render_derives_file_name_from_invoice_number() {
    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");

    invc()
        .args(["new", "--sample", "freelancer", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .current_dir(dir.path())
        .arg("render")
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-2026-001.txt"));

    let rendered = std::fs::read_to_string(dir.path().join("INV-2026-001.txt")).unwrap();
    assert!(rendered.contains("Invoice: INV-2026-001"));
    assert!(rendered.contains("Total: $8,860.00"));
}

#[test]
fn render_honors_output_and_theme_flags() {
    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");
    let out = dir.path().join("artifact.txt");

    invc()
        .args(["new", "--output"])
        .arg(&draft)
        .assert()
        .success();

    invc()
        .arg("render")
        .arg(&draft)
        .args(["--theme", "no-such-theme", "--output"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn config_show_and_path_work_without_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    invc()
        .args(["config", "show", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file found"))
        .stdout(predicate::str::contains("\"currency\": \"USD\""));

    invc()
        .args(["config", "path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn config_init_set_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    invc()
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    invc()
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    invc()
        .args(["config", "set", "render.theme", "midnight-pro", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set render.theme"));

    invc()
        .args(["config", "get", "render.theme", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("midnight-pro"));

    invc()
        .args(["config", "get", "render.nope", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn batch_reports_failures_with_continue_on_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();
    let out_dir = dir.path().join("out");
    let pattern = format!("{}/*.pdf", dir.path().display());

    invc()
        .args(["batch", &pattern, "--continue-on-error", "--summary", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 successful"))
        .stdout(predicate::str::contains("1 failed"));

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("broken.pdf"));
    assert!(summary.contains("error"));
}
