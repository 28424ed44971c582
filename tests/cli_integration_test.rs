use assert_cmd::Command;
use std::path::Path;

fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("corpus.txt"), "ATGXXTAA\nATGXXXXTAA\nGGGCCC\n").unwrap();
    std::fs::write(dir.join("tags.txt"), "ATG,TAA\nGGG,CCC\n").unwrap();
}

fn seqdist() -> Command {
    Command::cargo_bin("seqdist").unwrap()
}

#[test]
fn test_analyze_writes_sorted_averages() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = seqdist()
        .current_dir(dir.path())
        .args(["analyze", "corpus.txt", "--tags", "tags.txt", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "ATG...TAA\t3.0\nGGG...CCC\t0.0\n"
    );
}

#[test]
fn test_analyze_json_format() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = seqdist()
        .current_dir(dir.path())
        .args([
            "analyze",
            "corpus.txt",
            "--tags",
            "tags.txt",
            "--quiet",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["key"], "ATG...TAA");
    assert_eq!(rows[0]["average"], 3.0);
}

#[test]
fn test_malformed_tag_file_exits_nonzero_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("corpus.txt"), "ATGXXTAA\n").unwrap();
    std::fs::write(dir.path().join("tags.txt"), "ATG,TAA\nGGGCCC\n").unwrap();

    let output = seqdist()
        .current_dir(dir.path())
        .args(["analyze", "corpus.txt", "--tags", "tags.txt", "--quiet"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("tags.txt"), "stderr was: {stderr}");
    assert!(stderr.contains("line 2"), "stderr was: {stderr}");
}

#[test]
fn test_stage_chain_matches_analyze() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    seqdist()
        .current_dir(dir.path())
        .args([
            "map",
            "corpus.txt",
            "--tags",
            "tags.txt",
            "--output",
            "part.bin",
        ])
        .assert()
        .success();

    seqdist()
        .current_dir(dir.path())
        .args(["combine", "part.bin", "--output", "combined.bin"])
        .assert()
        .success();

    let reduced = seqdist()
        .current_dir(dir.path())
        .args(["reduce", "combined.bin"])
        .output()
        .unwrap();
    assert!(reduced.status.success());

    let analyzed = seqdist()
        .current_dir(dir.path())
        .args(["analyze", "corpus.txt", "--tags", "tags.txt", "--quiet"])
        .output()
        .unwrap();
    assert!(analyzed.status.success());

    assert_eq!(reduced.stdout, analyzed.stdout);
}

#[test]
fn test_validate_lists_pairs() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = seqdist()
        .current_dir(dir.path())
        .args(["validate", "--tags", "tags.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2 tag pairs"), "stdout was: {stdout}");
    assert!(stdout.contains("ATG...TAA"), "stdout was: {stdout}");
    assert!(stdout.contains("GGG...CCC"), "stdout was: {stdout}");
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();

    seqdist()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".seqdist.toml").exists());

    seqdist()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    seqdist()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
