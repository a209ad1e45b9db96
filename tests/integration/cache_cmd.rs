use crate::common::TestProject;
use predicates::prelude::*;

#[test]
fn test_cache_status_reports_each_id() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    std::fs::write(project.cache_dir().join("Y.data"), "B\nU\n2019\n\n\noriginal\nexample.com/b")
        .unwrap();
    let ids = project.write_ids("X:original:a\nY:original:b\nZ:original:c\n");

    project
        .mrg()
        .args(["cache", "status"])
        .arg(&ids)
        .assert()
        .success()
        .stdout(predicate::str::contains("X"))
        .stdout(predicate::str::contains("Z"))
        .stdout(predicate::str::contains("1/3 releases fully cached"));
}

#[test]
fn test_cache_status_flags_incomplete_metadata() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    std::fs::write(project.cache_dir().join("X.data"), "A\nT\n").unwrap();
    let ids = project.write_ids("X:original:a\n");

    project
        .mrg()
        .args(["cache", "status"])
        .arg(&ids)
        .assert()
        .success()
        .stdout(predicate::str::contains("incomplete metadata"))
        .stdout(predicate::str::contains("0/1 releases fully cached"));
}

#[test]
fn test_cache_clean_removes_listed_ids_only() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    project.seed_release("Keep", "A", "T", "2020", "", "original", "example.com/k");
    let ids = project.write_ids("X:original:a\nMissing:original:m\n");

    project
        .mrg()
        .args(["cache", "clean"])
        .arg(&ids)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 cached files for 2 releases"));

    assert!(!project.cache_dir().join("X.data").exists());
    assert!(!project.cache_dir().join("X").exists());
    assert!(project.cache_dir().join("Keep.data").exists());
    assert!(project.cache_dir().join("Keep").exists());
}

#[test]
fn test_cache_dir_from_environment() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:a\n");

    let mut cmd = assert_cmd::Command::cargo_bin("mrg").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("MRG_CACHE_DIR", project.cache_dir())
        .arg("--config")
        .arg(project.config_path())
        .args(["cache", "status"])
        .arg(&ids)
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 releases fully cached"));
}
