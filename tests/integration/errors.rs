use crate::common::{TEMPLATE, TestProject};
use predicates::prelude::*;

#[test]
fn test_malformed_line_aborts_without_output() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\nabc:remix\n");
    let template = project.write_template(TEMPLATE);

    project
        .mrg()
        .arg("gen")
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ID line 2 is malformed: 'abc:remix'"))
        .stderr(predicate::str::contains("suggestion"));

    assert!(!project.path("music.html").exists());
}

#[test]
fn test_cache_clean_rejects_path_in_identifier() {
    let project = TestProject::new();
    std::fs::write(project.path("index.html"), "live page").unwrap();
    let ids = project.write_ids("../index.html:original:x\n");

    project
        .mrg()
        .args(["cache", "clean"])
        .arg(&ids)
        .assert()
        .failure()
        .stderr(predicate::str::contains("identifier contains '/'"));

    assert_eq!(project.read("index.html"), "live page");
}

#[test]
fn test_missing_id_file() {
    let project = TestProject::new();

    project
        .mrg()
        .arg("cv")
        .arg(project.path("nope.txt"))
        .arg(project.path("cv.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open ID file"));

    assert!(!project.path("cv.html").exists());
}

#[test]
fn test_missing_template_file() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");

    project
        .mrg()
        .arg("gen")
        .arg(&ids)
        .arg(project.path("missing.html"))
        .arg(project.path("music.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open template file"));
}

#[test]
fn test_unwritable_output() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");
    // A non-empty directory cannot be replaced by the output file.
    let output = project.path("taken");
    std::fs::create_dir(&output).unwrap();
    std::fs::write(output.join("index.html"), "x").unwrap();

    project
        .mrg()
        .arg("cv")
        .arg(&ids)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open output file"));
}

#[test]
fn test_uncached_release_with_unreachable_catalog() {
    let project = TestProject::new();
    let ids = project.write_ids("X:original:example.com/a\n");
    std::fs::write(project.path("cv.html"), "previous").unwrap();

    project
        .mrg()
        .arg("cv")
        .arg(&ids)
        .arg(project.path("cv.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error fetching metadata for X"));

    assert_eq!(project.read("cv.html"), "previous");
}

#[test]
fn test_invalid_config_file() {
    let project = TestProject::new();
    std::fs::write(project.config_path(), "musicbrainz_url = [").unwrap();
    let ids = project.write_ids("");

    project
        .mrg()
        .arg("cv")
        .arg(&ids)
        .arg(project.path("cv.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_version_flag() {
    assert_cmd::Command::cargo_bin("mrg")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
