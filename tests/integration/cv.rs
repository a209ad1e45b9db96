use crate::common::TestProject;
use predicates::prelude::*;

#[test]
fn test_cv_groups_adjacent_years() {
    let project = TestProject::new();
    project.seed_release("X", "A", "First", "2020-05-01", "", "original", "example.com/a");
    project.seed_release("Y", "A", "Second", "2020-01", "LBL", "remix", "example.com/b");
    project.seed_release("Z", "B", "Third", "2019", "", "original", "example.com/c");
    let ids = project.write_ids(
        "X:original:example.com/a\nY:remix:example.com/b\nZ:original:example.com/c\n",
    );

    project
        .mrg()
        .arg("cv")
        .arg(&ids)
        .arg(project.path("cv.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 releases"));

    let expected = concat!(
        r#"<div class="section" id="music"><h2 class="sectionheader">MUSIC</h2>"#,
        r#"<p class="anitemnewdate genericitem"><span class="prefix bold">2020</span><span class="bibitem"><a href="https://example.com/a">A - First</a></span></p>"#,
        r#"<p class="anitem genericitem"><span class="prefix bold">&nbsp;</span><span class="bibitem"><a href="https://example.com/b">A - Second (remix) (LBL)</a></span></p>"#,
        r#"<p class="anitemnewdate genericitem"><span class="prefix bold">2019</span><span class="bibitem"><a href="https://example.com/c">B - Third</a></span></p>"#,
        "</div>"
    );
    assert_eq!(project.read("cv.html"), expected);
}

#[test]
fn test_cv_with_no_releases() {
    let project = TestProject::new();
    let ids = project.write_ids("\n");

    project.mrg().arg("cv").arg(&ids).arg(project.path("cv.html")).assert().success();

    assert_eq!(
        project.read("cv.html"),
        r#"<div class="section" id="music"><h2 class="sectionheader">MUSIC</h2></div>"#
    );
}

#[test]
fn test_cv_uses_cached_kind_and_url() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "remix", "example.com/cached");
    let ids = project.write_ids("X:original:example.com/edited\n");

    project.mrg().arg("cv").arg(&ids).arg(project.path("cv.html")).assert().success();

    let html = project.read("cv.html");
    assert!(html.contains(r#"<a href="https://example.com/cached">A - T (remix)</a>"#));
}
