use crate::common::{TEMPLATE, TestProject};
use predicates::prelude::*;

#[test]
fn test_gen_from_seeded_cache() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020-05-01", "", "original", "example.com/a");
    project.seed_release("Y", "A", "T", "2020-05-01", "LBL", "remix", "example.com/b");
    let ids = project.write_ids("X:original:example.com/a\nY:remix:example.com/b\n");
    let template = project.write_template(TEMPLATE);

    project
        .mrg()
        .arg("gen")
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 releases"));

    let expected = concat!(
        "<html><body><table>",
        "<tr>",
        r#"<td><a href="https://example.com/a"><img src="X" alt="A - T" style="width:150px;max-width:150px;"></img></a></td>"#,
        r#"<td><a href="https://example.com/b"><img src="Y" alt="A - T" style="width:150px;max-width:150px;"></img></a></td>"#,
        "</tr><tr>",
        r#"<td style="padding-bottom: 15px;"><a href="https://example.com/a">A - T</a><br/>(2020)</td>"#,
        r#"<td style="padding-bottom: 15px;"><a href="https://example.com/b">A - T (remix)</a><br/>(LBL, 2020)</td>"#,
        "</tr>",
        "</table></body></html>"
    );
    assert_eq!(project.read("music.html"), expected);
}

#[test]
fn test_gen_odd_count_pads_last_row() {
    let project = TestProject::new();
    for id in ["A1", "A2", "A3"] {
        project.seed_release(id, "Artist", id, "2021", "", "original", "example.com/x");
    }
    let ids = project.write_ids("A1:original:x\nA2:original:x\nA3:original:x\n");
    let template = project.write_template(TEMPLATE);

    project
        .mrg()
        .args(["gen"])
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .success();

    let html = project.read("music.html");
    assert_eq!(html.matches("<tr>").count(), 4);
    assert_eq!(html.matches("<td></td>").count(), 1);
}

#[test]
fn test_gen_is_idempotent() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "LBL", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");
    let template = project.write_template(TEMPLATE);

    for out in ["first.html", "second.html"] {
        project.mrg().arg("gen").arg(&ids).arg(&template).arg(project.path(out)).assert().success();
    }

    assert_eq!(project.read("first.html"), project.read("second.html"));
}

#[test]
fn test_gen_overwrites_existing_output() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");
    let template = project.write_template("[CONTENTS]");
    std::fs::write(project.path("music.html"), "old page that is much longer than the new one")
        .unwrap();

    project
        .mrg()
        .arg("gen")
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .success();

    assert!(project.read("music.html").starts_with("<tr><td><a href=\"https://example.com/a\">"));
}

#[test]
fn test_gen_with_cover_prefix_from_config() {
    let project = TestProject::new();
    let config = std::fs::read_to_string(project.config_path()).unwrap();
    std::fs::write(project.config_path(), format!("{config}cover_prefix = \"/music/\"\n")).unwrap();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");
    let template = project.write_template(TEMPLATE);

    project
        .mrg()
        .arg("gen")
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .success();

    assert!(project.read("music.html").contains(r#"<img src="/music/X""#));
}

#[test]
fn test_gen_quiet_prints_nothing() {
    let project = TestProject::new();
    project.seed_release("X", "A", "T", "2020", "", "original", "example.com/a");
    let ids = project.write_ids("X:original:example.com/a\n");
    let template = project.write_template(TEMPLATE);

    project
        .mrg()
        .arg("-q")
        .arg("gen")
        .arg(&ids)
        .arg(&template)
        .arg(project.path("music.html"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
