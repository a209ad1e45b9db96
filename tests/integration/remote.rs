use crate::common::{TEMPLATE, TestProject};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COVER: &[u8] = &[0x89, b'P', b'N', b'G'];

async fn mock_catalog(expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/2/release/X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "X",
            "title": "Course Correction",
            "date": "2021-03-12",
            "artist-credit": [ { "name": "Martin Eve", "artist": { "name": "Martin Eve" } } ],
            "label-info": [ { "catalog-number": "CAT01", "label": { "name": "LBL" } } ]
        })))
        .expect(expected_calls)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/release/X/front"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(COVER.to_vec()))
        .expect(expected_calls)
        .mount(&server)
        .await;

    server
}

fn project_for(server: &MockServer) -> TestProject {
    TestProject::with_catalog(&format!("{}/ws/2", server.uri()), &server.uri())
}

#[tokio::test]
async fn test_fetches_and_caches_on_first_run() {
    let server = mock_catalog(1).await;
    let project = project_for(&server);
    let ids = project.write_ids("X:remix:example.com/x\n");
    let template = project.write_template(TEMPLATE);

    for _ in 0..2 {
        project
            .mrg()
            .arg("gen")
            .arg(&ids)
            .arg(&template)
            .arg(project.path("music.html"))
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read_to_string(project.cache_dir().join("X.data")).unwrap(),
        "Martin Eve\nCourse Correction\n2021-03-12\nLBL\nCAT01\nremix\nexample.com/x"
    );
    assert_eq!(std::fs::read(project.cache_dir().join("X")).unwrap(), COVER);
    assert!(
        project
            .read("music.html")
            .contains("Martin Eve - Course Correction (remix)</a><br/>(LBL, 2021)")
    );
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn test_refresh_refetches_both_assets() {
    let server = mock_catalog(2).await;
    let project = project_for(&server);
    let ids = project.write_ids("X:original:example.com/x\n");

    project.mrg().arg("cv").arg(&ids).arg(project.path("cv.html")).assert().success();
    project
        .mrg()
        .arg("--refresh")
        .arg("cv")
        .arg(&ids)
        .arg(project.path("cv.html"))
        .assert()
        .success();
}

#[tokio::test]
async fn test_missing_cover_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/2/release/X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "T",
            "artist-credit": [ { "artist": { "name": "A" } } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/release/X/front"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let project = project_for(&server);
    let ids = project.write_ids("X:original:example.com/x\n");

    project
        .mrg()
        .arg("cv")
        .arg(&ids)
        .arg(project.path("cv.html"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error fetching cover art for X"));

    assert!(!project.path("cv.html").exists());
    // Metadata already fetched stays cached for the next run.
    assert!(project.cache_dir().join("X.data").exists());
}
