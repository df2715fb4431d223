use httpmock::prelude::*;
use roster::config::toml_config::{ReportSection, RosterSection, SourceSection, TomlConfig};
use roster::domain::model::{Language, Member};
use roster::{HttpPostSource, LocalReportStore, RosterEngine};
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

fn make_config(endpoint: String, output_path: String) -> TomlConfig {
    TomlConfig {
        roster: RosterSection {
            name: "weekend-study".to_string(),
            language: Language::Korean,
        },
        source: SourceSection {
            endpoint,
            featured_post: 1,
            timeout_seconds: Some(5),
        },
        report: ReportSection {
            output_path,
            filename: Some("weekend.csv".to_string()),
        },
        members: vec![
            Member::Admin {
                name: "kwon".to_string(),
                kick_count: 3,
            },
            Member::Regular {
                name: "park".to_string(),
                point: 120,
            },
        ],
        country_codes: HashMap::new(),
    }
}

#[tokio::test]
async fn test_end_to_end_roster_run_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let post_mock = server.mock(|when, then| {
        when.method(GET).path("/posts/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 1,
                "title": "post title",
                "content": "post content"
            }));
    });

    let config = make_config(server.url("/posts"), output_path.clone());
    let store = LocalReportStore::new(output_path.clone());
    let source =
        HttpPostSource::new(config.source.endpoint.clone(), Duration::from_secs(5)).unwrap();

    let engine = RosterEngine::new(source, store, config);
    let report_path = engine.run().await.unwrap();

    post_mock.assert();
    assert!(report_path.ends_with("weekend.csv"));

    let report = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "tag,name,count");
    assert_eq!(lines[1], "ADMIN,kwon,3");
    assert_eq!(lines[2], "MEMBER,park,120");
}

#[tokio::test]
async fn test_missing_post_does_not_abort_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let post_mock = server.mock(|when, then| {
        when.method(GET).path("/posts/1");
        then.status(404);
    });

    let config = make_config(server.url("/posts"), output_path.clone());
    let store = LocalReportStore::new(output_path.clone());
    let source =
        HttpPostSource::new(config.source.endpoint.clone(), Duration::from_secs(5)).unwrap();

    let engine = RosterEngine::new(source, store, config);
    let report_path = engine.run().await.unwrap();

    post_mock.assert();

    // The report is written even though the featured post was unavailable.
    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("ADMIN,kwon,3"));
}

#[tokio::test]
async fn test_fetch_surfaces_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts/9");
        then.status(500);
    });

    let source = HttpPostSource::new(server.url("/posts"), Duration::from_secs(5)).unwrap();
    let err = roster::core::PostSource::fetch(&source, 9).await.unwrap_err();

    assert!(matches!(
        err,
        roster::RosterError::SourceStatusError { status: 500 }
    ));
}
