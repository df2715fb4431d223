use roster::config::toml_config::{ReportSection, RosterSection, SourceSection, TomlConfig};
use roster::core::ReportStore;
use roster::domain::model::{Language, Member};
use roster::{LocalReportStore, RosterEngine, RosterError, StubPostSource};
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

fn offline_config(output_path: String, members: Vec<Member>) -> TomlConfig {
    TomlConfig {
        roster: RosterSection {
            name: "offline-run".to_string(),
            language: Language::English,
        },
        source: SourceSection {
            endpoint: "https://example.invalid/posts".to_string(),
            featured_post: 1,
            timeout_seconds: None,
        },
        report: ReportSection {
            output_path,
            filename: None,
        },
        members,
        country_codes: HashMap::new(),
    }
}

#[tokio::test]
async fn test_offline_run_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let members = vec![Member::Guest {
        name: "choi".to_string(),
        visit_count: 7,
    }];
    let config = offline_config(output_path.clone(), members);
    let store = LocalReportStore::new(output_path);

    let engine = RosterEngine::new(StubPostSource::quick(), store, config);
    let report_path = engine.run().await.unwrap();

    assert!(report_path.ends_with("roster.csv"));
    let report = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(report.trim(), "tag,name,count\nGUEST,choi,7");
}

#[tokio::test]
async fn test_rejecting_source_does_not_abort_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = offline_config(output_path.clone(), Vec::new());
    let store = LocalReportStore::new(output_path);
    let source = StubPostSource::failing(Duration::from_millis(5), "no network");

    let engine = RosterEngine::new(source, store, config);
    let report_path = engine.run().await.unwrap();

    // An empty config seeds the sample roster, so the report is non-trivial.
    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("ADMIN,kwon,3"));
    assert!(report.contains("MEMBER,park,120"));
    assert!(report.contains("GUEST,choi,7"));
}

#[tokio::test]
async fn test_check_in_and_check_out() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let members = vec![Member::Admin {
        name: "kwon".to_string(),
        kick_count: 3,
    }];
    let config = offline_config(output_path.clone(), members);
    let store = LocalReportStore::new(output_path);

    let mut engine = RosterEngine::new(StubPostSource::quick(), store, config);
    assert_eq!(engine.roster().len(), 1);

    engine.check_in(Member::Guest {
        name: "walk-in".to_string(),
        visit_count: 1,
    });
    assert_eq!(engine.roster().len(), 2);

    // Last in, first out.
    let departed = engine.check_out().unwrap();
    assert_eq!(departed.name(), "walk-in");

    let departed = engine.check_out().unwrap();
    assert_eq!(departed.name(), "kwon");

    assert!(matches!(
        engine.check_out(),
        Err(RosterError::EmptyListError)
    ));
}

#[tokio::test]
async fn test_report_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalReportStore::new(temp_dir.path().to_str().unwrap().to_string());

    let saved_path = store.save("nested/report.csv", b"tag,name,count\n").await.unwrap();
    assert!(saved_path.ends_with("report.csv"));

    let data = store.load("nested/report.csv").await.unwrap();
    assert_eq!(data, b"tag,name,count\n");
}
