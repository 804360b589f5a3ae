mod test_data;
mod test_utils;

use portfolio_renderer::{
    constants::{RATINGS_RESOURCE, USER_RESOURCE},
    errors::LoadError,
    render::target::Slot,
    repositories::{http::HttpFetcher, resource::ResourceFetcher},
    AppState,
};
use serde_json::json;
use test_data::*;
use test_utils::*;

#[tokio::test]
async fn loads_all_documents_from_a_directory() {
    let skills = skills_json(&sample_skills());
    let dir = data_dir(&[
        ("user.json", &sample_user()),
        ("skills.json", &skills),
        ("ratings.json", &sample_ratings()),
    ]);
    let state = AppState::new(&test_config(dir.path().to_string_lossy())).unwrap();

    let raw = state.loader.fetch_all().await;

    assert!(raw.substituted.is_empty());
    let data = state.loader.validate(raw).unwrap();
    assert_eq!(data.user.name, "Ada Lovelace");
    assert_eq!(data.skills.len(), 5);
    assert_eq!(data.ratings.get("rust").value(), 9.0);
}

#[tokio::test]
async fn missing_files_fall_back_independently() {
    let dir = data_dir(&[("skills.json", &skills_json(&sample_skills()))]);
    write_file(dir.path(), "ratings.json", "{ not json");
    let state = AppState::new(&test_config(dir.path().to_string_lossy())).unwrap();

    let raw = state.loader.fetch_all().await;

    assert_eq!(raw.substituted, vec![USER_RESOURCE, RATINGS_RESOURCE]);
    let data = state.loader.validate(raw).unwrap();
    assert_eq!(data.user.name, "Portfolio Owner");
    assert_eq!(data.skills.len(), 5);
    assert!(data.ratings.is_empty());
}

#[tokio::test]
async fn directory_source_renders_page() {
    let dir = data_dir(&[
        ("user.json", &sample_user()),
        ("skills.json", &skills_json(&sample_skills())),
        ("ratings.json", &sample_ratings()),
    ]);

    let page = render_with(&test_config(dir.path().to_string_lossy()), Default::default()).await;

    assert_eq!(card_ids(&page.target), vec!["rust", "go", "docker", "notes"]);
    assert_eq!(page.target.text_of(Slot::StatSkills).as_deref(), Some("4"));
}

#[tokio::test]
async fn http_fetcher_reports_status_and_parse_errors() {
    let site = TestSite::spawn().await;
    site.serve("user.json", &json!({"name": "Ada"})).await;
    site.fail("skills.json", 500).await;
    site.serve_raw("ratings.json", "nope").await;

    let fetcher = HttpFetcher::new(&format!("{}/data", site.server.uri())).unwrap();

    assert_eq!(fetcher.fetch_json("user.json").await.unwrap()["name"], "Ada");
    assert_eq!(
        fetcher.fetch_json("skills.json").await.unwrap_err().to_string(),
        "Unexpected HTTP status 500"
    );
    assert!(fetcher
        .fetch_json("ratings.json")
        .await
        .unwrap_err()
        .to_string()
        .starts_with("Invalid JSON"));
    assert!(fetcher.fetch_json("missing.json").await.is_err());
}

#[tokio::test]
async fn malformed_shape_is_reported_by_load() {
    let site = TestSite::spawn().await;
    site.serve("skills.json", &json!({"oops": true})).await;
    let state = AppState::new(&site.config()).unwrap();

    let err = state.loader.load().await.unwrap_err();

    assert!(matches!(err, LoadError::Malformed { resource: "skills", .. }));
}

#[test]
fn rejects_unusable_base_url() {
    assert!(AppState::new(&test_config("http://")).is_err());
}
