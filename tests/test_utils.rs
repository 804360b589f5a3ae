#![allow(dead_code)]

use chrono::NaiveDate;
use portfolio_renderer::{
    html::document::HtmlDocument,
    render::target::{Node, Slot},
    settings::{AppConfig, AppEnvironment},
    use_cases::portfolio::Portfolio,
    AppState,
};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Static file host for the three documents. Paths nobody mounted answer 404.
pub struct TestSite {
    pub server: MockServer,
}

impl TestSite {
    pub async fn spawn() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub async fn serve(&self, file: &str, body: &Value) {
        Mock::given(method("GET"))
            .and(path(format!("/data/{}", file)))
            .and(header("cache-control", "no-cache"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn serve_raw(&self, file: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/data/{}", file)))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
            .mount(&self.server)
            .await;
    }

    pub async fn fail(&self, file: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/data/{}", file)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub fn config(&self) -> AppConfig {
        test_config(format!("{}/data", self.server.uri()))
    }

    pub async fn render(&self) -> Portfolio<HtmlDocument> {
        render_with(&self.config(), HtmlDocument::new()).await
    }
}

pub fn test_config(base_url: impl Into<String>) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Test".to_string(),
        base_url: base_url.into(),
        ..Default::default()
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub async fn render_with(config: &AppConfig, document: HtmlDocument) -> Portfolio<HtmlDocument> {
    let state = AppState::new(config).expect("Failed to build app state");
    state.render(document, today()).await
}

/// Writes the given documents into a fresh directory.
pub fn data_dir(files: &[(&str, &Value)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, body) in files {
        write_file(dir.path(), name, &body.to_string());
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write test file");
}

/// `data-skill-id` of every rendered card, in page order.
pub fn card_ids(doc: &HtmlDocument) -> Vec<String> {
    elements_with_class(doc, Slot::SkillsContainer, "skill-card")
        .into_iter()
        .filter_map(|(attrs, _)| attrs.into_iter().find(|(n, _)| n == "data-skill-id").map(|(_, v)| v))
        .collect()
}

/// Text of every element carrying `class` under `slot`.
pub fn texts_with_class(doc: &HtmlDocument, slot: Slot, class: &str) -> Vec<String> {
    elements_with_class(doc, slot, class)
        .into_iter()
        .map(|(_, text)| text)
        .collect()
}

fn elements_with_class(doc: &HtmlDocument, slot: Slot, class: &str) -> Vec<(Vec<(String, String)>, String)> {
    let Some(state) = doc.slot(slot) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for child in &state.children {
        child.find_by_class(class, &mut found);
    }
    found
        .into_iter()
        .map(|element| {
            let text = Node::Element(element.clone()).text_content();
            (element.attributes.clone(), text)
        })
        .collect()
}
