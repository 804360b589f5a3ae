#![allow(dead_code)]

use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct TestSkill {
    pub id: String,
    pub name: String,
    pub category_id: Option<String>,
    pub priority: i64,
    pub visible: bool,
    pub start_date: Option<String>,
    pub description: String,
    pub projects: Vec<String>,
    pub resources: Vec<(String, String)>,
}

impl TestSkill {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: None,
            priority: 0,
            visible: true,
            start_date: None,
            description: String::new(),
            projects: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn started(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.projects.push(project.into());
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.resources.push((name.into(), url.into()));
        self
    }

    pub fn to_json(&self) -> Value {
        let resources: Vec<Value> = self
            .resources
            .iter()
            .map(|(name, url)| json!({"name": name, "url": url}))
            .collect();

        let mut value = json!({
            "id": self.id,
            "name": self.name,
            "priority": self.priority,
            "visible": self.visible,
            "description": self.description,
            "projects": self.projects,
            "resources": resources,
        });
        if let Some(category_id) = &self.category_id {
            value["categoryId"] = json!(category_id);
        }
        if let Some(start_date) = &self.start_date {
            value["startDate"] = json!(start_date);
        }
        value
    }
}

pub fn sample_user() -> Value {
    json!({
        "name": "Ada Lovelace",
        "title": "Systems Engineer",
        "location": "London",
        "about": "I build **analytical engines**.",
        "profilePicture": "ada.png",
        "cvUrl": "cv.pdf",
        "socialLinks": [
            {"platform": "GitHub", "url": "https://github.com/ada", "username": "ada"}
        ],
        "skillCategories": [
            {"id": "lang", "name": "Languages"},
            {"id": "ops", "name": "DevOps"}
        ]
    })
}

pub fn sample_skills() -> Vec<TestSkill> {
    vec![
        TestSkill::new("go", "Go")
            .in_category("lang")
            .priority(5)
            .started("2021-06"),
        TestSkill::new("rust", "Rust")
            .in_category("lang")
            .priority(10)
            .started("2019-03-01")
            .described("Memory-safe systems programming without a garbage collector.")
            .with_project("Compiler")
            .with_project("CLI tools")
            .with_resource("The Book", "https://doc.rust-lang.org/book/"),
        TestSkill::new("docker", "Docker")
            .in_category("ops")
            .priority(3)
            .started("2020-01-15"),
        TestSkill::new("terraform", "Terraform")
            .in_category("ops")
            .hidden(),
        TestSkill::new("notes", "Note taking").started("whenever"),
    ]
}

pub fn skills_json(skills: &[TestSkill]) -> Value {
    Value::Array(skills.iter().map(TestSkill::to_json).collect())
}

pub fn sample_ratings() -> Value {
    json!({"rust": 9, "go": 7, "docker": 4, "notes": 2, "terraform": 10})
}
