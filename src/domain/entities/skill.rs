use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{UNCATEGORIZED_KEY, UNCATEGORIZED_TITLE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category_id: Option<String>,

    /// Display name. Filled from the profile's category map during
    /// normalization when the document leaves it out.
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub priority: i64,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: String,
    pub url: String,
}

fn default_visible() -> bool {
    true
}

/// Ids show up as both `"rust"` and `12` in hand-written documents.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            ..Default::default()
        }
    }

    /// Explicit category display string, ignoring blanks.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn category_key_id(&self) -> Option<&str> {
        self.category_id.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Category shown on the card and in the modal: the display name, then
    /// the raw category id, then "Uncategorized".
    pub fn category_label(&self) -> &str {
        self.category_name()
            .or_else(|| self.category_key_id())
            .unwrap_or(UNCATEGORIZED_TITLE)
    }

    /// Key used to group cards into sections.
    pub fn group_key(&self) -> String {
        if let Some(id) = self.category_key_id() {
            return id.to_string();
        }
        match self.category_name() {
            Some(name) => name.to_lowercase(),
            None => UNCATEGORIZED_KEY.to_string(),
        }
    }
}
