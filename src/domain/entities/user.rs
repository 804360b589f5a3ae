use serde::{Deserialize, Serialize};

use crate::entities::experience::Experience;

// ───── Profile Document ─────────────────────────────────────────────

/// The `user.json` document. Every field except the collections is optional
/// on the wire and falls back to an empty value here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub location: String,

    /// Markdown allowed.
    #[serde(default)]
    pub about: String,

    #[serde(default, alias = "avatar")]
    pub profile_picture: Option<String>,

    #[serde(default, alias = "cv")]
    pub cv_url: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,

    #[serde(default)]
    pub experience: Option<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl SocialLink {
    /// Text shown on the rendered anchor.
    pub fn label(&self) -> String {
        match self.username.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(username) => format!("{} ({})", self.platform, username),
            None => self.platform.clone(),
        }
    }
}

/// Lookup entry mapping a category id to its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Total years declared in the profile, if any.
    pub fn declared_years(&self) -> Option<u32> {
        self.experience.as_ref().and_then(|e| e.total_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let user: User = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();

        assert_eq!(user.name, "Ada");
        assert!(user.title.is_empty());
        assert!(user.social_links.is_empty());
        assert!(user.profile_picture.is_none());
        assert_eq!(user.declared_years(), None);
    }

    #[test]
    fn reads_camel_case_and_aliases() {
        let user: User = serde_json::from_value(serde_json::json!({
            "avatar": "me.png",
            "cvUrl": "cv.pdf",
            "skillCategories": [{"id": "lang", "name": "Languages"}],
            "socialLinks": [{"platform": "github", "url": "https://github.com/ada", "username": "ada"}],
            "experience": {"totalYears": 7}
        }))
        .unwrap();

        assert_eq!(user.profile_picture.as_deref(), Some("me.png"));
        assert_eq!(user.cv_url.as_deref(), Some("cv.pdf"));
        assert_eq!(user.skill_categories[0].name, "Languages");
        assert_eq!(user.social_links[0].label(), "github (ada)");
        assert_eq!(user.declared_years(), Some(7));
    }
}
