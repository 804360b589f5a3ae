use serde_json::{json, Value};

pub const USER_RESOURCE: &str = "user";
pub const SKILLS_RESOURCE: &str = "skills";
pub const RATINGS_RESOURCE: &str = "ratings";

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

pub const UNCATEGORIZED_KEY: &str = "uncategorized";
pub const UNCATEGORIZED_TITLE: &str = "Uncategorized";

pub const NO_DATE_PLACEHOLDER: &str = "—";
pub const NO_PROJECTS_TEXT: &str = "No projects listed.";
pub const NO_RESOURCES_TEXT: &str = "No resources available.";
pub const MALFORMED_DATA_TEXT: &str =
    "Skill data is malformed and could not be displayed. Please check skills.json and ratings.json.";
pub const NO_SKILLS_TEXT: &str = "No skills to display yet.";

pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x200?text=No+Image";
pub const PLACEHOLDER_AVATAR: &str =
    "https://via.placeholder.com/150?text=Profile";

pub const DEFAULT_EXCERPT_LENGTH: usize = 120;

/// Profile shown when `user.json` cannot be fetched.
pub fn fallback_user() -> Value {
    json!({
        "name": "Portfolio Owner",
        "title": "Software Developer",
        "location": "",
        "about": "Profile information is temporarily unavailable.",
        "socialLinks": [],
        "skillCategories": []
    })
}

/// Skills shown when `skills.json` cannot be fetched.
pub fn fallback_skills() -> Value {
    json!([])
}

/// Ratings used when `ratings.json` cannot be fetched; every skill rates 0.
pub fn fallback_ratings() -> Value {
    json!({})
}
