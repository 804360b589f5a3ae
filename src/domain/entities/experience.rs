use serde::{Deserialize, Serialize};

/// Explicit experience override declared in the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, alias = "years")]
    pub total_years: Option<u32>,
}
