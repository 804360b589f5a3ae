use serde_json::Value;

use crate::{
    constants::{RATINGS_RESOURCE, SKILLS_RESOURCE, USER_RESOURCE},
    entities::{rating::RatingMap, skill::Skill, user::User},
    errors::{FetchError, LoadError},
    repositories::resource::ResourceFetcher,
    settings::{AppConfig, FallbackData},
};

/// Relative paths of the three documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePaths {
    pub user: String,
    pub skills: String,
    pub ratings: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            user: "user.json".into(),
            skills: "skills.json".into(),
            ratings: "ratings.json".into(),
        }
    }
}

impl From<&AppConfig> for ResourcePaths {
    fn from(config: &AppConfig) -> Self {
        Self {
            user: config.user_path.clone(),
            skills: config.skills_path.clone(),
            ratings: config.ratings_path.clone(),
        }
    }
}

/// The three documents after fallback substitution, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocuments {
    pub user: Value,
    pub skills: Value,
    pub ratings: Value,
    /// Resources that were replaced by fallback data.
    pub substituted: Vec<&'static str>,
}

/// Validated, typed documents.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioData {
    pub user: User,
    pub skills: Vec<Skill>,
    pub ratings: RatingMap,
}

pub struct DataLoader<F>
where
    F: ResourceFetcher,
{
    pub fetcher: F,
    paths: ResourcePaths,
    fallback: FallbackData,
}

impl<F> DataLoader<F>
where
    F: ResourceFetcher,
{
    pub fn new(fetcher: F, paths: ResourcePaths, fallback: FallbackData) -> Self {
        DataLoader {
            fetcher,
            paths,
            fallback,
        }
    }

    /// Fetches all three documents concurrently and waits for every one to
    /// settle. A failed document is replaced by its fallback; this never fails.
    pub async fn fetch_all(&self) -> RawDocuments {
        let (user, skills, ratings) = futures::join!(
            self.fetcher.fetch_json(&self.paths.user),
            self.fetcher.fetch_json(&self.paths.skills),
            self.fetcher.fetch_json(&self.paths.ratings),
        );

        let mut substituted = Vec::new();
        let mut settle = |resource: &'static str, result: Result<Value, FetchError>, fallback: &Value| {
            match result {
                Ok(value) => {
                    tracing::debug!("Loaded {} data", resource);
                    value
                }
                Err(e) => {
                    tracing::warn!("Failed to load {} data, using fallback: {}", resource, e);
                    substituted.push(resource);
                    fallback.clone()
                }
            }
        };

        let user = settle(USER_RESOURCE, user, &self.fallback.user);
        let skills = settle(SKILLS_RESOURCE, skills, &self.fallback.skills);
        let ratings = settle(RATINGS_RESOURCE, ratings, &self.fallback.ratings);

        RawDocuments {
            user,
            skills,
            ratings,
            substituted,
        }
    }

    /// Checks document shapes and converts them to typed records.
    pub fn validate(&self, raw: RawDocuments) -> Result<PortfolioData, LoadError> {
        let Value::Array(skill_values) = raw.skills else {
            return Err(LoadError::Malformed {
                resource: SKILLS_RESOURCE,
                expected: "an array",
            });
        };
        let Value::Object(rating_values) = raw.ratings else {
            return Err(LoadError::Malformed {
                resource: RATINGS_RESOURCE,
                expected: "an object",
            });
        };

        let user = match serde_json::from_value::<User>(raw.user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Invalid {} data, using fallback: {}", USER_RESOURCE, e);
                serde_json::from_value(self.fallback.user.clone()).unwrap_or_default()
            }
        };

        let skills = skill_values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Skill>(value) {
                Ok(skill) => Some(skill),
                Err(e) => {
                    tracing::warn!("Skipping skill #{}: {}", index, e);
                    None
                }
            })
            .collect();

        Ok(PortfolioData {
            user,
            skills,
            ratings: RatingMap::from_object(&rating_values),
        })
    }

    pub async fn load(&self) -> Result<PortfolioData, LoadError> {
        let raw = self.fetch_all().await;
        self.validate(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::resource::MockResourceFetcher;
    use serde_json::json;

    fn loader_with(
        respond: impl Fn(&str) -> Result<Value, FetchError> + Send + Sync + 'static,
    ) -> DataLoader<MockResourceFetcher> {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch_json()
            .times(3)
            .returning(move |path| respond(path));
        DataLoader::new(fetcher, ResourcePaths::default(), FallbackData::default())
    }

    #[tokio::test]
    async fn one_failure_does_not_block_the_others() {
        let loader = loader_with(|path| match path {
            "user.json" => Ok(json!({"name": "Ada"})),
            "skills.json" => Ok(json!([{"id": "rust", "name": "Rust"}])),
            _ => Err(FetchError::Status(404)),
        });

        let raw = loader.fetch_all().await;
        assert_eq!(raw.substituted, vec![RATINGS_RESOURCE]);
        assert_eq!(raw.ratings, json!({}));

        let data = loader.validate(raw).unwrap();
        assert_eq!(data.user.name, "Ada");
        assert_eq!(data.skills.len(), 1);
        assert_eq!(data.ratings.get("rust").value(), 0.0);
    }

    #[tokio::test]
    async fn every_failure_yields_fallback_data() {
        let loader = loader_with(|_| Err(FetchError::Request("connection refused".into())));

        let data = loader.load().await.unwrap();

        assert_eq!(data.user.name, "Portfolio Owner");
        assert!(data.skills.is_empty());
        assert!(data.ratings.is_empty());
    }

    #[tokio::test]
    async fn skills_object_is_malformed() {
        let loader = loader_with(|path| match path {
            "skills.json" => Ok(json!({"rust": {"id": "rust"}})),
            "ratings.json" => Ok(json!({"rust": 8})),
            _ => Ok(json!({})),
        });

        let err = loader.load().await.unwrap_err();
        assert_eq!(
            err,
            LoadError::Malformed { resource: SKILLS_RESOURCE, expected: "an array" }
        );
        assert_eq!(err.to_string(), "skills payload must be an array");
    }

    #[tokio::test]
    async fn ratings_array_is_malformed() {
        let loader = loader_with(|path| match path {
            "skills.json" => Ok(json!([])),
            "ratings.json" => Ok(json!([8, 9])),
            _ => Ok(json!({})),
        });

        assert!(matches!(
            loader.load().await,
            Err(LoadError::Malformed { resource: RATINGS_RESOURCE, .. })
        ));
    }

    #[tokio::test]
    async fn bad_records_are_skipped_and_bad_user_falls_back() {
        let loader = loader_with(|path| match path {
            "user.json" => Ok(json!({"name": ["not", "a", "string"]})),
            "skills.json" => Ok(json!([{"id": "rust"}, {"name": "no id"}, {"id": 7, "priority": 2}])),
            _ => Ok(json!({"rust": 9, "7": 4})),
        });

        let data = loader.load().await.unwrap();

        assert_eq!(data.user.name, "Portfolio Owner");
        let ids: Vec<_> = data.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["rust", "7"]);
        assert_eq!(data.ratings.get("7").value(), 4.0);
    }
}
