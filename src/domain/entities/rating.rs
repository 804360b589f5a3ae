use std::collections::HashMap;
use std::fmt;

use derive_more::Display;
use serde_json::{Map, Value};

use crate::constants::{MAX_RATING, MIN_RATING};

/// Proficiency score, clamped to `0..=10` on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Rating(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RatingLabel {
    #[display("Beginner")]
    Beginner,
    #[display("Intermediate")]
    Intermediate,
    #[display("Advanced")]
    Advanced,
    #[display("Expert")]
    Expert,
}

impl Rating {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(MIN_RATING);
        }
        Self(value.clamp(MIN_RATING, MAX_RATING))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn label(&self) -> RatingLabel {
        match self.0 {
            r if r >= 9.0 => RatingLabel::Expert,
            r if r >= 7.0 => RatingLabel::Advanced,
            r if r >= 4.0 => RatingLabel::Intermediate,
            _ => RatingLabel::Beginner,
        }
    }

    /// Width of the filled rating bar.
    pub fn percent(&self) -> f64 {
        self.0 * (100.0 / MAX_RATING)
    }

    /// `"8/10 • Advanced"`
    pub fn summary(&self) -> String {
        format!("{}/10 • {}", self, self.label())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// Skill id to rating, as read from `ratings.json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingMap {
    ratings: HashMap<String, Rating>,
}

impl RatingMap {
    /// Builds the map from a JSON object. Non-numeric entries are skipped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let ratings = object
            .iter()
            .filter_map(|(id, value)| match value.as_f64() {
                Some(n) => Some((id.clone(), Rating::new(n))),
                None => {
                    tracing::debug!("Ignoring non-numeric rating for skill '{}': {}", id, value);
                    None
                }
            })
            .collect();

        Self { ratings }
    }

    /// Rating for `skill_id`, `0` when absent.
    pub fn get(&self, skill_id: &str) -> Rating {
        self.ratings.get(skill_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RatingMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            ratings: iter
                .into_iter()
                .map(|(id, value)| (id.into(), Rating::new(value)))
                .collect(),
        }
    }
}
