use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::{
    entities::{skill::Skill, user::User},
    utils::dates::{full_years_between, parse_start_date},
};

/// Category id to display name, skipping entries with a blank id.
pub fn category_map(user: &User) -> HashMap<&str, &str> {
    user.skill_categories
        .iter()
        .filter(|c| !c.id.trim().is_empty())
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect()
}

/// Fills in missing category display names from the profile's category map
/// and drops repeated skill ids. Running it twice changes nothing.
pub fn normalize_skills(user: &User, skills: &mut Vec<Skill>) {
    let categories = category_map(user);

    let mut seen = HashSet::new();
    skills.retain(|skill| {
        let first = seen.insert(skill.id.clone());
        if !first {
            tracing::warn!("Dropping duplicate skill id '{}'", skill.id);
        }
        first
    });

    for skill in skills.iter_mut() {
        if skill.category_name().is_some() {
            continue;
        }
        let mapped = skill
            .category_key_id()
            .and_then(|id| categories.get(id))
            .filter(|name| !name.trim().is_empty());

        if let Some(name) = mapped {
            skill.category = Some(name.to_string());
        }
    }
}

/// Earliest parseable start date across all skills.
pub fn earliest_start_date(skills: &[Skill]) -> Option<NaiveDate> {
    skills
        .iter()
        .filter_map(|s| s.start_date.as_deref())
        .filter_map(parse_start_date)
        .min()
}

/// Full years since the earliest start date, `0` when no skill has one.
pub fn computed_experience_years(skills: &[Skill], today: NaiveDate) -> u32 {
    earliest_start_date(skills)
        .map(|since| full_years_between(since, today))
        .unwrap_or(0)
}

/// Years shown in the stats: the profile's declared total wins over the
/// computed value.
pub fn experience_years(user: &User, skills: &[Skill], today: NaiveDate) -> u32 {
    user.declared_years()
        .unwrap_or_else(|| computed_experience_years(skills, today))
}
