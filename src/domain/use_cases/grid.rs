use std::collections::HashMap;

use crate::{
    entities::{
        rating::RatingMap,
        skill::Skill,
        view::{GridView, SkillCardView, SkillSectionView},
    },
    settings::RenderConfig,
};

/// Groups visible skills into sections, in order of first appearance, and
/// sorts each section by priority (highest first) then name.
pub fn group_skills(skills: &[Skill]) -> Vec<(String, Vec<&Skill>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();

    for skill in skills.iter().filter(|s| s.visible) {
        let key = skill.group_key();
        match index.get(&key) {
            Some(&i) => groups[i].1.push(skill),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![skill]));
            }
        }
    }

    for (_, members) in groups.iter_mut() {
        // `sort_by` is stable, so full ties keep document order.
        members.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.name.cmp(&b.name)));
    }

    groups
}

/// Section heading for a group. Id-keyed groups take the mapped category
/// name; anything else is titled after the member that opened the group.
pub fn section_title(first: &Skill, categories: &HashMap<&str, &str>) -> String {
    first
        .category_key_id()
        .and_then(|id| categories.get(id))
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.to_string())
        .unwrap_or_else(|| first.category_label().to_string())
}

/// Cuts `text` to at most `max_chars` characters, ending in "…" when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

pub fn build_card(skill: &Skill, ratings: &RatingMap, config: &RenderConfig) -> SkillCardView {
    let rating = ratings.get(&skill.id);

    SkillCardView {
        id: skill.id.clone(),
        name: skill.name.clone(),
        image_url: skill
            .image
            .clone()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| config.placeholders.image.clone()),
        category_label: skill.category_label().to_string(),
        rating,
        rating_label: rating.label(),
        excerpt: excerpt(&skill.description, config.excerpt_length),
    }
}

pub fn build_grid(
    skills: &[Skill],
    categories: &HashMap<&str, &str>,
    ratings: &RatingMap,
    config: &RenderConfig,
) -> GridView {
    let sections = group_skills(skills)
        .into_iter()
        .map(|(key, members)| SkillSectionView {
            // Members are already priority-sorted; the title comes from document order.
            title: skills
                .iter()
                .find(|s| s.visible && s.group_key() == key)
                .map(|s| section_title(s, categories))
                .unwrap_or_default(),
            cards: members
                .iter()
                .map(|s| build_card(s, ratings, config))
                .collect(),
            key,
        })
        .collect();

    GridView { sections }
}
