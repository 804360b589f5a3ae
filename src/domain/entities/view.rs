//! View models: what the page shows, computed without touching a render target.

use crate::entities::rating::{Rating, RatingLabel};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Sanitized HTML rendered from the profile's Markdown.
    pub about_html: String,
    pub picture_url: String,
    pub cv_url: Option<String>,
    pub social_links: Vec<SocialLinkView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLinkView {
    pub platform: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub skill_count: usize,
    pub category_count: usize,
    pub experience_years: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillSectionView {
    pub key: String,
    pub title: String,
    pub cards: Vec<SkillCardView>,
}

impl SkillSectionView {
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category_label: String,
    pub rating: Rating,
    pub rating_label: RatingLabel,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub sections: Vec<SkillSectionView>,
}

impl GridView {
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(SkillSectionView::count).sum()
    }

    pub fn find_card(&self, skill_id: &str) -> Option<&SkillCardView> {
        self.sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .find(|c| c.id == skill_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLinkView {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub skill_id: String,
    pub image_url: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub rating_percent: f64,
    pub rating_text: String,
    pub start_date: String,
    pub projects: Vec<String>,
    pub resources: Vec<ResourceLinkView>,
    /// Shown instead of an empty project list.
    pub no_projects_text: String,
    /// Shown instead of an empty resource list.
    pub no_resources_text: String,
}
