use crate::entities::view::{GridView, StatsView};

/// Totals after filtering: visible cards, sections, experience years.
pub fn build_stats(grid: &GridView, experience_years: u32) -> StatsView {
    StatsView {
        skill_count: grid.card_count(),
        category_count: grid.sections.len(),
        experience_years,
    }
}

pub fn experience_label(years: u32) -> String {
    format!("{years}+")
}
