use chrono::NaiveDate;

use crate::{
    entities::{
        rating::RatingMap,
        skill::Skill,
        user::User,
        view::{GridView, StatsView},
    },
    errors::{AppError, LoadError},
    render::{
        page::{attempt, render_grid, render_malformed, render_profile, render_stats},
        target::RenderTarget,
    },
    settings::RenderConfig,
    use_cases::{
        grid::build_grid,
        load::PortfolioData,
        modal::{build_modal_view, ModalController},
        normalize::{category_map, experience_years, normalize_skills},
        profile::build_profile,
        stats::build_stats,
    },
};

/// Outcome of page initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    Rendered { stats: StatsView },
    Malformed(LoadError),
}

impl PageStatus {
    /// Stats of a rendered page, or the load error that stopped it.
    pub fn stats(&self) -> Result<StatsView, AppError> {
        match self {
            PageStatus::Rendered { stats } => Ok(*stats),
            PageStatus::Malformed(e) => Err(e.clone().into()),
        }
    }
}

/// A populated page and the state needed to react to user events.
pub struct Portfolio<T>
where
    T: RenderTarget,
{
    pub target: T,
    pub modal: ModalController,
    config: RenderConfig,
    user: User,
    skills: Vec<Skill>,
    ratings: RatingMap,
    grid: GridView,
    status: PageStatus,
}

impl<T> Portfolio<T>
where
    T: RenderTarget,
{
    /// Renders the page from loaded data. Invalid data replaces the main
    /// content with a single message and nothing else is drawn.
    pub fn initialize(
        config: RenderConfig,
        data: Result<PortfolioData, LoadError>,
        mut target: T,
        today: NaiveDate,
    ) -> Self {
        let data = match data {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Cannot render portfolio: {}", e);
                attempt(
                    "malformed data message",
                    render_malformed(&mut target, &config.placeholders.malformed_data),
                );
                return Self {
                    target,
                    modal: ModalController::new(),
                    config,
                    user: User::default(),
                    skills: Vec::new(),
                    ratings: RatingMap::default(),
                    grid: GridView { sections: Vec::new() },
                    status: PageStatus::Malformed(e),
                };
            }
        };

        let PortfolioData { user, mut skills, ratings } = data;
        normalize_skills(&user, &mut skills);

        let profile = build_profile(&user, &config);
        render_profile(&mut target, &profile);

        let grid = build_grid(&skills, &category_map(&user), &ratings, &config);
        attempt(
            "skills grid",
            render_grid(&mut target, &grid, &config.placeholders.no_skills),
        );

        let stats = build_stats(&grid, experience_years(&user, &skills, today));
        render_stats(&mut target, &stats);

        tracing::info!(
            "Rendered {} skills in {} categories",
            stats.skill_count,
            stats.category_count
        );

        Self {
            target,
            modal: ModalController::new(),
            config,
            user,
            skills,
            ratings,
            grid,
            status: PageStatus::Rendered { stats },
        }
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    /// Opens the modal for a rendered card. Unknown or hidden skills are
    /// ignored.
    pub fn activate_card(&mut self, skill_id: &str) -> bool {
        if self.grid.find_card(skill_id).is_none() {
            tracing::debug!("No card for skill '{}'", skill_id);
            return false;
        }
        let Some(skill) = self.skills.iter().find(|s| s.id == skill_id) else {
            return false;
        };

        let view = build_modal_view(skill, self.ratings.get(&skill.id), &self.config);
        attempt("skill modal", self.modal.open(&mut self.target, &view))
    }
}
