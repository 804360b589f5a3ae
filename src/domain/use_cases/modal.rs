use crate::{
    entities::{
        rating::Rating,
        skill::Skill,
        view::{ModalView, ResourceLinkView},
    },
    errors::RenderError,
    render::{
        page::{attempt, render_modal},
        target::{RenderTarget, Slot},
    },
    settings::RenderConfig,
    utils::links::safe_href,
};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { skill_id: String },
}

/// Ways the user can dismiss the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    CloseButton,
    Backdrop,
    Key(String),
}

impl ModalEvent {
    fn closes(&self) -> bool {
        match self {
            ModalEvent::CloseButton | ModalEvent::Backdrop => true,
            ModalEvent::Key(key) => key == ESCAPE_KEY,
        }
    }
}

pub fn build_modal_view(skill: &Skill, rating: Rating, config: &RenderConfig) -> ModalView {
    let placeholders = &config.placeholders;

    ModalView {
        skill_id: skill.id.clone(),
        image_url: skill
            .image
            .clone()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| placeholders.image.clone()),
        title: skill.name.clone(),
        category: skill.category_label().to_string(),
        description: skill.description.clone(),
        rating_percent: rating.percent(),
        rating_text: rating.summary(),
        start_date: skill
            .start_date
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| placeholders.no_date.clone()),
        projects: skill
            .projects
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect(),
        resources: skill
            .resources
            .iter()
            .filter_map(|r| {
                let url = safe_href(&r.url)?;
                Some(ResourceLinkView {
                    name: if r.name.trim().is_empty() { url.clone() } else { r.name.clone() },
                    url,
                })
            })
            .collect(),
        no_projects_text: placeholders.no_projects.clone(),
        no_resources_text: placeholders.no_resources.clone(),
    }
}

/// Two-state controller for the skill detail overlay.
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Populates every field, reveals the modal and focuses its close
    /// control. Opening while open replaces the content.
    pub fn open(&mut self, target: &mut dyn RenderTarget, view: &ModalView) -> Result<(), RenderError> {
        render_modal(target, view)?;
        target.set_hidden(Slot::Modal, false)?;
        attempt("modal focus", target.focus(Slot::ModalClose));

        tracing::debug!("Opened details for skill '{}'", view.skill_id);
        self.state = ModalState::Open {
            skill_id: view.skill_id.clone(),
        };
        Ok(())
    }

    /// Hides the modal. Returns `false` when it was already closed.
    pub fn close(&mut self, target: &mut dyn RenderTarget) -> Result<bool, RenderError> {
        if !self.is_open() {
            return Ok(false);
        }
        target.set_hidden(Slot::Modal, true)?;
        self.state = ModalState::Closed;
        Ok(true)
    }

    /// Returns whether the event changed the state.
    pub fn handle(&mut self, target: &mut dyn RenderTarget, event: &ModalEvent) -> Result<bool, RenderError> {
        if event.closes() {
            self.close(target)
        } else {
            Ok(false)
        }
    }
}
