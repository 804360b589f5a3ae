use crate::{
    render::target::RenderTarget,
    use_cases::{modal::ModalEvent, portfolio::Portfolio},
};

/// Input the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click or Enter/Space on a skill card.
    ActivateCard(String),
    CloseButton,
    /// Click on the dimmed area around the modal content.
    Backdrop,
    KeyDown(String),
}

impl<T> Portfolio<T>
where
    T: RenderTarget,
{
    /// Routes one event. Returns whether anything on the page changed.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        let modal_event = match event {
            UiEvent::ActivateCard(skill_id) => return self.activate_card(&skill_id),
            UiEvent::CloseButton => ModalEvent::CloseButton,
            UiEvent::Backdrop => ModalEvent::Backdrop,
            UiEvent::KeyDown(key) => ModalEvent::Key(key),
        };

        match self.modal.handle(&mut self.target, &modal_event) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::warn!("Failed to close skill modal: {}", e);
                false
            }
        }
    }
}
