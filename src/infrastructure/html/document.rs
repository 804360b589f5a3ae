use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use pulldown_cmark_escape::{escape_html, escape_html_body_text};

use crate::errors::RenderError;
use crate::render::target::{Node, RenderTarget, Slot};

const VOID_TAGS: [&str; 4] = ["img", "br", "hr", "meta"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
    pub hidden: bool,
}

/// In-memory page made of named slots. Serializes to a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    slots: HashMap<Slot, SlotState>,
    focused: Option<Slot>,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlDocument {
    /// Document with every slot present and the modal hidden.
    pub fn new() -> Self {
        let mut slots: HashMap<Slot, SlotState> = Slot::ALL
            .iter()
            .map(|slot| (*slot, SlotState::default()))
            .collect();

        if let Some(modal) = slots.get_mut(&Slot::Modal) {
            modal.hidden = true;
            modal.attributes.insert("role".into(), "dialog".into());
            modal.attributes.insert("aria-modal".into(), "true".into());
        }
        if let Some(close) = slots.get_mut(&Slot::ModalClose) {
            close.attributes.insert("aria-label".into(), "Close".into());
            close.children.push(Node::Text("×".into()));
        }
        if let Some(cv) = slots.get_mut(&Slot::CvLink) {
            cv.children.push(Node::Text("Download CV".into()));
        }

        Self {
            slots,
            focused: None,
        }
    }

    /// Drops an anchor, as markup lacking that element would.
    pub fn without(mut self, slot: Slot) -> Self {
        self.slots.remove(&slot);
        self
    }

    pub fn slot(&self, slot: Slot) -> Option<&SlotState> {
        self.slots.get(&slot)
    }

    pub fn text_of(&self, slot: Slot) -> Option<String> {
        self.slot(slot)
            .map(|s| s.children.iter().map(Node::text_content).collect())
    }

    pub fn attribute(&self, slot: Slot, name: &str) -> Option<&str> {
        self.slot(slot)
            .and_then(|s| s.attributes.get(name))
            .map(String::as_str)
    }

    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.slot(slot).is_none_or(|s| s.hidden)
    }

    pub fn focused(&self) -> Option<Slot> {
        self.focused
    }

    fn state_mut(&mut self, slot: Slot) -> Result<&mut SlotState, RenderError> {
        self.slots
            .get_mut(&slot)
            .ok_or(RenderError::MissingAnchor(slot))
    }

    /// Full page markup.
    pub fn to_html(&self, title: &str) -> String {
        let mut html = String::with_capacity(16 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>");
        let _ = escape_html_body_text(&mut html, title);
        html.push_str("</title>\n");
        html.push_str("</head>\n<body>\n");

        html.push_str("<header class=\"profile\">\n");
        self.write_slot(&mut html, Slot::ProfilePicture, "img", "profile-picture", None);
        self.write_slot(&mut html, Slot::ProfileName, "h1", "profile-name", None);
        self.write_slot(&mut html, Slot::ProfileTitle, "p", "profile-title", None);
        self.write_slot(&mut html, Slot::ProfileLocation, "p", "profile-location", None);
        self.write_slot(&mut html, Slot::ProfileAbout, "div", "profile-about", None);
        self.write_slot(&mut html, Slot::CvLink, "a", "cv-link", None);
        self.write_slot(&mut html, Slot::SocialLinks, "nav", "social-links", None);
        html.push_str("</header>\n");

        html.push_str("<section class=\"stats\">\n");
        self.write_slot(&mut html, Slot::StatSkills, "span", "stat-value", None);
        self.write_slot(&mut html, Slot::StatCategories, "span", "stat-value", None);
        self.write_slot(&mut html, Slot::StatExperience, "span", "stat-value", None);
        html.push_str("</section>\n");

        html.push_str("<main>\n");
        self.write_slot(&mut html, Slot::SkillsContainer, "div", "skills-container", None);
        html.push_str("</main>\n");

        let mut modal_body = String::from("<div class=\"modal-content\">\n");
        self.write_slot(&mut modal_body, Slot::ModalClose, "button", "modal-close", None);
        self.write_slot(&mut modal_body, Slot::ModalImage, "img", "modal-image", None);
        self.write_slot(&mut modal_body, Slot::ModalTitle, "h2", "modal-title", None);
        self.write_slot(&mut modal_body, Slot::ModalCategory, "span", "modal-category", None);
        self.write_slot(&mut modal_body, Slot::ModalDescription, "p", "modal-description", None);
        modal_body.push_str("<div class=\"rating\">\n");
        self.write_slot(&mut modal_body, Slot::ModalRatingBar, "div", "rating-fill", None);
        self.write_slot(&mut modal_body, Slot::ModalRatingText, "span", "rating-text", None);
        modal_body.push_str("</div>\n");
        self.write_slot(&mut modal_body, Slot::ModalStartDate, "span", "modal-start-date", None);
        self.write_slot(&mut modal_body, Slot::ModalProjects, "ul", "modal-projects", None);
        self.write_slot(&mut modal_body, Slot::ModalResources, "ul", "modal-resources", None);
        modal_body.push_str("</div>\n");
        self.write_slot(&mut html, Slot::Modal, "div", "modal", Some(&modal_body));

        html.push_str("</body>\n</html>\n");
        html
    }

    fn write_slot(
        &self,
        out: &mut String,
        slot: Slot,
        tag: &str,
        class: &str,
        inner: Option<&str>,
    ) {
        let Some(state) = self.slots.get(&slot) else {
            return;
        };

        let _ = write!(out, "<{} id=\"{}\"", tag, slot.id());
        if !state.attributes.contains_key("class") {
            let _ = write!(out, " class=\"{}\"", class);
        }
        write_attributes(out, state.attributes.iter());
        if state.hidden {
            out.push_str(" hidden");
        }
        out.push('>');

        if VOID_TAGS.contains(&tag) {
            out.push('\n');
            return;
        }

        match inner {
            Some(markup) => out.push_str(markup),
            None => {
                for child in &state.children {
                    write_node(out, child);
                }
            }
        }
        let _ = writeln!(out, "</{}>", tag);
    }
}

fn write_attributes<'a>(out: &mut String, attributes: impl Iterator<Item = (&'a String, &'a String)>) {
    for (name, value) in attributes {
        let _ = write!(out, " {}=\"", name);
        let _ = escape_html(&mut *out, value);
        out.push('"');
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => {
            let _ = escape_html_body_text(&mut *out, text);
        }
        Node::Html(markup) => out.push_str(markup),
        Node::Element(element) => {
            let _ = write!(out, "<{}", element.tag);
            write_attributes(out, element.attributes.iter().map(|(n, v)| (n, v)));
            out.push('>');
            if VOID_TAGS.contains(&element.tag) {
                return;
            }
            for child in &element.children {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

impl RenderTarget for HtmlDocument {
    fn replace_children(&mut self, slot: Slot, children: Vec<Node>) -> Result<(), RenderError> {
        self.state_mut(slot)?.children = children;
        Ok(())
    }

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) -> Result<(), RenderError> {
        self.state_mut(slot)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_hidden(&mut self, slot: Slot, hidden: bool) -> Result<(), RenderError> {
        self.state_mut(slot)?.hidden = hidden;
        Ok(())
    }

    fn focus(&mut self, slot: Slot) -> Result<(), RenderError> {
        self.state_mut(slot)?;
        self.focused = Some(slot);
        Ok(())
    }
}
