use std::fmt;

use crate::errors::RenderError;

/// Named insertion points the page is populated through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    ProfileName,
    ProfileTitle,
    ProfileLocation,
    ProfileAbout,
    ProfilePicture,
    CvLink,
    SocialLinks,
    StatSkills,
    StatCategories,
    StatExperience,
    SkillsContainer,
    Modal,
    ModalClose,
    ModalImage,
    ModalTitle,
    ModalCategory,
    ModalDescription,
    ModalRatingBar,
    ModalRatingText,
    ModalStartDate,
    ModalProjects,
    ModalResources,
}

impl Slot {
    pub const ALL: [Slot; 22] = [
        Slot::ProfileName,
        Slot::ProfileTitle,
        Slot::ProfileLocation,
        Slot::ProfileAbout,
        Slot::ProfilePicture,
        Slot::CvLink,
        Slot::SocialLinks,
        Slot::StatSkills,
        Slot::StatCategories,
        Slot::StatExperience,
        Slot::SkillsContainer,
        Slot::Modal,
        Slot::ModalClose,
        Slot::ModalImage,
        Slot::ModalTitle,
        Slot::ModalCategory,
        Slot::ModalDescription,
        Slot::ModalRatingBar,
        Slot::ModalRatingText,
        Slot::ModalStartDate,
        Slot::ModalProjects,
        Slot::ModalResources,
    ];

    /// Element id of the anchor.
    pub const fn id(&self) -> &'static str {
        match self {
            Slot::ProfileName => "profile-name",
            Slot::ProfileTitle => "profile-title",
            Slot::ProfileLocation => "profile-location",
            Slot::ProfileAbout => "profile-about",
            Slot::ProfilePicture => "profile-picture",
            Slot::CvLink => "cv-link",
            Slot::SocialLinks => "social-links",
            Slot::StatSkills => "stat-skills",
            Slot::StatCategories => "stat-categories",
            Slot::StatExperience => "stat-experience",
            Slot::SkillsContainer => "skills-container",
            Slot::Modal => "skill-modal",
            Slot::ModalClose => "modal-close",
            Slot::ModalImage => "modal-image",
            Slot::ModalTitle => "modal-title",
            Slot::ModalCategory => "modal-category",
            Slot::ModalDescription => "modal-description",
            Slot::ModalRatingBar => "modal-rating-bar",
            Slot::ModalRatingText => "modal-rating-text",
            Slot::ModalStartDate => "modal-start-date",
            Slot::ModalProjects => "modal-projects",
            Slot::ModalResources => "modal-resources",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Content appended under a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Already sanitized markup.
    Html(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) | Node::Html(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Descendant elements (self included) carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.find_by_class(class, found);
            }
        }
    }
}

/// Something the page can be drawn into. Every mutation names its slot and
/// fails with [`RenderError::MissingAnchor`] when the slot does not exist.
pub trait RenderTarget {
    fn replace_children(&mut self, slot: Slot, children: Vec<Node>) -> Result<(), RenderError>;

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) -> Result<(), RenderError>;

    fn set_hidden(&mut self, slot: Slot, hidden: bool) -> Result<(), RenderError>;

    fn focus(&mut self, slot: Slot) -> Result<(), RenderError>;

    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), RenderError> {
        self.replace_children(slot, vec![Node::Text(text.to_string())])
    }

    fn set_html(&mut self, slot: Slot, html: &str) -> Result<(), RenderError> {
        self.replace_children(slot, vec![Node::Html(html.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_are_unique() {
        let mut ids: Vec<_> = Slot::ALL.iter().map(Slot::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Slot::ALL.len());
    }

    #[test]
    fn text_content_flattens_children() {
        let node: Node = Element::new("div")
            .text("a")
            .child(Element::new("span").class("x y").text("b"))
            .into();

        assert_eq!(node.text_content(), "ab");

        let mut found = Vec::new();
        node.find_by_class("y", &mut found);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag, "span");
    }
}
