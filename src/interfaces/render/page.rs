//! Applies view models to a [`RenderTarget`].

use crate::{
    entities::view::{GridView, ModalView, ProfileView, SkillCardView, SkillSectionView, StatsView},
    errors::RenderError,
    render::target::{Element, Node, RenderTarget, Slot},
    use_cases::stats::experience_label,
};

/// Logs a failed render step and carries on.
pub fn attempt(step: &str, result: Result<(), RenderError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Skipped rendering {}: {}", step, e);
            false
        }
    }
}

pub fn render_profile(target: &mut dyn RenderTarget, profile: &ProfileView) {
    attempt("profile name", target.set_text(Slot::ProfileName, &profile.name));
    attempt("profile title", target.set_text(Slot::ProfileTitle, &profile.title));
    attempt("profile location", target.set_text(Slot::ProfileLocation, &profile.location));
    attempt("profile about", target.set_html(Slot::ProfileAbout, &profile.about_html));
    attempt("profile picture", render_picture(target, profile));
    attempt("cv link", render_cv_link(target, profile.cv_url.as_deref()));
    attempt("social links", render_social_links(target, profile));
}

fn render_picture(target: &mut dyn RenderTarget, profile: &ProfileView) -> Result<(), RenderError> {
    target.set_attribute(Slot::ProfilePicture, "src", &profile.picture_url)?;
    target.set_attribute(Slot::ProfilePicture, "alt", &profile.name)
}

fn render_cv_link(target: &mut dyn RenderTarget, cv_url: Option<&str>) -> Result<(), RenderError> {
    match cv_url {
        Some(url) => {
            target.set_attribute(Slot::CvLink, "href", url)?;
            target.set_attribute(Slot::CvLink, "download", "")?;
            target.set_hidden(Slot::CvLink, false)
        }
        None => target.set_hidden(Slot::CvLink, true),
    }
}

fn render_social_links(target: &mut dyn RenderTarget, profile: &ProfileView) -> Result<(), RenderError> {
    let links = profile
        .social_links
        .iter()
        .map(|link| {
            Node::from(Element::new("a")
                .class(format!("social-link social-{}", link.platform))
                .attr("href", link.url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("aria-label", link.label.as_str())
                .text(link.label.as_str()))
        })
        .collect();

    target.replace_children(Slot::SocialLinks, links)
}

pub fn render_stats(target: &mut dyn RenderTarget, stats: &StatsView) {
    attempt("skill count", target.set_text(Slot::StatSkills, &stats.skill_count.to_string()));
    attempt(
        "category count",
        target.set_text(Slot::StatCategories, &stats.category_count.to_string()),
    );
    attempt(
        "experience",
        target.set_text(Slot::StatExperience, &experience_label(stats.experience_years)),
    );
}

pub fn render_grid(target: &mut dyn RenderTarget, grid: &GridView, empty_text: &str) -> Result<(), RenderError> {
    let children: Vec<Node> = if grid.sections.is_empty() {
        vec![Element::new("p").class("empty-state").text(empty_text).into()]
    } else {
        grid.sections.iter().map(section_node).collect()
    };

    target.replace_children(Slot::SkillsContainer, children)
}

fn section_node(section: &SkillSectionView) -> Node {
    Element::new("section")
        .class("skill-category")
        .attr("data-category", section.key.as_str())
        .child(
            Element::new("h2")
                .class("category-title")
                .text(section.title.as_str())
                .child(
                    Element::new("span")
                        .class("category-count")
                        .text(format!(" ({})", section.count())),
                ),
        )
        .child(
            Element::new("div")
                .class("skills-grid")
                .children(section.cards.iter().map(card_node)),
        )
        .into()
}

fn card_node(card: &SkillCardView) -> Node {
    Element::new("article")
        .class("skill-card")
        .attr("data-skill-id", card.id.as_str())
        .attr("role", "button")
        .attr("tabindex", "0")
        .child(
            Element::new("img")
                .class("skill-image")
                .attr("src", card.image_url.as_str())
                .attr("alt", card.name.as_str())
                .attr("loading", "lazy"),
        )
        .child(
            Element::new("div")
                .class("skill-body")
                .child(Element::new("h3").class("skill-name").text(card.name.as_str()))
                .child(
                    Element::new("span")
                        .class("skill-category")
                        .text(card.category_label.as_str()),
                )
                .child(
                    Element::new("span")
                        .class(format!("skill-rating rating-{}", card.rating_label.to_string().to_lowercase()))
                        .text(card.rating_label.to_string()),
                )
                .child(
                    Element::new("p")
                        .class("skill-description")
                        .text(card.excerpt.as_str()),
                ),
        )
        .into()
}

/// Writes every modal field. Lists are replaced wholesale.
pub fn render_modal(target: &mut dyn RenderTarget, modal: &ModalView) -> Result<(), RenderError> {
    target.set_attribute(Slot::ModalImage, "src", &modal.image_url)?;
    target.set_attribute(Slot::ModalImage, "alt", &modal.title)?;
    target.set_text(Slot::ModalTitle, &modal.title)?;
    target.set_text(Slot::ModalCategory, &modal.category)?;
    target.set_text(Slot::ModalDescription, &modal.description)?;
    target.set_attribute(
        Slot::ModalRatingBar,
        "style",
        &format!("width: {}%", modal.rating_percent),
    )?;
    target.set_text(Slot::ModalRatingText, &modal.rating_text)?;
    target.set_text(Slot::ModalStartDate, &modal.start_date)?;

    let projects = if modal.projects.is_empty() {
        vec![empty_item(&modal.no_projects_text)]
    } else {
        modal
            .projects
            .iter()
            .map(|p| Node::from(Element::new("li").text(p.as_str())))
            .collect()
    };
    target.replace_children(Slot::ModalProjects, projects)?;

    let resources = if modal.resources.is_empty() {
        vec![empty_item(&modal.no_resources_text)]
    } else {
        modal
            .resources
            .iter()
            .map(|r| {
                Node::from(
                    Element::new("li").child(
                        Element::new("a")
                            .attr("href", r.url.as_str())
                            .attr("target", "_blank")
                            .attr("rel", "noopener noreferrer")
                            .text(r.name.as_str()),
                    ),
                )
            })
            .collect()
    };
    target.replace_children(Slot::ModalResources, resources)
}

fn empty_item(text: &str) -> Node {
    Element::new("li").class("empty").text(text).into()
}

/// Replaces the main content with a single diagnostic.
pub fn render_malformed(target: &mut dyn RenderTarget, message: &str) -> Result<(), RenderError> {
    target.replace_children(
        Slot::SkillsContainer,
        vec![Element::new("div")
            .class("error-message")
            .attr("role", "alert")
            .text(message)
            .into()],
    )
}
