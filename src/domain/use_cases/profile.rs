use crate::{
    entities::{
        user::User,
        view::{ProfileView, SocialLinkView},
    },
    settings::RenderConfig,
    utils::{links::safe_href, markdown::safe_markdown_to_html},
};

pub fn build_profile(user: &User, config: &RenderConfig) -> ProfileView {
    let non_blank = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

    ProfileView {
        name: user.name.clone(),
        title: user.title.clone(),
        location: user.location.clone(),
        about_html: safe_markdown_to_html(&user.about),
        picture_url: non_blank(&user.profile_picture)
            .unwrap_or_else(|| config.placeholders.avatar.clone()),
        cv_url: user.cv_url.as_deref().and_then(safe_href),
        social_links: user
            .social_links
            .iter()
            .filter_map(|link| {
                Some(SocialLinkView {
                    url: safe_href(&link.url)?,
                    platform: link.platform.to_lowercase(),
                    label: link.label(),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user::SocialLink;

    #[test]
    fn fills_placeholders_and_drops_empty_links() {
        let user = User {
            name: "Ada".into(),
            about: "Builds *engines*.".into(),
            cv_url: Some("  ".into()),
            social_links: vec![
                SocialLink { platform: "GitHub".into(), url: "https://github.com/ada".into(), username: None },
                SocialLink { platform: "X".into(), url: "".into(), username: Some("ada".into()) },
            ],
            ..Default::default()
        };
        let config = RenderConfig::default();

        let view = build_profile(&user, &config);

        assert_eq!(view.picture_url, config.placeholders.avatar);
        assert_eq!(view.cv_url, None);
        assert!(view.about_html.contains("<em>engines</em>"));
        assert_eq!(view.social_links.len(), 1);
        assert_eq!(view.social_links[0].platform, "github");
        assert_eq!(view.social_links[0].label, "GitHub");
    }

    #[test]
    fn script_links_never_reach_the_view() {
        let user = User {
            cv_url: Some("javascript:alert(1)".into()),
            social_links: vec![
                SocialLink { platform: "GitHub".into(), url: "javascript:alert(1)".into(), username: None },
                SocialLink { platform: "Blog".into(), url: "/blog".into(), username: None },
            ],
            ..Default::default()
        };

        let view = build_profile(&user, &RenderConfig::default());

        assert_eq!(view.cv_url, None);
        assert_eq!(view.social_links.len(), 1);
        assert_eq!(view.social_links[0].url, "/blog");
    }
}
