//! Page assembler: one straight-line pass from assets and content to a [`Page`].

use crate::assets::{load_profile_image, AssetCache};
use crate::content::{CallToAction, Content};
use crate::rendering::{Block, Page};
use crate::{style, AssetPaths, PageConfig};
use log::debug;
use std::sync::Arc;

/// Display width of the profile photo in CSS pixels
pub const PROFILE_WIDTH: u32 = 200;

/// Builds the portfolio page. Cheap to share; every call to
/// [`assemble`](PageAssembler::assemble) is an independent render pass.
#[derive(Debug, Clone)]
pub struct PageAssembler {
    config: PageConfig,
    paths: AssetPaths,
    content: Content,
    cache: Arc<AssetCache>,
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new(PageConfig::default(), AssetPaths::default(), Content::default())
    }
}

impl PageAssembler {
    /// Create an assembler backed by the process-wide background cache
    pub fn new(config: PageConfig, paths: AssetPaths, content: Content) -> Self {
        Self {
            config,
            paths,
            content,
            cache: AssetCache::shared(),
        }
    }

    /// Use a private background cache instead of the shared one
    pub fn with_cache(mut self, cache: Arc<AssetCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Run one render pass. Missing assets degrade to fallbacks; this never fails.
    pub fn assemble(&self) -> Page {
        let mut page = Page::new(self.config.clone());

        let background = self.cache.background(&self.paths.background);
        page.inject_style(style::background_rule(background.as_deref()));
        page.inject_style(style::PORTFOLIO_STYLESHEET);

        let c = &self.content;
        page.push(self.hero());
        page.push(Block::container(
            "card",
            vec![Block::heading(3, "🌞 About Me"), Block::text(c.about.as_str())],
        ));
        page.push(self.projects());
        page.push(self.skills());
        page.push(call_to_action("card", &c.contact, "btn-email", false));
        page.push(call_to_action(
            "card card-centered",
            &c.donation,
            "btn-donate",
            true,
        ));
        page.push(Block::styled_text(c.footer.as_str(), "footer"));

        debug!(
            "assembled page: {} blocks, background {}",
            page.blocks.len(),
            if background.is_some() { "image" } else { "gradient" }
        );
        page
    }

    fn hero(&self) -> Block {
        let profile = &self.content.profile;
        let center = vec![
            Block::Image {
                bitmap: load_profile_image(&self.paths.profile),
                width: PROFILE_WIDTH,
                alt: profile.name.clone(),
                class: Some("profile-img".to_string()),
            },
            Block::styled_text(profile.name.as_str(), "main-title"),
            Block::styled_text(profile.tagline.as_str(), "sub-title"),
        ];
        Block::Columns {
            weights: vec![1, 2, 1],
            cells: vec![Vec::new(), center, Vec::new()],
        }
    }

    fn projects(&self) -> Block {
        let cells = self
            .content
            .projects
            .iter()
            .map(|p| {
                vec![
                    Block::styled_text(p.title.as_str(), "project-title"),
                    Block::styled_text(p.subtitle.as_str(), "project-subtitle"),
                    Block::Links(p.links.clone()),
                ]
            })
            .collect();
        Block::container(
            "card",
            vec![Block::heading(3, "🚀 Featured Projects"), Block::columns(cells)],
        )
    }

    fn skills(&self) -> Block {
        let mut children = vec![Block::heading(3, "🛠️ Skills")];
        children.extend(self.content.skills.iter().map(|s| Block::Progress {
            value: s.percent,
            label: s.label(),
        }));
        Block::container("card", children)
    }
}

fn call_to_action(class: &str, cta: &CallToAction, button_class: &str, new_tab: bool) -> Block {
    Block::container(
        class,
        vec![
            Block::heading(3, cta.heading.as_str()),
            Block::text(cta.blurb.as_str()),
            Block::LinkButton {
                label: cta.button_label.clone(),
                href: cta.href.clone(),
                class: Some(button_class.to_string()),
                new_tab,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn assembler_without_assets() -> PageAssembler {
        let paths = AssetPaths {
            background: PathBuf::from("/nonexistent/summer_bg.jpg"),
            profile: PathBuf::from("/nonexistent/me.jpg"),
        };
        PageAssembler::new(PageConfig::default(), paths, Content::default())
            .with_cache(Arc::new(AssetCache::new()))
    }

    #[test]
    fn sections_in_fixed_order() {
        let page = assembler_without_assets().assemble();
        assert_eq!(page.blocks.len(), 7);
        assert!(matches!(page.blocks[0], Block::Columns { .. }));
        match &page.blocks[6] {
            Block::Text { class, .. } => assert_eq!(class.as_deref(), Some("footer")),
            other => panic!("unexpected footer block {:?}", other),
        }
    }

    #[test]
    fn background_rule_precedes_section_styles() {
        let page = assembler_without_assets().assemble();
        assert_eq!(page.styles.len(), 2);
        assert!(page.styles[0].contains(style::GRADIENT_FALLBACK));
    }

    #[test]
    fn skills_follow_content_order() {
        let page = assembler_without_assets().assemble();
        let labels: Vec<String> = page.blocks[3]
            .children()
            .into_iter()
            .filter_map(|b| match b {
                Block::Progress { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.first().map(String::as_str), Some("Python 40%"));
        assert_eq!(labels.last().map(String::as_str), Some("Data Science 35%"));
    }

    #[test]
    fn donation_opens_in_new_tab() {
        let page = assembler_without_assets().assemble();
        let button = page.blocks[5]
            .children()
            .into_iter()
            .find_map(|b| match b {
                Block::LinkButton { new_tab, href, .. } => Some((*new_tab, href.clone())),
                _ => None,
            });
        let (new_tab, href) = button.expect("donation button");
        assert!(new_tab);
        assert!(href.starts_with("https://www.paypal.com/donate/"));
    }
}
