//! Page copy: profile, projects, skills and call-to-action links.
//!
//! Everything shown on the page lives here as plain data so the assembler only
//! deals with layout. `Content::default()` is the published portfolio; a JSON
//! file with the same shape can replace it at startup.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Number of skill rows the page renders
pub const SKILL_COUNT: usize = 6;

/// Number of project cards in the grid
pub const PROJECT_COUNT: usize = 3;

/// Links under each project card
pub const LINKS_PER_PROJECT: usize = 2;

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Name and one-line tagline shown in the hero section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
}

/// An outbound link rendered as an anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// One card in the projects grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<Link>,
}

impl Project {
    /// A project whose repository and demo live at the same address
    fn with_repo(title: &str, subtitle: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            links: vec![Link::new("GitHub", url), Link::new("Live Demo", url)],
        }
    }
}

/// A skill and its self-assessed proficiency in percent (0..=100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

impl Skill {
    pub fn new(name: &str, percent: u8) -> Self {
        Self {
            name: name.to_string(),
            percent,
        }
    }

    /// Text shown under the progress bar, e.g. `Python 40%`
    pub fn label(&self) -> String {
        format!("{} {}%", self.name, self.percent)
    }
}

/// A card with a short blurb and a single button link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub heading: String,
    pub blurb: String,
    pub button_label: String,
    pub href: String,
}

/// All copy rendered on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub about: String,
    pub projects: Vec<Project>,
    /// Rendered in this order
    pub skills: Vec<Skill>,
    pub contact: CallToAction,
    pub donation: CallToAction,
    pub footer: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Saeed Angiz".to_string(),
                tagline: "Data Scientist 🧬 | ML Engineer 🤖 | Junior Python Developer 🌴"
                    .to_string(),
            },
            about: "I turn data into actionable insights and love building shiny ML-powered apps. \
                    When I’m not coding, you’ll find me on a beach volleyball court or \
                    experimenting with new coffee brews."
                .to_string(),
            projects: vec![
                Project::with_repo(
                    "🏖️ Beach Buddy – Weather & Tide Forecast",
                    "Streamlit + OpenWeather API",
                    "https://github.com/topics/openweathermap-api",
                ),
                Project::with_repo(
                    "🌊 WaveNet Music Generator",
                    "TensorFlow + GANs",
                    "https://github.com/ShichengChen/wavenet-generate-music",
                ),
                Project::with_repo(
                    "🌠 Personal GitHub",
                    "My GitHub",
                    "https://github.com/SaeedAngiz1",
                ),
            ],
            skills: vec![
                Skill::new("Python", 40),
                Skill::new("Machine Learning", 10),
                Skill::new("Deep Learning", 10),
                Skill::new("Streamlit", 50),
                Skill::new("Wordpress", 40),
                Skill::new("Data Science", 35),
            ],
            contact: CallToAction {
                heading: "📬 Get In Touch".to_string(),
                blurb: "Feel free to reach out for collaborations or just a friendly chat."
                    .to_string(),
                button_label: "Send Email".to_string(),
                href: "mailto:angizsaeed@example.com".to_string(),
            },
            donation: CallToAction {
                heading: "☕ Support My Work".to_string(),
                blurb: "If you like what I do, consider buying me a coffee!".to_string(),
                button_label: "💖 Donate via PayPal".to_string(),
                href: "https://www.paypal.com/donate/?hosted_button_id=FYKQWTSW6TL62".to_string(),
            },
            footer: "Made with ❤️ and Rust | © 2026 Saeed Angiz".to_string(),
        }
    }
}

impl Content {
    /// Load content from a JSON file and validate it.
    ///
    /// Missing top-level fields fall back to the default portfolio copy.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read content file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(data)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the page shape, percentages and outbound links.
    ///
    /// The layout expects exactly six skills and three projects with two
    /// links each. Links must be `http`, `https` or `mailto`.
    pub fn validate(&self) -> Result<()> {
        if self.skills.len() != SKILL_COUNT {
            return Err(Error::ConfigError(format!(
                "expected {} skills, found {}",
                SKILL_COUNT,
                self.skills.len()
            )));
        }
        if self.projects.len() != PROJECT_COUNT {
            return Err(Error::ConfigError(format!(
                "expected {} projects, found {}",
                PROJECT_COUNT,
                self.projects.len()
            )));
        }
        for project in &self.projects {
            if project.links.len() != LINKS_PER_PROJECT {
                return Err(Error::ConfigError(format!(
                    "project '{}' has {} links, expected {}",
                    project.title,
                    project.links.len(),
                    LINKS_PER_PROJECT
                )));
            }
        }

        for skill in &self.skills {
            if skill.percent > 100 {
                return Err(Error::ConfigError(format!(
                    "skill '{}' has proficiency {}%, expected 0..=100",
                    skill.name, skill.percent
                )));
            }
        }

        let links = self
            .projects
            .iter()
            .flat_map(|p| p.links.iter().map(|l| l.url.as_str()))
            .chain([self.contact.href.as_str(), self.donation.href.as_str()]);
        for link in links {
            let url = Url::parse(link)
                .map_err(|e| Error::ConfigError(format!("invalid link '{}': {}", link, e)))?;
            if !ALLOWED_SCHEMES.contains(&url.scheme()) {
                return Err(Error::ConfigError(format!(
                    "link '{}' uses scheme '{}', expected one of {}",
                    link,
                    url.scheme(),
                    ALLOWED_SCHEMES.join(", ")
                )));
            }
        }
        Ok(())
    }
}
