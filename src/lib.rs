//! Portfolio
//!
//! Renders a single personal-portfolio page: a hero with profile photo and
//! title, an about blurb, a project grid, skill progress bars, a contact
//! button and a donation link, over a full-viewport background image.
//!
//! # Features
//!
//! - **Asset fallbacks**: a missing background becomes a gradient and a missing
//!   profile photo becomes a placeholder bitmap; rendering never fails on assets
//! - **Declarative pages**: the assembler emits [`rendering::Block`]s and a
//!   [`rendering::RenderHost`] turns them into a document
//! - **Page server**: a small blocking HTTP server re-renders on each request
//!
//! # Example
//!
//! ```no_run
//! use portfolio::{PageAssembler, RenderHost, rendering::HtmlHost};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = PageAssembler::default();
//! let page = assembler.assemble();
//! let html = HtmlHost::new().render(&page)?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod assembler;
pub mod assets;
pub mod content;
pub mod rendering;
pub mod server;
pub mod style;

pub use assembler::PageAssembler;
pub use content::Content;
pub use rendering::{Block, Page, RenderHost};
pub use server::PageServer;

/// Width of the main content column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Narrow, centered column
    #[default]
    Centered,
    /// Use the full browser width
    Wide,
}

/// Whether the (empty) sidebar starts open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    Expanded,
    #[default]
    Collapsed,
}

impl SidebarState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

/// Document-level settings for the rendered page
///
/// # Examples
///
/// ```
/// let cfg = portfolio::PageConfig::default();
/// assert_eq!(cfg.layout, portfolio::Layout::Centered);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Browser tab title
    pub page_title: String,
    /// Emoji or favicon URL
    pub page_icon: String,
    pub layout: Layout,
    pub initial_sidebar_state: SidebarState,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: "Saeed Angiz Portfolio".to_string(),
            page_icon: "🌱".to_string(),
            layout: Layout::Centered,
            initial_sidebar_state: SidebarState::Collapsed,
        }
    }
}

/// Locations of the optional image files, relative to the working directory by default
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    /// Full-page background image
    pub background: PathBuf,
    /// Profile photo shown in the hero section
    pub profile: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("summer_bg.jpg"),
            profile: PathBuf::from("me.jpg"),
        }
    }
}

/// Page server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Socket address to listen on; port 0 picks a free port
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8501".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_config() {
        let config = PageConfig::default();
        assert_eq!(config.page_title, "Saeed Angiz Portfolio");
        assert_eq!(config.initial_sidebar_state, SidebarState::Collapsed);
    }

    #[test]
    fn test_default_asset_paths() {
        let paths = AssetPaths::default();
        assert_eq!(paths.background, PathBuf::from("summer_bg.jpg"));
        assert_eq!(paths.profile, PathBuf::from("me.jpg"));
    }
}
