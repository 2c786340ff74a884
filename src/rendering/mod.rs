//! Rendering host: declarative page content and the trait that turns it into a document.

pub mod bitmap;
pub mod html;

pub use html::HtmlHost;

use crate::{PageConfig, Result};
use image::DynamicImage;

/// One piece of page content.
///
/// Blocks describe what to show, not how; the host decides on markup. Text
/// fields are plain text and are escaped by the host.
#[derive(Debug, Clone)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
        class: Option<String>,
    },
    Image {
        bitmap: DynamicImage,
        /// Display width in CSS pixels
        width: u32,
        alt: String,
        class: Option<String>,
    },
    /// Inline links separated by `|`
    Links(Vec<crate::content::Link>),
    /// A labelled progress bar, `value` in percent
    Progress {
        value: u8,
        label: String,
    },
    /// A link styled as a button
    LinkButton {
        label: String,
        href: String,
        class: Option<String>,
        new_tab: bool,
    },
    /// Side-by-side cells sized by relative `weights`
    Columns {
        weights: Vec<u32>,
        cells: Vec<Vec<Block>>,
    },
    Container {
        class: String,
        children: Vec<Block>,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled_text(text: impl Into<String>, class: &str) -> Self {
        Block::Text {
            text: text.into(),
            class: Some(class.to_string()),
        }
    }

    pub fn container(class: &str, children: Vec<Block>) -> Self {
        Block::Container {
            class: class.to_string(),
            children,
        }
    }

    /// Equal-width columns
    pub fn columns(cells: Vec<Vec<Block>>) -> Self {
        Block::Columns {
            weights: vec![1; cells.len()],
            cells,
        }
    }

    /// Direct children for containers and columns, flattened across cells
    pub fn children(&self) -> Vec<&Block> {
        match self {
            Block::Container { children, .. } => children.iter().collect(),
            Block::Columns { cells, .. } => cells.iter().flatten().collect(),
            _ => Vec::new(),
        }
    }
}

/// The output of one render pass: page settings, global styles and content.
#[derive(Debug, Clone)]
pub struct Page {
    pub config: PageConfig,
    /// Injected in order after the host's own styles
    pub styles: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            styles: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn inject_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// All injected styles joined as one stylesheet
    pub fn stylesheet(&self) -> String {
        self.styles.join("\n")
    }
}

/// Turns an assembled page into a servable document
pub trait RenderHost {
    /// Render the whole page
    fn render(&self, page: &Page) -> Result<String>;

    /// MIME type of rendered documents
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_default_to_equal_weights() {
        let b = Block::columns(vec![vec![Block::text("a")], vec![], vec![]]);
        match b {
            Block::Columns { weights, .. } => assert_eq!(weights, vec![1, 1, 1]),
            _ => panic!("unexpected"),
        }
    }

    #[test]
    fn page_collects_styles_in_order() {
        let mut page = Page::new(PageConfig::default());
        page.inject_style("a{}");
        page.inject_style("b{}");
        assert_eq!(page.stylesheet(), "a{}\nb{}");
    }
}
