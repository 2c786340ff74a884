//! HTML rendering host.
//!
//! Produces one self-contained document: host chrome styles, the page's
//! injected styles, then the blocks in order. Bitmaps are embedded as PNG data
//! URIs so the page needs no further requests.

use super::{bitmap, Block, Page, RenderHost};
use crate::{Layout, Result};
use std::fmt::Write;

/// Styles the host needs for its own primitives (columns, progress bars, layout)
const HOST_STYLESHEET: &str = r#"
html, body { margin: 0; padding: 0; }
body { font-family: "Source Sans Pro", sans-serif; color: #31333f; }
.app { min-height: 100vh; }
.block-container { margin: 0 auto; padding: 1rem 1rem 6rem; box-sizing: border-box; }
.layout-centered { max-width: 46rem; }
.layout-wide { max-width: none; padding-left: 5rem; padding-right: 5rem; }
.columns { display: flex; gap: 1rem; }
.column { min-width: 0; }
.progress-row { margin: 0.5rem 0; }
.progress {
  height: 0.5rem;
  border-radius: 0.25rem;
  background: rgba(151, 166, 195, 0.25);
  overflow: hidden;
}
.progress-fill { height: 100%; background: #ff4b4b; }
.links a { color: #0068c9; }
"#;

/// Renders pages as HTML documents
#[derive(Debug, Clone, Default)]
pub struct HtmlHost;

impl HtmlHost {
    pub fn new() -> Self {
        HtmlHost
    }

    fn render_block(&self, out: &mut String, block: &Block) -> Result<()> {
        match block {
            Block::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                let _ = write!(out, "<h{0}>{1}</h{0}>", level, html_escape(text));
            }
            Block::Text { text, class } => {
                let _ = write!(out, "<p{}>{}</p>", class_attr(class.as_deref()), html_escape(text));
            }
            Block::Image {
                bitmap,
                width,
                alt,
                class,
            } => {
                let src = bitmap::png_data_uri(bitmap)?;
                let _ = write!(
                    out,
                    r#"<img{} src="{}" width="{}" alt="{}">"#,
                    class_attr(class.as_deref()),
                    src,
                    width,
                    html_escape(alt)
                );
            }
            Block::Links(links) => {
                let anchors: Vec<String> = links
                    .iter()
                    .map(|l| {
                        format!(
                            r#"<a href="{}">{}</a>"#,
                            html_escape(&l.url),
                            html_escape(&l.label)
                        )
                    })
                    .collect();
                let _ = write!(out, r#"<p class="links">{}</p>"#, anchors.join(" | "));
            }
            Block::Progress { value, label } => {
                let value = (*value).min(100);
                let _ = write!(
                    out,
                    concat!(
                        r#"<div class="progress-row">"#,
                        r#"<div class="progress" role="progressbar" "#,
                        r#"aria-valuemin="0" aria-valuemax="100" aria-valuenow="{0}">"#,
                        r#"<div class="progress-fill" style="width: {0}%"></div></div>"#,
                        r#"<p class="progress-label">{1}</p></div>"#
                    ),
                    value,
                    html_escape(label)
                );
            }
            Block::LinkButton {
                label,
                href,
                class,
                new_tab,
            } => {
                let target = if *new_tab {
                    r#" target="_blank" rel="noopener noreferrer""#
                } else {
                    ""
                };
                let classes = match class {
                    Some(c) => format!("btn {}", c),
                    None => "btn".to_string(),
                };
                let _ = write!(
                    out,
                    r#"<a href="{}"{}><button class="{}">{}</button></a>"#,
                    html_escape(href),
                    target,
                    html_escape(&classes),
                    html_escape(label)
                );
            }
            Block::Columns { weights, cells } => {
                out.push_str(r#"<div class="columns">"#);
                for (i, cell) in cells.iter().enumerate() {
                    let grow = weights.get(i).copied().unwrap_or(1);
                    let _ = write!(out, r#"<div class="column" style="flex: {} 1 0">"#, grow);
                    for b in cell {
                        self.render_block(out, b)?;
                    }
                    out.push_str("</div>");
                }
                out.push_str("</div>");
            }
            Block::Container { class, children } => {
                let _ = write!(out, "<section{}>", class_attr(Some(class.as_str())));
                for b in children {
                    self.render_block(out, b)?;
                }
                out.push_str("</section>");
            }
        }
        out.push('\n');
        Ok(())
    }
}

impl RenderHost for HtmlHost {
    fn render(&self, page: &Page) -> Result<String> {
        let cfg = &page.config;
        let layout_class = match cfg.layout {
            Layout::Centered => "layout-centered",
            Layout::Wide => "layout-wide",
        };

        let mut body = String::new();
        for block in &page.blocks {
            self.render_block(&mut body, block)?;
        }

        let mut styles = String::new();
        for css in &page.styles {
            let _ = writeln!(styles, "<style>{}</style>", css);
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="{icon}">
<style>{host_css}</style>
{styles}</head>
<body data-sidebar="{sidebar}">
<div class="app">
<main class="block-container {layout_class}">
{body}</main>
</div>
</body>
</html>
"#,
            title = html_escape(&cfg.page_title),
            icon = html_escape(&icon_href(&cfg.page_icon)),
            host_css = HOST_STYLESHEET,
            styles = styles,
            sidebar = cfg.initial_sidebar_state.as_str(),
            layout_class = layout_class,
            body = body,
        ))
    }
}

/// Emoji icons become an inline SVG favicon; anything that looks like a path
/// or URL is linked as-is.
fn icon_href(icon: &str) -> String {
    if icon.contains('/') || icon.contains('.') {
        return icon.to_string();
    }
    format!(
        "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22>\
         <text y=%22.9em%22 font-size=%2290%22>{}</text></svg>",
        icon
    )
}

fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(c) if !c.is_empty() => format!(r#" class="{}""#, html_escape(c)),
        _ => String::new(),
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
