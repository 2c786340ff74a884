use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use portfolio::rendering::HtmlHost;
use portfolio::{
    AssetPaths, Content, Layout, PageAssembler, PageConfig, PageServer, RenderHost, ServerConfig,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio", version, about = "Render and serve a personal portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page over HTTP, re-rendering on every request
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Render the page once and write the HTML
    Render {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Background image (optional; a gradient is used if missing)
    #[arg(long, default_value = "summer_bg.jpg")]
    background: PathBuf,
    /// Profile photo (optional; a placeholder is used if missing)
    #[arg(long, default_value = "me.jpg")]
    profile: PathBuf,
    /// JSON file replacing the built-in page copy
    #[arg(long)]
    content: Option<PathBuf>,
    /// Use the full browser width instead of a centered column
    #[arg(long)]
    wide: bool,
}

impl PageArgs {
    fn assembler(self) -> anyhow::Result<PageAssembler> {
        let content = match &self.content {
            Some(path) => Content::from_json_file(path)
                .with_context(|| format!("loading content from {}", path.display()))?,
            None => Content::default(),
        };
        let config = PageConfig {
            layout: if self.wide { Layout::Wide } else { Layout::Centered },
            ..Default::default()
        };
        let paths = AssetPaths {
            background: self.background,
            profile: self.profile,
        };
        Ok(PageAssembler::new(config, paths, content))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Serve { addr, page } => {
            let config = ServerConfig { addr };
            PageServer::new(page.assembler()?)
                .bind(&config)
                .context("starting page server")?
                .run()?;
        }
        Command::Render { out, page } => {
            let html = HtmlHost::new()
                .render(&page.assembler()?.assemble())
                .context("rendering page")?;
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => std::io::stdout().write_all(html.as_bytes())?,
            }
        }
    }
    Ok(())
}
