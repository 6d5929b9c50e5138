use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod build;
mod config;

#[derive(Parser)]
#[command(name = "mdhtml", version, about = "Render a small Markdown dialect to HTML")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    /// `<div>` fragment
    Html,
    /// Complete HTML page
    Page,
    /// Classified blocks as JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single Markdown file to stdout
    Render {
        /// Path to the .md file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: RenderFormat,

        /// Page title (page format only)
        #[arg(long)]
        title: Option<String>,
    },

    /// Convert a content directory into a static site
    Build {
        /// Path to the config file
        #[arg(long, default_value = config::CONFIG_FILE)]
        config: PathBuf,

        /// Content directory (overrides config)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            format,
            title,
        } => {
            handle_render(&file, format, title)?;
        }
        Commands::Build {
            config,
            content,
            out,
        } => {
            let mut site = config::load_config(&config)?;
            if let Some(content) = content {
                site.content_dir = content;
            }
            if let Some(out) = out {
                site.out_dir = out;
            }
            build::handle_build(&site, cli.quiet)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str, format: RenderFormat, title: Option<String>) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let output = match format {
        RenderFormat::Html => md_html::markdown_to_html(&content)
            .with_context(|| format!("Failed to convert '{}'", file))?,
        RenderFormat::Page => {
            let config = md_html::PageConfig {
                title,
                ..Default::default()
            };
            md_html::to_html_page(&content, &config)
                .with_context(|| format!("Failed to convert '{}'", file))?
        }
        RenderFormat::Json => {
            let blocks = md_html::blocks::parse_blocks(&content);
            serde_json::to_string_pretty(&blocks)?
        }
    };

    println!("{output}");
    Ok(())
}
