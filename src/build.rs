//! `mdhtml build`: convert a content directory into a static site.
//!
//! Every `.md` file becomes an `.html` page at the mirrored relative path.
//! Every other file is copied across unchanged.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use md_html::render_html::escape_html;
use md_html::{PageConfig, extract_title, markdown_to_html, to_html_page};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::SiteConfig;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
const FALLBACK_TITLE: &str = "Untitled";

/// Counts of what a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub copied: usize,
}

pub fn handle_build(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    let content_dir = &config.content_dir;
    let out_dir = &config.out_dir;

    if !content_dir.is_dir() {
        bail!("Content directory '{}' does not exist", content_dir.display());
    }

    if content_dir.starts_with(out_dir) {
        bail!(
            "Output directory '{}' must not contain the content directory",
            out_dir.display()
        );
    }

    let template = match &config.template {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read template '{}'", path.display()))?,
        ),
        None => None,
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;

    let mut report = BuildReport::default();

    let walker = WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        // Output nested inside the content directory must not be re-read.
        .filter_entry(|e| !e.path().starts_with(out_dir));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk '{}'", content_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        let relative = source
            .strip_prefix(content_dir)
            .with_context(|| format!("'{}' is outside the content directory", source.display()))?;

        if is_markdown(source) {
            let dest = out_dir.join(relative).with_extension("html");
            build_page(source, &dest, config, template.as_deref())?;
            report.pages += 1;
            if !quiet {
                println!("  {} {} → {}", "page".dimmed(), relative.display(), dest.display());
            }
        } else {
            let dest = out_dir.join(relative);
            ensure_parent(&dest)?;
            fs::copy(source, &dest).with_context(|| {
                format!("Failed to copy '{}' to '{}'", source.display(), dest.display())
            })?;
            report.copied += 1;
            log::debug!("copied {} to {}", source.display(), dest.display());
        }
    }

    if !quiet {
        println!(
            "{} {} pages, {} files copied → {}",
            "Built".green().bold(),
            report.pages,
            report.copied,
            out_dir.display(),
        );
    }

    Ok(report)
}

fn build_page(
    source: &Path,
    dest: &Path,
    config: &SiteConfig,
    template: Option<&str>,
) -> Result<()> {
    let markdown = fs::read_to_string(source)
        .with_context(|| format!("Failed to read '{}'", source.display()))?;

    let html = render_page(&markdown, config, template)
        .with_context(|| format!("Failed to convert '{}'", source.display()))?;

    ensure_parent(dest)?;
    fs::write(dest, html).with_context(|| format!("Failed to write '{}'", dest.display()))?;
    Ok(())
}

/// Render one Markdown document as a full page, through `template` if given.
pub fn render_page(
    markdown: &str,
    config: &SiteConfig,
    template: Option<&str>,
) -> md_html::Result<String> {
    match template {
        Some(template) => {
            let content = markdown_to_html(markdown)?;
            let title = extract_title(markdown).unwrap_or_else(|| FALLBACK_TITLE.to_string());
            Ok(apply_template(template, &escape_html(&title), &content))
        }
        None => {
            let page_config = PageConfig {
                title: None,
                lang: Some(config.lang.clone()),
                stylesheet: config.stylesheet.clone(),
            };
            to_html_page(markdown, &page_config)
        }
    }
}

/// Substitute `{{ Title }}` and `{{ Content }}` in `template`.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_placeholders_are_replaced() {
        let out = apply_template(
            "<title>{{ Title }}</title><main>{{ Content }}</main>",
            "Home",
            "<div><p>hi</p></div>",
        );
        assert_eq!(out, "<title>Home</title><main><div><p>hi</p></div></main>");
    }

    #[test]
    fn template_page_uses_first_heading() {
        let html = render_page(
            "# Welcome\n\nBody",
            &SiteConfig::default(),
            Some("{{ Title }}|{{ Content }}"),
        )
        .unwrap();
        assert_eq!(html, "Welcome|<div><h1>Welcome</h1><p>Body</p></div>");
    }

    #[test]
    fn template_title_is_escaped() {
        let html = render_page("# A & B", &SiteConfig::default(), Some("{{ Title }}")).unwrap();
        assert_eq!(html, "A &amp; B");

        let page = render_page("# A & B", &SiteConfig::default(), None).unwrap();
        assert!(page.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn default_page_uses_config_lang() {
        let config = SiteConfig {
            lang: "nl".to_string(),
            ..Default::default()
        };
        let html = render_page("text", &config, None).unwrap();
        assert!(html.contains(r#"<html lang="nl">"#));
    }

    #[test]
    fn markdown_extension_check() {
        assert!(is_markdown(Path::new("a/b/index.md")));
        assert!(is_markdown(Path::new("README.MD")));
        assert!(!is_markdown(Path::new("style.css")));
        assert!(!is_markdown(Path::new("md")));
    }
}
