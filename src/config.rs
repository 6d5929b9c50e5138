use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "mdhtml.json";

/// Site build settings read from `mdhtml.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            out_dir: default_out_dir(),
            template: None,
            lang: default_lang(),
            stylesheet: None,
        }
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}
fn default_out_dir() -> PathBuf {
    PathBuf::from("public")
}
fn default_lang() -> String {
    "en".to_string()
}

/// Load config from `path`, or return defaults if the file is missing.
///
/// Relative directories in the file are resolved against the file's parent.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(SiteConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut config: SiteConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::debug!("Using config from: {}", path.display());

    if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        config.content_dir = base.join(&config.content_dir);
        config.out_dir = base.join(&config.out_dir);
        config.template = config.template.map(|t| base.join(t));
    }

    Ok(config)
}
