use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quat_core::{ButtonAssignment, Color, Edgework, Layout, RoleAssignment};
use serde::Deserialize;

/// Environment variable naming the puzzle config when `--config` is absent.
pub const CONFIG_ENV: &str = "QUAT_CONFIG";

/// Puzzle file: the bomb's edgework and, optionally, a fixed layout.
#[derive(Debug, Default, Deserialize)]
pub struct PuzzleConfig {
    #[serde(default)]
    pub edgework: Edgework,
    pub layout: Option<LayoutConfig>,
}

/// Colors by name, case-insensitive.
#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    /// Role colors in order real, i, j, k.
    pub roles: Vec<String>,
    /// Colors of numbered buttons 0 through 9.
    pub buttons: Vec<String>,
    pub submit: String,
    pub clear: String,
}

impl LayoutConfig {
    pub fn build(&self) -> quat_core::Result<Layout> {
        let roles = RoleAssignment::from_slice(&parse_colors(&self.roles)?)?;
        let buttons = ButtonAssignment::from_slice(&parse_colors(&self.buttons)?)?;
        Ok(Layout::new(
            roles,
            buttons,
            self.submit.parse()?,
            self.clear.parse()?,
        ))
    }
}

fn parse_colors(names: &[String]) -> quat_core::Result<Vec<Color>> {
    names.iter().map(|n| n.parse()).collect()
}

pub fn parse(content: &str) -> Result<PuzzleConfig> {
    toml::from_str(content).context("invalid puzzle config")
}

/// Resolve the config path from the flag or environment and load it.
/// With neither set, the bomb has blank edgework.
pub fn load(flag: Option<&Path>) -> Result<PuzzleConfig> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    let Some(path) = path else {
        tracing::warn!("no puzzle config given, using blank edgework");
        return Ok(PuzzleConfig::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!("loaded puzzle config from {}", path.display());
    Ok(config)
}
