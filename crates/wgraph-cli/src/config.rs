//! `wgraph.toml` loading and engine selection.
//!
//! ```toml
//! [analysis]
//! engine = "bellman-ford"
//!
//! [output]
//! format = "json"
//! ```
//!
//! The file is read from `--config` when given, otherwise from
//! `./wgraph.toml`. A missing default file yields defaults; a missing
//! explicit file is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wgraph_core::Engine;

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WgConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Shortest-path engine used when `--engine` is not given.
    #[serde(default)]
    pub engine: Engine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `pretty`, `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
}

/// Load the configuration.
///
/// # Errors
///
/// Returns an error when an explicit `--config` file is missing, or when
/// the file that is found cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<WgConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = working_dir.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(WgConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<WgConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Pick the shortest-path engine.
///
/// Precedence: `--engine` flag, then `WGRAPH_ENGINE`, then the config file.
///
/// # Errors
///
/// Returns an error when `WGRAPH_ENGINE` names an unknown engine.
pub fn resolve_engine(flag: Option<Engine>, config: &WgConfig) -> Result<Engine> {
    let env_engine = std::env::var("WGRAPH_ENGINE").ok();
    resolve_engine_inner(flag, env_engine.as_deref(), config)
}

fn resolve_engine_inner(
    flag: Option<Engine>,
    env_engine: Option<&str>,
    config: &WgConfig,
) -> Result<Engine> {
    if let Some(engine) = flag {
        return Ok(engine);
    }
    if let Some(raw) = env_engine.filter(|raw| !raw.trim().is_empty()) {
        return raw
            .trim()
            .parse()
            .map_err(|msg: String| anyhow::anyhow!(msg))
            .context("Invalid WGRAPH_ENGINE");
    }
    Ok(config.analysis.engine)
}
