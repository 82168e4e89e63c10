//! User configuration.
//!
//! Settings live in an optional `config.json`. The file is only ever read; a
//! missing file means defaults, a malformed one is a startup error.
//!
//! ```json
//! { "editor": "vim", "show_help_bar": true, "show_branch": true, "confirm_discard": true }
//! ```

use crate::core::dirs::default_config_path;
use crate::core::error::{Result, StagerError};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

/// Editor used when neither the environment nor the config names one
pub const FALLBACK_EDITOR: &str = "nano";

/// Environment variables consulted for the editor, in priority order
pub const EDITOR_VARS: [&str; 2] = ["EDITOR", "VISUAL"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Editor command used when `EDITOR` and `VISUAL` are unset
    pub editor: Option<String>,
    pub show_help_bar: bool,
    pub show_branch: bool,
    /// Ask before throwing away worktree changes
    pub confirm_discard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            show_help_bar: true,
            show_branch: true,
            confirm_discard: true,
        }
    }
}

impl Config {
    /// Load from `path` if given, else from the platform config directory
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) => Self::load_from(&path),
                None => {
                    log::debug!("No config directory available, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read one config file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(StagerError::config_read_failed(path, e)),
        };

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| StagerError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Resolve the editor command: `EDITOR`, then `VISUAL`, then the configured
    /// editor, then [`FALLBACK_EDITOR`]. Empty values are ignored.
    pub fn resolve_editor<F>(&self, lookup_env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        EDITOR_VARS
            .iter()
            .filter_map(|var| lookup_env(var))
            .chain(self.editor.clone())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
    }
}
