//! Platform-specific location of the configuration directory.

use std::path::PathBuf;

const APP_DIR: &str = "git-stager";

/// Directory holding `config.json`, or `None` when no home directory can be found
pub fn get_config_directory() -> Option<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?,
        "macos" => dirs::home_dir()?.join("Library/Application Support"),
        _ => dirs::config_dir()?,
    };

    Some(base.join(APP_DIR))
}

/// Default path of the configuration file
pub fn default_config_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join("config.json"))
}
