use serde::Deserialize;
use std::path::PathBuf;
use directories::ProjectDirs;
use anyhow::Result;
use std::fs;

/// Data file name used when `[general].data_file` is not set, resolved
/// against the working directory.
pub const DEFAULT_DATA_FILE: &str = "script_items.json";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LauncherConfig {
    #[serde(default = "default_python")]
    pub python: String,
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_python() -> String { "python3".to_string() }
fn default_shell() -> String { "bash".to_string() }

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            shell: default_shell(),
        }
    }
}

impl Config {
    pub fn data_file(&self) -> PathBuf {
        self.general
            .data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

pub fn load_config() -> Result<Config> {
    let proj_dirs = ProjectDirs::from("org", "traylaunch", "traylaunch");
    let config_path = if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.launcher.python, "python3");
        assert_eq!(config.launcher.shell, "bash");
        assert_eq!(config.data_file(), PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn overrides_are_honored() {
        let config: Config = toml::from_str(
            "[general]\n\
             data_file = \"/tmp/items.json\"\n\
             \n\
             [launcher]\n\
             python = \"python3.12\"\n",
        )
        .unwrap();
        assert_eq!(config.data_file(), PathBuf::from("/tmp/items.json"));
        assert_eq!(config.launcher.python, "python3.12");
        assert_eq!(config.launcher.shell, "bash");
    }
}
