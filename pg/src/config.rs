//! Configuration for promptgen

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Layout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing `template/`
    #[serde(default = "default_root")]
    pub tool_root: PathBuf,

    /// Directory containing `prompt/` and `generated_prompt/`
    #[serde(default = "default_root")]
    pub work_root: PathBuf,

    /// Where published commands are copied
    #[serde(default = "default_destination")]
    pub destination: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_destination() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude")
        .join("commands")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool_root: default_root(),
            work_root: default_root(),
            destination: default_destination(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            Some(PathBuf::from(".promptgen.yml")),
            dirs::config_dir().map(|p| p.join("promptgen").join("promptgen.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Replace any value given on the command line
    pub fn with_overrides(
        mut self,
        tool_root: Option<PathBuf>,
        work_root: Option<PathBuf>,
        destination: Option<PathBuf>,
    ) -> Self {
        if let Some(tool_root) = tool_root {
            self.tool_root = tool_root;
        }
        if let Some(work_root) = work_root {
            self.work_root = work_root;
        }
        if let Some(destination) = destination {
            self.destination = destination;
        }
        self
    }

    pub fn layout(&self) -> Layout {
        Layout::new(&self.tool_root, &self.work_root, &self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_destination() {
        let config = Config::default();
        assert!(config.destination.ends_with(".claude/commands"));
        assert_eq!(config.tool_root, PathBuf::from("."));
    }

    #[test]
    fn test_load_explicit_file_with_partial_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("promptgen.yml");
        std::fs::write(&path, "tool_root: /opt/prompts\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tool_root, PathBuf::from("/opt/prompts"));
        assert_eq!(config.work_root, PathBuf::from("."));
        assert_eq!(config.destination, default_destination());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(&temp.path().join("nope.yml"))).is_err());
    }

    #[test]
    fn test_overrides_and_layout() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/tool")), None, Some(PathBuf::from("/dest")));
        let layout = config.layout();
        assert_eq!(layout.template_dir(), PathBuf::from("/tool/template"));
        assert_eq!(layout.prompt_dir(), PathBuf::from("./prompt"));
        assert_eq!(layout.destination(), Path::new("/dest"));
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
