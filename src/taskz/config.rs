use crate::error::{Result, TaskzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Configuration for taskz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// Task file; relative paths are resolved against the data directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Whether the saved list is loaded when a session starts
    #[serde(default = "default_load_on_start")]
    pub load_on_start: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_load_on_start() -> bool {
    true
}

impl Default for TaskzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            load_on_start: default_load_on_start(),
        }
    }
}

impl TaskzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskzError::Io)?;
        let config: TaskzConfig = serde_json::from_str(&content).map_err(TaskzError::Config)?;
        Ok(config)
    }

    /// Load config, writing the defaults out first if the directory has none yet
    pub fn load_or_init<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        if config_dir.join(CONFIG_FILENAME).exists() {
            return Self::load(config_dir);
        }
        let config = Self::default();
        config.save(config_dir)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskzError::Config)?;
        fs::write(config_path, content).map_err(TaskzError::Io)?;
        Ok(())
    }

    /// Absolute location of the task file for a given data directory
    pub fn data_file_in<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            data_dir.as_ref().join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TaskzConfig::default();
        assert_eq!(config.data_file, PathBuf::from("tasks.txt"));
        assert!(config.load_on_start);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TaskzConfig::load(dir.path()).unwrap();
        assert_eq!(config, TaskzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = TaskzConfig {
            data_file: PathBuf::from("work.txt"),
            load_on_start: false,
        };
        config.save(dir.path()).unwrap();

        let loaded = TaskzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("home");

        let config = TaskzConfig::load_or_init(&config_dir).unwrap();
        assert_eq!(config, TaskzConfig::default());
        assert!(config_dir.join(CONFIG_FILENAME).exists());

        let custom = TaskzConfig {
            load_on_start: false,
            ..TaskzConfig::default()
        };
        custom.save(&config_dir).unwrap();
        assert_eq!(TaskzConfig::load_or_init(&config_dir).unwrap(), custom);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"load_on_start": false}"#).unwrap();

        let loaded = TaskzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("tasks.txt"));
        assert!(!loaded.load_on_start);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            TaskzConfig::load(dir.path()),
            Err(TaskzError::Config(_))
        ));
    }

    #[test]
    fn test_data_file_resolution() {
        let config = TaskzConfig::default();
        assert_eq!(
            config.data_file_in("/data"),
            PathBuf::from("/data/tasks.txt")
        );

        let absolute = TaskzConfig {
            data_file: PathBuf::from("/elsewhere/t.txt"),
            ..TaskzConfig::default()
        };
        assert_eq!(
            absolute.data_file_in("/data"),
            PathBuf::from("/elsewhere/t.txt")
        );
    }
}
