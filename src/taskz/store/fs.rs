use super::DataStore;
use crate::error::{Result, TaskzError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Single-file store. Every load reads the whole file; every save rewrites it.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TaskzError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_rows(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TaskzError::Io)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn save_rows(&mut self, rows: &[String]) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut content = rows.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(TaskzError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("tasks.txt"));
        assert!(store.load_rows().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tasks.txt");
        let mut store = FileStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        let rows = vec!["T;0;0;a".to_string(), "E;1;1;b;2020-01-01".to_string()];
        store.save_rows(&rows).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "T;0;0;a\nE;1;1;b;2020-01-01\n"
        );
        assert_eq!(store.load_rows().unwrap(), rows);
    }

    #[test]
    fn saving_nothing_truncates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T;0;0;old\n").unwrap();

        let mut store = FileStore::new(&path);
        store.save_rows(&[]).unwrap();
        assert!(store.load_rows().unwrap().is_empty());
    }
}
