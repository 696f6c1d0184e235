use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::PROJECT_DIRECTORIES;
use crate::errors::{ResultExt, SetupResult};

pub struct DirectoryScaffolder;

impl DirectoryScaffolder {
    /// Creates the template's fixed directories. Existing ones are left
    /// alone; returns only the directories created by this call.
    pub fn ensure(root: &Path) -> SetupResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        for dir in PROJECT_DIRECTORIES {
            let path = root.join(dir);
            if path.is_dir() {
                continue;
            }
            fs::create_dir_all(&path).with_file(&path, "create directory")?;
            log::debug!("Created {}", path.display());
            created.push(path);
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn second_run_creates_nothing() {
        let dir = TempDir::new().unwrap();

        let first = DirectoryScaffolder::ensure(dir.path()).unwrap();
        let second = DirectoryScaffolder::ensure(dir.path()).unwrap();

        assert_eq!(first.len(), PROJECT_DIRECTORIES.len());
        assert!(second.is_empty());
        for name in PROJECT_DIRECTORIES {
            assert!(dir.path().join(name).is_dir());
        }
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docs"), "not a directory").unwrap();

        assert!(DirectoryScaffolder::ensure(dir.path()).is_err());
    }
}
