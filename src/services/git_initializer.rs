use std::fs;
use std::path::Path;
use std::process::Command;
use crate::config::constants::{GIT_BINARY, GIT_DIR, INITIAL_COMMIT_MESSAGE};
use crate::errors::{ResultExt, SetupError, SetupResult};

pub struct GitInitializer;

impl GitInitializer {
    pub fn is_initialized(root: &Path) -> bool {
        root.join(GIT_DIR).exists()
    }

    /// Initializes a repository with a first commit of the whole tree.
    /// Returns `false` without running git when one already exists.
    /// A failed run removes the `.git` it created so the next run starts over.
    pub fn initialize(root: &Path) -> SetupResult<bool> {
        if Self::is_initialized(root) {
            log::info!("ℹ️ Git repository already initialized");
            return Ok(false);
        }

        log::info!("📦 Initializing git repository...");
        if let Err(e) = Self::init_and_commit(root) {
            let git_dir = root.join(GIT_DIR);
            if git_dir.exists() {
                log::warn!("⚠️ Removing incomplete {} after failed initialization", git_dir.display());
                fs::remove_dir_all(&git_dir).with_file(&git_dir, "remove incomplete repository")?;
            }
            return Err(e);
        }

        Ok(true)
    }

    fn init_and_commit(root: &Path) -> SetupResult<()> {
        Self::git(root, &["init"])?;
        Self::git(root, &["add", "."])?;
        Self::git(root, &["commit", "-m", INITIAL_COMMIT_MESSAGE])
    }

    fn git(root: &Path, args: &[&str]) -> SetupResult<()> {
        let output = Command::new(GIT_BINARY)
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|e| SetupError::tool_error(GIT_BINARY, e))?;

        if !output.status.success() {
            return Err(SetupError::tool_error(
                GIT_BINARY,
                format!("git {} failed: {}", args.join(" "), String::from_utf8_lossy(&output.stderr).trim()),
            ));
        }

        Ok(())
    }
}
