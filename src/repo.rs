use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};

use crate::error::RepoError;

pub const GIT_COMMAND: &str = "git";

const TEMP_DIR_PREFIX: &str = "loc-repo-";

/// A repository cloned into a temporary directory.
///
/// The directory and everything in it is removed when this value is dropped.
#[derive(Debug)]
pub struct ClonedRepo {
    dir: TempDir,
}

impl ClonedRepo {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Runs `git clone <url>` into a fresh temporary directory.
pub fn clone_repo(url: &str) -> Result<ClonedRepo, RepoError> {
    let dir = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()
        .map_err(|source| RepoError::TempDir { source })?;

    info!(url, dest = %dir.path().display(), "cloning repository");
    let output = Command::new(GIT_COMMAND)
        .arg("clone")
        .arg("--")
        .arg(url)
        .arg(dir.path())
        .output()
        .map_err(|e| RepoError::spawn(format!("{GIT_COMMAND} clone"), e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RepoError::clone_failed(url, output.status, stderr));
    }

    debug!(dest = %dir.path().display(), "clone finished");
    Ok(ClonedRepo { dir })
}
