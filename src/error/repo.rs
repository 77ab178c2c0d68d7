use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("failed to create temporary directory: {source}")]
    TempDir { source: std::io::Error },

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("failed to clone repository '{url}' ({status}): {stderr}")]
    CloneFailed {
        url: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

impl RepoError {
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    pub fn clone_failed(
        url: impl Into<String>,
        status: std::process::ExitStatus,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CloneFailed {
            url: url.into(),
            status,
            stderr: stderr.into(),
        }
    }
}
