mod config;
mod io;
mod pattern;
mod repo;

pub use config::ConfigError;
pub use io::IoError;
pub use pattern::PatternError;
pub use repo::RepoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub type Result<T> = std::result::Result<T, Error>;
