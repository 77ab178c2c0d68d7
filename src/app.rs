use std::path::PathBuf;
use tracing::debug;

use crate::config::{Config, Registry};
use crate::error::Result;
use crate::exclusion::ExclusionFilter;
use crate::pattern::PatternSet;
use crate::repo::clone_repo;
use crate::scan::{ScanReport, Scanner};

/// Where the files to count come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Dir(PathBuf),
    Repo(String),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    pub config_path: PathBuf,
    pub exclude: Vec<String>,
}

/// Compiles exclusions, loads the config, materializes the source and scans it.
///
/// Everything that can be validated up front is checked before a repository
/// is cloned or a file is read.
pub fn run(options: &RunOptions) -> Result<ScanReport> {
    let exclusions = PatternSet::compile(&options.exclude)?;
    debug!(count = exclusions.len(), "compiled exclusion patterns");

    let config = Config::load(&options.config_path)?;
    let registry = Registry::compile(&config)?;

    match &options.source {
        Source::Dir(dir) => scan_dir(dir.clone(), registry, exclusions),
        Source::Repo(url) => {
            let repo = clone_repo(url)?;
            scan_dir(repo.path().to_path_buf(), registry, exclusions)
        }
    }
}

fn scan_dir(root: PathBuf, registry: Registry, exclusions: PatternSet) -> Result<ScanReport> {
    let filter = ExclusionFilter::new(root.clone(), exclusions);
    Scanner::new(root, registry, filter).scan()
}
