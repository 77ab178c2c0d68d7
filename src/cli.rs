use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::app::{RunOptions, Source};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "loc")]
#[command(about = "Count lines of code in a directory or git repository", long_about = None)]
pub struct Args {
    /// Directory to count lines of code in
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Git repository URL to clone and count instead of a local directory
    #[arg(long, value_name = "URL", conflicts_with = "dir")]
    pub repo: Option<String>,

    /// Regex for files or directories to exclude. Can be specified multiple times.
    #[arg(short, long, value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Configuration file (defaults to config.json in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.repo.is_none() {
            validate_dir(&self.dir)?;
        }
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::default_path().context("Failed to locate config file"),
        }
    }

    pub fn source(&self) -> Source {
        match &self.repo {
            Some(url) => Source::Repo(url.clone()),
            None => Source::Dir(self.dir.clone()),
        }
    }

    pub fn run_options(&self) -> Result<RunOptions> {
        Ok(RunOptions {
            source: self.source(),
            config_path: self.config_path()?,
            exclude: self.exclude.clone(),
        })
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Directory is empty");
    }

    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    std::fs::metadata(path).with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
