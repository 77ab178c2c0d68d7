//! Line-of-code counter
//!
//! Walks a directory tree, maps files to languages by extension suffix and
//! counts the lines that match none of the language's skip patterns. Paths
//! matching an exclusion pattern are left out of the walk.

pub mod app;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod exclusion;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod repo;
pub mod scan;

pub use app::{run, RunOptions, Source};
pub use config::{Config, LanguageRule, Registry};
pub use error::{Error, Result};
pub use scan::{ScanReport, Scanner, Visit};
