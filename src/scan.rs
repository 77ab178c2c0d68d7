use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::Registry;
use crate::counter::count_lines;
use crate::error::{IoError, Result};
use crate::exclusion::ExclusionFilter;

/// What the walk does with a visited entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Count the entry if it is a file, walk into it if it is a directory.
    Descend,
    /// Excluded file: not counted, walk continues.
    Skip,
    /// Excluded directory: none of its children are visited.
    Prune,
}

/// Result of one completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub total_lines: u64,
    pub files_counted: usize,
    pub files_excluded: usize,
    pub dirs_pruned: usize,
    /// Lines per language. A file matching several languages shows up in each.
    pub languages: BTreeMap<String, u64>,
}

/// Running totals owned by a single scan.
#[derive(Debug, Default)]
pub struct Tally {
    report: ScanReport,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, language: &str, lines: u64) {
        self.report.total_lines += lines;
        *self
            .report
            .languages
            .entry(language.to_string())
            .or_default() += lines;
    }

    pub fn file_counted(&mut self) {
        self.report.files_counted += 1;
    }

    pub fn record_visit(&mut self, visit: Visit) {
        match visit {
            Visit::Skip => self.report.files_excluded += 1,
            Visit::Prune => self.report.dirs_pruned += 1,
            Visit::Descend => {}
        }
    }

    pub fn total_lines(&self) -> u64 {
        self.report.total_lines
    }

    pub fn finish(self) -> ScanReport {
        self.report
    }
}

/// Depth-first walk that applies exclusions, then counts every surviving
/// file once per matching language.
pub struct Scanner {
    root: PathBuf,
    registry: Registry,
    exclusions: ExclusionFilter,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, registry: Registry, exclusions: ExclusionFilter) -> Self {
        Self {
            root: root.into(),
            registry,
            exclusions,
        }
    }

    /// Decision for one entry, made before anything below it is visited.
    pub fn decide(&self, path: &Path, is_dir: bool) -> Visit {
        if !self.exclusions.should_exclude(path) {
            Visit::Descend
        } else if is_dir {
            Visit::Prune
        } else {
            Visit::Skip
        }
    }

    /// Walks the tree and returns the totals.
    ///
    /// The first walk or read error aborts the scan; no partial report is returned.
    pub fn scan(&self) -> Result<ScanReport> {
        if !self.root.is_dir() {
            return Err(IoError::directory_not_found(&self.root).into());
        }

        info!(root = %self.root.display(), "scanning");
        let mut tally = Tally::new();
        let mut walker = WalkDir::new(&self.root).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| IoError::walk_error(&self.root, e))?;
            let is_dir = entry.file_type().is_dir();
            let visit = self.decide(entry.path(), is_dir);
            trace!(path = %entry.path().display(), ?visit, "visit");
            tally.record_visit(visit);

            match visit {
                Visit::Prune => walker.skip_current_dir(),
                Visit::Skip => {}
                Visit::Descend if !is_dir => self.count_file(&entry, &mut tally)?,
                Visit::Descend => {}
            }
        }

        info!(total_lines = tally.total_lines(), "scan complete");
        Ok(tally.finish())
    }

    fn count_file(&self, entry: &DirEntry, tally: &mut Tally) -> Result<()> {
        let path_str = entry.path().to_string_lossy();
        let languages = self.registry.lookup_by_path(&path_str);
        if languages.is_empty() {
            return Ok(());
        }

        for language in languages {
            let lines = count_lines(entry.path(), language.skip_patterns())?;
            debug!(
                path = %entry.path().display(),
                language = language.name(),
                lines,
                "counted"
            );
            tally.record(language.name(), lines);
        }
        tally.file_counted();
        Ok(())
    }
}
