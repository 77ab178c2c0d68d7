use std::borrow::Cow;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::pattern::PatternSet;

/// Decides which paths under a scan root are left out of the walk.
///
/// Each rule is tried against the base name, the path relative to the root
/// and the full path, so `node_modules`, `src/gen/.*` and `^/tmp/.*` all work.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    root: PathBuf,
    rules: PatternSet,
}

impl ExclusionFilter {
    pub fn new(root: impl Into<PathBuf>, rules: PatternSet) -> Self {
        Self {
            root: root.into(),
            rules,
        }
    }

    pub fn should_exclude(&self, path: &Path) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let full = path.to_string_lossy();
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| full.clone());
        let relative = self.relative(path, &full);

        self.rules.iter().any(|rule| {
            rule.is_match(&base) || rule.is_match(&relative) || rule.is_match(&full)
        })
    }

    fn relative<'a>(&self, path: &'a Path, full: &Cow<'a, str>) -> Cow<'a, str> {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy(),
            Err(_) => {
                let root = self.root.to_string_lossy();
                match full.strip_prefix(root.as_ref()) {
                    Some(rest) => Cow::Owned(rest.trim_start_matches(MAIN_SEPARATOR).to_string()),
                    None => full.clone(),
                }
            }
        }
    }
}
