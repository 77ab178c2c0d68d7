use tracing::debug;

use super::Config;
use crate::error::PatternError;
use crate::pattern::PatternSet;

/// A configured language with its skip patterns compiled.
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    extensions: Vec<String>,
    skip: PatternSet,
}

impl Language {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skip_patterns(&self) -> &PatternSet {
        &self.skip
    }

    /// True when the path string ends with any configured extension.
    pub fn matches_path(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

/// Read-only lookup table built once per run from a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: Vec<Language>,
}

impl Registry {
    pub fn compile(config: &Config) -> Result<Self, PatternError> {
        let mut languages = Vec::with_capacity(config.languages.len());

        for (name, rule) in &config.languages {
            let skip =
                PatternSet::compile(&rule.skip_patterns).map_err(|e| e.for_language(name))?;
            debug!(
                language = %name,
                extensions = rule.extensions.len(),
                skip_patterns = skip.len(),
                "compiled language rule"
            );
            languages.push(Language {
                name: name.clone(),
                extensions: rule.extensions.clone(),
                skip,
            });
        }

        Ok(Self { languages })
    }

    /// Every language with an extension that is a suffix of `path`.
    ///
    /// A file may match several languages; callers count it once per match.
    pub fn lookup_by_path(&self, path: &str) -> Vec<&Language> {
        self.languages
            .iter()
            .filter(|lang| lang.matches_path(path))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
