use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid skip pattern for language '{language}': {source}")]
    InvalidSkipPattern {
        language: String,
        #[source]
        source: Box<PatternError>,
    },
}

impl PatternError {
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn for_language(self, language: impl Into<String>) -> Self {
        Self::InvalidSkipPattern {
            language: language.into(),
            source: Box::new(self),
        }
    }

    /// Source text of the regex that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidPattern { pattern, .. } => pattern,
            Self::InvalidSkipPattern { source, .. } => source.pattern(),
        }
    }
}
