use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension matched when none is configured.
pub const DEFAULT_EXTENSION: &str = "rkt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergecatOptions {
    pub root: PathBuf,
    /// File-name suffix to match, without the leading dot.
    pub extension: String,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
}
impl Default for MergecatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            respect_gitignore: false,
            max_depth: None,
            include_hidden: true,
            follow_links: false,
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct MergecatBuilder {
    options: MergecatOptions,
}
impl MergecatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MergecatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Sets the extension to match. A leading dot is accepted and dropped.
    pub fn extension(mut self, ext: impl AsRef<str>) -> Self {
        let ext = ext.as_ref();
        self.options.extension = ext.strip_prefix('.').unwrap_or(ext).to_string();
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> MergecatOptions {
        self.options
    }
}
