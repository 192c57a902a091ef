use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A matching source file and its text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// The full path to the file, as discovered under the root.
    pub path: PathBuf,
    /// The file's content, read as UTF-8.
    pub content: String,
}

/// The outcome of a mergecat run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergecatReport {
    /// The files that were concatenated, in the order they were written.
    ///
    /// Empty when nothing matched, in which case the output was not touched.
    pub files: Vec<PathBuf>,
    /// Total bytes written to the output, separators included.
    pub bytes_written: u64,
}

impl MergecatReport {
    /// Whether the run matched no files and left the output alone.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
