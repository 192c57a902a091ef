use crate::error::MergecatError;
use crate::options::MergecatOptions;
#[cfg(feature = "streaming")]
use crate::types::SourceFile;
use crate::types::MergecatReport;
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '\\', '/'];

struct Walker {
    inner: ignore::Walk,
    matcher: GlobMatcher,
}
impl Walker {
    fn new(options: &MergecatOptions) -> Result<Self, MergecatError> {
        let matcher = extension_matcher(&options.extension)?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = Glob::new(pattern).map_err(|e| {
                    MergecatError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let ignored = glob_builder.build().map_err(|e| {
                MergecatError::InvalidPattern(format!("Failed to build glob set: {}", e))
            })?;
            builder.filter_entry(move |entry| !ignored.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
            matcher,
        })
    }
    /// Yields matching non-directory entries in traversal order.
    ///
    /// A dangling symlink is kept so that reading it fails loudly.
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, MergecatError>> {
        let matcher = self.matcher;
        self.inner.filter_map(move |result| match result {
            Ok(entry) => {
                let path = entry.path();
                if matcher.is_match(entry.file_name()) && !path.is_dir() {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(MergecatError::Walk(e.to_string()))),
        })
    }
}

/// Compiles `*.<ext>` into a matcher applied to bare file names.
fn extension_matcher(ext: &str) -> Result<GlobMatcher, MergecatError> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        return Err(MergecatError::InvalidExtension(
            "extension must not be empty".to_string(),
        ));
    }
    if ext.contains(GLOB_META) {
        return Err(MergecatError::InvalidExtension(format!(
            "'{}' contains a path separator or glob metacharacter",
            ext
        )));
    }
    let glob = Glob::new(&format!("*.{}", ext))
        .map_err(|e| MergecatError::InvalidExtension(format!("'{}': {}", ext, e)))?;
    Ok(glob.compile_matcher())
}

/// Lists every file under `options.root` whose name ends in the configured
/// extension.
///
/// Entries are sorted by file name within each directory and the walk is
/// depth-first, so the order is stable across runs and platforms. A root that
/// does not exist or is not a directory produces an empty list.
pub fn discover(options: &MergecatOptions) -> Result<Vec<PathBuf>, MergecatError> {
    let walker = Walker::new(options)?;
    if !options.root.is_dir() {
        #[cfg(feature = "logging")]
        tracing::debug!("Root {} is not a directory", options.root.display());
        return Ok(Vec::new());
    }
    walker.into_iter().collect()
}

/// Reads one source file as UTF-8 text.
///
/// Content that is not valid UTF-8 is an error, not a lossy conversion.
pub fn read_source(path: &Path) -> Result<String, MergecatError> {
    fs::read_to_string(path).map_err(|e| MergecatError::io(path, e))
}

/// Writes each file's content followed by a single `\n` into `out`.
///
/// Returns the number of bytes written. Stops at the first file that cannot
/// be read; whatever was already written stays in `out`. A failed write is
/// reported against the source being appended, since `out` has no path.
pub fn write_merged<W: Write>(files: &[PathBuf], out: &mut W) -> Result<u64, MergecatError> {
    copy_sources(files, out, |path, e| MergecatError::io(path, e))
}

fn copy_sources<W, F>(files: &[PathBuf], out: &mut W, on_write: F) -> Result<u64, MergecatError>
where
    W: Write,
    F: Fn(&Path, io::Error) -> MergecatError,
{
    let mut written = 0u64;
    for path in files {
        #[cfg(feature = "logging")]
        tracing::debug!("Appending {}", path.display());
        let content = read_source(path)?;
        out.write_all(content.as_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .map_err(|e| on_write(path, e))?;
        written += content.len() as u64 + 1;
    }
    Ok(written)
}

/// Concatenates every matching file under `options.root` into `output`.
///
/// When nothing matches, `output` is neither created nor truncated and an
/// empty report is returned. Otherwise `output` is opened (and truncated)
/// before the first source is read, so an unwritable destination fails early.
pub fn mergecat(
    options: MergecatOptions,
    output: impl AsRef<Path>,
) -> Result<MergecatReport, MergecatError> {
    let output = output.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting mergecat with root: {} (*.{})",
        options.root.display(),
        options.extension
    );
    let files = discover(&options)?;
    if files.is_empty() {
        #[cfg(feature = "logging")]
        tracing::debug!("No matching files, leaving {} untouched", output.display());
        return Ok(MergecatReport::default());
    }
    let file = File::create(output).map_err(|e| MergecatError::io(output, e))?;
    let mut writer = BufWriter::new(file);
    let bytes_written = copy_sources(&files, &mut writer, |_, e| MergecatError::io(output, e))?;
    writer.flush().map_err(|e| MergecatError::io(output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} bytes from {} files to {}",
        bytes_written,
        files.len(),
        output.display()
    );
    Ok(MergecatReport {
        files,
        bytes_written,
    })
}

#[cfg(feature = "streaming")]
pub struct MergecatStream {
    path_iter: Box<dyn Iterator<Item = Result<PathBuf, MergecatError>> + Send>,
}
#[cfg(feature = "streaming")]
impl MergecatStream {
    pub fn new(options: MergecatOptions) -> Result<Self, MergecatError> {
        let walker = Walker::new(&options)?;
        let path_iter: Box<dyn Iterator<Item = Result<PathBuf, MergecatError>> + Send> =
            if options.root.is_dir() {
                Box::new(walker.into_iter())
            } else {
                Box::new(std::iter::empty())
            };
        Ok(Self { path_iter })
    }
}
#[cfg(feature = "streaming")]
impl Iterator for MergecatStream {
    type Item = Result<SourceFile, MergecatError>;
    fn next(&mut self) -> Option<Self::Item> {
        let path = match self.path_iter.next()? {
            Ok(p) => p,
            Err(e) => return Some(Err(e)),
        };
        Some(read_source(&path).map(|content| SourceFile { path, content }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matcher_matches_suffix_only() {
        let m = extension_matcher("rkt").unwrap();
        assert!(m.is_match("main.rkt"));
        assert!(m.is_match(".rkt"));
        assert!(!m.is_match("main.rkt.bak"));
        assert!(!m.is_match("mainrkt"));
    }

    #[test]
    fn extension_matcher_accepts_leading_dot() {
        assert!(extension_matcher(".ext").unwrap().is_match("a.ext"));
    }

    #[test]
    fn extension_matcher_rejects_bad_input() {
        for bad in ["", ".", "r*", "a/b", "{x,y}"] {
            assert!(matches!(
                extension_matcher(bad),
                Err(MergecatError::InvalidExtension(_))
            ));
        }
    }
}
