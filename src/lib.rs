//! # Mergecat
//!
//! `mergecat` recursively walks a directory, picks every file whose name ends in a given
//! extension, and concatenates their contents into a single output file, appending one `\n`
//! after each file.
//!
//! Files are visited depth-first with each directory's entries sorted by name, so repeated
//! runs over the same tree produce byte-identical output. If nothing matches, the output file
//! is left exactly as it was.
//!
//! # Features
//!
//! - `streaming` (default): Enables [`MergecatStream`], an iterator that reads matching files one by one.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use mergecat::{MergecatBuilder, mergecat};
//!
//! let options = MergecatBuilder::new("src")
//!     .extension("rkt")
//!     .build();
//!
//! let report = mergecat(options, "merged.rkt").expect("Failed to merge files");
//! if report.is_empty() {
//!     println!("nothing to merge");
//! } else {
//!     println!("merged {} files ({} bytes)", report.files.len(), report.bytes_written);
//! }
//! ```

mod engine;
mod error;
mod options;
mod types;

#[cfg(feature = "streaming")]
pub use engine::MergecatStream;
pub use engine::{discover, mergecat, read_source, write_merged};
pub use error::MergecatError;
pub use options::{DEFAULT_EXTENSION, MergecatBuilder, MergecatOptions};
pub use types::{MergecatReport, SourceFile};
