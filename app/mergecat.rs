//! Command-line interface for mergecat.
//!
//! Concatenates every matching file under a directory into one output file.
//! Takes exactly two positional arguments; anything else prints the usage line
//! to stdout and exits with status 1.

use clap::Parser;
use mergecat::{MergecatBuilder, MergecatOptions, mergecat};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::exit;

/// Concatenate matching files into one
#[derive(Parser)]
#[command(
    name = "mergecat",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Directory to search recursively
    #[arg(allow_hyphen_values = true)]
    directory: PathBuf,

    /// File to create or overwrite with the concatenated contents
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

impl Cli {
    fn into_options(self) -> (MergecatOptions, PathBuf) {
        (MergecatBuilder::new(self.directory).build(), self.output)
    }
}

/// Name shown in the usage line, taken from how the binary was invoked.
fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mergecat".to_string())
}

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    // Count raw arguments first: clap swallows a `--` separator.
    let cli = match args.len() {
        3 => Cli::try_parse_from(&args).ok(),
        _ => None,
    };
    let Some(cli) = cli else {
        println!("usage: {} <directory> <output>", program_name(args.first()));
        exit(1);
    };
    let (options, output) = cli.into_options();

    if let Err(e) = mergecat(options, &output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
