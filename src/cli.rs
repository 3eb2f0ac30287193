//! Command-line interface definitions and parsing
//!
//! One thin command: take a photo collection file, write a slideshow file.
//! The only knobs are the output path, the solver time limit, the candidate
//! safety bound, and quiet mode; everything else comes from the settings
//! layer with CLI flags taking precedence.

use clap::Parser;
use std::path::PathBuf;

/// Compose a slideshow from tagged photos, maximizing transition interest
#[derive(Parser, Debug)]
#[command(name = "slidr", version, about)]
pub struct Cli {
    /// Photo collection file: first line is the photo count, then one
    /// `H|V <tag_count> <tags...>` line per photo
    pub input: PathBuf,

    /// Where to write the slideshow (defaults to the input path with a
    /// `.sol` extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop the solver after this many seconds and keep the best sequence
    /// found so far
    #[arg(short = 't', long, value_name = "SECS")]
    pub time_limit: Option<u64>,

    /// Refuse to run when candidate generation would produce more than this
    /// many slides (vertical pairing grows quadratically)
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<usize>,

    /// Suppress informational output (only errors are printed)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolved output path: explicit flag, or `<input>.sol`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("sol"))
    }
}
