//! Slideshow file writer and reader
//!
//! Output format: the first line holds the slide count K, followed by K lines
//! of space-separated photo ids in show order. [`read_show`] parses the same
//! format back, which is how the round-trip property is checked.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::Solution;

/// Failure states of the slideshow file reader
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error while reading the slideshow file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is empty (no count line)
    #[error("missing slide count line")]
    MissingCount,

    /// The count line is not a non-negative integer
    #[error("unreadable slide count: '{found}'")]
    BadCount { found: String },

    /// Fewer slide lines than the count line declared
    #[error("expected {declared} slide lines, found {found}")]
    TooFewLines { declared: usize, found: usize },

    /// A photo id field is not a non-negative integer
    #[error("line {line}: unreadable photo id: '{found}'")]
    BadPhotoId { line: usize, found: String },
}

/// Write the solution in the slideshow output format.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_show(path: impl AsRef<Path>, solution: &Solution) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", solution.slides.len())?;
    for slide in &solution.slides {
        let ids: Vec<String> = slide.photo_ids().iter().map(u32::to_string).collect();
        writeln!(writer, "{}", ids.join(" "))?;
    }
    writer.flush()
}

/// Read a slideshow file back into photo-id lists, one per slide.
///
/// # Errors
/// Returns `OutputError` on I/O failure or any malformed line.
pub fn read_show(path: impl AsRef<Path>) -> Result<Vec<Vec<u32>>, OutputError> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();

    let count_line = lines.next().ok_or(OutputError::MissingCount)?;
    let declared: usize = count_line
        .trim()
        .parse()
        .map_err(|_| OutputError::BadCount { found: count_line.trim().to_string() })?;

    let mut show = Vec::with_capacity(declared);
    for k in 0..declared {
        let line = lines
            .next()
            .ok_or(OutputError::TooFewLines { declared, found: k })?;
        let ids = line
            .split_whitespace()
            .map(|field| {
                field
                    .parse()
                    .map_err(|_| OutputError::BadPhotoId { line: k + 2, found: field.to_string() })
            })
            .collect::<Result<Vec<u32>, _>>()?;
        show.push(ids);
    }

    Ok(show)
}
