//! Photo collection file loader
//!
//! Parses the input format: the first line holds the photo count N, followed
//! by N lines of `<H|V> <tag_count> <tag_1> ... <tag_n>`. Photos are assigned
//! ids 0..N-1 in file order, which is also the id space the output format
//! refers to.
//!
//! Every malformed construct aborts the run before any model work happens;
//! there is no partial load.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::{Orientation, Photo, TagSet};

/// Failure states of the photo loader
#[derive(Debug, Error)]
pub enum InputError {
    /// I/O error while reading the collection file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is empty (no count line)
    #[error("missing photo count line")]
    MissingCount,

    /// The count line is not a non-negative integer
    #[error("unreadable photo count: '{found}'")]
    BadCount { found: String },

    /// Fewer photo lines than the count line declared
    #[error("expected {declared} photo lines, found {found}")]
    TooFewLines { declared: usize, found: usize },

    /// Orientation field is not `H` or `V`
    #[error("line {line}: orientation must be 'H' or 'V', found '{found}'")]
    BadOrientation { line: usize, found: String },

    /// Tag count field is not a non-negative integer
    #[error("line {line}: unreadable tag count: '{found}'")]
    BadTagCount { line: usize, found: String },

    /// Declared tag count disagrees with the tags present on the line
    #[error("line {line}: declared {declared} tags, found {found}")]
    TagCountMismatch { line: usize, declared: usize, found: usize },

    /// A photo without tags cannot contribute to any transition
    #[error("line {line}: photo has no tags")]
    NoTags { line: usize },
}

/// Load and parse a photo collection file.
///
/// # Errors
/// Returns `InputError` on I/O failure or any malformed line.
pub fn load_photos(path: impl AsRef<Path>) -> Result<Vec<Photo>, InputError> {
    let content = fs::read_to_string(path)?;
    parse_photos(&content)
}

/// Parse photo records from the raw file content.
///
/// Tags are deduplicated by collecting into a set; the declared tag count is
/// checked against the raw token count before deduplication.
///
/// # Errors
/// Returns `InputError` describing the first malformed construct, with
/// 1-based line numbers.
pub fn parse_photos(content: &str) -> Result<Vec<Photo>, InputError> {
    let mut lines = content.lines();

    let count_line = lines.next().ok_or(InputError::MissingCount)?;
    let declared: usize = count_line
        .trim()
        .parse()
        .map_err(|_| InputError::BadCount { found: count_line.trim().to_string() })?;

    let mut photos = Vec::with_capacity(declared);
    for id in 0..declared {
        // line numbers are 1-based and the count line is line 1
        let line_no = id + 2;
        let line = lines
            .next()
            .ok_or(InputError::TooFewLines { declared, found: id })?;

        let mut fields = line.split_whitespace();

        let orientation = match fields.next() {
            Some("H") => Orientation::Horizontal,
            Some("V") => Orientation::Vertical,
            other => {
                return Err(InputError::BadOrientation {
                    line: line_no,
                    found: other.unwrap_or("").to_string(),
                });
            }
        };

        let count_field = fields.next().unwrap_or("");
        let tag_count: usize = count_field
            .parse()
            .map_err(|_| InputError::BadTagCount { line: line_no, found: count_field.to_string() })?;

        let raw_tags: Vec<&str> = fields.collect();
        if raw_tags.len() != tag_count {
            return Err(InputError::TagCountMismatch {
                line: line_no,
                declared: tag_count,
                found: raw_tags.len(),
            });
        }

        let tags: TagSet = raw_tags.into_iter().map(str::to_string).collect();
        if tags.is_empty() {
            return Err(InputError::NoTags { line: line_no });
        }

        photos.push(Photo::new(id as u32, orientation, tags));
    }

    Ok(photos)
}
