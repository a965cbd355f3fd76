//! Loading cut boundaries from a timestamp table.
//!
//! The table is comma-delimited with one `HH:MM:SS` timestamp in the first
//! field of every row; further fields are ignored. Rows alternate between the
//! start and the end of a kept interval.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use markcut_common::{timecode, Error, Result, Seconds};

/// One timestamp from the table, already shifted by the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// 1-based line of the row in the source table.
    pub row: usize,
    /// Position in the media.
    pub secs: Seconds,
}

/// Boundaries in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryList {
    boundaries: Vec<Boundary>,
}

impl BoundaryList {
    /// Build a list from bare values, numbering rows from 1.
    pub fn from_seconds(values: impl IntoIterator<Item = Seconds>) -> Self {
        let boundaries = values
            .into_iter()
            .enumerate()
            .map(|(i, secs)| Boundary { row: i + 1, secs })
            .collect();
        Self { boundaries }
    }

    /// Number of boundaries.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when the table had no rows.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// The boundaries in table order.
    pub fn as_slice(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Iterate the boundaries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Boundary> {
        self.boundaries.iter()
    }

    /// The boundary values without their rows.
    pub fn seconds(&self) -> Vec<Seconds> {
        self.boundaries.iter().map(|b| b.secs).collect()
    }
}

impl<'a> IntoIterator for &'a BoundaryList {
    type Item = &'a Boundary;
    type IntoIter = std::slice::Iter<'a, Boundary>;

    fn into_iter(self) -> Self::IntoIter {
        self.boundaries.iter()
    }
}

/// Load the boundaries in the table at `path`, adding `delay` seconds to
/// every timestamp.
///
/// # Errors
///
/// - [`Error::Input`] if the file cannot be opened or read.
/// - [`Error::Format`] for a row whose first field is not a valid timestamp,
///   or whose timestamp shifted by `delay` falls before zero.
pub fn load(path: &Path, delay: i64) -> Result<BoundaryList> {
    let file = File::open(path).map_err(|e| Error::input(path, e.to_string()))?;
    let boundaries = load_from_reader(file, path, delay)?;

    tracing::debug!(
        "Loaded {} boundaries from {:?} (delay {}s)",
        boundaries.len(),
        path,
        delay
    );

    Ok(boundaries)
}

/// Load boundaries from any reader. `source` names the input in errors.
pub fn load_from_reader<R: Read>(reader: R, source: &Path, delay: i64) -> Result<BoundaryList> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut boundaries = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| match e.position() {
            Some(pos) => Error::input(source, format!("row {}: {e}", pos.line())),
            None => Error::input(source, e.to_string()),
        })?;
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        let field = record.get(0).unwrap_or("").trim();
        let secs = timecode::parse(field).map_err(|e| e.at_row(row))?;
        let shifted = secs.checked_add_signed(delay).ok_or_else(|| {
            Error::format(
                field,
                format!("shifting by a delay of {delay}s leaves the valid range"),
            )
            .at_row(row)
        })?;

        tracing::trace!("row {}: {} -> {}s", row, field, shifted);
        boundaries.push(Boundary { row, secs: shifted });
    }

    Ok(BoundaryList { boundaries })
}
