//! Turning boundaries into an ordered cut plan.
//!
//! Consecutive boundaries pair up as (start, end). Each pair becomes one
//! chunk, named by its position in the table, and the running total of chunk
//! durations gives the timestamp at which that chunk ends in the joined
//! output.

use markcut_common::{timecode, Error, Result, Seconds, Timecode};

use crate::loader::BoundaryList;

/// Narrowest zero-padding used for chunk indices.
pub const MIN_PAD_WIDTH: usize = 2;

/// A kept range of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: Seconds,
    pub end: Seconds,
}

impl Interval {
    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }
}

/// How chunk files are named: `<prefix><zero-padded index>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkNaming {
    pub prefix: String,
    pub extension: String,
}

impl Default for ChunkNaming {
    fn default() -> Self {
        Self {
            prefix: "chunk-".to_string(),
            extension: "mp4".to_string(),
        }
    }
}

impl ChunkNaming {
    /// Name of chunk `index` padded to `width` digits.
    pub fn name(&self, index: usize, width: usize) -> String {
        format!("{}{:0width$}.{}", self.prefix, index, self.extension)
    }
}

/// Digits needed so that names of `count` chunks sort lexicographically in
/// index order: the width of the largest index, never below
/// [`MIN_PAD_WIDTH`].
pub fn pad_width(count: usize) -> usize {
    let largest = count.saturating_sub(1);
    let digits = largest.checked_ilog10().map_or(1, |d| d as usize + 1);
    digits.max(MIN_PAD_WIDTH)
}

/// One planned chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCut {
    /// 0-based position in the plan.
    pub index: usize,
    pub interval: Interval,
    /// Source rows of the start and end boundaries.
    pub rows: (usize, usize),
    /// Chunk file name.
    pub chunk: String,
    /// Sum of the durations of this and every earlier chunk.
    pub cumulative: Seconds,
}

impl PlannedCut {
    pub fn duration(&self) -> Seconds {
        self.interval.duration()
    }

    /// Where this chunk ends in the joined output.
    pub fn cumulative_timecode(&self) -> Timecode {
        Timecode(self.cumulative)
    }
}

/// The full, ordered list of chunks to cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutPlan {
    cuts: Vec<PlannedCut>,
}

impl CutPlan {
    pub fn cuts(&self) -> &[PlannedCut] {
        &self.cuts
    }

    pub fn get(&self, index: usize) -> Option<&PlannedCut> {
        self.cuts.get(index)
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Chunk names in plan order, as listed in the concat manifest.
    pub fn chunk_names(&self) -> Vec<String> {
        self.cuts.iter().map(|c| c.chunk.clone()).collect()
    }

    /// One `HH:MM:SS` cumulative timestamp per chunk.
    pub fn report_lines(&self) -> Vec<String> {
        self.cuts
            .iter()
            .map(|c| timecode::format(c.cumulative))
            .collect()
    }

    /// Length of the joined output.
    pub fn total_duration(&self) -> Seconds {
        self.cuts.last().map_or(0, |c| c.cumulative)
    }
}

/// Plan with the default `chunk-NN.mp4` naming.
pub fn plan(boundaries: &BoundaryList) -> Result<CutPlan> {
    plan_with(boundaries, &ChunkNaming::default())
}

/// Pair up `boundaries` into chunks named by `naming`.
///
/// # Errors
///
/// Returns [`Error::Shape`] if there is an odd number of boundaries, an
/// interval ends before it starts, or the running total overflows.
pub fn plan_with(boundaries: &BoundaryList, naming: &ChunkNaming) -> Result<CutPlan> {
    let slice = boundaries.as_slice();
    if slice.len() % 2 != 0 {
        let last_row = slice.last().map_or(0, |b| b.row);
        return Err(Error::shape(format!(
            "odd number of timestamps ({}); they must pair up as start/end, \
             but the start on row {} has no end",
            slice.len(),
            last_row
        )));
    }

    let count = slice.len() / 2;
    let width = pad_width(count);
    let mut cumulative: Seconds = 0;
    let mut cuts = Vec::with_capacity(count);

    for (index, pair) in slice.chunks_exact(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        if end.secs < start.secs {
            return Err(Error::shape(format!(
                "interval {index} ends at {} (row {}) before it starts at {} (row {})",
                timecode::format(end.secs),
                end.row,
                timecode::format(start.secs),
                start.row
            )));
        }

        let interval = Interval {
            start: start.secs,
            end: end.secs,
        };
        cumulative = cumulative.checked_add(interval.duration()).ok_or_else(|| {
            Error::shape(format!(
                "interval {index} (rows {} and {}) makes the joined output longer than {}",
                start.row,
                end.row,
                timecode::format(Seconds::MAX)
            ))
        })?;

        cuts.push(PlannedCut {
            index,
            interval,
            rows: (start.row, end.row),
            chunk: naming.name(index, width),
            cumulative,
        });
    }

    tracing::debug!(
        "Planned {} chunks, {} of output",
        cuts.len(),
        timecode::format(cumulative)
    );

    Ok(CutPlan { cuts })
}
