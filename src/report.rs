//! Rendering the cumulative cut report.

use markcut_common::{Seconds, Timecode};
use serde::Serialize;

use crate::planner::CutPlan;

/// One report entry in `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub row_start: usize,
    pub row_end: usize,
    pub start: Timecode,
    pub end: Timecode,
    pub duration: Seconds,
    pub cumulative: Timecode,
    pub chunk: String,
}

/// Build report entries for every chunk in `plan`.
pub fn entries(plan: &CutPlan) -> Vec<ReportEntry> {
    plan.cuts()
        .iter()
        .map(|cut| ReportEntry {
            index: cut.index,
            row_start: cut.rows.0,
            row_end: cut.rows.1,
            start: Timecode(cut.interval.start),
            end: Timecode(cut.interval.end),
            duration: cut.duration(),
            cumulative: cut.cumulative_timecode(),
            chunk: cut.chunk.clone(),
        })
        .collect()
}

/// Plain report: one `HH:MM:SS` line per chunk.
pub fn render_text(plan: &CutPlan) -> String {
    plan.report_lines()
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// JSON report: an array of [`ReportEntry`] objects.
pub fn render_json(plan: &CutPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&entries(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::BoundaryList;
    use crate::planner::plan;

    fn sample() -> CutPlan {
        plan(&BoundaryList::from_seconds([15, 25, 65, 95])).unwrap()
    }

    #[test]
    fn text_report_has_one_line_per_chunk() {
        assert_eq!(render_text(&sample()), "00:00:10\n00:00:40\n");
        assert_eq!(render_text(&CutPlan::default()), "");
    }

    #[test]
    fn json_report_fields() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["index"], 1);
        assert_eq!(entries[1]["row_start"], 3);
        assert_eq!(entries[1]["row_end"], 4);
        assert_eq!(entries[1]["start"], "00:01:05");
        assert_eq!(entries[1]["end"], "00:01:35");
        assert_eq!(entries[1]["duration"], 30);
        assert_eq!(entries[1]["cumulative"], "00:00:40");
        assert_eq!(entries[1]["chunk"], "chunk-01.mp4");
    }
}
