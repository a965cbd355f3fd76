//! Integration tests for the load -> plan -> execute pipeline.
//!
//! A fake media gateway records every call and touches the files ffmpeg
//! would create, while the real manifest writer puts the concat list on disk.
//! The fake join reads that list back and resolves every entry against the
//! manifest's directory, as ffmpeg's concat demuxer does.

use markcut::loader;
use markcut::pipeline::{CutExecutor, MediaGateway, Workspace};
use markcut::planner;
use assert_matches::assert_matches;
use markcut_common::{Error, ErrorKind, Result, Seconds};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::tempdir;

#[derive(Default)]
struct FakeFfmpeg {
    cuts: Mutex<Vec<(Seconds, Seconds, PathBuf)>>,
    concats: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MediaGateway for FakeFfmpeg {
    fn cut(&self, _input: &Path, start: Seconds, duration: Seconds, output: &Path) -> Result<()> {
        fs::write(output, format!("{start}+{duration}"))?;
        self.cuts
            .lock()
            .unwrap()
            .push((start, duration, output.to_path_buf()));
        Ok(())
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<()> {
        let base = manifest.parent().unwrap_or(Path::new(""));
        for line in fs::read_to_string(manifest)?.lines() {
            let entry = line
                .strip_prefix("file '")
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap()
                .replace(r"'\''", "'");
            let chunk = base.join(&entry);
            if !chunk.is_file() {
                return Err(Error::external_tool(
                    "ffmpeg",
                    format!("{}: No such file or directory", chunk.display()),
                ));
            }
        }
        fs::write(output, "joined")?;
        self.concats
            .lock()
            .unwrap()
            .push((manifest.to_path_buf(), output.to_path_buf()));
        Ok(())
    }
}

struct Fixture {
    _temp: tempfile::TempDir,
    dir: PathBuf,
    csv: PathBuf,
    media: PathBuf,
}

fn fixture(csv: &str) -> Fixture {
    let temp = tempdir().unwrap();
    let dir = temp.path().to_path_buf();
    let csv_path = dir.join("cuts.csv");
    fs::write(&csv_path, csv).unwrap();
    let media = dir.join("stream.mp4");
    fs::write(&media, b"not really a video").unwrap();
    Fixture {
        _temp: temp,
        dir,
        csv: csv_path,
        media,
    }
}

#[test]
fn delay_shifts_every_cut_and_report_accumulates() {
    let fx = fixture("00:00:10\n00:00:20\n00:01:00\n00:01:30\n");
    let boundaries = loader::load(&fx.csv, 5).unwrap();
    assert_eq!(boundaries.seconds(), vec![15, 25, 65, 95]);

    let plan = planner::plan(&boundaries).unwrap();
    assert_eq!(plan.report_lines(), ["00:00:10", "00:00:40"]);
    assert_eq!(plan.chunk_names(), ["chunk-00.mp4", "chunk-01.mp4"]);

    let gateway = FakeFfmpeg::default();
    let summary = CutExecutor::new(&gateway, Workspace::new(&fx.dir))
        .execute(&fx.media, &plan)
        .unwrap();

    let cuts = gateway.cuts.lock().unwrap();
    assert_eq!(
        *cuts,
        vec![
            (15, 10, fx.dir.join("chunk-00.mp4")),
            (65, 30, fx.dir.join("chunk-01.mp4")),
        ]
    );

    let manifest = fs::read_to_string(fx.dir.join("ourlist.txt")).unwrap();
    assert_eq!(manifest, "file 'chunk-00.mp4'\nfile 'chunk-01.mp4'\n");

    let concats = gateway.concats.lock().unwrap();
    assert_eq!(
        *concats,
        vec![(fx.dir.join("ourlist.txt"), fx.dir.join("output.mp4"))]
    );
    assert_eq!(summary.output, Some(fx.dir.join("output.mp4")));
    assert!(fx.dir.join("output.mp4").exists());
}

#[test]
fn single_interval_without_delay() {
    let fx = fixture("00:00:00\n00:00:05\n");
    let plan = planner::plan(&loader::load(&fx.csv, 0).unwrap()).unwrap();
    assert_eq!(plan.report_lines(), ["00:00:05"]);
}

#[test]
fn malformed_row_fails_before_any_invocation() {
    let fx = fixture("00:00:10\n1:2\n");
    let err = loader::load(&fx.csv, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("row 2"));
    assert!(!fx.dir.join("ourlist.txt").exists());
}

#[test]
fn odd_rows_fail_without_side_effects() {
    let fx = fixture("00:00:10\n00:00:20\n00:00:30\n");
    let boundaries = loader::load(&fx.csv, 0).unwrap();
    let err = planner::plan(&boundaries).unwrap_err();
    assert_matches!(err, Error::Shape(ref message) if message.contains("row 3"));

    let entries: Vec<_> = fs::read_dir(&fx.dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 2, "only the fixture files exist: {entries:?}");
}

#[test]
fn custom_workspace_layout() {
    let fx = fixture("00:00:00\n00:00:01\n00:00:02\n00:00:03\n");
    let plan = planner::plan(&loader::load(&fx.csv, 0).unwrap()).unwrap();
    let work = fx.dir.join("renders");
    let workspace = Workspace::new(&work)
        .with_manifest("lists/final.txt")
        .with_output("final.mp4");

    let gateway = FakeFfmpeg::default();
    CutExecutor::new(&gateway, workspace)
        .jobs(2)
        .execute(&fx.media, &plan)
        .unwrap();

    assert!(work.join("chunk-00.mp4").exists());
    assert!(work.join("chunk-01.mp4").exists());
    assert_eq!(
        fs::read_to_string(work.join("lists/final.txt")).unwrap(),
        format!(
            "file '{}'\nfile '{}'\n",
            work.join("chunk-00.mp4").display(),
            work.join("chunk-01.mp4").display()
        )
    );
    assert!(work.join("final.mp4").exists());
}

#[test]
fn manifest_beside_chunks_in_custom_work_dir() {
    let fx = fixture("00:00:00\n00:00:04\n");
    let plan = planner::plan(&loader::load(&fx.csv, 0).unwrap()).unwrap();
    let work = fx.dir.join("renders");
    let workspace = Workspace::new(&work).with_manifest("list.txt");

    let gateway = FakeFfmpeg::default();
    CutExecutor::new(&gateway, workspace)
        .execute(&fx.media, &plan)
        .unwrap();

    assert_eq!(
        fs::read_to_string(work.join("list.txt")).unwrap(),
        "file 'chunk-00.mp4'\n"
    );
    assert!(work.join("output.mp4").exists());
}

#[test]
fn more_than_a_hundred_chunks_get_wider_names() {
    let rows: String = (0..202u64)
        .map(|i| format!("00:{:02}:{:02}\n", i / 60, i % 60))
        .collect();
    let fx = fixture(&rows);
    let plan = planner::plan(&loader::load(&fx.csv, 0).unwrap()).unwrap();
    let names = plan.chunk_names();
    assert_eq!(names.len(), 101);
    assert_eq!(names[0], "chunk-000.mp4");
    assert_eq!(names[100], "chunk-100.mp4");
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(sorted, names);
}
