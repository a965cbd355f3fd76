use markcut_av::{MediaGateway, Workspace};
use markcut_common::{Error, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::planner::{CutPlan, PlannedCut};

/// Files produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub chunks: Vec<PathBuf>,
    /// The joined file, absent for single-chunk renders.
    pub output: Option<PathBuf>,
}

/// Execute a cut plan against a media gateway
pub struct CutExecutor<'a, G> {
    gateway: &'a G,
    workspace: Workspace,
    jobs: usize,
}

impl<'a, G: MediaGateway + Sync> CutExecutor<'a, G> {
    pub fn new(gateway: &'a G, workspace: Workspace) -> Self {
        Self {
            gateway,
            workspace,
            jobs: 1,
        }
    }

    /// Cut up to `jobs` chunks at once. Values below 1 are treated as 1.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Cut every chunk of `plan` out of `input`, list them in the manifest
    /// and join them into the output.
    pub fn execute(&self, input: &Path, plan: &CutPlan) -> Result<ExecutionSummary> {
        if plan.is_empty() {
            return Err(Error::shape(
                "nothing to cut: the timestamp table has no rows",
            ));
        }

        let chunks: Vec<PathBuf> = plan
            .cuts()
            .iter()
            .map(|cut| self.workspace.chunk_path(&cut.chunk))
            .collect();
        let manifest = self.workspace.manifest().to_path_buf();
        let output = self.workspace.output().to_path_buf();

        self.prepare(input)?;
        self.cut_all(input, plan)?;

        let entries = plan
            .cuts()
            .iter()
            .map(|cut| self.workspace.manifest_entry(&cut.chunk))
            .collect::<Result<Vec<_>>>()?;
        self.gateway.write_manifest(&entries, &manifest)?;
        self.gateway.concat(&manifest, &output)?;
        tracing::info!("Joined {} chunks into {:?}", plan.len(), output);

        Ok(ExecutionSummary {
            chunks,
            output: Some(output),
        })
    }

    /// Cut only chunk `index` of `plan`; no manifest or output is written.
    pub fn execute_chunk(
        &self,
        input: &Path,
        plan: &CutPlan,
        index: usize,
    ) -> Result<ExecutionSummary> {
        let cut = plan.get(index).ok_or_else(|| {
            Error::shape(format!(
                "{index} is not a valid chunk number; the plan has {} chunks",
                plan.len()
            ))
        })?;

        self.prepare(input)?;
        self.cut_one(input, cut, 1, 1)?;

        Ok(ExecutionSummary {
            chunks: vec![self.workspace.chunk_path(&cut.chunk)],
            output: None,
        })
    }

    fn prepare(&self, input: &Path) -> Result<()> {
        if !input.is_file() {
            return Err(Error::input(input, "media file does not exist"));
        }
        self.workspace.prepare()
    }

    fn cut_all(&self, input: &Path, plan: &CutPlan) -> Result<()> {
        let total = plan.len();

        if self.jobs == 1 {
            for (i, cut) in plan.cuts().iter().enumerate() {
                self.cut_one(input, cut, i + 1, total)?;
            }
            return Ok(());
        }

        tracing::debug!("Cutting {} chunks on {} workers", total, self.jobs);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;

        pool.install(|| {
            plan.cuts()
                .par_iter()
                .enumerate()
                .try_for_each(|(i, cut)| self.cut_one(input, cut, i + 1, total))
        })
    }

    fn cut_one(&self, input: &Path, cut: &PlannedCut, n: usize, total: usize) -> Result<()> {
        tracing::info!(
            "[{}/{}] {} ({} -> {})",
            n,
            total,
            cut.chunk,
            markcut_common::timecode::format(cut.interval.start),
            markcut_common::timecode::format(cut.interval.end)
        );

        let output = self.workspace.chunk_path(&cut.chunk);
        self.gateway
            .cut(input, cut.interval.start, cut.duration(), &output)
            .inspect_err(|e| tracing::error!("Failed to cut {}: {}", cut.chunk, e))
    }
}
