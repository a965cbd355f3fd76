use markcut_av::workspace::{DEFAULT_MANIFEST, DEFAULT_OUTPUT};
use markcut_av::{ToolsConfig, Workspace};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::planner::ChunkNaming;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory that receives chunks, the manifest and the output
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    #[serde(default = "default_chunk_prefix")]
    pub chunk_prefix: String,

    #[serde(default = "default_chunk_extension")]
    pub chunk_extension: String,

    /// Concat manifest, relative to `work_dir` unless absolute
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Final joined file, relative to `work_dir` unless absolute
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_chunk_prefix() -> String {
    ChunkNaming::default().prefix
}
fn default_chunk_extension() -> String {
    ChunkNaming::default().extension
}
fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
            chunk_prefix: default_chunk_prefix(),
            chunk_extension: default_chunk_extension(),
            manifest: default_manifest(),
            output: default_output(),
        }
    }
}

impl OutputConfig {
    pub fn chunk_naming(&self) -> ChunkNaming {
        ChunkNaming {
            prefix: self.chunk_prefix.clone(),
            extension: self.chunk_extension.clone(),
        }
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(&self.work_dir)
            .with_manifest(&self.manifest)
            .with_output(&self.output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Number of cuts to run at once (1 = one after another)
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_jobs() -> usize {
    1
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { jobs: default_jobs() }
    }
}
