//! Workspace management for a cut run.

use std::path::{Path, PathBuf};

use markcut_common::{Error, Result};

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "ourlist.txt";

/// Default concatenated output file name.
pub const DEFAULT_OUTPUT: &str = "output.mp4";

/// Directory that receives the chunk files, the concat manifest and the
/// final output.
///
/// Manifest and output paths are resolved against the workspace directory
/// unless they are absolute.
///
/// # Example
///
/// ```no_run
/// use markcut_av::Workspace;
///
/// let workspace = Workspace::new("renders").with_output("final.mp4");
/// workspace.prepare()?;
/// assert!(workspace.chunk_path("chunk-00.mp4").starts_with("renders"));
/// # Ok::<(), markcut_common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    dir: PathBuf,
    manifest: PathBuf,
    output: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `dir` with the default manifest and
    /// output names.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            manifest: dir.join(DEFAULT_MANIFEST),
            output: dir.join(DEFAULT_OUTPUT),
            dir,
        }
    }

    /// Use a different manifest path.
    pub fn with_manifest<P: AsRef<Path>>(mut self, manifest: P) -> Self {
        self.manifest = self.dir.join(manifest);
        self
    }

    /// Use a different output path.
    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = self.dir.join(output);
        self
    }

    /// Get the workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the manifest path.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Get the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Path of a chunk file with the given name.
    pub fn chunk_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// How the manifest refers to chunk `name`.
    ///
    /// The concat demuxer resolves relative entries against the manifest's
    /// directory. A manifest kept beside the chunks lists bare names; any
    /// other manifest lists absolute chunk paths.
    pub fn manifest_entry(&self, name: &str) -> Result<String> {
        if self.manifest.parent() == Some(self.dir.as_path()) {
            return Ok(name.to_string());
        }

        let path = std::path::absolute(self.chunk_path(name))?;
        path.to_str()
            .map(str::to_string)
            .ok_or_else(|| Error::input(&path, "chunk path is not valid UTF-8"))
    }

    /// Create the workspace directory (and the parents of the manifest and
    /// output) if they do not exist yet.
    pub fn prepare(&self) -> Result<()> {
        for dir in [Some(self.dir.as_path()), self.manifest.parent(), self.output.parent()]
            .into_iter()
            .flatten()
            .filter(|d| !d.as_os_str().is_empty())
        {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::input(dir, format!("cannot create directory: {e}"))
            })?;
        }
        Ok(())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(".")
    }
}
