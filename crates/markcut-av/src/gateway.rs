//! The seam between cut planning and the media tool that does the work.

use std::path::{Path, PathBuf};

use markcut_common::{Result, Seconds};

use crate::tools::{self, ToolsConfig};
use crate::{actions, manifest};

/// Operations a cut run needs from a media tool.
///
/// [`Ffmpeg`] is the production implementation; tests substitute a
/// recording fake.
pub trait MediaGateway {
    /// Copy `duration` seconds of `input`, starting at `start`, into
    /// `output`, creating or overwriting it.
    fn cut(&self, input: &Path, start: Seconds, duration: Seconds, output: &Path) -> Result<()>;

    /// Write the concat manifest listing `chunk_names` in order.
    fn write_manifest(&self, chunk_names: &[String], manifest_path: &Path) -> Result<()> {
        manifest::write_manifest(chunk_names, manifest_path)
    }

    /// Join the files listed in `manifest_path` into `output`.
    fn concat(&self, manifest_path: &Path, output: &Path) -> Result<()>;
}

/// [`MediaGateway`] backed by the ffmpeg command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ffmpeg {
    path: PathBuf,
    overwrite: bool,
}

impl Ffmpeg {
    /// Use the ffmpeg binary at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            overwrite: false,
        }
    }

    /// Locate ffmpeg as described by `config`.
    pub fn discover(config: &ToolsConfig) -> Result<Self> {
        let path = tools::resolve_ffmpeg(config)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Using ffmpeg at {:?}", path);

        Ok(Self::new(path).overwrite(config.overwrite))
    }

    /// Pass `-y` so existing outputs are replaced without a prompt.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Path of the ffmpeg binary.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MediaGateway for Ffmpeg {
    fn cut(&self, input: &Path, start: Seconds, duration: Seconds, output: &Path) -> Result<()> {
        actions::cut_chunk(&self.path, input, start, duration, output, self.overwrite)
    }

    fn concat(&self, manifest_path: &Path, output: &Path) -> Result<()> {
        actions::concat_chunks(&self.path, manifest_path, output, self.overwrite)
    }
}
