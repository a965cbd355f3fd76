//! External tool detection.
//!
//! markcut needs exactly one tool, ffmpeg. It is located from an explicit
//! path, a distribution prefix, or `PATH`, in that order.

use std::path::{Path, PathBuf};
use std::process::Command;

use markcut_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name of the ffmpeg executable.
pub const FFMPEG: &str = "ffmpeg";

/// Where to find ffmpeg and how to call it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Explicit path to the ffmpeg binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Prefix of a custom ffmpeg distribution; the binary is looked up at
    /// `<prefix>/bin/ffmpeg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_prefix: Option<PathBuf>,

    /// Pass `-y` to ffmpeg so existing outputs are overwritten without asking.
    #[serde(default)]
    pub overwrite: bool,
}

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Resolved path to the tool executable.
    pub path: PathBuf,
    /// First line of the `-version` output, if the tool ran.
    pub version: Option<String>,
}

/// Locate ffmpeg according to `config`.
///
/// An explicit `ffmpeg_path` that does not exist is an error rather than a
/// silent fallback; a prefix without a binary falls through to `PATH`.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if no ffmpeg binary can be found.
pub fn resolve_ffmpeg(config: &ToolsConfig) -> Result<PathBuf> {
    if let Some(path) = config.ffmpeg_path.as_deref() {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::tool_not_found(path.display().to_string()));
    }

    if let Some(prefix) = config.ffmpeg_prefix.as_deref() {
        let candidate = prefix_binary(prefix);
        if candidate.exists() {
            return Ok(candidate);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "No ffmpeg under prefix {:?}, falling back to PATH",
            prefix
        );
    }

    require_tool(FFMPEG)
}

/// Require that a tool is on `PATH`, returning its path.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Describe the ffmpeg binary at `path` by asking it for its version.
pub fn describe(path: &Path) -> ToolInfo {
    let version = Command::new(path)
        .arg("-version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string())
        });

    ToolInfo {
        name: FFMPEG.to_string(),
        path: path.to_path_buf(),
        version,
    }
}

fn prefix_binary(prefix: &Path) -> PathBuf {
    prefix.join("bin").join(FFMPEG)
}
