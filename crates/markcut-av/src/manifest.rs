//! Concat demuxer manifests.
//!
//! ffmpeg's concat demuxer reads one `file '<path>'` directive per line.
//! Relative paths are resolved against the manifest's own directory, so
//! chunks that live next to the manifest are listed by bare file name.

use std::fs;
use std::path::Path;

use markcut_common::Result;

/// Render a manifest listing `chunk_names` in order.
///
/// A single quote inside a name is written as `'\''`, which the concat
/// demuxer reads back as a literal quote.
pub fn render_manifest<S: AsRef<str>>(chunk_names: &[S]) -> String {
    chunk_names
        .iter()
        .map(|name| format!("file '{}'\n", name.as_ref().replace('\'', r"'\''")))
        .collect()
}

/// Write a manifest to `path`, replacing any existing file.
pub fn write_manifest<S: AsRef<str>>(chunk_names: &[S], path: &Path) -> Result<()> {
    fs::write(path, render_manifest(chunk_names))?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Wrote {} manifest entries to {:?}", chunk_names.len(), path);

    Ok(())
}
