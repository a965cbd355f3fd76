//! Lossless concatenation through the concat demuxer.

use std::ffi::OsString;
use std::path::Path;

use markcut_common::Result;

use crate::ToolCommand;

/// Build the ffmpeg arguments that join the files listed in `manifest`
/// into `output` without re-encoding.
///
/// `-safe 0` lets the manifest reference absolute paths and names the
/// demuxer would otherwise reject.
pub fn concat_args(manifest: &Path, output: &Path, overwrite: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    if overwrite {
        args.push("-y".into());
    }
    for arg in ["-f", "concat", "-safe", "0", "-i"] {
        args.push(arg.into());
    }
    args.push(manifest.into());
    args.push("-c".into());
    args.push("copy".into());
    args.push(output.into());
    args
}

/// Concatenate the chunks listed in `manifest` with the ffmpeg binary at
/// `ffmpeg`.
pub fn concat_chunks(ffmpeg: &Path, manifest: &Path, output: &Path, overwrite: bool) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("Concatenating chunks from {:?} into {:?}", manifest, output);

    ToolCommand::new(ffmpeg.to_path_buf())
        .args(concat_args(manifest, output, overwrite))
        .run()?;

    Ok(())
}
