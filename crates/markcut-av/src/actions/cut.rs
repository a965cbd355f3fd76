//! Chunk extraction.

use std::ffi::OsString;
use std::path::Path;

use markcut_common::{Result, Seconds};

use crate::ToolCommand;

/// Build the ffmpeg arguments that copy `duration` seconds of `input`,
/// starting at `start`, into `output` without re-encoding.
///
/// The seek comes before `-i` so ffmpeg jumps straight to the start
/// instead of decoding up to it.
pub fn cut_args(
    input: &Path,
    start: Seconds,
    duration: Seconds,
    output: &Path,
    overwrite: bool,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    if overwrite {
        args.push("-y".into());
    }
    args.push("-ss".into());
    args.push(start.to_string().into());
    args.push("-i".into());
    args.push(input.into());
    args.push("-c".into());
    args.push("copy".into());
    args.push("-t".into());
    args.push(duration.to_string().into());
    args.push(output.into());
    args
}

/// Cut one chunk with the ffmpeg binary at `ffmpeg`.
pub fn cut_chunk(
    ffmpeg: &Path,
    input: &Path,
    start: Seconds,
    duration: Seconds,
    output: &Path,
    overwrite: bool,
) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Cutting {}s from {:?} at {}s into {:?}",
        duration,
        input,
        start,
        output
    );

    ToolCommand::new(ffmpeg.to_path_buf())
        .args(cut_args(input, start, duration, output, overwrite))
        .run()?;

    Ok(())
}
