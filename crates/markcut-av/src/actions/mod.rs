//! ffmpeg operations.
//!
//! This module provides the two stream-copy operations a cut run needs:
//! - Cutting a time range out of the input into a chunk file
//! - Concatenating chunk files listed in a manifest

mod concat;
mod cut;

pub use concat::{concat_args, concat_chunks};
pub use cut::{cut_args, cut_chunk};
