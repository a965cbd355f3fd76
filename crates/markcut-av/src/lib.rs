//! # markcut-av
//!
//! ffmpeg-backed media operations for markcut.
//!
//! This crate provides:
//!
//! - **Tool discovery** ([`tools`]) -- locate ffmpeg from an explicit path, a
//!   distribution prefix, or `PATH`.
//! - **Command execution** ([`ToolCommand`]) -- builder that logs and runs an
//!   external process and turns a non-zero exit into an error.
//! - **Actions** ([`actions`]) -- stream-copy chunk cutting and concat-demuxer
//!   joining.
//! - **Manifests** ([`manifest`]) -- the `file '...'` list the concat demuxer
//!   reads.
//! - **Workspace** ([`Workspace`]) -- where chunks, manifest and output live.
//! - **Gateway** ([`MediaGateway`]) -- the trait the cut pipeline drives, with
//!   [`Ffmpeg`] as its implementation.
//!
//! ## Features
//!
//! - `tracing` - Log commands and progress through `tracing`
//!
//! ## Example
//!
//! ```no_run
//! use markcut_av::{Ffmpeg, MediaGateway, ToolsConfig, Workspace};
//! use std::path::Path;
//!
//! let ffmpeg = Ffmpeg::discover(&ToolsConfig::default())?;
//! let workspace = Workspace::default();
//! let chunk = workspace.chunk_path("chunk-00.mp4");
//! ffmpeg.cut(Path::new("stream.mp4"), 15, 10, &chunk)?;
//! ffmpeg.write_manifest(&["chunk-00.mp4".to_string()], workspace.manifest())?;
//! ffmpeg.concat(workspace.manifest(), workspace.output())?;
//! # Ok::<(), markcut_common::Error>(())
//! ```

pub mod actions;
pub mod command;
pub mod gateway;
pub mod manifest;
pub mod tools;
pub mod workspace;

// Re-exports
pub use command::ToolCommand;
pub use gateway::{Ffmpeg, MediaGateway};
pub use tools::{ToolInfo, ToolsConfig};
pub use workspace::Workspace;
