//! Markcut-Common: shared error types and timecode handling.
//!
//! This crate provides the pieces every other markcut crate agrees on:
//!
//! - **Error Handling**: one [`Error`] enum covering malformed timestamps,
//!   unreadable input, invalid cut lists and external tool failures
//! - **Timecodes**: [`timecode::parse`] and [`timecode::format`] convert
//!   between `HH:MM:SS` text and whole [`Seconds`]
//!
//! # Examples
//!
//! ```
//! use markcut_common::{timecode, ErrorKind};
//!
//! let secs = timecode::parse("00:01:30").unwrap();
//! assert_eq!(secs, 90);
//! assert_eq!(timecode::format(secs + 10), "00:01:40");
//!
//! let err = timecode::parse("1:2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Format);
//! ```

pub mod error;
pub mod timecode;

pub use error::{Error, ErrorKind, Result};
pub use timecode::{Seconds, Timecode};
