//! Markcut - cut keep-intervals out of a video and join them losslessly
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod loader;
pub mod pipeline;
pub mod planner;
pub mod report;
