//! Support library for the digen CLI binary.
//!
//! Exposes the command and logging modules so tests can drive dataset
//! generation without spawning a subprocess.

pub mod cli;
pub mod logging;
