// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting used by batch rewrites.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of inputs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one input has been rewritten; `None` means it went to stdout.
    fn item_done(&mut self, _source: &str, _written: Option<&Path>) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
