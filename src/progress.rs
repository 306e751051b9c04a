// src/progress.rs
/// Lightweight progress reporting for long-running runs over many groups.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of groups (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one group's file has been written.
    fn group_done(&mut self, _group_id: &str, _path: &std::path::Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
