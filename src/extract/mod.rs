// src/extract/mod.rs
mod classify;
mod clean;
mod merge;
mod walk;

pub use classify::{classify, RawEntry, ShapeError};
pub use clean::clean_location;
pub use merge::fold_session;
pub use walk::extract;
