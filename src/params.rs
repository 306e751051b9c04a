// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_CELLS_DIR: &str = "cells";

/// Grid geometry of the intranet timetable page: Monday..Saturday,
/// 11 one-hour slots starting at 09:00.
pub const GRID_DAYS: usize = 6;
pub const SLOTS_PER_DAY: usize = 11;
pub const FIRST_SLOT_HOUR: f64 = 9.0;

/// Day-index keys emitted for every group, content or not. The intranet
/// schema reserves 0 and 7; only 1..6 ever carry sessions.
pub const DAY_KEY_MIN: u8 = 0;
pub const DAY_KEY_MAX: u8 = 7;

#[derive(Clone)]
pub struct Params {
    pub cells_dir: PathBuf,             // directory of per-group cell dumps
    pub out: Option<PathBuf>,           // output root (dir), default "data"
    pub groups_filter: Option<Vec<String>>, // restrict to these group ids
    pub list_groups: bool,              // list discovered groups then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            cells_dir: PathBuf::from(DEFAULT_CELLS_DIR),
            out: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            groups_filter: None,
            list_groups: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
