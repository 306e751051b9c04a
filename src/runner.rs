// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::course::course_family;
use crate::extract;
use crate::grid::GridShape;
use crate::params::{DEFAULT_OUT_DIR, Params};
use crate::progress::Progress;
use crate::source::CellSource;
use crate::store;

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Process every undergraduate group the source knows about: walk the
/// grid, derive the course family, write the JSON file. A failure in one
/// group is logged and never aborts the remaining groups.
pub fn run(
    params: &Params,
    source: &dyn CellSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let shape = GridShape::intranet();
    let out_dir = params
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let mut groups = source.group_ids()?;
    // Undergrad groups start with a digit (e.g. "5BIS1"); postgrad and
    // staff dropdown entries do not and are skipped outright.
    groups.retain(|g| g.chars().next().is_some_and(|c| c.is_ascii_digit()));
    if let Some(filter) = &params.groups_filter {
        groups.retain(|g| filter.iter().any(|f| f == g));
    }

    if groups.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No groups to process (after filtering).");
        }
        return Ok(RunSummary { files_written: Vec::new() });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(groups.len());
    }

    let mut written = Vec::with_capacity(groups.len());
    for group in &groups {
        info!("extracting {group}");

        let family = match course_family(group) {
            Ok(f) => f,
            Err(e) => {
                error!("{e}; skipping group");
                continue;
            }
        };
        let cells = match source.cells(group) {
            Ok(c) => c,
            Err(e) => {
                warn!("could not read cells for {group}: {e}; skipping group");
                continue;
            }
        };

        let schedule = extract::extract(cells, &shape);
        let path = store::save_group(&out_dir, &family, group, &schedule)?;
        info!("{group}: {} session(s) -> {}", schedule.session_count(), path.display());

        if let Some(p) = progress.as_deref_mut() {
            p.group_done(group, &path);
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { files_written: written })
}
