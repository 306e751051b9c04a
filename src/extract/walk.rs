// src/extract/walk.rs
//
// The grid walk: a left-fold over the ordered cell sequence with the
// group's schedule as accumulator. Classification and normalization happen
// per cell; placement comes from the cell's index alone.

use log::warn;

use crate::extract::classify::classify;
use crate::extract::clean::clean_location;
use crate::extract::merge::fold_session;
use crate::grid::GridShape;
use crate::model::{ClassSession, GroupSchedule};

/// Walk one group's raw cells into a complete schedule. Malformed cells
/// are skipped with a warning; the result always carries every day key.
pub fn extract<I, S>(cells: I, shape: &GridShape) -> GroupSchedule
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut schedule = GroupSchedule::new();
    let mut seen = 0usize;

    for (index, raw) in cells.into_iter().enumerate() {
        seen += 1;
        if index >= shape.cell_count() {
            // Keep counting for the mismatch warning, place nothing.
            continue;
        }

        let entry = match classify(raw.as_ref()) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                warn!("skipping cell {index}: {e}");
                continue;
            }
        };

        let (day, start) = shape.position(index);
        let session = ClassSession {
            name: entry.name,
            tutor: entry.tutor,
            kind: entry.kind,
            start,
            length: 1.0,
            location: clean_location(&entry.location),
        };
        fold_session(schedule.day_mut(day), session);
    }

    if seen != shape.cell_count() {
        warn!("grid had {seen} cells, expected {}", shape.cell_count());
    }

    schedule
}
