// src/extract/merge.rs

use crate::model::{ClassSession, ClassType};

/// Fold one newly classified session into a day's running list: extend the
/// day's last session by an hour when it is the same class continuing,
/// otherwise append.
///
/// Only the immediately preceding entry is consulted, and no slot-gap
/// check is made. Two consequences, both kept from the source grid's
/// behavior: a same-named session further back never merges, and an empty
/// cell between two hours of the same class does not break the fold.
pub fn fold_session(day: &mut Vec<ClassSession>, next: ClassSession) {
    if let Some(prev) = day.last_mut() {
        if continues(prev, &next) {
            prev.length += 1.0;
            return;
        }
    }
    day.push(next);
}

/// Same class spilling into the next slot. The lecture/workshop pairing
/// covers grids where the second hour of a lecture carries a "w" marker;
/// the first entry's type is the one kept.
fn continues(prev: &ClassSession, next: &ClassSession) -> bool {
    prev.name == next.name
        && (prev.kind == next.kind
            || (prev.kind == ClassType::Lecture && next.kind == ClassType::Workshop))
}
