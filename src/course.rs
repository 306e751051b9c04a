// src/course.rs
//
// Course-family keys partition the output tree: every section of a cohort
// ("5BIS1", "5BIS2") lands under one "5BIS" directory.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Undergrad groups are a level digit 3..6 followed by the course letters.
static FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[3-6]\D+").expect("family regex"));

#[derive(Debug, Error)]
#[error("group id {0:?} does not follow the undergraduate naming convention")]
pub struct UnknownGroupFormat(pub String);

/// Family key for a group id, e.g. "5BIS1" → "5BIS", "6ECwF2" → "6ECwF".
/// Fatal for the group when nothing matches: the id is outside the format
/// this extractor understands.
pub fn course_family(group_id: &str) -> Result<String, UnknownGroupFormat> {
    FAMILY_RE
        .find(group_id)
        .map(|m| s!(m.as_str()))
        .ok_or_else(|| UnknownGroupFormat(s!(group_id)))
}
