// src/extract/classify.rs
//
// Single-cell classification. Every non-empty grid cell ends with the same
// three lines: location, name-with-qualifiers, tutor. Anything above those
// is page decoration and ignored.

use thiserror::Error;

use crate::model::ClassType;

/// A classified cell before grid placement. `start`/`length` are assigned
/// by the walk from the cell's position, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEntry {
    pub location: String,
    pub name: String,
    pub tutor: String,
    pub kind: ClassType,
}

/// Cell text that does not follow the undergrad formatting. Recoverable:
/// callers skip the cell and keep walking.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("cell has {0} line(s), expected location / name / tutor tail")]
    TooFewLines(usize),
    #[error("name {0:?} has no underscore segment to read a type marker from")]
    NoTypeMarker(String),
}

type TypePredicate = fn(&str) -> Result<bool, ShapeError>;

/// Priority-ordered classification rules over the raw name field. Order is
/// load-bearing: online sessions use a "<kind> / <name>" format whose
/// underscores would otherwise trip the workshop check.
const TYPE_RULES: [(TypePredicate, ClassType); 4] = [
    (is_online, ClassType::Online),
    (is_lecture, ClassType::Lecture),
    (is_workshop, ClassType::Workshop),
    (is_seminar, ClassType::Seminar),
];

fn is_online(name: &str) -> Result<bool, ShapeError> {
    Ok(name.contains("online"))
}

fn is_lecture(name: &str) -> Result<bool, ShapeError> {
    Ok(name.contains("lec"))
}

fn is_workshop(name: &str) -> Result<bool, ShapeError> {
    match name.split('_').nth(1) {
        Some(segment) => Ok(segment.starts_with('w')),
        None => Err(ShapeError::NoTypeMarker(name.to_string())),
    }
}

fn is_seminar(_name: &str) -> Result<bool, ShapeError> {
    Ok(true)
}

/// Classify one raw cell. `Ok(None)` means an empty slot; `Err` means the
/// cell text is malformed and should be skipped with a diagnostic.
pub fn classify(raw: &str) -> Result<Option<RawEntry>, ShapeError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() < 3 {
        return Err(ShapeError::TooFewLines(lines.len()));
    }
    let tutor = lines[lines.len() - 1];
    let mut name = s!(lines[lines.len() - 2]);
    let location = lines[lines.len() - 3];

    let mut kind = ClassType::Seminar;
    for (matches, candidate) in TYPE_RULES {
        if matches(&name)? {
            kind = candidate;
            break;
        }
    }

    // Online names carry the real name after the last " / " separator.
    if kind == ClassType::Online {
        name = name.rsplit(" / ").next().unwrap_or_default().to_string();
    }

    // Canonical name: everything before the first underscore qualifier.
    let name = name.split('_').next().unwrap_or_default().to_string();

    Ok(Some(RawEntry {
        location: s!(location),
        name,
        tutor: s!(tutor),
        kind,
    }))
}
