// src/extract/clean.rs
//
// Location normalization. Room cells often carry a capacity annotation,
// e.g. "Room B201 (45)". Two tiers: splice out a purely numeric "(NN)"
// run, otherwise cut the string at the first "(". Either way the result
// never keeps an unmatched parenthesis.

use std::sync::LazyLock;

use regex::Regex;

static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("capacity regex"));

/// Strip a room-capacity annotation from a raw location. Idempotent.
pub fn clean_location(raw: &str) -> String {
    if !raw.contains('(') {
        return s!(raw);
    }

    match CAPACITY_RE.find(raw) {
        Some(m) => {
            // Splice the annotation out and collapse doubled whitespace.
            let spliced = format!("{}{}", &raw[..m.start()], &raw[m.end()..]);
            spliced.split_whitespace().collect::<Vec<_>>().join(" ")
        }
        // Non-numeric annotation: coarser cut at the first "(".
        None => raw.split('(').next().unwrap_or_default().trim().to_string(),
    }
}
