// src/model.rs
//
// Output data model. A GroupSchedule is built fresh per group by the grid
// walk, handed to the store for serialization, then dropped; nothing is
// retained across groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::params::{DAY_KEY_MIN, DAY_KEY_MAX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Online,
    Lecture,
    Workshop,
    Seminar,
}

/// One contiguous class meeting: one or more merged hour slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub name: String,
    pub tutor: String,
    #[serde(rename = "type")]
    pub kind: ClassType,
    pub start: f64,
    pub length: f64,
    pub location: String,
}

/// Per-day session lists for one group, keyed by day-index strings
/// "0".."7". All eight keys are always present; only "1".."6"
/// (Monday..Saturday) ever hold sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSchedule {
    days: BTreeMap<String, Vec<ClassSession>>,
}

impl GroupSchedule {
    pub fn new() -> Self {
        let days = (DAY_KEY_MIN..=DAY_KEY_MAX)
            .map(|d| (d.to_string(), Vec::new()))
            .collect();
        Self { days }
    }

    pub fn day(&self, day: u8) -> &[ClassSession] {
        self.days.get(&day.to_string()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn day_mut(&mut self, day: u8) -> &mut Vec<ClassSession> {
        self.days.entry(day.to_string()).or_default()
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl Default for GroupSchedule {
    fn default() -> Self { Self::new() }
}
