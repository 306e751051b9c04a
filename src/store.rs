// src/store.rs
//
// Output boundary: one JSON file per group at <out>/<family>/<group>.json.
// 4-space pretty printing keeps the files diffable and matches what the
// downstream viewers already consume.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::file::{ensure_directory, sanitize_group_filename};
use crate::model::GroupSchedule;

pub fn save_group(
    out_dir: &Path,
    family: &str,
    group_id: &str,
    schedule: &GroupSchedule,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = out_dir.join(family);
    ensure_directory(&dir)?;
    let path = dir.join(format!("{}.json", sanitize_group_filename(group_id)));

    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);
    {
        let fmt = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
        schedule.serialize(&mut ser)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(path)
}

pub fn load_group(path: &Path) -> Result<GroupSchedule, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
