// src/source.rs
//
// Input boundary. The browser-driving collaborator owns login, dropdown
// selection and DOM waits; what crosses the seam is one ordered cell dump
// per group. `DumpSource` reads those dumps from disk for offline runs.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Supplier of raw grid text, one dump per group. Cells are in row-major
/// day-then-slot order, exactly as rendered on the page.
pub trait CellSource {
    fn group_ids(&self) -> Result<Vec<String>, Box<dyn Error>>;
    fn cells(&self, group_id: &str) -> Result<Vec<String>, Box<dyn Error>>;
}

/// Directory of `<group>.json` files, each holding a JSON array of raw
/// cell strings (66 for the standard grid).
pub struct DumpSource {
    dir: PathBuf,
}

impl DumpSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CellSource for DumpSource {
    fn group_ids(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some("json") { continue; }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(s!(stem));
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn cells(&self, group_id: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let path = self.dir.join(format!("{group_id}.json"));
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
