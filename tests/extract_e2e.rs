// tests/extract_e2e.rs
use std::fs;
use std::path::PathBuf;

use tt_scrape::extract;
use tt_scrape::grid::GridShape;
use tt_scrape::params::Params;
use tt_scrape::progress::NullProgress;
use tt_scrape::runner;
use tt_scrape::source::DumpSource;
use tt_scrape::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tt_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn empty_grid() -> Vec<String> {
    vec![String::new(); GridShape::intranet().cell_count()]
}

#[test]
fn merged_lecture_round_trips_through_the_store() {
    let mut cells = empty_grid();
    cells[0] = "Room B201 (45)\nCS101_lec\nDr. Smith".to_string();
    cells[1] = "Room B201 (45)\nCS101_w\nDr. Smith".to_string();

    let sched = extract::extract(cells, &GridShape::intranet());

    let out = tmp_dir("roundtrip");
    let path = store::save_group(&out, "5BIS", "5BIS1", &sched).unwrap();
    assert_eq!(path, out.join("5BIS").join("5BIS1.json"));

    let loaded = store::load_group(&path).unwrap();
    let day1 = loaded.day(1);
    assert_eq!(day1.len(), 1);
    assert_eq!(day1[0].name, "CS101");
    assert_eq!(day1[0].start, 9.0);
    assert_eq!(day1[0].length, 2.0);
    assert_eq!(day1[0].location, "Room B201");
}

#[test]
fn output_json_shape_matches_downstream_expectations() {
    let mut cells = empty_grid();
    cells[11] = "Online Teams\nonline / CS201\nDr. Lee".to_string();

    let sched = extract::extract(cells, &GridShape::intranet());
    let out = tmp_dir("shape");
    let path = store::save_group(&out, "5BIS", "5BIS2", &sched).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    // 4-space pretty printing, day keys as strings.
    assert!(text.contains("    \"0\": []"));

    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    let obj = v.as_object().unwrap();
    let keys: Vec<&String> = obj.keys().collect();
    assert_eq!(keys, ["0", "1", "2", "3", "4", "5", "6", "7"]);

    let session = &v["2"][0];
    assert_eq!(session["name"], "CS201");
    assert_eq!(session["tutor"], "Dr. Lee");
    assert_eq!(session["type"], "online");
    assert_eq!(session["start"], 9.0);
    assert_eq!(session["length"], 1.0);
    assert_eq!(session["location"], "Online Teams");
    assert!(session["start"].is_number());
    assert!(session["length"].is_number());
}

#[test]
fn runner_isolates_bad_groups_and_writes_the_rest() {
    let cells_dir = tmp_dir("runner_cells");
    let out_dir = tmp_dir("runner_out");

    let mut grid = empty_grid();
    grid[0] = "Room B201\nCS101_s1\nDr. Smith".to_string();
    fs::write(
        cells_dir.join("5BIS1.json"),
        serde_json::to_string(&grid).unwrap(),
    )
    .unwrap();

    // Digit-led id with no [3-6] family match: fatal for this group only.
    fs::write(
        cells_dir.join("9XYZ1.json"),
        serde_json::to_string(&empty_grid()).unwrap(),
    )
    .unwrap();

    // Non-digit-led ids are filtered before extraction.
    fs::write(
        cells_dir.join("STAFF.json"),
        serde_json::to_string(&empty_grid()).unwrap(),
    )
    .unwrap();

    let mut params = Params::new();
    params.cells_dir = cells_dir.clone();
    params.out = Some(out_dir.clone());

    let source = DumpSource::new(cells_dir);
    let summary = runner::run(&params, &source, None).unwrap();

    assert_eq!(summary.files_written.len(), 1);
    assert!(out_dir.join("5BIS").join("5BIS1.json").is_file());
    assert!(!out_dir.join("9XYZ").exists());
    assert!(!out_dir.join("STAFF").exists());
}

#[test]
fn runner_group_filter_narrows_the_run() {
    let cells_dir = tmp_dir("filter_cells");
    let out_dir = tmp_dir("filter_out");

    for id in ["5BIS1", "5BIS2", "6ECwF1"] {
        fs::write(
            cells_dir.join(format!("{id}.json")),
            serde_json::to_string(&empty_grid()).unwrap(),
        )
        .unwrap();
    }

    let mut params = Params::new();
    params.cells_dir = cells_dir.clone();
    params.out = Some(out_dir.clone());
    params.groups_filter = Some(vec!["6ECwF1".to_string()]);

    let source = DumpSource::new(cells_dir);
    let mut progress = NullProgress;
    let summary = runner::run(&params, &source, Some(&mut progress)).unwrap();

    assert_eq!(summary.files_written.len(), 1);
    assert!(out_dir.join("6ECwF").join("6ECwF1.json").is_file());
    assert!(!out_dir.join("5BIS").exists());
}
