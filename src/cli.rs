// src/cli.rs
use std::{env, path::Path, path::PathBuf};

use crate::params::Params;
use crate::progress::Progress;
use crate::runner;
use crate::source::{CellSource, DumpSource};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let source = DumpSource::new(params.cells_dir.clone());

    if params.list_groups {
        for id in source.group_ids()? {
            println!("{id}");
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    runner::run(&params, &source, Some(&mut progress)).map(|_| ())
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("{total} group(s) to process");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn group_done(&mut self, group_id: &str, path: &Path) {
        eprintln!("{group_id} -> {}", path.display());
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-c" | "--cells" => {
                params.cells_dir = PathBuf::from(args.next().ok_or("Missing value for --cells")?);
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-g" | "--group" => {
                let v = args.next().ok_or("Missing value for --group")?;
                let list = params.groups_filter.get_or_insert_with(Vec::new);
                for part in v.split(',') {
                    let part = part.trim();
                    if !part.is_empty() { list.push(s!(part)); }
                }
            }
            "--list-groups" => params.list_groups = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
