mod dimacs;
mod plotting;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use sat_core::{solve_breadth_first, solve_depth_first, FormulaStore, FormulaStoreBuilder};

/// Races the depth-first and breadth-first drivers over a directory of
/// DIMACS CNF fixtures.
#[derive(Parser, Debug)]
#[command(name = "satbench", version, about)]
struct Cli {
    /// Directory of `.cnf` test fixtures
    #[arg(short, long)]
    input: PathBuf,

    /// Write an SVG runtime comparison here
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn load_files(dir: &Path) -> std::io::Result<Vec<(String, FormulaStore)>> {
    let mut out = Vec::new();
    if !dir.is_dir() {
        return Ok(out);
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let mut buffer = String::new();
        BufReader::new(File::open(&path)?).read_to_string(&mut buffer)?;
        let parsed = match dimacs::parse(buffer.as_bytes()) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let mut builder = FormulaStoreBuilder::new(parsed.num_vars, parsed.num_clauses);
        let mut ok = true;
        for clause in parsed.clauses {
            if builder.push_clause(clause).is_err() {
                ok = false;
                break;
            }
        }
        if !ok {
            continue;
        }
        let Ok(store) = builder.build() else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        out.push((name, store));
    }
    Ok(out)
}

fn time_driver<F: Fn(&FormulaStore)>(name: &str, driver: F, fixtures: &[(String, FormulaStore)]) -> Vec<Duration> {
    let mut durations = Vec::with_capacity(fixtures.len());
    for (fixture_name, store) in fixtures {
        let start = Instant::now();
        driver(store);
        let elapsed = start.elapsed();
        info!("{}: {} took {:?}", name, fixture_name, elapsed);
        durations.push(elapsed);
    }
    durations
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let fixtures = load_files(&cli.input).unwrap_or_else(|e| {
        eprintln!("could not read {}: {}", cli.input.display(), e);
        std::process::exit(1);
    });

    if fixtures.is_empty() {
        eprintln!("no `.cnf` fixtures found in {}", cli.input.display());
        return;
    }

    let mut measurement = HashMap::new();
    measurement.insert(
        "depth-first".to_string(),
        time_driver("depth-first", |store| { solve_depth_first(store); }, &fixtures),
    );
    measurement.insert(
        "breadth-first".to_string(),
        time_driver(
            "breadth-first",
            |store| { let _ = solve_breadth_first(store); },
            &fixtures,
        ),
    );

    for (name, durations) in &measurement {
        let total: Duration = durations.iter().sum();
        println!("{}: {} fixture(s), {:?} total", name, durations.len(), total);
    }

    if let Some(path) = cli.plot {
        if let Err(e) = plotting::plot_runtimes(measurement, &path, (1280, 720)) {
            eprintln!("could not write plot to {}: {}", path.display(), e);
        }
    }
}
