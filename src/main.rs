use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use seriate::solve::Varisat;
use seriate::{solve_instance, Instance, Outcome};

/// Recover total orders from triple ordering constraints via SAT.
///
/// Each instance file holds an entity count, a hint count, and one hint per
/// line; a solved instance is written next to it (or under --output) as a
/// single line of entity names, earliest first.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Instance files, or directories to scan for `.in` files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory to write `.out` files into, instead of next to each input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop at the first instance that fails or is unsolvable.
    #[arg(long)]
    fail_fast: bool,
}

fn discover(inputs: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries = fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "in"))
                .collect::<Vec<_>>();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn out_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut path = match output_dir {
        Some(dir) => dir.join(input.file_name().unwrap_or_default()),
        None => input.to_path_buf(),
    };
    path.set_extension("out");
    path
}

/// Solve one instance file and persist the order. `Ok(false)` means the
/// instance was processed but has no solution to write.
fn process(input: &Path, output_dir: Option<&Path>) -> Result<bool, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let instance: Instance = text.parse()?;

    match solve_instance(&instance, &mut Varisat)? {
        Outcome::Solved(order) => {
            let path = out_path(input, output_dir);
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", order.join(" "))?;
            log::info!("{} solved, order written to {}", input.display(), path.display());
            Ok(true)
        }
        Outcome::Unsatisfiable => {
            log::error!("{}: hints admit no total order", input.display());
            Ok(false)
        }
        Outcome::Timeout => {
            log::error!("{}: solver timed out", input.display());
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let files = match discover(&args.inputs) {
        Ok(files) => files,
        Err(e) => {
            log::error!("scanning inputs: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for file in &files {
        match process(file, args.output.as_deref()) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(e) => {
                log::error!("{}: {e}", file.display());
                failures += 1;
            }
        }
        if failures > 0 && args.fail_fast {
            break;
        }
    }

    log::info!("{} of {} instances solved", files.len() - failures, files.len());
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
