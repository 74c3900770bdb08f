//! Checks a candidate solution against a CNF problem.

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use heron_sat::{config::Config, context::Context};

/// Checks whether a solution satisfies a CNF problem.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The CNF problem, as a DIMACS file
    cnf_file: PathBuf,

    /// The candidate solution, as a DIMACS `v ` line
    sat_file: PathBuf,
}

fn open(path: &Path) -> Result<BufReader<File>, ExitCode> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => {
            eprintln!("Could not open file '{}': {e}", path.display());
            Err(ExitCode::from(2))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "log")]
    heron_sat::misc::log::enable(log::LevelFilter::Debug);

    let mut the_context = Context::from_config(Config::default());

    let cnf = match open(&args.cnf_file) {
        Ok(reader) => reader,
        Err(code) => return code,
    };
    if let Err(e) = the_context.read_dimacs(cnf) {
        eprintln!("Could not parse '{}': {e:?}", args.cnf_file.display());
        return ExitCode::from(2);
    }

    let sat = match open(&args.sat_file) {
        Ok(reader) => reader,
        Err(code) => return code,
    };
    let solution = match the_context.read_solution(sat) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Could not parse '{}': {e:?}", args.sat_file.display());
            return ExitCode::from(2);
        }
    };

    match the_context.check_solution(&solution) {
        Ok(true) => {
            println!("The solution is valid.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("The solution is not valid.");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Check error: {e:?}");
            ExitCode::from(2)
        }
    }
}
