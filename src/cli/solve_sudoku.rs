//! Solves a 9×9 sudoku grid by encoding it as a CNF problem.

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;

use heron_sat::{
    config::Config,
    context::Context,
    dispatch::listeners::{ChronoListener, StatisticsListener},
    reports, sudoku,
};

/// Solves a 9×9 sudoku grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = "\
Solves a 9×9 sudoku grid.

A grid file is a text file listing the known cells, one per line, in any
order. Each cell is a triplet of digits <line><column><value>, so `347`
states the cell at line 3, column 4 holds 7.")]
struct Args {
    /// The known cells, one <line><column><value> triplet per line
    grid_file: PathBuf,

    /// Display search statistics on completion
    #[arg(short, long)]
    stats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "log")]
    heron_sat::misc::log::enable(log::LevelFilter::Debug);

    let mut the_context = Context::from_config(Config::default());

    let statistics = Rc::new(RefCell::new(StatisticsListener::default()));
    let chrono = Rc::new(RefCell::new(ChronoListener::default()));
    if args.stats {
        the_context.add_listener(statistics.clone());
        the_context.add_listener(chrono.clone());
    }

    let file = match File::open(&args.grid_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Could not open file '{}': {e}", args.grid_file.display());
            return ExitCode::from(2);
        }
    };
    let cells = match sudoku::load_grid(BufReader::new(file)) {
        Ok(cells) => cells,
        Err(e) => {
            eprintln!("Could not parse '{}': {e:?}", args.grid_file.display());
            return ExitCode::from(2);
        }
    };

    let next_id = match sudoku::generate_constraints(&mut the_context) {
        Ok(next_id) => next_id,
        Err(e) => {
            eprintln!("Constraint generation failed: {e:?}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = sudoku::add_known_cells(&mut the_context, &cells, next_id) {
        eprintln!("Could not add the known cells: {e:?}");
        return ExitCode::from(2);
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Solve error: {e:?}");
            return ExitCode::from(2);
        }
    };

    match report {
        reports::Solve::Satisfiable => {
            let grid = match sudoku::grid_from_valuation(the_context.valuation()) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("The valuation does not settle the grid: {e:?}");
                    return ExitCode::from(2);
                }
            };
            print!("{}", sudoku::format_grid(&grid));
        }
        _ => println!("The grid cannot be solved."),
    }

    if args.stats {
        println!("{}", statistics.borrow());
        println!("{}", chrono.borrow());
    }

    ExitCode::SUCCESS
}
