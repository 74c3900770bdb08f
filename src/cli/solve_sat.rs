//! Solves a CNF problem read from a DIMACS file.

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::cell::RefCell;
use std::fs::File;
use std::io::{stdout, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor::MoveToColumn,
    execute,
    terminal::{Clear, ClearType},
};

use heron_sat::{
    config::{Config, PolarityChoice, VariableChoice},
    context::Context,
    dispatch::{
        listeners::{ChronoListener, StatisticsListener},
        SolverListener,
    },
    reports,
    structures::literal::RawLiteral,
};

/// Determines whether a CNF problem is satisfiable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The CNF problem, as a DIMACS file
    cnf_file: PathBuf,

    /// Display search statistics on completion
    #[arg(short, long)]
    stats: bool,

    /// Redraw a progress line during the solve
    #[arg(long)]
    progress: bool,

    /// How to select the variable of a decision literal
    #[arg(long, value_enum, default_value_t)]
    variables: VariableChoice,

    /// How to select the polarity of a decision literal
    #[arg(long, value_enum, default_value_t)]
    polarity: PolarityChoice,

    /// Disable polarity caching (phase saving)
    #[arg(long)]
    no_caching: bool,

    /// The probability of `true` under the random polarity selector
    #[arg(long, default_value_t = 0.5)]
    polarity_lean: f64,

    /// The probability of deciding on a uniformly random variable
    #[arg(long, default_value_t = 0.0)]
    random_decision_frequency: f64,

    /// The seed for the source of randomness
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Give up after this many seconds and report UNKNOWN
    #[arg(long)]
    time_limit: Option<u64>,

    /// Use the recursive solver rather than the iterative one
    #[arg(long)]
    recursive: bool,
}

/// Counts conflicts and redraws one status line in place, now and then.
#[derive(Default)]
struct ProgressListener {
    conflicts: usize,
    backtracks: usize,
}

impl ProgressListener {
    const REDRAW_INTERVAL: usize = 512;

    fn redraw(&self) {
        let mut out = stdout();
        let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
        let _ = write!(
            out,
            "c {} conflicts, {} backtracks",
            self.conflicts, self.backtracks
        );
        let _ = out.flush();
    }
}

impl SolverListener for ProgressListener {
    fn on_conflict(&mut self, _clause: u32) {
        self.conflicts += 1;
        if self.conflicts % Self::REDRAW_INTERVAL == 0 {
            self.redraw();
        }
    }

    fn on_backtrack(&mut self, _literal: RawLiteral) {
        self.backtracks += 1;
    }

    fn cleanup(&mut self) {
        if self.conflicts >= Self::REDRAW_INTERVAL {
            self.redraw();
            println!();
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "log")]
    heron_sat::misc::log::enable(log::LevelFilter::Debug);

    let config = Config {
        variable_choice: args.variables,
        polarity_choice: args.polarity,
        polarity_caching: !args.no_caching,
        polarity_lean: args.polarity_lean,
        random_decision_frequency: args.random_decision_frequency,
        random_seed: args.seed,
        time_limit: args.time_limit.map(Duration::from_secs),
    };
    let mut the_context = Context::from_config(config);

    let statistics = Rc::new(RefCell::new(StatisticsListener::default()));
    let chrono = Rc::new(RefCell::new(ChronoListener::default()));
    if args.stats {
        the_context.add_listener(statistics.clone());
        the_context.add_listener(chrono.clone());
    }
    if args.progress {
        the_context.add_listener(Rc::new(RefCell::new(ProgressListener::default())));
    }

    let file = match File::open(&args.cnf_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Could not open file '{}': {e}", args.cnf_file.display());
            return ExitCode::from(2);
        }
    };
    if let Err(e) = the_context.read_dimacs(BufReader::new(file)) {
        eprintln!("Could not parse '{}': {e:?}", args.cnf_file.display());
        return ExitCode::from(2);
    }

    the_context.formula.log();
    println!("c Solution to cnf file {}", args.cnf_file.display());

    let report = match args.recursive {
        true => the_context.solve_recursive(),
        false => the_context.solve(),
    };
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Solve error: {e:?}");
            return ExitCode::from(2);
        }
    };

    match report {
        reports::Solve::Satisfiable | reports::Solve::Unsatisfiable => {
            print!("{}", the_context.valuation())
        }
        reports::Solve::Unknown => println!("s UNKNOWN"),
    }

    if args.stats {
        println!("c {}", statistics.borrow());
        println!("c {}", chrono.borrow());
    }

    ExitCode::SUCCESS
}
