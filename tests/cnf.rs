//! Whole-formula workouts: instances needing real search, solved both ways
//! and validated by the checker.

use heron_sat::{
    config::{Config, PolarityChoice, VariableChoice},
    context::Context,
    reports,
};

/// The pigeonhole principle for `pigeons` pigeons and `pigeons - 1` holes:
/// every pigeon roosts somewhere, no two share a hole. Unsatisfiable, and
/// resistant to unit propagation, so the search has to branch.
fn pigeonhole(pigeons: u32) -> String {
    let holes = pigeons - 1;
    let variable = |pigeon: u32, hole: u32| (pigeon - 1) * holes + hole;

    let mut out = String::new();
    for pigeon in 1..=pigeons {
        for hole in 1..=holes {
            out.push_str(&variable(pigeon, hole).to_string());
            out.push(' ');
        }
        out.push_str("0\n");
    }
    for hole in 1..=holes {
        for pigeon in 1..=pigeons {
            for target in pigeon + 1..=pigeons {
                out.push_str(&format!(
                    "-{} -{} 0\n",
                    variable(pigeon, hole),
                    variable(target, hole)
                ));
            }
        }
    }
    out
}

/// A satisfiable 3-SAT instance: every clause holds at least one positive
/// literal, so the all-true assignment is a witness. The solver need not find
/// that one --- whatever it returns, the checker has the last word.
const MIXED_SAT: &str = "
c A satisfiable instance with some tangle to it.
p cnf 8 12
1 -2 3 0
-1 2 4 0
2 -3 -4 0
c
5 -6 7 0
-5 6 8 0
6 -7 -8 0
1 -5 8 0
-4 5 -7 0
3 -6 -1 0
-8 4 2 0
7 -3 -2 0
8 -7 1 0
";

fn read(source: &str, config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    the_context.read_dimacs(source.as_bytes()).unwrap();
    the_context
}

#[test]
fn pigeonholes_are_unsatisfiable() {
    for pigeons in [2, 3, 4] {
        let mut the_context = read(&pigeonhole(pigeons), Config::default());
        assert!(the_context.solve().is_ok());
        assert_eq!(
            the_context.report(),
            reports::Solve::Unsatisfiable,
            "{pigeons} pigeons fit somehow",
        );
    }
}

#[test]
fn the_recursive_solver_rejects_pigeonholes_too() {
    let mut the_context = read(&pigeonhole(3), Config::default());
    assert!(the_context.solve_recursive().is_ok());
    assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
}

#[test]
fn a_tangled_satisfiable_instance_passes_its_check() {
    let heuristics = [
        (VariableChoice::First, PolarityChoice::PositiveFirst),
        (VariableChoice::LeastUsed, PolarityChoice::MostUsed),
        (VariableChoice::MostUsed, PolarityChoice::MostUsed),
    ];

    for (variable_choice, polarity_choice) in heuristics {
        let config = Config {
            variable_choice,
            polarity_choice,
            ..Config::default()
        };
        let mut solver = read(MIXED_SAT, config);
        assert!(solver.solve().is_ok());
        assert_eq!(solver.report(), reports::Solve::Satisfiable);

        let mut checker = read(MIXED_SAT, Config::default());
        assert!(checker
            .check_solution(solver.valuation().literals())
            .unwrap());
    }
}

#[test]
fn random_heuristics_stay_reproducible() {
    let config = |seed: u64| Config {
        polarity_choice: PolarityChoice::Random,
        random_decision_frequency: 0.3,
        random_seed: seed,
        ..Config::default()
    };

    let mut first = read(MIXED_SAT, config(7));
    let mut second = read(MIXED_SAT, config(7));
    assert!(first.solve().is_ok());
    assert!(second.solve().is_ok());

    assert_eq!(
        first.valuation().literals(),
        second.valuation().literals(),
        "same seed, different search",
    );

    let mut checker = read(MIXED_SAT, Config::default());
    assert!(checker
        .check_solution(first.valuation().literals())
        .unwrap());
}
