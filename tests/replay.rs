//! Replay must return the formula to a state equivalent to its pre-assert
//! state: same active clause ids, same active variable ids, same literal sets
//! per clause, same occurrence sets per variable.

use std::collections::{BTreeMap, BTreeSet};

use heron_sat::{
    config::Config,
    context::Context,
    db::formula::Formula,
    structures::literal::Literal,
};

/// The observable state of a formula, up to iteration order.
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    /// Active clause id → sorted literals in DIMACS form.
    clauses: BTreeMap<u32, Vec<i64>>,
    /// Active variable id → (sorted positive occurrence ids, sorted negative).
    variables: BTreeMap<u32, (Vec<u32>, Vec<u32>)>,
}

fn snapshot(formula: &Formula) -> Snapshot {
    let mut clauses = BTreeMap::new();
    for (_, clause) in formula.active_clauses() {
        let mut literals: Vec<i64> = clause
            .literals()
            .iter()
            .map(|l| formula.external(*l).as_dimacs())
            .collect();
        literals.sort();
        clauses.insert(clause.id(), literals);
    }

    let mut variables = BTreeMap::new();
    for (_, variable) in formula.active_variables() {
        let occurrence_ids = |polarity: bool| {
            let mut ids: Vec<u32> = variable
                .occurrences(polarity)
                .iter()
                .map(|key| formula.clause(*key).unwrap().id())
                .collect();
            ids.sort();
            ids
        };
        variables.insert(variable.id(), (occurrence_ids(true), occurrence_ids(false)));
    }

    Snapshot { clauses, variables }
}

/// Occurrence lists and clause literals must mirror each other exactly.
fn assert_bidirectional(formula: &Formula) {
    for (key, clause) in formula.active_clauses() {
        for literal in clause.literals() {
            let occurrences = formula
                .variable(literal.variable())
                .occurrences(literal.polarity());
            let count = occurrences.iter().filter(|k| **k == key).count();
            assert_eq!(count, 1, "occurrence of clause {} not mirrored", clause.id());
        }
    }

    for (_, variable) in formula.active_variables() {
        for polarity in [true, false] {
            for key in variable.occurrences(polarity) {
                let clause = formula.clause(*key).unwrap();
                assert!(clause.is_used());
                let count = clause
                    .literals()
                    .iter()
                    .filter(|l| {
                        formula.variable(l.variable()).id() == variable.id()
                            && l.polarity() == polarity
                    })
                    .count();
                assert_eq!(count, 1, "literal of variable x{} not mirrored", variable.id());
            }
        }
    }
}

fn positive(formula: &Formula, id: u32) -> Literal {
    Literal::new(formula.active_index_of(id).unwrap(), true)
}

#[test]
fn assert_then_replay_restores_identity() {
    let mut the_context = Context::from_config(Config::default());
    for (id, clause) in ["1 2", "-1 3"].iter().enumerate() {
        let literals = the_context.literals_from_string(clause).unwrap();
        the_context.add_clause(id as u32 + 1, &literals).unwrap();
    }

    let before = snapshot(&the_context.formula);
    assert_bidirectional(&the_context.formula);

    let x1 = positive(&the_context.formula, 1);
    the_context.assert_literal(x1).unwrap();
    assert!(!the_context.conflicting());

    the_context
        .resolution
        .replay(&mut the_context.formula)
        .unwrap();

    let after = snapshot(&the_context.formula);
    assert_eq!(before, after);
    assert_bidirectional(&the_context.formula);

    // Both clauses hold their two literals again, polarities intact.
    assert_eq!(after.clauses.get(&1), Some(&vec![1, 2]));
    assert_eq!(after.clauses.get(&2), Some(&vec![-1, 3]));
}

#[test]
fn a_mid_sweep_conflict_still_replays_to_identity() {
    // Reducing by x1 empties clause 2 before clause 3 is touched; the
    // partial sweep must still undo exactly.
    let mut the_context = Context::from_config(Config::default());
    for (id, clause) in ["1", "-1", "-1 2"].iter().enumerate() {
        let literals = the_context.literals_from_string(clause).unwrap();
        the_context.add_clause(id as u32 + 1, &literals).unwrap();
    }

    let before = snapshot(&the_context.formula);

    let x1 = positive(&the_context.formula, 1);
    the_context.assert_literal(x1).unwrap();
    assert!(the_context.conflicting());

    the_context
        .resolution
        .replay(&mut the_context.formula)
        .unwrap();

    assert_eq!(before, snapshot(&the_context.formula));
    assert_bidirectional(&the_context.formula);
}

#[test]
fn every_single_assert_is_reversible() {
    let clauses = ["1 2 3", "-1 2", "-2 3", "-3 -1"];

    let ids: BTreeSet<u32> = [1, 2, 3].into();
    for id in ids {
        for polarity in [true, false] {
            let mut the_context = Context::from_config(Config::default());
            for (index, clause) in clauses.iter().enumerate() {
                let literals = the_context.literals_from_string(clause).unwrap();
                the_context
                    .add_clause(index as u32 + 1, &literals)
                    .unwrap();
            }

            let before = snapshot(&the_context.formula);
            let index = the_context.formula.active_index_of(id).unwrap();
            the_context
                .assert_literal(Literal::new(index, polarity))
                .unwrap();
            the_context
                .resolution
                .replay(&mut the_context.formula)
                .unwrap();

            assert_eq!(before, snapshot(&the_context.formula));
            assert_bidirectional(&the_context.formula);
        }
    }
}
