use heron_sat::{
    config::Config,
    context::Context,
    generic::pcg::Pcg32,
    heuristics::{
        CachingPolarity, FirstVariable, LeastUsedVariable, MostUsedPolarity, MostUsedVariable,
        PolarityCache, PolaritySelector, PositiveFirst, VariableSelector,
    },
};

/// x1 occurs three times, x2 twice (once per polarity), x3 once (negative).
fn occurrence_context() -> Context {
    let mut the_context = Context::from_config(Config::default());
    for (id, clause) in ["1 2", "1 -2", "-1 -3"].iter().enumerate() {
        let literals = the_context.literals_from_string(clause).unwrap();
        the_context.add_clause(id as u32 + 1, &literals).unwrap();
    }
    the_context
}

#[test]
fn variable_selectors_read_occurrence_counts() {
    let the_context = occurrence_context();
    let formula = &the_context.formula;
    let mut rng = Pcg32::default();

    let id_of = |index| formula.variable(index).id();

    let first = FirstVariable.select(formula, &mut rng).unwrap();
    assert_eq!(id_of(first), 1);

    let least = LeastUsedVariable.select(formula, &mut rng).unwrap();
    assert_eq!(id_of(least), 3);

    let most = MostUsedVariable.select(formula, &mut rng).unwrap();
    assert_eq!(id_of(most), 1);
}

#[test]
fn positive_first_yields_to_a_missing_polarity() {
    let the_context = occurrence_context();
    let formula = &the_context.formula;
    let mut rng = Pcg32::default();

    let x1 = formula.active_index_of(1).unwrap();
    let x3 = formula.active_index_of(3).unwrap();

    let literal = PositiveFirst.select(formula, x1, &mut rng);
    assert!(literal.polarity());

    // x3 has no positive occurrence.
    let literal = PositiveFirst.select(formula, x3, &mut rng);
    assert!(!literal.polarity());
}

#[test]
fn most_used_polarity_counts_occurrences() {
    let mut the_context = Context::from_config(Config::default());
    for (id, clause) in ["-1 2", "-1 3", "1 2"].iter().enumerate() {
        let literals = the_context.literals_from_string(clause).unwrap();
        the_context.add_clause(id as u32 + 1, &literals).unwrap();
    }
    let formula = &the_context.formula;
    let mut rng = Pcg32::default();

    let x1 = formula.active_index_of(1).unwrap();
    let literal = MostUsedPolarity.select(formula, x1, &mut rng);
    assert!(!literal.polarity());

    // Ties fall to positive.
    let x2 = formula.active_index_of(2).unwrap();
    let literal = MostUsedPolarity.select(formula, x2, &mut rng);
    assert!(literal.polarity());
}

#[test]
fn the_polarity_cache_overrides_its_fallback() {
    let the_context = occurrence_context();
    let formula = &the_context.formula;
    let mut rng = Pcg32::default();

    let cache = PolarityCache::new();
    let mut caching = CachingPolarity::new(cache.clone(), Box::new(PositiveFirst));

    let x1 = formula.active_index_of(1).unwrap();

    // Nothing cached: the fallback decides.
    assert!(caching.select(formula, x1, &mut rng).polarity());

    cache.record(1, false);
    assert!(!caching.select(formula, x1, &mut rng).polarity());
}

#[test]
fn the_cache_records_assertions_when_registered_as_a_listener() {
    use std::{cell::RefCell, rc::Rc};

    use heron_sat::heuristics::VariablePolarity;

    let cache = PolarityCache::new();
    let selector = VariablePolarity::new(
        Box::new(FirstVariable),
        Box::new(CachingPolarity::new(cache.clone(), Box::new(PositiveFirst))),
    );

    let config = Config {
        polarity_caching: false,
        ..Config::default()
    };
    let mut the_context = Context::with_selector(config, Box::new(selector));
    the_context.add_listener(Rc::new(RefCell::new(cache.clone())));

    let literals = the_context.literals_from_string("1 2").unwrap();
    the_context.add_clause(1, &literals).unwrap();

    assert!(the_context.solve().is_ok());
    assert!(the_context.valuation().is_satisfiable());

    // The decision on x1 was asserted and so cached; x2 was parked with the
    // satisfied clause and never asserted.
    assert_eq!(cache.recall(1), Some(true));
    assert_eq!(cache.recall(2), None);
}
