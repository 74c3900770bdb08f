use heron_sat::{
    config::Config,
    context::Context,
    reports,
    structures::literal::{Literal, RawLiteral},
};

mod boundaries {
    use super::*;

    #[test]
    fn an_empty_formula_is_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Satisfiable);
        assert!(the_context.valuation().is_empty());
    }

    #[test]
    fn the_empty_clause_alone_is_unsatisfiable() {
        let mut the_context = Context::from_config(Config::default());

        // The loaders refuse empty clauses, so empty one by hand.
        let key = the_context
            .formula
            .create_clause(1, &[RawLiteral::positive(1)])
            .unwrap();
        let x1 = the_context.formula.active_index_of(1).unwrap();
        the_context
            .formula
            .remove_literal_from_clause(key, Literal::new(x1, true))
            .unwrap();

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
        assert!(the_context.valuation().is_unsatisfiable());
    }

    #[test]
    fn a_unit_clause_is_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        the_context
            .add_clause(1, &[RawLiteral::positive(1)])
            .unwrap();

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Satisfiable);
        assert_eq!(
            the_context.valuation().literals(),
            &[RawLiteral::positive(1)]
        );
    }

    #[test]
    fn opposing_unit_clauses_are_unsatisfiable() {
        let mut the_context = Context::from_config(Config::default());
        the_context
            .add_clause(1, &[RawLiteral::positive(1)])
            .unwrap();
        the_context
            .add_clause(2, &[RawLiteral::negative(1)])
            .unwrap();

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
    }

    #[test]
    fn a_lone_tautology_drops_and_leaves_an_empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        let dropped = the_context
            .add_clause(1, &[RawLiteral::positive(1), RawLiteral::negative(1)])
            .unwrap();
        assert!(dropped.is_none());
        assert!(!the_context.formula.has_clauses());

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Satisfiable);
        assert!(the_context.valuation().is_empty());
    }

    #[test]
    fn a_zero_time_limit_reports_unknown() {
        let config = Config {
            time_limit: Some(std::time::Duration::ZERO),
            ..Config::default()
        };
        let mut the_context = Context::from_config(config);
        the_context
            .add_clause(1, &[RawLiteral::positive(1), RawLiteral::positive(2)])
            .unwrap();

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Unknown);
    }
}

mod recursive {
    use super::*;

    #[test]
    fn a_unit_clause_is_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        the_context
            .add_clause(1, &[RawLiteral::positive(1)])
            .unwrap();

        assert!(the_context.solve_recursive().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Satisfiable);
        assert_eq!(
            the_context.valuation().literals(),
            &[RawLiteral::positive(1)]
        );
    }

    #[test]
    fn opposing_unit_clauses_are_unsatisfiable() {
        let mut the_context = Context::from_config(Config::default());
        the_context
            .add_clause(1, &[RawLiteral::positive(1)])
            .unwrap();
        the_context
            .add_clause(2, &[RawLiteral::negative(1)])
            .unwrap();

        assert!(the_context.solve_recursive().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
        assert!(the_context.valuation().is_unsatisfiable());
    }

    #[test]
    fn an_empty_formula_is_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.solve_recursive().is_ok());
        assert_eq!(the_context.report(), reports::Solve::Satisfiable);
    }
}
