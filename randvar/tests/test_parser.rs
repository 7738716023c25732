//! Tests for textual construction of random variables

use sim_randvar::rng::{new_handle, GeneratorContext, RandomGen};
use sim_randvar::{parse_var, Distribution, RandomVarError, VarRegistry};

#[test]
fn test_parse_uniform_bounds() {
    let ctx = GeneratorContext::new();
    let var = ctx.parse("uniform(0, 10)").unwrap();
    assert_eq!(var.minimum(), Some(0.0));
    assert_eq!(var.maximum(), Some(10.0));
}

#[test]
fn test_parse_unknown_name_is_wrong_distribution() {
    let ctx = GeneratorContext::new();
    let err = ctx.parse("bogus(1)").unwrap_err();
    assert!(matches!(err, RandomVarError::WrongDistribution { ref name, .. } if name == "bogus"));
    assert!(err.is_parse_error());
}

#[test]
fn test_parse_wrong_arity() {
    let ctx = GeneratorContext::new();
    let err = ctx.parse("uniform(1)").unwrap_err();
    assert_eq!(
        err,
        RandomVarError::WrongArity {
            name: "uniform".to_string(),
            expected: "2".to_string(),
            found: 1,
        }
    );
    assert!(err.is_parse_error());

    assert!(matches!(
        ctx.parse("normal(1, 2, 3)").unwrap_err(),
        RandomVarError::WrongArity { found: 3, .. }
    ));
    assert!(matches!(
        ctx.parse("constant()").unwrap_err(),
        RandomVarError::WrongArity { found: 0, .. }
    ));
}

#[test]
fn test_parse_malformed_literal() {
    let ctx = GeneratorContext::new();
    let err = ctx.parse("exponential(fast)").unwrap_err();
    assert_eq!(
        err,
        RandomVarError::MalformedLiteral {
            name: "exponential".to_string(),
            literal: "fast".to_string(),
        }
    );
}

#[test]
fn test_names_are_case_sensitive() {
    let ctx = GeneratorContext::new();
    assert!(ctx.parse("Uniform(0, 1)").is_err());
    assert!(ctx.parse("NORMAL(0, 1)").is_err());
}

#[test]
fn test_every_builtin_kind_parses() {
    let ctx = GeneratorContext::new();
    let cases = [
        ("constant(2.5)", Distribution::Constant { value: 2.5 }),
        ("uniform(1, 3)", Distribution::Uniform { min: 1.0, max: 3.0 }),
        ("exponential(0.5)", Distribution::Exponential { lambda: 0.5 }),
        ("weibull(2, 1.5)", Distribution::Weibull { scale: 2.0, shape: 1.5 }),
        ("pareto(1, 2.5)", Distribution::Pareto { mu: 1.0, order: 2.5 }),
        ("normal(0, 1)", Distribution::Normal { mean: 0.0, std_dev: 1.0 }),
        ("poisson(3)", Distribution::Poisson { lambda: 3.0 }),
        (
            "deterministic(1, 2, 3)",
            Distribution::Deterministic { values: vec![1.0, 2.0, 3.0] },
        ),
    ];

    for (expr, expected) in cases {
        let var = ctx.parse(expr).unwrap();
        assert_eq!(var.distribution(), &expected, "parsing {}", expr);
    }
}

#[test]
fn test_whitespace_tolerated() {
    let ctx = GeneratorContext::new();
    let var = ctx.parse("  weibull (  2 ,1.5  ) ").unwrap();
    assert_eq!(
        var.distribution(),
        &Distribution::Weibull { scale: 2.0, shape: 1.5 }
    );
}

#[test]
fn test_scientific_and_negative_literals() {
    let ctx = GeneratorContext::new();
    let var = ctx.parse("uniform(-1e3, 2.5E2)").unwrap();
    assert_eq!(var.minimum(), Some(-1000.0));
    assert_eq!(var.maximum(), Some(250.0));
}

#[test]
fn test_out_of_domain_parameters_rejected() {
    let ctx = GeneratorContext::new();
    assert!(matches!(
        ctx.parse("uniform(10, 0)").unwrap_err(),
        RandomVarError::InvalidParameter { .. }
    ));
    assert!(matches!(
        ctx.parse("exponential(0)").unwrap_err(),
        RandomVarError::InvalidParameter { .. }
    ));
    assert!(matches!(
        ctx.parse("normal(0, -1)").unwrap_err(),
        RandomVarError::InvalidParameter { .. }
    ));
}

#[test]
fn test_display_round_trip() {
    let ctx = GeneratorContext::new();
    for expr in [
        "uniform(0, 10)",
        "exponential(0.25)",
        "normal(-3.5, 1.25)",
        "deterministic(1, 2.5, -7)",
    ] {
        let var = ctx.parse(expr).unwrap();
        assert_eq!(var.to_string(), expr);
        let again = ctx.parse(&var.to_string()).unwrap();
        assert_eq!(again.distribution(), var.distribution());
    }
}

#[test]
fn test_parse_var_binds_given_generator() {
    let gen = new_handle(RandomGen::new(77).unwrap());
    let var = parse_var("poisson(2)", gen.clone()).unwrap();
    assert!(std::rc::Rc::ptr_eq(var.generator(), &gen));
}

#[test]
fn test_custom_registry_name() {
    fn service_time(name: &str, params: &[String]) -> Result<Distribution, RandomVarError> {
        // service(mean) is an exponential given by its mean
        let dist = Distribution::exponential_from_params(name, params)?;
        match dist {
            Distribution::Exponential { lambda } => Ok(Distribution::Exponential {
                lambda: 1.0 / lambda,
            }),
            other => Ok(other),
        }
    }

    let mut registry = VarRegistry::with_builtins();
    registry.register("service", service_time);

    let ctx = GeneratorContext::new();
    let var = ctx.parse_with("service(4)", &registry).unwrap();
    assert_eq!(
        var.distribution(),
        &Distribution::Exponential { lambda: 0.25 }
    );
    assert!(ctx.parse("service(4)").is_err());
}
