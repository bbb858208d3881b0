//! End-to-end scenarios over a small banana mission model.

use mission_constraints::ast::{
    DiscreteProfileExpression, ProfileExpression, RealProfileExpression, WindowsExpression,
};
use mission_constraints::builder::{Constraint, Discrete, Real, Session, Windows};
use mission_constraints::interval::{Interval, IntervalSet};
use mission_constraints::metadata::{
    ActivityType, DiscreteParameter, MissionModelSchema, ResourceKind,
};
use mission_constraints::validation::ValidationErrorKind;
use mission_constraints::{ConstraintDocument, Error};
use serde_json::json;

// ================================
// Generated-style mission model
// ================================

struct PeelBanana;

struct PeelBananaParameters {
    peel_direction: DiscreteParameter<String>,
}

impl ActivityType for PeelBanana {
    type Parameters = PeelBananaParameters;

    fn name(&self) -> &str {
        "PeelBanana"
    }

    fn bind_parameters(&self, alias: &str) -> PeelBananaParameters {
        PeelBananaParameters {
            peel_direction: DiscreteParameter::new(alias, "peelDirection"),
        }
    }
}

struct BiteBanana;

struct BiteBananaParameters {
    bite_size: Real,
}

impl ActivityType for BiteBanana {
    type Parameters = BiteBananaParameters;

    fn name(&self) -> &str {
        "BiteBanana"
    }

    fn bind_parameters(&self, alias: &str) -> BiteBananaParameters {
        BiteBananaParameters {
            bite_size: Real::from_node(RealProfileExpression::Parameter {
                alias: alias.to_string(),
                name: "biteSize".to_string(),
            }),
        }
    }
}

fn banana_model() -> MissionModelSchema {
    MissionModelSchema::new()
        .with_parameter("PeelBanana", "peelDirection", ResourceKind::Discrete)
        .with_parameter("BiteBanana", "biteSize", ResourceKind::Real)
        .with_resource("/fruit", ResourceKind::Real)
        .with_resource("/peel", ResourceKind::Real)
        .with_resource("/flag", ResourceKind::Discrete)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ================================
// Scenarios
// ================================

#[test]
fn test_forbidden_overlap_document() {
    init_tracing();
    let session = Session::new();
    let c = Constraint::forbidden_activity_overlap(&session, PeelBanana, BiteBanana);
    let doc = ConstraintDocument::new("no peeling while biting", c);

    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(
        value["constraint"],
        json!({
            "kind": "ForEachActivity",
            "activityType": "PeelBanana",
            "alias": "activity alias 0",
            "expression": {
                "kind": "ForEachActivity",
                "activityType": "BiteBanana",
                "alias": "activity alias 1",
                "expression": {
                    "kind": "ViolationsOf",
                    "expression": {
                        "kind": "WindowsExpressionInvert",
                        "expression": {
                            "kind": "WindowsExpressionAll",
                            "expressions": [
                                {"kind": "WindowsExpressionActivityWindow", "alias": "activity alias 0"},
                                {"kind": "WindowsExpressionActivityWindow", "alias": "activity alias 1"}
                            ]
                        }
                    }
                }
            }
        })
    );

    assert!(doc.validate(Some(&banana_model())).is_ok());
}

#[test]
fn test_typed_parameters_reference_bound_alias() {
    let session = Session::new();
    let c = Constraint::for_each_activity(&session, PeelBanana, |peel| {
        peel.parameters
            .peel_direction
            .profile()
            .equal("fromTip")
            .when(peel.start())
            .violations()
    });

    assert_eq!(
        c.node().body(),
        &WindowsExpression::Any {
            expressions: vec![
                WindowsExpression::Invert {
                    expression: Box::new(WindowsExpression::StartOf {
                        alias: "activity alias 0".into()
                    }),
                },
                WindowsExpression::Equal {
                    left: ProfileExpression::Discrete(DiscreteProfileExpression::Parameter {
                        alias: "activity alias 0".into(),
                        name: "peelDirection".into(),
                    }),
                    right: ProfileExpression::Discrete(DiscreteProfileExpression::Value {
                        value: json!("fromTip"),
                    }),
                },
            ],
        }
    );
    assert!(validate(&c).is_ok());
}

#[test]
fn test_bite_size_limits_fruit() {
    let session = Session::new();
    let c = Constraint::for_each_activity(&session, BiteBanana, |bite| {
        Real::resource("/fruit")
            .greater_than_or_equal(bite.parameters.bite_size.clone())
            .when(bite.start())
            .violations()
    });

    assert_eq!(
        c.node().referenced_resources().into_iter().collect::<Vec<_>>(),
        vec!["/fruit".to_string()]
    );
    assert!(validate(&c).is_ok());
}

#[test]
fn test_model_mismatches_are_reported() {
    let session = Session::new();
    let c = Constraint::for_each_activity(&session, BiteBanana, |bite| {
        Windows::all([
            Real::resource("/flag").less_than(1),
            Discrete::<String>::resource("/fruit").changes(),
            bite.window().longer_than(-5),
        ])
        .violations()
    });

    let kinds: Vec<_> = validate(&c)
        .unwrap_err()
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ValidationErrorKind::ResourceKindMismatch,
            ValidationErrorKind::ResourceKindMismatch,
        ]
    );
}

#[test]
fn test_real_comparison_wire_shape() {
    let w = Real::value(10.0).less_than(20);
    assert_eq!(
        serde_json::to_value(w.node()).unwrap(),
        json!({
            "kind": "RealProfileLessThan",
            "left": {"kind": "RealProfileValue", "value": 10.0},
            "right": {"kind": "RealProfileValue", "value": 20.0}
        })
    );
}

#[test]
fn test_discrete_transition_wire_shape() {
    let w = Discrete::value("A".to_string()).transition("A".to_string(), "B".to_string());
    assert_eq!(
        serde_json::to_value(w.node()).unwrap(),
        json!({
            "kind": "DiscreteProfileTransition",
            "profile": {"kind": "DiscreteProfileValue", "value": "A"},
            "from": "A",
            "to": "B"
        })
    );
}

#[test]
fn test_same_build_code_same_document() {
    let build = |session: &Session| {
        Constraint::for_each_activity(session, "PeelBanana", |peel| {
            Real::resource("/peel")
                .rate()
                .times(2.0)
                .plus(1)
                .less_than_or_equal(Real::resource("/fruit"))
                .when(peel.window())
                .violations()
        })
    };
    let first = ConstraintDocument::new("peel rate", build(&Session::new()));
    let second = ConstraintDocument::new("peel rate", build(&Session::new()));
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_unknown_kind_fails_to_decode() {
    let json = r#"{
        "name": "bad",
        "constraint": {"kind": "ViolationsOf", "expression": {"kind": "WindowsExpressionXor", "expressions": []}}
    }"#;
    assert!(matches!(
        ConstraintDocument::from_json(json),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_empty_all_and_any_identities() {
    let bounds = Interval::half_open(0, 100);
    let none: [&IntervalSet; 0] = [];
    assert_eq!(IntervalSet::all(none, bounds), IntervalSet::full(bounds));
    assert!(IntervalSet::any(none).is_empty());

    // the builders keep the empty lists; the identities are the evaluator's
    assert_eq!(
        Windows::all(Vec::<Windows>::new()).into_node(),
        WindowsExpression::All {
            expressions: vec![]
        }
    );
}

#[test]
fn test_when_is_implication() {
    let bounds = Interval::half_open(0, 100);
    let condition = IntervalSet::from_intervals([Interval::half_open(10, 20)]);
    let checked = IntervalSet::from_intervals([Interval::half_open(15, 30)]);

    assert_eq!(
        checked.when(&condition, bounds),
        IntervalSet::from_intervals([Interval::half_open(0, 10), Interval::half_open(15, 100)])
    );
    assert_ne!(
        checked.when(&condition, bounds),
        IntervalSet::all([&condition, &checked], bounds)
    );
}

fn validate(c: &Constraint) -> mission_constraints::validation::ValidationResult {
    mission_constraints::validation::validate_constraint(c.node(), Some(&banana_model()))
}

#[test]
fn test_forbidden_overlap_violates_exactly_during_overlap() {
    let bounds = Interval::between(0, 1_000);
    // ViolationsOf(Invert(All(w1, w2))) over one pair of instances
    let violations = |peel: Interval, bite: Interval| {
        let w1 = IntervalSet::from_intervals([peel]);
        let w2 = IntervalSet::from_intervals([bite]);
        let body = IntervalSet::all([&w1, &w2], bounds).complement(bounds);
        (body.complement(bounds), w1.intersection(&w2))
    };

    let (found, overlap) = violations(Interval::half_open(100, 300), Interval::half_open(200, 400));
    assert_eq!(found, overlap);
    assert_eq!(found.intervals(), &[Interval::half_open(200, 300)]);

    // touching without a shared instant
    let (found, overlap) = violations(Interval::half_open(100, 200), Interval::half_open(200, 300));
    assert_eq!(found, overlap);
    assert!(found.is_empty());

    // touching at one shared instant
    let (found, overlap) = violations(Interval::between(100, 200), Interval::between(200, 300));
    assert_eq!(found, overlap);
    assert_eq!(found.intervals(), &[Interval::at(200)]);

    let (found, overlap) = violations(Interval::half_open(100, 200), Interval::half_open(500, 600));
    assert_eq!(found, overlap);
    assert!(found.is_empty());
}
