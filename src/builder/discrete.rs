//! Discrete profile builder.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::ast::{DiscreteProfileExpression, ProfileExpression, WindowsExpression};

use super::Windows;

/// A value that can appear in a discrete profile.
///
/// Converts to the JSON value carried by the AST. Implemented for the
/// JSON-representable std types; generated mission-model code implements
/// it for its own schema types.
///
/// Non-finite `f32`/`f64` values have no JSON form and become `null`.
pub trait DiscreteValue {
    /// The JSON form of this value.
    fn to_value(&self) -> Value;
}

macro_rules! discrete_value_via_from {
    ($($ty:ty),*) => {
        $(
            impl DiscreteValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

discrete_value_via_from!(bool, String, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl DiscreteValue for &str {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl DiscreteValue for char {
    fn to_value(&self) -> Value {
        Value::from(self.to_string())
    }
}

impl DiscreteValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: DiscreteValue> DiscreteValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, DiscreteValue::to_value)
    }
}

impl<T: DiscreteValue> DiscreteValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(DiscreteValue::to_value).collect())
    }
}

impl<T: DiscreteValue> DiscreteValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

/// Builds a [`DiscreteProfileExpression`] over values of schema `S`.
///
/// `S` only exists at compile time: it keeps comparisons and transitions
/// from mixing schemas.
pub struct Discrete<S> {
    node: DiscreteProfileExpression,
    schema: PhantomData<fn() -> S>,
}

/// A discrete operand: a bare schema value or a profile of that schema.
///
/// Bare values are lifted with [`Discrete::value`].
pub enum DiscreteOperand<S> {
    Literal(S),
    Expression(Discrete<S>),
}

impl<S: DiscreteValue> DiscreteOperand<S> {
    fn into_node(self) -> DiscreteProfileExpression {
        match self {
            Self::Literal(v) => Discrete::value(v).node,
            Self::Expression(d) => d.node,
        }
    }
}

impl<S: DiscreteValue> From<S> for DiscreteOperand<S> {
    fn from(v: S) -> Self {
        Self::Literal(v)
    }
}

impl<S> From<Discrete<S>> for DiscreteOperand<S> {
    fn from(d: Discrete<S>) -> Self {
        Self::Expression(d)
    }
}

impl From<&str> for DiscreteOperand<String> {
    fn from(v: &str) -> Self {
        Self::Literal(v.to_string())
    }
}

impl<S> Discrete<S> {
    /// Wraps an existing node.
    pub fn from_node(node: DiscreteProfileExpression) -> Self {
        Self {
            node,
            schema: PhantomData,
        }
    }

    /// The node built so far.
    pub fn node(&self) -> &DiscreteProfileExpression {
        &self.node
    }

    /// Unwraps the node.
    pub fn into_node(self) -> DiscreteProfileExpression {
        self.node
    }

    /// The profile of a discrete resource whose values have schema `S`.
    pub fn resource(name: impl Into<String>) -> Self {
        Self::from_node(DiscreteProfileExpression::Resource { name: name.into() })
    }

    /// Instantaneous windows wherever the value differs from the value
    /// immediately before.
    pub fn changes(self) -> Windows {
        Windows::from_node(WindowsExpression::Changes {
            expression: ProfileExpression::Discrete(self.node),
        })
    }
}

impl<S: DiscreteValue> Discrete<S> {
    /// A constant profile for all time.
    pub fn value(value: S) -> Self {
        Self::from_node(DiscreteProfileExpression::Value {
            value: value.to_value(),
        })
    }

    /// Instantaneous windows where the profile goes from exactly `from`
    /// to exactly `to`.
    pub fn transition(self, from: S, to: S) -> Windows {
        Windows::from_node(WindowsExpression::Transition {
            profile: self.node,
            from: from.to_value(),
            to: to.to_value(),
        })
    }

    /// Holds wherever this profile equals `other`.
    pub fn equal(self, other: impl Into<DiscreteOperand<S>>) -> Windows {
        Windows::from_node(WindowsExpression::Equal {
            left: ProfileExpression::Discrete(self.node),
            right: ProfileExpression::Discrete(other.into().into_node()),
        })
    }

    /// Holds wherever this profile differs from `other`.
    pub fn not_equal(self, other: impl Into<DiscreteOperand<S>>) -> Windows {
        Windows::from_node(WindowsExpression::NotEqual {
            left: ProfileExpression::Discrete(self.node),
            right: ProfileExpression::Discrete(other.into().into_node()),
        })
    }
}

impl<S> Clone for Discrete<S> {
    fn clone(&self) -> Self {
        Self::from_node(self.node.clone())
    }
}

impl<S> PartialEq for Discrete<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<S> fmt::Debug for Discrete<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discrete").field("node", &self.node).finish()
    }
}

impl<S> From<Discrete<S>> for DiscreteProfileExpression {
    fn from(d: Discrete<S>) -> Self {
        d.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transition_node() {
        let w = Discrete::value("A").transition("A", "B");
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
    fn test_equal_lifts_schema_values() {
        let lifted = Discrete::<String>::resource("/flag").equal("A");
        let explicit =
            Discrete::<String>::resource("/flag").equal(Discrete::value("A".to_string()));
        assert_eq!(lifted, explicit);
        match lifted.into_node() {
            WindowsExpression::Equal { left, right } => {
                assert_eq!(
                    left,
                    ProfileExpression::Discrete(DiscreteProfileExpression::Resource {
                        name: "/flag".into()
                    })
                );
                assert_eq!(
                    right,
                    ProfileExpression::Discrete(DiscreteProfileExpression::Value {
                        value: json!("A")
                    })
                );
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_not_equal_and_changes() {
        let ne = Discrete::<bool>::resource("/heater").not_equal(true);
        assert!(matches!(ne.node(), WindowsExpression::NotEqual { .. }));

        let ch = Discrete::<i64>::resource("/mode").changes();
        assert_eq!(
            ch.into_node(),
            WindowsExpression::Changes {
                expression: ProfileExpression::Discrete(DiscreteProfileExpression::Resource {
                    name: "/mode".into()
                })
            }
        );
    }

    #[test]
    fn test_structured_values() {
        let mut state = BTreeMap::new();
        state.insert("mode".to_string(), vec![Some(1i64), None]);
        assert_eq!(state.to_value(), json!({"mode": [1, null]}));
        assert_eq!('x'.to_value(), json!("x"));
    }
}
