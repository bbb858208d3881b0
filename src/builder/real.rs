//! Real profile builder.

use crate::ast::{ProfileExpression, RealProfileExpression, WindowsExpression};

use super::Windows;

/// Builds a [`RealProfileExpression`]: a piecewise real function of time.
#[derive(Debug, Clone, PartialEq)]
pub struct Real {
    node: RealProfileExpression,
}

/// A real operand: a bare number or a profile.
///
/// Bare numbers are lifted with [`Real::value`].
#[derive(Debug, Clone, PartialEq)]
pub enum RealOperand {
    Literal(f64),
    Expression(Real),
}

impl RealOperand {
    fn into_node(self) -> RealProfileExpression {
        match self {
            Self::Literal(v) => Real::value(v).node,
            Self::Expression(r) => r.node,
        }
    }
}

impl From<f64> for RealOperand {
    fn from(v: f64) -> Self {
        Self::Literal(v)
    }
}

impl From<i32> for RealOperand {
    fn from(v: i32) -> Self {
        Self::Literal(f64::from(v))
    }
}

impl From<Real> for RealOperand {
    fn from(r: Real) -> Self {
        Self::Expression(r)
    }
}

impl Real {
    /// Wraps an existing node.
    pub fn from_node(node: RealProfileExpression) -> Self {
        Self { node }
    }

    /// The node built so far.
    pub fn node(&self) -> &RealProfileExpression {
        &self.node
    }

    /// Unwraps the node.
    pub fn into_node(self) -> RealProfileExpression {
        self.node
    }

    /// The profile of a real resource.
    pub fn resource(name: impl Into<String>) -> Self {
        Self::from_node(RealProfileExpression::Resource { name: name.into() })
    }

    /// A constant profile for all time.
    ///
    /// `value` should be finite: NaN and infinities encode as JSON `null`
    /// and the document then fails to decode.
    /// [`crate::validation`] reports them as `NonFiniteLiteral`.
    pub fn value(value: f64) -> Self {
        Self::from_node(RealProfileExpression::Value { value })
    }

    /// This profile's derivative.
    pub fn rate(self) -> Self {
        Self::from_node(RealProfileExpression::Rate {
            profile: Box::new(self.node),
        })
    }

    /// This profile scaled by a constant. `multiplier` should be finite,
    /// as for [`Real::value`].
    pub fn times(self, multiplier: f64) -> Self {
        Self::from_node(RealProfileExpression::Times {
            multiplier,
            profile: Box::new(self.node),
        })
    }

    /// Pointwise sum with another profile or a constant.
    pub fn plus(self, other: impl Into<RealOperand>) -> Self {
        Self::from_node(RealProfileExpression::Plus {
            left: Box::new(self.node),
            right: Box::new(other.into().into_node()),
        })
    }

    /// Holds wherever this profile is less than `other`.
    pub fn less_than(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::LessThan {
            left: self.node,
            right: other.into().into_node(),
        })
    }

    /// Holds wherever this profile is less than or equal to `other`.
    pub fn less_than_or_equal(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::LessThanOrEqual {
            left: self.node,
            right: other.into().into_node(),
        })
    }

    /// Holds wherever this profile is greater than `other`.
    pub fn greater_than(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::GreaterThan {
            left: self.node,
            right: other.into().into_node(),
        })
    }

    /// Holds wherever this profile is greater than or equal to `other`.
    pub fn greater_than_or_equal(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::GreaterThanOrEqual {
            left: self.node,
            right: other.into().into_node(),
        })
    }

    /// Holds wherever this profile equals `other`.
    pub fn equal(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::Equal {
            left: ProfileExpression::Real(self.node),
            right: ProfileExpression::Real(other.into().into_node()),
        })
    }

    /// Holds wherever this profile differs from `other`.
    pub fn not_equal(self, other: impl Into<RealOperand>) -> Windows {
        Windows::from_node(WindowsExpression::NotEqual {
            left: ProfileExpression::Real(self.node),
            right: ProfileExpression::Real(other.into().into_node()),
        })
    }

    /// Instantaneous windows wherever the value differs from the value
    /// immediately before.
    pub fn changes(self) -> Windows {
        Windows::from_node(WindowsExpression::Changes {
            expression: ProfileExpression::Real(self.node),
        })
    }
}

impl From<Real> for RealProfileExpression {
    fn from(r: Real) -> Self {
        r.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_numbers_are_lifted() {
        let w = Real::value(10.0).less_than(20);
        assert_eq!(
            w.into_node(),
            WindowsExpression::LessThan {
                left: RealProfileExpression::Value { value: 10.0 },
                right: RealProfileExpression::Value { value: 20.0 },
            }
        );
    }

    #[test]
    fn test_lifted_and_explicit_operands_match() {
        let lifted = Real::resource("/fruit").greater_than_or_equal(4.5);
        let explicit = Real::resource("/fruit").greater_than_or_equal(Real::value(4.5));
        assert_eq!(lifted, explicit);
    }

    #[test]
    fn test_plus_accepts_profile_or_number() {
        let p = Real::resource("/a").plus(Real::resource("/b")).plus(1.5);
        assert_eq!(
            serde_json::to_value(p.node()).unwrap(),
            json!({
                "kind": "RealProfilePlus",
                "left": {
                    "kind": "RealProfilePlus",
                    "left": {"kind": "RealProfileResource", "name": "/a"},
                    "right": {"kind": "RealProfileResource", "name": "/b"}
                },
                "right": {"kind": "RealProfileValue", "value": 1.5}
            })
        );
    }

    #[test]
    fn test_rate_times_order_is_preserved() {
        let a = Real::resource("/fruit").times(2.0).rate();
        let b = Real::resource("/fruit").rate().times(2.0);
        assert_ne!(a, b);
        assert!(matches!(a.node(), RealProfileExpression::Rate { .. }));
        assert!(matches!(b.node(), RealProfileExpression::Times { multiplier, .. } if *multiplier == 2.0));
    }

    #[test]
    fn test_comparison_kinds() {
        let kind = |w: Windows| serde_json::to_value(w.node()).unwrap()["kind"].clone();
        let r = || Real::resource("/fruit");
        assert_eq!(kind(r().less_than(1)), json!("RealProfileLessThan"));
        assert_eq!(kind(r().less_than_or_equal(1)), json!("RealProfileLessThanOrEqual"));
        assert_eq!(kind(r().greater_than(1)), json!("RealProfileGreaterThan"));
        assert_eq!(
            kind(r().greater_than_or_equal(1)),
            json!("RealProfileGreaterThanOrEqual")
        );
        assert_eq!(kind(r().equal(1)), json!("ExpressionEqual"));
        assert_eq!(kind(r().not_equal(1)), json!("ExpressionNotEqual"));
        assert_eq!(kind(r().changes()), json!("ProfileChanges"));
    }
}
