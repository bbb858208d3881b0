//! Profile expression nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A piecewise real-valued function of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RealProfileExpression {
    /// The profile of a named real resource.
    #[serde(rename = "RealProfileResource")]
    Resource { name: String },

    /// A constant for all time.
    #[serde(rename = "RealProfileValue")]
    Value { value: f64 },

    /// A real parameter of the activity bound to `alias`.
    #[serde(rename = "RealProfileParameter")]
    Parameter { alias: String, name: String },

    /// Pointwise derivative of `profile`.
    #[serde(rename = "RealProfileRate")]
    Rate { profile: Box<RealProfileExpression> },

    /// `profile` scaled by a constant.
    #[serde(rename = "RealProfileTimes")]
    Times {
        multiplier: f64,
        profile: Box<RealProfileExpression>,
    },

    /// Pointwise sum.
    #[serde(rename = "RealProfilePlus")]
    Plus {
        left: Box<RealProfileExpression>,
        right: Box<RealProfileExpression>,
    },
}

/// A piecewise function of time over an arbitrary value schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DiscreteProfileExpression {
    /// The profile of a named discrete resource.
    #[serde(rename = "DiscreteProfileResource")]
    Resource { name: String },

    /// A constant for all time.
    #[serde(rename = "DiscreteProfileValue")]
    Value { value: Value },

    /// A discrete parameter of the activity bound to `alias`.
    #[serde(rename = "DiscreteProfileParameter")]
    Parameter { alias: String, name: String },
}

/// Either profile family, for nodes that accept both.
///
/// Serialized as the inner node itself; the `kind` tags of the two
/// families never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileExpression {
    Real(RealProfileExpression),
    Discrete(DiscreteProfileExpression),
}

impl RealProfileExpression {
    pub(crate) fn collect_resources(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Resource { name } => {
                names.insert(name.clone());
            }
            Self::Value { .. } | Self::Parameter { .. } => {}
            Self::Rate { profile } | Self::Times { profile, .. } => profile.collect_resources(names),
            Self::Plus { left, right } => {
                left.collect_resources(names);
                right.collect_resources(names);
            }
        }
    }
}

impl DiscreteProfileExpression {
    pub(crate) fn collect_resources(&self, names: &mut BTreeSet<String>) {
        if let Self::Resource { name } = self {
            names.insert(name.clone());
        }
    }
}

impl ProfileExpression {
    pub(crate) fn collect_resources(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Real(p) => p.collect_resources(names),
            Self::Discrete(p) => p.collect_resources(names),
        }
    }

    /// Whether this is a real profile.
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }
}

impl From<RealProfileExpression> for ProfileExpression {
    fn from(p: RealProfileExpression) -> Self {
        Self::Real(p)
    }
}

impl From<DiscreteProfileExpression> for ProfileExpression {
    fn from(p: DiscreteProfileExpression) -> Self {
        Self::Discrete(p)
    }
}
