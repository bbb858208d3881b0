//! Window and span expression nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::{DiscreteProfileExpression, ProfileExpression, RealProfileExpression};
use crate::interval::Duration;

/// An expression denoting a coalesced set of time intervals.
///
/// See [`crate::interval::IntervalSet`] for the set semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WindowsExpression {
    /// Intersection. Empty `expressions` is the whole timeline.
    #[serde(rename = "WindowsExpressionAll")]
    All { expressions: Vec<WindowsExpression> },

    /// Union. Empty `expressions` is the empty set.
    #[serde(rename = "WindowsExpressionAny")]
    Any { expressions: Vec<WindowsExpression> },

    /// Complement over the whole timeline.
    #[serde(rename = "WindowsExpressionInvert")]
    Invert { expression: Box<WindowsExpression> },

    /// Windows strictly longer than `duration`.
    #[serde(rename = "WindowsExpressionLongerThan")]
    LongerThan {
        #[serde(rename = "windowExpression")]
        window_expression: Box<WindowsExpression>,
        duration: Duration,
    },

    /// Windows strictly shorter than `duration`.
    #[serde(rename = "WindowsExpressionShorterThan")]
    ShorterThan {
        #[serde(rename = "windowExpression")]
        window_expression: Box<WindowsExpression>,
        duration: Duration,
    },

    /// Start boundaries moved by `from_start`, end boundaries by `from_end`.
    #[serde(rename = "WindowsExpressionShiftBy")]
    ShiftBy {
        #[serde(rename = "windowExpression")]
        window_expression: Box<WindowsExpression>,
        #[serde(rename = "fromStart")]
        from_start: Duration,
        #[serde(rename = "fromEnd")]
        from_end: Duration,
    },

    /// The duration of the activity bound to `alias`.
    #[serde(rename = "WindowsExpressionActivityWindow")]
    ActivityWindow { alias: String },

    /// The start instant of the activity bound to `alias`.
    #[serde(rename = "WindowsExpressionStartOf")]
    StartOf { alias: String },

    /// The end instant of the activity bound to `alias`.
    #[serde(rename = "WindowsExpressionEndOf")]
    EndOf { alias: String },

    /// Spans coalesced into windows.
    #[serde(rename = "WindowsExpressionFromSpans")]
    FromSpans {
        #[serde(rename = "spansExpression")]
        spans_expression: Box<SpansExpression>,
    },

    #[serde(rename = "RealProfileLessThan")]
    LessThan {
        left: RealProfileExpression,
        right: RealProfileExpression,
    },

    #[serde(rename = "RealProfileLessThanOrEqual")]
    LessThanOrEqual {
        left: RealProfileExpression,
        right: RealProfileExpression,
    },

    #[serde(rename = "RealProfileGreaterThan")]
    GreaterThan {
        left: RealProfileExpression,
        right: RealProfileExpression,
    },

    #[serde(rename = "RealProfileGreaterThanOrEqual")]
    GreaterThanOrEqual {
        left: RealProfileExpression,
        right: RealProfileExpression,
    },

    #[serde(rename = "ExpressionEqual")]
    Equal {
        left: ProfileExpression,
        right: ProfileExpression,
    },

    #[serde(rename = "ExpressionNotEqual")]
    NotEqual {
        left: ProfileExpression,
        right: ProfileExpression,
    },

    /// Instants where the profile differs from its preceding value.
    #[serde(rename = "ProfileChanges")]
    Changes { expression: ProfileExpression },

    /// Instants where the profile goes from exactly `from` to exactly `to`.
    #[serde(rename = "DiscreteProfileTransition")]
    Transition {
        profile: DiscreteProfileExpression,
        from: Value,
        to: Value,
    },
}

/// An expression denoting a set of possibly overlapping intervals.
///
/// See [`crate::interval::SpanSet`] for the set semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SpansExpression {
    /// Each window becomes one span.
    #[serde(rename = "SpansExpressionFromWindows")]
    FromWindows {
        #[serde(rename = "windowsExpression")]
        windows_expression: Box<WindowsExpression>,
    },
}

impl WindowsExpression {
    pub(crate) fn collect_resources(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::All { expressions } | Self::Any { expressions } => {
                for e in expressions {
                    e.collect_resources(names);
                }
            }
            Self::Invert { expression } => expression.collect_resources(names),
            Self::LongerThan {
                window_expression, ..
            }
            | Self::ShorterThan {
                window_expression, ..
            }
            | Self::ShiftBy {
                window_expression, ..
            } => window_expression.collect_resources(names),
            Self::ActivityWindow { .. } | Self::StartOf { .. } | Self::EndOf { .. } => {}
            Self::FromSpans { spans_expression } => spans_expression.collect_resources(names),
            Self::LessThan { left, right }
            | Self::LessThanOrEqual { left, right }
            | Self::GreaterThan { left, right }
            | Self::GreaterThanOrEqual { left, right } => {
                left.collect_resources(names);
                right.collect_resources(names);
            }
            Self::Equal { left, right } | Self::NotEqual { left, right } => {
                left.collect_resources(names);
                right.collect_resources(names);
            }
            Self::Changes { expression } => expression.collect_resources(names),
            Self::Transition { profile, .. } => profile.collect_resources(names),
        }
    }
}

impl SpansExpression {
    pub(crate) fn collect_resources(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::FromWindows { windows_expression } => windows_expression.collect_resources(names),
        }
    }
}
