//! Window and span builders.

use crate::ast::{SpansExpression, WindowsExpression};
use crate::interval::Duration;

use super::Constraint;

/// Builds a [`WindowsExpression`]: a set of coalesced time intervals.
///
/// Every method consumes `self` and wraps its node in a new one; clone a
/// builder to use the same expression twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Windows {
    node: WindowsExpression,
}

impl Windows {
    /// Wraps an existing node.
    pub fn from_node(node: WindowsExpression) -> Self {
        Self { node }
    }

    /// The node built so far.
    pub fn node(&self) -> &WindowsExpression {
        &self.node
    }

    /// Unwraps the node.
    pub fn into_node(self) -> WindowsExpression {
        self.node
    }

    /// Holds where every argument holds (intersection).
    ///
    /// With no arguments this holds over the whole timeline.
    pub fn all(windows: impl IntoIterator<Item = Windows>) -> Self {
        Self::from_node(WindowsExpression::All {
            expressions: windows.into_iter().map(Windows::into_node).collect(),
        })
    }

    /// Holds where at least one argument holds (union).
    ///
    /// With no arguments this never holds.
    pub fn any(windows: impl IntoIterator<Item = Windows>) -> Self {
        Self::from_node(WindowsExpression::Any {
            expressions: windows.into_iter().map(Windows::into_node).collect(),
        })
    }

    /// Only checks `self` where `condition` holds.
    ///
    /// Built as `Any(Invert(condition), self)`, i.e. `condition -> self`:
    /// the result holds wherever `condition` does not, which is not the
    /// same as `All(condition, self)`.
    pub fn when(self, condition: Windows) -> Self {
        Self::any([condition.invert(), self])
    }

    /// Complement over the whole timeline.
    pub fn invert(self) -> Self {
        Self::from_node(WindowsExpression::Invert {
            expression: Box::new(self.node),
        })
    }

    /// A constraint violated wherever `self` does NOT hold.
    ///
    /// Express the condition that should be satisfied, then use this to
    /// report when it is not.
    pub fn violations(self) -> Constraint {
        Constraint::from_node(crate::ast::Constraint::ViolationsOf {
            expression: self.node,
        })
    }

    /// Windows strictly longer than `duration`.
    pub fn longer_than(self, duration: Duration) -> Self {
        Self::from_node(WindowsExpression::LongerThan {
            window_expression: Box::new(self.node),
            duration,
        })
    }

    /// Windows strictly shorter than `duration`.
    pub fn shorter_than(self, duration: Duration) -> Self {
        Self::from_node(WindowsExpression::ShorterThan {
            window_expression: Box::new(self.node),
            duration,
        })
    }

    /// Moves every window's start by `from_start` and end by `from_end`.
    pub fn shift_by(self, from_start: Duration, from_end: Duration) -> Self {
        Self::from_node(WindowsExpression::ShiftBy {
            window_expression: Box::new(self.node),
            from_start,
            from_end,
        })
    }

    /// Each window as one span. Lossless.
    pub fn spans(self) -> Spans {
        Spans::from_node(SpansExpression::FromWindows {
            windows_expression: Box::new(self.node),
        })
    }
}

impl From<Windows> for WindowsExpression {
    fn from(w: Windows) -> Self {
        w.node
    }
}

/// Builds a [`SpansExpression`]: intervals that may overlap without being
/// merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Spans {
    node: SpansExpression,
}

impl Spans {
    /// Wraps an existing node.
    pub fn from_node(node: SpansExpression) -> Self {
        Self { node }
    }

    /// The node built so far.
    pub fn node(&self) -> &SpansExpression {
        &self.node
    }

    /// Unwraps the node.
    pub fn into_node(self) -> SpansExpression {
        self.node
    }

    /// Coalesces into windows.
    ///
    /// Lossy: spans that overlap or touch become a single window.
    pub fn windows(self) -> Windows {
        Windows::from_node(WindowsExpression::FromSpans {
            spans_expression: Box::new(self.node),
        })
    }
}

impl From<Spans> for SpansExpression {
    fn from(s: Spans) -> Self {
        s.node
    }
}
