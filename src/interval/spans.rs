//! Uncoalesced span sets.

use serde::{Deserialize, Serialize};

use super::{Interval, IntervalSet};

/// A set of intervals that may overlap or touch: the value of a spans
/// expression.
///
/// One span naturally corresponds to one activity instance, so spans are
/// never merged. Empty intervals are dropped and members are kept in
/// start order (stable for equal starts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct SpanSet {
    spans: Vec<Interval>,
}

impl SpanSet {
    /// Creates an empty span set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a span set without merging anything.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut spans: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
        spans.sort_by(|a, b| a.cmp_start(b));
        Self { spans }
    }

    /// Adds a span, keeping start order.
    pub fn push(&mut self, span: Interval) {
        if span.is_empty() {
            return;
        }
        let at = self
            .spans
            .partition_point(|s| s.cmp_start(&span) != std::cmp::Ordering::Greater);
        self.spans.insert(at, span);
    }

    /// Member spans in start order.
    pub fn spans(&self) -> &[Interval] {
        &self.spans
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether there are no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Coalesces into a window set.
    ///
    /// Lossy: spans that overlap or touch become a single window and
    /// their individual boundaries cannot be recovered.
    pub fn to_windows(&self) -> IntervalSet {
        IntervalSet::from_intervals(self.spans.iter().copied())
    }
}

impl From<Vec<Interval>> for SpanSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self::from_intervals(intervals)
    }
}

impl From<SpanSet> for Vec<Interval> {
    fn from(set: SpanSet) -> Self {
        set.spans
    }
}

impl FromIterator<Interval> for SpanSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::from_intervals(iter)
    }
}
