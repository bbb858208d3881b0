//! Coalesced window sets.

use serde::{Deserialize, Serialize};

use super::{Duration, Interval, SpanSet};

/// A set of disjoint, coalesced intervals: the value of a windows
/// expression.
///
/// Members are sorted by start and no two members overlap or touch.
/// Every constructor and operation re-establishes that invariant, so two
/// sets covering the same instants always compare equal.
///
/// # Examples
///
/// ```
/// use mission_constraints::interval::{Interval, IntervalSet};
///
/// let a = IntervalSet::from_intervals([Interval::half_open(0, 5)]);
/// let b = IntervalSet::from_intervals([Interval::between(5, 10)]);
/// let u = a.union(&b);
/// assert_eq!(u.intervals(), &[Interval::between(0, 10)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from arbitrary intervals, dropping empty ones and
    /// merging any that overlap or touch.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        Self {
            intervals: coalesce(intervals.into_iter().collect()),
        }
    }

    /// The set covering all of `bounds`.
    pub fn full(bounds: Interval) -> Self {
        Self::from_intervals([bounds])
    }

    /// Member intervals, sorted by start.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of member intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the set covers no instant.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether a timestamp is covered by the set.
    pub fn contains(&self, time: i64) -> bool {
        self.intervals.iter().any(|i| i.contains(time))
    }

    /// Instants covered by both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let i = a.intersect(b);
                if !i.is_empty() {
                    result.push(i);
                }
            }
        }
        Self::from_intervals(result)
    }

    /// Instants covered by either set.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_intervals(self.intervals.iter().chain(&other.intervals).copied())
    }

    /// Instants of `bounds` not covered by this set.
    ///
    /// `s.complement(b).complement(b)` equals `s` restricted to `b`.
    pub fn complement(&self, bounds: Interval) -> Self {
        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        let mut cursor = (bounds.start, bounds.start_inclusivity);

        for interval in &self.intervals {
            gaps.push(Interval::new(
                cursor.0,
                cursor.1,
                interval.start,
                interval.start_inclusivity.flip(),
            ));
            cursor = (interval.end, interval.end_inclusivity.flip());
        }
        gaps.push(Interval::new(
            cursor.0,
            cursor.1,
            bounds.end,
            bounds.end_inclusivity,
        ));

        Self::from_intervals(gaps.into_iter().map(|g| g.intersect(&bounds)))
    }

    /// Intersection of every set; the whole `bounds` when `sets` is empty.
    pub fn all<'a>(sets: impl IntoIterator<Item = &'a IntervalSet>, bounds: Interval) -> Self {
        sets.into_iter()
            .fold(Self::full(bounds), |acc, s| acc.intersection(s))
    }

    /// Union of every set; empty when `sets` is empty.
    pub fn any<'a>(sets: impl IntoIterator<Item = &'a IntervalSet>) -> Self {
        sets.into_iter().fold(Self::new(), |acc, s| acc.union(s))
    }

    /// Material implication `condition -> self` within `bounds`.
    ///
    /// Holds wherever `condition` does not, and wherever `self` does.
    pub fn when(&self, condition: &Self, bounds: Interval) -> Self {
        condition.complement(bounds).union(self)
    }

    /// Keeps only members strictly longer than `duration`.
    pub fn longer_than(&self, duration: Duration) -> Self {
        self.filter(|i| i.duration() > duration)
    }

    /// Keeps only members strictly shorter than `duration`.
    pub fn shorter_than(&self, duration: Duration) -> Self {
        self.filter(|i| i.duration() < duration)
    }

    /// Shifts every member's start by `from_start` and end by `from_end`.
    ///
    /// Members whose shifted end precedes their shifted start are dropped.
    /// Members that grow into each other are merged.
    pub fn shift_by(&self, from_start: Duration, from_end: Duration) -> Self {
        Self::from_intervals(
            self.intervals
                .iter()
                .map(|i| i.shift_by(from_start, from_end)),
        )
    }

    /// The same intervals as a span set. Lossless.
    pub fn to_spans(&self) -> SpanSet {
        SpanSet::from_intervals(self.intervals.iter().copied())
    }

    fn filter(&self, keep: impl Fn(&Interval) -> bool) -> Self {
        Self {
            intervals: self.intervals.iter().copied().filter(|i| keep(i)).collect(),
        }
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self::from_intervals(intervals)
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.intervals
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::from_intervals(iter)
    }
}

/// Sorts by start and merges overlapping or touching intervals.
pub(crate) fn coalesce(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|i| !i.is_empty());
    intervals.sort_by(|a, b| a.cmp_start(b));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for next in intervals {
        match merged.last_mut() {
            Some(current) if current.coalesces_with(&next) => current.absorb(&next),
            _ => merged.push(next),
        }
    }
    merged
}
