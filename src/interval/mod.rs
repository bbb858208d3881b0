//! Interval-set semantics of windows and spans.
//!
//! The AST built by [`crate::builder`] only *describes* sets of time
//! intervals; this module is the value algebra those descriptions denote.
//! It gives evaluators and tests a single definition of boundary
//! inclusivity, coalescing, complement and the duration filters.
//!
//! # Time Model
//! All times are integer offsets in microseconds relative to an epoch the
//! consumer defines. A [`Duration`] is measured in the same unit.
//!
//! # Concepts
//!
//! - [`Interval`]: a single interval whose two boundaries are each open
//!   or closed
//! - [`IntervalSet`]: a window set, always sorted and coalesced
//! - [`SpanSet`]: a span set, never coalesced
//!
//! # Identities
//!
//! - [`IntervalSet::all`] with no arguments is the whole bounds
//!   (identity of intersection).
//! - [`IntervalSet::any`] with no arguments is empty (identity of union).

mod spans;
mod windows;

pub use spans::SpanSet;
pub use windows::IntervalSet;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A length of time in microseconds.
pub type Duration = i64;

/// Whether an interval boundary belongs to the interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Inclusivity {
    /// The boundary instant is part of the interval.
    Inclusive,
    /// The boundary instant is not part of the interval.
    Exclusive,
}

impl Inclusivity {
    /// The opposite inclusivity.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Inclusive => Self::Exclusive,
            Self::Exclusive => Self::Inclusive,
        }
    }

    #[inline]
    fn is_inclusive(self) -> bool {
        self == Self::Inclusive
    }
}

/// A time interval with independently open or closed boundaries.
///
/// An interval may be empty (see [`Interval::is_empty`]); empty intervals
/// never appear inside an [`IntervalSet`] or [`SpanSet`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Start instant (µs).
    pub start: i64,
    /// Whether `start` belongs to the interval.
    pub start_inclusivity: Inclusivity,
    /// End instant (µs).
    pub end: i64,
    /// Whether `end` belongs to the interval.
    pub end_inclusivity: Inclusivity,
}

impl Interval {
    /// The whole representable timeline, closed at both ends.
    pub const FOREVER: Interval = Interval {
        start: i64::MIN,
        start_inclusivity: Inclusivity::Inclusive,
        end: i64::MAX,
        end_inclusivity: Inclusivity::Inclusive,
    };

    /// Creates an interval with explicit boundary inclusivity.
    pub fn new(
        start: i64,
        start_inclusivity: Inclusivity,
        end: i64,
        end_inclusivity: Inclusivity,
    ) -> Self {
        Self {
            start,
            start_inclusivity,
            end,
            end_inclusivity,
        }
    }

    /// Creates a closed interval `[start, end]`.
    pub fn between(start: i64, end: i64) -> Self {
        Self::new(start, Inclusivity::Inclusive, end, Inclusivity::Inclusive)
    }

    /// Creates a half-open interval `[start, end)`.
    pub fn half_open(start: i64, end: i64) -> Self {
        Self::new(start, Inclusivity::Inclusive, end, Inclusivity::Exclusive)
    }

    /// Creates an instantaneous interval `[t, t]`.
    pub fn at(time: i64) -> Self {
        Self::between(time, time)
    }

    /// Whether the interval contains no instant at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
            || (self.start == self.end
                && !(self.start_inclusivity.is_inclusive() && self.end_inclusivity.is_inclusive()))
    }

    /// Whether the interval is a single instant.
    pub fn is_point(&self) -> bool {
        self.start == self.end && !self.is_empty()
    }

    /// Length of this interval (µs). Zero for points and empty intervals.
    #[inline]
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            0
        } else {
            self.end.saturating_sub(self.start)
        }
    }

    /// Whether a timestamp falls within this interval.
    pub fn contains(&self, time: i64) -> bool {
        let after_start = time > self.start
            || (time == self.start && self.start_inclusivity.is_inclusive());
        let before_end =
            time < self.end || (time == self.end && self.end_inclusivity.is_inclusive());
        after_start && before_end
    }

    /// The instants shared by both intervals. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        let (start, start_inclusivity) = match self.start.cmp(&other.start) {
            Ordering::Greater => (self.start, self.start_inclusivity),
            Ordering::Less => (other.start, other.start_inclusivity),
            Ordering::Equal => (
                self.start,
                both(self.start_inclusivity, other.start_inclusivity),
            ),
        };
        let (end, end_inclusivity) = match self.end.cmp(&other.end) {
            Ordering::Less => (self.end, self.end_inclusivity),
            Ordering::Greater => (other.end, other.end_inclusivity),
            Ordering::Equal => (self.end, both(self.end_inclusivity, other.end_inclusivity)),
        };
        Self::new(start, start_inclusivity, end, end_inclusivity)
    }

    /// Whether the two intervals share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Whether `other` starts exactly where `self` ends with no gap and no
    /// shared instant, e.g. `[0, 5)` and `[5, 10]`.
    pub fn meets(&self, other: &Self) -> bool {
        self.end == other.start
            && (self.end_inclusivity.is_inclusive() != other.start_inclusivity.is_inclusive())
    }

    /// Moves the start by `from_start` and the end by `from_end`.
    ///
    /// Inclusivity is preserved. The result is empty when the shifted end
    /// precedes the shifted start.
    pub fn shift_by(&self, from_start: Duration, from_end: Duration) -> Self {
        Self::new(
            self.start.saturating_add(from_start),
            self.start_inclusivity,
            self.end.saturating_add(from_end),
            self.end_inclusivity,
        )
    }

    /// Orders intervals by start, closed starts before open ones.
    pub(crate) fn cmp_start(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start).then_with(|| {
            match (self.start_inclusivity, other.start_inclusivity) {
                (Inclusivity::Inclusive, Inclusivity::Exclusive) => Ordering::Less,
                (Inclusivity::Exclusive, Inclusivity::Inclusive) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
    }

    /// Whether `next`, which starts no earlier than `self`, can be merged
    /// into `self` without covering any instant outside both.
    pub(crate) fn coalesces_with(&self, next: &Self) -> bool {
        self.overlaps(next) || self.meets(next)
    }

    /// Extends the end of `self` to cover `next`.
    pub(crate) fn absorb(&mut self, next: &Self) {
        match self.end.cmp(&next.end) {
            Ordering::Less => {
                self.end = next.end;
                self.end_inclusivity = next.end_inclusivity;
            }
            Ordering::Equal => {
                if next.end_inclusivity.is_inclusive() {
                    self.end_inclusivity = Inclusivity::Inclusive;
                }
            }
            Ordering::Greater => {}
        }
    }
}

fn both(a: Inclusivity, b: Inclusivity) -> Inclusivity {
    if a.is_inclusive() && b.is_inclusive() {
        Inclusivity::Inclusive
    } else {
        Inclusivity::Exclusive
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.start_inclusivity.is_inclusive() { '[' } else { '(' };
        let close = if self.end_inclusivity.is_inclusive() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let w = Interval::half_open(100, 200);
        assert_eq!(w.duration(), 100);
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200)); // exclusive end
        assert!(!w.contains(50));
    }

    #[test]
    fn test_point_interval() {
        let p = Interval::at(5);
        assert!(p.is_point());
        assert!(!p.is_empty());
        assert_eq!(p.duration(), 0);
        assert!(p.contains(5));
    }

    #[test]
    fn test_empty_intervals() {
        assert!(Interval::between(10, 5).is_empty());
        assert!(Interval::half_open(5, 5).is_empty());
        assert!(Interval::new(5, Inclusivity::Exclusive, 5, Inclusivity::Inclusive).is_empty());
        assert_eq!(Interval::between(10, 5).duration(), 0);
    }

    #[test]
    fn test_intersect_boundaries() {
        let a = Interval::half_open(0, 10);
        let b = Interval::between(5, 10);
        let i = a.intersect(&b);
        assert_eq!(i, Interval::half_open(5, 10));

        // Touching at an excluded point shares nothing
        let c = Interval::between(10, 20);
        assert!(!a.overlaps(&c));
        assert!(a.meets(&c));

        // Touching at an included point shares the point
        let d = Interval::between(0, 10);
        assert_eq!(d.intersect(&c), Interval::at(10));
    }

    #[test]
    fn test_meets_requires_exactly_one_inclusive() {
        let a = Interval::new(0, Inclusivity::Inclusive, 5, Inclusivity::Exclusive);
        let gap = Interval::new(5, Inclusivity::Exclusive, 10, Inclusivity::Inclusive);
        assert!(!a.meets(&gap)); // the instant 5 is missing
        assert!(!a.overlaps(&gap));
    }

    #[test]
    fn test_shift_by_crossing() {
        let w = Interval::between(0, 10);
        assert_eq!(w.shift_by(2, -2), Interval::between(2, 8));
        assert!(w.shift_by(8, -8).is_empty());
        assert!(w.shift_by(5, -5).is_point());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::half_open(1, 2).to_string(), "[1, 2)");
        assert_eq!(
            Interval::new(1, Inclusivity::Exclusive, 2, Inclusivity::Inclusive).to_string(),
            "(1, 2]"
        );
    }
}
