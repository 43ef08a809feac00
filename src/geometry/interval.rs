//! Ordered sets of non-overlapping 1-D intervals.
//!
//! The outline builder treats each side of a rectangle as an interval along
//! that side's axis and cuts pad clearance projections out of it. Keeping the
//! pieces in an explicit sorted list makes the split/shrink/drop cases easy to
//! reason about independently of any drawing.

/// Intervals this short (mm) are treated as empty, both as cuts and as
/// surviving pieces. Adjacent clearance zones that touch leave rounding
/// slivers well below this.
pub const LENGTH_TOLERANCE: f64 = 1e-9;

/// A closed interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub start: f64,
    /// Upper bound.
    pub end: f64,
}

impl Interval {
    /// Creates an interval between `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the two intervals share more than an endpoint.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// An ordered list of disjoint intervals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a set holding one interval.
    #[must_use]
    pub fn single(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Removes `cut` from every interval it overlaps.
    ///
    /// A cut strictly inside an interval splits it in two; a cut over one end
    /// shrinks it; a cut covering it removes it. A cut no longer than
    /// [`LENGTH_TOLERANCE`] removes nothing.
    pub fn subtract(&mut self, cut: Interval) {
        if cut.length() <= LENGTH_TOLERANCE {
            return;
        }

        let mut remaining = Vec::with_capacity(self.intervals.len() + 1);

        for interval in self.intervals.drain(..) {
            if !interval.overlaps(&cut) {
                remaining.push(interval);
                continue;
            }
            if cut.start > interval.start {
                remaining.push(Interval {
                    start: interval.start,
                    end: cut.start,
                });
            }
            if cut.end < interval.end {
                remaining.push(Interval {
                    start: cut.end,
                    end: interval.end,
                });
            }
        }

        self.intervals = remaining;
    }

    /// Drops every interval shorter than `min_length`, and any no longer than
    /// [`LENGTH_TOLERANCE`].
    pub fn retain_min_length(&mut self, min_length: f64) {
        self.intervals
            .retain(|i| i.length() >= min_length && i.length() > LENGTH_TOLERANCE);
    }

    /// Returns the intervals in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterates the intervals in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if no interval is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the summed length of all intervals.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.intervals.iter().map(Interval::length).sum()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
