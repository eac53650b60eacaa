use std::ops::RangeBounds;

use crate::combiner::RangeCombiner;
use crate::error::{Error, Result};

/// Static structure answering aggregate queries over a fixed sequence.
pub trait RangeQuery<C: RangeCombiner> {
    /// Number of elements the structure was built over.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Whether `build` ran since creation or the last `clear`.
    fn is_built(&self) -> bool;
    /// Aggregate of the inclusive range `[l, r]`, 0-indexed.
    fn query(&self, l: usize, r: usize) -> Result<C::Value>;
    /// Same as `query`, with any range syntax. Empty ranges are rejected.
    fn query_range(&self, range: impl RangeBounds<usize>) -> Result<C::Value> {
        if !self.is_built() {
            return Err(Error::UninitializedStructure);
        }
        let [l, r] = range_to_lr(range, || self.len());
        if r == 0 || l >= r {
            return Err(Error::IndexOutOfRange {
                l,
                r: r.saturating_sub(1),
                len: self.len(),
            });
        }
        self.query(l, r - 1)
    }
}

/// Validates `[l, r]` for a structure of `len` elements.
pub(crate) fn check_range(l: usize, r: usize, len: usize) -> Result<()> {
    if l > r || r >= len {
        Err(Error::IndexOutOfRange { l, r, len })
    } else {
        Ok(())
    }
}

/// Half-open `[l, r)` bounds of a range. Bounds past `usize::MAX` saturate,
/// which is never inside a sequence.
fn range_to_lr(range: impl RangeBounds<usize>, len: impl FnOnce() -> usize) -> [usize; 2] {
    use std::ops::Bound::*;
    let start = match range.start_bound() {
        Included(start) => *start,
        Excluded(start) => start.saturating_add(1),
        Unbounded => 0,
    };
    let end = match range.end_bound() {
        Included(end) => end.saturating_add(1),
        Excluded(end) => *end,
        Unbounded => len(),
    };
    [start, end]
}
