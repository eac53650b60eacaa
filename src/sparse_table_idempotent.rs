//! Sparse table answering idempotent range queries in constant time.

use std::sync::Arc;

use derivative::Derivative;

use crate::combiner::IdempotentCombiner;
use crate::error::{Error, Result};
use crate::log_table::{LogSnapshot, LogTable};
use crate::range_query::{check_range, RangeQuery};
use crate::sparse_table::Levels;

#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
struct Built<C: IdempotentCombiner> {
    levels: Levels<C>,
    /// Covers every length in `0..=levels.len()`.
    #[derivative(Debug = "ignore")]
    log: LogSnapshot,
}

/// Sparse table for combiners with `combine(a, a) == a`, such as min, max or gcd.
///
/// Building takes `O(n lg n)` time and queries take `O(1)`: `[l, r]` is covered
/// by the two (possibly overlapping) windows of length `2^floor(log2(r - l + 1))`
/// that start at `l` and end at `r`.
///
/// The discrete log lookup lives in a [`LogTable`]. Each table gets its own
/// unless one is passed to [`SparseTableIdempotent::with_log_table`].
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub struct SparseTableIdempotent<C: IdempotentCombiner> {
    log_table: Arc<LogTable>,
    built: Option<Built<C>>,
}

impl<C: IdempotentCombiner> Default for SparseTableIdempotent<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: IdempotentCombiner> SparseTableIdempotent<C> {
    pub fn new() -> Self {
        Self::with_log_table(LogTable::shared())
    }

    /// Empty, unbuilt table that grows and reads the given log table.
    pub fn with_log_table(log_table: Arc<LogTable>) -> Self {
        Self {
            log_table,
            built: None,
        }
    }

    pub fn from_values(values: impl IntoIterator<Item = C::Value>) -> Self {
        let mut table = Self::new();
        table.build(values);
        table
    }

    /// Rebuilds the table over `values`, discarding previous state.
    pub fn build(&mut self, values: impl IntoIterator<Item = C::Value>) {
        let levels = Levels::<C>::build(values, |v| self.query_function_single(v));
        let log = self.log_table.covering(levels.len());
        self.built = Some(Built { levels, log });
    }

    /// Releases the table. Queries fail until the next `build`.
    pub fn clear(&mut self) {
        self.built = None;
    }

    pub fn log_table(&self) -> &Arc<LogTable> {
        &self.log_table
    }

    pub fn query_function(&self, a: &C::Value, b: &C::Value) -> C::Value {
        C::combine(a, b)
    }

    /// `combine(a, a)`, which is `a` itself for a well-behaved combiner.
    pub fn query_function_single(&self, a: &C::Value) -> C::Value {
        C::combine(a, a)
    }
}

impl<C: IdempotentCombiner> RangeQuery<C> for SparseTableIdempotent<C> {
    fn len(&self) -> usize {
        self.built.as_ref().map_or(0, |b| b.levels.len())
    }

    fn is_built(&self) -> bool {
        self.built.is_some()
    }

    fn query(&self, l: usize, r: usize) -> Result<C::Value> {
        let built = self.built.as_ref().ok_or(Error::UninitializedStructure)?;
        check_range(l, r, built.levels.len())?;
        let j = built.log[r - l + 1];
        Ok(self.query_function(
            built.levels.window(l, j),
            built.levels.window(r + 1 - (1usize << j), j),
        ))
    }
}
