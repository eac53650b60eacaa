//! Sparse table for associative range queries in logarithmic time.

use derivative::Derivative;

use crate::combiner::RangeCombiner;
use crate::error::{Error, Result};
use crate::range_query::{check_range, RangeQuery};

/// Precomputed aggregates of every power-of-two window of a sequence.
///
/// `levels[j][i]` is the aggregate of the window of length `2^j` starting at
/// `i`. Level `j` only holds the windows that fit, so it has `n - 2^j + 1`
/// entries.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub(crate) struct Levels<C: RangeCombiner> {
    levels: Vec<Vec<C::Value>>,
    len: usize,
    /// floor(log2(len)) + 1, or 0 when empty.
    exp_max: usize,
}

impl<C: RangeCombiner> Levels<C> {
    /// Builds all levels. `leaf` turns a source value into its level 0 entry.
    pub(crate) fn build(
        values: impl IntoIterator<Item = C::Value>,
        leaf: impl Fn(&C::Value) -> C::Value,
    ) -> Self {
        let base: Vec<C::Value> = values.into_iter().map(|v| leaf(&v)).collect();
        let len = base.len();
        let exp_max = if len == 0 {
            0
        } else {
            len.ilog2() as usize + 1
        };
        let mut levels = Vec::with_capacity(exp_max);
        levels.push(base);
        for j in 1..exp_max {
            let half = 1usize << (j - 1);
            let prev = &levels[j - 1];
            let cur: Vec<C::Value> = (0..=len - (1usize << j))
                .map(|i| C::combine(&prev[i], &prev[i + half]))
                .collect();
            levels.push(cur);
        }
        log::debug!("Built sparse table levels: len {len} exp_max {exp_max}");
        Self {
            levels,
            len,
            exp_max,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn exp_max(&self) -> usize {
        self.exp_max
    }

    /// Aggregate of the window of length `2^j` starting at `i`. Panics if it doesn't fit.
    pub(crate) fn window(&self, i: usize, j: usize) -> &C::Value {
        &self.levels[j][i]
    }
}

/// Generic sparse table over an associative and commutative combiner.
///
/// Building takes `O(n lg n)` time and queries take `O(lg n)`. The combiner
/// does not need to be idempotent, for that case see
/// [`SparseTableIdempotent`](crate::sparse_table_idempotent::SparseTableIdempotent),
/// which answers in constant time.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub struct SparseTable<C: RangeCombiner> {
    /// Satisfies `combine(x, identity) == x`. Fixed at construction.
    identity: C::Value,
    levels: Option<Levels<C>>,
}

impl<C: RangeCombiner> SparseTable<C> {
    /// Empty, unbuilt table. `identity` must satisfy `combine(x, identity) == x`.
    pub fn new(identity: C::Value) -> Self {
        Self {
            identity,
            levels: None,
        }
    }

    pub fn from_values(identity: C::Value, values: impl IntoIterator<Item = C::Value>) -> Self {
        let mut table = Self::new(identity);
        table.build(values);
        table
    }

    /// Rebuilds the table over `values`, discarding previous state.
    pub fn build(&mut self, values: impl IntoIterator<Item = C::Value>) {
        let levels = Levels::build(values, |v| self.query_function_single(v));
        self.levels = Some(levels);
    }

    /// Releases the table. Queries fail until the next `build`.
    pub fn clear(&mut self) {
        self.levels = None;
    }

    pub fn identity(&self) -> &C::Value {
        &self.identity
    }

    /// floor(log2(len)) + 1 of the last build, 0 if unbuilt or empty.
    pub fn exp_max(&self) -> usize {
        self.levels.as_ref().map_or(0, Levels::exp_max)
    }

    pub fn query_function(&self, a: &C::Value, b: &C::Value) -> C::Value {
        C::combine(a, b)
    }

    /// `combine(a, identity)`, used for the level 0 entries.
    pub fn query_function_single(&self, a: &C::Value) -> C::Value {
        C::combine(a, &self.identity)
    }
}

impl<C: RangeCombiner> RangeQuery<C> for SparseTable<C> {
    fn len(&self) -> usize {
        self.levels.as_ref().map_or(0, Levels::len)
    }

    fn is_built(&self) -> bool {
        self.levels.is_some()
    }

    /// Folds the disjoint power-of-two blocks of `[l, r]`, largest first.
    fn query(&self, mut l: usize, r: usize) -> Result<C::Value> {
        let levels = self.levels.as_ref().ok_or(Error::UninitializedStructure)?;
        check_range(l, r, levels.len())?;
        let mut res = self.query_function(&self.identity, &self.identity);
        for j in (0..levels.exp_max()).rev() {
            if l + (1usize << j) - 1 <= r {
                res = self.query_function(&res, levels.window(l, j));
                l += 1usize << j;
            }
        }
        Ok(res)
    }
}
