//! Binary operations used to aggregate ranges.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Add;

/// An associative and commutative binary operation over `Value`.
///
/// Neither property can be checked at runtime. A combiner that breaks them
/// makes the range-query structures return wrong answers, it never makes them
/// panic.
pub trait RangeCombiner: Debug {
    type Value: Debug + Clone;
    /// Combine two values. `a` covers items to the left of `b`.
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Marker for combiners where `combine(a, a) == a`.
///
/// Required by [`crate::sparse_table_idempotent::SparseTableIdempotent`],
/// which answers queries with two overlapping windows.
pub trait IdempotentCombiner: RangeCombiner {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> RangeCombiner for Sum<T>
where
    T: Add<Output = T> + Debug + Clone,
{
    type Value = T;
    fn combine(a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Min<T>(PhantomData<T>);

impl<T: Ord + Debug + Clone> RangeCombiner for Min<T> {
    type Value = T;
    fn combine(a: &T, b: &T) -> T {
        if a < b {
            a.clone()
        } else {
            b.clone()
        }
    }
}

impl<T: Ord + Debug + Clone> IdempotentCombiner for Min<T> {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Max<T>(PhantomData<T>);

impl<T: Ord + Debug + Clone> RangeCombiner for Max<T> {
    type Value = T;
    fn combine(a: &T, b: &T) -> T {
        if a > b {
            a.clone()
        } else {
            b.clone()
        }
    }
}

impl<T: Ord + Debug + Clone> IdempotentCombiner for Max<T> {}
