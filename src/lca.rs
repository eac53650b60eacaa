//! Constant time lowest common ancestor queries.
//!
//! The repetitive Euler tour visits every node between two occurrences of `u`
//! and `v`, and the shallowest of them is their LCA. So after recording where
//! each node first shows up in the tour, an LCA query is a range minimum query
//! over the depths along the tour.

use crate::combiner::{IdempotentCombiner, RangeCombiner};
use crate::error::{Error, Result};
use crate::euler_tour::{euler_tour, EulerTourStyle};
use crate::range_query::RangeQuery;
use crate::sparse_table_idempotent::SparseTableIdempotent;
use crate::tree::{PrettyIdx, Tree, NPOS};

/// Picks the shallower of two `(node, depth)` pairs. Ties go to the second one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthMin;

impl RangeCombiner for DepthMin {
    type Value = (usize, usize);
    fn combine(a: &(usize, usize), b: &(usize, usize)) -> (usize, usize) {
        if a.1 < b.1 {
            *a
        } else {
            *b
        }
    }
}

impl IdempotentCombiner for DepthMin {}

/// LCA of any pair of nodes in `O(1)`, after `O(n lg n)` preprocessing.
///
/// Doesn't keep a reference to the tree. It must be rebuilt after the tree's
/// edges change.
#[derive(Debug, Clone, Default)]
pub struct LowestCommonAncestor {
    tour: Vec<usize>,
    /// Position of each node's first occurrence in `tour`, NPOS if unreachable.
    first_seen: Vec<usize>,
    depth: Vec<usize>,
    st: SparseTableIdempotent<DepthMin>,
}

impl LowestCommonAncestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree<V, W>(tree: &mut Tree<V, W>) -> Self {
        let mut lca = Self::new();
        lca.build(tree);
        lca
    }

    /// Preprocesses `tree`.
    ///
    /// Overwrites the `depth` and `parent` of every node through
    /// [`Tree::compute_depths`], so any values the caller stored there are lost.
    pub fn build<V, W>(&mut self, tree: &mut Tree<V, W>) {
        self.tour = euler_tour(tree, EulerTourStyle::Repetitive);
        tree.compute_depths();
        self.depth = tree.iter().map(|n| n.depth).collect();
        self.first_seen = vec![NPOS; tree.size()];
        for (i, &u) in self.tour.iter().enumerate() {
            if self.first_seen[u] == NPOS {
                self.first_seen[u] = i;
            }
        }
        let depth = &self.depth;
        self.st.build(self.tour.iter().map(|&u| (u, depth[u])));
        log::debug!(
            "Built LCA over {} nodes rooted at {}, tour length {}",
            tree.size(),
            PrettyIdx(tree.root()),
            self.tour.len()
        );
    }

    /// Releases all derived state. Queries fail until the next `build`.
    pub fn clear(&mut self) {
        self.tour.clear();
        self.first_seen.clear();
        self.depth.clear();
        self.st.clear();
    }

    /// Position of `u`'s first occurrence in the tour.
    fn position(&self, u: usize) -> Result<usize> {
        if !self.st.is_built() {
            return Err(Error::UninitializedStructure);
        }
        match self.first_seen.get(u) {
            None => Err(Error::NodeOutOfRange {
                node: u,
                size: self.first_seen.len(),
            }),
            Some(&NPOS) => Err(Error::UnreachableNode { node: u }),
            Some(&i) => Ok(i),
        }
    }

    /// The deepest node that is an ancestor of both `u` and `v`.
    pub fn lca(&self, u: usize, v: usize) -> Result<usize> {
        let (pu, pv) = (self.position(u)?, self.position(v)?);
        let (l, r) = (pu.min(pv), pu.max(pv));
        let (node, _) = self.st.query(l, r)?;
        Ok(node)
    }

    /// Number of edges from the root to `u`.
    pub fn depth(&self, u: usize) -> Result<usize> {
        self.position(u)?;
        Ok(self.depth[u])
    }

    /// Number of edges on the path between `u` and `v`.
    pub fn distance(&self, u: usize, v: usize) -> Result<usize> {
        let a = self.lca(u, v)?;
        Ok(self.depth[u] + self.depth[v] - 2 * self.depth[a])
    }

    /// Whether `a` is on the path from the root to `u`. Every node is its own ancestor.
    pub fn is_ancestor(&self, a: usize, u: usize) -> Result<bool> {
        Ok(self.lca(a, u)? == a)
    }

    /// The repetitive Euler tour of the last build.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Position of `u`'s first occurrence in the tour, if it was reached.
    pub fn first_seen(&self, u: usize) -> Option<usize> {
        self.first_seen.get(u).copied().filter(|&i| i != NPOS)
    }
}
