use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use rand::{seq::SliceRandom, Rng};
use range_lca::{
    combiner::{IdempotentCombiner, RangeCombiner},
    RangeQuery, SparseTable, SparseTableIdempotent, Tree,
};

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Range query structures that can be built from a slice, so tests can be
/// written once for all of them.
#[allow(dead_code)]
pub trait BuildFrom<C: RangeCombiner>: RangeQuery<C> + std::fmt::Debug {
    fn build_from(identity: C::Value, values: &[C::Value]) -> Self;
}

impl<C: RangeCombiner> BuildFrom<C> for SparseTable<C> {
    fn build_from(identity: C::Value, values: &[C::Value]) -> Self {
        SparseTable::from_values(identity, values.iter().cloned())
    }
}

impl<C: IdempotentCombiner> BuildFrom<C> for SparseTableIdempotent<C> {
    fn build_from(_identity: C::Value, values: &[C::Value]) -> Self {
        SparseTableIdempotent::from_values(values.iter().cloned())
    }
}

/// Left to right fold of `values[l..=r]`, the obviously correct answer.
#[allow(dead_code)]
pub fn naive_fold<C: RangeCombiner>(values: &[C::Value], l: usize, r: usize) -> C::Value {
    let mut acc = values[l].clone();
    for v in &values[l + 1..=r] {
        acc = C::combine(&acc, v);
    }
    acc
}

/// Random tree on `n` nodes with a random root. Returns the tree and the
/// parent of each node (usize::MAX for the root).
#[allow(dead_code)]
pub fn random_tree(n: usize, directed: bool, rng: &mut impl Rng) -> (Tree<usize>, Vec<usize>) {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    let mut tree = Tree::from_values(0..n, order[0]);
    let mut parent = vec![usize::MAX; n];
    for i in 1..n {
        let p = order[rng.gen_range(0..i)];
        let u = order[i];
        parent[u] = p;
        if directed {
            tree.add_directed_edge(p, u);
        } else {
            tree.add_undirected_edge(p, u);
        }
    }
    (tree, parent)
}

/// Nodes on the path from `u` up to the root, `u` first.
#[allow(dead_code)]
pub fn ancestors(parent: &[usize], mut u: usize) -> Vec<usize> {
    let mut path = vec![u];
    while parent[u] != usize::MAX {
        u = parent[u];
        path.push(u);
    }
    path
}

#[allow(dead_code)]
pub fn naive_lca(parent: &[usize], u: usize, v: usize) -> usize {
    let au = ancestors(parent, u);
    let av = ancestors(parent, v);
    *au.iter().find(|a| av.contains(a)).unwrap()
}

/// The tree from the crate docs:
/// ```text
///         0
///       / | \
///      1  2  3
///      |
///      4
/// ```
#[allow(dead_code)]
pub fn small_tree() -> Tree<i32> {
    let mut tree = Tree::new(5, 0);
    for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 4)] {
        tree.add_undirected_edge(u, v);
    }
    tree
}

/// ```text
///               0
///             / | \
///           1   2   3
///          /    |    \
///         4     5     6
///        / \   / \
///       7   8 9   10
///            /   / | \
///           11  12 13 14
///          / \
///         15  16
/// ```
#[allow(dead_code)]
pub fn big_tree(directed: bool) -> Tree<i32> {
    let mut tree = Tree::new(17, 0);
    for (u, v) in [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 4),
        (4, 7),
        (4, 8),
        (2, 5),
        (5, 9),
        (5, 10),
        (9, 11),
        (11, 15),
        (11, 16),
        (10, 12),
        (10, 13),
        (10, 14),
        (3, 6),
    ] {
        if directed {
            tree.add_directed_edge(u, v);
        } else {
            tree.add_undirected_edge(u, v);
        }
    }
    tree
}
