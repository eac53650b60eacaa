//! Rooted tree container with ordered, weighted adjacency.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use debug_tree::TreeBuilder;
use derivative::Derivative;

/// Sentinel for "no index", used by unset parent, depth and distance slots.
pub const NPOS: usize = usize::MAX;

fn idx_fmt(u: &usize, f: &mut Formatter) -> std::fmt::Result {
    if *u == NPOS {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

/// Used to pretty print an index, outputting ∅ if it is NPOS.
pub struct PrettyIdx(pub usize);

impl Display for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        idx_fmt(&self.0, f)
    }
}

impl Debug for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Traversal state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    White,
    Grey,
    Black,
}

#[derive(Derivative)]
#[derivative(Debug, Clone)]
pub struct Node<V, W> {
    index: usize,
    pub value: V,
    /// Neighbor index -> edge weight. Iterates in ascending neighbor order.
    /// Keys outside `0..size` are ignored by traversals.
    pub edges: BTreeMap<usize, W>,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub parent: usize,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub depth: usize,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub distance: usize,
    /// Free for client algorithms.
    pub color: Color,
    /// A second marking field, so two client algorithms can run without
    /// clobbering each other's visited state.
    pub secondary_color: Color,
}

impl<V, W> Node<V, W> {
    fn new(index: usize, value: V) -> Self {
        Self {
            index,
            value,
            edges: BTreeMap::new(),
            parent: NPOS,
            depth: NPOS,
            distance: NPOS,
            color: Color::White,
            secondary_color: Color::White,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Tree of nodes `0..size` with a fixed root.
///
/// Nothing checks that the edges actually form a tree: callers decide whether
/// to add directed parent -> child edges or undirected ones, and are
/// responsible for keeping the structure acyclic and connected.
/// Operations taking node indices panic if the node doesn't exist. Traversals
/// skip keys of `edges` that aren't nodes, which can only get there by
/// inserting into the map directly.
#[derive(Clone)]
pub struct Tree<V, W = i64> {
    nodes: Vec<Node<V, W>>,
    root: usize,
}

impl<V: Default, W> Default for Tree<V, W> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<V: Default, W> Tree<V, W> {
    /// Tree with `size` nodes holding default values and no edges.
    pub fn new(size: usize, root: usize) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: 0,
        };
        tree.build(size, root);
        tree
    }

    /// Resets the tree to `size` fresh nodes rooted at `root`.
    pub fn build(&mut self, size: usize, root: usize) {
        assert!(
            size == 0 || root < size,
            "root {root} outside of a tree with {size} nodes"
        );
        self.nodes.clear();
        self.nodes.extend((0..size).map(|i| Node::new(i, V::default())));
        self.root = root;
    }
}

impl<V, W> Tree<V, W> {
    /// Tree with one node per value, in order.
    pub fn from_values(values: impl IntoIterator<Item = V>, root: usize) -> Self {
        let nodes: Vec<_> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Node::new(i, v))
            .collect();
        assert!(
            nodes.is_empty() || root < nodes.len(),
            "root {root} outside of a tree with {} nodes",
            nodes.len()
        );
        Self { nodes, root }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn node(&self, u: usize) -> &Node<V, W> {
        &self.nodes[u]
    }

    pub fn node_mut(&mut self, u: usize) -> &mut Node<V, W> {
        &mut self.nodes[u]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<V, W>> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node<V, W>> {
        self.nodes.iter_mut()
    }

    fn check_node(&self, u: usize) {
        assert!(
            u < self.nodes.len(),
            "node {u} outside of a tree with {} nodes",
            self.nodes.len()
        );
    }

    /// Adds `u -> v` with the given weight, or updates the weight if it exists.
    pub fn add_directed_edge_weighted(&mut self, u: usize, v: usize, weight: W) {
        self.check_node(v);
        self.nodes[u].edges.insert(v, weight);
    }

    /// Adds `u - v` with the given weight, or updates the weight if it exists.
    pub fn add_undirected_edge_weighted(&mut self, u: usize, v: usize, weight: W)
    where
        W: Clone,
    {
        self.check_node(u);
        self.check_node(v);
        self.nodes[u].edges.insert(v, weight.clone());
        self.nodes[v].edges.insert(u, weight);
    }

    /// Removes `u -> v`. Does nothing if there is no such edge.
    pub fn remove_directed_edge(&mut self, u: usize, v: usize) {
        self.nodes[u].edges.remove(&v);
    }

    /// Removes `u - v`. Does nothing if there is no such edge.
    pub fn remove_undirected_edge(&mut self, u: usize, v: usize) {
        self.check_node(v);
        self.nodes[u].edges.remove(&v);
        self.nodes[v].edges.remove(&u);
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.nodes[u].edges.contains_key(&v)
    }

    /// Number of outgoing edges of `u`.
    pub fn degree(&self, u: usize) -> usize {
        self.nodes[u].edges.len()
    }

    /// Sets every node's `color` to white.
    pub fn reset_color(&mut self) {
        for node in &mut self.nodes {
            node.color = Color::White;
        }
    }

    /// Sets every node's `secondary_color` to white.
    pub fn reset_secondary_color(&mut self) {
        for node in &mut self.nodes {
            node.secondary_color = Color::White;
        }
    }

    /// Depth-first walk from the root, visiting neighbors in ascending index order.
    ///
    /// Marks are kept by the iterator, neither color field is touched.
    pub fn dfs(&self) -> Dfs<'_, V, W> {
        Dfs {
            tree: self,
            marks: vec![Color::White; self.nodes.len()],
            stack: Vec::new(),
            pending_root: (!self.nodes.is_empty()).then_some(self.root),
        }
    }

    /// Recomputes `depth` and `parent` of every node reachable from the root.
    /// The root has depth 0 and parent NPOS. Unreachable nodes get NPOS for both.
    pub fn compute_depths(&mut self) {
        let entered: Vec<(usize, Option<usize>)> = self
            .dfs()
            .filter_map(|e| match e {
                DfsEvent::Enter { node, parent } => Some((node, parent)),
                DfsEvent::Exit { .. } => None,
            })
            .collect();
        for node in &mut self.nodes {
            node.depth = NPOS;
            node.parent = NPOS;
        }
        for (u, parent) in entered {
            let (depth, parent) = match parent {
                Some(p) => (self.nodes[p].depth + 1, p),
                None => (0, NPOS),
            };
            self.nodes[u].depth = depth;
            self.nodes[u].parent = parent;
        }
        log::trace!("Computed depths of {} nodes", self.nodes.len());
    }
}

impl<V, W: From<u8>> Tree<V, W> {
    /// Adds `u -> v` with weight 1.
    pub fn add_directed_edge(&mut self, u: usize, v: usize) {
        self.add_directed_edge_weighted(u, v, W::from(1));
    }
}

impl<V, W: From<u8> + Clone> Tree<V, W> {
    /// Adds `u - v` with weight 1.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize) {
        self.add_undirected_edge_weighted(u, v, W::from(1));
    }
}

impl<V, W> Index<usize> for Tree<V, W> {
    type Output = Node<V, W>;
    fn index(&self, u: usize) -> &Self::Output {
        &self.nodes[u]
    }
}

impl<V, W> IndexMut<usize> for Tree<V, W> {
    fn index_mut(&mut self, u: usize) -> &mut Self::Output {
        &mut self.nodes[u]
    }
}

impl<'a, V, W> IntoIterator for &'a Tree<V, W> {
    type Item = &'a Node<V, W>;
    type IntoIter = std::slice::Iter<'a, Node<V, W>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Debug, W: Debug> Debug for Tree<V, W> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!(
            "Tree (size {}, root {})",
            self.nodes.len(),
            PrettyIdx(self.root)
        ));
        let mut open = Vec::new();
        let mut seen = vec![false; self.nodes.len()];
        for event in self.dfs() {
            match event {
                DfsEvent::Enter { node, parent } => {
                    seen[node] = true;
                    let n = &self.nodes[node];
                    let weight = parent.and_then(|p| self.nodes[p].edges.get(&node));
                    let text = match weight {
                        Some(w) => format!("[{node}] {:?} (weight {w:?})", n.value),
                        None => format!("[{node}] {:?}", n.value),
                    };
                    open.push(builder.add_branch(&text));
                }
                DfsEvent::Exit { .. } => {
                    open.pop();
                }
            }
        }
        let unreachable: Vec<usize> = (0..self.nodes.len()).filter(|&u| !seen[u]).collect();
        if !unreachable.is_empty() {
            builder.add_leaf(&format!("unreachable: {unreachable:?}"));
        }
        drop(_b);
        write!(f, "{}", builder.string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// First time `node` is reached, coming from `parent`.
    Enter { node: usize, parent: Option<usize> },
    /// All of `node`'s children were visited, going back to `parent`.
    Exit { node: usize, parent: Option<usize> },
}

/// Iterative depth-first walk. Produces exactly the event order of the
/// recursive walk, without risking the call stack on deep trees.
pub struct Dfs<'a, V, W> {
    tree: &'a Tree<V, W>,
    marks: Vec<Color>,
    /// Path from the root to the current node, with the neighbors left to look at.
    stack: Vec<(usize, btree_map::Keys<'a, usize, W>)>,
    pending_root: Option<usize>,
}

impl<'a, V, W> Dfs<'a, V, W> {
    fn enter(&mut self, u: usize) {
        self.marks[u] = Color::Grey;
        self.stack.push((u, self.tree.nodes[u].edges.keys()));
    }
}

impl<V, W> Iterator for Dfs<'_, V, W> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<DfsEvent> {
        if let Some(root) = self.pending_root.take() {
            self.enter(root);
            return Some(DfsEvent::Enter {
                node: root,
                parent: None,
            });
        }
        let (u, neighbors) = self.stack.last_mut()?;
        let u = *u;
        let marks = &self.marks;
        match neighbors.find(|&&v| marks.get(v) == Some(&Color::White)) {
            Some(&v) => {
                self.enter(v);
                Some(DfsEvent::Enter {
                    node: v,
                    parent: Some(u),
                })
            }
            None => {
                self.marks[u] = Color::Black;
                self.stack.pop();
                Some(DfsEvent::Exit {
                    node: u,
                    parent: self.stack.last().map(|(p, _)| *p),
                })
            }
        }
    }
}
