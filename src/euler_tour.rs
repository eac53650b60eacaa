//! Euler tours of a [`Tree`].
//!
//! For the tree
//! ```text
//!         0
//!       / | \
//!      1  2  3
//!      |
//!      4
//! ```
//! the basic tour is `0 1 4 4 1 2 2 3 3 0` and the repetitive tour is
//! `0 1 4 1 0 2 0 3 0`.

use crate::tree::{DfsEvent, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerTourStyle {
    /// Each node appears twice, when entered and when left. Length `2n`.
    #[default]
    Basic,
    /// Each node appears when entered and again after each child returns. Length `2n - 1`.
    Repetitive,
}

/// Euler tour of the nodes reachable from the root, visiting neighbors in
/// ascending index order. Empty for an empty tree.
pub fn euler_tour<V, W>(tree: &Tree<V, W>, style: EulerTourStyle) -> Vec<usize> {
    let mut tour = Vec::with_capacity(2 * tree.size());
    for event in tree.dfs() {
        match (event, style) {
            (DfsEvent::Enter { node, .. }, _) => tour.push(node),
            (DfsEvent::Exit { node, .. }, EulerTourStyle::Basic) => tour.push(node),
            (
                DfsEvent::Exit {
                    parent: Some(p), ..
                },
                EulerTourStyle::Repetitive,
            ) => tour.push(p),
            (DfsEvent::Exit { parent: None, .. }, EulerTourStyle::Repetitive) => {}
        }
    }
    log::debug!("{style:?} euler tour of {} nodes: {}", tree.size(), tour.len());
    log::trace!("tour {tour:?}");
    tour
}
