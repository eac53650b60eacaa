use thiserror::Error;

/// Failures reported by the range-query and LCA structures.
///
/// All of them are caller mistakes detected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("range [{l}, {r}] is not inside a sequence of length {len}")]
    IndexOutOfRange { l: usize, r: usize, len: usize },
    #[error("node {node} is not inside a tree of {size} nodes")]
    NodeOutOfRange { node: usize, size: usize },
    #[error("node {node} is not reachable from the root")]
    UnreachableNode { node: usize },
    #[error("structure was queried before being built")]
    UninitializedStructure,
}

pub type Result<T> = std::result::Result<T, Error>;
