pub mod combiner;
pub mod error;
pub mod euler_tour;
pub mod lca;
pub mod log_table;
pub mod range_query;
pub mod sparse_table;
pub mod sparse_table_idempotent;
pub mod tree;

pub use error::{Error, Result};
pub use euler_tour::{euler_tour, EulerTourStyle};
pub use lca::LowestCommonAncestor;
pub use range_query::RangeQuery;
pub use sparse_table::SparseTable;
pub use sparse_table_idempotent::SparseTableIdempotent;
pub use tree::Tree;
