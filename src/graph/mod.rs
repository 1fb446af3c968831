mod builder;
mod error;
mod node;
mod registry;
mod toposort;

pub use builder::{build_graph, Analysis, GraphBuilder};
pub use error::{Listing, SortError, Warning};
pub use node::{DependencyGraph, Node, NodeId};
pub use registry::SymbolRegistry;
