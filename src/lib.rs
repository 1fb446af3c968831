//! Compilation ordering for Fortran and C/C++ sources.
//!
//! Each file is scanned for the symbols it provides (`module` names, or its
//! own header for C/C++) and the symbols it requires (`use` / `#include`).
//! Requirements are resolved against every file's provisions to build a
//! dependency graph, which is then topologically sorted.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod graph;
pub mod order;
pub mod scan;
pub mod types;

pub use graph::{DependencyGraph, SortError, Warning};
pub use order::{order_mixed, order_source_files, OrderError, Ordered};
pub use types::{Dialect, SourceSymbols};
