mod args;
mod graph;
mod order;
mod output;

pub use args::{Args, Command, DialectArg, InputArgs};
pub use graph::run_graph;
pub use order::run_order;
pub use output::{print_error, print_warnings};
