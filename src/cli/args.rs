use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::Dialect;

#[derive(Parser, Debug)]
#[command(name = "srcorder")]
#[command(version, about = "Compute a valid compilation order for Fortran and C/C++ sources")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the files in build order, prerequisites first
    Order {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Print the dependency graph as markdown
    Graph {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Source files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Source dialect; `auto` picks one per file by extension
    #[arg(short, long, value_enum, default_value_t = DialectArg::Auto)]
    pub dialect: DialectArg,

    /// Config file (defaults to ./srcorder.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialectArg {
    Auto,
    Module,
    Include,
}

impl DialectArg {
    pub fn forced(self) -> Option<Dialect> {
        match self {
            DialectArg::Auto => None,
            DialectArg::Module => Some(Dialect::Module),
            DialectArg::Include => Some(Dialect::Include),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_order() {
        let args = Args::parse_from(["srcorder", "order", "src", "--dialect", "module", "--json"]);
        match args.command {
            Command::Order { input, json } => {
                assert!(json);
                assert_eq!(input.paths, vec![PathBuf::from("src")]);
                assert_eq!(input.dialect.forced(), Some(Dialect::Module));
                assert!(!input.quiet);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_paths_required() {
        assert!(Args::try_parse_from(["srcorder", "graph"]).is_err());
    }
}
