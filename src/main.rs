use clap::Parser;

use srcorder::cli::{print_error, run_graph, run_order, Args, Command};

fn main() {
    let args = Args::parse();

    let result = match &args.command {
        Command::Order { input, json } => run_order(input, *json),
        Command::Graph { input } => run_graph(input),
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
