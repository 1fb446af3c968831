use anyhow::Result;
use console::style;

use super::args::InputArgs;
use super::order::load_groups;
use crate::emit::generate_report;

pub fn run_graph(input: &InputArgs) -> Result<()> {
    let (_, groups) = load_groups(input)?;

    for group in &groups {
        let graph = &group.analysis.graph;
        eprintln!(
            "{} {} files, {} dependencies ({})",
            style("graph:").cyan().bold(),
            style(graph.len()).green(),
            style(graph.edge_count()).cyan(),
            group.dialect.as_str()
        );
        print!("{}", generate_report(graph));
    }

    Ok(())
}
