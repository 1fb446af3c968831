use anyhow::{Context, Result};
use std::env;

use super::args::InputArgs;
use super::output::print_warnings;
use crate::config::{Config, OutputFormat};
use crate::emit::JsonOutput;
use crate::order::{analyze_groups, sort_groups, Group};
use crate::scan::expand_inputs;

pub fn run_order(input: &InputArgs, json: bool) -> Result<()> {
    let (config, groups) = load_groups(input)?;

    let order = sort_groups(&groups)?;

    if json || config.output.format == OutputFormat::Json {
        println!("{}", JsonOutput::new(&groups, order).to_json());
    } else {
        for file in &order {
            println!("{}", file);
        }
    }

    Ok(())
}

/// Config, input expansion and graph building shared by the subcommands.
/// Warnings are printed here so they show up even when sorting fails.
pub(super) fn load_groups(input: &InputArgs) -> Result<(Config, Vec<Group>)> {
    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    let config = Config::load_or_default(input.config.as_deref(), &cwd)?;

    let paths = expand_inputs(&input.paths, &config.extensions)?;
    let groups = analyze_groups(&paths, input.dialect.forced(), &config.extensions)?;

    if !input.quiet {
        for group in &groups {
            print_warnings(&group.analysis.warnings);
        }
    }

    Ok((config, groups))
}
