use console::style;

use crate::graph::Warning;

pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}
