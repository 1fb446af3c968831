mod json;
mod report;

pub use json::{EdgeEntry, JsonOutput};
pub use report::generate_report;
