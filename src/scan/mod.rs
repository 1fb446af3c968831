mod walker;

pub use walker::{collect_sources, expand_inputs};
