use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graph::Warning;
use crate::order::Group;
use crate::types::Dialect;

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub dialects: Vec<Dialect>,
    pub order: Vec<String>,
    pub edges: Vec<EdgeEntry>,
    pub warnings: Vec<Warning>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntry {
    pub file: String,
    pub depends_on: String,
}

impl JsonOutput {
    pub fn new(groups: &[Group], order: Vec<String>) -> Self {
        let edges = groups
            .iter()
            .flat_map(|g| g.analysis.graph.edges())
            .map(|(file, depends_on)| EdgeEntry { file, depends_on })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            dialects: groups.iter().map(|g| g.dialect).collect(),
            order,
            edges,
            warnings: groups
                .iter()
                .flat_map(|g| g.analysis.warnings.iter().cloned())
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
