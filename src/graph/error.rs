use serde::Serialize;
use thiserror::Error;

/// Node name paired with the names of its unresolved dependencies
pub type Listing = Vec<(String, Vec<String>)>;

/// Fatal outcomes of a topological sort. No partial order is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Every file depends on something, so there is nowhere to start
    #[error("all files have dependencies, no starting point:\n{}", format_listing(.adjacency))]
    NoRoots { adjacency: Listing },

    /// Files still waiting on each other once no more can be placed
    #[error("dependency graph has at least one cycle:\n{}", format_listing(.residual))]
    Cycle { residual: Listing },
}

/// Non-fatal diagnostics collected while building the graph
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    #[error("could not open {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("{path}: no node for {provider} (provides {symbol}), dependencies not wired")]
    MissingNode {
        path: String,
        symbol: String,
        provider: String,
    },

    #[error("{symbol} is provided by both {previous} and {current}, using {current}")]
    DuplicateProvider {
        symbol: String,
        previous: String,
        current: String,
    },

    #[error("{path} listed more than once, keeping the first")]
    DuplicateInput { path: String },
}

fn format_listing(listing: &Listing) -> String {
    listing
        .iter()
        .map(|(name, deps)| format!("  {} -> [{}]", name, deps.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_roots_display() {
        let err = SortError::NoRoots {
            adjacency: vec![
                ("a".to_string(), vec!["b".to_string()]),
                ("b".to_string(), vec!["a".to_string()]),
            ],
        };
        assert_eq!(
            err.to_string(),
            "all files have dependencies, no starting point:\n  a -> [b]\n  b -> [a]"
        );
    }

    #[test]
    fn test_cycle_display() {
        let err = SortError::Cycle {
            residual: vec![("x".to_string(), vec!["y".to_string(), "z".to_string()])],
        };
        assert!(err.to_string().starts_with("dependency graph has at least one cycle"));
        assert!(err.to_string().contains("x -> [y, z]"));
        assert!(matches!(err, SortError::Cycle { ref residual } if residual.len() == 1));
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::DuplicateProvider {
            symbol: "KINDS".to_string(),
            previous: "a.f90".to_string(),
            current: "b.f90".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "KINDS is provided by both a.f90 and b.f90, using b.f90"
        );
    }
}
