use std::collections::HashMap;
use std::path::Path;

use super::error::Warning;
use super::node::{DependencyGraph, NodeId};
use super::registry::SymbolRegistry;
use crate::analyze::{extract_file, ExtractError};
use crate::types::{Dialect, SourceSymbols};

/// A linked graph plus the diagnostics produced while building it
#[derive(Debug, Default)]
pub struct Analysis {
    pub graph: DependencyGraph,
    pub warnings: Vec<Warning>,
}

/// Two-pass linker: every file is registered before any requirement is
/// resolved, because a provider may appear later in the input.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DependencyGraph,
    registry: SymbolRegistry,
    requirements: HashMap<String, Vec<String>>,
    warnings: Vec<Warning>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass 1 for a file on disk. An unreadable file still becomes a node,
    /// with no provided or required symbols.
    pub fn add_file(&mut self, path: &str, dialect: Dialect) {
        if self.is_duplicate(path) {
            return;
        }

        let symbols = match extract_file(Path::new(path), dialect) {
            Ok(symbols) => symbols,
            Err(ExtractError::Unreadable { source, .. }) => {
                self.warnings.push(Warning::Unreadable {
                    path: path.to_string(),
                    reason: source.to_string(),
                });
                SourceSymbols::new()
            }
        };
        self.insert(path, symbols);
    }

    /// Pass 1 for symbols that were already extracted
    pub fn add_symbols(&mut self, path: &str, symbols: SourceSymbols) {
        if self.is_duplicate(path) {
            return;
        }
        self.insert(path, symbols);
    }

    fn is_duplicate(&mut self, path: &str) -> bool {
        if self.graph.find(path).is_some() {
            self.warnings.push(Warning::DuplicateInput {
                path: path.to_string(),
            });
            return true;
        }
        false
    }

    fn insert(&mut self, path: &str, symbols: SourceSymbols) {
        self.graph.add_node(path);

        for symbol in &symbols.provides {
            if let Some(previous) = self.registry.register(symbol, path) {
                self.warnings.push(Warning::DuplicateProvider {
                    symbol: symbol.clone(),
                    previous,
                    current: path.to_string(),
                });
            }
        }

        self.requirements.insert(path.to_string(), symbols.requires);
    }

    /// Pass 2: turn requirements into edges. Symbols nobody provides are
    /// external and add no edge; neither does a file requiring itself.
    pub fn link(mut self) -> Analysis {
        let ids: Vec<NodeId> = self.graph.ids().collect();

        for id in ids {
            let path = self.graph.node(id).name().to_string();
            let Some(required) = self.requirements.get(&path) else {
                continue;
            };

            match resolve(&self.graph, &self.registry, &path, required) {
                Ok(prerequisites) => {
                    for prerequisite in prerequisites {
                        self.graph.add_dependency(id, prerequisite);
                    }
                }
                Err(warning) => self.warnings.push(warning),
            }
        }

        Analysis {
            graph: self.graph,
            warnings: self.warnings,
        }
    }
}

/// Provider nodes for one file's requirements, or a warning if any provider
/// has no node, in which case none of the file's edges are wired.
fn resolve(
    graph: &DependencyGraph,
    registry: &SymbolRegistry,
    path: &str,
    required: &[String],
) -> Result<Vec<NodeId>, Warning> {
    let mut prerequisites = Vec::new();

    for symbol in required {
        let Some(provider) = registry.provider(symbol) else {
            continue;
        };
        if provider == path {
            continue;
        }
        match graph.find(provider) {
            Some(id) => prerequisites.push(id),
            None => {
                return Err(Warning::MissingNode {
                    path: path.to_string(),
                    symbol: symbol.clone(),
                    provider: provider.to_string(),
                })
            }
        }
    }

    Ok(prerequisites)
}

/// Extract, register and link every path with a single dialect
pub fn build_graph<S: AsRef<str>>(paths: &[S], dialect: Dialect) -> Analysis {
    let mut builder = GraphBuilder::new();
    for path in paths {
        builder.add_file(path.as_ref(), dialect);
    }
    builder.link()
}
