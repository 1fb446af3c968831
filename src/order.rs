//! Extract, register, link and sort in one call.

use thiserror::Error;

use crate::config::ExtensionsConfig;
use crate::graph::{build_graph, Analysis, SortError, Warning};
use crate::types::Dialect;
use std::path::Path;

/// A successful ordering and the warnings raised on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ordered {
    pub files: Vec<String>,
    pub warnings: Vec<Warning>,
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("cannot tell the dialect of {path}, pass --dialect")]
    UnknownDialect { path: String },

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Files sharing one dialect, linked into their own graph
#[derive(Debug)]
pub struct Group {
    pub dialect: Dialect,
    pub analysis: Analysis,
}

/// Order files of a single dialect. All-or-nothing: on error no partial
/// order is returned.
pub fn order_source_files<S: AsRef<str>>(
    paths: &[S],
    dialect: Dialect,
) -> Result<Ordered, SortError> {
    let analysis = build_graph(paths, dialect);
    let files = analysis.graph.toposort()?;
    Ok(Ordered {
        files,
        warnings: analysis.warnings,
    })
}

/// Split paths by dialect, module-dialect group first. With `forced` set,
/// every path goes to that dialect.
pub fn partition<S: AsRef<str>>(
    paths: &[S],
    forced: Option<Dialect>,
    extensions: &ExtensionsConfig,
) -> Result<Vec<(Dialect, Vec<String>)>, OrderError> {
    let mut module = Vec::new();
    let mut include = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let dialect = match forced {
            Some(dialect) => dialect,
            None => Dialect::from_path(Path::new(path), extensions).ok_or_else(|| {
                OrderError::UnknownDialect {
                    path: path.to_string(),
                }
            })?,
        };
        match dialect {
            Dialect::Module => module.push(path.to_string()),
            Dialect::Include => include.push(path.to_string()),
        }
    }

    Ok([(Dialect::Module, module), (Dialect::Include, include)]
        .into_iter()
        .filter(|(_, files)| !files.is_empty())
        .collect())
}

pub fn analyze_groups<S: AsRef<str>>(
    paths: &[S],
    forced: Option<Dialect>,
    extensions: &ExtensionsConfig,
) -> Result<Vec<Group>, OrderError> {
    Ok(partition(paths, forced, extensions)?
        .into_iter()
        .map(|(dialect, files)| Group {
            dialect,
            analysis: build_graph(&files, dialect),
        })
        .collect())
}

/// Concatenate the order of each group
pub fn sort_groups(groups: &[Group]) -> Result<Vec<String>, SortError> {
    let mut files = Vec::new();
    for group in groups {
        files.extend(group.analysis.graph.toposort()?);
    }
    Ok(files)
}

/// Order a mix of dialects, each group sorted on its own
pub fn order_mixed<S: AsRef<str>>(
    paths: &[S],
    extensions: &ExtensionsConfig,
) -> Result<Ordered, OrderError> {
    let groups = analyze_groups(paths, None, extensions)?;
    let files = sort_groups(&groups)?;
    let warnings = groups
        .into_iter()
        .flat_map(|group| group.analysis.warnings)
        .collect();
    Ok(Ordered { files, warnings })
}
