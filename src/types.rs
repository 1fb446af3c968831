use serde::Serialize;
use std::path::Path;

use crate::config::ExtensionsConfig;

/// Source dialect, decides which extractor scans a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `module` declarations and `use` statements (Fortran)
    Module,
    /// `#include` directives (C/C++)
    Include,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Module => "module",
            Dialect::Include => "include",
        }
    }

    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path, extensions: &ExtensionsConfig) -> Option<Dialect> {
        let ext = path.extension()?.to_str()?.to_lowercase();

        if extensions.module.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
            Some(Dialect::Module)
        } else if extensions.include.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
            Some(Dialect::Include)
        } else {
            None
        }
    }
}

/// Symbols a single file provides and requires, upper-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSymbols {
    pub provides: Vec<String>,
    pub requires: Vec<String>,
}

impl SourceSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_provided(&mut self, symbol: String) {
        if !self.provides.contains(&symbol) {
            self.provides.push(symbol);
        }
    }

    pub fn add_required(&mut self, symbol: String) {
        if !self.requires.contains(&symbol) {
            self.requires.push(symbol);
        }
    }
}
