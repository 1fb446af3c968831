mod cfamily;
mod fortran;

pub use cfamily::IncludeExtractor;
pub use fortran::ModuleExtractor;

use crate::types::{Dialect, SourceSymbols};

/// Scans decoded source text for the symbols a file provides and requires.
///
/// Implementations look only at the first two whitespace-separated tokens of
/// each line, so the result is a pure function of the text and file name.
pub trait SymbolExtractor {
    fn extract(&self, file_name: &str, content: &str) -> SourceSymbols;
}

pub fn extractor_for(dialect: Dialect) -> &'static dyn SymbolExtractor {
    match dialect {
        Dialect::Module => &ModuleExtractor,
        Dialect::Include => &IncludeExtractor,
    }
}

/// First and second whitespace-separated tokens of a line, if present
fn leading_tokens(line: &str) -> Option<(&str, Option<&str>)> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    Some((first, tokens.next()))
}
