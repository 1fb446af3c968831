use std::path::Path;

use super::{leading_tokens, SymbolExtractor};
use crate::types::SourceSymbols;

const INCLUDE_DIRECTIVE: &str = "#INCLUDE";

/// Include dialect: every `#include` is a requirement. An include whose name,
/// minus its extension, equals the including file's own stem is also provided
/// by that file, which links `foo.cpp` to `foo.h`. The directory part is kept,
/// so `time.c` never provides `<sys/time.h>`.
pub struct IncludeExtractor;

impl SymbolExtractor for IncludeExtractor {
    fn extract(&self, file_name: &str, content: &str) -> SourceSymbols {
        let mut symbols = SourceSymbols::new();
        let own_stem = file_stem(file_name).to_uppercase();

        for line in content.lines() {
            let Some((directive, Some(operand))) = leading_tokens(line) else {
                continue;
            };
            if !directive.eq_ignore_ascii_case(INCLUDE_DIRECTIVE) {
                continue;
            }

            let name = strip_delimiters(operand).to_uppercase();
            if name.is_empty() {
                continue;
            }

            if without_extension(&name) == own_stem {
                symbols.add_provided(name.clone());
            }
            symbols.add_required(name);
        }

        symbols
    }
}

fn strip_delimiters(operand: &str) -> String {
    operand
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '<' | '>'))
        .collect()
}

/// Drop the extension of the last path component, keeping any directories
fn without_extension(name: &str) -> &str {
    let base_start = name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match name[base_start..].rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..base_start + dot],
    }
}

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}
