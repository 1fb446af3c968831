use super::{leading_tokens, SymbolExtractor};
use crate::types::SourceSymbols;

const DECLARATION_KEYWORD: &str = "MODULE";
const USAGE_KEYWORD: &str = "USE";

/// Module dialect: `module <name>` provides, `use <name>[, only: ...]` requires
pub struct ModuleExtractor;

impl SymbolExtractor for ModuleExtractor {
    fn extract(&self, _file_name: &str, content: &str) -> SourceSymbols {
        let mut symbols = SourceSymbols::new();

        for line in content.lines() {
            let Some((keyword, Some(operand))) = leading_tokens(line) else {
                continue;
            };

            if keyword.eq_ignore_ascii_case(DECLARATION_KEYWORD) {
                symbols.add_provided(operand.to_uppercase());
            } else if keyword.eq_ignore_ascii_case(USAGE_KEYWORD) {
                let name = operand.split(',').next().unwrap_or(operand);
                if !name.is_empty() {
                    symbols.add_required(name.to_uppercase());
                }
            }
        }

        symbols
    }
}
