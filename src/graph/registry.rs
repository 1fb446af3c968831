use std::collections::HashMap;

/// Maps provided symbols (upper-cased) to the file that provides them.
/// Scoped to one ordering run.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    providers: HashMap<String, String>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `symbol` to `path`. The latest provider wins; if a different file
    /// held the symbol before, that file is returned.
    pub fn register(&mut self, symbol: &str, path: &str) -> Option<String> {
        let previous = self
            .providers
            .insert(symbol.to_uppercase(), path.to_string())?;
        (previous != path).then_some(previous)
    }

    pub fn provider(&self, symbol: &str) -> Option<&str> {
        self.providers.get(&symbol.to_uppercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = SymbolRegistry::new();
        assert_eq!(registry.register("solver", "solver.f90"), None);
        assert_eq!(registry.provider("SOLVER"), Some("solver.f90"));
        assert_eq!(registry.provider("Solver"), Some("solver.f90"));
        assert_eq!(registry.provider("grid"), None);
    }

    #[test]
    fn test_later_provider_wins() {
        let mut registry = SymbolRegistry::new();
        registry.register("KINDS", "a.f90");
        let displaced = registry.register("KINDS", "b.f90");
        assert_eq!(displaced, Some("a.f90".to_string()));
        assert_eq!(registry.provider("KINDS"), Some("b.f90"));
    }

    #[test]
    fn test_same_file_reregistering_is_not_a_collision() {
        let mut registry = SymbolRegistry::new();
        registry.register("KINDS", "a.f90");
        assert_eq!(registry.register("kinds", "a.f90"), None);
    }
}
