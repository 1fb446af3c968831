use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::ExtensionsConfig;
use crate::types::Dialect;

/// Source files under `root` whose extension maps to a dialect, sorted by
/// path. Honors .gitignore and skips hidden entries.
pub fn collect_sources(root: &Path, extensions: &ExtensionsConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if Dialect::from_path(entry.path(), extensions).is_some() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Expand command-line inputs: directories are scanned, anything else is
/// kept as given (even if it does not exist) so it can surface as an
/// unreadable file later.
pub fn expand_inputs(inputs: &[PathBuf], extensions: &ExtensionsConfig) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for file in collect_sources(input, extensions)? {
                paths.push(file.to_string_lossy().into_owned());
            }
        } else {
            paths.push(input.to_string_lossy().into_owned());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collects_known_extensions_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/sub")).unwrap();
        fs::write(dir.path().join("src/b.f90"), "").unwrap();
        fs::write(dir.path().join("src/a.c"), "").unwrap();
        fs::write(dir.path().join("src/sub/c.F90"), "").unwrap();
        fs::write(dir.path().join("src/readme.md"), "").unwrap();

        let files = collect_sources(dir.path(), &ExtensionsConfig::default()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["src/a.c", "src/b.f90", "src/sub/c.F90"]);
    }

    #[test]
    fn test_respects_gitignore() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
        fs::write(dir.path().join("build/gen.f90"), "").unwrap();
        fs::write(dir.path().join("main.f90"), "").unwrap();

        let files = collect_sources(dir.path(), &ExtensionsConfig::default()).unwrap();
        assert_eq!(files, vec![dir.path().join("main.f90")]);
    }

    #[test]
    fn test_expand_keeps_plain_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.f90"), "").unwrap();
        let missing = dir.path().join("missing.f90");

        let inputs = vec![missing.clone(), dir.path().to_path_buf()];
        let paths = expand_inputs(&inputs, &ExtensionsConfig::default()).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], missing.to_string_lossy());
    }
}
