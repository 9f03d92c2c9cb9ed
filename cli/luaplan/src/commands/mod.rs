//! CLI command implementations.

pub mod catalog;
pub mod init;
pub mod plan;
pub mod platform;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use luaplan_core::{find_and_load, load_catalog, validate_catalog, Catalog, MANIFEST_NAME};

/// Resolve the project catalog for a command.
///
/// An explicit manifest path must exist; otherwise the manifest is searched
/// upward from `cwd`, falling back to the built-in lua catalog. Returns the
/// manifest path the catalog came from, or `None` for the built-in one.
pub(crate) fn resolve_catalog(
    cwd: &Path,
    manifest: Option<&Path>,
) -> Result<(Catalog, Option<PathBuf>)> {
    let (catalog, source) = match manifest {
        Some(path) => (load_catalog(path)?, Some(path.to_path_buf())),
        None => match find_and_load(cwd)? {
            Some((catalog, dir)) => (catalog, Some(dir.join(MANIFEST_NAME))),
            None => (Catalog::lua(), None),
        },
    };

    if let Err(issues) = validate_catalog(&catalog) {
        let mut errors = Vec::new();
        for issue in &issues {
            if issue.severity == "error" {
                errors.push(issue.message.clone());
            } else {
                eprintln!("warning: {}", issue.message);
            }
        }
        if !errors.is_empty() {
            bail!("invalid catalog:\n  {}", errors.join("\n  "));
        }
    }

    Ok((catalog, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, source) = resolve_catalog(dir.path(), None).unwrap();
        assert_eq!(catalog, Catalog::lua());
        assert!(source.is_none());
    }

    #[test]
    fn loads_an_explicit_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        std::fs::write(&path, luaplan_core::template().unwrap()).unwrap();

        let (catalog, source) = resolve_catalog(dir.path(), Some(&path)).unwrap();
        assert_eq!(catalog.project, "lua");
        assert_eq!(source, Some(path));
    }

    #[test]
    fn rejects_a_catalog_with_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        let manifest = r#"
project = ""

[library]
name = "broken"
sources = ["a.c"]
"#;
        std::fs::write(&path, manifest).unwrap();

        let result = resolve_catalog(dir.path(), Some(&path));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid catalog"));
    }

    #[test]
    fn warnings_do_not_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        // No test cases: warning only.
        let manifest = r#"
project = "warned"

[library]
name = "warned"
sources = ["a.c"]

[tests]
cases = []
"#;
        std::fs::write(&path, manifest).unwrap();

        let (catalog, _) = resolve_catalog(dir.path(), Some(&path)).unwrap();
        assert!(catalog.tests.cases.is_empty());
    }
}
