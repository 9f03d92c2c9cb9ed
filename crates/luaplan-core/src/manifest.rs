//! `luaplan.toml` — loading, validation, and templating of project catalogs.
//!
//! The manifest is the on-disk form of a [`Catalog`]. Projects embedding a
//! different module/tool/test layout describe it here; when no manifest
//! exists the built-in lua catalog is used instead.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{PlanError, Result};

/// Manifest file name searched for by [`find_and_load`].
pub const MANIFEST_NAME: &str = "luaplan.toml";

/// A validation issue found in a catalog.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a catalog from a `luaplan.toml` file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(PlanError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a catalog from a TOML string.
pub fn parse_catalog(toml_str: &str) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(toml_str)?;
    Ok(catalog)
}

/// Serialize a catalog to pretty TOML.
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String> {
    let toml_str = toml::to_string_pretty(catalog)?;
    Ok(toml_str)
}

/// The manifest template written by `luaplan init`: the lua catalog.
pub fn template() -> Result<String> {
    catalog_to_toml(&Catalog::lua())
}

/// Search upward from `start_dir` for a manifest, parse and return it along
/// with the directory it was found in.
pub fn find_and_load(start_dir: &Path) -> Result<Option<(Catalog, PathBuf)>> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(MANIFEST_NAME);
        if candidate.is_file() {
            let catalog = load_catalog(&candidate)?;
            return Ok(Some((catalog, dir)));
        }
        if !dir.pop() {
            break;
        }
    }
    Ok(None)
}

/// Validate a catalog for structural correctness.
///
/// Returns `Ok(())` if clean, or `Err(issues)` with a list of problems;
/// callers decide whether warnings block.
pub fn validate_catalog(catalog: &Catalog) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if catalog.project.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: "project name is empty".into(),
        });
    }

    if catalog.library.sources.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!("library module '{}' has no sources", catalog.library.name),
        });
    }

    for (index, tool) in catalog.tools.iter().enumerate() {
        if catalog.tools[..index].iter().any(|t| t.name == tool.name) {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("duplicate tool name '{}'", tool.name),
            });
        }
        if tool.source_dir.is_empty() {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("tool '{}' has an empty source-dir", tool.name),
            });
        }
        if tool.runtime_lib.is_empty() {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("tool '{}' has an empty runtime-lib", tool.name),
            });
        }
    }

    for (index, case) in catalog.tests.cases.iter().enumerate() {
        if catalog.tests.cases[..index].contains(case) {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("duplicate test case '{case}'"),
            });
        }
    }

    if catalog.tests.cases.contains(&catalog.tests.aggregate) {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "aggregate entry '{}' collides with a test case name",
                catalog.tests.aggregate
            ),
        });
    }

    if catalog.tests.cases.is_empty() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "test suite has no cases; only the aggregate binary will be planned".into(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_to_the_lua_catalog() {
        let toml_str = template().unwrap();
        let parsed = parse_catalog(&toml_str).unwrap();
        assert_eq!(parsed, Catalog::lua());
        assert!(validate_catalog(&parsed).is_ok());
    }

    #[test]
    fn parse_minimal_manifest() {
        let toml_str = r#"
project = "mini"

[library]
name = "mini"
sources = ["mini.c"]
"#;
        let catalog = parse_catalog(toml_str).unwrap();
        assert_eq!(catalog.project, "mini");
        assert!(catalog.tools.is_empty());
        assert!(catalog.library.depend_libs.is_empty());
        assert_eq!(catalog.tests.aggregate, "all");
        assert_eq!(catalog.tests.support_lib, "test");
        assert_eq!(catalog.tests.runtime_lib, "luajit");
    }

    #[test]
    fn parse_manifest_with_variables() {
        let toml_str = r#"
project = "mini"

[variables]
bundleidentifier = "com.example.mini.$(binname)"

[library]
name = "mini"
sources = ["mini.c"]

[[tools]]
name = "minic"
source-dir = "minic"
runtime-lib = "minivm"

[tools.variables]
support_mini = true
"#;
        let catalog = parse_catalog(toml_str).unwrap();
        assert_eq!(catalog.tools.len(), 1);
        let tool = &catalog.tools[0];
        assert_eq!(tool.runtime_lib, "minivm");
        assert!(matches!(
            tool.variables.get("support_mini"),
            Some(crate::target::VariableValue::Bool(true))
        ));
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_catalog("this is not valid toml [[[").is_err());
    }

    #[test]
    fn parse_missing_library_returns_error() {
        assert!(parse_catalog("project = \"incomplete\"\n").is_err());
    }

    #[test]
    fn validate_duplicate_tool_names() {
        let mut catalog = Catalog::lua();
        let copy = catalog.tools[0].clone();
        catalog.tools.push(copy);
        let issues = validate_catalog(&catalog).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("duplicate tool")));
    }

    #[test]
    fn validate_duplicate_test_cases() {
        let mut catalog = Catalog::lua();
        catalog.tests.cases.push("bind".to_string());
        let issues = validate_catalog(&catalog).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.message.contains("duplicate test case")));
    }

    #[test]
    fn validate_aggregate_collision() {
        let mut catalog = Catalog::lua();
        catalog.tests.aggregate = "bind".to_string();
        let issues = validate_catalog(&catalog).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("collides")));
    }

    #[test]
    fn validate_empty_library() {
        let mut catalog = Catalog::lua();
        catalog.library.sources.clear();
        let issues = validate_catalog(&catalog).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("no sources")));
    }

    #[test]
    fn validate_no_cases_is_a_warning() {
        let mut catalog = Catalog::lua();
        catalog.tests.cases.clear();
        let issues = validate_catalog(&catalog).unwrap_err();
        assert!(issues.iter().all(|i| i.severity == "warning"));
    }

    #[test]
    fn load_not_found() {
        let result = load_catalog(Path::new("/nonexistent/luaplan.toml"));
        assert!(matches!(
            result.unwrap_err(),
            PlanError::ManifestNotFound { .. }
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        std::fs::write(&path, template().unwrap()).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.project, "lua");
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_NAME), template().unwrap()).unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (catalog, found_dir) = find_and_load(&nested).unwrap().unwrap();
        assert_eq!(catalog.project, "lua");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("empty");
        std::fs::create_dir_all(&nested).unwrap();

        // The walk can only find a manifest if one exists above the temp
        // root, which test machines do not have.
        let result = find_and_load(&nested).unwrap();
        assert!(result.is_none());
    }
}
