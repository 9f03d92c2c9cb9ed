//! `luaplan catalog` — show the resolved project catalog.

use std::path::Path;

use anyhow::Result;

/// Print the catalog a plan invocation from `cwd` would use.
pub fn run(cwd: &Path, manifest: Option<&Path>) -> Result<()> {
    let (catalog, source) = super::resolve_catalog(cwd, manifest)?;

    match &source {
        Some(path) => println!("=== Catalog: {} ({}) ===", catalog.project, path.display()),
        None => println!("=== Catalog: {} (built-in) ===", catalog.project),
    }
    println!();

    println!("--- Library: {} ---", catalog.library.name);
    println!("  {} sources", catalog.library.sources.len());
    if !catalog.library.depend_libs.is_empty() {
        println!("  Depends on: {}", catalog.library.depend_libs.join(", "));
    }
    println!();

    println!("--- Tools ({}) ---", catalog.tools.len());
    for tool in &catalog.tools {
        println!(
            "  {:<16} {} [runtime: {}]",
            tool.name, tool.description, tool.runtime_lib
        );
    }
    println!();

    println!("--- Test cases ({}) ---", catalog.tests.cases.len());
    for case in &catalog.tests.cases {
        println!("  test-{case}");
    }
    println!("  test-{} (aggregate)", catalog.tests.aggregate);

    if !catalog.variables.is_empty() {
        println!();
        println!("--- Variables ---");
        for (name, value) in &catalog.variables {
            println!("  {name} = {value}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luaplan_core::MANIFEST_NAME;

    #[test]
    fn prints_the_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), None).is_ok());
    }

    #[test]
    fn prints_a_manifest_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_NAME);
        std::fs::write(&path, luaplan_core::template().unwrap()).unwrap();
        assert!(run(dir.path(), Some(&path)).is_ok());
    }
}
