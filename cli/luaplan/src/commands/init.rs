//! `luaplan init` — manifest scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use luaplan_core::{catalog_to_toml, Catalog, MANIFEST_NAME};

/// Write a `luaplan.toml` seeded with the reference catalog into `dir`.
///
/// `name`, when given, replaces the project name; the catalog contents stay
/// the reference ones and are meant to be edited afterwards.
pub fn run(dir: &Path, name: Option<&str>) -> Result<()> {
    let path = dir.join(MANIFEST_NAME);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    let mut catalog = Catalog::lua();
    if let Some(name) = name {
        catalog.project = name.to_string();
    }

    let manifest = catalog_to_toml(&catalog)?;
    fs::write(&path, manifest).with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    println!("Edit it to describe your project, then run 'luaplan' to resolve targets.");

    Ok(())
}
