//! `luaplan platform` — per-platform link and packaging tables.

use anyhow::{anyhow, Result};
use luaplan_core::{Catalog, OsFamily};

/// List all recognized platforms with a one-line planning summary.
pub fn list() -> Result<()> {
    println!("Recognized platforms:");
    println!();
    for os in OsFamily::ALL {
        println!("  {:<10} {}", os.name(), summary(os));
    }
    println!();
    println!("Use 'luaplan platform describe <name>' for the full link tables.");
    Ok(())
}

/// Describe one platform's contribution tables in detail.
pub fn describe(name: &str) -> Result<()> {
    let os: OsFamily = name.parse().map_err(|_| {
        anyhow!("unknown platform: '{name}'. Use 'luaplan platform list' to see them all.")
    })?;

    println!("=== Platform: {os} ===");
    println!();
    println!(
        "  Tool binaries:  {}",
        if os.is_mobile() {
            "skipped (mobile)"
        } else {
            "planned for eligible configurations"
        }
    );
    println!(
        "  Test packaging: {}",
        if os.uses_fat_test_binary() {
            "one fat target bundling every case"
        } else {
            "aggregate binary plus one binary per case"
        }
    );
    println!();

    print_names("Extra libs", os.extra_libs());
    print_names("Graphics libs", os.graphics_libs());
    print_names("Graphics frameworks", os.graphics_frameworks());

    let resources = Catalog::lua().tests.resources(os);
    if !resources.is_empty() {
        println!("  Test bundle resources (reference catalog):");
        for resource in resources {
            println!("    {}", resource.display());
        }
    }

    Ok(())
}

fn summary(os: OsFamily) -> &'static str {
    match os {
        OsFamily::Windows | OsFamily::Macos | OsFamily::Linux => {
            "desktop: tools plus per-case test binaries"
        }
        OsFamily::Ios | OsFamily::Android => "mobile: no tools, one fat test target",
        OsFamily::Pnacl => "sandboxed web: per-case test binaries, no graphics",
        OsFamily::Other => "fallback: tools plus per-case test binaries, no platform extras",
    }
}

fn print_names(label: &str, names: &[&str]) {
    if names.is_empty() {
        println!("  {label}: none");
    } else {
        println!("  {label}: {}", names.join(", "));
    }
}
