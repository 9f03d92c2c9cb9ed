//! `luaplan plan` — resolve the build plan and emit it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use luaplan_core::{BuildConfig, OsFamily, PlatformFacts};
use luaplan_gen::{plan_to_json, render_plan};

/// Resolve the plan for the requested (or host) platform and write it out.
#[allow(clippy::too_many_arguments)]
pub fn run(
    cwd: &Path,
    platform: Option<&str>,
    configs: &[String],
    sub_project: bool,
    manifest: Option<&Path>,
    format: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let (catalog, _) = super::resolve_catalog(cwd, manifest)?;
    let facts = resolve_facts(platform, configs, sub_project)?;
    let plan = luaplan_gen::plan(&catalog, &facts);

    let rendered = match format.unwrap_or("human") {
        "human" => render_plan(&plan, &facts),
        "json" => plan_to_json(&plan)?,
        other => bail!("unknown format: '{other}' (expected 'human' or 'json')"),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            println!("Plan written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn resolve_facts(
    platform: Option<&str>,
    configs: &[String],
    sub_project: bool,
) -> Result<PlatformFacts> {
    let os = match platform {
        Some(name) => name.parse::<OsFamily>()?,
        None => OsFamily::host(),
    };

    let mut facts = PlatformFacts::new(os);
    if !configs.is_empty() {
        let parsed: Vec<BuildConfig> = configs
            .iter()
            .map(|name| name.parse())
            .collect::<luaplan_core::Result<_>>()?;
        facts = facts.with_configs(&parsed);
    }
    if sub_project {
        facts = facts.as_sub_project();
    }

    Ok(facts)
}
