//! Human-readable plan rendering.
//!
//! Pure string building; the CLI decides where the output goes.

use luaplan_core::{BuildConfig, Plan, PlatformFacts, Target};

/// Render a plan header plus a one-line-per-target overview.
pub fn render_plan(plan: &Plan, facts: &PlatformFacts) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Plan: {} ({}) ===", plan.project, facts.os));
    lines.push(String::new());
    lines.push(format!("Configurations: {}", config_list(&facts.configs)));
    if facts.sub_project {
        lines.push("Sub-project build: library only, nothing further to do".to_string());
    }
    if !plan.variables.is_empty() {
        lines.push("Variables:".to_string());
        for (name, value) in &plan.variables {
            lines.push(format!("  {name} = {value}"));
        }
    }
    lines.push(String::new());

    lines.push(format!("--- Targets ({}) ---", plan.targets.len()));
    for target in &plan.targets {
        lines.push(format!(
            "  {:<8} {:<24} {}",
            target.kind.name(),
            target.name,
            summarize(target),
        ));
    }

    lines.join("\n") + "\n"
}

/// Render one target in full detail.
pub fn render_target(target: &Target) -> String {
    let mut lines = Vec::new();

    lines.push(format!("--- {}: {} ---", target.kind.name(), target.name));
    lines.push(format!("  Base path:      {}", target.base_path.display()));
    lines.push(format!(
        "  Configurations: {}",
        config_list(&target.configs)
    ));
    lines.push("  Sources:".to_string());
    for source in target.all_sources() {
        lines.push(format!("    {}", source.display()));
    }
    if !target.implicit_deps.is_empty() {
        lines.push(format!(
            "  Implicit deps:  {}",
            target.implicit_deps.join(", ")
        ));
    }
    if !target.depend_libs.is_empty() {
        lines.push(format!("  Depend libs:    {}", target.depend_libs.join(", ")));
    }
    if !target.libs.is_empty() {
        lines.push(format!("  Libs:           {}", target.libs.join(", ")));
    }
    if !target.frameworks.is_empty() {
        lines.push(format!("  Frameworks:     {}", target.frameworks.join(", ")));
    }
    if !target.resources.is_empty() {
        lines.push("  Resources:".to_string());
        for resource in &target.resources {
            lines.push(format!("    {}", resource.display()));
        }
    }
    if !target.include_paths.is_empty() {
        let paths: Vec<String> = target
            .include_paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        lines.push(format!("  Include paths:  {}", paths.join(", ")));
    }
    if !target.variables.is_empty() {
        lines.push("  Variables:".to_string());
        for (name, value) in &target.variables {
            lines.push(format!("    {name} = {value}"));
        }
    }

    lines.join("\n") + "\n"
}

fn config_list(configs: &[BuildConfig]) -> String {
    configs
        .iter()
        .map(|config| config.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize(target: &Target) -> String {
    let mut parts = vec![format!("{} sources", target.all_sources().count())];
    if !target.libs.is_empty() {
        parts.push(format!("{} libs", target.libs.len()));
    }
    if !target.frameworks.is_empty() {
        parts.push(format!("{} frameworks", target.frameworks.len()));
    }
    if !target.resources.is_empty() {
        parts.push(format!("{} resources", target.resources.len()));
    }
    parts.join(", ")
}
