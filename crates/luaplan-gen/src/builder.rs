//! Plan resolution: catalog + platform facts in, ordered target list out.
//!
//! This is the whole decision surface of the planner. Everything is pure
//! list building over immutable inputs; the two "failure" conditions
//! (sub-project build, no eligible tool configuration) simply produce
//! fewer targets.

use luaplan_core::{Catalog, OsFamily, Plan, PlatformFacts, Target, TargetKind};

/// Resolve the full build plan for one platform.
///
/// Target order is fixed: the library, then tools in catalog order, then
/// test targets (aggregate first on per-case platforms). Identical inputs
/// produce structurally identical plans.
pub fn plan(catalog: &Catalog, facts: &PlatformFacts) -> Plan {
    let mut targets = vec![library_target(catalog, facts)];

    // A nested build contributes its library to the consuming project's
    // plan and nothing else.
    if !facts.sub_project {
        targets.extend(tool_targets(catalog, facts));
        targets.extend(test_targets(catalog, facts));
    }

    Plan {
        project: catalog.project.clone(),
        variables: catalog.variables.clone(),
        targets,
    }
}

/// The library target, built for every available configuration on every
/// platform.
fn library_target(catalog: &Catalog, facts: &PlatformFacts) -> Target {
    let mut target = Target::new(
        TargetKind::Library,
        &catalog.library.name,
        &catalog.library.name,
    );
    target.sources = catalog.library.source_paths();
    target.configs = facts.configs.clone();
    target
}

/// One binary per catalog tool. Mobile platforms and toolchains without an
/// eligible configuration get none.
fn tool_targets(catalog: &Catalog, facts: &PlatformFacts) -> Vec<Target> {
    if facts.os.is_mobile() {
        return Vec::new();
    }
    let configs = facts.tool_configs();
    if configs.is_empty() {
        return Vec::new();
    }

    catalog
        .tools
        .iter()
        .map(|tool| {
            let mut target = Target::new(TargetKind::Binary, &tool.name, "tools");
            target.sources = vec![tool.source_path()];
            target.implicit_deps = vec![catalog.library.name.clone()];
            target.depend_libs = catalog.library.depend_libs.clone();
            let mut libs = vec![catalog.library.name.clone(), tool.runtime_lib.clone()];
            libs.extend(owned(facts.os.extra_libs()));
            target.libs = libs;
            target.variables = tool.variables.clone();
            target.configs = configs.clone();
            target
        })
        .collect()
}

/// Test targets: one fat app bundling the whole suite on mobile, otherwise
/// an aggregate driver binary plus one binary per case.
fn test_targets(catalog: &Catalog, facts: &PlatformFacts) -> Vec<Target> {
    if facts.os.uses_fat_test_binary() {
        return vec![fat_test_target(catalog, facts)];
    }

    let mut targets = vec![aggregate_test_target(catalog, facts)];
    targets.extend(
        catalog
            .tests
            .cases
            .iter()
            .map(|case| case_test_target(catalog, facts, case)),
    );
    targets
}

/// One target bundling every case entry, the aggregate entry, platform
/// glue, and the platform's bundle resources.
fn fat_test_target(catalog: &Catalog, facts: &PlatformFacts) -> Target {
    let tests = &catalog.tests;
    // The sandboxed web target takes a plain binary; everything else on
    // the fat path ships as a packaged app.
    let kind = if facts.os == OsFamily::Pnacl {
        TargetKind::Binary
    } else {
        TargetKind::App
    };

    let mut target = Target::new(kind, format!("test-{}", tests.aggregate), "test");
    target.sources = tests
        .cases
        .iter()
        .map(|case| tests.case_source(case))
        .collect();
    target.sources.push(tests.case_source(&tests.aggregate));
    target.extra_sources = tests.glue_sources(facts.os);
    target.implicit_deps = vec![catalog.library.name.clone()];

    let mut libs = vec![
        tests.support_lib.clone(),
        catalog.library.name.clone(),
        tests.runtime_lib.clone(),
    ];
    libs.extend(catalog.library.depend_libs.iter().cloned());
    libs.extend(owned(facts.os.extra_libs()));
    libs.extend(owned(facts.os.graphics_libs()));
    target.libs = libs;

    target.frameworks = owned(facts.os.graphics_frameworks());
    target.resources = tests.resources(facts.os);
    target.include_paths = facts.test_include_paths.clone();
    target.configs = facts.configs.clone();
    target
}

/// The combined driver binary on per-case platforms. Links the library
/// stack only; no test support, runtime, or graphics.
fn aggregate_test_target(catalog: &Catalog, facts: &PlatformFacts) -> Target {
    let tests = &catalog.tests;
    let mut target = Target::new(
        TargetKind::Binary,
        format!("test-{}", tests.aggregate),
        "test",
    );
    target.sources = vec![tests.case_source(&tests.aggregate)];
    target.implicit_deps = vec![catalog.library.name.clone()];

    let mut libs = vec![catalog.library.name.clone()];
    libs.extend(catalog.library.depend_libs.iter().cloned());
    libs.extend(owned(facts.os.extra_libs()));
    target.libs = libs;

    target.include_paths = facts.test_include_paths.clone();
    target.configs = facts.configs.clone();
    target
}

/// One binary for a single test case, linking the full test stack.
fn case_test_target(catalog: &Catalog, facts: &PlatformFacts, case: &str) -> Target {
    let tests = &catalog.tests;
    let mut target = Target::new(TargetKind::Binary, format!("test-{case}"), "test");
    target.sources = vec![tests.case_source(case)];
    target.implicit_deps = vec![catalog.library.name.clone()];

    let mut libs = vec![
        tests.support_lib.clone(),
        catalog.library.name.clone(),
        tests.runtime_lib.clone(),
    ];
    libs.extend(catalog.library.depend_libs.iter().cloned());
    libs.extend(owned(facts.os.extra_libs()));
    libs.extend(owned(facts.os.graphics_libs()));
    target.libs = libs;

    target.frameworks = owned(facts.os.graphics_frameworks());
    target.include_paths = facts.test_include_paths.clone();
    target.configs = facts.configs.clone();
    target
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
