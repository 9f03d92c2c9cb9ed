//! Target records — the output vocabulary of the plan builder.
//!
//! A [`Plan`] is an ordered list of [`Target`] records plus project-level
//! variables. Each record maps 1:1 onto one `define_*` call of the external
//! build-graph generator; nothing here is executed locally.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::BuildConfig;

/// The kind of build output a target requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Static library produced from a module's sources.
    Library,
    /// Command-line executable.
    Binary,
    /// Packaged application bundle (mobile test builds).
    App,
}

impl TargetKind {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Library => "library",
            TargetKind::Binary => "binary",
            TargetKind::App => "app",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a build variable passed through to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Boolean flag (e.g. `support_lua = true`).
    Bool(bool),
    /// Free-form text, possibly containing generator substitutions
    /// (e.g. `com.rampantpixels.lua.$(binname)`).
    Text(String),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Bool(value) => write!(f, "{value}"),
            VariableValue::Text(value) => f.write_str(value),
        }
    }
}

/// A single requested build output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    /// What the generator should produce.
    pub kind: TargetKind,
    /// Output name (library or binary name).
    pub name: String,
    /// Directory the target's sources live under.
    pub base_path: PathBuf,
    /// Ordered source files, relative to the project root.
    pub sources: Vec<PathBuf>,
    /// Platform glue sources compiled after `sources` (bootstrap/activity
    /// files on mobile).
    pub extra_sources: Vec<PathBuf>,
    /// Names of targets that must be built before this one.
    pub implicit_deps: Vec<String>,
    /// Dependency libraries of the embedding library itself.
    pub depend_libs: Vec<String>,
    /// Libraries passed to the linker.
    pub libs: Vec<String>,
    /// OS frameworks passed to the linker (macos/ios).
    pub frameworks: Vec<String>,
    /// Resource files bundled with the output (mobile manifests/assets).
    pub resources: Vec<PathBuf>,
    /// Additional include paths.
    pub include_paths: Vec<PathBuf>,
    /// Per-target build variables; the generator scopes them per
    /// configuration.
    pub variables: BTreeMap<String, VariableValue>,
    /// The build configurations this target applies to — always a subset
    /// of the facts' available configurations.
    pub configs: Vec<BuildConfig>,
}

impl Target {
    /// An empty record of the given kind; the plan builder fills in the rest.
    pub fn new(kind: TargetKind, name: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Target {
            kind,
            name: name.into(),
            base_path: base_path.into(),
            sources: Vec::new(),
            extra_sources: Vec::new(),
            implicit_deps: Vec::new(),
            depend_libs: Vec::new(),
            libs: Vec::new(),
            frameworks: Vec::new(),
            resources: Vec::new(),
            include_paths: Vec::new(),
            variables: BTreeMap::new(),
            configs: Vec::new(),
        }
    }

    /// All compiled sources in generator order: `sources`, then
    /// `extra_sources`.
    pub fn all_sources(&self) -> impl Iterator<Item = &PathBuf> {
        self.sources.iter().chain(self.extra_sources.iter())
    }

    /// Whether the linker line includes `lib`.
    pub fn links(&self, lib: &str) -> bool {
        self.libs.iter().any(|l| l == lib)
    }
}

/// The complete ordered plan handed to the external generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Plan {
    /// Project name (also the library target's name).
    pub project: String,
    /// Project-level variables applied by the generator to every target
    /// (e.g. the bundle identifier pattern).
    pub variables: BTreeMap<String, VariableValue>,
    /// Targets in generation order.
    pub targets: Vec<Target>,
}

impl Plan {
    /// Find a target by kind and name.
    pub fn find(&self, kind: TargetKind, name: &str) -> Option<&Target> {
        self.targets
            .iter()
            .find(|target| target.kind == kind && target.name == name)
    }

    /// All targets of one kind, in plan order.
    pub fn of_kind(&self, kind: TargetKind) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(move |target| target.kind == kind)
    }

    /// All test targets (aggregate and per-case), in plan order.
    pub fn test_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets
            .iter()
            .filter(|target| target.base_path == PathBuf::from("test"))
    }
}
