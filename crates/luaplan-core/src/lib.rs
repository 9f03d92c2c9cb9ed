//! Core data model for the lua build planner.
//!
//! Resolves which build targets a lua embedding project produces on a given
//! platform: the library, command-line tools, and test binaries, together
//! with their sources, link lines, frameworks, and resources.
//!
//! The model is split into:
//! - **Catalog:** what the project contains (modules, tools, test cases)
//! - **Platform facts:** where and how it is being built
//! - **Targets:** the resolved records handed to a build-graph generator

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod target;

pub use catalog::{Catalog, Module, TestSuite, Tool};
pub use error::{PlanError, Result};
pub use manifest::{
    catalog_to_toml, find_and_load, load_catalog, parse_catalog, template, validate_catalog,
    ValidationIssue, MANIFEST_NAME,
};
pub use platform::{BuildConfig, OsFamily, PlatformFacts};
pub use target::{Plan, Target, TargetKind, VariableValue};
