//! Build-plan resolution for the lua embedding library.
//!
//! Turns a project [`Catalog`](luaplan_core::Catalog) plus
//! [`PlatformFacts`](luaplan_core::PlatformFacts) into an ordered
//! [`Plan`](luaplan_core::Plan) of build targets, and defines the boundary
//! to the external build-graph generator that consumes it.

pub mod builder;
pub mod error;
pub mod generator;
pub mod render;

pub use builder::plan;
pub use error::GenerateError;
pub use generator::{dispatch, plan_to_json, Generator};
pub use render::{render_plan, render_target};
