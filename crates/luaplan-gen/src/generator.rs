//! The external build-graph generator boundary.
//!
//! The planner never writes build files itself. In-process generators
//! implement [`Generator`] and receive the plan target by target via
//! [`dispatch`]; out-of-process generators consume the JSON form from
//! [`plan_to_json`].

use luaplan_core::{Plan, Target, TargetKind};

use crate::error::GenerateError;

/// Surface of an external build-graph generator.
///
/// One method per target kind, each receiving the complete target record:
/// name, base path, sources, implicit dependencies, dependency libraries,
/// linked libraries, frameworks, resources, include paths, variables, and
/// the configuration subset.
pub trait Generator {
    /// Define a static library target.
    fn define_library(&mut self, target: &Target) -> Result<(), GenerateError>;

    /// Define an executable target.
    fn define_binary(&mut self, target: &Target) -> Result<(), GenerateError>;

    /// Define a packaged application target.
    fn define_app(&mut self, target: &Target) -> Result<(), GenerateError>;
}

/// Hand every target of `plan` to `generator`, in plan order.
///
/// Stops at the first error; targets already defined stay defined.
pub fn dispatch(plan: &Plan, generator: &mut dyn Generator) -> Result<(), GenerateError> {
    for target in &plan.targets {
        match target.kind {
            TargetKind::Library => generator.define_library(target)?,
            TargetKind::Binary => generator.define_binary(target)?,
            TargetKind::App => generator.define_app(target)?,
        }
    }
    Ok(())
}

/// Serialize a plan for an out-of-process generator.
pub fn plan_to_json(plan: &Plan) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luaplan_core::{Catalog, OsFamily, PlatformFacts};

    use crate::builder::plan;

    #[derive(Default)]
    struct RecordingGenerator {
        defined: Vec<(TargetKind, String)>,
        reject_binaries: bool,
    }

    impl RecordingGenerator {
        fn record(
            &mut self,
            kind: TargetKind,
            target: &Target,
        ) -> Result<(), GenerateError> {
            if self.reject_binaries && kind == TargetKind::Binary {
                return Err(GenerateError::Rejected {
                    target: target.name.clone(),
                    detail: "binaries unsupported".to_string(),
                });
            }
            self.defined.push((kind, target.name.clone()));
            Ok(())
        }
    }

    impl Generator for RecordingGenerator {
        fn define_library(&mut self, target: &Target) -> Result<(), GenerateError> {
            self.record(TargetKind::Library, target)
        }

        fn define_binary(&mut self, target: &Target) -> Result<(), GenerateError> {
            self.record(TargetKind::Binary, target)
        }

        fn define_app(&mut self, target: &Target) -> Result<(), GenerateError> {
            self.record(TargetKind::App, target)
        }
    }

    #[test]
    fn dispatch_walks_in_plan_order() {
        let plan = plan(&Catalog::lua(), &PlatformFacts::new(OsFamily::Linux));
        let mut generator = RecordingGenerator::default();
        dispatch(&plan, &mut generator).unwrap();

        assert_eq!(generator.defined.len(), 13);
        assert_eq!(
            generator.defined[0],
            (TargetKind::Library, "lua".to_string())
        );
        assert_eq!(generator.defined[1], (TargetKind::Binary, "lua".to_string()));
        assert_eq!(
            generator.defined[12],
            (TargetKind::Binary, "test-window".to_string())
        );
    }

    #[test]
    fn mobile_plans_dispatch_one_app() {
        let plan = plan(&Catalog::lua(), &PlatformFacts::new(OsFamily::Android));
        let mut generator = RecordingGenerator::default();
        dispatch(&plan, &mut generator).unwrap();

        assert_eq!(generator.defined.len(), 2);
        assert_eq!(
            generator.defined[1],
            (TargetKind::App, "test-all".to_string())
        );
    }

    #[test]
    fn dispatch_stops_at_the_first_rejection() {
        let plan = plan(&Catalog::lua(), &PlatformFacts::new(OsFamily::Linux));
        let mut generator = RecordingGenerator {
            reject_binaries: true,
            ..Default::default()
        };

        let err = dispatch(&plan, &mut generator).unwrap_err();
        assert!(matches!(err, GenerateError::Rejected { target, .. } if target == "lua"));
        assert_eq!(generator.defined.len(), 1);
    }

    #[test]
    fn json_hand_off_round_trips() {
        let plan = plan(&Catalog::lua(), &PlatformFacts::new(OsFamily::Ios));
        let json = plan_to_json(&plan).unwrap();
        let parsed: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
