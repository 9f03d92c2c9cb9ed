//! Platform facts describing the current build.
//!
//! Every plan is a pure function of these facts: the OS family decides which
//! target categories exist and what they link against, the sub-project flag
//! suppresses everything but the library, and the available configurations
//! bound the configuration subset of every produced target.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Operating system family of the build target.
///
/// A closed set: adding a platform is a compile-time decision, and every
/// per-platform table below matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsFamily {
    Windows,
    Macos,
    Ios,
    Linux,
    Android,
    /// Portable Native Client — the sandboxed-web variant.
    Pnacl,
    Other,
}

impl OsFamily {
    /// All recognized families, in display order.
    pub const ALL: [OsFamily; 7] = [
        OsFamily::Windows,
        OsFamily::Macos,
        OsFamily::Ios,
        OsFamily::Linux,
        OsFamily::Android,
        OsFamily::Pnacl,
        OsFamily::Other,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Macos => "macos",
            OsFamily::Ios => "ios",
            OsFamily::Linux => "linux",
            OsFamily::Android => "android",
            OsFamily::Pnacl => "pnacl",
            OsFamily::Other => "other",
        }
    }

    /// The family of the machine this planner is running on.
    ///
    /// Mobile and sandboxed families are never detected here; they are
    /// requested explicitly when cross-planning.
    pub fn host() -> OsFamily {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::Macos
        } else if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else {
            OsFamily::Other
        }
    }

    /// Whether this is a mobile family. Mobile builds ship no command-line
    /// tools.
    pub fn is_mobile(self) -> bool {
        match self {
            OsFamily::Ios | OsFamily::Android => true,
            OsFamily::Windows
            | OsFamily::Macos
            | OsFamily::Linux
            | OsFamily::Pnacl
            | OsFamily::Other => false,
        }
    }

    /// Whether test cases collapse into a single fat binary on this family.
    pub fn uses_fat_test_binary(self) -> bool {
        match self {
            OsFamily::Ios | OsFamily::Android => true,
            OsFamily::Windows
            | OsFamily::Macos
            | OsFamily::Linux
            | OsFamily::Pnacl
            | OsFamily::Other => false,
        }
    }

    /// Extra system libraries linked into every binary on this family.
    pub fn extra_libs(self) -> &'static [&'static str] {
        match self {
            OsFamily::Windows => &["ws2_32", "iphlpapi"],
            OsFamily::Macos
            | OsFamily::Ios
            | OsFamily::Linux
            | OsFamily::Android
            | OsFamily::Pnacl
            | OsFamily::Other => &[],
        }
    }

    /// System libraries required for rendering output.
    pub fn graphics_libs(self) -> &'static [&'static str] {
        match self {
            OsFamily::Windows => &["opengl32", "gdi32"],
            OsFamily::Linux => &["GL", "Xxf86vm", "Xext", "X11"],
            OsFamily::Macos
            | OsFamily::Ios
            | OsFamily::Android
            | OsFamily::Pnacl
            | OsFamily::Other => &[],
        }
    }

    /// OS frameworks required for rendering output.
    pub fn graphics_frameworks(self) -> &'static [&'static str] {
        match self {
            OsFamily::Macos => &["OpenGL"],
            OsFamily::Ios => &["QuartzCore", "OpenGLES"],
            OsFamily::Windows
            | OsFamily::Linux
            | OsFamily::Android
            | OsFamily::Pnacl
            | OsFamily::Other => &[],
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsFamily {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(OsFamily::Windows),
            "macos" => Ok(OsFamily::Macos),
            "ios" => Ok(OsFamily::Ios),
            "linux" => Ok(OsFamily::Linux),
            "android" => Ok(OsFamily::Android),
            "pnacl" => Ok(OsFamily::Pnacl),
            "other" => Ok(OsFamily::Other),
            _ => Err(PlanError::UnknownPlatform { name: s.to_string() }),
        }
    }
}

/// A build configuration offered by the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildConfig {
    Debug,
    Release,
    Profile,
    Deploy,
}

impl BuildConfig {
    /// The full configuration set of the reference toolchain.
    pub const ALL: [BuildConfig; 4] = [
        BuildConfig::Debug,
        BuildConfig::Release,
        BuildConfig::Profile,
        BuildConfig::Deploy,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            BuildConfig::Debug => "debug",
            BuildConfig::Release => "release",
            BuildConfig::Profile => "profile",
            BuildConfig::Deploy => "deploy",
        }
    }

    /// Whether command-line tools are built in this configuration.
    ///
    /// Profile and deploy builds ship only the library and test artifacts.
    pub fn suitable_for_tools(self) -> bool {
        match self {
            BuildConfig::Debug | BuildConfig::Release => true,
            BuildConfig::Profile | BuildConfig::Deploy => false,
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildConfig {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildConfig::Debug),
            "release" => Ok(BuildConfig::Release),
            "profile" => Ok(BuildConfig::Profile),
            "deploy" => Ok(BuildConfig::Deploy),
            _ => Err(PlanError::UnknownConfig { name: s.to_string() }),
        }
    }
}

/// Immutable facts about the current build invocation.
///
/// Constructed once per invocation and handed to the plan builder; the
/// builder never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformFacts {
    /// OS family being planned for.
    pub os: OsFamily,
    /// Whether this build is nested inside a consuming project.
    pub sub_project: bool,
    /// Build configurations offered by the toolchain, in toolchain order.
    pub configs: Vec<BuildConfig>,
    /// Include paths the generator exposes to test binaries.
    pub test_include_paths: Vec<PathBuf>,
}

impl PlatformFacts {
    /// Facts for a standalone build with the full configuration set.
    pub fn new(os: OsFamily) -> Self {
        PlatformFacts {
            os,
            sub_project: false,
            configs: BuildConfig::ALL.to_vec(),
            test_include_paths: vec![PathBuf::from("test")],
        }
    }

    /// Replace the available configurations, dropping duplicates while
    /// keeping the first occurrence's position.
    pub fn with_configs(mut self, configs: &[BuildConfig]) -> Self {
        let mut deduped: Vec<BuildConfig> = Vec::with_capacity(configs.len());
        for config in configs {
            if !deduped.contains(config) {
                deduped.push(*config);
            }
        }
        self.configs = deduped;
        self
    }

    /// Mark this invocation as a sub-project build.
    pub fn as_sub_project(mut self) -> Self {
        self.sub_project = true;
        self
    }

    /// The configuration subset tool binaries are built for.
    pub fn tool_configs(&self) -> Vec<BuildConfig> {
        self.configs
            .iter()
            .copied()
            .filter(|config| config.suitable_for_tools())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_round_trip() {
        for os in OsFamily::ALL {
            assert_eq!(os.name().parse::<OsFamily>().unwrap(), os);
        }
    }

    #[test]
    fn unknown_family_is_rejected() {
        let err = "beos".parse::<OsFamily>().unwrap_err();
        assert!(matches!(err, PlanError::UnknownPlatform { name } if name == "beos"));
    }

    #[test]
    fn config_names_round_trip() {
        for config in BuildConfig::ALL {
            assert_eq!(config.name().parse::<BuildConfig>().unwrap(), config);
        }
        assert!("shipit".parse::<BuildConfig>().is_err());
    }

    #[test]
    fn only_mobile_uses_fat_test_binary() {
        for os in OsFamily::ALL {
            let expected = matches!(os, OsFamily::Ios | OsFamily::Android);
            assert_eq!(os.is_mobile(), expected, "{os}");
            assert_eq!(os.uses_fat_test_binary(), expected, "{os}");
        }
    }

    #[test]
    fn windows_links_socket_libraries() {
        assert_eq!(OsFamily::Windows.extra_libs(), ["ws2_32", "iphlpapi"]);
        for os in OsFamily::ALL {
            if os != OsFamily::Windows {
                assert!(os.extra_libs().is_empty(), "{os}");
            }
        }
    }

    #[test]
    fn graphics_tables() {
        assert_eq!(OsFamily::Windows.graphics_libs(), ["opengl32", "gdi32"]);
        assert_eq!(
            OsFamily::Linux.graphics_libs(),
            ["GL", "Xxf86vm", "Xext", "X11"]
        );
        assert_eq!(OsFamily::Macos.graphics_frameworks(), ["OpenGL"]);
        assert_eq!(
            OsFamily::Ios.graphics_frameworks(),
            ["QuartzCore", "OpenGLES"]
        );
        for os in [OsFamily::Android, OsFamily::Pnacl, OsFamily::Other] {
            assert!(os.graphics_libs().is_empty(), "{os}");
            assert!(os.graphics_frameworks().is_empty(), "{os}");
        }
    }

    #[test]
    fn host_is_a_desktop_family() {
        let host = OsFamily::host();
        assert!(!host.uses_fat_test_binary());
    }

    #[test]
    fn default_facts_carry_full_config_set() {
        let facts = PlatformFacts::new(OsFamily::Linux);
        assert!(!facts.sub_project);
        assert_eq!(facts.configs, BuildConfig::ALL);
        assert_eq!(facts.test_include_paths, [PathBuf::from("test")]);
    }

    #[test]
    fn with_configs_deduplicates_in_order() {
        let facts = PlatformFacts::new(OsFamily::Linux).with_configs(&[
            BuildConfig::Release,
            BuildConfig::Debug,
            BuildConfig::Release,
        ]);
        assert_eq!(facts.configs, [BuildConfig::Release, BuildConfig::Debug]);
    }

    #[test]
    fn tool_configs_exclude_profile_and_deploy() {
        let facts = PlatformFacts::new(OsFamily::Windows).with_configs(&[
            BuildConfig::Debug,
            BuildConfig::Release,
            BuildConfig::Profile,
        ]);
        assert_eq!(
            facts.tool_configs(),
            [BuildConfig::Debug, BuildConfig::Release]
        );

        let none = PlatformFacts::new(OsFamily::Windows)
            .with_configs(&[BuildConfig::Profile, BuildConfig::Deploy]);
        assert!(none.tool_configs().is_empty());
    }

    #[test]
    fn serde_names_are_kebab_case() {
        let json = serde_json::to_string(&OsFamily::Pnacl).unwrap();
        assert_eq!(json, "\"pnacl\"");
        let json = serde_json::to_string(&BuildConfig::Release).unwrap();
        assert_eq!(json, "\"release\"");
    }
}
