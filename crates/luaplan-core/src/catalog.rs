//! The project catalog: modules, tools, and test cases.
//!
//! The catalog is the fixed half of plan generation — the same on every
//! platform — while [`crate::platform::PlatformFacts`] is the varying half.
//! [`Catalog::lua`] builds the catalog of the lua embedding library; other
//! projects can load theirs from a manifest (see [`crate::manifest`]).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::OsFamily;
use crate::target::VariableValue;

/// A named unit of library source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Module {
    /// Module name; also the directory its sources live under and the name
    /// of the produced library target.
    pub name: String,
    /// Ordered source file names, relative to the module directory.
    pub sources: Vec<String>,
    /// Libraries the module depends on, in link order.
    #[serde(default)]
    pub depend_libs: Vec<String>,
}

impl Module {
    /// Source paths relative to the project root.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .map(|source| PathBuf::from(&self.name).join(source))
            .collect()
    }
}

/// A command-line tool built alongside the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tool {
    /// Binary name.
    pub name: String,
    /// Source directory under `tools/`; differs from `name` for word-size
    /// variants that reuse another tool's entry source.
    pub source_dir: String,
    /// Scripting runtime library the tool links.
    pub runtime_lib: String,
    /// One-line description for catalog listings.
    #[serde(default)]
    pub description: String,
    /// Extra per-tool build variables.
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,
}

impl Tool {
    /// The tool's entry source, relative to the project root.
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from("tools").join(&self.source_dir).join("main.c")
    }
}

/// The functional test suite and its platform-specific packaging inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TestSuite {
    /// Test case names, in catalog order. Each case owns
    /// `test/<case>/main.c`.
    pub cases: Vec<String>,
    /// Name of the aggregate entry (`test/<aggregate>/main.c`) driving the
    /// combined binary.
    pub aggregate: String,
    /// Test-support library linked by per-case and fat binaries.
    pub support_lib: String,
    /// Scripting runtime library linked by per-case and fat binaries.
    pub runtime_lib: String,
    /// iOS bundle resources, relative to `test/<aggregate>/ios/`.
    pub ios_resources: Vec<String>,
    /// Android bundle resources, relative to `test/<aggregate>/android/`.
    pub android_resources: Vec<String>,
    /// Android glue sources, relative to `test/<aggregate>/android/`.
    pub android_glue_sources: Vec<String>,
}

impl Default for TestSuite {
    fn default() -> Self {
        TestSuite {
            cases: Vec::new(),
            aggregate: "all".to_string(),
            support_lib: "test".to_string(),
            runtime_lib: "luajit".to_string(),
            ios_resources: Vec::new(),
            android_resources: Vec::new(),
            android_glue_sources: Vec::new(),
        }
    }
}

impl TestSuite {
    /// Entry source for one test case.
    pub fn case_source(&self, case: &str) -> PathBuf {
        PathBuf::from("test").join(case).join("main.c")
    }

    /// Bundle resources for a fat test binary on `os`, relative to the
    /// project root. Empty off mobile.
    pub fn resources(&self, os: OsFamily) -> Vec<PathBuf> {
        let (subdir, names) = match os {
            OsFamily::Ios => ("ios", &self.ios_resources),
            OsFamily::Android => ("android", &self.android_resources),
            OsFamily::Windows
            | OsFamily::Macos
            | OsFamily::Linux
            | OsFamily::Pnacl
            | OsFamily::Other => return Vec::new(),
        };
        names
            .iter()
            .map(|name| {
                PathBuf::from("test")
                    .join(&self.aggregate)
                    .join(subdir)
                    .join(name)
            })
            .collect()
    }

    /// Platform glue sources appended to a fat test binary on `os`,
    /// relative to the project root. Empty off android.
    pub fn glue_sources(&self, os: OsFamily) -> Vec<PathBuf> {
        match os {
            OsFamily::Android => self
                .android_glue_sources
                .iter()
                .map(|name| {
                    PathBuf::from("test")
                        .join(&self.aggregate)
                        .join("android")
                        .join(name)
                })
                .collect(),
            OsFamily::Windows
            | OsFamily::Macos
            | OsFamily::Ios
            | OsFamily::Linux
            | OsFamily::Pnacl
            | OsFamily::Other => Vec::new(),
        }
    }
}

/// Everything the plan builder needs to know about one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    /// Project name.
    pub project: String,
    /// Project-level variables the generator applies to every target.
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,
    /// The embedding library module.
    pub library: Module,
    /// Command-line tools, in build order.
    #[serde(default)]
    pub tools: Vec<Tool>,
    /// The functional test suite.
    #[serde(default)]
    pub tests: TestSuite,
}

impl Catalog {
    /// The catalog of the lua embedding library.
    pub fn lua() -> Self {
        let mut bundle = BTreeMap::new();
        bundle.insert(
            "bundleidentifier".to_string(),
            VariableValue::Text("com.rampantpixels.lua.$(binname)".to_string()),
        );

        let mut support_lua = BTreeMap::new();
        support_lua.insert("support_lua".to_string(), VariableValue::Bool(true));

        Catalog {
            project: "lua".to_string(),
            variables: bundle,
            library: Module {
                name: "lua".to_string(),
                sources: [
                    "bind.c",
                    "call.c",
                    "compile.c",
                    "eval.c",
                    "event.c",
                    "foundation.c",
                    "import.c",
                    "lua.c",
                    "module.c",
                    "network.c",
                    "read.c",
                    "resource.c",
                    "symbol.c",
                    "version.c",
                    "window.c",
                ]
                .map(String::from)
                .to_vec(),
                depend_libs: ["render", "window", "resource", "network", "foundation"]
                    .map(String::from)
                    .to_vec(),
            },
            tools: vec![
                Tool {
                    name: "lua".to_string(),
                    source_dir: "lua".to_string(),
                    runtime_lib: "luajit".to_string(),
                    description: "Interactive interpreter".to_string(),
                    variables: BTreeMap::new(),
                },
                Tool {
                    name: "luadump".to_string(),
                    source_dir: "luadump".to_string(),
                    runtime_lib: "luajit".to_string(),
                    description: "Bytecode dump tool".to_string(),
                    variables: BTreeMap::new(),
                },
                Tool {
                    name: "luaimport".to_string(),
                    source_dir: "luaimport".to_string(),
                    runtime_lib: "luajit".to_string(),
                    description: "Imports Lua sources into the resource system".to_string(),
                    variables: BTreeMap::new(),
                },
                Tool {
                    name: "luacompile".to_string(),
                    source_dir: "luacompile".to_string(),
                    runtime_lib: "luajit".to_string(),
                    description: "Compiles Lua sources to resources".to_string(),
                    variables: BTreeMap::new(),
                },
                Tool {
                    name: "luacompile32".to_string(),
                    source_dir: "luacompile".to_string(),
                    runtime_lib: "luajit32".to_string(),
                    description: "32-bit word-size build of luacompile".to_string(),
                    variables: support_lua,
                },
            ],
            tests: TestSuite {
                cases: ["bind", "foundation", "network", "render", "resource", "window"]
                    .map(String::from)
                    .to_vec(),
                aggregate: "all".to_string(),
                support_lib: "test".to_string(),
                runtime_lib: "luajit".to_string(),
                ios_resources: ["test-all.plist", "Images.xcassets", "test-all.xib"]
                    .map(String::from)
                    .to_vec(),
                android_resources: [
                    "AndroidManifest.xml",
                    "layout/main.xml",
                    "values/strings.xml",
                    "drawable-ldpi/icon.png",
                    "drawable-mdpi/icon.png",
                    "drawable-hdpi/icon.png",
                    "drawable-xhdpi/icon.png",
                    "drawable-xxhdpi/icon.png",
                    "drawable-xxxhdpi/icon.png",
                ]
                .map(String::from)
                .to_vec(),
                android_glue_sources: ["java/com/rampantpixels/foundation/test/TestActivity.java"]
                    .map(String::from)
                    .to_vec(),
            },
        }
    }
}
