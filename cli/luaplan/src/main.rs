//! luaplan CLI — build-plan compiler for the lua embedding library.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "luaplan",
    version,
    about = "Build-plan compiler for the lua embedding library",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bare invocation plans for the host platform.
    #[command(flatten)]
    plan: PlanArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the build plan and hand it off
    Plan(PlanArgs),
    /// Write a luaplan.toml manifest seeded with the reference catalog
    Init {
        /// Project name (default: lua)
        #[arg(long)]
        name: Option<String>,
    },
    /// Inspect platform link and packaging tables
    Platform {
        #[command(subcommand)]
        action: PlatformAction,
    },
    /// Show the resolved project catalog
    Catalog {
        /// Path to a luaplan.toml (default: search upward from cwd)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Platform to plan for (windows, macos, ios, linux, android, pnacl, other)
    #[arg(long)]
    platform: Option<String>,
    /// Available build configuration; repeat for several (default: debug,
    /// release, profile, deploy)
    #[arg(long = "config")]
    configs: Vec<String>,
    /// Plan as a nested sub-project build (library only)
    #[arg(long)]
    sub_project: bool,
    /// Path to a luaplan.toml (default: search upward from cwd)
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Output format (human, json)
    #[arg(long)]
    format: Option<String>,
    /// Write the plan to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum PlatformAction {
    /// List recognized platforms
    List,
    /// Show one platform's link, framework, and resource tables
    Describe {
        /// Platform name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let args = match cli.command {
        None => cli.plan,
        Some(Commands::Plan(args)) => args,
        Some(Commands::Init { name }) => return commands::init::run(&cwd, name.as_deref()),
        Some(Commands::Platform { action }) => {
            return match action {
                PlatformAction::List => commands::platform::list(),
                PlatformAction::Describe { name } => commands::platform::describe(&name),
            }
        }
        Some(Commands::Catalog { manifest }) => {
            return commands::catalog::run(&cwd, manifest.as_deref())
        }
    };

    commands::plan::run(
        &cwd,
        args.platform.as_deref(),
        &args.configs,
        args.sub_project,
        args.manifest.as_deref(),
        args.format.as_deref(),
        args.output.as_deref(),
    )
}
