//! CLI module for Multitech
//!
//! Provides command-line interface using clap.

pub mod commands;
pub mod output;

use clap::{CommandFactory, Parser, Subcommand};

use commands::*;

const VERBS_HELP: &str = "\
Technology verbs:
  multitech guis:web:<tech> <name>      angular, astro, reactjs, svelte, vuejs
  multitech guis:mobile:<tech> <name>   flutter
  multitech backends:<tech> <name>      apiplatform, expressjs, springboot
  multitech databases:<tech> <name>     mariadb, mongodb, oracleenterprise, postgresql

Projects are generated under ./__GEN_PROJECTS/<category>/<tech>/<name>.";

/// Usage line plus the technology verbs, shown after usage errors
pub fn usage() -> String {
    format!("{}\n\n{}", Cli::command().render_usage(), VERBS_HELP)
}

/// Multitech - scaffold projects across web, mobile, backend and database stacks
#[derive(Parser)]
#[command(name = "multitech")]
#[command(version)]
#[command(about = "Scaffold projects for web, mobile, backend and database technologies", long_about = None)]
#[command(after_help = VERBS_HELP)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a project from a category and a technology
    #[command(visible_alias = "c")]
    Create(create::CreateArgs),

    /// List the available technologies
    #[command(visible_alias = "ls")]
    List(list::ListArgs),

    /// Show details about a technology
    Info(info::InfoArgs),

    /// Print version information
    Version,

    /// Namespaced technology verb, e.g. `guis:web:reactjs my-app`
    #[command(external_subcommand)]
    Namespaced(Vec<String>),
}
