//! Multitech - a multi-technology project scaffolder
//!
//! Multitech generates starter projects for web, mobile, backend and database
//! technologies by driving their own generators (bun, ng, flutter, the Spring
//! Initializr, docker compose) and then customizing the generated boilerplate.

mod catalog;
mod cli;
mod core;
mod docker;
mod process;
mod project;
mod scaffold;
mod templates;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{output, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let json_output = cli.json;
    output::set_quiet(json_output);

    let result = match cli.command {
        Commands::Create(args) => cli::commands::create::execute(args, json_output).await,
        Commands::List(args) => cli::commands::list::execute(args, json_output).await,
        Commands::Info(args) => cli::commands::info::execute(args, json_output).await,
        Commands::Version => cli::commands::version::execute(json_output).await,
        Commands::Namespaced(args) => cli::commands::create::execute_namespaced(args, json_output).await,
    };

    if let Err(ref e) = result {
        if json_output {
            let error_json = serde_json::json!({
                "error": true,
                "message": e.to_string()
            });
            eprintln!("{}", error_json);
        } else {
            output::error(&e.to_string());
            if e.is_usage_error() {
                eprintln!();
                eprintln!("{}", cli::usage());
                eprintln!();
                eprintln!("Run 'multitech help' for details, or 'multitech list' for the available technologies.");
            }
        }
        std::process::exit(1);
    }
}
