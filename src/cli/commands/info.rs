//! multitech info - Details about one technology

use clap::Args;
use console::style;

use crate::catalog::Catalog;
use crate::cli::output;
use crate::core::{Config, ScaffoldError, ScaffoldResult};

#[derive(Args)]
pub struct InfoArgs {
    /// Technology id (e.g. reactjs) or namespaced verb (e.g. guis:web:reactjs)
    pub technology: String,
}

pub async fn execute(args: InfoArgs, json_output: bool) -> ScaffoldResult<()> {
    let catalog = Catalog::builtin();

    let tech = match catalog.find(&args.technology) {
        Some(tech) => tech,
        None if args.technology.contains(':') => catalog.resolve_verb(&args.technology)?,
        None => {
            return Err(ScaffoldError::UnknownTechnology {
                technology: args.technology,
                available: catalog.all().map(|t| t.id).collect::<Vec<_>>().join(", "),
            })
        }
    };

    let config = Config::load(&std::env::current_dir()?)?;
    let output_dir = format!("{}/{}/{}", config.output.root, tech.category.root_path(), tech.id);

    if json_output {
        output::json(&serde_json::json!({
            "id": tech.id,
            "title": tech.title,
            "category": tech.category.key(),
            "description": tech.description,
            "documentation": tech.documentation,
            "command": tech.verb(),
            "output_dir": output_dir,
        }))?;
        return Ok(());
    }

    println!();
    println!("{} {}", style(tech.title).cyan().bold(), style(format!("({})", tech.id)).dim());
    output::divider();
    println!("  {:<15} {}", style("Category").bold(), tech.category.display_name());
    println!("  {:<15} {}", style("Description").bold(), tech.description);
    println!("  {:<15} {}", style("Documentation").bold(), tech.documentation);
    println!("  {:<15} multitech {} <project-name>", style("Usage").bold(), tech.verb());
    println!("  {:<15} {}/<project-name>", style("Output").bold(), output_dir);
    println!();

    Ok(())
}
