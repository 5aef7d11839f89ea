//! multitech list - Show the technology catalog

use clap::Args;
use console::style;

use crate::catalog::{Catalog, Category};
use crate::cli::output;
use crate::core::ScaffoldResult;

#[derive(Args)]
pub struct ListArgs {
    /// Only list one category (web, mobile, backend, database)
    pub category: Option<String>,
}

pub async fn execute(args: ListArgs, json_output: bool) -> ScaffoldResult<()> {
    let catalog = Catalog::builtin();

    let categories: Vec<Category> = match args.category {
        Some(ref key) => vec![key.parse()?],
        None => Category::ALL.to_vec(),
    };

    if json_output {
        let groups: Vec<serde_json::Value> = categories
            .iter()
            .map(|category| {
                serde_json::json!({
                    "category": category.key(),
                    "name": category.display_name(),
                    "technologies": catalog.in_category(*category).collect::<Vec<_>>(),
                })
            })
            .collect();
        output::json(&groups)?;
        return Ok(());
    }

    for category in categories {
        println!();
        println!("{}", style(category.display_name()).bold());
        output::divider();
        for tech in catalog.in_category(category) {
            println!(
                "  {:<38} {}",
                style(tech.verb()).cyan(),
                style(tech.description).dim()
            );
        }
    }
    println!();
    println!("Run {} to create a project.", style("multitech <verb> <project-name>").green());

    Ok(())
}
