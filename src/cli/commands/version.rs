//! multitech version

use console::style;

use crate::cli::output;
use crate::core::ScaffoldResult;

pub async fn execute(json_output: bool) -> ScaffoldResult<()> {
    let version = env!("CARGO_PKG_VERSION");

    if json_output {
        output::json(&serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": version,
        }))?;
    } else {
        println!("{} {}", style("multitech").cyan().bold(), version);
    }

    Ok(())
}
