//! Categories command - list the categories transactions may use

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let categories: Vec<&str> = ctx.categories().iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    println!("{}", "Categories".bold());
    for name in categories {
        println!("  • {}", name);
    }
    println!();
    println!(
        "{}",
        format!("Settings: {}", ctx.data_dir.join("settings.json").display()).dimmed()
    );

    Ok(())
}
