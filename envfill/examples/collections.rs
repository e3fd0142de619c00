//! Example demonstrating list and map encodings

use std::collections::HashMap;

use envfill::EnvFill;

#[derive(Debug, Default, EnvFill)]
struct Config {
    // Comma-separated list: TAGS=production,api,v2
    #[env]
    pub tags: Vec<String>,

    // Lists work for any scalar element type
    #[env]
    pub ports: Vec<u16>,

    // Comma-separated key=value pairs: LABELS=team=core,tier=web
    #[env]
    pub labels: HashMap<String, String>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TAGS", "production,api,v2");
    std::env::set_var("PORTS", "80,443,8080");
    std::env::set_var("LABELS", "team=core,tier=web,region=eu");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Tags: {:?}", config.tags);
    println!("  Ports: {:?}", config.ports);
    println!("  Labels:");
    for (key, value) in &config.labels {
        println!("    {key} = {value}");
    }

    Ok(())
}
