//! Basic usage example

use envfill::EnvFill;

#[derive(Debug, Default, EnvFill)]
struct Config {
    // Loaded from DATABASE_URL; annotation case is irrelevant
    #[env(name = "database_url")]
    pub database_url: String,

    // Loaded from PORT (derived from the field name)
    #[env]
    pub port: u16,

    // Loaded from DEBUG_MODE; unrecognized spellings decode to false
    #[env]
    pub debug_mode: bool,

    // No annotation: never touched
    pub build_info: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("PORT", "3000");
    std::env::set_var("DEBUG_MODE", "true");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build Info: {:?}", config.build_info);

    Ok(())
}
