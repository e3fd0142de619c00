//! Example demonstrating nested sections and owned references

use envfill::EnvFill;

#[derive(Debug, Default, EnvFill)]
struct Database {
    #[env(name = "DB_HOST")]
    pub host: String,

    #[env(name = "DB_PORT")]
    pub port: u16,
}

#[derive(Debug, Default, EnvFill)]
struct Metrics {
    #[env(name = "METRICS_ADDR")]
    pub addr: String,
}

#[derive(Debug, Default, EnvFill)]
struct Config {
    #[env]
    pub app_name: String,

    // Embedded section, decoded in place
    #[env(nested)]
    pub database: Database,

    // Owned reference: allocated with Default before decoding
    #[env(nested)]
    pub metrics: Option<Box<Metrics>>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "demo");
    std::env::set_var("DB_HOST", "localhost");
    std::env::set_var("DB_PORT", "5432");
    std::env::set_var("METRICS_ADDR", "0.0.0.0:9100");

    // Start from a caller-owned value and fill it in place
    let mut config = Config::default();
    config.fill_from_env()?;

    println!("Configuration loaded:");
    println!("  App: {}", config.app_name);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    if let Some(metrics) = &config.metrics {
        println!("  Metrics: {}", metrics.addr);
    }

    Ok(())
}
