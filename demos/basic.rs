//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Required: binding fails when DATABASE_URL is unset or empty
    #[env("DATABASE_URL,required")]
    pub database_url: String,

    // Optional: keeps its default when SERVER_PORT is unset
    #[env("SERVER_PORT")]
    pub server_port: u16,

    // Accepts Y/yes/on, N/no/off, true/false
    #[env("DEBUG")]
    pub debug_mode: bool,

    // Not annotated: never touched by the binder
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG", "yes");

    let mut config = Config {
        server_port: 8080,
        build_id: "dev".to_string(),
        ..Default::default()
    };
    envbind::bind(&mut config, &envbind::EnvProvider)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Port: {}", config.server_port);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build ID: {}", config.build_id);

    Ok(())
}
