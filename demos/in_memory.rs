//! Bind from an in-memory map instead of the process environment

use envbind::EnvBind;
use std::collections::HashMap;
use std::io::Cursor;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("HOST,required")]
    pub host: String,

    #[env("PORT")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    let source = "HOST=api.internal\nPORT=9443\n";

    // Parse without touching the process environment
    let values: HashMap<String, String> = envbind::parse_reader(Cursor::new(source))?
        .into_iter()
        .collect();
    let config = Config::from_provider(&values)?;
    println!("From map: {}:{}", config.host, config.port);

    // Any closure works as a provider too
    let lookup = |key: &str| (key == "HOST").then(|| "localhost".to_string());
    let config = Config::from_provider(&lookup)?;
    println!("From closure: {}:{}", config.host, config.port);

    Ok(())
}
