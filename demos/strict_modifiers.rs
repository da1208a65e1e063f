//! Lenient vs strict handling of unknown tag modifiers

use envbind::{Binder, EnvBind};
use std::collections::HashMap;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Typo: "requried" is not a known modifier
    #[env("API_TOKEN,requried")]
    pub api_token: String,
}

fn main() -> anyhow::Result<()> {
    let values: HashMap<String, String> = HashMap::new();

    // Default binder: the typo is ignored and the field stays optional
    let mut config = Config::default();
    Binder::new().bind(&mut config, &values)?;
    println!("lenient: bound, api_token = {:?}", config.api_token);

    // Strict binder: the typo is an error
    match Binder::strict().bind(&mut config, &values) {
        Ok(()) => println!("strict: bound"),
        Err(e) => println!("strict: {e}"),
    }

    Ok(())
}
