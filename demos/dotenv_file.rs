//! Load a `.env` file into the environment and bind it, with log output
//!
//! Run with `RUST_LOG=envbind=debug` to see each bound field.

use envbind::EnvBind;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env("APP_NAME")]
    pub name: String,

    #[env("APP_WORKERS,required")]
    pub workers: u32,

    #[env("APP_RATIO")]
    pub ratio: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "# demo settings")?;
    writeln!(file, "APP_NAME = worker-pool")?;
    writeln!(file, "APP_WORKERS=8")?;
    writeln!(file, "APP_RATIO=0.75")?;

    let mut config = Config::default();
    envbind::load_and_bind_file(file.path(), &mut config)?;

    println!("Loaded from {}:", file.path().display());
    println!("  Name: {}", config.name);
    println!("  Workers: {}", config.workers);
    println!("  Ratio: {}", config.ratio);

    Ok(())
}
