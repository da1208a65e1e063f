//! Every supported field type

use envbind::{Complex32, Complex64, EnvBind};
use std::collections::BTreeMap;

#[derive(Debug, Default, EnvBind)]
struct Limits {
    #[env("NAME")]
    pub name: String,
    #[env("OFFSET")]
    pub offset: i8,
    #[env("RETRIES")]
    pub retries: u64,
    #[env("MAX_BYTES")]
    pub max_bytes: usize,
    #[env("SCALE")]
    pub scale: f32,
    #[env("ENABLED")]
    pub enabled: bool,
    #[env("GAIN")]
    pub gain: Complex32,
    #[env("IMPEDANCE")]
    pub impedance: Complex64,
}

fn main() -> anyhow::Result<()> {
    let values = BTreeMap::from([
        ("NAME".to_string(), "limits".to_string()),
        ("OFFSET".to_string(), "-12".to_string()),
        ("RETRIES".to_string(), "3".to_string()),
        ("MAX_BYTES".to_string(), "1048576".to_string()),
        ("SCALE".to_string(), "1.5".to_string()),
        ("ENABLED".to_string(), "on".to_string()),
        ("GAIN".to_string(), "0.5-1.5i".to_string()),
        ("IMPEDANCE".to_string(), "50+10i".to_string()),
    ]);

    let limits = Limits::from_provider(&values)?;
    println!("{limits:#?}");

    // Out-of-range values are rejected, not truncated
    let mut overflow = values.clone();
    overflow.insert("OFFSET".to_string(), "300".to_string());
    match Limits::from_provider(&overflow) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
