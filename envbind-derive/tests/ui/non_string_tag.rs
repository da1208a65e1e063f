// The env tag must be a string literal, not a bare identifier

use envbind::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(PORT)]
    port: u16,
}

fn main() {}
