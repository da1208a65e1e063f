// Deriving EnvBind for an enum is an invalid bind target

use envbind::EnvBind;

#[derive(EnvBind)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
