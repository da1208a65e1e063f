// Tuple structs have no named fields to bind

use envbind::EnvBind;

#[derive(EnvBind)]
struct Pair(String, u16);

fn main() {}
