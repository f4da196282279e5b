// crates/clusterviz-core/src/color/mod.rs

pub mod key;
pub mod palette;
pub mod wheel;
