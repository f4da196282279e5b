// crates/clusterviz-cli/src/cmd/mod.rs

pub mod colors;
pub mod inspect;
pub mod palette;
pub mod plot;
pub mod synth;
