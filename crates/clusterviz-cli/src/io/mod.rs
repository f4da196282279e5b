// crates/clusterviz-cli/src/io/mod.rs

pub mod event_file;
pub mod html;
pub mod logger;
pub mod palette_file;
