// crates/clusterviz-core/src/event/mod.rs

pub mod checksum;
pub mod format;
pub mod hit;
pub mod status;
