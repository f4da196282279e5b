// crates/clusterviz-cli/src/io/event_file.rs

use anyhow::Context;
use clusterviz_core::event::format;
use clusterviz_core::Event;

pub fn load_event(path: &str) -> anyhow::Result<Event> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let e = format::decode(&bytes).with_context(|| format!("decode event: {path}"))?;
    log::debug!("loaded {path}: {} hits", e.len());
    Ok(e)
}

pub fn save_event(path: &str, e: &Event) -> anyhow::Result<()> {
    let bytes = format::encode(e)?;
    std::fs::write(path, bytes).with_context(|| format!("write event: {path}"))?;
    Ok(())
}
