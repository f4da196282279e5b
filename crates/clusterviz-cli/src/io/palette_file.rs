// crates/clusterviz-cli/src/io/palette_file.rs

use anyhow::Context;
use clusterviz_core::color::palette::{parse_assignments, parse_palette};
use clusterviz_core::ColorKey;

pub fn load_palette(path: &str) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read palette {path}"))?;
    let colors = parse_palette(&text);
    if colors.is_empty() {
        log::warn!("palette {path} has no colors; new keys will fail to get one");
    }
    Ok(colors)
}

pub fn load_assignments(path: &str) -> anyhow::Result<Vec<(ColorKey, String)>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read assignments {path}"))?;
    let pairs = parse_assignments(&text).with_context(|| format!("parse assignments {path}"))?;
    Ok(pairs)
}
