// crates/clusterviz-cli/src/cmd/colors.rs

use clap::Args;
use clusterviz_core::color::palette::{default_palette, parse_assignment};
use clusterviz_core::color::wheel::DEFAULT_SEED;
use clusterviz_core::ColorWheel;

use crate::io::palette_file;

/// Color wheel options shared by commands that assign cluster colors.
#[derive(Args, Debug, Clone)]
pub struct ColorArgs {
    /// Palette file: one color per line (# comments). Defaults to the built-in table.
    #[arg(long)]
    pub palette_file: Option<String>,

    /// Seed for the palette shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Use the palette in file order instead of shuffling it
    #[arg(long, default_value_t = false)]
    pub no_shuffle: bool,

    /// Pin a key to a color (repeatable), e.g. --assign -1=#cccccc
    #[arg(long = "assign", value_name = "KEY=COLOR", allow_hyphen_values = true)]
    pub assign: Vec<String>,

    /// File of key=color lines, applied before --assign pairs
    #[arg(long)]
    pub assignments_file: Option<String>,
}

impl ColorArgs {
    pub fn palette(&self) -> anyhow::Result<Vec<String>> {
        match self.palette_file.as_deref() {
            Some(p) => palette_file::load_palette(p),
            None => Ok(default_palette()),
        }
    }

    /// A fresh wheel with file assignments first, then flag assignments.
    pub fn wheel(&self) -> anyhow::Result<ColorWheel> {
        let mut builder = ColorWheel::builder()
            .palette(self.palette()?)
            .seed(self.seed)
            .shuffle(!self.no_shuffle);

        if let Some(p) = self.assignments_file.as_deref() {
            builder = builder.assignments(palette_file::load_assignments(p)?);
        }
        for a in &self.assign {
            let (k, c) = parse_assignment(a)?;
            builder = builder.assign(k, c);
        }
        Ok(builder.build())
    }
}
