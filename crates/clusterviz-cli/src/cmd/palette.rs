// crates/clusterviz-cli/src/cmd/palette.rs

use clap::Args;

use super::colors::ColorArgs;

#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub colors: ColorArgs,

    /// Comma-separated keys to run through the wheel, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

pub fn run(args: PaletteArgs) -> anyhow::Result<()> {
    let mut wheel = args.colors.wheel()?;

    eprintln!("--- palette ---");
    eprintln!("colors   = {}", wheel.palette().len());
    eprintln!("seed     = {}", args.colors.seed);
    eprintln!("shuffled = {}", !args.colors.no_shuffle);
    eprintln!("pinned   = {}", wheel.len());
    for (i, c) in wheel.palette().iter().enumerate() {
        println!("{i:>4} {c}");
    }

    if !args.keys.is_empty() {
        eprintln!("--- keys ---");
        for k in &args.keys {
            let c = wheel.lookup_or_assign(k.as_str())?;
            println!("{k} = {c}");
        }
    }
    Ok(())
}
