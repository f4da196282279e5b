// crates/clusterviz-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "clusterviz-cli")]
#[command(about = "Detector event display: cluster-colored 3D scatter reports", long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render event files (.evt) into an HTML report of 3D scatter plots
    Plot(cmd::plot::PlotArgs),

    /// Write a synthetic event file (seeded gaussian clusters)
    Synth(cmd::synth::SynthArgs),

    /// Summarize an event file (hits, clusters, status bits, content id)
    Inspect(cmd::inspect::InspectArgs),

    /// Show the effective palette order and the colors keys would receive
    Palette(cmd::palette::PaletteArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    io::logger::init(cli.verbose)?;

    match cli.cmd {
        Commands::Plot(args) => cmd::plot::run(args),
        Commands::Synth(args) => cmd::synth::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Palette(args) => cmd::palette::run(args),
    }
}
