// crates/clusterviz-cli/src/cmd/synth.rs

use anyhow::Context;
use clap::Args;
use clusterviz_core::event::status::STATUS_BITS;
use clusterviz_core::{Event, Hit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::event_file;

const PDGIDS: [i32; 7] = [22, 11, -11, 13, 211, -211, 2212];

#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Output event path (.evt)
    #[arg(long)]
    pub out: String,

    #[arg(long, default_value_t = 8)]
    pub clusters: u32,

    #[arg(long, default_value_t = 40)]
    pub hits_per_cluster: u32,

    /// Unclustered hits (cluster id -1) scattered through the volume
    #[arg(long, default_value_t = 0)]
    pub noise: u32,

    #[arg(long, default_value_t = 1)]
    pub seed: u64,
}

pub fn run(args: SynthArgs) -> anyhow::Result<()> {
    let e = synth_event(&args)?;
    event_file::save_event(&args.out, &e)?;

    eprintln!("--- synth ---");
    eprintln!("out      = {}", args.out);
    eprintln!("seed     = {}", args.seed);
    eprintln!("clusters = {}", args.clusters);
    eprintln!("hits     = {}", e.len());
    Ok(())
}

fn synth_event(args: &SynthArgs) -> anyhow::Result<Event> {
    let clusters = i32::try_from(args.clusters)
        .with_context(|| format!("--clusters {} exceeds i32 cluster ids", args.clusters))?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut hits = Vec::new();

    for cluster in 0..clusters {
        let center = [
            rng.gen_range(-100.0f32..100.0),
            rng.gen_range(-100.0f32..100.0),
            rng.gen_range(300.0f32..400.0),
        ];
        let spread = rng.gen_range(1.0f32..6.0);
        let pdgid = PDGIDS[rng.gen_range(0..PDGIDS.len())];

        for _ in 0..args.hits_per_cluster {
            hits.push(Hit {
                x: center[0] + spread * bell(&mut rng),
                y: center[1] + spread * bell(&mut rng),
                z: center[2] + spread * bell(&mut rng),
                energy: rng.gen_range(0.01f32..2.0),
                time: rng.gen_range(0.0f32..10.0),
                cluster,
                pdgid,
                status: random_status(&mut rng),
            });
        }
    }

    for _ in 0..args.noise {
        hits.push(Hit {
            x: rng.gen_range(-150.0f32..150.0),
            y: rng.gen_range(-150.0f32..150.0),
            z: rng.gen_range(300.0f32..400.0),
            energy: rng.gen_range(0.001f32..0.1),
            time: rng.gen_range(0.0f32..25.0),
            cluster: -1,
            pdgid: 0,
            status: 0,
        });
    }

    Ok(Event::new(hits))
}

/// Approximately standard normal (Irwin-Hall, n=12).
fn bell(rng: &mut StdRng) -> f32 {
    (0..12).map(|_| rng.gen::<f32>()).sum::<f32>() - 6.0
}

fn random_status(rng: &mut StdRng) -> u32 {
    STATUS_BITS
        .iter()
        .filter(|_| rng.gen_bool(0.15))
        .fold(0u32, |acc, (bit, _)| acc | (1u32 << *bit))
}
