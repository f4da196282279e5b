// crates/clusterviz-cli/src/cmd/inspect.rs

use std::collections::BTreeMap;

use clap::Args;
use clusterviz_core::event::format::event_id_hex;
use clusterviz_core::event::status::status_labels;

use crate::io::event_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Event file (.evt)
    #[arg(long = "in")]
    pub input: String,

    /// Also list every cluster
    #[arg(long, default_value_t = false)]
    pub clusters: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let e = event_file::load_event(&args.input)?;
    let clusters = e.clusters();

    let mut status_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for h in &e {
        for label in status_labels(h.status) {
            *status_counts.entry(label).or_default() += 1;
        }
    }

    eprintln!("--- inspect ---");
    eprintln!("file         = {}", args.input);
    eprintln!("event_id     = {}", event_id_hex(&e)?);
    eprintln!("hits         = {}", e.len());
    eprintln!("clusters     = {}", clusters.len());
    eprintln!("total_energy = {:.3}", e.total_energy());

    eprintln!("--- status bits ---");
    for (label, count) in &status_counts {
        eprintln!("{label:<28} {count}");
    }

    if args.clusters {
        eprintln!("--- clusters ---");
        for c in clusters {
            let sub = e.select(|h| h.cluster == c);
            let pdgid = sub.hits.first().map(|h| h.pdgid).unwrap_or_default();
            eprintln!(
                "cluster={:>5} hits={:>6} energy={:>10.3} pdgid={}",
                c,
                sub.len(),
                sub.total_energy(),
                pdgid
            );
        }
    }
    Ok(())
}
