// crates/clusterviz-cli/src/cmd/plot.rs

use std::path::Path;

use clap::{Args, ValueEnum};
use clusterviz_core::event::format::event_id_hex;
use clusterviz_core::plot::build_traces;

use super::colors::ColorArgs;
use crate::io::{event_file, html};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlotlyJs {
    /// Load plotly.js from the CDN (once per report file)
    Cdn,
    /// Assume the page already provides plotly.js
    None,
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Event files (.evt), one figure each, in order
    #[arg(long = "in", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Output HTML path
    #[arg(long)]
    pub out: String,

    /// Figure title (defaults to the event file name)
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Defaults to --width
    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long, value_enum, default_value_t = PlotlyJs::Cdn)]
    pub plotlyjs: PlotlyJs,

    /// Append to --out instead of truncating it first
    #[arg(long, default_value_t = false)]
    pub append: bool,

    /// Keep one color wheel across all events (cluster ids keep their color)
    #[arg(long, default_value_t = false)]
    pub shared_colors: bool,

    #[command(flatten)]
    pub colors: ColorArgs,
}

pub fn run(args: PlotArgs) -> anyhow::Result<()> {
    let mut shared = if args.shared_colors {
        Some(args.colors.wheel()?)
    } else {
        None
    };

    let mut append = args.append;
    let mut total_traces = 0usize;
    let mut need_loader =
        args.plotlyjs == PlotlyJs::Cdn && !(append && html::has_loader(&args.out)?);

    for (n, path) in args.inputs.iter().enumerate() {
        let event = event_file::load_event(path)?;
        let id = event_id_hex(&event)?;

        let traces = match shared.as_mut() {
            Some(w) => build_traces(&event, w)?,
            None => build_traces(&event, &mut args.colors.wheel()?)?,
        };
        total_traces += traces.len();

        let opts = html::FigureOptions {
            title: Some(args.title.clone().unwrap_or_else(|| file_name(path))),
            width: args.width,
            height: args.height,
            include_plotlyjs: need_loader,
        };
        let div_id = format!("clusterviz-{}-{n}", &id[..12]);
        let fragment = html::figure_html(&traces, &opts, &div_id)?;
        html::write_fragment(&args.out, &fragment, append)?;
        append = true;
        need_loader = false;

        eprintln!("--- plot ---");
        eprintln!("event    = {path}");
        eprintln!("event_id = {id}");
        eprintln!("hits     = {}", event.len());
        eprintln!("clusters = {}", traces.len());
    }

    eprintln!("--- report ---");
    eprintln!("out      = {}", args.out);
    eprintln!("figures  = {}", args.inputs.len());
    eprintln!("traces   = {total_traces}");
    Ok(())
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
