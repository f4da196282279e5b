// crates/clusterviz-core/src/plot/mod.rs

//! plotly-shaped 3D scatter traces, one per truth cluster.
//!
//! Detector coordinates are rotated onto the plot axes so the beam axis (z)
//! runs horizontally: plot x = hit z, plot y = hit x, plot z = hit y.

use serde::Serialize;

use crate::color::wheel::ColorWheel;
use crate::error::Result;
use crate::event::hit::Event;
use crate::event::status::status_text;

pub const MARKER_SIZE: f32 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub line: MarkerLine,
    pub size: f32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scatter3d {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub marker: Marker,
    pub text: Vec<String>,
    pub hovertemplate: String,
}

/// One trace per cluster id, ascending, colored through `wheel`.
pub fn build_traces(e: &Event, wheel: &mut ColorWheel<String>) -> Result<Vec<Scatter3d>> {
    let mut out = Vec::new();
    for cluster in e.clusters() {
        let color = wheel.lookup_or_assign(cluster)?;
        out.push(cluster_trace(e, cluster, color));
    }
    Ok(out)
}

fn cluster_trace(e: &Event, cluster: i32, color: String) -> Scatter3d {
    let n = e.cluster_hits(cluster).count();
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);
    let mut text = Vec::with_capacity(n);
    let mut pdgid = 0;

    for (i, h) in e.cluster_hits(cluster).enumerate() {
        if i == 0 {
            pdgid = h.pdgid;
        }
        x.push(h.z);
        y.push(h.x);
        z.push(h.y);
        text.push(hover_text(h.energy, h.time, h.status));
    }

    Scatter3d {
        kind: "scatter3d",
        name: format!("cluster_{cluster}"),
        mode: "markers",
        x,
        y,
        z,
        marker: Marker {
            line: MarkerLine { width: 0.0 },
            size: MARKER_SIZE,
            color,
        },
        text,
        hovertemplate: format!(
            "x=%{{y:0.2f}}<br>y=%{{z:0.2f}}<br>z=%{{x:0.2f}}<br>%{{text}}<br>clusterindex={cluster}<br>pdgid={pdgid}<br>"
        ),
    }
}

fn hover_text(energy: f32, time: f32, status: u32) -> String {
    format!(
        "e={energy:.3}<br>t={time:.3}<br>status=[<br>{}<br>]",
        status_text(status)
    )
}
