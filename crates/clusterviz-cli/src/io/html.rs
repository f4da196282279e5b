// crates/clusterviz-cli/src/io/html.rs

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clusterviz_core::plot::Scatter3d;
use serde::Serialize;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug)]
pub struct FigureOptions {
    pub title: Option<String>,
    pub width: u32,
    /// Defaults to `width` (square figure).
    pub height: Option<u32>,
    pub include_plotlyjs: bool,
}

#[derive(Serialize)]
struct AxisTitle<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Axis<'a> {
    title: AxisTitle<'a>,
}

#[derive(Serialize)]
struct Scene<'a> {
    xaxis: Axis<'a>,
    yaxis: Axis<'a>,
    zaxis: Axis<'a>,
    aspectmode: &'a str,
}

#[derive(Serialize)]
struct Layout<'a> {
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<AxisTitle<'a>>,
    scene: Scene<'a>,
}

fn axis(text: &str) -> Axis<'_> {
    Axis {
        title: AxisTitle { text },
    }
}

/// JSON that is safe to drop inside a `<script>` element.
fn script_json<T: Serialize>(v: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(v)?.replace("</", "<\\/"))
}

/// One self-contained figure: optional plotly loader, a div and the newPlot call.
pub fn figure_html(traces: &[Scatter3d], opts: &FigureOptions, div_id: &str) -> anyhow::Result<String> {
    let layout = Layout {
        width: opts.width,
        height: opts.height.unwrap_or(opts.width),
        title: opts.title.as_deref().map(|text| AxisTitle { text }),
        scene: Scene {
            xaxis: axis("z (cm)"),
            yaxis: axis("x (cm)"),
            zaxis: axis("y (cm)"),
            aspectmode: "cube",
        },
    };

    let mut s = String::new();
    s.push_str("<div>");
    if opts.include_plotlyjs {
        s.push_str(&format!("<script src=\"{PLOTLY_CDN}\" charset=\"utf-8\"></script>"));
    }
    s.push_str(&format!(
        "<div id=\"{div_id}\" class=\"plotly-graph-div\" style=\"height:{}px; width:{}px;\"></div>",
        layout.height, layout.width
    ));
    s.push_str(&format!(
        "<script type=\"text/javascript\">Plotly.newPlot(\"{div_id}\", {}, {}, {{\"responsive\": true}});</script>",
        script_json(&traces)?,
        script_json(&layout)?
    ));
    s.push_str("</div>\n");
    Ok(s)
}

/// Whether an existing report already loads plotly.js from the CDN.
pub fn has_loader(path: &str) -> anyhow::Result<bool> {
    if !Path::new(path).exists() {
        return Ok(false);
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    Ok(text.contains(PLOTLY_CDN))
}

/// Write (or append) a fragment, creating parent directories.
pub fn write_fragment(path: &str, html: &str, append: bool) -> anyhow::Result<()> {
    eprintln!("Writing to {path}");
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        }
    }
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("open {path}"))?;
    f.write_all(html.as_bytes())
        .with_context(|| format!("write {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterviz_core::plot::build_traces;
    use clusterviz_core::{ColorWheel, Event, Hit};

    fn traces() -> Vec<Scatter3d> {
        let e = Event::new(vec![Hit {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            energy: 1.0,
            time: 0.0,
            cluster: 0,
            pdgid: 13,
            status: 0,
        }]);
        let mut w = ColorWheel::unshuffled(["#ff0000".to_string()]);
        build_traces(&e, &mut w).unwrap()
    }

    #[test]
    fn figure_has_layout_and_loader() {
        let opts = FigureOptions {
            title: Some("evt </script>".into()),
            width: 600,
            height: None,
            include_plotlyjs: true,
        };
        let html = figure_html(&traces(), &opts, "fig0").unwrap();
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("\"aspectmode\":\"cube\""));
        assert!(html.contains("\"height\":600"));
        assert!(html.contains("z (cm)"));
        assert!(html.contains("#ff0000"));
        assert!(!html.contains("evt </script>"));
    }

    #[test]
    fn loader_detected_in_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.html");
        let path = path.to_str().unwrap();
        assert!(!has_loader(path).unwrap());

        write_fragment(path, "<div>plain</div>\n", false).unwrap();
        assert!(!has_loader(path).unwrap());

        let opts = FigureOptions {
            title: None,
            width: 300,
            height: None,
            include_plotlyjs: true,
        };
        let html = figure_html(&traces(), &opts, "fig2").unwrap();
        write_fragment(path, &html, true).unwrap();
        assert!(has_loader(path).unwrap());
    }

    #[test]
    fn loader_is_optional() {
        let opts = FigureOptions {
            title: None,
            width: 400,
            height: Some(300),
            include_plotlyjs: false,
        };
        let html = figure_html(&traces(), &opts, "fig1").unwrap();
        assert!(!html.contains(PLOTLY_CDN));
        assert!(html.contains("\"height\":300,\"scene\""));
        assert!(html.contains("height:300px; width:400px;"));
    }
}
