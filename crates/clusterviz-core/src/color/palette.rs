// crates/clusterviz-core/src/color/palette.rs

use crate::color::key::ColorKey;
use crate::error::{Result, VizError};

/// Fallback palette: a slice of the xkcd color survey names, as hex.
/// Order matters only when shuffling is disabled.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#7e1e9c", // purple
    "#15b01a", // green
    "#0343df", // blue
    "#ff81c0", // pink
    "#653700", // brown
    "#e50000", // red
    "#95d0fc", // light blue
    "#029386", // teal
    "#f97306", // orange
    "#96f97b", // light green
    "#c20078", // magenta
    "#ffff14", // yellow
    "#75bbfd", // sky blue
    "#929591", // grey
    "#89fe05", // lime green
    "#bf77f6", // light purple
    "#9a0eea", // violet
    "#033500", // dark green
    "#06c2ac", // turquoise
    "#c79fef", // lavender
    "#00035b", // dark blue
    "#d1b26f", // tan
    "#00ffff", // cyan
    "#13eac9", // aqua
    "#06470c", // forest green
    "#ae7181", // mauve
    "#35063e", // dark purple
    "#01ff07", // bright green
    "#650021", // maroon
    "#6e750e", // olive
    "#ff796c", // salmon
    "#e6daa6", // beige
    "#0504aa", // royal blue
    "#001146", // navy blue
    "#cea2fd", // lilac
    "#ff028d", // hot pink
    "#ad8150", // light brown
    "#c7fdb5", // pale green
    "#ffb07c", // peach
    "#677a04", // olive green
    "#cb416b", // dark pink
    "#8e82fe", // periwinkle
    "#53fca1", // sea green
    "#aaff32", // lime
    "#380282", // indigo
    "#ceb301", // mustard
    "#ffd1df", // light pink
    "#000000", // black
];

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Significant lines of a palette/assignment text: trimmed, no blanks, no
/// comments. A comment is `#` followed by whitespace or nothing, so hex
/// colors like `#ff0000` stay significant.
fn significant_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !is_comment(l))
}

fn is_comment(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// One color token per line.
pub fn parse_palette(text: &str) -> Vec<String> {
    significant_lines(text).map(|(_, l)| l.to_string()).collect()
}

/// Parse a single `key=color` pair. The key is normalized; the color is trimmed.
pub fn parse_assignment(s: &str) -> Result<(ColorKey, String)> {
    let (k, c) = s
        .split_once('=')
        .ok_or_else(|| VizError::Validation(format!("expected key=color, got {s:?}")))?;
    let color = c.trim();
    if color.is_empty() {
        return Err(VizError::Validation(format!("empty color in {s:?}")));
    }
    Ok((ColorKey::from(k.trim()), color.to_string()))
}

/// `key=color` per line, in file order.
pub fn parse_assignments(text: &str) -> Result<Vec<(ColorKey, String)>> {
    significant_lines(text)
        .map(|(n, l)| {
            parse_assignment(l).map_err(|e| VizError::Validation(format!("line {n}: {e}")))
        })
        .collect()
}
