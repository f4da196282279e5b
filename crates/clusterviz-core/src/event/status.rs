// crates/clusterviz-core/src/event/status.rs

/// Named simulation status bits, highest bit first.
pub const STATUS_BITS: [(u32, &str); 9] = [
    (31, "Endpoint"),
    (30, "CreatedInSimulation"),
    (29, "Backscatter"),
    (28, "VertexIsNotEndpointOfParent"),
    (27, "DecayedInTracker"),
    (26, "DecayedInCalorimeter"),
    (25, "LeftDetector"),
    (24, "Stopped"),
    (23, "Overlay"),
];

/// Names of the set status bits, in table order. Unnamed bits are ignored.
pub fn status_labels(status: u32) -> Vec<&'static str> {
    STATUS_BITS
        .iter()
        .filter(|(bit, _)| (status >> *bit) & 1 == 1)
        .map(|&(_, name)| name)
        .collect()
}

/// Hover-text form: each label indented two spaces, `<br>` separated.
pub fn status_text(status: u32) -> String {
    let labels = status_labels(status);
    if labels.is_empty() {
        return "  ".to_string();
    }
    format!("  {}", labels.join("<br>  "))
}
