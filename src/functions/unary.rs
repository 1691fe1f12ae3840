/// Rounds to the nearest integer with ties going toward positive infinity,
/// so `-2.5` becomes `-2.0` rather than `f64::round`'s `-3.0`.
pub fn round_half_up(x: f64) -> f64 {
    // `x - floor` never rounds across 0.5; `x + 0.5` can land on the next integer.
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
