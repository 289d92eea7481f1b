// File: crates/gpxchart-core/src/grid.rs
// Summary: Grid/tick position helpers.

/// Upper bound on lines produced for one axis; later multiples are dropped.
pub const MAX_LINES: usize = 10_000;

/// Multiples of `step` from `step * trunc(min / step)` up to (excluding) `max`.
///
/// The first multiple can lie below `min` when `min` is positive; callers
/// decide whether to drop it. Returns nothing for a non-positive or
/// non-finite step, and at most the first [`MAX_LINES`] values otherwise.
pub fn multiples(step: f64, min: f64, max: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let first = (min / step).trunc();
    let count = ((max - first * step) / step).ceil();
    if !(count > 0.0) {
        return Vec::new();
    }
    (0..(count.min(MAX_LINES as f64) as usize))
        .map(|i| (first + i as f64) * step)
        .filter(|&v| v < max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_cover_range() {
        assert_eq!(multiples(100.0, 0.0, 350.0), vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(multiples(100.0, -150.0, 100.0), vec![-100.0, 0.0]);
        assert_eq!(multiples(100.0, 250.0, 400.0), vec![200.0, 300.0]);
    }

    #[test]
    fn refuses_bad_steps() {
        assert!(multiples(0.0, 0.0, 1.0).is_empty());
        assert!(multiples(-1.0, 0.0, 1.0).is_empty());
        assert!(multiples(f64::NAN, 0.0, 1.0).is_empty());
    }

    #[test]
    fn dense_steps_stop_at_cap() {
        let lines = multiples(50.0, 0.0, 600_000.0);
        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(lines[0], 0.0);
        assert_eq!(lines[MAX_LINES - 1], 50.0 * (MAX_LINES - 1) as f64);
        assert_eq!(multiples(1e-9, 0.0, 1.0).len(), MAX_LINES);
    }
}
