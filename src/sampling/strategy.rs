use crate::sampling::Point;

/// Decides whether two neighbouring finite samples should be drawn as one
/// connected line or split into separate polylines.
///
/// Non-finite samples always split; a strategy only sees finite neighbours.
pub trait DiscontinuityStrategy: Send + Sync {
    fn is_break(&self, previous: Point, next: Point) -> bool;
}

/// Connects every pair of finite neighbours.
#[derive(Debug, Copy, Clone, Default)]
pub struct NonFiniteOnly;

impl DiscontinuityStrategy for NonFiniteOnly {
    fn is_break(&self, _previous: Point, _next: Point) -> bool {
        false
    }
}

/// Splits wherever the secant slope between neighbours is steeper than
/// `max_slope`, which catches poles such as `tan ( x )` that never sample to
/// an actual infinity.
#[derive(Debug, Copy, Clone)]
pub struct SlopeThreshold {
    pub max_slope: f64,
}

impl SlopeThreshold {
    pub const DEFAULT_MAX_SLOPE: f64 = 999.0;

    pub fn new(max_slope: f64) -> Self {
        Self { max_slope }
    }
}

impl Default for SlopeThreshold {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SLOPE)
    }
}

impl DiscontinuityStrategy for SlopeThreshold {
    fn is_break(&self, previous: Point, next: Point) -> bool {
        let slope = (next.y - previous.y) / (next.x - previous.x);
        // NaN from a zero-width step compares false and keeps the line.
        slope.abs() > self.max_slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_non_finite_only_never_breaks() {
        assert!(!NonFiniteOnly.is_break(point(0.0, 0.0), point(0.01, 1e9)));
    }

    #[test]
    fn test_slope_threshold() {
        let strategy = SlopeThreshold::default();
        assert!(!strategy.is_break(point(0.0, 0.0), point(0.01, 5.0)));
        assert!(strategy.is_break(point(0.0, 0.0), point(0.01, 10.0)));
        assert!(strategy.is_break(point(0.0, 10.0), point(0.01, 0.0)));
    }

    #[test]
    fn test_custom_threshold() {
        let strategy = SlopeThreshold::new(1.0);
        assert!(!strategy.is_break(point(0.0, 0.0), point(1.0, 1.0)));
        assert!(strategy.is_break(point(0.0, 0.0), point(1.0, 1.5)));
    }
}
