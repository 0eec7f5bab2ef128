use serde::{Deserialize, Serialize};

/// A point in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// Values outside the input range extrapolate.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        assert_eq!(map_range(0.0, 0.0, 30.0, 0.0, 3000.0), 0.0);
        assert_eq!(map_range(30.0, 0.0, 30.0, 0.0, 3000.0), 3000.0);
        assert_eq!(map_range(15.0, 0.0, 30.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn extrapolates_past_input_range() {
        assert_eq!(map_range(60.0, 0.0, 30.0, 0.0, 10.0), 20.0);
    }

    #[test]
    fn degenerate_input_range() {
        assert_eq!(map_range(5.0, 1.0, 1.0, 2.0, 4.0), 2.0);
    }
}
