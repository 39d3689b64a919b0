//! Linear scale transformation.

/// A linear scale mapping a numeric domain onto a pixel range.
///
/// Zero-range domains map every value to 0 rather than dividing by zero; for
/// bars and histograms a zero maximum means "no data", so collapsing to the
/// range origin keeps degenerate input renderable. All chart types share this
/// policy.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    min: f64,
    max: f64,
    range_px: f64,
}

impl LinearScale {
    /// Create a new linear scale over `[min, max]` mapped to `[0, range_px]`.
    pub fn new(min: f64, max: f64, range_px: f64) -> Self {
        LinearScale { min, max, range_px }
    }

    /// Transform a domain value to a pixel position.
    pub fn position(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range * self.range_px
    }

    /// The domain this scale covers.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
