//! Value-to-pixel scale transformations and tick generation.

mod linear;
mod temporal;

pub use linear::LinearScale;
pub use temporal::TemporalScale;

/// Generate `count` evenly spaced tick candidates between `min` and `max`,
/// inclusive of both endpoints. The values are label candidates, not rounded
/// "nice" numbers. A zero-range domain yields `count` copies of `min`.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + step * i as f64).collect()
}
