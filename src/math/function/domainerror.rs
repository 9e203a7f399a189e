use thiserror::Error;

/// Raised per sample when `y(x)` has no real value at `x`.
/// Never fatal: the scan moves on to the next point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("function is undefined at x = {x:.4} (sin(x) or cos(x) is near zero)")]
    NearSingular { x: f64 },
    #[error("function is undefined at x = {x:.4} (negative radicand {product:.4})")]
    NegativeRadicand { x: f64, product: f64 },
}
