use super::domainerror::DomainError;
use super::mathfunction::MathFunction;

/// Below this magnitude `sin(x)` or `cos(x)` is treated as zero.
pub const EPSILON: f64 = 0.001;

// ─────────────────────────────────────────────
// TrigComponents
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigComponents {
    x: f64,
    tan: f64,
    cot: f64,
    product: f64,
}

impl TrigComponents {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn tan(&self) -> f64 {
        self.tan
    }

    pub fn cot(&self) -> f64 {
        self.cot
    }

    pub fn product(&self) -> f64 {
        self.product
    }

    /// `sqrt(cot(x) * tan(x))`. The radicand was checked when the
    /// components were built.
    pub fn value(&self) -> f64 {
        self.product.sqrt()
    }
}

// ─────────────────────────────────────────────
// TrigFunction: y(x) = sqrt(cot(x) * tan(x))
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct TrigFunction;

impl TrigFunction {
    pub fn new() -> TrigFunction {
        TrigFunction
    }

    pub fn components(&self, x: f64) -> Result<TrigComponents, DomainError> {
        let (sin, cos) = x.sin_cos();
        if sin.abs() < EPSILON || cos.abs() < EPSILON {
            return Err(DomainError::NearSingular { x });
        }

        let tan = sin / cos;
        let cot = cos / sin;
        let product = cot * tan;
        // cot * tan is identically 1 here; kept as a guard on the sqrt argument.
        if !product.is_finite() || product < 0.0 {
            return Err(DomainError::NegativeRadicand { x, product });
        }
        Ok(TrigComponents { x, tan, cot, product })
    }
}

impl MathFunction for TrigFunction {
    fn calculate(&self, x: f64) -> Result<f64, DomainError> {
        self.components(x).map(|components| components.value())
    }

    fn expression(&self) -> &str {
        "sqrt(cot(x)*tan(x))"
    }
}
