use super::domainerror::DomainError;

pub trait MathFunction {
    fn calculate(&self, x: f64) -> Result<f64, DomainError>;

    /// Human readable form, used in report headers.
    fn expression(&self) -> &str;
}
