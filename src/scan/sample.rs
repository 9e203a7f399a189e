use crate::math::function::domainerror::DomainError;
use crate::math::function::mathfunction::MathFunction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    x: f64,
    outcome: Result<f64, DomainError>,
}

impl Sample {
    pub fn new(x: f64, outcome: Result<f64, DomainError>) -> Sample {
        Sample { x, outcome }
    }

    pub fn evaluate<F: MathFunction>(function: &F, x: f64) -> Sample {
        Sample::new(x, function.calculate(x))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn outcome(&self) -> Result<f64, DomainError> {
        self.outcome
    }

    pub fn value(&self) -> Option<f64> {
        self.outcome.ok()
    }

    pub fn is_defined(&self) -> bool {
        self.outcome.is_ok()
    }
}
