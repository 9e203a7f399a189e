//! Pure text builders for the report. Every line goes through here so the
//! console and the file see exactly the same characters.

use crate::math::function::domainerror::DomainError;
use crate::math::function::trigfunction::TrigComponents;
use crate::scan::sample::Sample;

pub const UNDEFINED: &str = "undefined";
pub const TABLE_HEADER: &str = "x\t\ty(x)";
const RULE_WIDTH: usize = 24;

pub fn fixed(value: f64) -> String {
    format!("{:.4}", value)
}

pub fn separator() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn row(sample: &Sample) -> String {
    match sample.value() {
        Some(y) => format!("{}\t{}", fixed(sample.x()), fixed(y)),
        None => format!("{}\t{}", fixed(sample.x()), UNDEFINED),
    }
}

pub fn block(components: &TrigComponents) -> Vec<String> {
    vec![
        format!("x      = {}", fixed(components.x())),
        format!("tan(x) = {}", fixed(components.tan())),
        format!("cot(x) = {}", fixed(components.cot())),
        format!("y(x)   = {}", fixed(components.value())),
    ]
}

pub fn banner(expression: &str) -> Vec<String> {
    let title = format!("y(x) = {}", expression);
    vec!["=".repeat(title.len()), title.clone(), "=".repeat(title.len())]
}

pub fn domain_error(error: &DomainError) -> String {
    format!("Error: {}", error)
}

pub fn summary(processed: usize, undefined: usize, path: &str) -> String {
    format!(
        "Processed {} value(s), {} undefined. Results saved to file {}",
        processed, undefined, path
    )
}

pub fn summary_console_only(processed: usize, undefined: usize) -> String {
    format!(
        "Processed {} value(s), {} undefined. File output was disabled.",
        processed, undefined
    )
}
