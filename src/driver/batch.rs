use std::io::{
    BufRead,
    BufWriter,
    Write
};
use std::path::PathBuf;

use log::{
    debug,
    info
};

use crate::driver::prompt::ask_number;
use crate::error::AppError;
use crate::math::function::trigfunction::TrigFunction;
use crate::report::outputfile::{
    open_output,
    OutputMode
};
use crate::report::reportwriter::ReportWriter;
use crate::scan::scanconfig::ScanConfig;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    output: PathBuf,
    scan: Option<ScanConfig>,
}

impl BatchOptions {
    pub fn new(output: PathBuf, scan: Option<ScanConfig>) -> BatchOptions {
        BatchOptions { output, scan }
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    pub fn scan(&self) -> Option<&ScanConfig> {
        self.scan.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub samples: usize,
    pub undefined: usize,
}

pub fn read_scan_config<R: BufRead, W: Write>(input: &mut R, console: &mut W) -> Result<ScanConfig, AppError> {
    let start = ask_number(input, console, "Enter interval start a: ", "interval start a")?;
    let end = ask_number(input, console, "Enter interval end b: ", "interval end b")?;
    let step = ask_number(input, console, "Enter step h: ", "step h")?;
    Ok(ScanConfig::new(start, end, step)?)
}

/// Reads and validates the scan, then writes the whole table to the console
/// and to the output file. Nothing is opened before validation succeeds.
pub fn run<R: BufRead, W: Write>(input: &mut R, console: &mut W, options: &BatchOptions) -> Result<BatchSummary, AppError> {
    let config = match options.scan() {
        Some(config) => *config,
        None => read_scan_config(input, console)?,
    };
    info!(
        "scanning [{}, {}] with step {} ({} points)",
        config.start(),
        config.end(),
        config.step(),
        config.len()
    );

    let file = open_output(options.output(), OutputMode::Truncate)?;
    let function = TrigFunction::new();
    let mut summary = BatchSummary { samples: 0, undefined: 0 };
    {
        let mut writer = ReportWriter::new(&mut *console, BufWriter::new(file));
        writer.header()?;
        for sample in config.samples(&function) {
            debug!("x = {} -> {:?}", sample.x(), sample.outcome());
            if !sample.is_defined() {
                summary.undefined += 1;
            }
            writer.emit(&sample)?;
            summary.samples += 1;
        }
        writer.flush()?;
    }

    writeln!(console, "Results saved to file {}", options.output().display())?;
    info!("wrote {} samples ({} undefined)", summary.samples, summary.undefined);
    Ok(summary)
}
