use std::io::{
    BufRead,
    Write
};
use std::path::PathBuf;

use log::{
    debug,
    info,
    warn
};

use crate::driver::prompt::{
    ask,
    is_yes,
    parse_number
};
use crate::error::AppError;
use crate::math::function::mathfunction::MathFunction;
use crate::math::function::trigfunction::TrigFunction;
use crate::report::format;
use crate::report::outputfile::{
    open_output,
    OutputMode
};
use crate::report::reportwriter::ReportWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub processed: usize,
    pub undefined: usize,
}

pub struct InteractiveSession {
    output: PathBuf,
    file_enabled: bool,
    function: TrigFunction,
    summary: SessionSummary,
}

impl InteractiveSession {
    pub fn new(output: PathBuf) -> InteractiveSession {
        InteractiveSession {
            output,
            file_enabled: true,
            function: TrigFunction::new(),
            summary: SessionSummary::default(),
        }
    }

    pub fn file_enabled(&self) -> bool {
        self.file_enabled
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, console: &mut W) -> Result<SessionSummary, AppError> {
        for text in format::banner(self.function.expression()) {
            writeln!(console, "{}", text)?;
        }
        self.clear_output(console)?;

        loop {
            let Some(answer) = ask(input, console, "Enter x: ")? else {
                break;
            };
            match parse_number("x", &answer) {
                Ok(x) => self.process(x, console)?,
                Err(error) => {
                    writeln!(console, "Error: {}", error)?;
                    continue;
                }
            }

            match ask(input, console, "Continue? (y/n): ")? {
                Some(answer) if is_yes(&answer) => continue,
                _ => break,
            }
        }

        let output = self.output.display().to_string();
        let line = if self.file_enabled {
            format::summary(self.summary.processed, self.summary.undefined, &output)
        } else {
            format::summary_console_only(self.summary.processed, self.summary.undefined)
        };
        writeln!(console, "{}", line)?;
        info!("session finished: {:?}", self.summary);
        Ok(self.summary)
    }

    fn clear_output<W: Write>(&mut self, console: &mut W) -> Result<(), AppError> {
        if let Err(error) = open_output(&self.output, OutputMode::Truncate) {
            warn!("{}", error);
            writeln!(console, "Error: {}; continuing without file output", error)?;
            self.file_enabled = false;
        }
        Ok(())
    }

    /// Evaluates one `x`. Accepted samples are appended to the file,
    /// domain errors are only shown on the console.
    pub fn process<W: Write>(&mut self, x: f64, console: &mut W) -> Result<(), AppError> {
        self.summary.processed += 1;
        match self.function.components(x) {
            Ok(components) => {
                debug!("x = {} -> {}", x, components.value());
                let mut writer = self.writer(console)?;
                writer.emit_block(&components)?;
                writer.flush()?;
            }
            Err(error) => {
                debug!("x = {} -> {:?}", x, error);
                self.summary.undefined += 1;
                writeln!(console, "{}", format::domain_error(&error))?;
            }
        }
        Ok(())
    }

    fn writer<'a, W: Write>(&mut self, console: &'a mut W) -> Result<ReportWriter<&'a mut W>, AppError> {
        if !self.file_enabled {
            return Ok(ReportWriter::console_only(console));
        }
        match open_output(&self.output, OutputMode::Append) {
            Ok(file) => Ok(ReportWriter::new(console, std::io::BufWriter::new(file))),
            Err(error) => {
                warn!("{}", error);
                writeln!(console, "Error: {}; continuing without file output", error)?;
                self.file_enabled = false;
                Ok(ReportWriter::console_only(console))
            }
        }
    }
}
