use std::fs::File;
use std::io::{
    BufWriter,
    Write
};

use crate::math::function::trigfunction::TrigComponents;
use crate::report::format;
use crate::report::outputfile::ReportError;
use crate::scan::sample::Sample;

/// Writes every report line to the console and, when present, to a file.
/// Without a file sink the writer runs console-only.
pub struct ReportWriter<C: Write, F: Write = BufWriter<File>> {
    console: C,
    file: Option<F>,
}

impl<C: Write, F: Write> ReportWriter<C, F> {
    pub fn new(console: C, file: F) -> ReportWriter<C, F> {
        ReportWriter { console, file: Some(file) }
    }

    pub fn console_only(console: C) -> ReportWriter<C, F> {
        ReportWriter { console, file: None }
    }

    pub fn line(&mut self, text: &str) -> Result<(), ReportError> {
        writeln!(self.console, "{}", text)?;
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{}", text)?;
        }
        Ok(())
    }

    pub fn header(&mut self) -> Result<(), ReportError> {
        self.line(format::TABLE_HEADER)?;
        self.line(&format::separator())
    }

    pub fn emit(&mut self, sample: &Sample) -> Result<(), ReportError> {
        self.line(&format::row(sample))
    }

    pub fn emit_table<I>(&mut self, samples: I) -> Result<usize, ReportError>
    where
        I: IntoIterator<Item = Sample>,
    {
        self.header()?;
        let mut count = 0;
        for sample in samples {
            self.emit(&sample)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn emit_block(&mut self, components: &TrigComponents) -> Result<(), ReportError> {
        for text in format::block(components) {
            self.line(&text)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (C, Option<F>) {
        (self.console, self.file)
    }
}
