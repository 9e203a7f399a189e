use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand
};
use log::LevelFilter;

use crate::driver::batch::BatchOptions;
use crate::error::AppError;
use crate::report::outputfile::{
    BATCH_OUTPUT_FILE,
    INTERACTIVE_OUTPUT_FILE
};
use crate::scan::scanconfig::ScanConfig;

#[derive(Debug, Parser)]
#[command(name = "trigtable")]
#[command(about = "Tabulates y(x) = sqrt(cot(x)*tan(x)) to the console and a text file")]
#[command(version)]
pub struct Configuration {
    /// Raise log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Scan [a, b] with step h and write a table
    Batch {
        /// Output file, overwritten on every run
        #[arg(short, long, default_value = BATCH_OUTPUT_FILE)]
        output: PathBuf,
        /// JSON file with {"start", "end", "step"} instead of prompting
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Evaluate one x at a time until told to stop
    Interactive {
        /// Output file, cleared at startup and appended per value
        #[arg(short, long, default_value = INTERACTIVE_OUTPUT_FILE)]
        output: PathBuf,
    },
}

impl Configuration {
    pub fn mode(&self) -> Mode {
        self.mode.clone().unwrap_or(Mode::Batch {
            output: PathBuf::from(BATCH_OUTPUT_FILE),
            config: None,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

impl Mode {
    pub fn batch_options(output: PathBuf, config: Option<PathBuf>) -> Result<BatchOptions, AppError> {
        let scan = match config {
            Some(path) => Some(ScanConfig::from_reader(path)?),
            None => None,
        };
        Ok(BatchOptions::new(output, scan))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_batch() {
        let configuration = Configuration::parse_from(["trigtable"]);
        match configuration.mode() {
            Mode::Batch { output, config } => {
                assert_eq!(output, PathBuf::from("result.txt"));
                assert!(config.is_none());
            }
            mode => panic!("unexpected mode {:?}", mode),
        }
        assert_eq!(configuration.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn interactive_defaults_to_results_txt() {
        let configuration = Configuration::parse_from(["trigtable", "interactive", "-vv"]);
        match configuration.mode() {
            Mode::Interactive { output } => assert_eq!(output, PathBuf::from("results.txt")),
            mode => panic!("unexpected mode {:?}", mode),
        }
        assert_eq!(configuration.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn batch_accepts_output_and_config() {
        let configuration =
            Configuration::parse_from(["trigtable", "-v", "batch", "--output", "t.txt", "--config", "s.json"]);
        match configuration.mode() {
            Mode::Batch { output, config } => {
                assert_eq!(output, PathBuf::from("t.txt"));
                assert_eq!(config, Some(PathBuf::from("s.json")));
            }
            mode => panic!("unexpected mode {:?}", mode),
        }
        assert_eq!(configuration.log_level(), LevelFilter::Info);
    }
}
