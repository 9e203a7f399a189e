use std::io::{
    self,
    Write
};
use std::process;

use clap::Parser;

use trigtable::configuration::{
    Configuration,
    Mode
};
use trigtable::driver::batch;
use trigtable::driver::interactive::InteractiveSession;
use trigtable::error::AppError;

fn main() {
    let configuration = Configuration::parse();
    env_logger::Builder::new()
        .filter_level(configuration.log_level())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = io::stdout().lock();

    let result: Result<(), AppError> = match configuration.mode() {
        Mode::Batch { output, config } => Mode::batch_options(output, config)
            .and_then(|options| batch::run(&mut input, &mut console, &options))
            .map(|_| ()),
        Mode::Interactive { output } => InteractiveSession::new(output)
            .run(&mut input, &mut console)
            .map(|_| ()),
    };

    if let Err(error) = result {
        log::error!("{:?}", error);
        let _ = writeln!(console, "Error: {}", error);
        let _ = console.flush();
        process::exit(error.exit_code());
    }
}
