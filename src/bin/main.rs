use std::error::Error;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use kuncisurga::commands::generate::GenerateCommand;
use kuncisurga::generator::{DEFAULT_BIT_SIZE, Generator, GeneratorOption};
use kuncisurga::parameters::{Mode, OutputFormat};
use tracing::{Level, error, info};

#[derive(Parser, Debug)]
#[command(name = "kuncisurga-cli", about = "Generates an RSA key pair")]
struct Cli {
    /// Output mode: raw, encoded or pem. Unknown values fall back to pem.
    #[arg(long, default_value = "pem", value_parser = Mode::parse_lenient)]
    mode: Mode,

    /// Modulus length of the generated key, in bits
    #[arg(long, default_value_t = DEFAULT_BIT_SIZE)]
    bit_size: usize,

    /// Select how the key pair is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output_format: OutputFormat,

    /// Enable debug logs
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("error generating key pair: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    let generator = Generator::new([GeneratorOption::BitSize(cli.bit_size)]);
    let output = GenerateCommand::new(generator).run(cli.mode, cli.output_format)?;

    match cli.output_format {
        OutputFormat::Plain => print!("{output}"),
        OutputFormat::Json => println!("{output}"),
    }

    info!("key pair generation completed in {:?}", start.elapsed());
    Ok(())
}
