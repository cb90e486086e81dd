use thiserror::Error;
use tracing::info;

use crate::generator::KeyPairGenerator;
use crate::generator::error::KeyPairGeneratorError;
use crate::output::KeyPairOutput;
use crate::parameters::{Mode, OutputFormat};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Generator(#[from] KeyPairGeneratorError),
    #[error("serializing output: `{0}`")]
    Serialize(#[from] serde_json::Error),
}

/// Runs the pipeline stage selected by a [Mode] and renders its result.
pub struct GenerateCommand<G>
where
    G: KeyPairGenerator,
{
    generator: G,
}

impl<G> GenerateCommand<G>
where
    G: KeyPairGenerator,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generates a key pair in the given mode. Only the stage matching `mode` is invoked.
    pub fn generate(&self, mode: Mode) -> Result<KeyPairOutput, GenerateError> {
        info!("starting the key pair generation with {mode} mode");
        let output = match mode {
            Mode::Raw => KeyPairOutput::raw(&self.generator.generate_raw_key_pair()?),
            Mode::Encoded => KeyPairOutput::encoded(&self.generator.generate_encoded_key_pair()?),
            Mode::Pem => KeyPairOutput::pem(&self.generator.generate_pem_key_pair()?),
        };
        info!("{mode} key pair generated successfully");
        Ok(output)
    }

    /// Generates a key pair and renders it in the requested output format.
    pub fn run(&self, mode: Mode, format: OutputFormat) -> Result<String, GenerateError> {
        let output = self.generate(mode)?;
        match format {
            OutputFormat::Plain => Ok(output.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
        }
    }
}
