use std::convert::Infallible;
use std::fmt;

use clap::ValueEnum;

/// Which pipeline stage output to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// In-memory key components.
    Raw,
    /// DER bytes.
    Encoded,
    /// PEM text.
    #[default]
    Pem,
}

impl Mode {
    /// Parses a mode name. Anything unknown falls back to [Mode::Pem] rather than failing.
    pub fn parse_lenient(value: &str) -> Result<Self, Infallible> {
        Ok(Self::from(value))
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "raw" => Mode::Raw,
            "encoded" => Mode::Encoded,
            _ => Mode::Pem,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Raw => write!(f, "raw"),
            Mode::Encoded => write!(f, "encoded"),
            Mode::Pem => write!(f, "pem"),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text, one labelled entry per key
    #[default]
    #[value(name = "Plain")]
    Plain,
    /// Both keys in a single json document
    #[value(name = "Json")]
    Json,
}
