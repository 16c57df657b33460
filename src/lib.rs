mod display;
pub mod encoding;
pub mod program_config;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use encoding::prefix_integer;
use encoding::prefix_width::PrefixWidth;
use log::debug;
use program_config::integer_literal::{parse_prefix_bits, parse_value};
use program_config::program_constants::{usage_message, DEFAULT_PROGRAM_NAME};
use std::error::Error;

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

/// Encode an integer with an N-bit prefix (RFC 7541 §5.1) and print the bytes
#[derive(ClapParser, Debug)]
#[command(name = "encode", version)]
pub struct CliConfig {
    /// The prefix width in bits, between 1 and 8
    #[arg(allow_hyphen_values = true)]
    prefix_bits: String,

    /// The value to encode; read as hexadecimal if it contains "0x"
    #[arg(allow_hyphen_values = true)]
    number: String,
}

#[derive(Debug)]
pub enum ArgsError {
    /// Not enough arguments; holds the usage message to print
    Usage(String),
    Clap(clap::Error),
}

impl CliConfig {
    pub fn build(args: &[String]) -> Result<CliConfig, ArgsError> {
        CliConfig::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::MissingRequiredArgument => {
                let program_name = args
                    .first()
                    .map(String::as_str)
                    .unwrap_or(DEFAULT_PROGRAM_NAME);
                ArgsError::Usage(usage_message(program_name))
            }
            _ => ArgsError::Clap(err),
        })
    }
}

pub fn run(config: CliConfig) -> Result<(), Box<dyn Error>> {
    let bytes = encode_arguments(&config)?;
    println!("{}", display::hex_line(&bytes));
    println!("{}", display::binary_lines(&bytes));
    Ok(())
}

fn encode_arguments(config: &CliConfig) -> Result<Vec<u8>, Box<dyn Error>> {
    let prefix_width = PrefixWidth::new(parse_prefix_bits(&config.prefix_bits)?)?;
    let value = parse_value(&config.number)?;
    debug!("encoding {} with a {} prefix", value, prefix_width);

    Ok(prefix_integer::encode(prefix_width, value))
}
