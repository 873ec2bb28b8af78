//! Command-line interface for serving single generation requests

use crate::algorithm::random::SeededSource;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, file_system_error};
use crate::io::response::generate_fleet;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fleetgen")]
#[command(
    author,
    version,
    about = "Generate a random battleship-solitaire fleet from a JSON request"
)]
/// Command-line arguments for the fleet generation tool
pub struct Cli {
    /// JSON request file; reads stdin when omitted
    #[arg(value_name = "REQUEST")]
    pub request: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the response to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs one generation request from file or stdin to file or stdout
pub struct RequestProcessor {
    cli: Cli,
}

impl RequestProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the request, generate, and emit the response
    ///
    /// Generation failures are data, not errors: infeasible or exhausted
    /// requests print their `{"error": ...}` payload like any response and
    /// the process still exits zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be read or the response
    /// cannot be written.
    pub fn process(&self) -> Result<()> {
        let input = self.read_request()?;
        let mut rng = SeededSource::new(self.cli.seed);
        let response = generate_fleet(&input, &mut rng);
        self.write_response(&response)
    }

    fn read_request(&self) -> Result<String> {
        match &self.cli.request {
            Some(path) => load_request(path),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|source| crate::io::error::FleetError::StdinRead { source })?;
                Ok(input)
            }
        }
    }

    // Allow print for emitting the response payload itself
    #[allow(clippy::print_stdout)]
    fn write_response(&self, response: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => std::fs::write(path, format!("{response}\n"))
                .map_err(|source| file_system_error(path, "write", source)),
            None => {
                println!("{response}");
                Ok(())
            }
        }
    }
}

/// Load a JSON request from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_request(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| file_system_error(path, "read", source))
}
