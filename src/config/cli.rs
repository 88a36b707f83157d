use crate::utils::error::{Result, SkylineError};
use clap::Parser;

/// Upper bound on user-supplied arguments, flags included.
pub const MAX_ARGUMENTS: usize = 4;

#[derive(Debug, Clone, Parser)]
#[command(name = "skyline")]
#[command(about = "Computes the skyline of a city with divide and conquer")]
#[command(override_usage = "skyline [-t] [-h] <INPUT> [OUTPUT]")]
pub struct CliConfig {
    /// File with one building per line: left,right,height
    pub input: String,

    /// File to store the skyline in; it must not exist yet
    pub output: Option<String>,

    /// Trace every recursive call and its parameters
    #[arg(short = 't', long)]
    pub trace: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Reject buildings with left >= right or a negative height
    #[arg(long)]
    pub strict: bool,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Checks the raw argument count (program name excluded) before parsing.
pub fn check_argument_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(SkylineError::ConfigError {
            message: "Input data required. Use -h for more info.".to_string(),
        });
    }
    if count > MAX_ARGUMENTS {
        return Err(SkylineError::ConfigError {
            message: format!(
                "Too many arguments: {} given, at most {} accepted",
                count, MAX_ARGUMENTS
            ),
        });
    }
    Ok(())
}
