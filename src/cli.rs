use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roimap")]
#[command(about = "ROI projection and value-realization tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute savings, ROI and value realization
    Report {
        /// Configuration file (defaults to .roimap.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Display currency (overrides [display] currency)
        #[arg(long, value_enum)]
        currency: Option<Currency>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override an input or assumption, e.g. --set hourly_cost=95
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the savings drivers and their hour estimates
    Drivers {
        /// Language and currency used for labels
        #[arg(long, value_enum)]
        currency: Option<Currency>,
    },

    /// Check inputs and assumptions, reporting every problem
    Validate {
        /// Configuration file (defaults to .roimap.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override an input or assumption, e.g. --set hourly_cost=95
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Report { verbosity, .. } | Commands::Validate { verbosity, .. } => {
                *verbosity
            }
            Commands::Drivers { .. } | Commands::Init { .. } => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Currency {
    Usd,
    Eur,
    Krw,
    Jpy,
}

impl Currency {
    pub fn id(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Krw => "krw",
            Currency::Jpy => "jpy",
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
