use anyhow::Result;
use roimap::cli::{parse_args, Commands};
use roimap::commands::{self, ReportConfig, ValidateConfig};
use roimap::errors::RoiError;
use roimap::locale::Locale;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status for problems the user can fix in their inputs or config.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = parse_args();
    init_tracing(cli.command.verbosity());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report {
            config,
            currency,
            format,
            output,
            overrides,
            plain,
            verbosity: _,
        } => commands::handle_report(ReportConfig {
            config,
            currency,
            format,
            output,
            overrides,
            plain,
        }),
        Commands::Drivers { currency } => {
            let locale = Locale::resolve(currency.map(|c| c.id()))?;
            commands::list_drivers(&locale);
            Ok(())
        }
        Commands::Validate {
            config,
            overrides,
            verbosity: _,
        } => commands::validate_inputs(ValidateConfig { config, overrides }),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RoiError>() {
        Some(err) => {
            if let Some(path) = err.path() {
                eprintln!("  in {}", path.display());
            }
            if err.is_user_fixable() {
                ExitCode::from(EXIT_INVALID_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
        None => ExitCode::FAILURE,
    }
}

/// Logs go to stderr so report output on stdout stays machine-readable.
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
