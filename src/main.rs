use amdm::{
    cli::execute_command,
    commands::{cli_command, PARAMETER_VERBOSE},
    configuration::Configuration,
    error::CliError,
    error_utils::report_error,
    exit_codes::AmdmExitCode,
    setup::{ensure_ready, InquirePrompter},
};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("amdm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(matches: &clap::ArgMatches) -> Result<(), CliError> {
    let configuration_path = Configuration::get_default_configuration_file_path()?;
    debug!("Using configuration file {}", configuration_path.display());
    let mut configuration = Configuration::load_from_file(&configuration_path)?;

    let mut prompter = InquirePrompter;
    ensure_ready(&mut configuration, &mut prompter, &configuration_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(
        matches,
        &mut configuration,
        &configuration_path,
        &mut prompter,
        &mut out,
    )
    .await?;
    out.flush().map_err(amdm::actions::CliActionError::from)?;
    Ok(())
}

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = match cli_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                AmdmExitCode::Failure
            } else {
                AmdmExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    init_logging(matches.get_flag(PARAMETER_VERBOSE));

    if let Err(e) = run(&matches).await {
        report_error(&e);
        std::process::exit(e.exit_code().code());
    }
}
