use clap::Parser;
use proposal_recap::cli::{execute_command, get_log_level, Cli};
use proposal_recap::config::ConfigLoader;
use proposal_recap::error::RecapError;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::new().with_explicit(cli.config.clone()).load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    let log_level = config
        .log_level
        .clone()
        .unwrap_or_else(|| get_log_level(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("proposal-recap started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let stdout = std::io::stdout();
    let result = execute_command(cli.command, &config, &mut stdout.lock());

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        match e.downcast_ref::<RecapError>() {
            Some(recap) => eprintln!("Error: {}", recap.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
