use clap::Parser;
use tracing_subscriber::EnvFilter;

use a11yhelper::cli;
use a11yhelper::config;
use a11yhelper::errors::A11yError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging; --quiet wins over -v
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Scan(args) => cli::scan::handle_scan(args).await,
        cli::Commands::Estimate(args) => cli::estimate::handle_estimate(args).await,
        cli::Commands::Contrast(args) => cli::contrast::handle_contrast(args).await,
        cli::Commands::Glossary(args) => cli::glossary::handle_glossary(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                A11yError::Config(_) => 2,
                A11yError::InvalidTarget(_) => 5,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), A11yError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
