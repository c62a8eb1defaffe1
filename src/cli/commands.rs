use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "a11yhelper", version, about = "Web accessibility scanning and estimation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Scan a URL and print the accessibility report
    Scan(ScanArgs),
    /// Estimate remediation cost for a site
    Estimate(EstimateArgs),
    /// Check the contrast ratio of a color pair
    Contrast(ContrastArgs),
    /// Search the accessibility glossary
    Glossary(GlossaryArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Target page URL
    pub url: String,

    /// Scan provider: heuristic, audit (overrides config)
    #[arg(long)]
    pub provider: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output raw JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct EstimateArgs {
    /// Number of basic pages
    #[arg(long, default_value = "0")]
    pub basic: u32,

    /// Number of intermediate pages
    #[arg(long, default_value = "0")]
    pub intermediate: u32,

    /// Number of advanced pages
    #[arg(long, default_value = "0")]
    pub advanced: u32,

    /// Tech stack: wordpress, react, angular, vue, html-css-js, other
    #[arg(long, default_value = "html-css-js")]
    pub stack: String,

    /// Timeline: standard, expedited, urgent
    #[arg(long, default_value = "standard")]
    pub timeline: String,

    /// Add-on service, repeatable: wcag-testing, remediation, session,
    /// dev-session, training
    #[arg(long = "service")]
    pub services: Vec<String>,

    /// Output currency (USD skips the exchange lookup)
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ContrastArgs {
    /// Foreground color, 6-digit hex
    pub foreground: String,

    /// Background color, 6-digit hex
    pub background: String,

    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct GlossaryArgs {
    /// Search query (omit to list every term)
    pub query: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
