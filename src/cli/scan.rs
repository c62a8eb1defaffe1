use std::time::Instant;

use console::style;

use crate::cli::commands::ScanArgs;
use crate::cli::{load_config, parse_wire};
use crate::errors::A11yError;
use crate::reporting::format_report_markdown;
use crate::scan::build_provider;
use crate::utils::formatting::format_duration;

pub async fn handle_scan(args: ScanArgs) -> Result<(), A11yError> {
    let mut config = load_config(args.config.as_deref()).await?;
    if let Some(provider) = &args.provider {
        config.scan.provider = parse_wire(provider, "provider")?;
    }

    let client = reqwest::Client::new();
    let provider = build_provider(&config, client);

    let started = Instant::now();
    let report = provider.scan(&args.url).await?;
    let elapsed = started.elapsed().as_millis() as u64;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score_label = format!("{}/100", report.score);
    let score_styled = if report.score >= 90 {
        style(score_label).green().bold()
    } else if report.score >= 50 {
        style(score_label).yellow().bold()
    } else {
        style(score_label).red().bold()
    };
    println!(
        "Scanned {} in {} (provider: {})",
        args.url,
        format_duration(elapsed),
        provider.name()
    );
    println!("Score: {}  Issues: {}\n", score_styled, report.issues_count);
    println!("{}", format_report_markdown(&args.url, &report));

    Ok(())
}
