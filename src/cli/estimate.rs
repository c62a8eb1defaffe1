use console::style;

use crate::cli::commands::EstimateArgs;
use crate::cli::{load_config, parse_wire};
use crate::cost::{self, exchange, CostInputs};
use crate::errors::A11yError;
use crate::utils::formatting::format_money;

pub async fn handle_estimate(args: EstimateArgs) -> Result<(), A11yError> {
    let config = load_config(args.config.as_deref()).await?;

    let inputs = CostInputs {
        basic_pages: args.basic,
        intermediate_pages: args.intermediate,
        advanced_pages: args.advanced,
        tech_stack: parse_wire(&args.stack, "tech stack")?,
        timeline: parse_wire(&args.timeline, "timeline")?,
        services: args
            .services
            .iter()
            .map(|s| parse_wire(s, "service"))
            .collect::<Result<_, _>>()?,
    };

    let currency = args.currency.to_uppercase();
    let client = reqwest::Client::new();
    let rate = exchange::fetch_rate(&client, &config.cost.exchange_api_base, &currency).await;
    let estimate = cost::estimate(&inputs, &currency, rate);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("Estimated total: {}", style(format_money(estimate.total_cost, &estimate.currency)).bold());
    println!("Estimated time:  {} days\n", estimate.estimated_days);
    println!("Breakdown:");
    for row in &estimate.breakdown {
        println!("  {:<12} {}", row.name, format_money(row.cost, &estimate.currency));
    }
    if estimate.exchange_rate != 1.0 {
        println!("\nExchange rate: 1 USD = {} {}", estimate.exchange_rate, estimate.currency);
    }

    Ok(())
}
