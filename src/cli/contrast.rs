use console::style;
use serde_json::json;

use crate::cli::commands::ContrastArgs;
use crate::color::{contrast_ratio, ContrastRating, Rgb};
use crate::errors::A11yError;

pub async fn handle_contrast(args: ContrastArgs) -> Result<(), A11yError> {
    let fg = Rgb::from_hex(&args.foreground)
        .ok_or_else(|| A11yError::InvalidTarget(format!("Not a 6-digit hex color: {}", args.foreground)))?;
    let bg = Rgb::from_hex(&args.background)
        .ok_or_else(|| A11yError::InvalidTarget(format!("Not a 6-digit hex color: {}", args.background)))?;

    let ratio = contrast_ratio(fg, bg);
    let rating = ContrastRating::from_ratio(ratio);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "ratio": ratio,
                "rating": rating,
            }))?
        );
        return Ok(());
    }

    let rating_styled = match rating {
        ContrastRating::Aaa | ContrastRating::Aa => style(rating.as_str()).green().bold(),
        ContrastRating::AaLarge => style(rating.as_str()).yellow().bold(),
        ContrastRating::Fail => style(rating.as_str()).red().bold(),
    };
    println!("Contrast ratio: {:.2}:1", ratio);
    println!("WCAG level:     {}", rating_styled);

    Ok(())
}
