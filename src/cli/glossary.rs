use console::style;

use crate::cli::commands::GlossaryArgs;
use crate::errors::A11yError;
use crate::glossary;

pub async fn handle_glossary(args: GlossaryArgs) -> Result<(), A11yError> {
    let query = args.query.as_deref().unwrap_or("");
    let entries = glossary::search(query);

    if entries.is_empty() {
        println!("No glossary entries match \"{}\"", query);
        return Ok(());
    }

    for entry in entries {
        println!("{}", style(entry.term).bold());
        println!("  {}\n", entry.definition);
    }

    Ok(())
}
