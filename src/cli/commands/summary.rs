use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::EventStore;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date } = cmd {
        let date = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let store = EventStore::open(&cfg.events_file);
        let summary = store.summary(date);

        println!("Summary ({})", summary.date_range);
        println!("Total events: {}", summary.total_events);

        if !summary.clients.is_empty() {
            println!("\nClients:");
            for (client, count) in &summary.clients {
                println!("  {:<24} {}", client, count);
            }
        }

        if !summary.delivery_types.is_empty() {
            println!("\nDelivery types:");
            for (kind, count) in &summary.delivery_types {
                let kind = if kind.is_empty() { "(none)" } else { kind };
                println!("  {:<24} {}", kind, count);
            }
        }
    }
    Ok(())
}
