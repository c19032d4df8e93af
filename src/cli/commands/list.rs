use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{EventFilter, EventStore};
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, client } = cmd {
        let date = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let store = EventStore::open(&cfg.events_file);
        let events = store.list(&EventFilter {
            date,
            client: client.clone(),
        });

        if events.is_empty() {
            println!("No events found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("DATE", 10),
            Column::new("SLOT", 12),
            Column::new("CLIENT", 18),
            Column::new("TYPE", 12),
            Column::new("RESOURCE", 12),
            Column::new("ASSIGNED", 12),
            Column::new("ALERT", 5),
            Column::new("FIRED", 5),
        ]);

        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.date_str(),
                ev.time_slot.clone(),
                ev.client.clone(),
                ev.delivery_type.clone(),
                ev.resource.clone(),
                ev.assigned_to.clone(),
                format!("{}m", ev.alert_minutes),
                if ev.alert_triggered { "yes" } else { "no" }.to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("{} event(s)", events.len());
    }
    Ok(())
}
