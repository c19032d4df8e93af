use crate::alerts::AlertPoller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{alert, info};
use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Run the alert monitor in the foreground, printing fired notices.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, seconds } = cmd {
        let interval = Duration::from_secs(interval.unwrap_or(cfg.poll_interval_secs));

        let store = Arc::new(EventStore::open(&cfg.events_file));
        let mut poller = AlertPoller::new(Arc::clone(&store), interval);

        poller.start(|notice| {
            alert(format!(
                "Event #{}: {} - {}",
                notice.id, notice.client, notice.time_slot
            ));
        });

        match seconds {
            Some(s) => {
                info(format!("Watching for {}s (interval {:?})", s, interval));
                thread::sleep(Duration::from_secs(*s));
            }
            None => {
                info(format!(
                    "Watching (interval {:?}); press Enter to stop",
                    interval
                ));
                let mut line = String::new();
                let _ = std::io::stdin().lock().read_line(&mut line);
            }
        }

        poller.stop();
        info("Alert monitor stopped.");
    }
    Ok(())
}
