use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", std::fs::read_to_string(&path)?);
            } else {
                info(format!(
                    "No config file at {:?}; run `schedlog init` to create one",
                    path
                ));
            }
        }
    }
    Ok(())
}
