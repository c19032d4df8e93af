use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::store::users::UserStore;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users {
        list,
        add,
        password,
        role,
        name,
        check,
    } = cmd
    {
        let mut store = UserStore::open(&cfg.users_file)?;

        if let Some(username) = add {
            let password = password
                .as_ref()
                .ok_or_else(|| AppError::Config("--add requires --password".to_string()))?;
            let name = name
                .as_ref()
                .ok_or_else(|| AppError::Config("--add requires --name".to_string()))?;
            let role =
                Role::from_code(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

            if store.add_user(username, password, role, name)? {
                success(format!("Created {} account '{}'", role.as_str(), username));
            } else {
                warning(format!("Username '{}' already exists", username));
            }
            return Ok(());
        }

        if let Some(username) = check {
            let password = password
                .as_ref()
                .ok_or_else(|| AppError::Config("--check requires --password".to_string()))?;

            match store.authenticate(username, password) {
                Some(role) => success(format!(
                    "Authenticated '{}' as {} ({})",
                    username,
                    store.display_name(username),
                    role.as_str()
                )),
                None => warning("Invalid username or password"),
            }
            return Ok(());
        }

        // bare `users` behaves like --list
        if *list || (add.is_none() && check.is_none()) {
            let mut table = Table::new(vec![
                Column::new("USERNAME", 16),
                Column::new("ROLE", 6),
                Column::new("NAME", 24),
            ]);
            for (username, record) in store.list() {
                table.add_row(vec![
                    username.clone(),
                    record.role.as_str().to_string(),
                    record.name.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
