use crate::config::Config;
use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    Config::init_all()
}
