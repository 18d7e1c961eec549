use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)
        .map_err(|e| AppError::Config(format!("init failed: {e}")))?;

    // Resolve the DB actually being initialized: CLI override wins.
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    success("Database schema ready.");
    Ok(())
}
