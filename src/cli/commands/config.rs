use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        info(format!("Config file: {:?}", Config::config_file()));
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("serialize: {e}")))?;
        println!("{}", yaml);
    }

    Ok(())
}
