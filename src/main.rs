use std::process::ExitCode;

use anyhow::Result;

use epp_validator::config::Config;
use epp_validator::ruleset::{Ruleset, builtin_ruleset, load_ruleset};
use epp_validator::validation::validate_path;

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.clone()),
    )
    .init();

    let ruleset = match resolve_ruleset(&config) {
        Ok(ruleset) => ruleset,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let result = validate_path(&config.file, &ruleset);
    if result.is_valid() {
        println!("OK: {} passed structural validation", config.file.display());
        ExitCode::SUCCESS
    } else {
        println!("VALIDATION ERRORS:");
        for error in &result.errors {
            println!(" - {}", error);
        }
        ExitCode::from(1)
    }
}

fn resolve_ruleset(config: &Config) -> Result<Ruleset> {
    match config.ruleset_source() {
        Some(path) => {
            log::debug!("loading ruleset from {}", path.display());
            load_ruleset(path)
        }
        None => Ok(builtin_ruleset().clone()),
    }
}
