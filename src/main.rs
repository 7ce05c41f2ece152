mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use hm_rf_bridge::constants::{defaults, envvars};
use hm_rf_bridge::helpers::load_dotenv;

const CMD_VALIDATE: &str = "validate";
const CMD_BUILD: &str = "build";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOGGING_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ConfigFileArgs {
            path: args.free_from_str()?,
        }),
        Some(CMD_BUILD) => command::build(argsets::ConfigFileArgs {
            path: args.free_from_str()?,
        }),
        _ => Err(anyhow!("Subcommand must be one of 'validate', 'build'")),
    }
}
