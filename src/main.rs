mod argsets;
mod command;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

use ds::constants::{defaults, envvars};

const CMD_RUN: &str = "run";
const CMD_DEMO: &str = "demo";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_RUN) => command::run(argsets::RunArgs {
            directory: args.opt_free_from_str()?,
        }),
        Some(CMD_DEMO) => command::demo(argsets::DemoArgs {
            out_path: args.opt_free_from_str()?,
        }),
        _ => Err(anyhow!("Subcommand must be one of 'run', 'demo'")),
    }
}
