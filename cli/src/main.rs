mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, join_name, schools, today};
use geupsik_common::config::Config;
use geupsik_common::error::LookupError;
use geupsik_common::models::MealDate;
use geupsik_core::lookup::LookupService;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match run(commands).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    // Checked before anything touches the network
    let cfg: Config = Config::from_env().map_err(LookupError::from)?;
    let service: LookupService = LookupService::neis(cfg)?;
    let spinner: bool = !commands.no_spinner;

    match commands.command {
        Commands::Today { school, date, json } => {
            let opts = today::TodayOptions { json, spinner };
            let date: MealDate = date.unwrap_or_else(MealDate::today);
            today::today(&service, &join_name(&school), date, &opts).await
        }
        Commands::Schools { name } => schools::schools(&service, &join_name(&name), spinner).await,
    }
}
