pub mod schools;
pub mod today;

use clap::{ArgAction, Parser, Subcommand};
use geupsik_common::models::MealDate;

#[derive(Parser)]
#[command(name = "geupsik")]
#[command(version)]
#[command(about = "오늘의 학교 급식: look up a Korean school's cafeteria menu via the NEIS open API.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not show a spinner while waiting on the API
    #[arg(long, global = true)]
    pub no_spinner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the meals a school serves today (or on --date)
    #[command(alias = "t")]
    Today {
        /// School name, e.g. 서울고등학교
        #[arg(required = true, num_args = 1..)]
        school: Vec<String>,

        /// Day to look up instead of today
        #[arg(short, long, value_name = "YYYYMMDD")]
        date: Option<MealDate>,

        /// Print the menu as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every school matching a name, in the order the directory returns them
    #[command(alias = "s")]
    Schools {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Rejoins a name the shell split on spaces.
pub fn join_name(parts: &[String]) -> String {
    parts.join(" ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
