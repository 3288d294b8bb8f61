//! prompt: shell-agnostic prompt segments
//! Prints the left prompt (git flags), the right prompt (`user@host` over SSH)
//! or a width-limited path for the tmux status line.

use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command as ClapCommand};
use std::io::Write;
use std::path::PathBuf;

use goobits_prompt::commands::left::handle_left_command;
use goobits_prompt::commands::path::{handle_path_command, handle_tmux_right_command};
use goobits_prompt::commands::right::handle_right_command;
use goobits_prompt::commands::status::handle_status_command;
use goobits_prompt::core::{
    load_config, SystemEnvironment, CONFIG_ENV_VAR, DEFAULT_LOG_FILTER, LOG_ENV_VAR,
};
use goobits_prompt::git::GitCli;

const DEFAULT_MODE: &str = "left";

fn build_cli() -> ClapCommand {
    ClapCommand::new("prompt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shell-agnostic prompt segments")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .env(CONFIG_ENV_VAR)
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (defaults to <config dir>/goobits-prompt/config.toml)"),
        )
        .subcommand(ClapCommand::new("left").about("Print the left prompt (default)"))
        .subcommand(
            ClapCommand::new("right").about("Print user@host when connected over SSH"),
        )
        .subcommand(
            ClapCommand::new("tmux-right")
                .about("Read a path from stdin and print it shortened to fit the width")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("Max display width (default 40)"),
                ),
        )
        .subcommand(
            ClapCommand::new("path").about("Print the working directory with home collapsed"),
        )
        .subcommand(ClapCommand::new("status").about("Print the repository status as JSON"))
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or(LOG_ENV_VAR, DEFAULT_LOG_FILTER),
    )
    .target(env_logger::Target::Stderr)
    .format_timestamp(None)
    .init();
}

/// Finds `--config` whether it was given before or after the verb
fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<PathBuf>("config"))
        .or_else(|| matches.get_one::<PathBuf>("config"))
        .cloned()
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(config_path(matches).as_deref())?;
    let env = SystemEnvironment;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("right", _)) => handle_right_command(&env, &mut out)?,
        Some(("tmux-right", sub)) => {
            let width = sub
                .get_one::<usize>("width")
                .copied()
                .unwrap_or(config.tmux.width);
            handle_tmux_right_command(&env, width, &mut std::io::stdin().lock(), &mut out)?;
        }
        Some(("path", _)) => handle_path_command(&env, &mut out)?,
        Some(("status", _)) => handle_status_command(&GitCli, &env, &mut out).await?,
        _ => handle_left_command(&GitCli, &env, &config.flags, &mut out).await?,
    }

    out.flush()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let matches = build_cli().get_matches();
    let mode = matches.subcommand_name().unwrap_or(DEFAULT_MODE).to_string();

    if let Err(e) = run(&matches).await {
        eprintln!("prompt error ({mode}): {e:#}");
        std::process::exit(1);
    }
}
