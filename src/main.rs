use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod config;
mod host;
mod state;
mod terminal;
mod utils;

use cmd::{ListArgs, RunArgs, SessionOptions, ShellArgs};

/// webterm - the personal-site terminal, in your terminal.
///
/// Command layout:
///   webterm [shell]                 interactive session (default)
///   webterm run <COMMAND> [ARGS]... run one command and print its output
///   webterm list [--json]           show the command table
///
/// Global flags / env:
///   -v / -vv        Increase verbosity (RUST_LOG overrides)
///   -q / --quiet    Errors only
///   -c / --config   YAML config file (or WEBTERM_CONFIG)
///   --origin        Site origin (or WEBTERM_ORIGIN); drives `hostname` and relative fetches
///   --theme         Theme active at startup
///   --no-browser    Log links instead of opening them
///
/// Examples:
///   webterm
///   webterm run weather Brussels
///   webterm --origin https://cloud417.space run neofetch
///   webterm --theme dracula shell --no-banner
#[derive(Parser, Debug)]
#[command(
    name = "webterm",
    version,
    author,
    about = "webterm - simulated personal-site terminal",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (YAML)
    #[arg(short = 'c', long, env = "WEBTERM_CONFIG", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Site origin, e.g. https://cloud417.space
    #[arg(long, env = "WEBTERM_ORIGIN", global = true, value_name = "URL")]
    origin: Option<String>,

    /// Theme to activate at startup
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    /// Do not open a browser for link commands
    #[arg(long, global = true)]
    no_browser: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session (default)
    Shell(ShellArgs),

    /// Run a single command
    Run(RunArgs),

    /// List registered commands
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let opts = SessionOptions {
        config_path: cli.config.clone(),
        origin: cli.origin.clone(),
        theme: cli.theme.clone(),
        no_browser: cli.no_browser,
    };

    // Validate up front so a bad config is a usage error, not a runtime one.
    if let Err(e) = cmd::shared::load_config(&opts) {
        eprintln!("Invalid configuration: {e:#}");
        std::process::exit(2);
    }

    match cli.command {
        None => cmd::execute_shell(ShellArgs::default(), &opts),
        Some(Commands::Shell(args)) => cmd::execute_shell(args, &opts),
        Some(Commands::Run(args)) => cmd::execute_run(args, &opts),
        Some(Commands::List(args)) => cmd::execute_list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_shell() {
        let cli = Cli::try_parse_from(["webterm"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["webterm", "list", "--json", "--origin", "https://a.example", "-vv"])
                .unwrap();
        assert_eq!(cli.origin.as_deref(), Some("https://a.example"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { json: true }))));
    }

    #[test]
    fn shell_flags() {
        let cli = Cli::try_parse_from(["webterm", "--theme", "nord", "shell", "--no-banner"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert!(matches!(
            cli.command,
            Some(Commands::Shell(ShellArgs { no_banner: true }))
        ));
    }
}
