/*!
`run.rs`

`webterm run <COMMAND> [ARGS]...` executes a single command and prints its
output to stdout. Unlike the shell, an unknown command or a handler fault is
an error exit, so scripts can tell the difference.

Examples:
  webterm run help
  webterm run weather New York
  webterm run theme set dracula
  webterm --origin https://cloud417.space run neofetch
*/

use anyhow::{Result, bail};
use clap::Args;

use crate::cmd::shared::{SessionOptions, build_dispatcher, load_config, runtime};
use crate::terminal::DispatchError;

/// CLI arguments for `webterm run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command name (exact, lowercase)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments passed to the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn execute_run(args: RunArgs, opts: &SessionOptions) -> Result<()> {
    let cfg = load_config(opts)?;
    let dispatcher = build_dispatcher(cfg, opts.no_browser)?;
    let rt = runtime()?;

    let output = match rt.block_on(dispatcher.invoke(&args.command, &args.args)) {
        Ok(output) => output,
        Err(DispatchError::NotFound(name)) => {
            bail!("Command not found: {name}. Try 'webterm list' to see available commands.")
        }
        Err(DispatchError::Handler(e)) => return Err(e.context(format!("{} failed", args.command))),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
