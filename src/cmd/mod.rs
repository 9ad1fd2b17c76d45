/*!
CLI subcommands.

Layout:
  src/cmd/
    mod.rs     (this file: module declarations + re-exports)
    shell.rs   (ShellArgs + execute_shell: interactive session, the default)
    run.rs     (RunArgs   + execute_run:   one command, then exit)
    list.rs    (ListArgs  + execute_list:  registered commands)
    shared.rs  (config loading, dispatcher assembly, runtime)
    format.rs  (prompt / colour / table helpers)

Conventions:
  - Each subcommand module exposes exactly one public `execute_*` function
    that returns `anyhow::Result<()>`.
  - Argument structs derive `clap::Args` and are kept minimal.
  - The command table itself lives in `crate::terminal`; nothing here knows
    what individual commands do.
*/

pub mod format;
pub mod list;
pub mod run;
pub mod shared;
pub mod shell;

pub use list::{ListArgs, execute_list};
pub use run::{RunArgs, execute_run};
pub use shared::SessionOptions;
pub use shell::{ShellArgs, execute_shell};
