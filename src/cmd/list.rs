/*!
`list.rs`

Implements `webterm list`: the registered commands with a one-line summary,
in table order (the order `help` prints).

JSON Output Shape:
{
  "status": "ok",
  "count": 20,
  "commands": [
    { "name": "help", "summary": "List available commands" },
    ...
  ]
}
*/

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd::format::{StyleOptions, table};
use crate::terminal::CommandTable;

/// CLI arguments for `webterm list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: ListArgs) -> Result<()> {
    let commands = CommandTable::standard().context("Command table is invalid")?;
    println!("{}", render(&commands, args.json, &StyleOptions::detect()));
    Ok(())
}

fn render(commands: &CommandTable, json: bool, style: &StyleOptions) -> String {
    if json {
        let items: Vec<serde_json::Value> = commands
            .entries()
            .iter()
            .map(|e| serde_json::json!({ "name": e.name, "summary": e.summary }))
            .collect();
        return serde_json::json!({
            "status": "ok",
            "count": items.len(),
            "commands": items,
        })
        .to_string();
    }

    let rows: Vec<Vec<String>> = commands
        .entries()
        .iter()
        .map(|e| vec![e.name.to_string(), e.summary.to_string()])
        .collect();
    table(&["COMMAND", "SUMMARY"], &rows, style)
}
