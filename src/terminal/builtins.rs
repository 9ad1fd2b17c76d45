//! Commands that answer from memory: no network, no links.

use chrono::{DateTime, Local, TimeZone};

use super::dispatcher::{CommandFuture, Dispatcher, ready};

pub const WHOAMI: &str = "guest";
pub const EXIT_HINT: &str = "Please close the tab to exit.";

pub fn help<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(format!("Available commands: {}", d.table().names().join(", ")))
}

pub fn hostname<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(d.services().origin.host_str().unwrap_or_default())
}

pub fn whoami<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(WHOAMI)
}

pub fn date<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(locale_string(&Local::now()))
}

/// en-US style, e.g. `10/16/2026, 3:04:05 PM`.
pub fn locale_string<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn vi<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready("why use vi? try 'emacs'")
}

pub fn vim<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready("why use vim? try 'emacs'")
}

pub fn emacs<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready("why use emacs? try 'vim'")
}

pub fn echo<'a>(_d: &'a Dispatcher, args: &'a [String]) -> CommandFuture<'a> {
    ready(args.join(" "))
}

pub fn clear<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    d.services().history.clear();
    ready("")
}

pub fn exit<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(EXIT_HINT)
}

pub fn banner<'a>(_d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    ready(BANNER)
}

pub const BANNER: &str = r#"
  

$$\   $$\  $$$$$$\  $$\      $$\ $$$$$$$$\  $$$$$$\  $$\   $$\   $$\   $$$$$$$$\ 
$$ |  $$ |$$  __$$\ $$$\    $$$ |\____$$  |$$  __$$\ $$ |  $$ |$$$$ |  \____$$  |
$$ |  $$ |$$ /  $$ |$$$$\  $$$$ |    $$  / $$ /  $$ |$$ |  $$ |\_$$ |      $$  / 
$$$$$$$$ |$$$$$$$$ |$$\$$\$$ $$ |   $$  /  $$$$$$$$ |$$$$$$$$ |  $$ |     $$  /  
$$  __$$ |$$  __$$ |$$ \$$$  $$ |  $$  /   $$  __$$ |\_____$$ |  $$ |    $$  /   
$$ |  $$ |$$ |  $$ |$$ |\$  /$$ | $$  /    $$ |  $$ |      $$ |  $$ |   $$  /    
$$ |  $$ |$$ |  $$ |$$ | \_/ $$ |$$$$$$$$\ $$ |  $$ |      $$ |$$$$$$\ $$  /     
\__|  \__|\__|  \__|\__|     \__|\________|\__|  \__|      \__|\______|\__/      
                                                                                 
                                                                                 
Type 'help' to see list of available commands.
"#;
