/*!
The terminal's command set.

Layout:
  dispatcher.rs  (CommandTable, Dispatcher, Services, CommandFuture)
  builtins.rs    (help, hostname, whoami, date, editors, echo, clear, exit, banner)
  links.rs       (sudo, repo, jellyfin, torrent, profile: open a tab + message)
  theme.rs       (theme ls / theme set)
  net.rs         (weather, neofetch, curl)

`REGISTRY` below is the single source of truth for what `help` prints and
what the shell can run. Order matters: it is the order `help` lists.
*/

pub mod builtins;
pub mod dispatcher;
pub mod links;
pub mod net;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{CommandEntry, CommandTable, DispatchError, Dispatcher, Services};

pub static REGISTRY: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        summary: "List available commands",
        handler: builtins::help,
    },
    CommandEntry {
        name: "hostname",
        summary: "Print the site host",
        handler: builtins::hostname,
    },
    CommandEntry {
        name: "whoami",
        summary: "Print the current user",
        handler: builtins::whoami,
    },
    CommandEntry {
        name: "date",
        summary: "Print the local date and time",
        handler: builtins::date,
    },
    CommandEntry {
        name: "vi",
        summary: "Editor advice",
        handler: builtins::vi,
    },
    CommandEntry {
        name: "vim",
        summary: "Editor advice",
        handler: builtins::vim,
    },
    CommandEntry {
        name: "emacs",
        summary: "Editor advice",
        handler: builtins::emacs,
    },
    CommandEntry {
        name: "echo",
        summary: "Print the arguments",
        handler: builtins::echo,
    },
    CommandEntry {
        name: "sudo",
        summary: "Try to become root",
        handler: links::sudo,
    },
    CommandEntry {
        name: "theme",
        summary: "List or set the colour theme",
        handler: theme::theme,
    },
    CommandEntry {
        name: "repo",
        summary: "Open the source repository",
        handler: links::repo,
    },
    CommandEntry {
        name: "jellyfin",
        summary: "Open the Jellyfin server",
        handler: links::jellyfin,
    },
    CommandEntry {
        name: "torrent",
        summary: "Open the torrent client",
        handler: links::torrent,
    },
    CommandEntry {
        name: "profile",
        summary: "Open the author's profile",
        handler: links::profile,
    },
    CommandEntry {
        name: "clear",
        summary: "Clear the terminal history",
        handler: builtins::clear,
    },
    CommandEntry {
        name: "weather",
        summary: "Weather report for a city",
        handler: net::weather,
    },
    CommandEntry {
        name: "neofetch",
        summary: "System summary from the site",
        handler: net::neofetch,
    },
    CommandEntry {
        name: "exit",
        summary: "Leave the terminal",
        handler: builtins::exit,
    },
    CommandEntry {
        name: "curl",
        summary: "Fetch a URL and print the body",
        handler: net::curl,
    },
    CommandEntry {
        name: "banner",
        summary: "Print the welcome banner",
        handler: builtins::banner,
    },
];
