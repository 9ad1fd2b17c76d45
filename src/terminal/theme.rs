//! `theme`: list the registry or switch the active theme.
//!
//!   theme            -> usage
//!   theme ls         -> names, lowercased
//!   theme set NAME   -> case-insensitive lookup, then activate
//!   anything else    -> usage

use super::dispatcher::{CommandFuture, Dispatcher, ready};

pub const USAGE: &str = "Usage: theme [args].
    [args]:
      ls: list all available themes
      set: set theme to [theme]

    [Examples]:
      theme ls
      theme set gruvboxdark
    ";

pub const THEME_DOCS_HINT: &str =
    "You can preview all these themes here: https://github.com/m4tt72/terminal/tree/main/docs/themes";

pub fn theme<'a>(d: &'a Dispatcher, args: &'a [String]) -> CommandFuture<'a> {
    let store = &d.services().themes;
    let Some(sub) = args.first() else {
        return ready(USAGE);
    };

    match sub.as_str() {
        "ls" => {
            let names: Vec<String> = store.themes().iter().map(|t| t.name.to_lowercase()).collect();
            // The hint follows the last name with no separator.
            ready(format!("{}{THEME_DOCS_HINT}", names.join(",\n")))
        }
        "set" if args.len() == 2 => {
            let wanted = &args[1];
            match store.find(wanted) {
                Some(t) => {
                    store.set_active(t.clone());
                    ready(format!("Theme set to {wanted}"))
                }
                None => ready(format!(
                    "Theme '{wanted}' not found. Try 'theme ls' to see all available themes."
                )),
            }
        }
        _ => ready(USAGE),
    }
}
