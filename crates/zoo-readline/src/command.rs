//! Parsing of REPL input into per-screen commands.

use std::str::FromStr;

use thiserror::Error;
use zoo_application::Screen;
use zoo_core::poi::PoiFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Login { username: String, password: String },
    /// 1-based position in the quick-select list.
    QuickSelect(usize),
    Custom,
    /// 1-based position in the custom list.
    Toggle(usize),
    Confirm,
    Cancel,
    Filter(PoiFilter),
    List,
    /// POI id or 1-based position in the visible list.
    Show(String),
    Close,
    Route,
    Map,
    Ask(String),
    Settings,
    Logout,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),
}

/// Command words offered on each screen, for completion and help.
pub fn commands_for(screen: Screen) -> &'static [&'static str] {
    match screen {
        Screen::Login => &["login", "help", "quit"],
        Screen::ProfileSelection => &[
            "custom", "toggle", "confirm", "cancel", "logout", "help", "quit",
        ],
        Screen::Guide => &[
            "filter", "list", "show", "close", "route", "map", "ask", "settings", "logout",
            "help", "quit",
        ],
    }
}

/// Parses one non-empty, trimmed line entered on `screen`.
///
/// On the guide screen any line that is not a command is a question for the
/// assistant. Commands there take at most one argument, so a sentence that
/// merely starts with a command word is still a question.
pub fn parse(screen: Screen, line: &str) -> Result<Command, CommandError> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let keyword = word.to_ascii_lowercase();

    match keyword.as_str() {
        "help" | "?" if rest.is_empty() => return Ok(Command::Help),
        "quit" | "exit" if rest.is_empty() => return Ok(Command::Quit),
        _ => {}
    }

    match screen {
        Screen::Login => parse_login(&keyword, rest),
        Screen::ProfileSelection => parse_selection(&keyword, rest, line),
        Screen::Guide => parse_guide(&keyword, rest, line),
    }
}

fn parse_login(keyword: &str, rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "login <username> <password>";
    if keyword != "login" {
        return Err(CommandError::Usage(USAGE));
    }
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(username), Some(password), None) => Ok(Command::Login {
            username: username.to_string(),
            password: password.to_string(),
        }),
        _ => Err(CommandError::Usage(USAGE)),
    }
}

fn parse_selection(keyword: &str, rest: &str, line: &str) -> Result<Command, CommandError> {
    if let Ok(position) = usize::from_str(keyword) {
        return Ok(Command::QuickSelect(position));
    }
    match keyword {
        "custom" => Ok(Command::Custom),
        "toggle" => usize::from_str(rest)
            .map(Command::Toggle)
            .map_err(|_| CommandError::Usage("toggle <number>")),
        "confirm" => Ok(Command::Confirm),
        "cancel" => Ok(Command::Cancel),
        "logout" => Ok(Command::Logout),
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}

fn parse_guide(keyword: &str, rest: &str, line: &str) -> Result<Command, CommandError> {
    let single_arg = !rest.is_empty() && !rest.contains(char::is_whitespace);
    match keyword {
        "filter" if rest.is_empty() || single_arg => PoiFilter::from_str(rest)
            .map(Command::Filter)
            .map_err(|_| CommandError::Usage("filter all|animal|amenity")),
        "show" if single_arg => Ok(Command::Show(rest.to_string())),
        "show" if rest.is_empty() => Err(CommandError::Usage("show <number|id>")),
        "ask" if !rest.is_empty() => Ok(Command::Ask(rest.to_string())),
        "ask" => Err(CommandError::Usage("ask <question>")),
        _ if !rest.is_empty() => Ok(Command::Ask(line.to_string())),
        "list" => Ok(Command::List),
        "close" => Ok(Command::Close),
        "route" => Ok(Command::Route),
        "map" => Ok(Command::Map),
        "settings" => Ok(Command::Settings),
        "logout" => Ok(Command::Logout),
        _ => Ok(Command::Ask(line.to_string())),
    }
}
