use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::preferences::PreferenceKey;

use strum_macros::EnumString;

#[derive(EnumString, strum_macros::Display, Debug, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    Help,
    Logout,
    Exit,
    View(ViewTarget),
    #[strum(serialize = "edit", serialize = "e")]
    Edit(EditTarget),
    #[strum(serialize = "add", serialize = "a")]
    Add(String),
    #[strum(serialize = "delete", serialize = "d")]
    Delete(String),
    Set(String),
    Clear,
    Options,
    Quick,
    Recommend,
}

#[derive(EnumString, strum_macros::Display, Debug, PartialEq, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum ViewTarget {
    Preferences,
}

impl Default for ViewTarget {
    fn default() -> Self {
        ViewTarget::Preferences
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EditTarget {
    Preferences,
    Preference(PreferenceKey),
}

impl Default for EditTarget {
    fn default() -> Self {
        EditTarget::Preferences
    }
}

impl EditTarget {
    fn parse(s: &str) -> Result<EditTarget, CommandError> {
        if s.eq_ignore_ascii_case("preferences") {
            return Ok(EditTarget::Preferences);
        }
        let key = PreferenceKey::from_str(s).map_err(|_| CommandError::BadArg)?;
        Ok(EditTarget::Preference(key))
    }
}

#[derive(Debug)]
pub enum CommandError {
    ArgMissing,
    BadArg,
    InvalidCommand,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use CommandError::*;

        match *self {
            ArgMissing => write!(f, "missing required argument"),
            BadArg => write!(f, "invalid format of provided argument"),
            InvalidCommand => write!(f, "command not found"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    pub fn parse_line(s: &str) -> Result<Command, CommandError> {
        use Command::*;

        let (command, arg) = match s.split_once(' ') {
            Some((command, arg)) => (command, Some(arg.trim())),
            None => (s, None),
        };
        let arg = arg.filter(|arg| !arg.is_empty());
        let command = Command::from_str(command).map_err(|_| CommandError::InvalidCommand)?;
        let command = match command {
            View(_) => {
                let target = arg.ok_or(CommandError::ArgMissing)?;
                let target = target.parse().map_err(|_| CommandError::BadArg)?;
                View(target)
            }
            Edit(_) => {
                let target = arg.ok_or(CommandError::ArgMissing)?;
                Edit(EditTarget::parse(target)?)
            }
            Add(_) => {
                let option = arg.ok_or(CommandError::ArgMissing)?;
                Add(option.to_owned())
            }
            Delete(_) => {
                let option = arg.ok_or(CommandError::ArgMissing)?;
                Delete(option.to_owned())
            }
            Set(_) => {
                let value = arg.ok_or(CommandError::ArgMissing)?;
                Set(value.to_owned())
            }
            Quick => {
                let word = arg.ok_or(CommandError::ArgMissing)?;
                if !word.eq_ignore_ascii_case("start") {
                    return Err(CommandError::BadArg);
                }
                Quick
            }
            _ => command,
        };
        Ok(command)
    }
}
