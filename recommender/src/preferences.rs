use std::collections::{BTreeMap, BTreeSet};

use crate::YearRange;

use strum_macros::EnumString;

/// Canonical casing for the genre tags the recommender will select from.
pub static GENRE_OPTIONS: &[&str] = &[
    "Action",
    "Adventure",
    "Casual",
    "Early Access",
    "Free to Play",
    "Game Development",
    "Gore",
    "Indie",
    "Massively Multiplayer",
    "Movie",
    "Nudity",
    "RPG",
    "Racing",
    "Sexual Content",
    "Simulation",
    "Sports",
    "Strategy",
    "Violent",
];

#[derive(
    EnumString, strum_macros::Display, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy,
)]
#[strum(ascii_case_insensitive)]
pub enum PreferenceKey {
    #[strum(to_string = "genre", serialize = "genres")]
    Genre,
    #[strum(to_string = "release_range", serialize = "release range")]
    ReleaseRange,
    #[strum(
        to_string = "number_of_players",
        serialize = "number of players",
        serialize = "players"
    )]
    NumberOfPlayers,
    #[strum(to_string = "length")]
    Length,
}

impl PreferenceKey {
    /// The fixed options catalogue, for keys that have one.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            PreferenceKey::Genre => Some(GENRE_OPTIONS),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceValue {
    Set(BTreeSet<String>),
    Range(Option<YearRange>),
    Count(Option<u32>),
    Hours(Option<u32>),
}

impl ToString for PreferenceValue {
    fn to_string(&self) -> String {
        use PreferenceValue::*;

        const NOT_SET: &str = "(not set)";
        match self {
            Set(values) => {
                if values.is_empty() {
                    NOT_SET.to_owned()
                } else {
                    values.iter().cloned().collect::<Vec<_>>().join(", ")
                }
            }
            Range(range) => match range {
                Some(range) => range.to_string(),
                None => NOT_SET.to_owned(),
            },
            Count(value) | Hours(value) => match value {
                Some(value) => value.to_string(),
                None => NOT_SET.to_owned(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("\"{1}\" is not a valid {0} option")]
    InvalidOption(PreferenceKey, String),
    #[error("{0} does not hold a list of options")]
    NotASet(PreferenceKey),
    #[error("{0} holds a list of options, not a single value")]
    NotAValue(PreferenceKey),
    #[error("could not parse a valid {0} value")]
    InvalidValue(PreferenceKey),
}

/// A user's preference table. The key set is fixed at construction; only
/// values change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    entries: BTreeMap<PreferenceKey, PreferenceValue>,
}

impl Default for Preferences {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(PreferenceKey::Genre, PreferenceValue::Set(BTreeSet::new()));
        entries.insert(PreferenceKey::ReleaseRange, PreferenceValue::Range(None));
        entries.insert(PreferenceKey::NumberOfPlayers, PreferenceValue::Count(None));
        entries.insert(PreferenceKey::Length, PreferenceValue::Hours(None));
        Preferences { entries }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> &PreferenceValue {
        &self.entries[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PreferenceKey, &PreferenceValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn add(&mut self, key: PreferenceKey, option: &str) -> Result<(), PreferenceError> {
        let values = match self.entries.get_mut(&key) {
            Some(PreferenceValue::Set(values)) => values,
            _ => return Err(PreferenceError::NotASet(key)),
        };
        let canonical = canonical_option(key, option)?;
        values.insert(canonical);
        Ok(())
    }

    pub fn delete(&mut self, key: PreferenceKey, option: &str) -> Result<(), PreferenceError> {
        let values = match self.entries.get_mut(&key) {
            Some(PreferenceValue::Set(values)) => values,
            _ => return Err(PreferenceError::NotASet(key)),
        };
        let canonical = canonical_option(key, option)?;
        values.remove(&canonical);
        Ok(())
    }

    pub fn set(&mut self, key: PreferenceKey, raw: &str) -> Result<(), PreferenceError> {
        match self.entries.get_mut(&key) {
            Some(PreferenceValue::Set(_)) => Err(PreferenceError::NotAValue(key)),
            Some(PreferenceValue::Range(range)) => {
                let parsed = raw.parse().map_err(|_| PreferenceError::InvalidValue(key))?;
                *range = Some(parsed);
                Ok(())
            }
            Some(PreferenceValue::Count(value)) => {
                *value = Some(parse_nonzero(key, raw)?);
                Ok(())
            }
            Some(PreferenceValue::Hours(value)) => {
                *value = Some(parse_nonzero(key, raw)?);
                Ok(())
            }
            None => unreachable!("preference keys are fixed at construction"),
        }
    }

    pub fn clear(&mut self, key: PreferenceKey) -> Result<(), PreferenceError> {
        match self.entries.get_mut(&key) {
            Some(PreferenceValue::Set(_)) => Err(PreferenceError::NotAValue(key)),
            Some(PreferenceValue::Range(range)) => {
                *range = None;
                Ok(())
            }
            Some(PreferenceValue::Count(value)) | Some(PreferenceValue::Hours(value)) => {
                *value = None;
                Ok(())
            }
            None => unreachable!("preference keys are fixed at construction"),
        }
    }
}

fn parse_nonzero(key: PreferenceKey, raw: &str) -> Result<u32, PreferenceError> {
    let value: u32 = raw.parse().map_err(|_| PreferenceError::InvalidValue(key))?;
    if value == 0 {
        return Err(PreferenceError::InvalidValue(key));
    }
    Ok(value)
}

fn canonical_option(key: PreferenceKey, option: &str) -> Result<String, PreferenceError> {
    let options = match key.options() {
        Some(options) => options,
        None => return Err(PreferenceError::NotASet(key)),
    };
    options
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(option))
        .map(|candidate| (*candidate).to_owned())
        .ok_or_else(|| PreferenceError::InvalidOption(key, option.to_owned()))
}
