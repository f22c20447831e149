use std::collections::HashMap;
use std::convert::Into;
use std::str::FromStr;

use super::{Config, ConfigChanges};

use recommender::{PreferenceKey, Preferences};

use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TomlConfig {
    #[serde(rename(deserialize = "user"))]
    users: Option<HashMap<String, User>>,
    #[serde(rename(deserialize = "log"))]
    log_opts: Option<LogOpts>,
}

impl FromStr for TomlConfig {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = toml::from_str(s)?;
        Ok(config)
    }
}

impl ConfigChanges for TomlConfig {
    fn apply(&self, config: &mut Config) {
        if let Some(users) = &self.users {
            for (username, user) in users {
                config.push_user(
                    username.clone(),
                    user.password.clone(),
                    user.seed_preferences(username),
                )
            }
        }
        if let Some(log_opts) = &self.log_opts {
            if let Some(file_log_opts) = log_opts.file_log_opts.clone() {
                config.log.file = Some(super::FileLogOpts {
                    file_path: file_log_opts.path.clone(),
                    level: file_log_opts.level.into(),
                });
            }
            if let Some(console_log_opts) = log_opts.console_log_opts.clone() {
                config.log.console.level = console_log_opts.level.into();
            }
        }
    }
}

#[derive(Deserialize)]
struct User {
    password: String,
    genres: Option<Vec<String>>,
    release_range: Option<String>,
    number_of_players: Option<u32>,
    length: Option<u32>,
}

impl User {
    /// Builds the starting preference table for a configured user. Invalid
    /// seeds are skipped with a warning instead of failing startup.
    fn seed_preferences(&self, username: &str) -> Preferences {
        let mut preferences = Preferences::default();
        if let Some(genres) = &self.genres {
            for genre in genres {
                if let Err(err) = preferences.add(PreferenceKey::Genre, genre) {
                    log::warn!("Ignoring configured genre for {}: {}", username, err);
                }
            }
        }
        if let Some(range) = &self.release_range {
            if let Err(err) = preferences.set(PreferenceKey::ReleaseRange, range) {
                log::warn!("Ignoring configured release range for {}: {}", username, err);
            }
        }
        if let Some(players) = self.number_of_players {
            if let Err(err) =
                preferences.set(PreferenceKey::NumberOfPlayers, &players.to_string())
            {
                log::warn!("Ignoring configured player count for {}: {}", username, err);
            }
        }
        if let Some(length) = self.length {
            if let Err(err) = preferences.set(PreferenceKey::Length, &length.to_string()) {
                log::warn!("Ignoring configured length for {}: {}", username, err);
            }
        }
        preferences
    }
}

#[derive(Deserialize, Clone)]
enum LogLevel {
    #[serde(rename(deserialize = "off"))]
    Off,
    #[serde(rename(deserialize = "error"))]
    Error,
    #[serde(rename(deserialize = "warn"))]
    Warn,
    #[serde(rename(deserialize = "info"))]
    Info,
    #[serde(rename(deserialize = "debug"))]
    Debug,
    #[serde(rename(deserialize = "trace"))]
    Trace,
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Deserialize, Clone)]
struct FileLogOpts {
    path: String,
    level: LogLevel,
}

#[derive(Deserialize, Clone)]
struct ConsoleLogOpts {
    level: LogLevel,
}

#[derive(Deserialize)]
struct LogOpts {
    #[serde(rename(deserialize = "file"))]
    file_log_opts: Option<FileLogOpts>,
    #[serde(rename(deserialize = "console"))]
    console_log_opts: Option<ConsoleLogOpts>,
}
