use std::default::Default;

use recommender::{Preferences, User, UserData};

use log::LevelFilter;

pub struct Config {
    pub users: Vec<User>,
    pub log: LogOpts,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            users: Vec::new(),
            log: LogOpts::default(),
        }
    }
}

impl Config {
    pub fn merge<C: ?Sized>(&mut self, changes: &C)
    where
        C: ConfigChanges,
    {
        changes.apply(self)
    }

    pub fn push_user(&mut self, username: String, password: String, preferences: Preferences) {
        self.users.push(User {
            username,
            data: UserData {
                password,
                preferences,
            },
        })
    }
}

pub trait ConfigChanges {
    fn apply(&self, config: &mut Config);
}

#[derive(Default)]
pub struct LogOpts {
    pub file: Option<FileLogOpts>,
    pub console: ConsoleLogOpts,
}

pub struct FileLogOpts {
    pub file_path: String,
    pub level: LevelFilter,
}

impl Default for FileLogOpts {
    fn default() -> Self {
        FileLogOpts {
            file_path: String::new(),
            level: LevelFilter::Off,
        }
    }
}

pub struct ConsoleLogOpts {
    pub level: LevelFilter,
}

impl Default for ConsoleLogOpts {
    fn default() -> Self {
        ConsoleLogOpts {
            // The console doubles as the UI, keep it quiet by default
            level: LevelFilter::Warn,
        }
    }
}
