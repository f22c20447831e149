use std::default::Default;

use crate::User;

pub struct Config {
    pub users: Vec<User>,
}

impl Default for Config {
    fn default() -> Self {
        Config { users: Vec::new() }
    }
}
