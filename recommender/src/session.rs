use crate::preferences::PreferenceKey;
use crate::User;

use anyhow::{Error, Result};

/// Per-run session state. Preference operations go through a boxed
/// implementation that is swapped on login and logout, so nothing behind
/// the login screen is reachable without a successful authentication.
pub struct Session {
    pub has_quit: bool,
    pub username: Option<String>,

    prefs_impl: Box<dyn PreferenceOps>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("user is not logged in")]
    NotLoggedIn,
}

impl Session {
    pub fn new() -> Session {
        Session {
            has_quit: false,
            username: None,
            prefs_impl: Box::new(NotLoggedIn {}),
        }
    }

    pub fn quit(&mut self) {
        self.has_quit = true;
    }

    pub fn user(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn authorize(&mut self, user: User) {
        self.prefs_impl = Box::new(LoggedIn::new(user));
    }

    pub fn logout(&mut self) {
        self.username = None;
        self.prefs_impl = Box::new(NotLoggedIn {});
    }

    pub fn current_user(&self) -> Result<&str> {
        self.prefs_impl.username()
    }

    pub fn preference_lines(&self) -> Result<Vec<String>> {
        self.prefs_impl.list()
    }

    pub fn preference_line(&self, key: PreferenceKey) -> Result<String> {
        self.prefs_impl.show(key)
    }

    pub fn add_preference(&mut self, key: PreferenceKey, option: &str) -> Result<()> {
        self.prefs_impl.add(key, option)
    }

    pub fn delete_preference(&mut self, key: PreferenceKey, option: &str) -> Result<()> {
        self.prefs_impl.delete(key, option)
    }

    pub fn set_preference(&mut self, key: PreferenceKey, raw: &str) -> Result<()> {
        self.prefs_impl.set(key, raw)
    }

    pub fn clear_preference(&mut self, key: PreferenceKey) -> Result<()> {
        self.prefs_impl.clear(key)
    }
}

trait PreferenceOps {
    fn username(&self) -> Result<&str>;
    fn list(&self) -> Result<Vec<String>>;
    fn show(&self, key: PreferenceKey) -> Result<String>;
    fn add(&mut self, key: PreferenceKey, option: &str) -> Result<()>;
    fn delete(&mut self, key: PreferenceKey, option: &str) -> Result<()>;
    fn set(&mut self, key: PreferenceKey, raw: &str) -> Result<()>;
    fn clear(&mut self, key: PreferenceKey) -> Result<()>;
}

struct LoggedIn {
    user: User,
}

impl LoggedIn {
    fn new(user: User) -> LoggedIn {
        LoggedIn { user }
    }
}

impl PreferenceOps for LoggedIn {
    fn username(&self) -> Result<&str> {
        Ok(&self.user.username)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .user
            .data
            .preferences
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value.to_string()))
            .collect())
    }

    fn show(&self, key: PreferenceKey) -> Result<String> {
        let value = self.user.data.preferences.get(key);
        Ok(format!("{}: {}", key, value.to_string()))
    }

    fn add(&mut self, key: PreferenceKey, option: &str) -> Result<()> {
        self.user.data.preferences.add(key, option)?;
        Ok(())
    }

    fn delete(&mut self, key: PreferenceKey, option: &str) -> Result<()> {
        self.user.data.preferences.delete(key, option)?;
        Ok(())
    }

    fn set(&mut self, key: PreferenceKey, raw: &str) -> Result<()> {
        self.user.data.preferences.set(key, raw)?;
        Ok(())
    }

    fn clear(&mut self, key: PreferenceKey) -> Result<()> {
        self.user.data.preferences.clear(key)?;
        Ok(())
    }
}

struct NotLoggedIn {}

impl PreferenceOps for NotLoggedIn {
    fn username(&self) -> Result<&str> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn list(&self) -> Result<Vec<String>> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn show(&self, _key: PreferenceKey) -> Result<String> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn add(&mut self, _key: PreferenceKey, _option: &str) -> Result<()> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn delete(&mut self, _key: PreferenceKey, _option: &str) -> Result<()> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn set(&mut self, _key: PreferenceKey, _raw: &str) -> Result<()> {
        Err(Error::new(AuthError::NotLoggedIn))
    }

    fn clear(&mut self, _key: PreferenceKey) -> Result<()> {
        Err(Error::new(AuthError::NotLoggedIn))
    }
}
