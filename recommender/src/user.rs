use std::collections::HashMap;

use crate::Preferences;

pub type Username = String;
pub type Password = String;

#[derive(Clone)]
pub struct User {
    pub username: Username,
    pub data: UserData,
}

#[derive(Clone)]
pub struct UserData {
    pub password: Password,
    pub preferences: Preferences,
}

/// Where user records come from. Only an in-memory store exists today; a
/// persistent one can be substituted without touching navigation logic.
pub trait UserRepository {
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<User>;
}

pub struct InMemoryUsers {
    users: HashMap<Username, UserData>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<User>) -> InMemoryUsers {
        let users: HashMap<Username, UserData> = users
            .iter()
            .map(|user| (user.username.clone(), user.data.clone()))
            .collect();
        InMemoryUsers { users }
    }
}

impl UserRepository for InMemoryUsers {
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        let data = self.users.get(username)?;
        if data.password != password {
            return None;
        }
        Some(User {
            username: username.to_owned(),
            data: data.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryUsers {
        InMemoryUsers::new(vec![User {
            username: "test".to_owned(),
            data: UserData {
                password: "1234".to_owned(),
                preferences: Preferences::default(),
            },
        }])
    }

    #[test]
    fn test_lookup_needs_both_fields_to_match() {
        let users = repository();
        assert!(users.find_by_credentials("test", "1234").is_some());
        assert!(users.find_by_credentials("test", "123").is_none());
        assert!(users.find_by_credentials("Test", "1234").is_none());
        assert!(users.find_by_credentials("nobody", "1234").is_none());
    }
}
