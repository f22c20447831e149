use crate::preferences::PreferenceKey;

pub const APP_TITLE: &str = "Game Recommender";

/// One navigable state of the application. The interpreter owns an explicit
/// stack of these; the top entry is the active screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen {
    Login,
    Home,
    ViewPreferences,
    EditPreferences,
    EditPreference(PreferenceKey),
}

impl Screen {
    /// Text rendered whenever the screen becomes active. Preference
    /// listings are appended by the interpreter since they live in the
    /// session.
    pub fn banner(&self, username: &str) -> Vec<String> {
        match self {
            Screen::Login => vec![
                format!("Welcome to {}!", APP_TITLE),
                "Recommends games based on user preferences.".to_owned(),
                String::new(),
                "Log in with your credentials to begin.".to_owned(),
            ],
            Screen::Home => vec![
                format!("{} welcome to {}!", username, APP_TITLE),
                "Here you can generate your recommendations or view/edit preferences.".to_owned(),
                "Type 'help' to see commands.".to_owned(),
                String::new(),
                "If you're a new user, type the 'quick start' command to have".to_owned(),
                "instructions you can follow for preference setup and a generation".to_owned(),
                "printed on the screen!".to_owned(),
            ],
            Screen::ViewPreferences => vec![
                format!("Viewing preferences of {}", username),
                "Preferences determine how the recommender decides what to recommend.".to_owned(),
                "Type 'exit' to return to the home screen or 'edit preferences'".to_owned(),
                "to jump to that screen immediately.".to_owned(),
                String::new(),
            ],
            Screen::EditPreferences => vec![
                format!("Editing preferences of {}", username),
                "Preferences determine how the recommender decides what to recommend.".to_owned(),
                String::new(),
                "Type 'edit <preference>' (or 'e <preference>') followed by the name".to_owned(),
                "of the preference (e.g. genre) to go to a screen with options to".to_owned(),
                "add or remove preferences.".to_owned(),
                "Type 'exit' to return to the home screen.".to_owned(),
                String::new(),
            ],
            Screen::EditPreference(key) => {
                let mut lines = vec![
                    format!("Editing {} of {}", key, username),
                    "Preferences determine how the recommender decides what to recommend."
                        .to_owned(),
                    String::new(),
                ];
                match key.options() {
                    Some(options) => {
                        lines.push(
                            "Type add/delete (a/d) followed by the name of an option".to_owned(),
                        );
                        lines.push("to add or remove it from your preferences.".to_owned());
                        lines.push(String::new());
                        lines.push(format!("{} options:", key));
                        for option in options {
                            lines.push((*option).to_owned());
                        }
                    }
                    None => {
                        lines.push("Type 'set <value>' to change it or 'clear' to unset it."
                            .to_owned());
                        if *key == PreferenceKey::ReleaseRange {
                            lines.push("Ranges are written as start-end, e.g. 2000-2008."
                                .to_owned());
                        }
                    }
                }
                lines.push("Type 'exit' to return to the edit screen.".to_owned());
                lines.push(String::new());
                lines
            }
        }
    }

    pub fn help(&self) -> Vec<String> {
        match self {
            Screen::Login => vec![
                "Enter your username, then your password.".to_owned(),
            ],
            Screen::Home => vec![
                "help - Shows a list of commands with usage information".to_owned(),
                "logout - Log out of current user (returns to login screen)".to_owned(),
                "exit - Quits the application".to_owned(),
                "view preferences - Shows a screen with a list of current user's preferences"
                    .to_owned(),
                "edit preferences - Shows a screen with a list of current user's preferences and shows how to edit them"
                    .to_owned(),
                "quick start - Shows a basic guide for how to use this application".to_owned(),
            ],
            Screen::ViewPreferences => vec![
                "help - Shows a list of commands with usage information".to_owned(),
                "edit preferences - Jumps straight to the edit preferences screen".to_owned(),
                "exit - Returns to the home screen".to_owned(),
            ],
            Screen::EditPreferences => vec![
                "help - Shows a list of commands with usage information".to_owned(),
                "edit <preference> - Opens one preference for editing, e.g. 'edit genre'"
                    .to_owned(),
                "exit - Returns to the home screen".to_owned(),
            ],
            Screen::EditPreference(key) => match key.options() {
                Some(_) => vec![
                    "help - Shows a list of commands with usage information".to_owned(),
                    "add <option> - Adds an option to this preference".to_owned(),
                    "delete <option> - Removes an option from this preference".to_owned(),
                    "options - Shows the list of valid options".to_owned(),
                    "exit - Returns to the edit preferences screen".to_owned(),
                ],
                None => vec![
                    "help - Shows a list of commands with usage information".to_owned(),
                    "set <value> - Changes this preference".to_owned(),
                    "clear - Unsets this preference".to_owned(),
                    "exit - Returns to the edit preferences screen".to_owned(),
                ],
            },
        }
    }

    pub fn quick_start() -> Vec<String> {
        vec![
            "Since you're logged in, head to edit preferences!".to_owned(),
            "From there, edit whichever preference you want the recommender to consider."
                .to_owned(),
            "Once the preferences are to your liking, return home and run 'recommend'".to_owned(),
            "to receive your recommendations!".to_owned(),
        ]
    }
}
