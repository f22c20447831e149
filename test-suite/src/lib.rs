use std::fs::File;
use std::io::Cursor;
use std::sync::Once;

use recommender::{Config, Preferences, RecommenderApp, User, UserData};

use simplelog::*;

pub struct TestEnvironment {
    app: RecommenderApp,
}

static INIT_LOG: Once = Once::new();

fn initialize_logger() {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            simplelog::Config::default(),
            File::create("test.log").unwrap(),
        ),
    ])
    .unwrap();
}

impl TestEnvironment {
    pub fn new() -> TestEnvironment {
        INIT_LOG.call_once(initialize_logger);
        let mut config = Config::default();
        config.users.push(User {
            username: "test".to_owned(),
            data: UserData {
                password: "1234".to_owned(),
                preferences: Preferences::default(),
            },
        });
        TestEnvironment {
            app: RecommenderApp::new(config),
        }
    }

    /// Feeds the lines to a fresh session and returns everything it wrote.
    pub fn run_script(&self, lines: &[&str]) -> String {
        let input = lines.join("\n");
        let mut output = Vec::new();
        self.app
            .run_session(Cursor::new(input), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }
}

#[cfg(test)]
mod test_authorization;
#[cfg(test)]
mod test_navigation;
#[cfg(test)]
mod test_preferences;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_and_exit() {
        let env = TestEnvironment::new();
        let output = env.run_script(&["test", "1234", "exit"]);
        assert!(output.contains("Successfully authenticated as test!"));
        assert!(output.contains("test welcome to Game Recommender!"));
        assert!(output.contains("Received exit command, closing..."));
    }

    #[test]
    fn test_session_survives_end_of_input() {
        let env = TestEnvironment::new();
        let output = env.run_script(&["test", "1234"]);
        assert!(output.contains("test welcome to Game Recommender!"));
    }
}
