use crate::config::{CliConfig, Config, LogOpts, TomlConfig};

use recommender::RecommenderApp;

use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use user_error::UserFacingError;

use std::fs::read_to_string;
use std::fs::File;
use std::io::ErrorKind;
use std::str::FromStr;

pub struct App {}

impl App {
    pub fn run() -> Result<(), UserFacingError> {
        let mut config = Config::default();

        let cli_config = CliConfig::parse();

        let toml_config = if let Some(toml_path) = &cli_config.config_file {
            let toml_input = Self::fallible_config_read(toml_path)?;
            Some((toml_path.to_string(), toml_input))
        } else {
            Self::read_default_config()
        };

        if let Some((toml_path, toml_input)) = toml_config {
            let toml_config = Self::decode_toml(&toml_path, &toml_input)?;
            config.merge(&toml_config);
        }

        config.merge(&cli_config);

        Self::init_logging(&config.log)?;

        if config.users.is_empty() {
            log::warn!("No users configured, seeding the built-in demo account");
            config.push_user("test".to_owned(), "1234".to_owned(), Default::default());
        }

        Self::run_app(config)?;
        Ok(())
    }

    fn run_app(config: Config) -> Result<(), UserFacingError> {
        let app = RecommenderApp::new(recommender::Config {
            users: config.users,
        });
        if let Err(err) = app.run() {
            return Err(UserFacingError::new("The session ended unexpectedly")
                .help(format!("Action returned with error {}", err)));
        }
        Ok(())
    }

    fn init_logging(log_opts: &LogOpts) -> Result<(), UserFacingError> {
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            log_opts.console.level,
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )];
        if let Some(file_opts) = &log_opts.file {
            let file = match File::create(&file_opts.file_path) {
                Ok(file) => file,
                Err(err) => {
                    let error = UserFacingError::new(format!(
                        "Could not open {} log file",
                        file_opts.file_path
                    ));
                    let error = match err.kind() {
                        ErrorKind::PermissionDenied => {
                            error.reason("Insufficient permissions to create the file")
                        }
                        ErrorKind::NotFound => error.reason("Containing directory does not exist"),
                        _ => error.reason("It is due to unexpected reasons"),
                    };
                    return Err(error.help(err.to_string()));
                }
            };
            loggers.push(WriteLogger::new(
                file_opts.level,
                simplelog::Config::default(),
                file,
            ));
        }
        CombinedLogger::init(loggers).map_err(|err| {
            UserFacingError::new("Could not initialize logging").help(err.to_string())
        })
    }

    fn fallible_config_read(path: &str) -> Result<String, UserFacingError> {
        match read_to_string(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                let error = UserFacingError::new(format!("Could not read {} config file", path));
                let error = match err.kind() {
                    ErrorKind::NotFound => error.reason("File not found"),
                    ErrorKind::PermissionDenied => {
                        error.reason("Insufficient permissions to open the file")
                    }
                    ErrorKind::InvalidData => error.reason("Config file is probably invalid UTF-8"),
                    _ => error.reason("It is due to unexpected reasons"),
                };
                let error = error.help(err.to_string());
                return Err(error);
            }
        }
    }

    fn read_default_config() -> Option<(String, String)> {
        static TOML_CONFIG_PATHS: &[&str] = &["recommender.toml", "config.toml"];

        for path in TOML_CONFIG_PATHS {
            if let Ok(config) = read_to_string(path) {
                return Some((path.to_string(), config));
            }
        }
        None
    }

    fn decode_toml(toml_path: &str, toml_input: &str) -> Result<TomlConfig, UserFacingError> {
        match TomlConfig::from_str(toml_input) {
            Ok(toml_config) => Ok(toml_config),
            Err(err) => {
                let error = UserFacingError::new(format!("Unable to decode {} file", toml_path))
                    .reason("Could not deserialize toml input");
                let error = match err.line_col() {
                    None => error,
                    Some((line, col)) => {
                        error.help(format!("The problem is on line {} column {}", line, col))
                    }
                };
                let error = error.help(err.to_string());
                return Err(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempdir::TempDir;

    #[test]
    fn test_missing_config_file_is_reported() {
        assert!(App::fallible_config_read("no-such-config.toml").is_err());
    }

    #[test]
    fn test_config_file_reading() {
        let dir = TempDir::new("recommender-cli-test").unwrap();
        let path = dir.path().join("config.toml");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"[user.test]\npassword = \"1234\"\n").unwrap();
        let contents = App::fallible_config_read(path.to_str().unwrap()).unwrap();
        let config = App::decode_toml("config.toml", &contents).unwrap();
        let mut merged = Config::default();
        merged.merge(&config);
        assert_eq!(merged.users.len(), 1);
        assert_eq!(merged.users[0].username, "test");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        assert!(App::decode_toml("config.toml", "not = valid = toml").is_err());
    }
}
