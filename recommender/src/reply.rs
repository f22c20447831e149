use crate::AuthError;
use crate::CommandError;
use crate::PreferenceError;

use strum::EnumMessage;
use strum_macros::EnumMessage;

use anyhow::Error;

/// Every user-facing outcome line the interpreter can answer with.
#[derive(EnumMessage, PartialEq, Debug)]
pub enum Reply {
    #[strum(message = "Attempting to login as {}...")]
    AttemptingLogin(String),
    #[strum(message = "Successfully authenticated as {}!")]
    LoggedIn(String),
    #[strum(message = "Authentication failed, try again.")]
    AuthenticationFailed,
    #[strum(message = "Logged out.")]
    LoggedOut,
    #[strum(message = "Received exit command, closing...")]
    Closing,

    #[strum(message = "Unrecognized input.")]
    UnrecognizedInput,
    #[strum(message = "Second word in input is invalid.")]
    BadArgument,
    #[strum(message = "Command is missing an argument.")]
    MissingArgument,
    #[strum(message = "That command is not available on this screen.")]
    NotAvailableHere,
    #[strum(message = "Not logged in.")]
    NotLoggedIn,

    #[strum(message = "Invalid {} option.")]
    InvalidOption(String),
    #[strum(message = "Invalid {} value.")]
    InvalidValue(String),
    #[strum(message = "'add' and 'delete' only work on option-list preferences; use 'set' and 'clear' here.")]
    NotASetPreference,
    #[strum(message = "'set' and 'clear' only work on single-value preferences; use 'add' and 'delete' here.")]
    NotAValuePreference,
    #[strum(message = "{} has no fixed options list.")]
    NoOptionsList(String),

    #[strum(message = "Recommendations are not implemented yet.")]
    NotImplemented,
    #[strum(message = "Something went wrong while handling the command.")]
    InternalError,
}

impl ToString for Reply {
    fn to_string(&self) -> String {
        use Reply::*;
        let response = self.get_message().unwrap().to_owned();
        match self {
            AttemptingLogin(username) => response.replace("{}", username),
            LoggedIn(username) => response.replace("{}", username),
            InvalidOption(key) => response.replace("{}", key),
            InvalidValue(key) => response.replace("{}", key),
            NoOptionsList(key) => response.replace("{}", key),
            _ => response,
        }
    }
}

impl From<Error> for Reply {
    fn from(e: Error) -> Self {
        use Reply::*;

        if e.is::<CommandError>() {
            let err: CommandError = e.downcast().unwrap();
            match err {
                CommandError::ArgMissing => MissingArgument,
                CommandError::BadArg => BadArgument,
                CommandError::InvalidCommand => UnrecognizedInput,
            }
        } else if e.is::<AuthError>() {
            let err: AuthError = e.downcast().unwrap();
            match err {
                AuthError::NotLoggedIn => NotLoggedIn,
            }
        } else if e.is::<PreferenceError>() {
            let err: PreferenceError = e.downcast().unwrap();
            match err {
                PreferenceError::InvalidOption(key, _) => InvalidOption(key.to_string()),
                PreferenceError::InvalidValue(key) => InvalidValue(key.to_string()),
                PreferenceError::NotASet(_) => NotASetPreference,
                PreferenceError::NotAValue(_) => NotAValuePreference,
            }
        } else {
            log::error!("Encountered unexpected error {}", e);
            InternalError
        }
    }
}
