mod app;
mod command;
mod config;
mod interpreter;
mod preferences;
mod reply;
mod screen;
mod session;
mod user;
mod yearrange;

use command::{Command, CommandError};
use interpreter::{Console, Interpreter};
use reply::Reply;
use session::{AuthError, Session};
pub use app::RecommenderApp;
pub use config::Config;
pub use preferences::{PreferenceError, PreferenceKey, PreferenceValue, Preferences};
pub use user::{InMemoryUsers, User, UserData, UserRepository};
pub use yearrange::YearRange;
