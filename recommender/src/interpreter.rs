use std::io::{BufRead, Write};

use crate::command::{EditTarget, ViewTarget};
use crate::screen::Screen;
use crate::user::UserRepository;
use crate::Command;
use crate::Reply;
use crate::Session;

use anyhow::{Error, Result};

/// Line transport over the terminal. Prompts are written without a
/// trailing newline and flushed.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    pub fn write_line(&mut self, msg: &str) -> Result<()> {
        self.output.write_all(msg.as_bytes())?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns None once the input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

enum LoginStep {
    Username,
    Password,
}

pub struct Interpreter<U: UserRepository> {
    users: U,
    stack: Vec<Screen>,
    session: Session,
    login_step: LoginStep,
}

impl<U: UserRepository> Interpreter<U> {
    pub fn new(users: U) -> Interpreter<U> {
        Interpreter {
            users,
            stack: vec![Screen::Login],
            session: Session::new(),
            login_step: LoginStep::Username,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        log::info!("Starting a new session");
        self.render_active_screen(console)?;
        while !self.session.has_quit {
            console.write_prompt(self.prompt())?;
            let line = match console.read_line()? {
                Some(line) => line,
                None => {
                    log::info!("Input closed, shutting down");
                    break;
                }
            };
            self.handle_line(&line, console)?;
        }
        log::info!("Session closed properly");
        Ok(())
    }

    pub fn handle_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if self.active_screen() == Screen::Login {
            return self.handle_login(line, console);
        }
        log::debug!("<---- {}", line);
        if line.is_empty() {
            return Ok(());
        }
        let command = match Command::parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("{}", err);
                Self::send_reply(console, Error::new(err).into())?;
                return Ok(());
            }
        };
        let reply = match self.dispatch_command(command, console) {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("Command could not be honored: {}", err);
                Some(err.into())
            }
        };
        if let Some(reply) = reply {
            Self::send_reply(console, reply)?;
        }
        Ok(())
    }

    fn handle_login<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match self.login_step {
            LoginStep::Username => {
                log::debug!("<---- {}", line);
                if line.is_empty() {
                    return Ok(());
                }
                self.session.user(line.to_owned());
                Self::send_reply(console, Reply::AttemptingLogin(line.to_owned()))?;
                self.login_step = LoginStep::Password;
            }
            LoginStep::Password => {
                // The password never reaches the log.
                log::debug!("<---- [credentials hidden]");
                if line.is_empty() {
                    return Ok(());
                }
                let username = match self.session.username.take() {
                    Some(username) => username,
                    // Cannot happen through input; recover to the username step
                    None => {
                        self.login_step = LoginStep::Username;
                        return Ok(());
                    }
                };
                match self.users.find_by_credentials(&username, line) {
                    Some(user) => {
                        log::info!("User {} logged in", username);
                        Self::send_reply(console, Reply::LoggedIn(username))?;
                        self.session.authorize(user);
                        self.login_step = LoginStep::Username;
                        self.replace_stack(Screen::Home, console)?;
                    }
                    None => {
                        log::info!("Failed login attempt for {}", username);
                        Self::send_reply(console, Reply::AuthenticationFailed)?;
                        self.session.logout();
                        self.login_step = LoginStep::Username;
                    }
                }
            }
        }
        Ok(())
    }

    fn dispatch_command<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<Option<Reply>> {
        let screen = self.active_screen();
        match (screen, command) {
            (_, Command::Help) => {
                for line in screen.help() {
                    console.write_line(&line)?;
                }
                Ok(None)
            }
            (Screen::Home, Command::Logout) => {
                if let Ok(username) = self.session.current_user() {
                    log::info!("User {} logged out", username);
                }
                self.session.logout();
                self.login_step = LoginStep::Username;
                Self::send_reply(console, Reply::LoggedOut)?;
                self.replace_stack(Screen::Login, console)?;
                Ok(None)
            }
            (Screen::Home, Command::Exit) => {
                self.session.quit();
                Ok(Some(Reply::Closing))
            }
            (Screen::Home, Command::View(ViewTarget::Preferences)) => {
                self.push_screen(Screen::ViewPreferences, console)?;
                Ok(None)
            }
            (Screen::Home, Command::Edit(EditTarget::Preferences)) => {
                self.push_screen(Screen::EditPreferences, console)?;
                Ok(None)
            }
            (Screen::Home, Command::Quick) => {
                for line in Screen::quick_start() {
                    console.write_line(&line)?;
                }
                Ok(None)
            }
            (Screen::Home, Command::Recommend) => Ok(Some(Reply::NotImplemented)),
            (Screen::ViewPreferences, Command::Exit) => {
                self.pop_screen(console)?;
                Ok(None)
            }
            (Screen::ViewPreferences, Command::Edit(EditTarget::Preferences)) => {
                // Jump straight to editing, replacing this screen
                self.stack.pop();
                self.push_screen(Screen::EditPreferences, console)?;
                Ok(None)
            }
            (Screen::EditPreferences, Command::Exit) => {
                self.pop_screen(console)?;
                Ok(None)
            }
            (Screen::EditPreferences, Command::Edit(EditTarget::Preference(key))) => {
                self.push_screen(Screen::EditPreference(key), console)?;
                Ok(None)
            }
            (Screen::EditPreference(_), Command::Exit) => {
                self.pop_screen(console)?;
                Ok(None)
            }
            (Screen::EditPreference(key), Command::Add(option)) => {
                self.session.add_preference(key, &option)?;
                console.write_line(&self.session.preference_line(key)?)?;
                Ok(None)
            }
            (Screen::EditPreference(key), Command::Delete(option)) => {
                self.session.delete_preference(key, &option)?;
                console.write_line(&self.session.preference_line(key)?)?;
                Ok(None)
            }
            (Screen::EditPreference(key), Command::Set(raw)) => {
                self.session.set_preference(key, &raw)?;
                console.write_line(&self.session.preference_line(key)?)?;
                Ok(None)
            }
            (Screen::EditPreference(key), Command::Clear) => {
                self.session.clear_preference(key)?;
                console.write_line(&self.session.preference_line(key)?)?;
                Ok(None)
            }
            (Screen::EditPreference(key), Command::Options) => match key.options() {
                Some(options) => {
                    console.write_line(&format!("{} options:", key))?;
                    for option in options {
                        console.write_line(option)?;
                    }
                    Ok(None)
                }
                None => Ok(Some(Reply::NoOptionsList(key.to_string()))),
            },
            _ => Ok(Some(Reply::NotAvailableHere)),
        }
    }

    fn active_screen(&self) -> Screen {
        *self.stack.last().expect("screen stack is never empty")
    }

    fn prompt(&self) -> &'static str {
        match self.active_screen() {
            Screen::Login => match self.login_step {
                LoginStep::Username => "Enter username: ",
                LoginStep::Password => "Enter password: ",
            },
            _ => "> ",
        }
    }

    fn push_screen<R: BufRead, W: Write>(
        &mut self,
        screen: Screen,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.stack.push(screen);
        self.render_active_screen(console)
    }

    fn pop_screen<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        self.stack.pop();
        self.render_active_screen(console)
    }

    fn replace_stack<R: BufRead, W: Write>(
        &mut self,
        screen: Screen,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.stack.clear();
        self.stack.push(screen);
        self.render_active_screen(console)
    }

    fn render_active_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let screen = self.active_screen();
        let username = self.session.current_user().unwrap_or("").to_owned();
        for line in screen.banner(&username) {
            console.write_line(&line)?;
        }
        match screen {
            Screen::ViewPreferences | Screen::EditPreferences => {
                for line in self.session.preference_lines()? {
                    console.write_line(&line)?;
                }
            }
            Screen::EditPreference(key) => {
                console.write_line(&self.session.preference_line(key)?)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn send_reply<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        reply: Reply,
    ) -> Result<()> {
        let msg = reply.to_string();
        log::debug!("----> {}", msg);
        console.write_line(&msg)?;
        Ok(())
    }
}
