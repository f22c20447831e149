use std::io;
use std::io::{BufRead, Write};

use crate::user::InMemoryUsers;
use crate::Config;
use crate::{Console, Interpreter};

use anyhow::Result;

pub struct RecommenderApp {
    config: Config,
}

impl RecommenderApp {
    pub fn new(config: Config) -> RecommenderApp {
        RecommenderApp { config }
    }

    /// Runs a single interactive session over stdin/stdout.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_session(stdin.lock(), stdout.lock())
    }

    pub fn run_session<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<()> {
        let mut console = Console::new(input, output);
        let users = InMemoryUsers::new(self.config.users.clone());
        let mut interpreter = Interpreter::new(users);
        interpreter.run(&mut console)
    }
}
