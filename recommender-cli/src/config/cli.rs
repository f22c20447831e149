use clap::Parser;

use super::{Config, ConfigChanges};

use log::LevelFilter;

#[derive(Parser)]
#[clap(version, author)]
pub struct CliConfig {
    /// Sets the path to toml configuration file
    #[clap(name = "config", short, long)]
    pub config_file: Option<String>,

    /// Silences logging on the console
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Turns on debug logging on the console
    #[clap(short, long)]
    pub verbose: bool,
}

impl ConfigChanges for CliConfig {
    fn apply(&self, config: &mut Config) {
        if self.quiet {
            config.log.console.level = LevelFilter::Off;
        }
        if self.verbose {
            config.log.console.level = LevelFilter::Debug;
        }
    }
}
