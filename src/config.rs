//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::SettingsError,
    state::settings::{
        Settings, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_ROUNDS, DEFAULT_SHORT_BREAK_MINUTES,
        DEFAULT_WORK_MINUTES,
    },
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A Pomodoro interval timer served over a small HTTP API")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work phase duration in minutes
    #[arg(short, long, default_value_t = DEFAULT_WORK_MINUTES)]
    pub work: u32,

    /// Short break duration in minutes
    #[arg(short, long, default_value_t = DEFAULT_SHORT_BREAK_MINUTES)]
    pub short_break: u32,

    /// Long break duration in minutes
    #[arg(short, long, default_value_t = DEFAULT_LONG_BREAK_MINUTES)]
    pub long_break: u32,

    /// Work rounds before the long break
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u32,

    /// Shell command run when a work phase ends
    #[arg(long)]
    pub work_cue: Option<String>,

    /// Shell command run when a break ends
    #[arg(long)]
    pub break_cue: Option<String>,

    /// Expose developer-only endpoints such as /skip
    #[arg(long)]
    pub dev: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial timer settings from the command line
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        Settings::new(self.work, self.short_break, self.long_break, self.rounds)
    }
}
