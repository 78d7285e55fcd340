pub mod init;
pub mod menu;
pub mod password;
pub mod pattern;

use crate::libs::data_storage::APP_VERSION;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Interactive menu (default when no command is given)")]
    Menu,
    #[command(about = "Generate passwords of the form [A-Z][3 distinct digits][a-z]")]
    Password(password::PasswordArgs),
    #[command(about = "Count and list binary strings without consecutive 1s")]
    Pattern(pattern::PatternArgs),
}

#[derive(Debug, Parser)]
#[command(author, version = APP_VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        Self::parse().dispatch()
    }

    pub fn dispatch(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Password(args)) => password::cmd(args),
            Some(Commands::Pattern(args)) => pattern::cmd(args),
            Some(Commands::Menu) | None => menu::cmd(),
        }
    }
}
