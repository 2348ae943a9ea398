use clap::{Parser, Subcommand};

/// Hearth: a Google Generative AI conversation agent for the home hub.
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, hearth=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the configured credentials with a test chat.
    Validate,
    /// Talk to the agent from the terminal (default).
    Chat,
    /// Print the options form schema as JSON.
    Options,
}

pub fn parse() -> Args {
    Args::parse()
}
