//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::say::run_say;
use crate::core::config::Config;
use crate::core::settings::SessionSettings;
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::init_file_logging;

#[derive(Parser)]
#[command(name = "chatshell")]
#[command(about = "A terminal chat shell with a simulated agent")]
#[command(
    long_about = "Chatshell is a full-screen terminal chat interface. Messages you send are \
answered by a simulated agent after a short delay; any message containing the word \
\"error\" fails on purpose so the error display can be tried out.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a new line\n\
  Ctrl+L            Clear the conversation\n\
  Esc / Ctrl+C      Quit the application\n\n\
Environment Variables:\n\
  CHATSHELL_LOG     Log filter used with --log (default: info)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Write diagnostic logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Milliseconds the simulated agent waits before replying
    #[arg(short = 'd', long = "delay-ms", global = true, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send one message without the TUI and print the reply
    Say {
        /// Message text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
        /// Print the final session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = args.log.as_deref() {
        init_file_logging(path)?;
    }

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            run_chat(SessionSettings::resolve(&config, args.delay_ms)).await
        }
        Commands::Say { prompt, json } => {
            let config = Config::load()?;
            let settings = SessionSettings::resolve(&config, args.delay_ms);
            let succeeded = run_say(&settings, &prompt.join(" "), json).await?;
            if !succeeded {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            match value.filter(|parts| !parts.is_empty()) {
                Some(parts) => {
                    let value = parts.join(" ");
                    if let Err(err) = config.set_key(&key, &value) {
                        eprintln!("❌ {err}");
                        std::process::exit(1);
                    }
                    config.save()?;
                    println!("✅ Set {key} to: {value}");
                }
                None => config.print_all(),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            if let Err(err) = config.unset_key(&key) {
                eprintln!("❌ {err}");
                std::process::exit(1);
            }
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
