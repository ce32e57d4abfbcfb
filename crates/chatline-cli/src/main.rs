use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

use commands::Overrides;

#[derive(Parser)]
#[command(name = "chatline")]
#[command(about = "Chatline CLI - talk to a remote assistant one session at a time", long_about = None)]
struct Cli {
    /// Server base URL (overrides config and CHATLINE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Auth token (overrides config and CHATLINE_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Config file to use instead of ~/.config/chatline/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat (default)
    Chat,
    /// Send one message and print the reply
    Send {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the messages of the current session
    History,
    /// List the sessions known to the server
    Sessions,
    /// Clear the current session
    Clear,
    /// Save the current session and start a new one
    New,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let overrides = Overrides {
        config_path: cli.config,
        base_url: cli.base_url,
        token: cli.token,
    };

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::interactive::run(&overrides).await?,
        Commands::Send { text } => commands::conversation::send(&overrides, &text.join(" ")).await?,
        Commands::History => commands::conversation::history(&overrides).await?,
        Commands::Sessions => commands::conversation::sessions(&overrides).await?,
        Commands::Clear => commands::conversation::clear(&overrides).await?,
        Commands::New => commands::conversation::new(&overrides).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&overrides)?,
            ConfigAction::Init { force } => commands::config::init(&overrides, force)?,
            ConfigAction::Path => commands::config::path(&overrides)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_chat() {
        let cli = Cli::try_parse_from(["chatline"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_send_joins_words_and_accepts_global_flags() {
        let cli = Cli::try_parse_from([
            "chatline",
            "send",
            "hello",
            "there",
            "--base-url",
            "https://chat.example.com",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("https://chat.example.com"));
        match cli.command {
            Some(Commands::Send { text }) => assert_eq!(text.join(" "), "hello there"),
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_send_requires_text() {
        assert!(Cli::try_parse_from(["chatline", "send"]).is_err());
    }
}
