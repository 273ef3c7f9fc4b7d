use std::io::Write;

use clap::Subcommand;

use crate::auth::TokenService;
use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Issue a token for a username (reads JWT_SECRET)")]
    Issue {
        #[arg(help = "Username to embed in the token")]
        username: String,
    },

    #[command(about = "Validate a token and print its claims")]
    Check {
        #[arg(help = "Token to validate")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, out: impl Write) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let tokens = TokenService::from_config(&config.security)?;
    handle_with(&tokens, cmd, out)
}

pub fn handle_with(tokens: &TokenService, cmd: TokenCommands, mut out: impl Write) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Issue { username } => {
            writeln!(out, "{}", tokens.issue(&username)?)?;
        }
        TokenCommands::Check { token } => {
            let claims = tokens.validate(&token)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&claims)?)?;
        }
    }
    Ok(())
}
