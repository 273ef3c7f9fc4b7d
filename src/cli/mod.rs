pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Admin helpers for the COVID-19 portal API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Hash and check passwords for out-of-band user provisioning")]
    Password {
        #[command(subcommand)]
        cmd: commands::password::PasswordCommands,
    },

    #[command(about = "Issue and inspect session tokens with the configured secret")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },
}

/// Runs one command, writing its output to stdout.
///
/// `Ok(false)` means the command ran but reported a negative result
/// (`password verify` mismatch); the binary turns that into a failing exit code.
pub fn run(cli: Cli) -> anyhow::Result<bool> {
    let stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Password { cmd } => commands::password::handle(cmd, stdout),
        Commands::Token { cmd } => commands::token::handle(cmd, stdout).map(|_| true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_password_hash_with_cost() {
        let cli = Cli::try_parse_from(["portal", "password", "hash", "secret", "--cost", "6"]).unwrap();
        match cli.command {
            Commands::Password {
                cmd: commands::password::PasswordCommands::Hash { password, cost },
            } => {
                assert_eq!(password, "secret");
                assert_eq!(cost, 6);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn parses_every_documented_command() {
        for args in [
            &["portal", "password", "hash", "secret"][..],
            &["portal", "password", "verify", "secret", "$2b$04$hash"],
            &["portal", "token", "issue", "christopher_phillips"],
            &["portal", "token", "check", "a.b.c"],
        ] {
            assert!(Cli::try_parse_from(args).is_ok(), "{args:?}");
        }
        assert!(Cli::try_parse_from(["portal", "password", "verify", "secret"]).is_err());
    }
}
