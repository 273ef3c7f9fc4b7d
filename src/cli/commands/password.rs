use std::io::Write;

use clap::Subcommand;

use crate::auth::password;

#[derive(Subcommand)]
pub enum PasswordCommands {
    #[command(about = "Print a bcrypt hash suitable for the user.password column")]
    Hash {
        #[arg(help = "Plaintext password")]
        password: String,
        #[arg(long, default_value_t = password::DEFAULT_COST, help = "bcrypt cost factor")]
        cost: u32,
    },

    #[command(about = "Check a plaintext password against a stored hash (prints match/mismatch)")]
    Verify {
        #[arg(help = "Plaintext password")]
        password: String,
        #[arg(help = "Stored bcrypt hash")]
        hash: String,
    },
}

/// Returns `false` only for a `verify` mismatch, so the binary can exit non-zero.
pub fn handle(cmd: PasswordCommands, mut out: impl Write) -> anyhow::Result<bool> {
    match cmd {
        PasswordCommands::Hash { password, cost } => {
            writeln!(out, "{}", password::hash(&password, cost)?)?;
            Ok(true)
        }
        PasswordCommands::Verify { password, hash } => {
            let matched = password::verify(&password, &hash);
            writeln!(out, "{}", if matched { "match" } else { "mismatch" })?;
            Ok(matched)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cmd: PasswordCommands) -> (bool, String) {
        let mut out = Vec::new();
        let ok = handle(cmd, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn verify_prints_match_for_the_right_password() {
        let stored = password::hash("christy@123", 4).unwrap();
        let (ok, printed) = run(PasswordCommands::Verify {
            password: "christy@123".to_string(),
            hash: stored,
        });
        assert!(ok);
        assert_eq!(printed, "match\n");
    }

    #[test]
    fn verify_prints_mismatch_instead_of_failing() {
        let stored = password::hash("christy@123", 4).unwrap();
        let (ok, printed) = run(PasswordCommands::Verify {
            password: "wrong".to_string(),
            hash: stored,
        });
        assert!(!ok);
        assert_eq!(printed, "mismatch\n");

        let (ok, printed) = run(PasswordCommands::Verify {
            password: "christy@123".to_string(),
            hash: "not-a-bcrypt-hash".to_string(),
        });
        assert!(!ok);
        assert_eq!(printed, "mismatch\n");
    }

    #[test]
    fn hash_output_verifies() {
        let (ok, printed) = run(PasswordCommands::Hash {
            password: "secret".to_string(),
            cost: 4,
        });
        assert!(ok);
        assert!(password::verify("secret", printed.trim_end()));
    }
}
