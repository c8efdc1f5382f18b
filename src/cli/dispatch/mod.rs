//! Command-line argument dispatch and server initialization.
//!
//! This module maps validated CLI arguments to the appropriate action, such
//! as starting the API server with its full configuration state.

use crate::cli::actions::{server::Args, Action};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let secret = matches
        .get_one::<String>("secret")
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --secret")?;

    let token_ttl_seconds = matches
        .get_one::<i64>("token-ttl")
        .copied()
        .unwrap_or(86400);

    let bcrypt_cost = matches.get_one::<u32>("bcrypt-cost").copied().unwrap_or(12);

    Ok(Action::Server(Args {
        port,
        dsn,
        secret,
        token_ttl_seconds,
        bcrypt_cost,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_server_action_from_env() {
        temp_env::with_vars(
            [
                ("GUARITA_PORT", Some("9090")),
                ("GUARITA_DSN", Some("postgres://localhost:5432/guarita")),
                ("GUARITA_SECRET", Some("hunter2")),
                ("GUARITA_TOKEN_TTL", Some("600")),
                ("GUARITA_BCRYPT_COST", Some("4")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["guarita"]);
                let action = handler(&matches).unwrap();

                let Action::Server(args) = action;
                assert_eq!(args.port, 9090);
                assert_eq!(args.dsn, "postgres://localhost:5432/guarita");
                assert_eq!(args.secret.expose_secret(), "hunter2");
                assert_eq!(args.token_ttl_seconds, 600);
                assert_eq!(args.bcrypt_cost, 4);
            },
        );
    }
}
