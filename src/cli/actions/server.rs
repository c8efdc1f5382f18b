use crate::{api, cli::globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub secret: SecretString,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let globals = GlobalArgs::new(args.secret, args.token_ttl_seconds, args.bcrypt_cost);

    debug!("Global args: {:?}", globals);

    api::new(args.port, args.dsn, globals).await
}
