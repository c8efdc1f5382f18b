use secrecy::SecretString;

/// Runtime configuration threaded into every handler via `Extension`.
///
/// Handlers never read environment variables; everything they need is
/// resolved once at startup and carried here.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub token_secret: SecretString,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(token_secret: SecretString, token_ttl_seconds: i64, bcrypt_cost: u32) -> Self {
        Self {
            token_secret,
            token_ttl_seconds,
            bcrypt_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("hunter2".to_string()), 3600, 12);
        assert_eq!(args.token_secret.expose_secret(), "hunter2");
        assert_eq!(args.token_ttl_seconds, 3600);
        assert_eq!(args.bcrypt_cost, 12);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let args = GlobalArgs::new(SecretString::from("hunter2".to_string()), 3600, 12);
        let debug = format!("{args:?}");
        assert!(!debug.contains("hunter2"));
    }
}
