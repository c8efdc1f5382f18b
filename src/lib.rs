//! # Guarita
//!
//! `guarita` is a minimal user registration and authentication service. It
//! stores user credentials in PostgreSQL, issues signed bearer tokens on
//! login, and gates the profile endpoint behind token verification.
//!
//! ## Authentication
//!
//! Passwords are stored only as salted bcrypt hashes (configurable work
//! factor, default 12). Tokens are stateless HS256 JWTs carrying the user id
//! and an expiry claim; nothing is persisted server-side for a session.
//!
//! ## Authorization
//!
//! Any authenticated caller may read any profile. The token guard decodes the
//! verified claims into a [`api::handlers::auth::Principal`] so handlers can
//! tighten this policy without touching the guard.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
