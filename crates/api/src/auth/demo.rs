//! The single demo login.
//!
//! There is no user table: one username/password pair comes from the
//! environment. Both sides are compared as SHA-256 digests so the comparison
//! always covers the same number of bytes regardless of input length.

use sha2::{Digest, Sha256};

pub const DEFAULT_DEMO_USERNAME: &str = "demo@gapply.io";
pub const DEFAULT_DEMO_PASSWORD: &str = "gapply-demo";

/// Role carried in tokens issued to the demo login.
pub const DEMO_ROLE: &str = "demo";

#[derive(Clone)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DemoCredentials {
    /// | Env Var          | Default          |
    /// |------------------|------------------|
    /// | `DEMO_USERNAME`  | `demo@gapply.io` |
    /// | `DEMO_PASSWORD`  | `gapply-demo`    |
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("DEMO_USERNAME")
                .unwrap_or_else(|_| DEFAULT_DEMO_USERNAME.into()),
            password: std::env::var("DEMO_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_DEMO_PASSWORD.into()),
        }
    }

    /// Check a login attempt. Usernames are compared case-insensitively.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = digest(&username.trim().to_lowercase())
            == digest(&self.username.trim().to_lowercase());
        let pass_ok = digest(password) == digest(&self.password);
        user_ok & pass_ok
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_DEMO_USERNAME.into(),
            password: DEFAULT_DEMO_PASSWORD.into(),
        }
    }
}

fn digest(value: &str) -> sha2::digest::Output<Sha256> {
    Sha256::digest(value.as_bytes())
}
