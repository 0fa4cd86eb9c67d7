use anyhow::Context;

/// Shared secret used to verify HS256 bearer tokens
pub struct JwtConfig {
    pub secret_key: String,
}

impl JwtConfig {
    /// Environment variables:
    /// - JWT_SECRET_KEY: signing secret shared with the token issuer (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = std::env::var("JWT_SECRET_KEY").context("JWT_SECRET_KEY must be set")?;
        if secret_key.trim().is_empty() {
            anyhow::bail!("JWT_SECRET_KEY must not be empty");
        }
        Ok(Self { secret_key })
    }
}
