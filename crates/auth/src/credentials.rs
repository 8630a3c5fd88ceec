//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the access
//! secret and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Cloud project credentials for signed open API requests.
///
/// The access secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    client_id: String,
    secret: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `TUYA_CLIENT_ID` - The cloud project client id (public)
    /// - `TUYA_SECRET` - The access secret (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let client_id = std::env::var("TUYA_CLIENT_ID")
            .map_err(|_| AuthError::MissingEnvVar("TUYA_CLIENT_ID".into()))?;

        let secret = std::env::var("TUYA_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("TUYA_SECRET".into()))?;

        Ok(Self::new(client_id, secret))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials arrive as per-call overrides.
    pub fn new(client_id: String, secret: String) -> Self {
        Self {
            client_id,
            secret: SecretString::from(secret),
        }
    }

    /// Get the client id (public, safe to log).
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Expose the access secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("client_id", &self.client_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = ApiCredentials::new("my_client_id".into(), "my_secret".into());
        assert_eq!(creds.client_id(), "my_client_id");
        assert_eq!(creds.expose_secret(), "my_secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("my_client_id".into(), "super_secret_key".into());
        let debug_str = format!("{:?}", creds);

        assert!(debug_str.contains("my_client_id"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
