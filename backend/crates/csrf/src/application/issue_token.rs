//! Issue Token Use Case

use crate::application::config::CsrfConfig;
use crate::domain::services::{generate_secret, is_well_formed_secret, mint_token};
use std::sync::Arc;

/// Output DTO for issue token
#[derive(Debug, Clone)]
pub struct IssueTokenOutput {
    pub token: String,
    /// Set when the client had no usable secret and a cookie must be sent
    pub new_secret: Option<String>,
}

/// Issue Token Use Case
pub struct IssueTokenUseCase {
    config: Arc<CsrfConfig>,
}

impl IssueTokenUseCase {
    pub fn new(config: Arc<CsrfConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, existing_secret: Option<String>) -> IssueTokenOutput {
        let existing = existing_secret
            .filter(|secret| is_well_formed_secret(secret, self.config.secret_bytes_len));

        let (secret, new_secret) = match existing {
            Some(secret) => (secret, None),
            None => {
                let secret = generate_secret(self.config.secret_bytes_len);
                tracing::debug!("Issued new CSRF secret");
                (secret.clone(), Some(secret))
            }
        };

        let token = mint_token(&self.config.signing_key, &secret, self.config.salt_bytes_len);

        IssueTokenOutput { token, new_secret }
    }
}
