//! Customer Password Value Object
//!
//! Delegates to `platform::password` for cryptographic operations. Hashing
//! and verification run on the blocking pool.

use crate::error::{PortalError, PortalResult};
use platform::password::{ClearTextPassword, HashedPassword, hash_password, verify_password};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Password as typed by the customer. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Empty input is rejected; whitespace is a valid password
    pub fn new(raw: String) -> PortalResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|_| PortalError::PasswordRequired)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Customer Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string as stored in `customers.password_hash`
#[derive(Clone, PartialEq, Eq)]
pub struct CustomerPassword(HashedPassword);

impl CustomerPassword {
    pub async fn hash(raw: RawPassword, pepper: Option<Vec<u8>>) -> PortalResult<Self> {
        hash_password(raw.0, pepper)
            .await
            .map(Self)
            .map_err(|e| PortalError::Internal(e.to_string()))
    }

    /// `Ok(false)` for a wrong password or an unparseable stored digest
    pub async fn verify(&self, raw: RawPassword, pepper: Option<Vec<u8>>) -> PortalResult<bool> {
        verify_password(self.0.clone(), raw.0, pepper)
            .await
            .map_err(|e| PortalError::Internal(e.to_string()))
    }

    pub fn from_db(phc_string: String) -> Self {
        Self(HashedPassword::from_stored(phc_string))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for CustomerPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
