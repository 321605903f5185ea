use std::sync::Arc;

use super::{codes::VerificationCodes, hasher::PasswordHasher, store::CredentialStore};

/// Everything the handlers share, injected through an `Extension` layer.
pub struct AuthState {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    codes: VerificationCodes,
}

impl AuthState {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Self {
        Self {
            store,
            hasher,
            codes: VerificationCodes::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn hasher(&self) -> PasswordHasher {
        self.hasher
    }

    #[must_use]
    pub fn codes(&self) -> &VerificationCodes {
        &self.codes
    }
}
