//! In-memory registry of pending email verification codes.

use rand::Rng;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

/// Log target carrying issued codes; always enabled at INFO.
pub const CODE_DELIVERY_TARGET: &str = "authgate::verification";

/// One pending code per email; issuing again replaces the previous code.
/// Entries live until the process exits.
#[derive(Debug, Default)]
pub struct VerificationCodes {
    codes: Mutex<HashMap<String, u32>>,
}

impl VerificationCodes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a new six digit code for `email`, replacing any pending one.
    pub async fn issue(&self, email: &str) -> u32 {
        let code = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
        self.codes.lock().await.insert(email.to_string(), code);
        code
    }

    /// Compare `code` with the pending code for `email`. The entry is kept either way.
    pub async fn check(&self, email: &str, code: u32) -> bool {
        self.codes.lock().await.get(email) == Some(&code)
    }

    pub async fn pending(&self, email: &str) -> Option<u32> {
        self.codes.lock().await.get(email).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn issued_code_is_in_range_and_checks() {
        let codes = VerificationCodes::new();
        let code = codes.issue("a@b.com").await;

        assert!((CODE_MIN..=CODE_MAX).contains(&code));
        assert!(codes.check("a@b.com", code).await);
        // not consumed
        assert!(codes.check("a@b.com", code).await);
        assert_eq!(codes.pending("a@b.com").await, Some(code));
    }

    #[tokio::test]
    async fn wrong_code_or_unknown_email_fails() {
        let codes = VerificationCodes::new();
        let code = codes.issue("a@b.com").await;
        let other = if code == CODE_MAX { CODE_MIN } else { code + 1 };

        assert!(!codes.check("a@b.com", other).await);
        assert!(!codes.check("c@d.com", code).await);
        assert!(codes.check("a@b.com", code).await);
    }

    #[tokio::test]
    async fn reissue_replaces_previous_code() {
        let codes = VerificationCodes::new();
        let mut first = codes.issue("a@b.com").await;
        let mut second = codes.issue("a@b.com").await;
        // 1 in 900000 chance of drawing the same code twice
        while second == first {
            first = second;
            second = codes.issue("a@b.com").await;
        }

        assert!(!codes.check("a@b.com", first).await);
        assert!(codes.check("a@b.com", second).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_issues_keep_one_code_per_email() {
        let codes = Arc::new(VerificationCodes::new());

        let mut handles = Vec::new();
        for i in 0..100 {
            let codes = Arc::clone(&codes);
            handles.push(tokio::spawn(async move {
                let email = format!("user{i}@example.com");
                let code = codes.issue(&email).await;
                (email, code)
            }));
        }

        // same email from many tasks: the last write wins
        let mut shared = Vec::new();
        for _ in 0..20 {
            let codes = Arc::clone(&codes);
            shared.push(tokio::spawn(
                async move { codes.issue("shared@example.com").await },
            ));
        }

        for handle in handles {
            let (email, code) = handle.await.unwrap();
            assert!(codes.check(&email, code).await, "{email}");
            assert_eq!(codes.pending(&email).await, Some(code));
        }

        let mut issued = Vec::new();
        for handle in shared {
            issued.push(handle.await.unwrap());
        }
        let pending = codes.pending("shared@example.com").await.unwrap();
        assert!(issued.contains(&pending));
    }

    #[tokio::test]
    async fn emails_are_independent() {
        let codes = VerificationCodes::new();
        let a = codes.issue("a@b.com").await;
        let c = codes.issue("c@d.com").await;

        assert!(codes.check("a@b.com", a).await);
        assert!(codes.check("c@d.com", c).await);
        assert_eq!(codes.pending("e@f.com").await, None);
    }
}
