use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResult {
    pub success: bool,
    pub message: String,
}

/// Failures a networked signup can run into. `MockSignup` never produces any of them.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignupError {
    #[error("signup rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("signup timed out")]
    Timeout,
}

/// Registers an address on the beta waitlist.
pub trait SignupService {
    fn signup(&self, email: String) -> LocalBoxFuture<'static, Result<SignupResult, SignupError>>;
}

/// Stand-in for the waitlist endpoint: waits a fixed delay, then always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSignup {
    pub delay: Duration,
}

impl MockSignup {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockSignup {
    fn default() -> Self {
        Self::new(config::get_signup_delay())
    }
}

impl SignupService for MockSignup {
    fn signup(&self, email: String) -> LocalBoxFuture<'static, Result<SignupResult, SignupError>> {
        let delay = self.delay;
        async move {
            info!("Mock: email signup submitted: {}", email);
            sleep(delay).await;
            Ok(SignupResult {
                success: true,
                message: SIGNUP_SUCCESS_MESSAGE.to_string(),
            })
        }
        .boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn mock_resolves_after_its_delay() {
        let service = MockSignup::default();
        let started = Instant::now();

        let result = service.signup("user@example.com".to_string()).await;

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(
            result,
            Ok(SignupResult {
                success: true,
                message: "Successfully joined the waitlist!".to_string(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn mock_accepts_anything() {
        let service = MockSignup::new(Duration::from_millis(10));
        for input in ["", "   ", "not an email", "user@example.com"] {
            let result = service.signup(input.to_string()).await.unwrap();
            assert!(result.success);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_signups_are_independent() {
        let service = MockSignup::new(Duration::from_millis(50));
        let (first, second) = futures::join!(
            service.signup("twice@example.com".to_string()),
            service.signup("twice@example.com".to_string()),
        );
        assert_eq!(first, second);
        assert!(first.unwrap().success);
    }

    #[test]
    fn result_matches_endpoint_shape() {
        let parsed: SignupResult = serde_json::from_str(
            r#"{"success":true,"message":"Successfully joined the waitlist!"}"#,
        )
        .unwrap();
        assert_eq!(parsed.message, SIGNUP_SUCCESS_MESSAGE);
        assert!(parsed.success);
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(SignupError::Timeout.to_string(), "signup timed out");
        assert_eq!(
            SignupError::Rejected("Invalid email address".to_string()).to_string(),
            "signup rejected: Invalid email address"
        );
    }
}
