//! Waitlist form state: what the visitor typed and whether a signup is in flight.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use log::{info, warn};
use yew::prelude::*;

use crate::components::toast::{Toast, Toaster};
use crate::signup::{SignupError, SignupResult, SignupService};

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to join waitlist. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionFlow {
    pub email: String,
    pub phase: Phase,
}

#[derive(Debug)]
pub enum FlowAction {
    Input(String),
    Begin,
    Settle(Result<SignupResult, SignupError>),
}

impl SubmissionFlow {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

impl Reducible for SubmissionFlow {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FlowAction::Input(email) => Self {
                email,
                phase: self.phase,
            }
            .into(),
            FlowAction::Begin => Self {
                email: self.email.clone(),
                phase: Phase::Submitting,
            }
            .into(),
            FlowAction::Settle(Ok(_)) => Self::default().into(),
            FlowAction::Settle(Err(_)) => Self {
                email: self.email.clone(),
                phase: Phase::Idle,
            }
            .into(),
        }
    }
}

/// Checks the typed address before anything is sent. Returns the trimmed address,
/// or the toast to show when there is nothing to submit.
pub fn validate(email: &str) -> Result<String, Toast> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Toast::destructive("Error", EMPTY_EMAIL_MESSAGE));
    }
    Ok(email.to_string())
}

/// Toast announcing how a finished signup went.
pub fn settle_toast(outcome: &Result<SignupResult, SignupError>) -> Toast {
    match outcome {
        Ok(result) => {
            info!("Waitlist signup succeeded");
            Toast::new("Success!", result.message.clone())
        }
        Err(e) => {
            warn!("Waitlist signup failed: {}", e);
            Toast::destructive("Error", SIGNUP_FAILED_MESSAGE)
        }
    }
}

/// One press of the submit button.
///
/// A blank address raises the error toast and returns `None` without calling the
/// service. Otherwise the form is marked as submitting and the returned future
/// finishes the signup: it raises the outcome toast and settles the form.
pub fn submit(
    email: &str,
    service: &dyn SignupService,
    dispatch: Callback<FlowAction>,
    toaster: Toaster,
) -> Option<LocalBoxFuture<'static, ()>> {
    let email = match validate(email) {
        Ok(email) => email,
        Err(toast) => {
            toaster.toast(toast);
            return None;
        }
    };

    info!("Submitting waitlist signup");
    dispatch.emit(FlowAction::Begin);

    let pending = service.signup(email);
    Some(
        async move {
            let outcome = pending.await;
            toaster.toast(settle_toast(&outcome));
            dispatch.emit(FlowAction::Settle(outcome));
        }
        .boxed_local(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastVariant;
    use crate::signup::MockSignup;
    use std::cell::RefCell;
    use std::time::Duration;

    /// Stands in for the landing page: folds dispatched actions into a form and
    /// collects every toast raised.
    struct Page {
        form: Rc<RefCell<Rc<SubmissionFlow>>>,
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    impl Page {
        fn typed(email: &str) -> Self {
            let form = Rc::new(SubmissionFlow::default()).reduce(FlowAction::Input(email.to_string()));
            Self {
                form: Rc::new(RefCell::new(form)),
                toasts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn dispatch(&self) -> Callback<FlowAction> {
            let form = self.form.clone();
            Callback::from(move |action: FlowAction| {
                let next = form.borrow().clone().reduce(action);
                *form.borrow_mut() = next;
            })
        }

        fn toaster(&self) -> Toaster {
            let toasts = self.toasts.clone();
            Toaster::from(Callback::from(move |toast: Toast| toasts.borrow_mut().push(toast)))
        }

        fn press_submit(&self, service: &dyn SignupService) -> Option<LocalBoxFuture<'static, ()>> {
            let email = self.form.borrow().email.clone();
            submit(&email, service, self.dispatch(), self.toaster())
        }

        fn form(&self) -> Rc<SubmissionFlow> {
            self.form.borrow().clone()
        }
    }

    struct RecordingSignup {
        seen: RefCell<Vec<String>>,
        inner: MockSignup,
    }

    impl RecordingSignup {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
                inner: MockSignup::new(Duration::from_millis(5)),
            }
        }
    }

    impl SignupService for RecordingSignup {
        fn signup(&self, email: String) -> LocalBoxFuture<'static, Result<SignupResult, SignupError>> {
            self.seen.borrow_mut().push(email.clone());
            self.inner.signup(email)
        }
    }

    struct BrokenSignup;

    impl SignupService for BrokenSignup {
        fn signup(&self, _email: String) -> LocalBoxFuture<'static, Result<SignupResult, SignupError>> {
            async { Err(SignupError::Transport("connection reset".to_string())) }.boxed_local()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn successful_submit_clears_the_form() {
        let page = Page::typed("user@example.com");
        let pending = page.press_submit(&MockSignup::default()).expect("signup should start");

        assert!(page.form().is_submitting());
        assert_eq!(page.form().email, "user@example.com");
        assert!(page.toasts.borrow().is_empty());

        pending.await;

        assert_eq!(page.form().email, "");
        assert_eq!(page.form().phase, Phase::Idle);
        assert_eq!(
            *page.toasts.borrow(),
            vec![Toast::new("Success!", "Successfully joined the waitlist!")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn blank_email_never_reaches_the_service() {
        let service = RecordingSignup::new();
        for input in ["", "   ", "\t\n"] {
            let page = Page::typed(input);

            assert!(page.press_submit(&service).is_none());

            assert_eq!(page.form().email, input);
            assert_eq!(page.form().phase, Phase::Idle);
            let toasts = page.toasts.borrow();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].title, "Error");
            assert_eq!(toasts[0].description, "Please enter your email address");
            assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        }
        assert!(service.seen.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_address_is_trimmed() {
        let service = RecordingSignup::new();
        let page = Page::typed("  user@example.com \n");

        page.press_submit(&service).expect("signup should start").await;

        assert_eq!(*service.seen.borrow(), vec!["user@example.com".to_string()]);
        assert_eq!(page.form().email, "");
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_typed_email() {
        let page = Page::typed("user@example.com");
        let pending = page.press_submit(&BrokenSignup).expect("signup should start");
        assert!(page.form().is_submitting());

        pending.await;

        assert_eq!(page.form().email, "user@example.com");
        assert_eq!(page.form().phase, Phase::Idle);
        assert_eq!(
            *page.toasts.borrow(),
            vec![Toast::destructive("Error", "Failed to join waitlist. Please try again.")]
        );
    }

    #[test]
    fn validate_trims_surrounding_whitespace() {
        assert_eq!(validate("  user@example.com \n"), Ok("user@example.com".to_string()));
    }

    #[test]
    fn typing_while_submitting_keeps_the_phase() {
        let form = Rc::new(SubmissionFlow::default())
            .reduce(FlowAction::Input("a@b.co".to_string()))
            .reduce(FlowAction::Begin)
            .reduce(FlowAction::Input("a@b.com".to_string()));
        assert!(form.is_submitting());
        assert_eq!(form.email, "a@b.com");
    }
}
