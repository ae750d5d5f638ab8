//! Contact form submission flow.
//!
//! read fields → validate → notify → (on success) reset + deliver.
//!
//! Delivery is a seam: `SimulatedDelivery` only logs. A real backend call
//! slots in as another `ContactDelivery`.

use tracing::{debug, info};

use crate::error::LandingResult;
use crate::state::form::{validate, ContactFields, ContactSubmission};
use crate::state::notify::NoticeKind;

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// The form controls.
pub trait FormSurface {
    fn read(&self) -> ContactFields;

    /// Clear all controls.
    fn reset(&mut self);
}

/// Anything that can show a toast.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NoticeKind);
}

/// Where validated submissions go.
pub trait ContactDelivery {
    fn deliver(&mut self, submission: &ContactSubmission);
}

/// Logs the submission and drops it.
#[derive(Debug, Default)]
pub struct SimulatedDelivery {
    delivered: usize,
}

impl SimulatedDelivery {
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl ContactDelivery for SimulatedDelivery {
    fn deliver(&mut self, submission: &ContactSubmission) {
        self.delivered += 1;
        info!(
            target: "landing::contact",
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "contact form submitted (simulated)"
        );
    }
}

pub struct ContactFormController<F, N, D = SimulatedDelivery> {
    form: F,
    notifier: N,
    delivery: D,
}

impl<F: FormSurface, N: Notifier> ContactFormController<F, N, SimulatedDelivery> {
    pub fn new(form: F, notifier: N) -> Self {
        Self::with_delivery(form, notifier, SimulatedDelivery::default())
    }
}

impl<F: FormSurface, N: Notifier, D: ContactDelivery> ContactFormController<F, N, D> {
    pub fn with_delivery(form: F, notifier: N, delivery: D) -> Self {
        Self {
            form,
            notifier,
            delivery,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Handle a submit. Validation failures are shown to the visitor and
    /// also returned.
    pub fn submit(&mut self) -> LandingResult<ContactSubmission> {
        let fields = self.form.read();
        match validate(&fields) {
            Ok(submission) => {
                self.notifier.notify(SUCCESS_MESSAGE, NoticeKind::Success);
                self.form.reset();
                self.delivery.deliver(&submission);
                Ok(submission)
            }
            Err(err) => {
                debug!(target: "landing::contact", %err, "contact form rejected");
                self.notifier.notify(err.user_message(), NoticeKind::Error);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormField, LandingError};

    struct FakeForm {
        fields: ContactFields,
        resets: usize,
    }

    impl FormSurface for FakeForm {
        fn read(&self) -> ContactFields {
            self.fields.clone()
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.fields = ContactFields::new("", "", "");
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: Vec<(String, NoticeKind)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, message: &str, kind: NoticeKind) {
            self.shown.push((message.to_string(), kind));
        }
    }

    fn setup(
        name: &str,
        email: &str,
        message: &str,
    ) -> ContactFormController<FakeForm, RecordingNotifier> {
        let form = FakeForm {
            fields: ContactFields::new(name, email, message),
            resets: 0,
        };
        ContactFormController::new(form, RecordingNotifier::default())
    }

    #[test]
    fn test_missing_field_notifies_error() {
        let mut controller = setup("", "a@b.com", "hi");
        let result = controller.submit();

        assert!(matches!(result, Err(LandingError::MissingField(FormField::Name))));
        assert_eq!(
            controller.notifier().shown,
            vec![("Please fill in all fields".to_string(), NoticeKind::Error)]
        );
        assert_eq!(controller.form().resets, 0);
        assert_eq!(controller.delivery().delivered(), 0);
    }

    #[test]
    fn test_invalid_email_notifies_error() {
        let mut controller = setup("A", "not-an-email", "hi");
        assert!(matches!(controller.submit(), Err(LandingError::InvalidEmail)));
        assert_eq!(
            controller.notifier().shown[0].0,
            "Please enter a valid email address"
        );
        // Fields stay for correction
        assert_eq!(controller.form().fields.email.as_deref(), Some("not-an-email"));
    }

    #[test]
    fn test_success_clears_form() {
        let mut controller = setup("A", "a@b.com", "hi");
        let submission = controller.submit().unwrap();

        assert_eq!(submission.email, "a@b.com");
        assert_eq!(
            controller.notifier().shown,
            vec![(SUCCESS_MESSAGE.to_string(), NoticeKind::Success)]
        );
        assert_eq!(controller.form().resets, 1);
        assert_eq!(controller.form().fields, ContactFields::new("", "", ""));
        assert_eq!(controller.delivery().delivered(), 1);
    }

    #[test]
    fn test_resubmission_after_fix() {
        let mut controller = setup("A", "bad", "hi");
        assert!(controller.submit().is_err());

        controller.form.fields.email = Some("a@b.com".into());
        assert!(controller.submit().is_ok());
        assert_eq!(controller.notifier().shown.len(), 2);
    }
}
