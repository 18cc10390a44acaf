//! The contact submission flow: validate, insert once, report.
//!
//! Every attempt ends in a `Notification`. Nothing is retried or queued; a
//! failed attempt keeps the visitor's input so they can resubmit by hand.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::contact::classify::ErrorClassifier;
use crate::contact::models::{ContactForm, Notification};
use crate::contact::store::{ContactStore, StoreError};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("The {0} field is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates `form` and sends exactly one insert to the store.
pub async fn submit(store: &dyn ContactStore, form: &ContactForm) -> Result<(), SubmissionError> {
    let record = form.to_record()?;
    store.insert(&record).await?;
    Ok(())
}

/// Form state and toast to render after an attempt.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub form: ContactForm,
    pub notification: Notification,
}

impl SubmissionOutcome {
    pub fn succeeded(&self) -> bool {
        self.notification.is_success()
    }
}

/// Runs `submit` and turns the result into what the visitor sees: a cleared
/// form and a success toast, or the untouched form and a failure toast.
pub async fn run_submission(
    store: &dyn ContactStore,
    classifier: &ErrorClassifier,
    form: ContactForm,
) -> SubmissionOutcome {
    match submit(store, &form).await {
        Ok(()) => {
            info!("Contact form submitted");
            SubmissionOutcome {
                form: ContactForm::default(),
                notification: Notification::sent(),
            }
        }
        Err(e) => {
            let description = describe_failure(&e, classifier);
            match &e {
                SubmissionError::MissingField(_) => warn!("Contact form rejected: {e}"),
                SubmissionError::Store(_) => error!("Contact form submission failed: {e}"),
            }
            SubmissionOutcome {
                form,
                notification: Notification::failed(description),
            }
        }
    }
}

pub fn describe_failure(e: &SubmissionError, classifier: &ErrorClassifier) -> String {
    match e {
        SubmissionError::MissingField(_) => e.to_string(),
        SubmissionError::Store(store_error) => {
            classifier.classify(store_error.server_message().as_deref())
        }
    }
}
