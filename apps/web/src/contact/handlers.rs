use axum::{extract::State, http::StatusCode, response::Html, Form, Json};

use crate::contact::models::{ContactForm, Notification};
use crate::contact::submit::{describe_failure, run_submission, submit, SubmissionError};
use crate::errors::AppError;
use crate::pages::{self, contact::ContactPageState};
use crate::state::AppState;

/// POST /contact
///
/// Form post from the contact page. Always re-renders the page: on success with
/// a cleared form, on failure with the visitor's input intact. Both carry a toast.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let outcome = run_submission(state.contact_store.as_ref(), &state.classifier, form).await;

    let page = ContactPageState {
        form: outcome.form,
        notification: Some(outcome.notification),
    };
    Html(pages::contact::render(&state.content, &page, pages::current_year()))
}

/// POST /api/v1/contact
pub async fn handle_contact_api(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    match submit(state.contact_store.as_ref(), &form).await {
        Ok(()) => {
            tracing::info!("Contact form submitted via API");
            Ok((StatusCode::CREATED, Json(Notification::sent())))
        }
        Err(e @ SubmissionError::MissingField(_)) => Err(AppError::Validation(e.to_string())),
        Err(e) => {
            tracing::error!("Contact API submission failed: {e}");
            Err(AppError::Upstream(describe_failure(&e, &state.classifier)))
        }
    }
}
