use weba_notification::Notifier;

use crate::{FormSubmission, UserOutcome};

/// Notify the owner about a submission and map the delivery result to the
/// message shown to the visitor. Delivery failures never escape.
pub async fn handle<N>(notifier: &N, submission: &FormSubmission) -> UserOutcome
where
    N: Notifier + ?Sized,
{
    let kind = submission.kind();
    let message = submission.compose();

    match notifier.send(&message).await {
        Ok(()) => UserOutcome::success(kind),
        Err(err) => {
            tracing::warn!(form = %kind, error = %err, "Submission could not be forwarded");

            UserOutcome::failure(kind)
        }
    }
}
