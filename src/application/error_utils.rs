use super::store::Store;
use crate::domain::response::ResponseEnvelope;
use crate::domain::state::{Action, RequestStatus};

pub const FALLBACK_ERROR: &str = "Some error occurred";

/// Surfaces a non-zero envelope: first message, or the fallback when the
/// server sent none.
pub async fn handle_server_app_error<D>(envelope: &ResponseEnvelope<D>, store: &Store) {
    let message = envelope.messages.first().cloned().unwrap_or_else(|| FALLBACK_ERROR.to_string());
    tracing::info!(result_code = envelope.result_code, %message, "server rejected request");
    store.dispatch(Action::SetAppError(Some(message))).await;
    store.dispatch(Action::SetAppStatus(RequestStatus::Failed)).await;
}

/// The banner gets the outermost message only; the full cause chain goes to
/// the log.
pub async fn handle_server_network_error(error: &anyhow::Error, store: &Store) {
    tracing::warn!(error = format!("{error:#}"), "request failed");
    let mut message = error.to_string();
    if message.is_empty() {
        message = FALLBACK_ERROR.to_string();
    }
    store.dispatch(Action::SetAppError(Some(message))).await;
    store.dispatch(Action::SetAppStatus(RequestStatus::Failed)).await;
}
