//! Inbound WhatsApp webhook.
//!
//! - `POST /whatsapp`: provider form post; replies with TwiML carrying the bot's answer.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use fridgefix_core::config::TwilioConfig;
use fridgefix_core::{ConversationStore, InterfaceError};
use fridgefix_whatsapp::{InboundMessage, MessagingResponse, WebhookForm, TWIML_CONTENT_TYPE};
use tracing::{info, warn};
use uuid::Uuid;

use crate::bootstrap::SharedEngine;

#[derive(Clone)]
pub struct WebhookState {
    engine: SharedEngine,
    expected_number: Option<String>,
    expected_account: Option<String>,
}

impl WebhookState {
    pub fn new(engine: SharedEngine, twilio: &TwilioConfig) -> Self {
        Self {
            engine,
            expected_number: twilio.whatsapp_number.clone(),
            expected_account: twilio.account_sid.clone(),
        }
    }
}

pub fn router(state: WebhookState) -> Router {
    Router::new().route("/whatsapp", post(receive_message)).with_state(state)
}

pub async fn receive_message(
    State(state): State<WebhookState>,
    Form(form): Form<WebhookForm>,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    let inbound = InboundMessage::from_form(form).and_then(|message| {
        message
            .check_recipient(state.expected_number.as_deref(), state.expected_account.as_deref())
            .map(|()| message)
    });
    let inbound = match inbound {
        Ok(message) => message,
        Err(error) => {
            let interface = error.into_interface(correlation_id.as_str());
            warn!(
                event_name = "intake.webhook.rejected",
                correlation_id = %correlation_id,
                error = %interface,
                "inbound webhook rejected"
            );
            return interface_error_response(&interface);
        }
    };

    let reply = reply_for(&state.engine, &inbound, &correlation_id);
    twiml_response(&MessagingResponse::new().message(reply))
}

/// First contact gets the welcome without running the conversation; every
/// later message is handed to the engine.
fn reply_for(engine: &SharedEngine, inbound: &InboundMessage, correlation_id: &str) -> String {
    let store = engine.store();
    if !store.exists(&inbound.user_id) {
        store.get_or_create(&inbound.user_id);
        info!(
            event_name = "intake.conversation.opened",
            correlation_id,
            user_id = %inbound.user_id,
            message_sid = inbound.message_sid.as_deref().unwrap_or("unknown"),
            "first contact, welcome sent"
        );
        return engine.welcome_message();
    }

    let outcome = engine.process(&inbound.user_id, &inbound.text);
    info!(
        event_name = "intake.turn.processed",
        correlation_id,
        user_id = %inbound.user_id,
        message_sid = inbound.message_sid.as_deref().unwrap_or("unknown"),
        from = outcome.from.as_str(),
        to = outcome.to.as_str(),
        outcome = outcome.kind.as_str(),
        "intake turn processed"
    );
    outcome.reply
}

fn twiml_response(response: &MessagingResponse) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)], response.render())
        .into_response()
}

fn interface_error_response(error: &InterfaceError) -> Response {
    let status = match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Forbidden { .. } => StatusCode::FORBIDDEN,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.user_message()).into_response()
}
