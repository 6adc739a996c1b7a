//! WhatsApp (Twilio) boundary for the intake bot.
//!
//! - **Inbound** (`inbound`) - webhook form fields → `InboundMessage { user_id, text }`
//! - **TwiML** (`twiml`) - reply envelope returned synchronously to the provider
//!
//! # Architecture
//!
//! ```text
//! Twilio POST /whatsapp → WebhookForm → InboundMessage → IntakeEngine
//!                                                            ↓
//!                          MessagingResponse (TwiML) ← reply text
//! ```
//!
//! Delivery happens through the webhook response body; nothing here opens an
//! outbound connection.

pub mod inbound;
pub mod twiml;

pub use inbound::{InboundError, InboundMessage, WebhookForm};
pub use twiml::{MessagingResponse, TWIML_CONTENT_TYPE};
