use fridgefix_core::errors::{ApplicationError, InterfaceError};
use serde::Deserialize;
use thiserror::Error;

const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Form fields posted by the provider for an incoming WhatsApp message.
///
/// Only the fields the bot reads are declared; the rest are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookForm {
    pub body: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub account_sid: Option<String>,
    pub message_sid: Option<String>,
    pub profile_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender phone number without the `whatsapp:` prefix.
    pub user_id: String,
    pub text: String,
    pub recipient: Option<String>,
    pub account_sid: Option<String>,
    pub message_sid: Option<String>,
    pub profile_name: Option<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InboundError {
    #[error("inbound message has no sender")]
    MissingSender,
    #[error("inbound message addressed to unexpected recipient `{recipient}`")]
    UnexpectedRecipient { recipient: String },
    #[error("inbound message belongs to an unexpected account")]
    UnexpectedAccount,
}

impl InboundError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        match self {
            Self::MissingSender => {
                ApplicationError::Transport(self.to_string()).into_interface(correlation_id)
            }
            Self::UnexpectedRecipient { .. } | Self::UnexpectedAccount => {
                InterfaceError::Forbidden {
                    message: self.to_string(),
                    correlation_id: correlation_id.into(),
                }
            }
        }
    }
}

impl InboundMessage {
    pub fn from_form(form: WebhookForm) -> Result<Self, InboundError> {
        let user_id = form
            .from
            .as_deref()
            .map(strip_channel_prefix)
            .map(str::trim)
            .filter(|sender| !sender.is_empty())
            .ok_or(InboundError::MissingSender)?
            .to_string();

        Ok(Self {
            user_id,
            text: form.body.as_deref().map(str::trim).unwrap_or_default().to_string(),
            recipient: form.to,
            account_sid: form.account_sid,
            message_sid: form.message_sid,
            profile_name: form.profile_name,
        })
    }

    /// Rejects messages not addressed to the configured number or account.
    ///
    /// Either expectation may be absent, in which case it is not checked.
    pub fn check_recipient(
        &self,
        expected_number: Option<&str>,
        expected_account: Option<&str>,
    ) -> Result<(), InboundError> {
        if let Some(expected) = expected_number {
            let recipient = self.recipient.as_deref().unwrap_or_default();
            if strip_channel_prefix(recipient) != strip_channel_prefix(expected) {
                return Err(InboundError::UnexpectedRecipient { recipient: recipient.to_string() });
            }
        }

        if let Some(expected) = expected_account {
            if self.account_sid.as_deref() != Some(expected) {
                return Err(InboundError::UnexpectedAccount);
            }
        }

        Ok(())
    }
}

fn strip_channel_prefix(address: &str) -> &str {
    address.strip_prefix(WHATSAPP_PREFIX).unwrap_or(address)
}
