//! Conversation core for the FridgeFix WhatsApp repair-intake bot.
//!
//! A user is identified by their phone number and walked through a fixed
//! question sequence (phone, name, email, issue, address, visit time) that
//! ends in a service-request summary. Everything here is synchronous and free
//! of I/O; transports live in `fridgefix-whatsapp` and `fridgefix-server`.

pub mod catalogs;
pub mod config;
pub mod errors;
pub mod intake;
pub mod store;
pub mod validators;

pub use catalogs::{Catalog, ISSUE_CATEGORIES, TIME_SLOTS};
pub use errors::{ApplicationError, InterfaceError};
pub use intake::{
    ConversationRecord, IntakeEngine, IntakeSettings, IntakeStep, ServiceRequest, TurnKind,
    TurnOutcome,
};
pub use store::{ConversationStore, InMemoryConversationStore};
