pub mod engine;
pub mod replies;
pub mod states;

pub use engine::{IntakeEngine, IntakeSettings};
pub use states::{
    AttemptCounters, AttemptKind, ConversationRecord, IntakeStep, ServiceRequest, TurnKind,
    TurnOutcome,
};
