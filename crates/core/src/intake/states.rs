use serde::{Deserialize, Serialize};

pub const APPLIANCE_TYPE: &str = "Refrigerator";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    #[default]
    AwaitingPhone,
    AwaitingName,
    AwaitingEmail,
    AwaitingIssueCategory,
    AwaitingIssueDetail,
    AwaitingAddress,
    AwaitingTime,
    AwaitingConfirmation,
    Completed,
}

impl IntakeStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingPhone => "awaiting_phone",
            Self::AwaitingName => "awaiting_name",
            Self::AwaitingEmail => "awaiting_email",
            Self::AwaitingIssueCategory => "awaiting_issue_category",
            Self::AwaitingIssueDetail => "awaiting_issue_detail",
            Self::AwaitingAddress => "awaiting_address",
            Self::AwaitingTime => "awaiting_time",
            Self::AwaitingConfirmation => "awaiting_confirmation",
            Self::Completed => "completed",
        }
    }
}

/// Answers collected during one episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub issue_category: String,
    pub issue_detail: String,
    pub appliance_type: String,
    pub preferred_time: String,
}

impl Default for ServiceRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            issue_category: String::new(),
            issue_detail: String::new(),
            appliance_type: APPLIANCE_TYPE.to_string(),
            preferred_time: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptKind {
    Phone,
    Email,
    Location,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCounters {
    pub phone: u8,
    pub email: u8,
    pub location: u8,
}

impl AttemptCounters {
    /// Counts one failed validation and returns the new tally for that kind.
    pub fn record_failure(&mut self, kind: AttemptKind) -> u8 {
        let counter = match kind {
            AttemptKind::Phone => &mut self.phone,
            AttemptKind::Email => &mut self.email,
            AttemptKind::Location => &mut self.location,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn get(&self, kind: AttemptKind) -> u8 {
        match kind {
            AttemptKind::Phone => self.phone,
            AttemptKind::Email => self.email,
            AttemptKind::Location => self.location,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub step: IntakeStep,
    pub fields: ServiceRequest,
    pub attempts: AttemptCounters,
}

impl ConversationRecord {
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Discards the episode: step, answers and counters all go back to their initial values.
    pub fn reset(&mut self) {
        *self = Self::fresh();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    Greeting,
    Advanced,
    Rejected,
    LockedOut,
    Restarted,
    Closed,
}

impl TurnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Advanced => "advanced",
            Self::Rejected => "rejected",
            Self::LockedOut => "locked_out",
            Self::Restarted => "restarted",
            Self::Closed => "closed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub from: IntakeStep,
    pub to: IntakeStep,
    pub kind: TurnKind,
    pub reply: String,
}
