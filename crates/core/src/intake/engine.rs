use crate::catalogs::{ISSUE_CATEGORIES, TIME_SLOTS};
use crate::intake::replies;
use crate::intake::states::{AttemptKind, ConversationRecord, IntakeStep, TurnKind, TurnOutcome};
use crate::store::ConversationStore;
use crate::validators::{validate_email_domain, validate_phone, validate_region};

pub const GREETINGS: [&str; 8] =
    ["hi", "hello", "hey", "hiya", "howdy", "good morning", "good afternoon", "good evening"];
pub const RESTART_WORDS: [&str; 4] = ["yes", "y", "new", "another"];
pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeSettings {
    pub brand_name: String,
    /// Failed validations of one kind that trigger a lockout reset.
    pub max_attempts: u8,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self { brand_name: "FridgeFix".to_string(), max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

/// Drives one user's intake conversation per inbound message.
///
/// The engine holds no per-user state itself; every call loads, mutates and
/// commits the user's record through the injected store.
pub struct IntakeEngine<S> {
    store: S,
    settings: IntakeSettings,
}

impl<S> IntakeEngine<S>
where
    S: ConversationStore,
{
    pub fn new(store: S, settings: IntakeSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &IntakeSettings {
        &self.settings
    }

    pub fn welcome_message(&self) -> String {
        replies::welcome(&self.settings.brand_name)
    }

    pub fn handle_message(&self, user_id: &str, raw_text: &str) -> String {
        self.process(user_id, raw_text).reply
    }

    pub fn process(&self, user_id: &str, raw_text: &str) -> TurnOutcome {
        self.store.modify(user_id, |record| self.apply(record, raw_text))
    }

    fn apply(&self, record: &mut ConversationRecord, raw_text: &str) -> TurnOutcome {
        let input = raw_text.trim();
        let from = record.step;

        if is_greeting(input) {
            return TurnOutcome {
                from,
                to: from,
                kind: TurnKind::Greeting,
                reply: replies::greeting(&self.settings.brand_name),
            };
        }

        let (kind, reply) = match from {
            IntakeStep::AwaitingPhone => self.on_phone(record, input),
            IntakeStep::AwaitingName => {
                record.fields.name = input.to_string();
                record.step = IntakeStep::AwaitingEmail;
                (TurnKind::Advanced, replies::email_prompt(input))
            }
            IntakeStep::AwaitingEmail => self.on_email(record, input),
            IntakeStep::AwaitingIssueCategory => match ISSUE_CATEGORIES.resolve(input) {
                Some(category) => {
                    record.fields.issue_category = category.to_string();
                    record.step = IntakeStep::AwaitingIssueDetail;
                    (TurnKind::Advanced, replies::detail_prompt(category))
                }
                None => (TurnKind::Rejected, ISSUE_CATEGORIES.invalid_option_message()),
            },
            IntakeStep::AwaitingIssueDetail => {
                if !input.eq_ignore_ascii_case("none") {
                    record.fields.issue_detail = input.to_string();
                }
                record.step = IntakeStep::AwaitingAddress;
                (TurnKind::Advanced, replies::address_prompt())
            }
            IntakeStep::AwaitingAddress => self.on_address(record, input),
            IntakeStep::AwaitingTime => match TIME_SLOTS.resolve(input) {
                Some(slot) => {
                    record.fields.preferred_time = slot.to_string();
                    record.step = IntakeStep::AwaitingConfirmation;
                    let summary = replies::summary(&self.settings.brand_name, &record.fields);
                    (TurnKind::Advanced, summary)
                }
                None => (TurnKind::Rejected, TIME_SLOTS.invalid_option_message()),
            },
            IntakeStep::AwaitingConfirmation if is_restart(input) => restart(record),
            IntakeStep::AwaitingConfirmation => {
                record.step = IntakeStep::Completed;
                (TurnKind::Closed, replies::closing(&self.settings.brand_name))
            }
            IntakeStep::Completed if is_restart(input) => restart(record),
            IntakeStep::Completed => {
                (TurnKind::Closed, replies::goodbye(&self.settings.brand_name))
            }
        };

        TurnOutcome { from, to: record.step, kind, reply }
    }

    fn on_phone(&self, record: &mut ConversationRecord, input: &str) -> (TurnKind, String) {
        if validate_phone(input) {
            record.fields.phone = input.to_string();
            record.step = IntakeStep::AwaitingName;
            return (TurnKind::Advanced, replies::name_prompt());
        }
        self.reject(record, AttemptKind::Phone, replies::invalid_phone)
    }

    fn on_email(&self, record: &mut ConversationRecord, input: &str) -> (TurnKind, String) {
        if validate_email_domain(input) {
            record.fields.email = input.to_string();
            record.step = IntakeStep::AwaitingIssueCategory;
            return (TurnKind::Advanced, replies::issue_menu());
        }
        self.reject(record, AttemptKind::Email, replies::invalid_email)
    }

    fn on_address(&self, record: &mut ConversationRecord, input: &str) -> (TurnKind, String) {
        if validate_region(input) {
            record.fields.address = input.to_string();
            record.step = IntakeStep::AwaitingTime;
            return (TurnKind::Advanced, replies::time_menu());
        }
        self.reject(record, AttemptKind::Location, replies::invalid_address)
    }

    fn reject(
        &self,
        record: &mut ConversationRecord,
        kind: AttemptKind,
        message: fn(u8) -> String,
    ) -> (TurnKind, String) {
        let failures = record.attempts.record_failure(kind);
        if failures >= self.settings.max_attempts {
            record.reset();
            return (TurnKind::LockedOut, replies::SERVICE_UNAVAILABLE.to_string());
        }
        (TurnKind::Rejected, message(self.settings.max_attempts - failures))
    }
}

fn restart(record: &mut ConversationRecord) -> (TurnKind, String) {
    record.reset();
    (TurnKind::Restarted, replies::restart_prompt())
}

pub fn is_greeting(input: &str) -> bool {
    let folded = input.trim().to_lowercase();
    GREETINGS.contains(&folded.as_str())
}

pub fn is_restart(input: &str) -> bool {
    let folded = input.trim().to_lowercase();
    RESTART_WORDS.contains(&folded.as_str())
}
