// Domain-level errors for command handling.

use super::state::EntityKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The command targets an id that is not in the registry.
    #[error("{kind} {id} not found")]
    EntityNotFound { kind: EntityKind, id: u64 },

    /// The payload does not fit the command type. Raised at the protocol boundary.
    #[error("malformed {command} payload: {reason}")]
    MalformedPayload { command: String, reason: String },
}

impl CommandError {
    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::EntityNotFound { kind, id }
    }

    pub fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
