use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CommandError {
    /// The command was asked to do something its captured state can't support,
    /// e.g. undoing a channel switch that never ran.
    #[error("invalid state for {command}: {reason}")]
    InvalidState {
        command: &'static str,
        reason: &'static str,
    },
}

impl CommandError {
    pub fn invalid_state(command: &'static str, reason: &'static str) -> Self {
        Self::InvalidState { command, reason }
    }
}
