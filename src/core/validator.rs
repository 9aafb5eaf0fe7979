use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};

/// Checks the participant-count preconditions of a draw.
///
/// Zero participants is `EmptyInput`, exactly one is `InsufficientParticipants`
/// (no derangement exists for a single element). No upper bound.
pub fn validate(participants: &[Participant]) -> Result<()> {
    match participants.len() {
        0 => {
            tracing::warn!("Participant list is empty. Cannot assign Secret Santa.");
            Err(SantaError::EmptyInput)
        }
        1 => {
            tracing::warn!("Only one participant provided. At least two are required.");
            Err(SantaError::InsufficientParticipants { count: 1 })
        }
        _ => Ok(()),
    }
}
