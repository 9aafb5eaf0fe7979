//! Randomized constraint-filtering assignment.
//!
//! Givers are processed in input order against a shuffled pool of candidate
//! receivers. Each giver picks uniformly among the candidates that are not
//! itself and not its receiver from the prior round; the pick leaves the pool.
//! The pass is greedy with no backtracking, so it can fail on inputs that do
//! have a valid permutation. [`Matcher::with_max_attempts`] opts into
//! reshuffling and trying again.

use crate::core::validator;
use crate::domain::model::{Assignment, Participant, PriorAssignment};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Prior-round receivers keyed by giver identifier.
#[derive(Debug, Default)]
pub struct ExclusionSet<'a> {
    by_giver: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> ExclusionSet<'a> {
    pub fn new(prior: &'a [PriorAssignment]) -> Self {
        let mut by_giver: HashMap<&str, HashSet<&str>> = HashMap::new();
        for pair in prior {
            by_giver
                .entry(pair.giver.as_str())
                .or_default()
                .insert(pair.receiver.as_str());
        }
        Self { by_giver }
    }

    pub fn is_excluded(&self, giver: &str, receiver: &str) -> bool {
        self.by_giver
            .get(giver)
            .is_some_and(|receivers| receivers.contains(receiver))
    }

    /// Whether `receiver` may be drawn by `giver`.
    pub fn allows(&self, giver: &Participant, receiver: &Participant) -> bool {
        giver.id != receiver.id && !self.is_excluded(&giver.id, &receiver.id)
    }
}

/// Successful draw plus the number of attempts it took.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub assignments: Vec<Assignment>,
    pub attempts: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    max_attempts: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Single greedy attempt, no retry.
    pub fn new() -> Self {
        Self { max_attempts: 1 }
    }

    /// Reshuffle and try again up to `max_attempts` times before surfacing
    /// `UnsatisfiableConstraints`. Zero is treated as one.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        participants: &[Participant],
        prior: &[PriorAssignment],
        rng: &mut R,
    ) -> Result<MatchOutcome> {
        tracing::info!(
            "Starting Secret Santa assignment for {} participants ({} prior pairs)",
            participants.len(),
            prior.len()
        );
        validator::validate(participants)?;
        let exclusions = ExclusionSet::new(prior);

        let mut attempt = 1;
        loop {
            match draw_once(participants, &exclusions, rng) {
                Ok(assignments) => {
                    tracing::debug!(
                        "Assigned {} participants on attempt {}",
                        assignments.len(),
                        attempt
                    );
                    return Ok(MatchOutcome {
                        assignments,
                        attempts: attempt,
                    });
                }
                Err(giver) if attempt < self.max_attempts => {
                    tracing::debug!(
                        "Attempt {} stuck at {}, reshuffling",
                        attempt,
                        giver
                    );
                    attempt += 1;
                }
                Err(giver) => {
                    tracing::error!(
                        "Failed to assign Secret Santa for {} due to constraints.",
                        giver
                    );
                    return Err(SantaError::UnsatisfiableConstraints {
                        giver,
                        attempts: attempt,
                    });
                }
            }
        }
    }
}

/// Validates, then runs exactly one greedy pass.
pub fn assign<R: Rng + ?Sized>(
    participants: &[Participant],
    prior: &[PriorAssignment],
    rng: &mut R,
) -> Result<Vec<Assignment>> {
    Matcher::new()
        .run(participants, prior, rng)
        .map(|outcome| outcome.assignments)
}

// Err carries the identifier of the giver left with no eligible receiver.
fn draw_once<R: Rng + ?Sized>(
    participants: &[Participant],
    exclusions: &ExclusionSet<'_>,
    rng: &mut R,
) -> std::result::Result<Vec<Assignment>, String> {
    let mut pool: Vec<&Participant> = participants.iter().collect();
    pool.shuffle(rng);

    let mut assignments = Vec::with_capacity(participants.len());
    for giver in participants {
        let eligible: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, candidate)| exclusions.allows(giver, candidate))
            .map(|(idx, _)| idx)
            .collect();
        tracing::trace!("{} has {} eligible receivers", giver.id, eligible.len());

        let Some(&picked) = eligible.choose(rng) else {
            return Err(giver.id.clone());
        };
        let receiver = pool.remove(picked);
        assignments.push(Assignment::new(giver, receiver));
    }

    Ok(assignments)
}
