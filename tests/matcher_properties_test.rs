use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use secret_santa::{assign, Assignment, Matcher, Participant, PriorAssignment, SantaError};
use std::collections::{HashMap, HashSet};

fn people(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(format!("Person {}", i), format!("p{}@example.com", i)))
        .collect()
}

/// Every invariant a successful draw must satisfy.
fn assert_valid_draw(participants: &[Participant], prior: &[PriorAssignment], draw: &[Assignment]) {
    assert_eq!(draw.len(), participants.len());

    let mut givers: Vec<&str> = draw.iter().map(|a| a.giver_id.as_str()).collect();
    let mut receivers: Vec<&str> = draw.iter().map(|a| a.receiver_id.as_str()).collect();
    givers.sort_unstable();
    receivers.sort_unstable();
    assert_eq!(givers, receivers, "receivers must be a permutation of givers");

    let prior_pairs: HashSet<(&str, &str)> = prior
        .iter()
        .map(|p| (p.giver.as_str(), p.receiver.as_str()))
        .collect();
    for a in draw {
        assert_ne!(a.giver_id, a.receiver_id, "self assignment for {}", a.giver_id);
        assert!(
            !prior_pairs.contains(&(a.giver_id.as_str(), a.receiver_id.as_str())),
            "repeated prior pair {} -> {}",
            a.giver_id,
            a.receiver_id
        );
    }

    let names: HashMap<&str, &str> = participants
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    for (a, p) in draw.iter().zip(participants) {
        assert_eq!(a.giver_id, p.id, "output must follow input order");
        assert_eq!(a.giver_name, p.name);
        assert_eq!(names[a.receiver_id.as_str()], a.receiver_name);
    }
}

#[test]
fn test_alice_bob_carol_invariants() {
    let participants = vec![
        Participant::new("Alice", "a@x"),
        Participant::new("Bob", "b@x"),
        Participant::new("Carol", "c@x"),
    ];

    let mut successes = 0;
    let mut failures = 0;
    let mut distinct = HashSet::new();
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match assign(&participants, &[], &mut rng) {
            Ok(draw) => {
                assert_valid_draw(&participants, &[], &draw);
                distinct.insert(draw[0].receiver_id.clone());
                successes += 1;
            }
            Err(SantaError::UnsatisfiableConstraints { .. }) => failures += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert!(successes > 0);
    // Greedy single pass paints itself into a corner when Alice and Bob swap.
    assert!(failures > 0);
    assert_eq!(distinct.len(), 2);
}

#[test]
fn test_retry_recovers_from_greedy_dead_ends() {
    let participants = vec![
        Participant::new("Alice", "a@x"),
        Participant::new("Bob", "b@x"),
        Participant::new("Carol", "c@x"),
    ];
    let matcher = Matcher::with_max_attempts(64);

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = matcher.run(&participants, &[], &mut rng).unwrap();
        assert!(outcome.attempts >= 1 && outcome.attempts <= 64);
        assert_valid_draw(&participants, &[], &outcome.assignments);
    }
}

#[test]
fn test_prior_exclusion_holds_for_many_seeds() {
    let participants = people(12);
    // last round was a simple rotation: i -> i+1
    let prior: Vec<PriorAssignment> = (0..12)
        .map(|i| PriorAssignment::new(&participants[i].id, &participants[(i + 1) % 12].id))
        .collect();
    let matcher = Matcher::with_max_attempts(100);

    let mut successes = 0;
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match matcher.run(&participants, &prior, &mut rng) {
            Ok(outcome) => {
                assert_valid_draw(&participants, &prior, &outcome.assignments);
                successes += 1;
            }
            Err(SantaError::UnsatisfiableConstraints { .. }) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
    assert!(successes > 90, "only {} of 100 draws succeeded", successes);
}

#[test]
fn test_priors_leaving_a_single_derangement() {
    // Everything except i -> i+1 was drawn before, so the rotation is the only valid result.
    let n = 6;
    let participants = people(n);
    let mut prior = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if j != i && j != (i + 1) % n {
                prior.push(PriorAssignment::new(&participants[i].id, &participants[j].id));
            }
        }
    }

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let draw = assign(&participants, &prior, &mut rng).unwrap();
        assert_valid_draw(&participants, &prior, &draw);
        for (i, a) in draw.iter().enumerate() {
            assert_eq!(a.receiver_id, participants[(i + 1) % n].id);
        }
    }
}

#[test]
fn test_large_group() {
    let participants = people(1000);
    let mut rng = ChaCha8Rng::seed_from_u64(2026);
    let outcome = Matcher::with_max_attempts(100)
        .run(&participants, &[], &mut rng)
        .unwrap();
    assert_valid_draw(&participants, &[], &outcome.assignments);
}

#[test]
fn test_unsatisfiable_two_party_case() {
    let participants = vec![Participant::new("A", "a@x"), Participant::new("B", "b@x")];
    let prior = vec![PriorAssignment::new("a@x", "b@x")];

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let err = assign(&participants, &prior, &mut rng).unwrap_err();
        assert!(matches!(err, SantaError::UnsatisfiableConstraints { .. }));
    }
}

#[test]
fn test_insufficient_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(matches!(
        assign(&[], &[], &mut rng),
        Err(SantaError::EmptyInput)
    ));
    assert!(matches!(
        assign(&people(1), &[], &mut rng),
        Err(SantaError::InsufficientParticipants { count: 1 })
    ));
}

#[test]
fn test_prior_pairs_for_unknown_people_are_ignored() {
    let participants = people(4);
    let prior = vec![
        PriorAssignment::new("ghost@example.com", "p0@example.com"),
        PriorAssignment::new("p1@example.com", "ghost@example.com"),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let outcome = Matcher::with_max_attempts(50)
        .run(&participants, &prior, &mut rng)
        .unwrap();
    assert_valid_draw(&participants, &prior, &outcome.assignments);
}

#[test]
fn test_thread_rng_works_as_injected_source() {
    let participants = people(6);
    let mut rng = rand::thread_rng();
    let outcome = Matcher::with_max_attempts(100)
        .run(&participants, &[], &mut rng)
        .unwrap();
    assert_valid_draw(&participants, &[], &outcome.assignments);
}
