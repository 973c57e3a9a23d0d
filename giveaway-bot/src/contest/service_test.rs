//! Unit tests for ContestService.
//!
//! Covers the lifecycle state machine, idempotent registration, winner
//! selection, and the stats carry-over behavior.

use rand::rngs::StdRng;
use rand::SeedableRng;
use storage::{Database, UserRecord};

use crate::contest::{pick_winner, ContestService, ContestStats};
use crate::core::{ContestError, GiveawayError};

async fn service() -> ContestService {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    ContestService::new(&db)
}

fn assert_contest_err(err: GiveawayError, expected: ContestError) {
    match err {
        GiveawayError::Contest(e) => assert_eq!(
            std::mem::discriminant(&e),
            std::mem::discriminant(&expected)
        ),
        other => panic!("expected contest error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_start_twice_reports_already_active() {
    let service = service().await;

    service.start().await.expect("First start must succeed");
    let err = service.start().await.expect_err("Second start must fail");
    assert_contest_err(err, ContestError::AlreadyActive);

    // State unchanged: still exactly one active contest.
    let stats = service.stats().await.expect("Failed to read stats");
    assert!(stats.active);
}

#[tokio::test]
async fn test_stop_without_active_contest() {
    let service = service().await;

    let err = service.stop().await.expect_err("Stop must fail");
    assert_contest_err(err, ContestError::NoneActive);
}

#[tokio::test]
async fn test_stop_with_zero_participants_leaves_winner_unset() {
    let service = service().await;

    service.start().await.expect("Failed to start");
    let outcome = service.stop().await.expect("Failed to stop");

    assert!(outcome.winner.is_none());
    let stats = service.stats().await.expect("Failed to read stats");
    assert_eq!(
        stats,
        ContestStats {
            active: false,
            participants: 0
        }
    );
}

#[tokio::test]
async fn test_stop_picks_winner_among_participants() {
    let service = service().await;

    service.start().await.expect("Failed to start");
    for user_id in [1001, 1002, 1003] {
        service
            .register_participant(user_id, None, None)
            .await
            .expect("Failed to register");
    }

    let outcome = service.stop().await.expect("Failed to stop");
    let winner = outcome.winner.expect("A winner must be picked");
    assert!([1001, 1002, 1003].contains(&winner.user_id));
}

#[tokio::test]
async fn test_register_participant_is_idempotent() {
    let service = service().await;

    service
        .register_participant(1001, Some("alice".to_string()), None)
        .await
        .expect("Failed to register");
    service
        .register_participant(1001, Some("alice".to_string()), None)
        .await
        .expect("Failed to re-register");

    let stats = service.stats().await.expect("Failed to read stats");
    assert_eq!(stats.participants, 1);
}

#[tokio::test]
async fn test_registration_accepted_without_active_contest() {
    let service = service().await;

    service
        .register_participant(1001, None, None)
        .await
        .expect("Registration must be accepted");

    let stats = service.stats().await.expect("Failed to read stats");
    assert!(!stats.active);
    assert_eq!(stats.participants, 1);
}

#[tokio::test]
async fn test_full_round_stats_before_and_after_stop() {
    let service = service().await;

    service.start().await.expect("Failed to start");
    service
        .register_participant(1001, None, None)
        .await
        .expect("Failed to register");
    service
        .register_participant(1002, None, None)
        .await
        .expect("Failed to register");

    let before = service.stats().await.expect("Failed to read stats");
    assert_eq!(
        before,
        ContestStats {
            active: true,
            participants: 2
        }
    );

    let outcome = service.stop().await.expect("Failed to stop");
    let winner = outcome.winner.expect("A winner must be picked");
    assert!([1001, 1002].contains(&winner.user_id));

    // Participant count is not reset when the contest ends.
    let after = service.stats().await.expect("Failed to read stats");
    assert_eq!(
        after,
        ContestStats {
            active: false,
            participants: 2
        }
    );
}

#[test]
fn test_pick_winner_empty_list() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(pick_winner(&[], &mut rng).is_none());
}

#[test]
fn test_pick_winner_seeded_distribution_roughly_uniform() {
    let participants: Vec<UserRecord> = [1001, 1002, 1003]
        .iter()
        .map(|&id| UserRecord::new(id, None, None))
        .collect();

    let mut rng = StdRng::seed_from_u64(42);
    let mut counts = std::collections::HashMap::new();
    for _ in 0..3000 {
        let winner = pick_winner(&participants, &mut rng).expect("Non-empty list");
        *counts.entry(winner.user_id).or_insert(0u32) += 1;
    }

    for id in [1001, 1002, 1003] {
        let n = counts[&id];
        assert!((800..=1200).contains(&n), "user {id} won {n} of 3000");
    }
}
