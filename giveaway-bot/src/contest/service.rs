//! Contest lifecycle service over the user and contest repositories.
//!
//! State machine: NoActiveContest → start → ContestActive → stop →
//! NoActiveContest. Registration is accepted even without an active contest.

use rand::seq::IndexedRandom;
use rand::Rng;
use storage::{ContestRecord, ContestRepository, Database, StorageError, UserRecord, UserRepository};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::core::{ContestError, Result};

/// Snapshot returned by [`ContestService::stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContestStats {
    pub active: bool,
    pub participants: i64,
}

/// Result of stopping a contest; `winner` is unset when nobody participated.
#[derive(Debug, Clone)]
pub struct StopOutcome {
    pub winner: Option<UserRecord>,
}

/// Enforces the single-active-contest invariant and drives the lifecycle.
pub struct ContestService {
    users: UserRepository,
    contests: ContestRepository,
    /// Serializes the read-then-write paths of start/stop so two concurrent
    /// admin actions cannot both observe "no active contest". The partial
    /// unique index on `contests` backstops this at the database level.
    lifecycle: Mutex<()>,
}

impl ContestService {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.users(),
            contests: db.contests(),
            lifecycle: Mutex::new(()),
        }
    }

    /// Starts a new contest. Fails with [`ContestError::AlreadyActive`] when
    /// one is already running.
    pub async fn start(&self) -> Result<ContestRecord> {
        let _guard = self.lifecycle.lock().await;

        if self.contests.find_active().await?.is_some() {
            return Err(ContestError::AlreadyActive.into());
        }

        let contest = self.contests.create_active().await?;
        info!(contest_id = contest.id, "Contest started");
        Ok(contest)
    }

    /// Marks the user as a participant, creating the row on first contact.
    /// Idempotent; accepted even when no contest is active.
    pub async fn register_participant(
        &self,
        user_id: i64,
        username: Option<String>,
        full_name: Option<String>,
    ) -> Result<()> {
        match self.users.find_by_user_id(user_id).await? {
            Some(mut user) => {
                user.is_participated = true;
                self.users.update(&user).await?;
            }
            None => {
                let mut user = UserRecord::new(user_id, username, full_name);
                user.is_participated = true;
                match self.users.create(&user).await {
                    Ok(()) => {}
                    // Lost an insert race; mark the row that won instead.
                    Err(StorageError::DuplicateUser(_)) => {
                        if let Some(mut existing) = self.users.find_by_user_id(user_id).await? {
                            existing.is_participated = true;
                            self.users.update(&existing).await?;
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        info!(user_id, "Participant registered");
        Ok(())
    }

    /// Stops the active contest. Picks a uniform-random winner when at least
    /// one participant exists; the contest deactivates either way.
    pub async fn stop(&self) -> Result<StopOutcome> {
        let _guard = self.lifecycle.lock().await;

        let Some(mut contest) = self.contests.find_active().await? else {
            return Err(ContestError::NoneActive.into());
        };

        let participants = self.users.list_participants().await?;
        let winner = pick_winner(&participants, &mut rand::rng()).cloned();

        if let Some(w) = &winner {
            contest.winner_id = Some(w.user_id);
        } else {
            debug!(contest_id = contest.id, "Contest stopped without participants");
        }
        contest.is_active = false;
        self.contests.update(&contest).await?;

        info!(
            contest_id = contest.id,
            winner_id = ?contest.winner_id,
            participants = participants.len(),
            "Contest stopped"
        );
        Ok(StopOutcome { winner })
    }

    /// Returns whether a contest is active and the participant count. The
    /// count is not scoped to the active contest (carry-over behavior of the
    /// global participation flag).
    pub async fn stats(&self) -> Result<ContestStats> {
        let active = self.contests.find_active().await?.is_some();
        let participants = self.users.count_participants().await?;
        Ok(ContestStats {
            active,
            participants,
        })
    }
}

/// Uniform-random pick over the participant list; `None` when empty.
pub fn pick_winner<'a, R: Rng + ?Sized>(
    participants: &'a [UserRecord],
    rng: &mut R,
) -> Option<&'a UserRecord> {
    participants.choose(rng)
}
