//! Store actor - owns the roster collection and simulates request latency
//!
//! Every write goes through the same artificial delay as the initial load.
//! Delayed writes run as tasks in a `JoinSet`; shutting the actor down
//! aborts them all, so nothing can write into a torn-down store.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{StoreCommand, StoreUpdate};
use crate::models::Speaker;
use crate::store::error::StoreError;
use crate::store::state::StoreState;

/// Outcome of a delayed task, routed back into the actor loop
enum Completion {
    Load,
    Update(Speaker),
}

/// Store actor that processes update commands behind a simulated delay
pub struct StoreActor {
    state: StoreState,
    delay: Duration,
    /// When set, the initial load settles as a failure with this message
    fail_with: Option<String>,
    update_tx: mpsc::UnboundedSender<StoreUpdate>,
    pending: JoinSet<Completion>,
}

impl StoreActor {
    pub fn new(
        seed: Vec<Speaker>,
        delay: Duration,
        update_tx: mpsc::UnboundedSender<StoreUpdate>,
    ) -> Self {
        StoreActor {
            state: StoreState::new(seed),
            delay,
            fail_with: None,
            update_tx,
            pending: JoinSet::new(),
        }
    }

    /// Arm the simulated failure path: the initial load will settle as
    /// `Failure` carrying `message` instead of `Success`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Run the actor message loop.
    ///
    /// The seed snapshot is published immediately (status still `Loading`);
    /// the load settles once the simulated delay elapses. Each update is
    /// delayed independently and commits in completion order - on the same
    /// id the last-completed write wins, whole-record replacement, no merge.
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<StoreCommand>) {
        let _ = self.update_tx.send(StoreUpdate::Snapshot(self.state.snapshot()));

        let delay = self.delay;
        self.pending.spawn(async move {
            tokio::time::sleep(delay).await;
            Completion::Load
        });

        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(StoreCommand::UpdateRecord(speaker)) => {
                            self.schedule_update(speaker);
                        }

                        Some(StoreCommand::Shutdown) | None => {
                            // Cancel every pending delayed write
                            self.pending.abort_all();
                            tracing::info!("store shut down, pending writes cancelled");
                            break;
                        }
                    }
                }

                Some(done) = self.pending.join_next() => {
                    // Aborted tasks surface as join errors; nothing to apply
                    if let Ok(done) = done {
                        self.handle_completion(done);
                    }
                }
            }
        }
    }

    fn schedule_update(&mut self, speaker: Speaker) {
        if !self.state.contains(speaker.id) {
            let err = StoreError::NotFound(speaker.id);
            tracing::warn!(id = speaker.id, "update rejected: {err}");
            let _ = self.update_tx.send(StoreUpdate::Rejected {
                id: speaker.id,
                message: err.to_string(),
            });
            return;
        }

        tracing::debug!(id = speaker.id, delay_ms = self.delay.as_millis() as u64, "update scheduled");
        let delay = self.delay;
        self.pending.spawn(async move {
            tokio::time::sleep(delay).await;
            Completion::Update(speaker)
        });
    }

    fn handle_completion(&mut self, done: Completion) {
        match done {
            Completion::Load => {
                match self.fail_with.take() {
                    Some(message) => {
                        let err = StoreError::LoadFailed(message);
                        tracing::warn!("{err}");
                        self.state.fail_load(err.to_string());
                    }
                    None => {
                        tracing::info!("simulated load settled");
                        self.state.complete_load();
                    }
                }
                let _ = self.update_tx.send(StoreUpdate::Snapshot(self.state.snapshot()));
            }

            Completion::Update(speaker) => {
                let id = speaker.id;
                match self.state.apply_update(speaker) {
                    Ok(()) => {
                        tracing::debug!(id, "update committed");
                        let _ = self.update_tx.send(StoreUpdate::Committed {
                            id,
                            snapshot: self.state.snapshot(),
                        });
                    }
                    Err(err) => {
                        let _ = self.update_tx.send(StoreUpdate::Rejected {
                            id,
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;

    fn seed() -> Vec<Speaker> {
        vec![
            Speaker {
                id: 1,
                first: String::from("Marisol"),
                last: String::from("Vega"),
                company: String::from("Lakeshore"),
                sessions: vec![],
                favorite: false,
            },
            Speaker {
                id: 2,
                first: String::from("Tomas"),
                last: String::from("Lindqvist"),
                company: String::from("Fjordware"),
                sessions: vec![],
                favorite: false,
            },
        ]
    }

    const DELAY: Duration = Duration::from_millis(2000);

    fn spawn_actor(
        actor: StoreActor,
    ) -> mpsc::UnboundedSender<StoreCommand> {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        tokio::spawn(actor.run(cmd_rx));
        cmd_tx
    }

    async fn next_snapshot(
        rx: &mut mpsc::UnboundedReceiver<StoreUpdate>,
    ) -> crate::store::StoreSnapshot {
        match rx.recv().await.expect("store channel closed") {
            StoreUpdate::Snapshot(s) => s,
            StoreUpdate::Committed { snapshot, .. } => snapshot,
            StoreUpdate::Rejected { id, message } => {
                panic!("unexpected rejection for {id}: {message}")
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_settles_after_delay() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let _cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        // Seed visible immediately, status still loading
        let first = next_snapshot(&mut update_rx).await;
        assert_eq!(first.status, RequestStatus::Loading);
        assert_eq!(first.speakers, seed());

        // After the delay: success, data published unchanged
        let settled = next_snapshot(&mut update_rx).await;
        assert_eq!(settled.status, RequestStatus::Success);
        assert_eq!(settled.speakers, seed());
        assert!(settled.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_failure_keeps_data() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let _cmd_tx = spawn_actor(
            StoreActor::new(seed(), DELAY, update_tx).with_failure("backend unreachable"),
        );

        let first = next_snapshot(&mut update_rx).await;
        assert_eq!(first.status, RequestStatus::Loading);

        let settled = next_snapshot(&mut update_rx).await;
        assert_eq!(settled.status, RequestStatus::Failure);
        assert_eq!(
            settled.error.as_deref(),
            Some("loading speaker data failed: backend unreachable")
        );
        // Data keeps its last known value
        assert_eq!(settled.speakers, seed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_toggle_commits_exactly_one_record() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        next_snapshot(&mut update_rx).await; // seed
        next_snapshot(&mut update_rx).await; // load settled

        let flipped = seed()[0].toggled();
        cmd_tx
            .send(StoreCommand::UpdateRecord(flipped.clone()))
            .unwrap();

        let after = next_snapshot(&mut update_rx).await;
        assert_eq!(after.speakers.len(), 2);
        assert_eq!(after.speakers[0], flipped);
        assert_eq!(after.speakers[1], seed()[1]);
        assert_eq!(after.status, RequestStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interleaved_updates_on_different_ids_both_apply() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        next_snapshot(&mut update_rx).await;
        next_snapshot(&mut update_rx).await;

        // Both in flight before either resolves
        cmd_tx
            .send(StoreCommand::UpdateRecord(seed()[0].toggled()))
            .unwrap();
        cmd_tx
            .send(StoreCommand::UpdateRecord(seed()[1].toggled()))
            .unwrap();

        next_snapshot(&mut update_rx).await;
        let after_both = next_snapshot(&mut update_rx).await;
        assert!(after_both.speakers[0].favorite);
        assert!(after_both.speakers[1].favorite);
        assert_eq!(after_both.speakers.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_id_last_completed_wins() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        next_snapshot(&mut update_rx).await;
        next_snapshot(&mut update_rx).await;

        let mut earlier = seed()[0].clone();
        earlier.favorite = true;
        earlier.company = String::from("Earlier Write");

        let mut later = seed()[0].clone();
        later.favorite = false;
        later.company = String::from("Later Write");

        cmd_tx.send(StoreCommand::UpdateRecord(earlier.clone())).unwrap();
        // Stagger the deadlines so completion order is deterministic
        tokio::time::sleep(Duration::from_millis(1)).await;
        cmd_tx.send(StoreCommand::UpdateRecord(later.clone())).unwrap();

        let after_first = next_snapshot(&mut update_rx).await;
        assert_eq!(after_first.speakers[0], earlier);

        // Whole-record replacement, no merge of overlapping edits
        let after_second = next_snapshot(&mut update_rx).await;
        assert_eq!(after_second.speakers[0], later);
        assert_eq!(after_second.speakers[1], seed()[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_id_rejected_immediately() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        next_snapshot(&mut update_rx).await;
        next_snapshot(&mut update_rx).await;

        let mut ghost = seed()[0].clone();
        ghost.id = 404;
        cmd_tx.send(StoreCommand::UpdateRecord(ghost)).unwrap();

        match update_rx.recv().await.unwrap() {
            StoreUpdate::Rejected { id, message } => {
                assert_eq!(id, 404);
                assert!(message.contains("404"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_writes() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let cmd_tx = spawn_actor(StoreActor::new(seed(), DELAY, update_tx));

        // Only the seed snapshot has been published so far
        let first = next_snapshot(&mut update_rx).await;
        assert_eq!(first.status, RequestStatus::Loading);

        cmd_tx.send(StoreCommand::Shutdown).unwrap();

        // The pending load timer was aborted: the channel closes without
        // ever publishing a settled snapshot.
        assert!(update_rx.recv().await.is_none());
    }
}
