//! Game session runtime.
//!
//! Each session is one tokio task that owns a [`TurnResolver`] and processes
//! its events strictly one at a time: input changes and submissions from
//! [`SessionHandle`]s, dictionary results from lookup tasks, and ticks from
//! the session's single countdown interval.
//!
//! Ordering rules:
//! - a dictionary result is applied only if its turn is still current;
//!   once the countdown has forfeited that turn the result is dropped
//! - while a lookup is in flight, further submissions for the turn are ignored
//! - when a dictionary result and a tick are ready together, the result goes first

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;
use crate::client::Dictionary;
use crate::config::GameConfig;
use crate::error::{GameResult, ShiritoriError};
use crate::game::{GameSnapshot, PendingLookup, Submission, TurnOutcome, TurnResolver};

const OUTCOME_CHANNEL_CAPACITY: usize = 64;

enum SessionCommand {
    SetPendingWord(String),
    Submit(oneshot::Sender<Submission>),
    Snapshot(oneshot::Sender<GameSnapshot>),
}

struct LookupFinished {
    lookup: PendingLookup,
    exists: bool,
}

/// Entry point for starting game sessions
pub struct GameSession {
    resolver: TurnResolver,
    dictionary: Arc<dyn Dictionary>,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    lookup_tx: mpsc::UnboundedSender<LookupFinished>,
    lookup_rx: mpsc::UnboundedReceiver<LookupFinished>,
    snapshots: watch::Sender<GameSnapshot>,
    outcomes: broadcast::Sender<TurnOutcome>,
    cancel: CancellationToken,
}

impl GameSession {
    /// Start a new game on the current tokio runtime
    pub fn spawn(config: GameConfig, dictionary: Arc<dyn Dictionary>) -> SessionHandle {
        let id = Uuid::new_v4();
        let tick = config.tick_interval();
        let resolver = TurnResolver::new(config);

        let (command_tx, commands) = mpsc::unbounded_channel();
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(resolver.state().snapshot());
        let (outcomes, _) = broadcast::channel(OUTCOME_CHANNEL_CAPACITY);
        let cancel = CancellationToken::new();

        let session = GameSession {
            resolver,
            dictionary,
            commands,
            lookup_tx,
            lookup_rx,
            snapshots,
            outcomes: outcomes.clone(),
            cancel: cancel.clone(),
        };

        let span = info_span!("game_session", session_id = %id);
        let task = tokio::spawn(session.run(tick).instrument(span));

        SessionHandle {
            id,
            commands: command_tx,
            snapshots: snapshot_rx,
            outcomes,
            cancel,
            task: Arc::new(Mutex::new(Some(task))),
        }
    }

    async fn run(mut self, tick: std::time::Duration) {
        info!("Game session started");

        let mut ticker = interval_at(Instant::now() + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                command = self.commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(finished) = self.lookup_rx.recv() => {
                    Some(self.resolver.complete_lookup(finished.lookup, finished.exists))
                }
                _ = ticker.tick() => {
                    debug!(remaining = self.resolver.state().remaining_seconds(), "Tick");
                    self.resolver.tick()
                }
            };

            if let Some(outcome) = outcome {
                // every turn starts with a full second before its first tick
                if outcome.advances_turn() {
                    ticker.reset();
                }
                let _ = self.outcomes.send(outcome);
            }

            self.publish();
        }

        // stop any lookup still running for this session
        self.cancel.cancel();
        info!("Game session stopped");
    }

    fn handle_command(&mut self, command: SessionCommand) -> Option<TurnOutcome> {
        match command {
            SessionCommand::SetPendingWord(text) => {
                self.resolver.set_pending_word(text);
                None
            }
            SessionCommand::Submit(reply) => {
                let submission = self.resolver.submit();
                let outcome = match &submission {
                    Submission::Resolved(outcome) => Some(outcome.clone()),
                    Submission::AwaitingLookup(lookup) => {
                        self.start_lookup(lookup.clone());
                        None
                    }
                    Submission::Busy => None,
                };
                let _ = reply.send(submission);
                outcome
            }
            SessionCommand::Snapshot(reply) => {
                let _ = reply.send(self.resolver.state().snapshot());
                None
            }
        }
    }

    fn start_lookup(&self, lookup: PendingLookup) {
        let dictionary = Arc::clone(&self.dictionary);
        let results = self.lookup_tx.clone();
        let cancel = self.cancel.child_token();

        debug!(word = %lookup.word, turn = lookup.turn_number, "Starting dictionary lookup");

        tokio::spawn(
            async move {
                let word = lookup.word.clone();
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    exists = dictionary.exists(&word) => {
                        let _ = results.send(LookupFinished { lookup, exists });
                    }
                }
            }
            .in_current_span(),
        );
    }

    fn publish(&self) {
        let next = self.resolver.state().snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

/// Cloneable handle used by presentation layers to drive a session
#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::UnboundedSender<SessionCommand>,
    snapshots: watch::Receiver<GameSnapshot>,
    outcomes: broadcast::Sender<TurnOutcome>,
    cancel: CancellationToken,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn send(&self, command: SessionCommand, operation: &str) -> GameResult<()> {
        self.commands
            .send(command)
            .map_err(|_| ShiritoriError::session_closed(operation))
    }

    /// Replace the active player's in-progress input
    pub fn set_pending_word(&self, text: impl Into<String>) -> GameResult<()> {
        self.send(SessionCommand::SetPendingWord(text.into()), "set_pending_word")
    }

    /// Submit the pending word; the final verdict of a dictionary lookup
    /// arrives later on [`SessionHandle::outcomes`]
    pub async fn submit(&self) -> GameResult<Submission> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Submit(reply), "submit")?;
        response.await.map_err(|_| ShiritoriError::session_closed("submit"))
    }

    /// Type a whole word and submit it
    pub async fn submit_word(&self, word: impl Into<String>) -> GameResult<Submission> {
        self.set_pending_word(word)?;
        self.submit().await
    }

    /// Current state, after every command sent before this call
    pub async fn snapshot(&self) -> GameResult<GameSnapshot> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Snapshot(reply), "snapshot")?;
        response.await.map_err(|_| ShiritoriError::session_closed("snapshot"))
    }

    /// Change notifications carrying the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    /// Every resolved submission, lookup and forfeiture
    pub fn outcomes(&self) -> broadcast::Receiver<TurnOutcome> {
        self.outcomes.subscribe()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Stop the countdown and the session task; waits for the task to exit
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        if let Some(task) = self.task.lock().await.take() {
            let _ = task.await;
        }
    }
}
