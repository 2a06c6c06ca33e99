//! Deferred reaction execution.
//!
//! An accepted reaction runs on its own task: it awaits the resolver, then
//! holds the outcome for a fixed presentation delay so the furnace animation
//! can play. Every task carries a child of the scheduler's
//! [`CancellationToken`]; cancelling resolves the task to `None`, meaning
//! "no outcome".

use std::sync::Arc;
use std::time::Duration;

use alchemy_types::ReactionOutcome;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::resolver::{ReactionRequest, Resolver};

/// Spawns reaction tasks and owns their shared cancellation token.
#[derive(Debug)]
pub struct ReactionScheduler {
    delay: Duration,
    cancel: CancellationToken,
}

impl ReactionScheduler {
    /// Create a scheduler that holds each outcome for `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: CancellationToken::new(),
        }
    }

    /// Presentation delay applied after resolution.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Start resolving `request` in the background.
    pub fn schedule<R>(&self, resolver: Arc<R>, request: ReactionRequest) -> PendingReaction
    where
        R: Resolver + 'static,
    {
        let token = self.cancel.child_token();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            let work = async {
                let outcome = resolver.resolve(&request).await;
                tokio::time::sleep(delay).await;
                outcome
            };
            tokio::select! {
                () = token.cancelled() => {
                    debug!(key = %request.key(), "reaction cancelled");
                    None
                }
                outcome = work => Some(outcome),
            }
        });
        PendingReaction { handle }
    }

    /// Cancel every reaction spawned by this scheduler.
    pub fn cancel_all(&self) {
        self.cancel.cancel();
    }

    /// Whether [`cancel_all`](Self::cancel_all) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ReactionScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Handle to one in-flight reaction.
#[derive(Debug)]
pub struct PendingReaction {
    handle: JoinHandle<Option<ReactionOutcome>>,
}

impl PendingReaction {
    /// Whether the task has finished and [`outcome`](Self::outcome) will not wait.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task. `None` if it was cancelled or panicked.
    pub async fn outcome(self) -> Option<ReactionOutcome> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "reaction task failed");
                None
            }
        }
    }
}
