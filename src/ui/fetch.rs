//! Fetch tasks and the per-view bookkeeping that decides whether a
//! completed fetch may still touch view state.

use std::sync::mpsc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::MealDbClient;
use crate::ui::events::AppEvent;

/// Tracks the one in-flight fetch a view may have.
///
/// Every mount (or parameter change) starts a new generation; unmounting
/// retires the current one. A completion is applied only when it carries
/// the current generation and nothing has completed for it yet.
#[derive(Debug, Default)]
pub struct FetchSlot {
    generation: u64,
    pending: bool,
    task: Option<JoinHandle<()>>,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort whatever is running and open a new generation.
    pub fn begin(&mut self) -> u64 {
        self.abort();
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    pub fn attach(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// The view went away; nothing in flight may be applied.
    pub fn retire(&mut self) {
        self.abort();
        self.generation += 1;
        self.pending = false;
    }

    /// Claim a completion. Returns false for stale or duplicate results.
    pub fn complete(&mut self, generation: u64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.pending = false;
        self.task = None;
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns API calls on the tokio runtime and reports each outcome as one
/// [`AppEvent`] on the UI channel.
#[derive(Clone)]
pub struct Fetcher {
    client: MealDbClient,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(client: MealDbClient, runtime: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        Self {
            client,
            runtime,
            events,
        }
    }

    pub fn search(&self, generation: u64, term: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = client.search(&term).await;
            if events
                .send(AppEvent::MealsFetched { generation, result })
                .is_err()
            {
                tracing::trace!("meal list result dropped (UI gone)");
            }
        })
    }

    pub fn lookup(&self, generation: u64, id: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = client.lookup(&id).await;
            if events
                .send(AppEvent::MealFetched {
                    generation,
                    id,
                    result,
                })
                .is_err()
            {
                tracing::trace!("meal detail result dropped (UI gone)");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_of_current_generation_is_accepted_once() {
        let mut slot = FetchSlot::new();
        let generation = slot.begin();
        assert!(slot.is_pending());
        assert!(slot.complete(generation));
        assert!(!slot.complete(generation));
        assert!(!slot.is_pending());
    }

    #[test]
    fn restart_rejects_previous_generation() {
        let mut slot = FetchSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert_ne!(first, second);
        assert!(!slot.complete(first));
        assert!(slot.complete(second));
    }

    #[test]
    fn retire_rejects_in_flight_generation() {
        let mut slot = FetchSlot::new();
        let generation = slot.begin();
        slot.retire();
        assert!(!slot.complete(generation));
        assert!(!slot.is_pending());
    }

    #[test]
    fn never_started_slot_rejects_everything() {
        let mut slot = FetchSlot::new();
        assert!(!slot.complete(0));
        assert_eq!(slot.generation(), 0);
    }
}
