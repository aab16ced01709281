pub mod action;
pub mod reducer;
pub mod state;

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use flume::{Receiver, Sender};
use tracing::{debug, trace};

pub use action::{Action, Slice};
pub use reducer::transition;
pub use state::AppState;

struct Subscriber {
    interests: Vec<Slice>,
    tx: Sender<Slice>,
}

/// Owner of the one [`AppState`] instance of a running application.
///
/// Readers take cheap snapshots; every change goes through [`Store::dispatch`],
/// which applies [`transition`] and queues a notification for each subscriber
/// interested in the slice that actually changed.
pub struct Store {
    state: ArcSwap<AppState>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: ArcSwap::from_pointee(state),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.load_full()
    }

    /// Applies `action` before returning. Subscribers only see the change
    /// once they drain their queue.
    pub fn dispatch(&self, action: Action) {
        let slice = action.slice();
        let name = action.name();

        let mut next_state = None;
        let previous = self.state.rcu(|current| {
            let next = Arc::new(transition(current, action.clone()));
            next_state = Some(next.clone());
            next
        });

        let changed = next_state
            .map(|next| !previous.slice_eq(&next, slice))
            .unwrap_or(false);

        if changed {
            debug!(action = name, slice = %slice, "state updated");
            self.notify(slice);
        } else {
            trace!(action = name, slice = %slice, "dispatch left state unchanged");
        }
    }

    /// Registers a consumer of the given slices.
    pub fn subscribe(&self, interests: &[Slice]) -> Subscription {
        let (tx, rx) = flume::unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscriber {
                interests: interests.to_vec(),
                tx,
            });
        Subscription { rx }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, slice: Slice) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|s| {
            if !s.interests.contains(&slice) {
                return !s.tx.is_disconnected();
            }
            s.tx.send(slice).is_ok()
        });
    }
}

/// Queue of slice-change notifications for one consumer.
pub struct Subscription {
    rx: Receiver<Slice>,
}

impl Subscription {
    /// Takes every pending notification, each slice at most once, in the
    /// order the changes happened.
    pub fn drain(&self) -> Vec<Slice> {
        let mut slices = Vec::new();
        for slice in self.rx.try_iter() {
            if !slices.contains(&slice) {
                slices.push(slice);
            }
        }
        slices
    }
}
