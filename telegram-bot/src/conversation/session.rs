//! Per-admin conversation sessions.
//!
//! Each admin owns one slot. The map lock is held only to find or create the slot; the slot lock
//! is held for the whole step, so updates from one admin are processed one at a time while other
//! admins proceed independently. An IDLE slot is removed once its last step releases it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use super::state::ConversationState;

type Slot = Arc<Mutex<Option<ConversationState>>>;

/// Session guard for one admin; `None` inside means IDLE.
pub type SessionGuard = OwnedMutexGuard<Option<ConversationState>>;

#[derive(Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<HashMap<i64, Slot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, admin_id: i64) -> Slot {
        let mut slots = self.slots.lock().await;
        slots.entry(admin_id).or_default().clone()
    }

    /// Locks the admin's session until the guard is dropped.
    pub async fn lock(&self, admin_id: i64) -> SessionGuard {
        self.slot(admin_id).await.lock_owned().await
    }

    /// Current state, waiting for any in-flight step of this admin to finish.
    pub async fn current(&self, admin_id: i64) -> Option<ConversationState> {
        let slot = self.slots.lock().await.get(&admin_id).cloned();
        match slot {
            Some(slot) => *slot.lock().await,
            None => None,
        }
    }

    /// Drops the admin's slot if it is IDLE and nobody else holds or waits on it.
    pub async fn release(&self, admin_id: i64) {
        let mut slots = self.slots.lock().await;
        let idle = match slots.get(&admin_id) {
            Some(slot) => {
                Arc::strong_count(slot) == 1
                    && slot.try_lock().map(|state| state.is_none()).unwrap_or(false)
            }
            None => false,
        };
        if idle {
            slots.remove(&admin_id);
        }
    }

    /// Number of admins with a live slot.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
