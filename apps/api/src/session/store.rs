use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::session::form::FormSession;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session limit of {capacity} reached")]
    Full { capacity: usize },
}

struct Entry {
    session: FormSession,
    last_touched: DateTime<Utc>,
}

/// In-memory registry of live form sessions.
///
/// Each access takes the lock for one synchronous session operation, so a
/// session only ever has one writer at a time. Every access refreshes the
/// session's idle clock; sessions idle for longer than `idle_ttl` are evicted
/// when a new session is created. Nothing outlives the process.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    capacity: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity,
            idle_ttl,
        }
    }

    pub async fn create(&self, session: FormSession) -> Result<Uuid, StoreError> {
        self.create_at(session, Utc::now()).await
    }

    async fn create_at(&self, session: FormSession, now: DateTime<Utc>) -> Result<Uuid, StoreError> {
        let mut sessions = self.sessions.write().await;
        evict_idle(&mut sessions, now, self.idle_ttl);

        if sessions.len() >= self.capacity {
            return Err(StoreError::Full {
                capacity: self.capacity,
            });
        }
        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Entry {
                session,
                last_touched: now,
            },
        );
        info!(session_id = %id, live = sessions.len(), "Created form session");
        Ok(id)
    }

    /// Runs `f` against the session, or returns `None` if it does not exist.
    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&FormSession) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_touched = Utc::now();
        Some(f(&entry.session))
    }

    /// Runs a mutation against the session, or returns `None` if it does not exist.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut FormSession) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_touched = Utc::now();
        Some(f(&mut entry.session))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Dropped form session");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn evict_idle(sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>, idle_ttl: Duration) {
    let before = sessions.len();
    sessions.retain(|_, entry| now - entry.last_touched <= idle_ttl);
    let evicted = before - sessions.len();
    if evicted > 0 {
        info!(evicted, live = sessions.len(), "Evicted idle form sessions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fields::FieldRef;

    fn store(capacity: usize) -> SessionStore {
        SessionStore::new(capacity, Duration::minutes(30))
    }

    #[tokio::test]
    async fn test_create_read_update_remove() {
        let store = store(4);
        let id = store.create(FormSession::default()).await.unwrap();

        let updated = store
            .update(id, |session| session.update_field(FieldRef::Name, "Jane").is_ok())
            .await;
        assert_eq!(updated, Some(true));

        let name = store.read(id, |session| session.record().name.clone()).await;
        assert_eq!(name.as_deref(), Some("Jane"));

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.read(id, |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_is_enforced_for_active_sessions() {
        let store = store(1);
        store.create(FormSession::default()).await.unwrap();
        let err = store.create(FormSession::default()).await.unwrap_err();
        assert_eq!(err, StoreError::Full { capacity: 1 });
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted_to_make_room() {
        let store = store(1);
        let abandoned = store.create(FormSession::default()).await.unwrap();

        let later = Utc::now() + Duration::minutes(31);
        let fresh = store.create_at(FormSession::default(), later).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.read(abandoned, |_| ()).await.is_none());
        assert!(store.read(fresh, |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn test_touched_sessions_survive_eviction() {
        let store = store(2);
        let t0 = Utc::now();
        let kept = store.create_at(FormSession::default(), t0).await.unwrap();
        let dropped = store.create_at(FormSession::default(), t0).await.unwrap();

        store.sessions.write().await.get_mut(&kept).unwrap().last_touched =
            t0 + Duration::minutes(20);

        store
            .create_at(FormSession::default(), t0 + Duration::minutes(40))
            .await
            .unwrap();

        assert!(store.read(kept, |_| ()).await.is_some());
        assert!(store.read(dropped, |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_update_is_none() {
        let store = store(1);
        assert!(store.update(Uuid::new_v4(), |_| ()).await.is_none());
    }
}
