use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::invoices::services::InvoiceDraftSession;
use crate::modules::taxes::models::Jurisdiction;

/// Drafts untouched for this long are dropped
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct StoredDraft {
    session: InvoiceDraftSession,
    last_touched: Instant,
}

impl StoredDraft {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) >= idle_timeout
    }
}

/// In-memory holder for draft sessions served over HTTP.
///
/// Each session belongs to one client; the store only keys them by id.
/// Nothing is persisted and sessions vanish with the process. Reads and
/// updates refresh a draft; drafts left idle past the timeout are evicted on
/// the next create or sweep.
pub struct DraftStore {
    sessions: RwLock<HashMap<Uuid, StoredDraft>>,
    max_sessions: usize,
    idle_timeout: Duration,
    default_jurisdiction: Jurisdiction,
}

impl DraftStore {
    pub fn new(max_sessions: usize, default_jurisdiction: Jurisdiction) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            default_jurisdiction,
        }
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Open a new draft, using the configured jurisdiction when none is given
    pub async fn create(
        &self,
        jurisdiction: Option<Jurisdiction>,
    ) -> Result<(Uuid, InvoiceDraftSession)> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.max_sessions {
            self.evict_idle_locked(&mut sessions, now);
        }

        if sessions.len() >= self.max_sessions {
            warn!(
                max_sessions = self.max_sessions,
                "Draft session limit reached"
            );
            return Err(AppError::validation(format!(
                "Too many open drafts (limit {})",
                self.max_sessions
            )));
        }

        let id = Uuid::new_v4();
        let session =
            InvoiceDraftSession::new(jurisdiction.unwrap_or(self.default_jurisdiction));
        sessions.insert(
            id,
            StoredDraft {
                session: session.clone(),
                last_touched: now,
            },
        );

        info!(draft_id = %id, jurisdiction = %session.jurisdiction(), "Draft created");

        Ok((id, session))
    }

    /// Snapshot of a draft
    pub async fn get(&self, id: Uuid) -> Result<InvoiceDraftSession> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or_else(|| Self::missing(id))?;
        stored.last_touched = Instant::now();

        Ok(stored.session.clone())
    }

    /// Apply `change` to a draft and return the updated snapshot.
    ///
    /// The change runs on a copy; a failing change leaves the stored draft untouched.
    pub async fn update<F>(&self, id: Uuid, change: F) -> Result<InvoiceDraftSession>
    where
        F: FnOnce(&mut InvoiceDraftSession) -> Result<()>,
    {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or_else(|| Self::missing(id))?;
        stored.last_touched = Instant::now();

        let mut updated = stored.session.clone();
        change(&mut updated)?;
        stored.session = updated.clone();

        Ok(updated)
    }

    /// Drop a draft
    pub async fn discard(&self, id: Uuid) -> Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!(draft_id = %id, "Draft discarded"))
            .ok_or_else(|| Self::missing(id))
    }

    /// Drop every draft idle past the timeout; returns how many were dropped
    pub async fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now()).await
    }

    async fn evict_idle_at(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions, now)
    }

    fn evict_idle_locked(&self, sessions: &mut HashMap<Uuid, StoredDraft>, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_idle(now, self.idle_timeout));
        let evicted = before - sessions.len();

        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle drafts");
        }
        evicted
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn missing(id: Uuid) -> AppError {
        AppError::not_found(format!("Draft {}", id))
    }
}
